//! Law-style properties of the comparator under the scalar model.

use proptest::prelude::*;
use seqdiff_core::{compare, DiffFactory, DiffKind, ScalarModel};

fn arb_sequence() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[A-E]").unwrap(),
        0..8,
    )
}

fn kind_count(diffs: &[seqdiff_core::DiffDetail<String>], kind: DiffKind) -> usize {
    diffs.iter().filter(|diff| diff.kind() == kind).count()
}

proptest! {
    #[test]
    fn comparing_a_sequence_with_itself_is_identical(sequence in arb_sequence()) {
        let result = compare(&sequence, &sequence, &ScalarModel, "", &DiffFactory::default());
        prop_assert!(result.identical());
    }

    #[test]
    fn matched_counts_balance(left in arb_sequence(), right in arb_sequence()) {
        let result = compare(&left, &right, &ScalarModel, "", &DiffFactory::default());
        let diffs = result.into_diffs();
        let missing = kind_count(&diffs, DiffKind::Missing);
        let unexpected = kind_count(&diffs, DiffKind::Unexpected);
        // Matched elements pair one-to-one, so both sides account for the
        // same number of matches.
        prop_assert_eq!(left.len() - missing, right.len() - unexpected);
    }

    #[test]
    fn scalar_model_reports_no_content_changes(left in arb_sequence(), right in arb_sequence()) {
        let result = compare(&left, &right, &ScalarModel, "", &DiffFactory::default());
        prop_assert_eq!(kind_count(result.diffs(), DiffKind::Different), 0);
    }

    #[test]
    fn single_removal_yields_one_missing_diff(
        size in 1usize..8,
        seed in proptest::num::usize::ANY,
    ) {
        // Distinct elements, so nothing else can correspond to the
        // removed one.
        let left: Vec<String> = (0..size).map(|i| format!("e{i}")).collect();
        let removed = seed % size;
        let mut right = left.clone();
        right.remove(removed);

        let result = compare(&left, &right, &ScalarModel, "", &DiffFactory::default());
        let diffs = result.into_diffs();
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].kind(), DiffKind::Missing);
        let expected = format!("[{removed}]");
        prop_assert_eq!(diffs[0].locator().as_str(), expected.as_str());
    }

    #[test]
    fn single_insertion_yields_one_unexpected_diff(
        size in 1usize..8,
        seed in proptest::num::usize::ANY,
    ) {
        let left: Vec<String> = (0..size).map(|i| format!("e{i}")).collect();
        let inserted = seed % (size + 1);
        let mut right = left.clone();
        right.insert(inserted, "extra".to_owned());

        let result = compare(&left, &right, &ScalarModel, "", &DiffFactory::default());
        let diffs = result.into_diffs();
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].kind(), DiffKind::Unexpected);
        let expected = format!("[{inserted}]");
        prop_assert_eq!(diffs[0].locator().as_str(), expected.as_str());
    }
}
