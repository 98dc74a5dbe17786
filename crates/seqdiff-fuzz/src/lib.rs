//! Fuzzing harnesses for the seqdiff comparison engine.
//!
//! Each public function accepts raw bytes, derives structured inputs from
//! them, and exercises the comparator while asserting the invariants that
//! must hold for every input. The helpers are reusable both from
//! `cargo fuzz` targets and from smoke tests.
//!
//! ```
//! seqdiff_fuzz::fuzz_scalar_compare(b"seed bytes");
//! seqdiff_fuzz::fuzz_keyed_compare(b"seed bytes");
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use seqdiff_core::{compare, ComparisonModel, DiffFactory, DiffKind, KeyedModel, ScalarModel};
use serde_json::{json, Value};

const MAX_SEQUENCE_LEN: u8 = 12;
const MAX_STRING_LEN: u8 = 4;

/// Drives the comparator with random string sequences and a scalar model.
///
/// Asserts the structural invariants: self-comparison is identical, and
/// matched elements pair one-to-one across the two sides.
///
/// ```
/// seqdiff_fuzz::fuzz_scalar_compare(b"scalar");
/// ```
pub fn fuzz_scalar_compare(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(left) = random_strings(&mut unstructured) else {
        return;
    };
    let Ok(right) = random_strings(&mut unstructured) else {
        return;
    };

    let factory = DiffFactory::default();
    assert!(compare(&left, &left, &ScalarModel, "", &factory).identical());

    let diffs = compare(&left, &right, &ScalarModel, "", &factory).into_diffs();
    let missing = diffs.iter().filter(|diff| diff.kind() == DiffKind::Missing).count();
    let unexpected = diffs.iter().filter(|diff| diff.kind() == DiffKind::Unexpected).count();
    assert_eq!(left.len() - missing, right.len() - unexpected);
    assert!(diffs.iter().all(|diff| diff.kind() != DiffKind::Different));
}

/// Drives the comparator with random keyed JSON records.
///
/// The harness registers an `id` key expression so correspondence pairs
/// records across content changes; it must never panic.
///
/// ```
/// seqdiff_fuzz::fuzz_keyed_compare(b"keyed");
/// ```
pub fn fuzz_keyed_compare(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(left) = random_records(&mut unstructured) else {
        return;
    };
    let Ok(right) = random_records(&mut unstructured) else {
        return;
    };

    let mut model = KeyedModel::new();
    model.add_key_expression("", "id").expect("non-empty key expression");

    let factory = DiffFactory::default();
    assert!(compare(&left, &left, &model, "", &factory).identical());
    let result = compare(&left, &right, &model, "records", &factory);
    for diff in result.diffs() {
        // Rendering must hold for every record the comparator produces.
        assert!(!factory.describe(diff).is_empty());
    }
}

fn random_strings(unstructured: &mut Unstructured<'_>) -> arbitrary::Result<Vec<String>> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_SEQUENCE_LEN)?);
    let mut sequence = Vec::with_capacity(len);
    for _ in 0..len {
        sequence.push(random_string(unstructured)?);
    }
    Ok(sequence)
}

fn random_records(unstructured: &mut Unstructured<'_>) -> arbitrary::Result<Vec<Value>> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_SEQUENCE_LEN)?);
    let mut records = Vec::with_capacity(len);
    for _ in 0..len {
        let id = unstructured.int_in_range::<u8>(0..=9)?;
        let payload = random_string(unstructured)?;
        records.push(json!({ "id": id, "payload": payload }));
    }
    Ok(records)
}

fn random_string(unstructured: &mut Unstructured<'_>) -> arbitrary::Result<String> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        let byte = unstructured.int_in_range::<u8>(b'a'..=b'e')?;
        string.push(char::from(byte));
    }
    Ok(string)
}
