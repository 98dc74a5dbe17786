//! Conformance fixtures for the alignment algorithm.
//!
//! Values are short strings; the model pairs values sharing the same
//! first character as corresponding, so `"B"` and `"B2"` represent the
//! same logical item with changed content.

use seqdiff_core::{compare, ComparisonModel, DiffDetail, DiffFactory};

struct FirstCharModel;

impl ComparisonModel<String> for FirstCharModel {
    fn equal(&self, lhs: &String, rhs: &String) -> bool {
        lhs == rhs
    }

    fn correspond(&self, lhs: &String, rhs: &String) -> bool {
        match (lhs.chars().next(), rhs.chars().next()) {
            (Some(lhs_first), Some(rhs_first)) => lhs_first == rhs_first,
            _ => false,
        }
    }
}

fn check(left: &[&str], right: &[&str], expected: &[DiffDetail<String>]) {
    let left: Vec<String> = left.iter().map(|s| (*s).to_owned()).collect();
    let right: Vec<String> = right.iter().map(|s| (*s).to_owned()).collect();
    let result = compare(&left, &right, &FirstCharModel, "", &DiffFactory::default());
    assert_eq!(result.identical(), expected.is_empty());
    assert_eq!(result.diffs(), expected);
}

fn factory() -> DiffFactory<String> {
    DiffFactory::default()
}

fn owned(value: &str) -> String {
    value.to_owned()
}

#[test]
fn identical_lists() {
    check(&["A", "B", "C"], &["A", "B", "C"], &[]);
}

#[test]
fn empty_lists() {
    check(&[], &[], &[]);
}

#[test]
fn removed_last() {
    check(
        &["A", "B", "C"],
        &["A", "B"],
        &[factory().missing(owned("C"), "list element", "[2]")],
    );
}

#[test]
fn removed_middle() {
    check(
        &["A", "B", "C"],
        &["A", "C"],
        &[factory().missing(owned("B"), "list element", "[1]")],
    );
}

#[test]
fn removed_first() {
    check(
        &["A", "B", "C"],
        &["B", "C"],
        &[factory().missing(owned("A"), "list element", "[0]")],
    );
}

#[test]
fn added_at_end() {
    check(
        &["A", "B", "C"],
        &["A", "B", "C", "X"],
        &[factory().unexpected(owned("X"), "list element", "[3]")],
    );
}

#[test]
fn added_in_between() {
    check(
        &["A", "B", "C"],
        &["A", "X", "B", "C"],
        &[factory().unexpected(owned("X"), "list element", "[1]")],
    );
}

#[test]
fn added_at_beginning() {
    check(
        &["A", "B", "C"],
        &["X", "A", "B", "C"],
        &[factory().unexpected(owned("X"), "list element", "[0]")],
    );
}

#[test]
fn swapped_neighbours() {
    check(
        &["A", "B", "C"],
        &["A", "C", "B"],
        &[factory().moved(owned("B"), "list element", "[1]", "[2]")],
    );
}

#[test]
fn swapped_ends() {
    check(
        &["A", "B", "C"],
        &["C", "B", "A"],
        &[factory().moved(owned("A"), "list element", "[0]", "[2]")],
    );
}

#[test]
fn ring_rotation() {
    check(
        &["A", "B", "C"],
        &["B", "C", "A"],
        &[factory().moved(owned("A"), "list element", "[0]", "[2]")],
    );
}

#[test]
fn changed_in_place() {
    check(
        &["A", "B", "C"],
        &["A", "B2", "C"],
        &[factory().different(owned("B"), owned("B2"), "list element", "[1]")],
    );
}

#[test]
fn removed_and_added() {
    check(
        &["A", "B", "C"],
        &["A", "X", "C"],
        &[
            factory().missing(owned("B"), "list element", "[1]"),
            factory().unexpected(owned("X"), "list element", "[1]"),
        ],
    );
}

#[test]
fn moved_and_changed() {
    check(
        &["A", "B", "C"],
        &["A", "C", "B2"],
        &[
            factory().moved(owned("B"), "list element", "[1]", "[2]"),
            factory().different(owned("B"), owned("B2"), "list element", "[1]"),
        ],
    );
}

#[test]
fn all_change_types() {
    check(
        &["A", "B", "C", "D", "E"],
        &["A", "X", "B", "D2", "C"],
        &[
            factory().unexpected(owned("X"), "list element", "[1]"),
            factory().moved(owned("C"), "list element", "[2]", "[4]"),
            factory().different(owned("D"), owned("D2"), "list element", "[3]"),
            factory().missing(owned("E"), "list element", "[4]"),
        ],
    );
}
