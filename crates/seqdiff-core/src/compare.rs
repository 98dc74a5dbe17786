use crate::{ArrayComparisonResult, ComparisonModel, DiffDetail, DiffFactory, Locator};

/// Category label attached to every record produced by [`compare`].
const LIST_ELEMENT: &str = "list element";

/// Compares two sequences and classifies every element of both sides.
///
/// Alignment runs in a single left-to-right pass over both sequences.
/// Exactly equal elements anchor the walk; when the cursors disagree, the
/// comparator probes the remainder of each side for an equal or
/// corresponding partner and classifies accordingly:
///
/// - a left element with no partner anywhere on the right is `missing`;
/// - a right element with no partner anywhere on the left is `unexpected`;
/// - a left element re-appearing at a later right position is `moved`
///   (followed by a `different` record when the matched values are not
///   equal); the displaced partner of such a pair keeps its match
///   silently;
/// - a corresponding pair at the cursors with unequal values is
///   `different`.
///
/// Records are emitted in discovery order, which is deterministic for a
/// given pair of inputs and model. Locators are produced by
/// `model.sub_path` and nested under `base_path`. Comparing any sequence
/// with itself yields an identical result; duplicate values are
/// disambiguated purely by position. Empty sequences are valid inputs
/// (absent sequences are unrepresentable through `&[T]`).
///
/// A panic raised inside a model predicate propagates to the caller; the
/// comparator performs no recovery.
///
/// ```
/// # use seqdiff_core::{compare, DiffFactory, ScalarModel};
/// let left = vec!["A", "B", "C"];
/// let right = vec!["A", "C"];
/// let result = compare(&left, &right, &ScalarModel, "", &DiffFactory::default());
/// assert_eq!(result.diffs().len(), 1);
/// assert_eq!(result.diffs()[0].to_string(), "missing list element 'B' at [1]");
/// ```
pub fn compare<T, M>(
    left: &[T],
    right: &[T],
    model: &M,
    base_path: &str,
    factory: &DiffFactory<T>,
) -> ArrayComparisonResult<T>
where
    T: Clone,
    M: ComparisonModel<T> + ?Sized,
{
    Comparison {
        left,
        right,
        model,
        base_path,
        factory,
        left_taken: vec![false; left.len()],
        right_taken: vec![false; right.len()],
        diffs: Vec::new(),
    }
    .run()
}

struct Comparison<'a, T, M: ?Sized> {
    left: &'a [T],
    right: &'a [T],
    model: &'a M,
    base_path: &'a str,
    factory: &'a DiffFactory<T>,
    left_taken: Vec<bool>,
    right_taken: Vec<bool>,
    diffs: Vec<DiffDetail<T>>,
}

impl<T, M> Comparison<'_, T, M>
where
    T: Clone,
    M: ComparisonModel<T> + ?Sized,
{
    fn run(mut self) -> ArrayComparisonResult<T> {
        let mut i = 0;
        let mut j = 0;
        loop {
            while i < self.left.len() && self.left_taken[i] {
                i += 1;
            }
            while j < self.right.len() && self.right_taken[j] {
                j += 1;
            }
            match (i < self.left.len(), j < self.right.len()) {
                (false, false) => break,
                (true, false) => self.emit_missing(i),
                (false, true) => self.emit_unexpected(j),
                (true, true) => self.step(i, j),
            }
        }
        ArrayComparisonResult::from_diffs(self.diffs)
    }

    fn step(&mut self, i: usize, j: usize) {
        if self.model.equal(&self.left[i], &self.right[j]) {
            self.left_taken[i] = true;
            self.right_taken[j] = true;
            return;
        }
        if self.model.correspond(&self.left[i], &self.right[j]) {
            self.emit_different(i, j);
            self.left_taken[i] = true;
            self.right_taken[j] = true;
            return;
        }

        // Cursors disagree; probe the remainders for partners.
        let Some(target) = self.find_partner_in_right(i, j + 1) else {
            self.emit_missing(i);
            return;
        };
        let Some(origin) = self.find_partner_in_left(j, i + 1) else {
            self.emit_unexpected(j);
            return;
        };

        if target > i {
            // The left element lands later on the right: a rightward move.
            self.diffs.push(self.factory.moved(
                self.left[i].clone(),
                LIST_ELEMENT,
                self.left_locator(i),
                self.right_locator(target),
            ));
            if !self.model.equal(&self.left[i], &self.right[target]) {
                self.emit_different(i, target);
            }
            self.left_taken[i] = true;
            self.right_taken[target] = true;
        } else {
            // The element at the right cursor originates later on the
            // left; the leftward partner keeps its match silently.
            if !self.model.equal(&self.left[origin], &self.right[j]) {
                self.emit_different(origin, j);
            }
            self.left_taken[origin] = true;
            self.right_taken[j] = true;
        }
    }

    /// First untaken right index from `from` matching `left[i]`,
    /// preferring an exact match over a corresponding one.
    fn find_partner_in_right(&self, i: usize, from: usize) -> Option<usize> {
        let candidates =
            || (from..self.right.len()).filter(|&index| !self.right_taken[index]);
        candidates()
            .find(|&index| self.model.equal(&self.left[i], &self.right[index]))
            .or_else(|| {
                candidates()
                    .find(|&index| self.model.correspond(&self.left[i], &self.right[index]))
            })
    }

    /// First untaken left index from `from` matching `right[j]`,
    /// preferring an exact match over a corresponding one.
    fn find_partner_in_left(&self, j: usize, from: usize) -> Option<usize> {
        let candidates = || (from..self.left.len()).filter(|&index| !self.left_taken[index]);
        candidates()
            .find(|&index| self.model.equal(&self.left[index], &self.right[j]))
            .or_else(|| {
                candidates()
                    .find(|&index| self.model.correspond(&self.left[index], &self.right[j]))
            })
    }

    fn emit_missing(&mut self, i: usize) {
        self.diffs.push(self.factory.missing(
            self.left[i].clone(),
            LIST_ELEMENT,
            self.left_locator(i),
        ));
        self.left_taken[i] = true;
    }

    fn emit_unexpected(&mut self, j: usize) {
        self.diffs.push(self.factory.unexpected(
            self.right[j].clone(),
            LIST_ELEMENT,
            self.right_locator(j),
        ));
        self.right_taken[j] = true;
    }

    fn emit_different(&mut self, i: usize, j: usize) {
        self.diffs.push(self.factory.different(
            self.left[i].clone(),
            self.right[j].clone(),
            LIST_ELEMENT,
            self.left_locator(i),
        ));
    }

    fn left_locator(&self, i: usize) -> Locator {
        self.model.sub_path(self.left, i).prefixed(self.base_path)
    }

    fn right_locator(&self, j: usize) -> Locator {
        self.model.sub_path(self.right, j).prefixed(self.base_path)
    }
}
