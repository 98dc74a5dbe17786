use serde::{Deserialize, Serialize};

use crate::DiffDetail;

/// The ordered outcome of one [`compare`] invocation.
///
/// Records appear in discovery order, which is deterministic for a given
/// pair of inputs and model. The result is immutable once returned.
///
/// [`compare`]: crate::compare
///
/// ```
/// # use seqdiff_core::{compare, DiffFactory, ScalarModel};
/// let left = vec!["a", "b"];
/// let result = compare(&left, &left, &ScalarModel, "", &DiffFactory::default());
/// assert!(result.identical());
/// assert!(result.diffs().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayComparisonResult<T> {
    diffs: Vec<DiffDetail<T>>,
}

impl<T> ArrayComparisonResult<T> {
    /// Builds a result from recorded diffs.
    #[must_use]
    pub fn from_diffs(diffs: Vec<DiffDetail<T>>) -> Self {
        Self { diffs }
    }

    /// Indicates whether the two sequences were found identical.
    #[must_use]
    pub fn identical(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Returns the recorded diffs in discovery order.
    #[must_use]
    pub fn diffs(&self) -> &[DiffDetail<T>] {
        &self.diffs
    }

    /// Returns the number of recorded diffs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    /// Indicates whether no diffs were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Returns an iterator over the recorded diffs.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffDetail<T>> {
        self.diffs.iter()
    }

    /// Consumes the result and returns the owned diffs.
    #[must_use]
    pub fn into_diffs(self) -> Vec<DiffDetail<T>> {
        self.diffs
    }
}

impl<T> IntoIterator for ArrayComparisonResult<T> {
    type Item = DiffDetail<T>;
    type IntoIter = std::vec::IntoIter<DiffDetail<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayComparisonResult<T> {
    type Item = &'a DiffDetail<T>;
    type IntoIter = std::slice::Iter<'a, DiffDetail<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.iter()
    }
}

impl<T> From<Vec<DiffDetail<T>>> for ArrayComparisonResult<T> {
    fn from(diffs: Vec<DiffDetail<T>>) -> Self {
        Self::from_diffs(diffs)
    }
}
