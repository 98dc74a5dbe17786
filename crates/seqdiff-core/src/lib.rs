//! Structural sequence-diff engine with pluggable comparison semantics.
//!
//! `seqdiff-core` aligns two ordered sequences of opaque elements and
//! classifies every position on both sides as unchanged, `missing`,
//! `unexpected`, `moved`, or `different`. The notion of "equal" and
//! "loosely corresponds to" is supplied by a [`ComparisonModel`], so the
//! same engine serves scalar values and keyed structured records alike.
//! The engine itself never parses or tokenizes input; it operates on
//! already-materialized slices.
//!
//! ```
//! use seqdiff_core::{compare, DiffFactory, ScalarModel};
//!
//! let expected = vec!["A", "B", "C"];
//! let actual = vec!["A", "C"];
//! let factory = DiffFactory::default();
//! let result = compare(&expected, &actual, &ScalarModel, "", &factory);
//!
//! assert!(!result.identical());
//! assert_eq!(result.diffs()[0].to_string(), "missing list element 'B' at [1]");
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compare;
mod detail;
mod error;
mod locator;
mod model;
mod result;

pub use compare::compare;
pub use detail::{DiffDetail, DiffFactory, DiffKind};
pub use error::ConfigError;
pub use locator::Locator;
pub use model::{ComparisonModel, KeyedModel, ScalarModel};
pub use result::ArrayComparisonResult;

/// Returns the semantic version of the `seqdiff-core` crate.
///
/// ```
/// assert!(!seqdiff_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
