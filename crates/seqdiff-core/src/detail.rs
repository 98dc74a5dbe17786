use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::Locator;

/// Discriminates the four classification outcomes of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present on the left, absent on the right.
    Missing,
    /// Present on the right, absent on the left.
    Unexpected,
    /// Matched on both sides at inconsistent positions.
    Moved,
    /// Matched on both sides with changed content.
    Different,
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::Unexpected => f.write_str("unexpected"),
            Self::Moved => f.write_str("moved"),
            Self::Different => f.write_str("different"),
        }
    }
}

/// A single, immutable difference record.
///
/// The variants force downstream consumers to handle all four
/// classification outcomes exhaustively. Records are created through a
/// [`DiffFactory`] and collected in discovery order by the comparator.
///
/// ```
/// # use seqdiff_core::{DiffDetail, DiffFactory};
/// let factory = DiffFactory::default();
/// let diff = factory.missing("C", "list element", "[2]");
/// assert_eq!(diff.to_string(), "missing list element 'C' at [2]");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffDetail<T> {
    /// A left element without any counterpart on the right.
    Missing {
        /// The value found only on the left.
        value: T,
        /// What is being compared, e.g. `"list element"`.
        category: String,
        /// Position of the value in the left sequence.
        locator: Locator,
    },
    /// A right element without any counterpart on the left.
    Unexpected {
        /// The value found only on the right.
        value: T,
        /// What is being compared.
        category: String,
        /// Position of the value in the right sequence.
        locator: Locator,
    },
    /// A matched element whose position is inconsistent with the
    /// surrounding order.
    Moved {
        /// The matched value as it appears on the left.
        value: T,
        /// What is being compared.
        category: String,
        /// Position in the left sequence.
        from: Locator,
        /// Position in the right sequence.
        to: Locator,
    },
    /// A matched pair whose values are not equal.
    Different {
        /// The value on the left (expected).
        expected: T,
        /// The value on the right (actual).
        actual: T,
        /// What is being compared.
        category: String,
        /// Position of the pair, expressed at the left index.
        locator: Locator,
    },
}

impl<T> DiffDetail<T> {
    /// Returns the classification of this record.
    #[must_use]
    pub fn kind(&self) -> DiffKind {
        match self {
            Self::Missing { .. } => DiffKind::Missing,
            Self::Unexpected { .. } => DiffKind::Unexpected,
            Self::Moved { .. } => DiffKind::Moved,
            Self::Different { .. } => DiffKind::Different,
        }
    }

    /// Returns the category label describing what is being compared.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Missing { category, .. }
            | Self::Unexpected { category, .. }
            | Self::Moved { category, .. }
            | Self::Different { category, .. } => category,
        }
    }

    /// Returns the primary locator of the record.
    ///
    /// For moves, this is the origin position in the left sequence.
    #[must_use]
    pub fn locator(&self) -> &Locator {
        match self {
            Self::Missing { locator, .. }
            | Self::Unexpected { locator, .. }
            | Self::Different { locator, .. } => locator,
            Self::Moved { from, .. } => from,
        }
    }

    fn render(&self, format_value: &dyn Fn(&T) -> String) -> String {
        match self {
            Self::Missing { value, category, locator } => {
                format!("missing {category} '{}' at {locator}", format_value(value))
            }
            Self::Unexpected { value, category, locator } => {
                format!("unexpected {category} '{}' at {locator}", format_value(value))
            }
            Self::Moved { value, category, from, to } => {
                format!("moved {category} '{}' from {from} to {to}", format_value(value))
            }
            Self::Different { expected, actual, category, locator } => {
                format!(
                    "different {category} at {locator}: expected '{}', found '{}'",
                    format_value(expected),
                    format_value(actual)
                )
            }
        }
    }
}

impl<T> fmt::Display for DiffDetail<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&|value: &T| value.to_string()))
    }
}

/// Constructs [`DiffDetail`] records and renders them for diagnostics.
///
/// The factory carries the value formatter applied when a record is
/// [`describe`](Self::describe)d, so callers comparing non-`Display`
/// element types can inject their own conversion.
///
/// ```
/// # use seqdiff_core::DiffFactory;
/// let factory = DiffFactory::with_formatter(|value: &u32| format!("{value:#06x}"));
/// let diff = factory.unexpected(0xbeef, "register", "[1]");
/// assert_eq!(factory.describe(&diff), "unexpected register '0xbeef' at [1]");
/// ```
pub struct DiffFactory<T> {
    formatter: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> DiffFactory<T> {
    /// Creates a factory using the given value formatter.
    #[must_use]
    pub fn with_formatter<F>(formatter: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self { formatter: Arc::new(formatter) }
    }

    /// Builds a record for a value present on the left but absent on the
    /// right.
    #[must_use]
    pub fn missing<C, L>(&self, value: T, category: C, locator: L) -> DiffDetail<T>
    where
        C: Into<String>,
        L: Into<Locator>,
    {
        DiffDetail::Missing { value, category: category.into(), locator: locator.into() }
    }

    /// Builds a record for a value present on the right but absent on the
    /// left.
    #[must_use]
    pub fn unexpected<C, L>(&self, value: T, category: C, locator: L) -> DiffDetail<T>
    where
        C: Into<String>,
        L: Into<Locator>,
    {
        DiffDetail::Unexpected { value, category: category.into(), locator: locator.into() }
    }

    /// Builds a record for a matched value whose position changed.
    #[must_use]
    pub fn moved<C, L, M>(&self, value: T, category: C, from: L, to: M) -> DiffDetail<T>
    where
        C: Into<String>,
        L: Into<Locator>,
        M: Into<Locator>,
    {
        DiffDetail::Moved {
            value,
            category: category.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Builds a record for a matched pair whose values differ.
    #[must_use]
    pub fn different<C, L>(&self, expected: T, actual: T, category: C, locator: L) -> DiffDetail<T>
    where
        C: Into<String>,
        L: Into<Locator>,
    {
        DiffDetail::Different {
            expected,
            actual,
            category: category.into(),
            locator: locator.into(),
        }
    }

    /// Renders a record using the factory's value formatter.
    #[must_use]
    pub fn describe(&self, detail: &DiffDetail<T>) -> String {
        detail.render(&*self.formatter)
    }
}

impl<T> Clone for DiffFactory<T> {
    fn clone(&self) -> Self {
        Self { formatter: Arc::clone(&self.formatter) }
    }
}

impl<T> fmt::Debug for DiffFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffFactory").finish_non_exhaustive()
    }
}

impl<T> Default for DiffFactory<T>
where
    T: fmt::Display,
{
    fn default() -> Self {
        Self::with_formatter(|value: &T| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_covers_all_kinds() {
        let factory = DiffFactory::default();
        let renderings = [
            factory.missing("C", "list element", "[2]").to_string(),
            factory.unexpected("X", "list element", "[1]").to_string(),
            factory.moved("B", "list element", "[1]", "[2]").to_string(),
            factory.different("B", "B2", "list element", "[1]").to_string(),
        ];
        assert_eq!(
            renderings,
            [
                "missing list element 'C' at [2]",
                "unexpected list element 'X' at [1]",
                "moved list element 'B' from [1] to [2]",
                "different list element at [1]: expected 'B', found 'B2'",
            ]
        );
    }

    #[test]
    fn kind_and_accessors_match_variants() {
        let factory = DiffFactory::<&str>::default();
        let moved = factory.moved("B", "list element", "[1]", "[2]");
        assert_eq!(moved.kind(), DiffKind::Moved);
        assert_eq!(moved.category(), "list element");
        assert_eq!(moved.locator().as_str(), "[1]");
    }

    #[test]
    fn serde_tags_records_by_kind() {
        let factory = DiffFactory::<String>::default();
        let diff = factory.missing("C".to_owned(), "list element", "[2]");
        let json = serde_json::to_string(&diff).unwrap();
        assert_eq!(
            json,
            "{\"kind\":\"missing\",\"value\":\"C\",\"category\":\"list element\",\"locator\":\"[2]\"}"
        );
        let decoded: DiffDetail<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, diff);
    }
}
