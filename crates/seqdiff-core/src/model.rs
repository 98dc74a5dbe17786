use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::{ConfigError, Locator};

/// Pluggable comparison semantics consumed by [`compare`].
///
/// A model supplies two predicates and a locator scheme:
///
/// - [`equal`](Self::equal) is the strict notion used to find unchanged
///   matches.
/// - [`correspond`](Self::correspond) is a looser predicate pairing
///   elements that represent the same logical item with changed content
///   (for example, same identity key). Implementations must guarantee
///   that `equal(a, b)` implies `correspond(a, b)`.
/// - [`sub_path`](Self::sub_path) maps a sequence position to a
///   human-readable [`Locator`].
///
/// Key expressions ([`add_key_expression`](Self::add_key_expression)) are
/// a setup-time concern: configure the model fully before sharing it
/// between comparisons. Predicate evaluation itself takes `&self` and may
/// run concurrently as long as the implementation is side-effect-free.
/// A panic inside any of these methods propagates to the `compare` caller
/// unmodified.
///
/// [`compare`]: crate::compare
pub trait ComparisonModel<T> {
    /// Strict equality between two elements.
    fn equal(&self, lhs: &T, rhs: &T) -> bool;

    /// Loose correspondence between two elements.
    fn correspond(&self, lhs: &T, rhs: &T) -> bool;

    /// Produces the locator for `sequence[index]`.
    ///
    /// The default renders the bracketed index form `[index]`.
    fn sub_path(&self, sequence: &[T], index: usize) -> Locator {
        let _ = sequence;
        Locator::index(index)
    }

    /// Registers a key expression deriving a correspondence key for
    /// elements reached via `locator`.
    ///
    /// Models without a notion of keys reject the call; the default does.
    fn add_key_expression(
        &mut self,
        locator: &str,
        key_expression: &str,
    ) -> Result<(), ConfigError> {
        let _ = key_expression;
        Err(ConfigError::KeyExpressionsUnsupported { locator: locator.to_owned() })
    }
}

/// Equality-based model for scalar element types.
///
/// Correspondence collapses to equality, so comparisons report scalar
/// changes as a `missing`/`unexpected` pair rather than a `different`.
///
/// ```
/// # use seqdiff_core::{ComparisonModel, ScalarModel};
/// let model = ScalarModel;
/// assert!(model.equal(&1, &1));
/// assert!(!model.correspond(&1, &2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarModel;

impl<T> ComparisonModel<T> for ScalarModel
where
    T: PartialEq,
{
    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }

    fn correspond(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

/// Key-expression driven model for structured [`serde_json::Value`]
/// elements.
///
/// Equality is deep JSON equality. Two objects correspond when any
/// registered key expression extracts the same key value from both, so a
/// record whose identity key survived a content change is paired as
/// `different` instead of disappearing and reappearing.
///
/// Expressions are dotted field paths (`"id"`, `"meta.id"`), registered
/// per locator prefix. An empty prefix applies at every path.
///
/// ```
/// # use seqdiff_core::{ComparisonModel, KeyedModel};
/// # use serde_json::json;
/// let mut model = KeyedModel::new();
/// model.add_key_expression("", "id").unwrap();
/// let before = json!({"id": 7, "name": "a"});
/// let after = json!({"id": 7, "name": "b"});
/// assert!(!model.equal(&before, &after));
/// assert!(model.correspond(&before, &after));
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyedModel {
    key_expressions: BTreeMap<String, String>,
}

impl KeyedModel {
    /// Creates a model with no key expressions registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered key expressions as `(locator, expression)`
    /// pairs in deterministic order.
    pub fn key_expressions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.key_expressions.iter().map(|(locator, expr)| (locator.as_str(), expr.as_str()))
    }

    fn keys_agree(&self, lhs: &JsonValue, rhs: &JsonValue) -> bool {
        self.key_expressions.values().any(|expression| {
            match (lookup(lhs, expression), lookup(rhs, expression)) {
                (Some(lhs_key), Some(rhs_key)) => lhs_key == rhs_key,
                _ => false,
            }
        })
    }
}

impl ComparisonModel<JsonValue> for KeyedModel {
    fn equal(&self, lhs: &JsonValue, rhs: &JsonValue) -> bool {
        lhs == rhs
    }

    fn correspond(&self, lhs: &JsonValue, rhs: &JsonValue) -> bool {
        lhs == rhs || self.keys_agree(lhs, rhs)
    }

    fn add_key_expression(
        &mut self,
        locator: &str,
        key_expression: &str,
    ) -> Result<(), ConfigError> {
        if key_expression.trim().is_empty() {
            return Err(ConfigError::EmptyKeyExpression { locator: locator.to_owned() });
        }
        self.key_expressions.insert(locator.to_owned(), key_expression.to_owned());
        Ok(())
    }
}

/// Resolves a dotted field path inside a JSON value.
fn lookup<'a>(value: &'a JsonValue, expression: &str) -> Option<&'a JsonValue> {
    let mut current = value;
    for field in expression.split('.') {
        current = current.as_object()?.get(field)?;
    }
    Some(current)
}
