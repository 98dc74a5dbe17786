use thiserror::Error;

/// Errors raised while configuring a [`ComparisonModel`].
///
/// Configuration failures surface before any comparison runs; the
/// comparator itself never produces domain errors for well-formed input.
///
/// [`ComparisonModel`]: crate::ComparisonModel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The model has no notion of key expressions (scalar models).
    #[error("comparison model does not support key expressions (locator \"{locator}\")")]
    KeyExpressionsUnsupported {
        /// The locator prefix the caller attempted to configure.
        locator: String,
    },
    /// A key expression must contain at least one non-whitespace character.
    #[error("key expression for locator \"{locator}\" must not be empty")]
    EmptyKeyExpression {
        /// The locator prefix the empty expression was registered under.
        locator: String,
    },
}
