use std::fmt;

use serde::{Deserialize, Serialize};

/// A string path identifying the position of an element within a sequence.
///
/// The engine treats locators as opaque text; only a [`ComparisonModel`]
/// decides their shape. The scalar form is a bracketed index such as `[2]`,
/// but nested callers may substitute field names or longer paths.
///
/// [`ComparisonModel`]: crate::ComparisonModel
///
/// ```
/// # use seqdiff_core::Locator;
/// let locator = Locator::index(2);
/// assert_eq!(locator.as_str(), "[2]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// Creates a locator from an arbitrary path string.
    #[must_use]
    pub fn new<S>(path: S) -> Self
    where
        S: Into<String>,
    {
        Self(path.into())
    }

    /// Creates the bracketed index form used by list comparisons.
    ///
    /// ```
    /// # use seqdiff_core::Locator;
    /// assert_eq!(Locator::index(0).as_str(), "[0]");
    /// ```
    #[must_use]
    pub fn index(index: usize) -> Self {
        Self(format!("[{index}]"))
    }

    /// Returns a copy of this locator nested under the given path prefix.
    ///
    /// An empty prefix leaves the locator unchanged.
    ///
    /// ```
    /// # use seqdiff_core::Locator;
    /// let nested = Locator::index(1).prefixed("items");
    /// assert_eq!(nested.as_str(), "items[1]");
    /// ```
    #[must_use]
    pub fn prefixed(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            self.clone()
        } else {
            Self(format!("{prefix}{}", self.0))
        }
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
