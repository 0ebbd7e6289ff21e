//! Identifier module.
//!
//! Provides the `Slug` type, an interned string identifier used for
//! modifier names and statistic identifiers. Uses `Arc<str>` so the
//! same name can be shared across many modifiers cheaply.

use crate::error::{RulesError, RulesResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned, non-empty string identifier.
///
/// Modifier names are the deduplication key of a statistic, so two
/// slugs compare equal exactly when their text is equal.
///
/// # Examples
///
/// ```rust
/// use rollcore::Slug;
///
/// let athletics = Slug::new("athletics").unwrap();
/// let again: Slug = "athletics".parse().unwrap();
///
/// assert_eq!(athletics, again);
/// assert!(Slug::new("   ").is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slug(Arc<str>);

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::new(s).map_err(serde::de::Error::custom)
    }
}

impl Slug {
    /// Create a new `Slug`, rejecting empty or all-whitespace text.
    pub fn new(s: impl AsRef<str>) -> RulesResult<Self> {
        let s = s.as_ref();
        if s.trim().is_empty() {
            tracing::warn!("rejected empty slug");
            return Err(RulesError::EmptyName);
        }
        Ok(Self(Arc::from(s)))
    }

    /// Wrap a built-in name known to be non-empty.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(!s.trim().is_empty());
        Self(Arc::from(s))
    }

    /// Get the string representation of this `Slug`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollcore::Slug;
    ///
    /// let slug = Slug::new("str").unwrap();
    /// assert_eq!(slug.as_str(), "str");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Slug {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Slug {
    type Error = RulesError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = RulesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
