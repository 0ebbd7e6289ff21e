//! Error types for modifier construction and rule configuration.
//!
//! Stacking and degree classification never fail; every error the crate
//! produces is raised while building inputs, before a statistic is resolved.

use thiserror::Error;

/// Errors raised while constructing modifiers or loading variant rules.
///
/// # Examples
///
/// ```rust
/// use rollcore::RulesError;
///
/// let err = RulesError::InvalidProficiencyRank(7);
/// println!("{}", err); // "Invalid proficiency rank: 7 (expected 0..=4)"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RulesError {
    /// A proficiency rank outside `0..=4` was supplied.
    ///
    /// Ranks are never clamped: an out-of-range rank is a caller defect.
    #[error("Invalid proficiency rank: {0} (expected 0..=4)")]
    InvalidProficiencyRank(i64),

    /// A modifier name or statistic slug was empty.
    #[error("Name must not be empty")]
    EmptyName,

    /// Variant-rule configuration could not be parsed.
    #[error("Invalid variant rule configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for rule construction.
pub type RulesResult<T> = Result<T, RulesError>;
