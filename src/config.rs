//! Variant rule configuration.
//!
//! Optional rules change which modifiers producers emit. They are passed
//! explicitly to every producer instead of being read from global state,
//! so the same inputs always produce the same modifiers.

use crate::error::{RulesError, RulesResult};
use serde::{Deserialize, Serialize};

/// Switches for optional rule variants.
///
/// Every switch defaults to off. Missing keys in JSON input fall back to
/// their defaults.
///
/// # Examples
///
/// ```rust
/// use rollcore::VariantRules;
///
/// let rules = VariantRules::from_json(r#"{ "automatic_bonus_progression": true }"#).unwrap();
/// assert!(rules.automatic_bonus_progression);
/// assert!(!rules.proficiency_without_level);
///
/// let same = VariantRules::new().with_automatic_bonus_progression(true);
/// assert_eq!(rules, same);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantRules {
    /// Grant potency bonuses by level instead of from magic equipment.
    pub automatic_bonus_progression: bool,
    /// Exclude character level from proficiency bonuses.
    pub proficiency_without_level: bool,
}

impl VariantRules {
    /// Create a configuration with every variant disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> RulesResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse variant rules");
            RulesError::InvalidConfig(e.to_string())
        })
    }

    /// Set the automatic bonus progression switch.
    pub fn with_automatic_bonus_progression(mut self, enabled: bool) -> Self {
        self.automatic_bonus_progression = enabled;
        self
    }

    /// Set the proficiency without level switch.
    pub fn with_proficiency_without_level(mut self, enabled: bool) -> Self {
        self.proficiency_without_level = enabled;
        self
    }
}
