//! Modifier module.
//!
//! A `Modifier` is a single named, typed numeric adjustment to a
//! statistic. Modifiers are immutable value objects: whether one is
//! enabled is decided by the stacking pass of the aggregator that holds
//! it, never stored on the modifier itself.

use crate::error::RulesResult;
use crate::slug::Slug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of modifier types.
///
/// Every type except `Untyped` is subject to stacking suppression:
/// at most one bonus and one penalty of a given type contribute.
///
/// # Examples
///
/// ```rust
/// use rollcore::ModifierType;
///
/// assert_eq!(ModifierType::Status.as_str(), "status");
/// assert_eq!(ModifierType::ALL.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierType {
    /// Derived from an ability score.
    Ability,
    /// Derived from level and proficiency rank.
    Proficiency,
    /// Situational advantages or hindrances.
    Circumstance,
    /// Granted by equipment.
    Item,
    /// Spells, conditions and other effects.
    Status,
    /// Granted by progression variants independent of equipment.
    Potency,
    /// Always stacks.
    Untyped,
}

impl ModifierType {
    /// Every modifier type in declaration order.
    pub const ALL: [ModifierType; 7] = [
        ModifierType::Ability,
        ModifierType::Proficiency,
        ModifierType::Circumstance,
        ModifierType::Item,
        ModifierType::Status,
        ModifierType::Potency,
        ModifierType::Untyped,
    ];

    /// Lowercase name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ModifierType::Ability => "ability",
            ModifierType::Proficiency => "proficiency",
            ModifierType::Circumstance => "circumstance",
            ModifierType::Item => "item",
            ModifierType::Status => "status",
            ModifierType::Potency => "potency",
            ModifierType::Untyped => "untyped",
        }
    }
}

impl fmt::Display for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, typed, valued adjustment.
///
/// `name`, `value` and `kind` are fixed at construction. The name is the
/// modifier's identity within a statistic: a second modifier with the same
/// name is a duplicate.
///
/// # Examples
///
/// ```rust
/// use rollcore::{Modifier, ModifierType};
///
/// let inspired = Modifier::new("inspire-courage", 1, ModifierType::Status)
///     .unwrap()
///     .with_source("bard");
///
/// assert_eq!(inspired.value(), 1);
/// assert_eq!(inspired.source(), Some("bard"));
/// assert_eq!(inspired.to_string(), "inspire-courage +1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    name: Slug,
    value: i32,
    #[serde(rename = "type")]
    kind: ModifierType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default)]
    ignored: bool,
}

impl Modifier {
    /// Create a new modifier.
    ///
    /// Fails with `RulesError::EmptyName` when `name` is empty.
    pub fn new(name: impl AsRef<str>, value: i32, kind: ModifierType) -> RulesResult<Self> {
        Ok(Self {
            name: Slug::new(name)?,
            value,
            kind,
            source: None,
            ignored: false,
        })
    }

    /// Create a modifier from an already-validated slug.
    pub fn from_slug(name: Slug, value: i32, kind: ModifierType) -> Self {
        Self {
            name,
            value,
            kind,
            source: None,
            ignored: false,
        }
    }

    /// Create an untyped modifier.
    pub fn untyped(name: impl AsRef<str>, value: i32) -> RulesResult<Self> {
        Self::new(name, value, ModifierType::Untyped)
    }

    /// Attach a free-form label describing where this modifier came from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Mark this modifier as ignored.
    ///
    /// Ignored modifiers keep their name in a statistic but never
    /// contribute and never suppress another modifier.
    pub fn with_ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    /// Identity of this modifier within a statistic.
    pub fn name(&self) -> &Slug {
        &self.name
    }

    /// Signed contribution to the total when enabled.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The type that decides how this modifier stacks.
    pub fn kind(&self) -> ModifierType {
        self.kind
    }

    /// Where the modifier came from, if recorded.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether the modifier is excluded from stacking.
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Whether the value is a bonus. Zero counts as a bonus.
    pub fn is_bonus(&self) -> bool {
        self.value >= 0
    }

    /// Whether the value is negative.
    pub fn is_penalty(&self) -> bool {
        self.value < 0
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.name, self.value)
    }
}
