//! Ability and proficiency modifier factories.
//!
//! These produce the two modifiers almost every check starts from: the
//! ability modifier derived from a score, and the proficiency modifier
//! derived from level and rank.

use crate::config::VariantRules;
use crate::error::{RulesError, RulesResult};
use crate::modifier::{Modifier, ModifierType};
use crate::slug::Slug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// Short name used as the modifier name.
    pub fn slug(self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    /// The modifier granted by a score in this ability.
    pub fn modifier(self, score: i32) -> Modifier {
        ability_modifier(self, score)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Create the ability modifier for `score`.
///
/// The value is `floor((score - 10) / 2)`, rounding toward negative
/// infinity.
///
/// # Examples
///
/// ```rust
/// use rollcore::{ability_modifier, Ability, ModifierType};
///
/// let str_mod = ability_modifier(Ability::Strength, 14);
/// assert_eq!(str_mod.value(), 2);
/// assert_eq!(str_mod.kind(), ModifierType::Ability);
/// assert_eq!(str_mod.name().as_str(), "str");
///
/// assert_eq!(ability_modifier(Ability::Wisdom, 9).value(), -1);
/// ```
pub fn ability_modifier(ability: Ability, score: i32) -> Modifier {
    // Widened so extreme scores cannot overflow the subtraction.
    let value = (i64::from(score) - 10).div_euclid(2) as i32;
    Modifier::from_slug(Slug::from_static(ability.slug()), value, ModifierType::Ability)
}

/// Proficiency ranks, Untrained through Legendary.
///
/// # Examples
///
/// ```rust
/// use rollcore::ProficiencyRank;
///
/// assert_eq!(ProficiencyRank::try_from(2).unwrap(), ProficiencyRank::Expert);
/// assert!(ProficiencyRank::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyRank {
    Untrained = 0,
    Trained = 1,
    Expert = 2,
    Master = 3,
    Legendary = 4,
}

impl ProficiencyRank {
    /// Numeric rank, 0 through 4.
    pub fn rank(self) -> i64 {
        self as i64
    }

    /// Proficiency bonus at `level` under `rules`.
    ///
    /// Untrained is always worth 0. Trained and above are worth
    /// `level + 2 * rank`, or `2 * rank` when proficiency without level
    /// is in effect.
    ///
    /// Levels too large for the sum to fit in an `i32` saturate at
    /// `i32::MAX` rather than wrap.
    ///
    /// ```rust
    /// use rollcore::{ProficiencyRank, VariantRules};
    ///
    /// let rules = VariantRules::default();
    /// assert_eq!(ProficiencyRank::Master.bonus(7, &rules), 13);
    /// assert_eq!(ProficiencyRank::Legendary.bonus(u32::MAX, &rules), i32::MAX);
    /// ```
    pub fn bonus(self, level: u32, rules: &VariantRules) -> i32 {
        if self == ProficiencyRank::Untrained {
            return 0;
        }
        let rank_bonus = 2 * self.rank();
        let total = if rules.proficiency_without_level {
            rank_bonus
        } else {
            i64::from(level) + rank_bonus
        };
        i32::try_from(total).unwrap_or_else(|_| {
            tracing::debug!(level, rank = self.rank(), "proficiency bonus saturated");
            i32::MAX
        })
    }
}

impl TryFrom<i64> for ProficiencyRank {
    type Error = RulesError;

    fn try_from(rank: i64) -> Result<Self, Self::Error> {
        match rank {
            0 => Ok(ProficiencyRank::Untrained),
            1 => Ok(ProficiencyRank::Trained),
            2 => Ok(ProficiencyRank::Expert),
            3 => Ok(ProficiencyRank::Master),
            4 => Ok(ProficiencyRank::Legendary),
            other => {
                tracing::warn!(rank = other, "proficiency rank out of range");
                Err(RulesError::InvalidProficiencyRank(other))
            }
        }
    }
}

/// Create the proficiency modifier for `level` and `rank` under default rules.
///
/// Fails with `RulesError::InvalidProficiencyRank` when `rank` is outside
/// `0..=4`; the check happens before anything is computed.
///
/// # Examples
///
/// ```rust
/// use rollcore::{proficiency_modifier, RulesError};
///
/// assert_eq!(proficiency_modifier(3, 1).unwrap().value(), 5);
/// assert_eq!(proficiency_modifier(3, 0).unwrap().value(), 0);
/// assert_eq!(
///     proficiency_modifier(3, 5).unwrap_err(),
///     RulesError::InvalidProficiencyRank(5)
/// );
/// ```
pub fn proficiency_modifier(level: u32, rank: i64) -> RulesResult<Modifier> {
    proficiency_modifier_with(level, rank, &VariantRules::default())
}

/// Create the proficiency modifier for `level` and `rank` under `rules`.
pub fn proficiency_modifier_with(
    level: u32,
    rank: i64,
    rules: &VariantRules,
) -> RulesResult<Modifier> {
    let rank = ProficiencyRank::try_from(rank)?;
    Modifier::new("proficiency", rank.bonus(level, rules), ModifierType::Proficiency)
}
