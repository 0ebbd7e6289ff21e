//! Automatic bonus progression.
//!
//! A rule variant that replaces the potency runes of magic equipment
//! with bonuses granted purely by level. It is an ordinary modifier
//! source: it emits nothing unless the variant is switched on.

use crate::config::VariantRules;
use crate::modifier::{Modifier, ModifierType};
use crate::slug::Slug;
use crate::source::ModifierSource;
use serde::{Deserialize, Serialize};

/// Statistic families that receive a potency bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticCategory {
    Attack,
    ArmorClass,
    Save,
    Perception,
}

impl StatisticCategory {
    /// Levels at which the potency bonus reaches +1, +2 and +3.
    pub fn thresholds(self) -> [u32; 3] {
        match self {
            StatisticCategory::Attack => [2, 10, 16],
            StatisticCategory::ArmorClass => [5, 11, 18],
            StatisticCategory::Save => [8, 14, 20],
            StatisticCategory::Perception => [7, 13, 19],
        }
    }

    /// Name given to the modifier this category produces.
    pub fn modifier_name(self) -> &'static str {
        match self {
            StatisticCategory::Attack => "abp-attack",
            StatisticCategory::ArmorClass => "abp-armor-class",
            StatisticCategory::Save => "abp-save",
            StatisticCategory::Perception => "abp-perception",
        }
    }

    /// Potency bonus at `level`, 0 before the first threshold.
    pub fn potency_at(self, level: u32) -> i32 {
        self.thresholds()
            .iter()
            .filter(|&&threshold| level >= threshold)
            .count() as i32
    }
}

/// Level-indexed potency producer for one statistic category.
///
/// # Examples
///
/// ```rust
/// use rollcore::{AutomaticBonusProgression, ModifierSource, Slug, StatisticCategory, VariantRules};
///
/// let abp = AutomaticBonusProgression::new(10, StatisticCategory::Attack);
/// let strike = Slug::new("strike").unwrap();
///
/// // Inactive unless the variant is switched on.
/// assert!(abp.modifiers(&strike, &VariantRules::default()).is_empty());
///
/// let rules = VariantRules::new().with_automatic_bonus_progression(true);
/// let produced = abp.modifiers(&strike, &rules);
/// assert_eq!(produced[0].value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomaticBonusProgression {
    pub level: u32,
    pub category: StatisticCategory,
}

impl AutomaticBonusProgression {
    /// Producer for a character of `level` in `category`.
    pub fn new(level: u32, category: StatisticCategory) -> Self {
        Self { level, category }
    }
}

impl ModifierSource for AutomaticBonusProgression {
    fn modifiers(&self, statistic: &Slug, rules: &VariantRules) -> Vec<Modifier> {
        if !rules.automatic_bonus_progression {
            return Vec::new();
        }
        let value = self.category.potency_at(self.level);
        if value == 0 {
            return Vec::new();
        }
        tracing::trace!(
            statistic = %statistic,
            category = ?self.category,
            level = self.level,
            value,
            "granting potency bonus"
        );
        vec![Modifier::from_slug(
            Slug::from_static(self.category.modifier_name()),
            value,
            ModifierType::Potency,
        )
        .with_source("automatic bonus progression")]
    }
}
