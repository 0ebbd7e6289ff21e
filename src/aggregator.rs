//! Statistic aggregator module.
//!
//! Provides `StatisticAggregator`, the entry point for turning a list of
//! modifiers into one total. An aggregator is built fresh for each
//! statistic resolution (one check, one save) and discarded afterwards.

use crate::config::VariantRules;
use crate::modifier::Modifier;
use crate::resolved::ResolvedStatistic;
use crate::slug::Slug;
use crate::source::ModifierSource;
use crate::stacking::{apply_stacking_rules, StackedModifier};

/// Collects modifiers for one statistic and keeps its total current.
///
/// The aggregator:
/// 1. Keeps modifiers in insertion order (order decides ties)
/// 2. Drops any modifier whose name is already present
/// 3. Re-applies stacking rules after every change
/// 4. Exposes the total of the enabled modifiers
///
/// # Examples
///
/// ```rust
/// use rollcore::*;
///
/// let mut athletics = StatisticAggregator::new(Slug::new("athletics").unwrap());
/// athletics.add(ability_modifier(Ability::Strength, 16));
/// athletics.add(proficiency_modifier(1, 1).unwrap());
/// athletics.add(Modifier::new("bless", 1, ModifierType::Status).unwrap());
/// athletics.add(Modifier::new("heroism", 1, ModifierType::Status).unwrap());
///
/// // 3 (str) + 3 (trained at level 1) + 1 (one status bonus)
/// assert_eq!(athletics.total(), 7);
/// assert_eq!(athletics.breakdown(), "str +3, proficiency +3, heroism +1");
/// ```
#[derive(Debug, Clone)]
pub struct StatisticAggregator {
    slug: Slug,

    /// Retained modifiers, unique by name, in insertion order.
    modifiers: Vec<Modifier>,

    /// Enabled flag per modifier, index-aligned with `modifiers`.
    enabled: Vec<bool>,

    total: i32,
}

impl StatisticAggregator {
    /// Create an empty aggregator for `slug`.
    pub fn new(slug: Slug) -> Self {
        Self {
            slug,
            modifiers: Vec::new(),
            enabled: Vec::new(),
            total: 0,
        }
    }

    /// Create an aggregator and add every modifier in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollcore::{Modifier, ModifierType, Slug, StatisticAggregator};
    ///
    /// let stat = StatisticAggregator::with_modifiers(
    ///     Slug::new("fortitude").unwrap(),
    ///     vec![
    ///         Modifier::untyped("a", -2).unwrap(),
    ///         Modifier::untyped("b", -2).unwrap(),
    ///     ],
    /// );
    /// assert_eq!(stat.total(), -4);
    /// ```
    pub fn with_modifiers(slug: Slug, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut aggregator = Self::new(slug);
        for modifier in modifiers {
            aggregator.insert(modifier);
        }
        aggregator.recompute();
        aggregator
    }

    /// Add a modifier.
    ///
    /// If a modifier with the same name is already present the new one is
    /// dropped and `false` is returned, so adding a commonly named bonus
    /// twice is idempotent.
    pub fn add(&mut self, modifier: Modifier) -> bool {
        let added = self.insert(modifier);
        if added {
            self.recompute();
        }
        added
    }

    /// Add a modifier, replacing any same-named modifier in place.
    ///
    /// The replacement keeps the original's position, so it is stacked as
    /// if it had been added at that point. Returns the replaced modifier.
    pub fn replace(&mut self, modifier: Modifier) -> Option<Modifier> {
        let previous = match self.position(modifier.name().as_str()) {
            Some(idx) => Some(std::mem::replace(&mut self.modifiers[idx], modifier)),
            None => {
                self.modifiers.push(modifier);
                None
            }
        };
        self.recompute();
        previous
    }

    /// Remove the modifier named `name`, if present.
    pub fn remove(&mut self, name: &str) -> Option<Modifier> {
        let idx = self.position(name)?;
        let removed = self.modifiers.remove(idx);
        self.recompute();
        Some(removed)
    }

    /// Add every modifier `source` produces for this statistic.
    ///
    /// Returns how many were retained.
    pub fn collect(&mut self, source: &dyn ModifierSource, rules: &VariantRules) -> usize {
        let mut added = 0;
        for modifier in source.modifiers(&self.slug, rules) {
            if self.insert(modifier) {
                added += 1;
            }
        }
        self.recompute();
        added
    }

    /// Remove every modifier.
    pub fn clear(&mut self) {
        self.modifiers.clear();
        self.recompute();
    }

    /// Re-apply stacking rules and recompute the total.
    ///
    /// Deterministic and idempotent: calling it again without changing the
    /// modifiers yields the same flags and total.
    pub fn recompute(&mut self) -> i32 {
        self.enabled = apply_stacking_rules(&self.modifiers);

        let sum: i64 = self
            .modifiers
            .iter()
            .zip(&self.enabled)
            .filter(|(_, enabled)| **enabled)
            .map(|(m, _)| i64::from(m.value()))
            .sum();
        self.total = sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

        for (modifier, _) in self.modifiers().filter(|(_, enabled)| !enabled) {
            tracing::trace!(statistic = %self.slug, modifier = %modifier, kind = %modifier.kind(), "modifier suppressed");
        }
        tracing::debug!(
            statistic = %self.slug,
            modifiers = self.modifiers.len(),
            total = self.total,
            "recomputed statistic"
        );
        self.total
    }

    /// The statistic this aggregator totals.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Sum of every enabled modifier.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Number of retained modifiers, enabled or not.
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Whether no modifier is retained.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Every retained modifier with its enabled flag, in insertion order.
    pub fn modifiers(&self) -> impl Iterator<Item = (&Modifier, bool)> {
        self.modifiers.iter().zip(self.enabled.iter().copied())
    }

    /// Modifiers that contribute to the total, in insertion order.
    pub fn enabled_modifiers(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers().filter(|(_, enabled)| *enabled).map(|(m, _)| m)
    }

    /// Look up a modifier and its enabled flag by name.
    pub fn get(&self, name: &str) -> Option<(&Modifier, bool)> {
        self.position(name)
            .map(|idx| (&self.modifiers[idx], self.enabled[idx]))
    }

    /// Whether the modifier named `name` is present and enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|(_, enabled)| enabled)
    }

    /// Human-readable list of the enabled modifiers, e.g. `"str +2, item +1"`.
    pub fn breakdown(&self) -> String {
        self.enabled_modifiers()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Snapshot the current state.
    pub fn resolve(&self) -> ResolvedStatistic {
        ResolvedStatistic {
            slug: self.slug.clone(),
            total: self.total,
            modifiers: self
                .modifiers()
                .map(|(modifier, enabled)| StackedModifier {
                    modifier: modifier.clone(),
                    enabled,
                })
                .collect(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.modifiers.iter().position(|m| m.name().as_str() == name)
    }

    /// Append without recomputing; first occurrence of a name wins.
    fn insert(&mut self, modifier: Modifier) -> bool {
        if self.position(modifier.name().as_str()).is_some() {
            tracing::trace!(statistic = %self.slug, modifier = %modifier.name(), "duplicate modifier dropped");
            return false;
        }
        self.modifiers.push(modifier);
        true
    }
}
