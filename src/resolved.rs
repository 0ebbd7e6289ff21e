//! Resolved statistic module.
//!
//! Contains the `ResolvedStatistic` type, a snapshot of an aggregator
//! after stacking: the total plus every modifier with its enabled flag.

use crate::slug::Slug;
use crate::stacking::StackedModifier;
use serde::{Deserialize, Serialize};

/// A resolved statistic with its full modifier breakdown.
///
/// Read-only and serializable, so a host can render or ship it without
/// holding on to the aggregator.
///
/// # Examples
///
/// ```rust
/// use rollcore::{Modifier, ModifierType, Slug, StatisticAggregator};
///
/// let mut stat = StatisticAggregator::new(Slug::new("will").unwrap());
/// stat.add(Modifier::new("wis", 3, ModifierType::Ability).unwrap());
/// stat.add(Modifier::new("bless", 1, ModifierType::Status).unwrap());
///
/// let resolved = stat.resolve();
/// assert_eq!(resolved.total, 4);
/// assert_eq!(resolved.modifiers.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStatistic {
    /// The statistic identifier.
    pub slug: Slug,

    /// Sum of every enabled modifier.
    pub total: i32,

    /// Every retained modifier in insertion order, enabled or not.
    pub modifiers: Vec<StackedModifier>,
}

impl ResolvedStatistic {
    /// Modifiers that contribute to the total.
    pub fn enabled(&self) -> impl Iterator<Item = &StackedModifier> {
        self.modifiers.iter().filter(|m| m.enabled)
    }

    /// Modifiers suppressed by stacking or ignored.
    pub fn suppressed(&self) -> impl Iterator<Item = &StackedModifier> {
        self.modifiers.iter().filter(|m| !m.enabled)
    }
}
