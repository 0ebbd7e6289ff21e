//! Modifier sources module.
//!
//! Sources produce the modifiers that feed a statistic. Equipment,
//! conditions and rule variants all sit behind the same trait and reach
//! the aggregator through its ordinary `add`, so no source can bypass
//! deduplication or stacking.

use crate::config::VariantRules;
use crate::modifier::Modifier;
use crate::slug::Slug;

/// Trait for anything that contributes modifiers to a statistic.
///
/// Sources are stateless and deterministic: the same statistic and rules
/// always yield the same modifiers in the same order.
///
/// # Examples
///
/// ```rust
/// use rollcore::{FixedModifiers, Modifier, ModifierSource, ModifierType, Slug, VariantRules};
///
/// let source = FixedModifiers::new(vec![
///     Modifier::new("bless", 1, ModifierType::Status).unwrap(),
/// ]);
/// let stat = Slug::new("attack").unwrap();
///
/// let produced = source.modifiers(&stat, &VariantRules::default());
/// assert_eq!(produced.len(), 1);
/// ```
pub trait ModifierSource {
    /// Modifiers this source contributes to `statistic` under `rules`.
    fn modifiers(&self, statistic: &Slug, rules: &VariantRules) -> Vec<Modifier>;
}

/// A source that always returns the same modifiers.
#[derive(Debug, Clone, Default)]
pub struct FixedModifiers(Vec<Modifier>);

impl FixedModifiers {
    /// Wrap `modifiers`, returned in this order.
    pub fn new(modifiers: Vec<Modifier>) -> Self {
        Self(modifiers)
    }

    /// Append one more modifier.
    pub fn push(&mut self, modifier: Modifier) {
        self.0.push(modifier);
    }
}

impl ModifierSource for FixedModifiers {
    fn modifiers(&self, _statistic: &Slug, _rules: &VariantRules) -> Vec<Modifier> {
        self.0.clone()
    }
}

impl<F> ModifierSource for F
where
    F: Fn(&Slug, &VariantRules) -> Vec<Modifier>,
{
    fn modifiers(&self, statistic: &Slug, rules: &VariantRules) -> Vec<Modifier> {
        self(statistic, rules)
    }
}
