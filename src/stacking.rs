//! Stacking rules module.
//!
//! Decides which modifiers of a statistic contribute to its total.
//! The decision is a pure function of the ordered modifier list, so the
//! same list always yields the same flags.

use crate::modifier::{Modifier, ModifierType};
use crate::slug::Slug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How modifiers of one type combine with each other.
///
/// # Examples
///
/// ```rust
/// use rollcore::{ModifierType, StackRule};
///
/// assert_eq!(StackRule::for_type(ModifierType::Untyped), StackRule::Always);
/// assert_eq!(StackRule::for_type(ModifierType::Item), StackRule::Strongest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackRule {
    /// Every modifier contributes.
    Always,
    /// Only the highest bonus and the lowest penalty contribute.
    ///
    /// Ties go to the most recently added modifier.
    Strongest,
}

impl StackRule {
    /// The stack rule a modifier type follows.
    pub fn for_type(kind: ModifierType) -> Self {
        match kind {
            ModifierType::Untyped => StackRule::Always,
            ModifierType::Ability
            | ModifierType::Proficiency
            | ModifierType::Circumstance
            | ModifierType::Item
            | ModifierType::Status
            | ModifierType::Potency => StackRule::Strongest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Sign {
    Bonus,
    Penalty,
}

impl Sign {
    fn of(modifier: &Modifier) -> Self {
        if modifier.is_bonus() {
            Sign::Bonus
        } else {
            Sign::Penalty
        }
    }

    /// Whether `challenger` displaces `holder`; equal values favour the challenger.
    fn displaces(self, challenger: i32, holder: i32) -> bool {
        match self {
            Sign::Bonus => challenger >= holder,
            Sign::Penalty => challenger <= holder,
        }
    }
}

/// A modifier paired with the enabled flag its statistic assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedModifier {
    /// The modifier.
    #[serde(flatten)]
    pub modifier: Modifier,
    /// Whether it contributes to the total.
    pub enabled: bool,
}

/// Compute the enabled flag of every modifier in `modifiers`.
///
/// The returned vector is index-aligned with the input:
/// 1. Later entries repeating an earlier name are disabled.
/// 2. Ignored entries are disabled and take no part in stacking.
/// 3. Untyped entries are enabled.
/// 4. For every other type, bonuses (`>= 0`) and penalties are stacked
///    separately: the highest bonus and the lowest penalty are enabled,
///    and among equal values the one added last wins.
///
/// # Examples
///
/// ```rust
/// use rollcore::{apply_stacking_rules, Modifier, ModifierType};
///
/// let modifiers = vec![
///     Modifier::new("bless", 1, ModifierType::Status).unwrap(),
///     Modifier::new("heroism", 2, ModifierType::Status).unwrap(),
///     Modifier::new("frightened", -1, ModifierType::Status).unwrap(),
/// ];
///
/// assert_eq!(apply_stacking_rules(&modifiers), vec![false, true, true]);
/// ```
pub fn apply_stacking_rules(modifiers: &[Modifier]) -> Vec<bool> {
    let mut enabled = vec![false; modifiers.len()];
    let mut seen: HashSet<&Slug> = HashSet::with_capacity(modifiers.len());
    let mut strongest: HashMap<(ModifierType, Sign), usize> = HashMap::new();

    for (idx, modifier) in modifiers.iter().enumerate() {
        if !seen.insert(modifier.name()) || modifier.is_ignored() {
            continue;
        }

        match StackRule::for_type(modifier.kind()) {
            StackRule::Always => enabled[idx] = true,
            StackRule::Strongest => {
                let sign = Sign::of(modifier);
                let holder = strongest.entry((modifier.kind(), sign)).or_insert(idx);
                if sign.displaces(modifier.value(), modifiers[*holder].value()) {
                    *holder = idx;
                }
            }
        }
    }

    for idx in strongest.into_values() {
        enabled[idx] = true;
    }
    enabled
}
