//! # rollcore - Deterministic Check Resolution for d20 Tabletop Rules
//!
//! The numeric core behind every check, save and attack:
//! - **Modifier stacking**: an ordered list of named, typed adjustments
//!   reduces to one deterministic total
//! - **Degree of success**: a rolled total and a DC map to one of four
//!   outcomes, shifted by rule adjustments
//!
//! Dice are rolled elsewhere. This crate takes the rolled total as input
//! and never generates randomness.
//!
//! ## Pipeline
//!
//! ```text
//! [ModifierSource] → [StatisticAggregator] → total → (host rolls) → [classify] → Outcome
//! ```
//!
//! 1. **Sources** produce modifiers (abilities, proficiency, equipment, effects)
//! 2. **Aggregator** deduplicates by name and applies stacking rules
//! 3. **Classifier** turns the rolled total and DC into an [`Outcome`]
//!
//! ## Stacking
//!
//! - Untyped modifiers always stack.
//! - For every other type, only the highest bonus and the lowest penalty
//!   contribute; among equal values the one added last wins.
//! - A second modifier with an existing name is dropped.
//!
//! ## Example
//!
//! ```rust
//! use rollcore::*;
//!
//! let mut attack = StatisticAggregator::new(Slug::new("longsword").unwrap());
//! attack.add(ability_modifier(Ability::Strength, 18));
//! attack.add(proficiency_modifier(5, 2).unwrap());
//! attack.add(Modifier::new("frightened", -1, ModifierType::Status).unwrap());
//!
//! // 4 (str) + 9 (expert at level 5) - 1 (frightened)
//! assert_eq!(attack.total(), 12);
//!
//! let rolled = 9 + attack.total();
//! assert_eq!(classify(rolled, 20, &[]), Outcome::Success);
//! ```
//!
//! ## Modules
//!
//! - [`modifier`] - Modifier value object and modifier types
//! - [`factory`] - Ability and proficiency modifiers
//! - [`stacking`] - Stacking rules
//! - [`aggregator`] - Statistic aggregation
//! - [`resolved`] - Resolved statistic snapshots
//! - [`degree`] - Degree of success classification
//! - [`source`] - Modifier sources
//! - [`progression`] - Automatic bonus progression variant
//! - [`config`] - Variant rule configuration
//! - [`slug`] - Identifier type
//! - [`error`] - Error types

pub mod aggregator;
pub mod config;
pub mod degree;
pub mod error;
pub mod factory;
pub mod modifier;
pub mod progression;
pub mod resolved;
pub mod slug;
pub mod source;
pub mod stacking;

pub use aggregator::StatisticAggregator;
pub use config::VariantRules;
pub use error::{RulesError, RulesResult};
pub use resolved::ResolvedStatistic;
pub use slug::Slug;

pub use modifier::{Modifier, ModifierType};
pub use stacking::{apply_stacking_rules, StackRule, StackedModifier};

pub use factory::{
    ability_modifier, proficiency_modifier, proficiency_modifier_with, Ability, ProficiencyRank,
};

pub use degree::{
    classify, classify_detailed, classify_roll, AdjustmentCondition, DegreeAdjustment,
    DegreeOfSuccess, Outcome,
};

pub use progression::{AutomaticBonusProgression, StatisticCategory};
pub use source::{FixedModifiers, ModifierSource};
