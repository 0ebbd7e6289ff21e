//! Check example: build a skill statistic and classify a roll against a DC
//!
//! This example demonstrates:
//! - Ability and proficiency modifiers
//! - Stacking of typed bonuses and penalties
//! - Variant rules loaded from JSON
//! - Degree of success with a natural 20
//!
//! Run with `RUST_LOG=rollcore=trace` to see the stacking decisions.

use rollcore::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RulesError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rules = VariantRules::from_json(r#"{ "automatic_bonus_progression": true }"#)?;
    let level = 8;

    let mut will = StatisticAggregator::new(Slug::new("will")?);
    will.add(ability_modifier(Ability::Wisdom, 18));
    will.add(proficiency_modifier_with(level, 2, &rules)?);
    will.collect(
        &AutomaticBonusProgression::new(level, StatisticCategory::Save),
        &rules,
    );
    will.add(Modifier::new("bless", 1, ModifierType::Status)?.with_source("cleric"));
    will.add(Modifier::new("heroism", 1, ModifierType::Status)?.with_source("bard"));
    will.add(Modifier::new("frightened", -2, ModifierType::Status)?);

    println!("=== Will Save ===");
    for (modifier, enabled) in will.modifiers() {
        let marker = if enabled { " " } else { "x" };
        println!("  [{}] {:<12} {:+3}  ({})", marker, modifier.name(), modifier.value(), modifier.kind());
    }
    println!("Total: {:+}", will.total());
    println!("Breakdown: {}", will.breakdown());

    let die = 20;
    let dc = 30;
    let total = die + will.total();
    let resolute = DegreeAdjustment::upgrade(
        "resolute",
        AdjustmentCondition::On(Outcome::Success),
    );

    let result = classify_roll(die, total, dc, &[resolute]);
    println!("\n=== Save vs DC {} ===", dc);
    println!("Rolled {} (natural {}) → {}", total, die, result.unadjusted);
    for label in &result.applied {
        println!("  adjusted by {}", label);
    }
    println!("Outcome: {}", result.value);

    Ok(())
}
