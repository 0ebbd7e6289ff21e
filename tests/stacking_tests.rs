//! Tests for modifier aggregation.
//!
//! These tests verify:
//! - Ability and proficiency factories
//! - Stacking across and within modifier types
//! - Name deduplication
//! - Variant-rule producers feeding the aggregator

use rollcore::*;

fn m(name: &str, value: i32, kind: ModifierType) -> Modifier {
    Modifier::new(name, value, kind).unwrap()
}

fn aggregate(modifiers: Vec<Modifier>) -> StatisticAggregator {
    StatisticAggregator::with_modifiers(Slug::new("check").unwrap(), modifiers)
}

fn flags(stat: &StatisticAggregator) -> Vec<bool> {
    stat.modifiers().map(|(_, enabled)| enabled).collect()
}

// ============================================================================
// Factories
// ============================================================================

#[test]
fn test_ability_modifier_examples() {
    assert_eq!(ability_modifier(Ability::Strength, 9).value(), -1);
    assert_eq!(ability_modifier(Ability::Strength, 10).value(), 0);
    assert_eq!(ability_modifier(Ability::Strength, 11).value(), 0);
    assert_eq!(ability_modifier(Ability::Strength, 14).value(), 2);
}

#[test]
fn test_proficiency_rank_out_of_range() {
    for rank in [-3, -1, 5, 100] {
        assert_eq!(
            proficiency_modifier(7, rank).unwrap_err(),
            RulesError::InvalidProficiencyRank(rank)
        );
    }
}

fn build_stealth(rank: i64) -> RulesResult<StatisticAggregator> {
    let mut stat = StatisticAggregator::new(Slug::new("stealth")?);
    stat.add(ability_modifier(Ability::Dexterity, 16));
    stat.add(proficiency_modifier(3, rank)?);
    Ok(stat)
}

#[test]
fn test_invalid_rank_aborts_resolution() {
    assert_eq!(build_stealth(2).unwrap().total(), 10);
    assert_eq!(
        build_stealth(9).unwrap_err(),
        RulesError::InvalidProficiencyRank(9)
    );
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn test_non_overlapping_modifiers_all_stack() {
    let stat = aggregate(vec![
        m("ability", 2, ModifierType::Ability),
        m("proficiency", 5, ModifierType::Proficiency),
        m("status-bonus", 2, ModifierType::Status),
        m("status-penalty", -1, ModifierType::Status),
        m("item-bonus", 2, ModifierType::Item),
        m("item-penalty", -1, ModifierType::Item),
        m("circumstance-bonus", 2, ModifierType::Circumstance),
        m("circumstance-penalty", -1, ModifierType::Circumstance),
        m("untyped-penalty", -1, ModifierType::Untyped),
    ]);

    assert!(flags(&stat).iter().all(|&enabled| enabled));
    assert_eq!(stat.total(), 9);
}

#[test]
fn test_overlapping_bonuses() {
    let stat = aggregate(vec![
        m("one", 1, ModifierType::Status),
        m("two", 2, ModifierType::Status),
        m("three", 3, ModifierType::Status),
    ]);
    assert_eq!(flags(&stat), vec![false, false, true]);
    assert_eq!(stat.total(), 3);
}

#[test]
fn test_overlapping_equal_bonuses() {
    let stat = aggregate(vec![
        m("first", 2, ModifierType::Status),
        m("second", 2, ModifierType::Status),
    ]);
    assert!(!stat.is_enabled("first"));
    assert!(stat.is_enabled("second"));
    assert_eq!(stat.total(), 2);
}

#[test]
fn test_overlapping_penalties() {
    let stat = aggregate(vec![
        m("one", -1, ModifierType::Status),
        m("two", -2, ModifierType::Status),
        m("three", -3, ModifierType::Status),
    ]);
    assert_eq!(flags(&stat), vec![false, false, true]);
    assert_eq!(stat.total(), -3);
}

#[test]
fn test_untyped_always_stacks() {
    let stat = aggregate(vec![
        m("first", -2, ModifierType::Untyped),
        m("second", -2, ModifierType::Untyped),
    ]);
    assert_eq!(flags(&stat), vec![true, true]);
    assert_eq!(stat.total(), -4);
}

#[test]
fn test_bonus_and_penalty_of_same_type_coexist() {
    let stat = aggregate(vec![
        m("heroism", 2, ModifierType::Status),
        m("bless", 1, ModifierType::Status),
        m("frightened", -2, ModifierType::Status),
        m("sickened", -1, ModifierType::Status),
    ]);
    assert_eq!(flags(&stat), vec![true, false, true, false]);
    assert_eq!(stat.total(), 0);
}

#[test]
fn test_deduplication_across_types() {
    let mut stat = StatisticAggregator::new(Slug::new("perception").unwrap());
    stat.add(m("shared", 1, ModifierType::Item));
    stat.add(m("shared", 3, ModifierType::Status));

    assert_eq!(stat.len(), 1);
    let (survivor, enabled) = stat.get("shared").unwrap();
    assert_eq!(survivor.kind(), ModifierType::Item);
    assert!(enabled);
    assert_eq!(stat.total(), 1);
}

#[test]
fn test_repeated_add_is_idempotent() {
    let mut stat = StatisticAggregator::new(Slug::new("will").unwrap());
    for _ in 0..3 {
        stat.add(m("bless", 1, ModifierType::Status));
    }
    assert_eq!(stat.len(), 1);
    assert_eq!(stat.total(), 1);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut stat = aggregate(vec![
        m("a", 2, ModifierType::Status),
        m("b", 2, ModifierType::Status),
        m("c", -1, ModifierType::Item),
        m("d", 4, ModifierType::Untyped),
    ]);
    let first_flags = flags(&stat);
    let first_total = stat.recompute();
    let second_total = stat.recompute();

    assert_eq!(first_total, second_total);
    assert_eq!(flags(&stat), first_flags);
}

#[test]
fn test_modifier_reused_across_aggregators() {
    let shared = m("heroism", 2, ModifierType::Status);

    let alone = aggregate(vec![shared.clone()]);
    let outclassed = aggregate(vec![shared.clone(), m("greater-heroism", 3, ModifierType::Status)]);

    assert!(alone.is_enabled("heroism"));
    assert!(!outclassed.is_enabled("heroism"));
    assert_eq!(alone.total(), 2);
    assert_eq!(outclassed.total(), 3);
}

#[test]
fn test_full_skill_check() {
    let mut athletics = StatisticAggregator::new(Slug::new("athletics").unwrap());
    athletics.add(ability_modifier(Ability::Strength, 18));
    athletics.add(proficiency_modifier(5, 2).unwrap());
    athletics.add(m("climbing-kit", 1, ModifierType::Item));
    athletics.add(m("armor-check", -1, ModifierType::Untyped));
    athletics.add(m("aid", 1, ModifierType::Circumstance));

    // 4 + 9 + 1 - 1 + 1
    assert_eq!(athletics.total(), 14);
    assert_eq!(
        athletics.breakdown(),
        "str +4, proficiency +9, climbing-kit +1, armor-check -1, aid +1"
    );
}

// ============================================================================
// Sources and variant rules
// ============================================================================

#[test]
fn test_automatic_bonus_progression_competes_as_potency() {
    let rules = VariantRules::new().with_automatic_bonus_progression(true);
    let mut strike = StatisticAggregator::new(Slug::new("strike").unwrap());
    strike.add(m("weapon-potency", 1, ModifierType::Potency));

    let added = strike.collect(
        &AutomaticBonusProgression::new(10, StatisticCategory::Attack),
        &rules,
    );
    assert_eq!(added, 1);
    assert!(!strike.is_enabled("weapon-potency"));
    assert!(strike.is_enabled("abp-attack"));
    assert_eq!(strike.total(), 2);
}

#[test]
fn test_automatic_bonus_progression_off_by_default() {
    let mut ac = StatisticAggregator::new(Slug::new("ac").unwrap());
    let added = ac.collect(
        &AutomaticBonusProgression::new(20, StatisticCategory::ArmorClass),
        &VariantRules::default(),
    );
    assert_eq!(added, 0);
    assert!(ac.is_empty());
}

#[test]
fn test_collect_respects_existing_names() {
    let mut stat = StatisticAggregator::new(Slug::new("reflex").unwrap());
    stat.add(m("cover", 2, ModifierType::Circumstance));

    let source = FixedModifiers::new(vec![
        m("cover", 4, ModifierType::Circumstance),
        m("haste", 1, ModifierType::Status),
    ]);
    let added = stat.collect(&source, &VariantRules::default());

    assert_eq!(added, 1);
    assert_eq!(stat.total(), 3);
}

#[test]
fn test_rules_from_json_drive_proficiency() {
    let rules = VariantRules::from_json(r#"{ "proficiency_without_level": true }"#).unwrap();
    let prof = proficiency_modifier_with(12, 3, &rules).unwrap();
    assert_eq!(prof.value(), 6);
}

#[test]
fn test_resolved_statistic_serializes() {
    let stat = aggregate(vec![
        m("a", 1, ModifierType::Item),
        m("b", 2, ModifierType::Item),
    ]);
    let json = serde_json::to_value(stat.resolve()).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["modifiers"][0]["enabled"], false);
    assert_eq!(json["modifiers"][1]["enabled"], true);
}
