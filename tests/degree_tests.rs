//! Tests for degree of success classification.

use rollcore::*;

// ============================================================================
// Base classification
// ============================================================================

#[test]
fn test_classify_examples() {
    assert_eq!(classify(25, 15, &[]), Outcome::CriticalSuccess);
    assert_eq!(classify(14, 15, &[]), Outcome::Failure);
    assert_eq!(classify(4, 15, &[]), Outcome::CriticalFailure);
    assert_eq!(classify(15, 15, &[]), Outcome::Success);
}

#[test]
fn test_classify_boundaries() {
    assert_eq!(classify(24, 15, &[]), Outcome::Success);
    assert_eq!(classify(5, 15, &[]), Outcome::CriticalFailure);
    assert_eq!(classify(6, 15, &[]), Outcome::Failure);
    assert_eq!(classify(-20, -10, &[]), Outcome::CriticalFailure);
}

#[test]
fn test_outcome_ordering() {
    let mut shuffled = vec![
        Outcome::Success,
        Outcome::CriticalFailure,
        Outcome::CriticalSuccess,
        Outcome::Failure,
    ];
    shuffled.sort();
    assert_eq!(shuffled, Outcome::ALL.to_vec());
}

// ============================================================================
// Adjustments
// ============================================================================

#[test]
fn test_upgrade_clamps_at_critical_success() {
    let always_up = DegreeAdjustment::upgrade("keen", AdjustmentCondition::Always);
    assert_eq!(classify(30, 15, &[always_up]), Outcome::CriticalSuccess);
}

#[test]
fn test_downgrade_clamps_at_critical_failure() {
    let always_down = DegreeAdjustment::new("cursed", AdjustmentCondition::Always, -3);
    assert_eq!(classify(10, 15, &[always_down]), Outcome::CriticalFailure);
}

#[test]
fn test_conditional_adjustment_only_on_match() {
    let evasion = DegreeAdjustment::upgrade("evasion", AdjustmentCondition::On(Outcome::Success));
    assert_eq!(classify(16, 15, &[evasion.clone()]), Outcome::CriticalSuccess);
    assert_eq!(classify(14, 15, &[evasion]), Outcome::Failure);
}

#[test]
fn test_each_shift_clamped_individually() {
    // +5 then -1: clamped at CriticalSuccess before stepping down.
    let adjustments = vec![
        DegreeAdjustment::new("surge", AdjustmentCondition::Always, 5),
        DegreeAdjustment::downgrade("drain", AdjustmentCondition::Always),
    ];
    assert_eq!(classify(15, 15, &adjustments), Outcome::Success);
}

#[test]
fn test_detailed_reports_fired_adjustments() {
    let adjustments = vec![
        DegreeAdjustment::upgrade("resolve", AdjustmentCondition::On(Outcome::Success)),
        DegreeAdjustment::downgrade("doomed", AdjustmentCondition::On(Outcome::Failure)),
    ];
    let result = classify_detailed(17, 15, &adjustments);
    assert_eq!(result.unadjusted, Outcome::Success);
    assert_eq!(result.value, Outcome::CriticalSuccess);
    assert_eq!(result.applied, vec!["resolve".to_string()]);
}

// ============================================================================
// Natural 20 / natural 1
// ============================================================================

#[test]
fn test_natural_twenty_applies_before_adjustments() {
    // The natural 20 lifts Success to Critical Success, which clumsy then targets.
    let adjustments = vec![DegreeAdjustment::downgrade(
        "clumsy",
        AdjustmentCondition::On(Outcome::CriticalSuccess),
    )];
    let result = classify_roll(20, 16, 15, &adjustments);
    assert_eq!(result.unadjusted, Outcome::CriticalSuccess);
    assert_eq!(result.value, Outcome::Success);
    assert_eq!(result.applied, vec!["clumsy".to_string()]);
}

#[test]
fn test_natural_one_applies_before_adjustments() {
    // 25 vs 15 is a critical success, lowered to Success by the natural 1.
    let adjustments = vec![DegreeAdjustment::upgrade(
        "resolve",
        AdjustmentCondition::On(Outcome::Success),
    )];
    let result = classify_roll(1, 25, 15, &adjustments);
    assert_eq!(result.unadjusted, Outcome::Success);
    assert_eq!(result.value, Outcome::CriticalSuccess);
    assert_eq!(result.applied, vec!["resolve".to_string()]);

    // The same adjustment never sees the pre-die outcome.
    let result = classify_roll(10, 25, 15, &adjustments);
    assert_eq!(result.value, Outcome::CriticalSuccess);
    assert!(result.applied.is_empty());
}

#[test]
fn test_natural_die_matches_classify_of_shifted_base() {
    for (total, dc) in [(4, 15), (10, 15), (16, 15), (30, 15)] {
        let base = classify(total, dc, &[]);
        assert_eq!(classify_roll(20, total, dc, &[]).value, base.upgrade());
        assert_eq!(classify_roll(1, total, dc, &[]).value, base.downgrade());
    }
}

#[test]
fn test_natural_one_on_critical_failure_stays() {
    let result = classify_roll(1, 2, 15, &[]);
    assert_eq!(result.unadjusted, Outcome::CriticalFailure);
    assert_eq!(result.value, Outcome::CriticalFailure);
}

#[test]
fn test_degree_of_success_serializes() {
    let adjustments = vec![DegreeAdjustment::upgrade(
        "resolve",
        AdjustmentCondition::On(Outcome::Success),
    )];
    let result = classify_roll(20, 10, 15, &adjustments);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["unadjusted"], "success");
    assert_eq!(json["value"], "critical-success");
    assert_eq!(json["applied"][0], "resolve");
}
