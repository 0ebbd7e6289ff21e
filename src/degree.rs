//! Degree of success module.
//!
//! Maps a rolled total and a difficulty class to one of four outcomes,
//! then folds any rule adjustments over the result. Classification never
//! fails: every integer input is valid and every shift is clamped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Margin by which a total must beat or miss the DC to become critical.
const CRITICAL_MARGIN: i64 = 10;

/// The four degrees of success, ordered worst to best.
///
/// # Examples
///
/// ```rust
/// use rollcore::Outcome;
///
/// assert!(Outcome::CriticalFailure < Outcome::Failure);
/// assert_eq!(Outcome::Success.upgrade(), Outcome::CriticalSuccess);
/// assert_eq!(Outcome::CriticalSuccess.upgrade(), Outcome::CriticalSuccess);
/// assert_eq!(Outcome::Success.shift(-5), Outcome::CriticalFailure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    CriticalFailure,
    Failure,
    Success,
    CriticalSuccess,
}

impl Outcome {
    /// Every outcome, worst to best.
    pub const ALL: [Outcome; 4] = [
        Outcome::CriticalFailure,
        Outcome::Failure,
        Outcome::Success,
        Outcome::CriticalSuccess,
    ];

    /// Position in `ALL`, 0 through 3.
    pub fn index(self) -> usize {
        match self {
            Outcome::CriticalFailure => 0,
            Outcome::Failure => 1,
            Outcome::Success => 2,
            Outcome::CriticalSuccess => 3,
        }
    }

    /// Move by `steps` degrees, clamped to the outcome range.
    pub fn shift(self, steps: i32) -> Self {
        let last = (Self::ALL.len() - 1) as i64;
        let idx = (self.index() as i64 + i64::from(steps)).clamp(0, last);
        Self::ALL[idx as usize]
    }

    /// One degree better, clamped at `CriticalSuccess`.
    pub fn upgrade(self) -> Self {
        self.shift(1)
    }

    /// One degree worse, clamped at `CriticalFailure`.
    pub fn downgrade(self) -> Self {
        self.shift(-1)
    }

    /// `Success` or `CriticalSuccess`.
    pub fn is_success(self) -> bool {
        self >= Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::CriticalFailure => "Critical Failure",
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
            Outcome::CriticalSuccess => "Critical Success",
        })
    }
}

/// When a degree adjustment fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentCondition {
    /// Regardless of the current outcome.
    Always,
    /// Only when the current outcome is this one.
    On(Outcome),
}

impl AdjustmentCondition {
    /// Whether the condition holds for `outcome`.
    pub fn matches(self, outcome: Outcome) -> bool {
        match self {
            AdjustmentCondition::Always => true,
            AdjustmentCondition::On(expected) => expected == outcome,
        }
    }
}

/// A rule that shifts the outcome when its condition holds.
///
/// # Examples
///
/// ```rust
/// use rollcore::{AdjustmentCondition, DegreeAdjustment, Outcome};
///
/// // Failures on this save count as successes.
/// let juggernaut = DegreeAdjustment::upgrade("juggernaut", AdjustmentCondition::On(Outcome::Failure));
///
/// assert_eq!(juggernaut.apply(Outcome::Failure), Outcome::Success);
/// assert_eq!(juggernaut.apply(Outcome::CriticalFailure), Outcome::CriticalFailure);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeAdjustment {
    /// Name reported when the adjustment fires.
    pub label: String,
    pub when: AdjustmentCondition,
    /// Signed number of degrees to move.
    pub steps: i32,
}

impl DegreeAdjustment {
    /// Shift by `steps` degrees whenever `when` holds.
    pub fn new(label: impl Into<String>, when: AdjustmentCondition, steps: i32) -> Self {
        Self {
            label: label.into(),
            when,
            steps,
        }
    }

    /// Improve by one degree whenever `when` holds.
    pub fn upgrade(label: impl Into<String>, when: AdjustmentCondition) -> Self {
        Self::new(label, when, 1)
    }

    /// Worsen by one degree whenever `when` holds.
    pub fn downgrade(label: impl Into<String>, when: AdjustmentCondition) -> Self {
        Self::new(label, when, -1)
    }

    /// Whether this adjustment fires on `outcome`.
    pub fn matches(&self, outcome: Outcome) -> bool {
        self.when.matches(outcome)
    }

    /// The outcome after this adjustment, unchanged if it does not fire.
    pub fn apply(&self, outcome: Outcome) -> Outcome {
        if self.matches(outcome) {
            outcome.shift(self.steps)
        } else {
            outcome
        }
    }
}

/// A classified check with the adjustments that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeOfSuccess {
    /// Outcome from the total, DC and die face, before any adjustment.
    pub unadjusted: Outcome,
    /// Outcome after every adjustment.
    pub value: Outcome,
    /// Labels of the adjustments that fired, in order.
    pub applied: Vec<String>,
}

/// Outcome from the total and DC, before any adjustment.
fn base_outcome(total: i32, dc: i32) -> Outcome {
    let (total, dc) = (i64::from(total), i64::from(dc));
    let outcome = if total >= dc {
        Outcome::Success
    } else {
        Outcome::Failure
    };

    if total >= dc + CRITICAL_MARGIN {
        outcome.upgrade()
    } else if total <= dc - CRITICAL_MARGIN {
        outcome.downgrade()
    } else {
        outcome
    }
}

/// Classify `total` against `dc`, then apply `adjustments` in order.
///
/// # Examples
///
/// ```rust
/// use rollcore::{classify, Outcome};
///
/// assert_eq!(classify(25, 15, &[]), Outcome::CriticalSuccess);
/// assert_eq!(classify(15, 15, &[]), Outcome::Success);
/// assert_eq!(classify(14, 15, &[]), Outcome::Failure);
/// assert_eq!(classify(4, 15, &[]), Outcome::CriticalFailure);
/// ```
pub fn classify(total: i32, dc: i32, adjustments: &[DegreeAdjustment]) -> Outcome {
    classify_detailed(total, dc, adjustments).value
}

/// Like [`classify`], also reporting the unadjusted outcome and which
/// adjustments fired.
///
/// Each adjustment is checked against the outcome left by the ones before
/// it, and each shift is clamped on its own.
pub fn classify_detailed(total: i32, dc: i32, adjustments: &[DegreeAdjustment]) -> DegreeOfSuccess {
    let result = apply_adjustments(base_outcome(total, dc), adjustments);
    tracing::debug!(total, dc, unadjusted = %result.unadjusted, value = %result.value, "classified check");
    result
}

/// Classify a d20 check, honouring the natural 20 and natural 1 rules.
///
/// `die` is the face of the kept d20. A natural 20 improves the base
/// outcome one degree and a natural 1 worsens it one degree; this is part
/// of `unadjusted`, and `adjustments` then apply on top of it.
///
/// # Examples
///
/// ```rust
/// use rollcore::{classify_roll, AdjustmentCondition, DegreeAdjustment, Outcome};
///
/// // A natural 20 that still misses the DC becomes a success.
/// let result = classify_roll(20, 24, 25, &[]);
/// assert_eq!(result.unadjusted, Outcome::Success);
/// assert_eq!(result.value, Outcome::Success);
///
/// // A natural 1 lowers the critical success before the rule sees it.
/// let evasion = DegreeAdjustment::upgrade("evasion", AdjustmentCondition::On(Outcome::Success));
/// let result = classify_roll(1, 25, 15, &[evasion]);
/// assert_eq!(result.unadjusted, Outcome::Success);
/// assert_eq!(result.value, Outcome::CriticalSuccess);
/// ```
pub fn classify_roll(
    die: i32,
    total: i32,
    dc: i32,
    adjustments: &[DegreeAdjustment],
) -> DegreeOfSuccess {
    let base = base_outcome(total, dc);
    let unadjusted = match die {
        20 => base.upgrade(),
        1 => base.downgrade(),
        _ => base,
    };
    let result = apply_adjustments(unadjusted, adjustments);
    tracing::debug!(die, total, dc, unadjusted = %result.unadjusted, value = %result.value, "classified roll");
    result
}

/// Fold `adjustments` over `unadjusted`, rechecking each condition against
/// the outcome left by the previous adjustment.
fn apply_adjustments(unadjusted: Outcome, adjustments: &[DegreeAdjustment]) -> DegreeOfSuccess {
    let (value, applied) = adjustments.iter().fold(
        (unadjusted, Vec::new()),
        |(outcome, mut applied), adjustment| {
            if !adjustment.matches(outcome) {
                return (outcome, applied);
            }
            let next = outcome.shift(adjustment.steps);
            tracing::trace!(label = %adjustment.label, from = %outcome, to = %next, "degree adjusted");
            applied.push(adjustment.label.clone());
            (next, applied)
        },
    );

    DegreeOfSuccess {
        unadjusted,
        value,
        applied,
    }
}
