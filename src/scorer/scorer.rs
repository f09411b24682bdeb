//! Rule-based selectivity scoring
//!
//! The score of a condition is the sum of three contributions:
//!
//! 1. operator base score (equality < range < inequality < pattern)
//! 2. column cardinality modifier (high cardinality adds least)
//! 3. value-frequency adjustment, equality conditions only (a common value
//!    adds a penalty, an uncommon one earns a small bonus)
//!
//! clamped to `[0, 1]`. Equality on a high-cardinality column with an
//! uncommon value lands near 0; a pattern match on a low-cardinality column
//! with a common value lands near 1.

use crate::parser::{Condition, Operator};

use super::profile::{CardinalityClass, ScoringProfile};

/// A condition paired with its selectivity score.
///
/// Derived and ephemeral: produced per optimize call, consumed by the
/// optimizer and the explain report.
#[derive(Debug, Clone)]
pub struct ScoredCondition {
    /// The scored condition
    pub condition: Condition,
    /// Score in `[0, 1]`; lower is more selective
    pub score: f64,
    /// Human-readable account of the contributions
    pub reasoning: String,
}

/// Scores WHERE conditions against a [`ScoringProfile`].
///
/// Scoring is a pure function of the condition and the profile: same inputs,
/// same score. There are no failure modes; anything the profile does not
/// recognize falls back to a neutral default.
#[derive(Debug, Default)]
pub struct SelectivityScorer {
    profile: ScoringProfile,
}

impl SelectivityScorer {
    /// Creates a scorer with the built-in default profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with a custom profile
    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    /// The profile this scorer reads from
    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Scores a condition. Always succeeds.
    pub fn score(&self, condition: &Condition) -> f64 {
        let (score, _, _) = self.score_parts(condition);
        score
    }

    /// Scores a condition and explains each contribution.
    pub fn score_condition(&self, condition: &Condition) -> ScoredCondition {
        let (score, class, value_adjustment) = self.score_parts(condition);
        ScoredCondition {
            condition: condition.clone(),
            score,
            reasoning: self.reasoning(condition, class, value_adjustment),
        }
    }

    fn score_parts(&self, condition: &Condition) -> (f64, CardinalityClass, f64) {
        let base = self.operator_base(condition.operator);

        let class = self.profile.classify_column(&condition.column);
        let modifier = self.profile.cardinality_modifier(class);

        let value_adjustment = if condition.operator.is_equality() {
            if self.profile.is_common_value(&condition.value.lookup_key()) {
                self.profile.common_value_penalty
            } else {
                -self.profile.uncommon_value_bonus
            }
        } else {
            0.0
        };

        let score = (base + modifier + value_adjustment).clamp(0.0, 1.0);
        (score, class, value_adjustment)
    }

    fn operator_base(&self, operator: Operator) -> f64 {
        match operator {
            Operator::Eq => self.profile.equality_score,
            Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le => self.profile.range_score,
            Operator::Ne => self.profile.inequality_score,
            Operator::Like => self.profile.pattern_score,
        }
    }

    fn reasoning(
        &self,
        condition: &Condition,
        class: CardinalityClass,
        value_adjustment: f64,
    ) -> String {
        let operator_part = match condition.operator {
            Operator::Eq => "equality condition (highly selective)",
            Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le => {
                "range condition (moderately selective)"
            }
            Operator::Ne => "inequality condition (less selective)",
            Operator::Like => "pattern match (least selective)",
        };

        let column_part = format!(
            "column '{}' has {} cardinality",
            condition.column,
            class.as_str()
        );

        let mut parts = vec![operator_part.to_string(), column_part];
        if condition.operator.is_equality() {
            if value_adjustment > 0.0 {
                parts.push(format!(
                    "value {} is common (less selective)",
                    condition.value
                ));
            } else {
                parts.push(format!(
                    "value {} is uncommon (more selective)",
                    condition.value
                ));
            }
        }

        parts.join("; ")
    }
}
