//! Rule-based advice generation
//!
//! Not text generation: two fixed, ordered rule tables (training advice,
//! recovery advice) evaluated against the raw inputs and the computed
//! score. Every matching rule fires, in table order, so identical inputs
//! always yield identical, identically ordered advice lists.

use crate::models::{RecoveryInputs, RecoveryStatus};
use crate::recovery::RecoveryScore;

/// Evaluation context shared by both rule tables
pub struct AdviceContext<'a> {
    pub inputs: &'a RecoveryInputs,
    pub score: &'a RecoveryScore,
}

/// A single advice rule: fixed predicate, fixed message
struct AdviceRule {
    id: &'static str,
    applies: fn(&AdviceContext) -> bool,
    message: &'static str,
}

/// Training advice rules, in firing order (highest priority first)
static TRAINING_RULES: &[AdviceRule] = &[
    AdviceRule {
        id: "complete-rest",
        applies: |ctx| ctx.score.status == RecoveryStatus::Critical,
        message: "Skip loaded training today and prioritize complete rest",
    },
    AdviceRule {
        id: "reduce-load",
        applies: |ctx| ctx.score.status == RecoveryStatus::Poor,
        message: "Reduce planned training load and keep intensity light",
    },
    AdviceRule {
        id: "active-recovery",
        applies: |ctx| ctx.inputs.muscle_soreness.is_some_and(|s| s >= 8),
        message: "Consider an active-recovery day instead of heavy lifting",
    },
    AdviceRule {
        id: "cut-volume",
        applies: |ctx| ctx.inputs.fatigue_level.is_some_and(|f| f >= 8),
        message: "Cut planned volume; accumulated fatigue is high",
    },
    AdviceRule {
        id: "technique-after-short-sleep",
        applies: |ctx| ctx.inputs.sleep_hours.is_some_and(|h| h < 6.0),
        message: "Favor technique work over maximal attempts after a short night",
    },
    AdviceRule {
        id: "peak-load",
        applies: |ctx| ctx.score.status == RecoveryStatus::Excellent,
        message: "Green light for high-intensity or peak-load training",
    },
    AdviceRule {
        id: "planned-session",
        applies: |ctx| ctx.score.status == RecoveryStatus::Good,
        message: "Proceed with the planned session and monitor effort",
    },
];

/// Recovery advice rules, in firing order
static RECOVERY_RULES: &[AdviceRule] = &[
    AdviceRule {
        id: "sleep-duration",
        applies: |ctx| ctx.inputs.sleep_hours.is_some_and(|h| h < 6.0),
        message: "Increase sleep duration; aim for 7-9 hours",
    },
    AdviceRule {
        id: "sleep-hygiene",
        applies: |ctx| ctx.inputs.sleep_quality.is_some_and(|q| q <= 4),
        message: "Improve sleep hygiene: consistent bedtime, dark and cool room",
    },
    AdviceRule {
        id: "stress-reduction",
        applies: |ctx| ctx.inputs.stress_level.is_some_and(|s| s >= 8),
        message: "Incorporate stress-reduction techniques such as breathing work or a short walk",
    },
    AdviceRule {
        id: "soreness-care",
        applies: |ctx| ctx.inputs.muscle_soreness.is_some_and(|s| s >= 8),
        message: "Use light mobility work or foam rolling to ease muscle soreness",
    },
    AdviceRule {
        id: "low-hrv",
        applies: |ctx| ctx.inputs.hrv.is_some_and(|h| h < 30),
        message: "HRV is well below the healthy range; keep today easy and re-measure tomorrow",
    },
    AdviceRule {
        id: "elevated-rhr",
        applies: |ctx| ctx.inputs.resting_heart_rate.is_some_and(|r| r >= 75),
        message: "Resting heart rate is elevated; hydrate well and watch for signs of illness",
    },
    AdviceRule {
        id: "low-energy",
        applies: |ctx| ctx.inputs.energy_level.is_some_and(|e| e <= 3),
        message: "Energy is very low; review nutrition and consider an afternoon nap",
    },
    AdviceRule {
        id: "keep-routine",
        applies: |ctx| ctx.score.status == RecoveryStatus::Excellent,
        message: "Recovery habits are working; keep the current routine",
    },
];

/// Generated advice lists, in rule-table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub training: Vec<String>,
    pub recovery: Vec<String>,
}

/// Advice generation engine
pub struct AdviceGenerator;

impl AdviceGenerator {
    /// Evaluate both rule tables against inputs and score
    pub fn generate(inputs: &RecoveryInputs, score: &RecoveryScore) -> Advice {
        let ctx = AdviceContext { inputs, score };
        Advice {
            training: Self::fire(TRAINING_RULES, &ctx),
            recovery: Self::fire(RECOVERY_RULES, &ctx),
        }
    }

    /// Training advice only
    pub fn training_advice(inputs: &RecoveryInputs, score: &RecoveryScore) -> Vec<String> {
        Self::fire(TRAINING_RULES, &AdviceContext { inputs, score })
    }

    /// Recovery advice only
    pub fn recovery_advice(inputs: &RecoveryInputs, score: &RecoveryScore) -> Vec<String> {
        Self::fire(RECOVERY_RULES, &AdviceContext { inputs, score })
    }

    fn fire(rules: &[AdviceRule], ctx: &AdviceContext) -> Vec<String> {
        let mut advice = Vec::new();
        for rule in rules {
            if (rule.applies)(ctx) {
                tracing::debug!(rule = rule.id, "advice rule fired");
                advice.push(rule.message.to_string());
            }
        }
        advice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recovery::RecoveryScorer;

    fn score_for(inputs: &RecoveryInputs) -> RecoveryScore {
        RecoveryScorer::new().score(inputs).unwrap()
    }

    #[test]
    fn test_well_recovered_gets_positive_advice() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(8.0),
            sleep_quality: Some(9),
            muscle_soreness: Some(2),
            fatigue_level: Some(2),
            stress_level: Some(2),
            hrv: Some(60),
            resting_heart_rate: Some(55),
            energy_level: Some(9),
        };
        let score = score_for(&inputs);
        let advice = AdviceGenerator::generate(&inputs, &score);

        assert!(advice
            .training
            .iter()
            .any(|a| a.contains("high-intensity") || a.contains("peak-load")));
        assert!(advice.recovery.iter().any(|a| a.contains("routine")));
        // Nothing negative should fire
        assert!(!advice.training.iter().any(|a| a.contains("rest")));
    }

    #[test]
    fn test_beaten_up_profile_gets_reduction_advice() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(8.0),
            sleep_quality: Some(9),
            muscle_soreness: Some(10),
            fatigue_level: Some(10),
            stress_level: Some(10),
            hrv: Some(60),
            resting_heart_rate: Some(55),
            energy_level: Some(9),
        };
        let score = score_for(&inputs);
        let advice = AdviceGenerator::generate(&inputs, &score);

        assert!(advice
            .training
            .iter()
            .any(|a| a.contains("Reduce") || a.contains("active-recovery")));
        assert!(advice
            .training
            .iter()
            .any(|a| a.contains("active-recovery")));
        assert!(advice
            .recovery
            .iter()
            .any(|a| a.contains("stress-reduction")));
    }

    #[test]
    fn test_short_sleep_fires_both_tables() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(5.0),
            sleep_quality: Some(7),
            ..Default::default()
        };
        let score = score_for(&inputs);
        let advice = AdviceGenerator::generate(&inputs, &score);

        assert!(advice
            .training
            .iter()
            .any(|a| a.contains("technique work")));
        assert!(advice
            .recovery
            .iter()
            .any(|a| a.contains("Increase sleep duration")));
    }

    #[test]
    fn test_missing_fields_fire_no_field_rules() {
        let inputs = RecoveryInputs::default();
        let score = score_for(&inputs);
        let advice = AdviceGenerator::generate(&inputs, &score);

        // Neutral 50 is Fair: no status rule fires either
        assert!(advice.training.is_empty());
        assert!(advice.recovery.is_empty());
    }

    #[test]
    fn test_advice_is_deterministic() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(5.5),
            sleep_quality: Some(3),
            muscle_soreness: Some(9),
            fatigue_level: Some(8),
            stress_level: Some(9),
            hrv: Some(25),
            resting_heart_rate: Some(80),
            energy_level: Some(2),
        };
        let score = score_for(&inputs);

        let first = AdviceGenerator::generate(&inputs, &score);
        let second = AdviceGenerator::generate(&inputs, &score);
        assert_eq!(first, second);

        // This profile trips every field rule; order must match the tables
        assert_eq!(first.recovery.len(), 7);
        assert!(first.recovery[0].contains("sleep duration"));
        assert!(first.recovery[1].contains("sleep hygiene"));
        assert!(first.recovery[2].contains("stress-reduction"));
    }

    #[test]
    fn test_rules_fire_in_table_order() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(4.0),
            sleep_quality: Some(2),
            muscle_soreness: Some(9),
            fatigue_level: Some(9),
            stress_level: Some(9),
            hrv: Some(20),
            resting_heart_rate: Some(85),
            energy_level: Some(1),
        };
        let score = score_for(&inputs);
        let advice = AdviceGenerator::generate(&inputs, &score);

        // Critical status: complete rest leads the training list
        assert!(advice.training[0].contains("complete rest"));
        assert!(advice.training[1].contains("active-recovery"));
    }
}
