//! Recovery assessment pipeline
//!
//! Wires the individual engines together bottom-up: score the recovery
//! inputs, classify status and recommended intensity, generate advice,
//! and estimate days to full recovery. Built fresh per call; the assessor
//! holds configuration only, never state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::advice::AdviceGenerator;
use crate::error::CalculationError;
use crate::fatigue::FatigueIndexCalculator;
use crate::intensity::IntensityRecommender;
use crate::models::{Assessment, RecoveryInputs, RecoveryStatus};
use crate::recovery::{RecoveryScorer, ScoringWeights};

/// An assessment paired with the fatigue picture for a known training load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedAssessment {
    /// The recovery assessment
    pub assessment: Assessment,

    /// Training stress the fatigue index was computed against
    pub training_stress: Decimal,

    /// Fatigue index: stress scaled by the recovery deficit
    pub fatigue_index: Decimal,
}

/// Orchestrating assessor for the full per-record pipeline
pub struct RecoveryAssessor {
    scorer: RecoveryScorer,
}

impl Default for RecoveryAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryAssessor {
    /// Assessor with the default scoring weights
    pub fn new() -> Self {
        RecoveryAssessor {
            scorer: RecoveryScorer::new(),
        }
    }

    /// Assessor with a custom weight table
    pub fn with_weights(weights: ScoringWeights) -> Self {
        RecoveryAssessor {
            scorer: RecoveryScorer::with_weights(weights),
        }
    }

    /// Run the full assessment pipeline over one set of recovery inputs
    pub fn assess(&self, inputs: &RecoveryInputs) -> Result<Assessment, CalculationError> {
        let score = self.scorer.score(inputs)?;
        let intensity = IntensityRecommender::recommend(score.overall)?;
        let advice = AdviceGenerator::generate(inputs, &score);

        tracing::info!(
            overall = score.overall,
            status = %score.status,
            intensity = %intensity,
            "assessment complete"
        );

        Ok(Assessment {
            overall_score: score.overall,
            recovery_status: score.status,
            recommended_intensity: intensity,
            estimated_recovery_days: estimated_recovery_days(score.status),
            component_scores: score.components,
            training_advice: advice.training,
            recovery_advice: advice.recovery,
        })
    }

    /// Assess and derive the fatigue index against a known training stress
    pub fn assess_with_stress(
        &self,
        inputs: &RecoveryInputs,
        training_stress: Decimal,
    ) -> Result<LoadedAssessment, CalculationError> {
        let assessment = self.assess(inputs)?;
        let fatigue_index =
            FatigueIndexCalculator::fatigue_index(training_stress, assessment.overall_score)?;
        Ok(LoadedAssessment {
            assessment,
            training_stress,
            fatigue_index,
        })
    }
}

/// Estimated days until full recovery, by status
///
/// Good still clears the High-intensity bucket, so it forces no rest day.
fn estimated_recovery_days(status: RecoveryStatus) -> u8 {
    match status {
        RecoveryStatus::Excellent => 0,
        RecoveryStatus::Good => 0,
        RecoveryStatus::Fair => 1,
        RecoveryStatus::Poor => 2,
        RecoveryStatus::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrainingIntensity;
    use rust_decimal_macros::dec;

    fn well_recovered() -> RecoveryInputs {
        RecoveryInputs {
            sleep_hours: Some(8.0),
            sleep_quality: Some(9),
            muscle_soreness: Some(2),
            fatigue_level: Some(2),
            stress_level: Some(2),
            hrv: Some(60),
            resting_heart_rate: Some(55),
            energy_level: Some(9),
        }
    }

    #[test]
    fn test_well_recovered_assessment() {
        let assessment = RecoveryAssessor::new().assess(&well_recovered()).unwrap();
        assert!(assessment.overall_score >= 85);
        assert_eq!(assessment.recovery_status, RecoveryStatus::Excellent);
        assert_eq!(assessment.recommended_intensity, TrainingIntensity::Intense);
        assert_eq!(assessment.estimated_recovery_days, 0);
        assert_eq!(assessment.component_scores.len(), 8);
    }

    #[test]
    fn test_beaten_up_assessment() {
        let inputs = RecoveryInputs {
            muscle_soreness: Some(10),
            stress_level: Some(10),
            fatigue_level: Some(10),
            ..well_recovered()
        };
        let assessment = RecoveryAssessor::new().assess(&inputs).unwrap();
        assert!(assessment.overall_score < 50);
        assert!(matches!(
            assessment.recovery_status,
            RecoveryStatus::Poor | RecoveryStatus::Critical
        ));
        assert!(matches!(
            assessment.recommended_intensity,
            TrainingIntensity::Rest | TrainingIntensity::Light
        ));
        assert!(assessment.estimated_recovery_days >= 2);
        assert!(assessment
            .training_advice
            .iter()
            .any(|a| a.contains("Reduce") || a.contains("active-recovery")));
    }

    #[test]
    fn test_partial_inputs_still_assess() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(7.0),
            energy_level: Some(6),
            ..Default::default()
        };
        let assessment = RecoveryAssessor::new().assess(&inputs).unwrap();
        assert!(assessment.overall_score <= 100);
        assert_eq!(assessment.component_scores.len(), 2);
    }

    #[test]
    fn test_assess_with_stress_attaches_fatigue() {
        let loaded = RecoveryAssessor::new()
            .assess_with_stress(&well_recovered(), dec!(150))
            .unwrap();
        assert_eq!(loaded.training_stress, dec!(150));
        // Excellent recovery absorbs most of the load
        assert!(loaded.fatigue_index < dec!(30));

        let beaten = RecoveryInputs {
            muscle_soreness: Some(10),
            stress_level: Some(10),
            fatigue_level: Some(10),
            ..well_recovered()
        };
        let loaded_beaten = RecoveryAssessor::new()
            .assess_with_stress(&beaten, dec!(150))
            .unwrap();
        assert!(loaded_beaten.fatigue_index > loaded.fatigue_index);
    }

    #[test]
    fn test_recovery_days_table() {
        assert_eq!(estimated_recovery_days(RecoveryStatus::Excellent), 0);
        assert_eq!(estimated_recovery_days(RecoveryStatus::Good), 0);
        assert_eq!(estimated_recovery_days(RecoveryStatus::Fair), 1);
        assert_eq!(estimated_recovery_days(RecoveryStatus::Poor), 2);
        assert_eq!(estimated_recovery_days(RecoveryStatus::Critical), 3);
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let assessor = RecoveryAssessor::new();
        let inputs = well_recovered();
        let first = assessor.assess(&inputs).unwrap();
        let second = assessor.assess(&inputs).unwrap();
        assert_eq!(first, second);
    }
}
