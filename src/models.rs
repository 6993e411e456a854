use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::CalculationError;

/// A single resistance-training set entry
///
/// The caller-facing record for strength work: load on the bar, set/rep
/// scheme, and an optional subjective effort rating (RPE, 1-10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Weight lifted, in the caller's unit (kg or lb; the engine is unit-agnostic)
    pub weight: Decimal,

    /// Number of sets performed
    pub sets: u16,

    /// Repetitions per set
    pub reps: u16,

    /// Rate of Perceived Exertion, 1-10 scale
    pub perceived_exertion: Option<u8>,
}

impl ExerciseSet {
    /// Create a validated exercise set
    pub fn new(
        weight: Decimal,
        sets: u16,
        reps: u16,
        perceived_exertion: Option<u8>,
    ) -> Result<Self, CalculationError> {
        let set = ExerciseSet {
            weight,
            sets,
            reps,
            perceived_exertion,
        };
        set.validate()?;
        Ok(set)
    }

    /// Check the numeric invariants: weight >= 0, sets >= 1, reps >= 1
    ///
    /// RPE is deliberately not checked here; it clamps at the point of use
    /// (see `TrainingStressCalculator`).
    pub fn validate(&self) -> Result<(), CalculationError> {
        if self.weight < Decimal::ZERO {
            return Err(CalculationError::invalid_input(
                "weight",
                self.weight,
                "weight must be >= 0",
            ));
        }
        if self.sets == 0 {
            return Err(CalculationError::invalid_input(
                "sets",
                self.sets,
                "sets must be >= 1",
            ));
        }
        if self.reps == 0 {
            return Err(CalculationError::invalid_input(
                "reps",
                self.reps,
                "reps must be >= 1",
            ));
        }
        Ok(())
    }
}

/// Daily physiological and subjective recovery inputs
///
/// Every field is independently optional: wearables and manual check-ins
/// rarely deliver the full set, and a partial submission must still score.
/// Missing fields are excluded from the weighted average rather than
/// treated as zero (see `RecoveryScorer`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveryInputs {
    /// Hours slept, 0-24
    pub sleep_hours: Option<f64>,

    /// Subjective sleep quality, 1-10
    pub sleep_quality: Option<u8>,

    /// Muscle soreness, 1-10 (10 = worst)
    pub muscle_soreness: Option<u8>,

    /// Subjective fatigue, 1-10 (10 = worst)
    pub fatigue_level: Option<u8>,

    /// Subjective stress, 1-10 (10 = worst)
    pub stress_level: Option<u8>,

    /// Heart rate variability (RMSSD) in milliseconds
    pub hrv: Option<u16>,

    /// Resting heart rate in beats per minute, 30-200
    pub resting_heart_rate: Option<u16>,

    /// Subjective energy, 1-10
    pub energy_level: Option<u8>,
}

impl RecoveryInputs {
    /// Check range invariants on every *present* field
    ///
    /// Absence is always fine; a present value outside its documented range
    /// is a hard error, never silently clamped.
    pub fn validate(&self) -> Result<(), CalculationError> {
        if let Some(h) = self.sleep_hours {
            if !(0.0..=24.0).contains(&h) {
                return Err(CalculationError::invalid_input(
                    "sleep_hours",
                    h,
                    "sleep hours must be between 0 and 24",
                ));
            }
        }
        Self::check_scale("sleep_quality", self.sleep_quality)?;
        Self::check_scale("muscle_soreness", self.muscle_soreness)?;
        Self::check_scale("fatigue_level", self.fatigue_level)?;
        Self::check_scale("stress_level", self.stress_level)?;
        Self::check_scale("energy_level", self.energy_level)?;
        if let Some(rhr) = self.resting_heart_rate {
            if !(30..=200).contains(&rhr) {
                return Err(CalculationError::invalid_input(
                    "resting_heart_rate",
                    rhr,
                    "resting heart rate must be between 30 and 200 bpm",
                ));
            }
        }
        Ok(())
    }

    fn check_scale(field: &str, value: Option<u8>) -> Result<(), CalculationError> {
        if let Some(v) = value {
            if !(1..=10).contains(&v) {
                return Err(CalculationError::invalid_input(
                    field,
                    v,
                    "scale values must be between 1 and 10",
                ));
            }
        }
        Ok(())
    }

    /// True if no field is populated at all
    pub fn is_empty(&self) -> bool {
        self.sleep_hours.is_none()
            && self.sleep_quality.is_none()
            && self.muscle_soreness.is_none()
            && self.fatigue_level.is_none()
            && self.stress_level.is_none()
            && self.hrv.is_none()
            && self.resting_heart_rate.is_none()
            && self.energy_level.is_none()
    }
}

/// Recovery status classification (the diagnosis: how recovered you are)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl RecoveryStatus {
    /// Inclusive lower score bound for Excellent
    pub const EXCELLENT_MIN: u8 = 85;
    /// Inclusive lower score bound for Good
    pub const GOOD_MIN: u8 = 70;
    /// Inclusive lower score bound for Fair
    pub const FAIR_MIN: u8 = 50;
    /// Inclusive lower score bound for Poor; anything below is Critical
    pub const POOR_MIN: u8 = 30;

    /// Classify an overall recovery score (0-100) into a status bucket
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= Self::EXCELLENT_MIN => RecoveryStatus::Excellent,
            s if s >= Self::GOOD_MIN => RecoveryStatus::Good,
            s if s >= Self::FAIR_MIN => RecoveryStatus::Fair,
            s if s >= Self::POOR_MIN => RecoveryStatus::Poor,
            _ => RecoveryStatus::Critical,
        }
    }

    /// Get status description
    pub fn description(&self) -> &'static str {
        match self {
            RecoveryStatus::Excellent => "Fully recovered and ready for peak load",
            RecoveryStatus::Good => "Well recovered, normal training supported",
            RecoveryStatus::Fair => "Partially recovered, moderate load advised",
            RecoveryStatus::Poor => "Inadequate recovery, reduce training load",
            RecoveryStatus::Critical => "Recovery severely compromised, rest needed",
        }
    }
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryStatus::Excellent => write!(f, "Excellent"),
            RecoveryStatus::Good => write!(f, "Good"),
            RecoveryStatus::Fair => write!(f, "Fair"),
            RecoveryStatus::Poor => write!(f, "Poor"),
            RecoveryStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Recommended training intensity (the decision: what you should do)
///
/// Buckets mirror `RecoveryStatus` numerically but are a separate table;
/// the decision thresholds can move independently of the diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingIntensity {
    Rest,
    Light,
    Moderate,
    High,
    Intense,
}

impl TrainingIntensity {
    /// Inclusive lower score bound for Intense
    pub const INTENSE_MIN: u8 = 85;
    /// Inclusive lower score bound for High
    pub const HIGH_MIN: u8 = 70;
    /// Inclusive lower score bound for Moderate
    pub const MODERATE_MIN: u8 = 50;
    /// Inclusive lower score bound for Light; anything below is Rest
    pub const LIGHT_MIN: u8 = 30;

    /// Recommend an intensity for an overall recovery score (0-100)
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= Self::INTENSE_MIN => TrainingIntensity::Intense,
            s if s >= Self::HIGH_MIN => TrainingIntensity::High,
            s if s >= Self::MODERATE_MIN => TrainingIntensity::Moderate,
            s if s >= Self::LIGHT_MIN => TrainingIntensity::Light,
            _ => TrainingIntensity::Rest,
        }
    }

    /// Get intensity description
    pub fn description(&self) -> &'static str {
        match self {
            TrainingIntensity::Rest => "Complete rest or gentle mobility only",
            TrainingIntensity::Light => "Light technique work or active recovery",
            TrainingIntensity::Moderate => "Moderate volume at submaximal loads",
            TrainingIntensity::High => "Full planned session, heavy work supported",
            TrainingIntensity::Intense => "Peak loads, max-effort or test day supported",
        }
    }
}

impl fmt::Display for TrainingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingIntensity::Rest => write!(f, "Rest"),
            TrainingIntensity::Light => write!(f, "Light"),
            TrainingIntensity::Moderate => write!(f, "Moderate"),
            TrainingIntensity::High => write!(f, "High"),
            TrainingIntensity::Intense => write!(f, "Intense"),
        }
    }
}

/// Complete recovery assessment produced by the engine
///
/// Immutable once constructed; built fresh per call and owned entirely by
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Overall recovery score, 0-100
    pub overall_score: u8,

    /// Status classification of the overall score
    pub recovery_status: RecoveryStatus,

    /// Recommended training intensity for the day
    pub recommended_intensity: TrainingIntensity,

    /// Per-factor sub-scores (0-100), keyed by factor name
    pub component_scores: BTreeMap<String, f64>,

    /// Ordered training advice strings
    pub training_advice: Vec<String>,

    /// Ordered recovery advice strings
    pub recovery_advice: Vec<String>,

    /// Estimated days until full recovery
    pub estimated_recovery_days: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exercise_set_valid() {
        let set = ExerciseSet::new(dec!(100), 3, 5, Some(8)).unwrap();
        assert_eq!(set.weight, dec!(100));
        assert_eq!(set.sets, 3);
        assert_eq!(set.reps, 5);
        assert_eq!(set.perceived_exertion, Some(8));
    }

    #[test]
    fn test_exercise_set_zero_weight_allowed() {
        // Bodyweight movements log zero external load
        assert!(ExerciseSet::new(dec!(0), 3, 10, None).is_ok());
    }

    #[test]
    fn test_exercise_set_invariants() {
        assert!(ExerciseSet::new(dec!(-1), 3, 5, None).is_err());
        assert!(ExerciseSet::new(dec!(100), 0, 5, None).is_err());
        assert!(ExerciseSet::new(dec!(100), 3, 0, None).is_err());
    }

    #[test]
    fn test_recovery_inputs_default_is_empty() {
        let inputs = RecoveryInputs::default();
        assert!(inputs.is_empty());
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_recovery_inputs_range_checks() {
        let inputs = RecoveryInputs {
            sleep_hours: Some(25.0),
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = RecoveryInputs {
            sleep_quality: Some(11),
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = RecoveryInputs {
            stress_level: Some(0),
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = RecoveryInputs {
            resting_heart_rate: Some(20),
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = RecoveryInputs {
            sleep_hours: Some(8.0),
            resting_heart_rate: Some(55),
            hrv: Some(60),
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_status_buckets_at_boundaries() {
        assert_eq!(RecoveryStatus::from_score(85), RecoveryStatus::Excellent);
        assert_eq!(RecoveryStatus::from_score(84), RecoveryStatus::Good);
        assert_eq!(RecoveryStatus::from_score(70), RecoveryStatus::Good);
        assert_eq!(RecoveryStatus::from_score(69), RecoveryStatus::Fair);
        assert_eq!(RecoveryStatus::from_score(50), RecoveryStatus::Fair);
        assert_eq!(RecoveryStatus::from_score(49), RecoveryStatus::Poor);
        assert_eq!(RecoveryStatus::from_score(30), RecoveryStatus::Poor);
        assert_eq!(RecoveryStatus::from_score(29), RecoveryStatus::Critical);
        assert_eq!(RecoveryStatus::from_score(0), RecoveryStatus::Critical);
        assert_eq!(RecoveryStatus::from_score(100), RecoveryStatus::Excellent);
    }

    #[test]
    fn test_intensity_buckets_at_boundaries() {
        assert_eq!(TrainingIntensity::from_score(85), TrainingIntensity::Intense);
        assert_eq!(TrainingIntensity::from_score(84), TrainingIntensity::High);
        assert_eq!(TrainingIntensity::from_score(70), TrainingIntensity::High);
        assert_eq!(TrainingIntensity::from_score(69), TrainingIntensity::Moderate);
        assert_eq!(TrainingIntensity::from_score(50), TrainingIntensity::Moderate);
        assert_eq!(TrainingIntensity::from_score(49), TrainingIntensity::Light);
        assert_eq!(TrainingIntensity::from_score(30), TrainingIntensity::Light);
        assert_eq!(TrainingIntensity::from_score(29), TrainingIntensity::Rest);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", RecoveryStatus::Excellent), "Excellent");
        assert_eq!(format!("{}", TrainingIntensity::Rest), "Rest");
    }

    #[test]
    fn test_serialization_round_trip() {
        let set = ExerciseSet::new(dec!(62.5), 5, 5, Some(7)).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let back: ExerciseSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);

        let inputs = RecoveryInputs {
            sleep_hours: Some(7.5),
            sleep_quality: Some(8),
            hrv: Some(55),
            ..Default::default()
        };
        let json = serde_json::to_string(&inputs).unwrap();
        let back: RecoveryInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, back);
    }
}
