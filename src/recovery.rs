//! Multi-factor recovery scoring
//!
//! Combines sleep, heart-rate variability, resting heart rate, and the
//! subjective wellness markers (soreness, fatigue, stress, energy) into a
//! single 0-100 recovery score.
//!
//! # Sports Science Background
//!
//! No single signal captures recovery. Sleep quality and muscle soreness
//! are the strongest day-to-day markers and carry the heaviest weights;
//! HRV and resting heart rate corroborate from the physiological side;
//! subjective energy is the lightest signal. Each factor is normalized to
//! a 0-100 sub-score through its own monotonic curve, then the sub-scores
//! are combined as a weighted average.
//!
//! # Missing fields
//!
//! Wearables and manual check-ins rarely deliver the full field set. A
//! missing factor is excluded from the average and its weight is
//! redistributed proportionally across the present factors — a partial
//! submission is never penalized as if the absent signals were bad. With
//! no fields at all the scorer returns a neutral 50: no data is not the
//! same as poor recovery.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::CalculationError;
use crate::models::{RecoveryInputs, RecoveryStatus};

/// Sleep hours at which the duration sub-score plateaus at 100
const SLEEP_PLATEAU_HOURS: f64 = 8.0;

/// RMSSD (ms) at which the HRV sub-score plateaus at 100
const HRV_CEILING_MS: f64 = 100.0;

/// Resting heart rate scoring anchors: 40 bpm or lower scores 100,
/// 100 bpm or higher scores 0, linear in between
const RESTING_HR_BEST: f64 = 40.0;
const RESTING_HR_WORST: f64 = 100.0;

/// Overall score returned when no factor is present at all
pub const NEUTRAL_SCORE: u8 = 50;

/// The scorable recovery factors, in component-score key order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecoveryFactor {
    SleepDuration,
    SleepQuality,
    MuscleSoreness,
    FatigueLevel,
    StressLevel,
    Hrv,
    RestingHeartRate,
    EnergyLevel,
}

impl RecoveryFactor {
    /// Stable key used in `Assessment::component_scores`
    pub fn key(&self) -> &'static str {
        match self {
            RecoveryFactor::SleepDuration => "sleep_duration",
            RecoveryFactor::SleepQuality => "sleep_quality",
            RecoveryFactor::MuscleSoreness => "muscle_soreness",
            RecoveryFactor::FatigueLevel => "fatigue_level",
            RecoveryFactor::StressLevel => "stress_level",
            RecoveryFactor::Hrv => "hrv",
            RecoveryFactor::RestingHeartRate => "resting_heart_rate",
            RecoveryFactor::EnergyLevel => "energy_level",
        }
    }
}

impl fmt::Display for RecoveryFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Per-factor weights for the overall recovery score
///
/// The fixed tuning table for the scorer. Weights must sum to 1 over the
/// full factor set; when factors are missing the present weights are
/// renormalized at scoring time, so relative proportions are what matter.
///
/// Defaults: sleep quality and soreness carry the most weight (0.20
/// each), fatigue and stress follow (0.125), sleep duration and HRV are
/// moderate (0.10), resting heart rate and energy are lightest (0.075).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub sleep_duration: f64,
    pub sleep_quality: f64,
    pub muscle_soreness: f64,
    pub fatigue_level: f64,
    pub stress_level: f64,
    pub hrv: f64,
    pub resting_heart_rate: f64,
    pub energy_level: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            sleep_duration: 0.10,
            sleep_quality: 0.20,
            muscle_soreness: 0.20,
            fatigue_level: 0.125,
            stress_level: 0.125,
            hrv: 0.10,
            resting_heart_rate: 0.075,
            energy_level: 0.075,
        }
    }
}

impl ScoringWeights {
    /// Weight for a single factor
    pub fn weight_for(&self, factor: RecoveryFactor) -> f64 {
        match factor {
            RecoveryFactor::SleepDuration => self.sleep_duration,
            RecoveryFactor::SleepQuality => self.sleep_quality,
            RecoveryFactor::MuscleSoreness => self.muscle_soreness,
            RecoveryFactor::FatigueLevel => self.fatigue_level,
            RecoveryFactor::StressLevel => self.stress_level,
            RecoveryFactor::Hrv => self.hrv,
            RecoveryFactor::RestingHeartRate => self.resting_heart_rate,
            RecoveryFactor::EnergyLevel => self.energy_level,
        }
    }

    /// Check the table is usable: every weight non-negative, sum positive
    pub fn validate(&self) -> Result<(), CalculationError> {
        let weights = [
            self.sleep_duration,
            self.sleep_quality,
            self.muscle_soreness,
            self.fatigue_level,
            self.stress_level,
            self.hrv,
            self.resting_heart_rate,
            self.energy_level,
        ];
        for w in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(CalculationError::invalid_input(
                    "scoring_weights",
                    w,
                    "weights must be finite and >= 0",
                ));
            }
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(CalculationError::invalid_input(
                "scoring_weights",
                0,
                "at least one weight must be positive",
            ));
        }
        Ok(())
    }
}

/// Scoring result: overall score, status, and per-factor breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryScore {
    /// Overall recovery score, 0-100
    pub overall: u8,

    /// Status classification of the overall score
    pub status: RecoveryStatus,

    /// Sub-scores (0-100) for the factors that were present
    pub components: BTreeMap<String, f64>,
}

/// Multi-factor recovery scoring engine
pub struct RecoveryScorer {
    weights: ScoringWeights,
}

impl Default for RecoveryScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecoveryScorer {
    /// Scorer with the default weight table
    pub fn new() -> Self {
        RecoveryScorer {
            weights: ScoringWeights::default(),
        }
    }

    /// Scorer with a custom weight table
    pub fn with_weights(weights: ScoringWeights) -> Self {
        RecoveryScorer { weights }
    }

    /// Score a set of recovery inputs
    ///
    /// Present fields must be within their documented ranges; missing
    /// fields are excluded from the weighted average.
    pub fn score(&self, inputs: &RecoveryInputs) -> Result<RecoveryScore, CalculationError> {
        inputs.validate()?;
        self.weights.validate()?;

        let mut components = BTreeMap::new();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for (factor, sub_score) in Self::sub_scores(inputs) {
            if let Some(sub_score) = sub_score {
                let weight = self.weights.weight_for(factor);
                components.insert(factor.key().to_string(), sub_score);
                weighted_sum += sub_score * weight;
                weight_total += weight;
            }
        }

        let overall = if weight_total > 0.0 {
            clamp_score(weighted_sum / weight_total)
        } else {
            NEUTRAL_SCORE
        };

        let status = RecoveryStatus::from_score(overall);
        tracing::debug!(
            overall,
            %status,
            factors = components.len(),
            "recovery score computed"
        );

        Ok(RecoveryScore {
            overall,
            status,
            components,
        })
    }

    /// Sub-scores for every factor, `None` where the input is absent
    fn sub_scores(inputs: &RecoveryInputs) -> [(RecoveryFactor, Option<f64>); 8] {
        [
            (
                RecoveryFactor::SleepDuration,
                inputs.sleep_hours.map(score_sleep_duration),
            ),
            (
                RecoveryFactor::SleepQuality,
                inputs.sleep_quality.map(score_positive_scale),
            ),
            (
                RecoveryFactor::MuscleSoreness,
                inputs.muscle_soreness.map(score_inverted_scale),
            ),
            (
                RecoveryFactor::FatigueLevel,
                inputs.fatigue_level.map(score_inverted_scale),
            ),
            (
                RecoveryFactor::StressLevel,
                inputs.stress_level.map(score_inverted_scale),
            ),
            (RecoveryFactor::Hrv, inputs.hrv.map(score_hrv)),
            (
                RecoveryFactor::RestingHeartRate,
                inputs.resting_heart_rate.map(score_resting_hr),
            ),
            (
                RecoveryFactor::EnergyLevel,
                inputs.energy_level.map(score_positive_scale),
            ),
        ]
    }
}

/// Sleep duration: linear up to the 8-hour plateau
///
/// 0 h → 0, 4 h → 50, 8 h and beyond → 100. Oversleeping is not penalized;
/// the curve stays monotonic non-decreasing over the whole 0-24 h domain.
fn score_sleep_duration(hours: f64) -> f64 {
    ((hours / SLEEP_PLATEAU_HOURS) * 100.0).clamp(0.0, 100.0)
}

/// Positive 1-10 scale (quality, energy): 1 → 0, 10 → 100, linear
fn score_positive_scale(value: u8) -> f64 {
    (f64::from(value) - 1.0) / 9.0 * 100.0
}

/// Inverted 1-10 scale (soreness, fatigue, stress; 10 = worst): 1 → 100, 10 → 0
fn score_inverted_scale(value: u8) -> f64 {
    (10.0 - f64::from(value)) / 9.0 * 100.0
}

/// HRV (RMSSD ms) on an absolute scale, plateau at 100 ms
///
/// Without a personal baseline the absolute scale is the defensible
/// mapping: elite RMSSD sits at 60-100 ms+, low-recovery readings under
/// 30 ms.
fn score_hrv(rmssd_ms: u16) -> f64 {
    f64::from(rmssd_ms).min(HRV_CEILING_MS) / HRV_CEILING_MS * 100.0
}

/// Resting heart rate, inverted linear between the 40/100 bpm anchors
fn score_resting_hr(bpm: u16) -> f64 {
    let span = RESTING_HR_WORST - RESTING_HR_BEST;
    ((RESTING_HR_WORST - f64::from(bpm)) / span * 100.0).clamp(0.0, 100.0)
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}
