//! Training stress calculation
//!
//! Training stress is a single scalar proxy for the physical load of a
//! session: linear in tonnage, amplified by how hard the work felt. Two
//! sessions of equal volume at different RPE must come out different.
//!
//! The scale is calibrated so a typical accessory session (2 000 kg
//! tonnage at RPE 5) lands around 100 stress, in the same ballpark as an
//! hour of threshold endurance work on TSS-style scales.

use rust_decimal::Decimal;

use crate::error::CalculationError;
use crate::models::ExerciseSet;
use crate::volume::VolumeCalculator;

/// Divisor anchoring the stress scale (see module docs)
const STRESS_SCALE: u32 = 100;

/// RPE assumed when the athlete logged none
pub const NEUTRAL_RPE: u8 = 5;

/// Training stress engine
pub struct TrainingStressCalculator;

impl TrainingStressCalculator {
    /// Training stress from volume and RPE: `volume × rpe / 100`
    ///
    /// RPE outside 1-10 is clamped rather than rejected — the value
    /// commonly arrives from loosely validated UI input, and a clamp is
    /// the documented tolerance for this one secondary signal.
    pub fn training_stress(volume: Decimal, rpe: u8) -> Result<Decimal, CalculationError> {
        if volume < Decimal::ZERO {
            return Err(CalculationError::invalid_input(
                "volume",
                volume,
                "volume must be >= 0",
            ));
        }
        let rpe = rpe.clamp(1, 10);
        Ok(volume * Decimal::from(rpe) / Decimal::from(STRESS_SCALE))
    }

    /// Training stress for a validated exercise set
    ///
    /// Uses the set's logged RPE, or [`NEUTRAL_RPE`] when absent.
    pub fn stress_for_set(set: &ExerciseSet) -> Result<Decimal, CalculationError> {
        let volume = VolumeCalculator::volume_for_set(set)?;
        Self::training_stress(volume, set.perceived_exertion.unwrap_or(NEUTRAL_RPE))
    }
}
