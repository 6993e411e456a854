//! Fatigue index derivation
//!
//! The fatigue index flags overtraining risk by scaling recent training
//! stress against recovery state: the same session load weighs heavier on
//! an under-recovered athlete. Fully recovered (score 100) zeroes the
//! index regardless of load; fully depleted (score 0) passes the stress
//! through unattenuated.

use rust_decimal::Decimal;

use crate::error::CalculationError;

/// Interpretation bands for the fatigue index
///
/// Calibrated to the stress scale where a typical session lands near 100:
/// an index above one session-equivalent of unmitigated load is a red flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatigueBand {
    /// Index below 25: load is well absorbed
    Low,
    /// Index 25-75: normal training fatigue
    Moderate,
    /// Index 75-150: monitor closely, recovery is lagging the load
    High,
    /// Index 150 and above: overtraining risk
    Severe,
}

impl FatigueBand {
    /// Classify a fatigue index value
    pub fn from_index(index: Decimal) -> Self {
        if index < Decimal::from(25) {
            FatigueBand::Low
        } else if index < Decimal::from(75) {
            FatigueBand::Moderate
        } else if index < Decimal::from(150) {
            FatigueBand::High
        } else {
            FatigueBand::Severe
        }
    }

    /// Get band description
    pub fn description(&self) -> &'static str {
        match self {
            FatigueBand::Low => "Load is well absorbed",
            FatigueBand::Moderate => "Normal training fatigue",
            FatigueBand::High => "Recovery is lagging the training load",
            FatigueBand::Severe => "Overtraining risk, back off",
        }
    }
}

/// Fatigue index engine
pub struct FatigueIndexCalculator;

impl FatigueIndexCalculator {
    /// Fatigue index: `training_stress × (100 − recovery_score) / 100`
    ///
    /// Rises with accumulated stress, falls with good recovery; never
    /// negative.
    pub fn fatigue_index(
        training_stress: Decimal,
        recovery_score: u8,
    ) -> Result<Decimal, CalculationError> {
        if training_stress < Decimal::ZERO {
            return Err(CalculationError::invalid_input(
                "training_stress",
                training_stress,
                "training stress must be >= 0",
            ));
        }
        if recovery_score > 100 {
            return Err(CalculationError::invalid_input(
                "recovery_score",
                recovery_score,
                "recovery score must be between 0 and 100",
            ));
        }

        let deficit = Decimal::from(100 - u32::from(recovery_score));
        let index = training_stress * deficit / Decimal::from(100);
        Ok(index.max(Decimal::ZERO))
    }
}
