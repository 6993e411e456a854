//! One-rep-max estimation module
//!
//! Provides the classic closed-form strength-training estimators for
//! one-rep maximum (1RM) from a sub-maximal weight/rep pair.
//!
//! All formulas agree on one thing only: a single rep at a given weight
//! estimates exactly that weight. Above ~12 reps every estimator loses
//! reliability, but each still computes over its mathematical domain.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculationError;

/// Supported one-rep-max estimation formulas
///
/// Closed set: adding a model is a code change, not configuration. The
/// declaration order here is the contract order exposed through
/// [`OneRepMaxEstimator::supported_models`] and must not change silently —
/// embedding layers present it verbatim as a user-facing menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OneRepMaxModel {
    /// Epley (1985): `w × (1 + r/30)`
    Epley,
    /// Brzycki (1993): `w × 36 / (37 − r)`, undefined at r >= 37
    Brzycki,
    /// Lombardi (1989): `w × r^0.10`
    Lombardi,
    /// O'Conner (1989): `w × (1 + 0.025r)`
    OConner,
    /// Mayhew et al. (1992): `100w / (52.2 + 41.9·e^(−0.055r))`
    Mayhew,
}

impl OneRepMaxModel {
    /// Canonical model name as exposed to callers
    pub fn name(&self) -> &'static str {
        match self {
            OneRepMaxModel::Epley => "Epley",
            OneRepMaxModel::Brzycki => "Brzycki",
            OneRepMaxModel::Lombardi => "Lombardi",
            OneRepMaxModel::OConner => "OConner",
            OneRepMaxModel::Mayhew => "Mayhew",
        }
    }
}

impl fmt::Display for OneRepMaxModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OneRepMaxModel {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(OneRepMaxModel::Epley),
            "brzycki" => Ok(OneRepMaxModel::Brzycki),
            "lombardi" => Ok(OneRepMaxModel::Lombardi),
            "oconner" | "o'conner" => Ok(OneRepMaxModel::OConner),
            "mayhew" => Ok(OneRepMaxModel::Mayhew),
            _ => Err(CalculationError::UnsupportedModel {
                model: s.to_string(),
            }),
        }
    }
}

/// One-rep-max estimation engine
pub struct OneRepMaxEstimator;

impl OneRepMaxEstimator {
    /// Models in contract order
    const MODELS: [OneRepMaxModel; 5] = [
        OneRepMaxModel::Epley,
        OneRepMaxModel::Brzycki,
        OneRepMaxModel::Lombardi,
        OneRepMaxModel::OConner,
        OneRepMaxModel::Mayhew,
    ];

    /// The supported models, in stable contract order
    pub fn supported_models() -> &'static [OneRepMaxModel] {
        &Self::MODELS
    }

    /// Estimate one-rep max under the default Epley formula
    pub fn estimate_default(weight: Decimal, reps: u16) -> Result<Decimal, CalculationError> {
        Self::estimate(weight, reps, OneRepMaxModel::Epley)
    }

    /// Estimate one-rep max from a weight/rep pair under the named formula
    ///
    /// A single rep returns the weight unchanged for every model; the
    /// nonlinear estimators do not all pass through identity at r = 1, so
    /// the convergence is enforced here rather than left to the formulas.
    pub fn estimate(
        weight: Decimal,
        reps: u16,
        model: OneRepMaxModel,
    ) -> Result<Decimal, CalculationError> {
        if weight < Decimal::ZERO {
            return Err(CalculationError::invalid_input(
                "weight",
                weight,
                "weight must be >= 0",
            ));
        }
        if reps == 0 {
            return Err(CalculationError::invalid_input(
                "reps",
                reps,
                "reps must be >= 1",
            ));
        }
        if reps == 1 {
            return Ok(weight);
        }

        match model {
            // Rational formulas stay in Decimal for exact arithmetic
            OneRepMaxModel::Epley => {
                // w × (1 + r/30) = w × (30 + r) / 30
                Ok(weight * Decimal::from(30 + u32::from(reps)) / Decimal::from(30))
            }
            OneRepMaxModel::Brzycki => {
                if reps >= 37 {
                    return Err(CalculationError::UndefinedFormula {
                        formula: "Brzycki".to_string(),
                        reason: format!("denominator 37 - reps is <= 0 at reps = {}", reps),
                    });
                }
                Ok(weight * Decimal::from(36) / Decimal::from(37 - reps))
            }
            OneRepMaxModel::OConner => {
                // w × (1 + 0.025r) = w × (1000 + 25r) / 1000
                Ok(weight * Decimal::from(1000 + 25 * u32::from(reps)) / Decimal::from(1000))
            }
            // Power/exponential formulas go through f64, as elsewhere in the
            // crate for non-rational math
            OneRepMaxModel::Lombardi => {
                let w = Self::to_f64(weight)?;
                let est = w * f64::from(reps).powf(0.10);
                Self::from_f64(est, "Lombardi")
            }
            OneRepMaxModel::Mayhew => {
                let w = Self::to_f64(weight)?;
                let denominator = 52.2 + 41.9 * (-0.055 * f64::from(reps)).exp();
                if denominator <= 0.0 || !denominator.is_finite() {
                    return Err(CalculationError::UndefinedFormula {
                        formula: "Mayhew".to_string(),
                        reason: format!("denominator {} is not positive", denominator),
                    });
                }
                Self::from_f64((100.0 * w) / denominator, "Mayhew")
            }
        }
    }

    fn to_f64(weight: Decimal) -> Result<f64, CalculationError> {
        weight.to_f64().ok_or_else(|| {
            CalculationError::invalid_input("weight", weight, "weight is not representable")
        })
    }

    fn from_f64(value: f64, formula: &str) -> Result<Decimal, CalculationError> {
        if !value.is_finite() {
            return Err(CalculationError::UndefinedFormula {
                formula: formula.to_string(),
                reason: format!("result {} is not finite", value),
            });
        }
        Decimal::from_f64(value).ok_or_else(|| CalculationError::UndefinedFormula {
            formula: formula.to_string(),
            reason: format!("result {} is not representable", value),
        })
    }
}
