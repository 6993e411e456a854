//! Training volume and calorie estimation
//!
//! Volume is the classic tonnage figure: weight × sets × reps, computed
//! exactly with no rounding — display precision belongs to the caller.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::models::ExerciseSet;

/// Calorie burn per minute per intensity step on the 1-10 scale
///
/// A deliberately coarse linear proxy, not a metabolic model: a moderate
/// session (intensity 5) estimates 4.5 kcal/min.
pub const KCAL_PER_INTENSITY_MINUTE: Decimal = dec!(0.9);

/// Training volume and calorie calculations
pub struct VolumeCalculator;

impl VolumeCalculator {
    /// Training volume (tonnage): `weight × sets × reps`, exact
    ///
    /// Zero sets or reps yield zero volume; the stricter `ExerciseSet`
    /// invariants apply at record construction, not here.
    pub fn volume(weight: Decimal, sets: u16, reps: u16) -> Result<Decimal, CalculationError> {
        if weight < Decimal::ZERO {
            return Err(CalculationError::invalid_input(
                "weight",
                weight,
                "weight must be >= 0",
            ));
        }
        Ok(weight * Decimal::from(sets) * Decimal::from(reps))
    }

    /// Training volume for a validated exercise set
    pub fn volume_for_set(set: &ExerciseSet) -> Result<Decimal, CalculationError> {
        set.validate()?;
        Self::volume(set.weight, set.sets, set.reps)
    }

    /// Estimated calorie burn: `duration × intensity × KCAL_PER_INTENSITY_MINUTE`
    ///
    /// Intensity is the subjective 1-10 session scale.
    pub fn calories(
        duration_minutes: Decimal,
        intensity: u8,
    ) -> Result<Decimal, CalculationError> {
        if duration_minutes < Decimal::ZERO {
            return Err(CalculationError::invalid_input(
                "duration_minutes",
                duration_minutes,
                "duration must be >= 0",
            ));
        }
        if !(1..=10).contains(&intensity) {
            return Err(CalculationError::invalid_input(
                "intensity",
                intensity,
                "intensity must be between 1 and 10",
            ));
        }
        Ok(duration_minutes * Decimal::from(intensity) * KCAL_PER_INTENSITY_MINUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_volume_exact() {
        assert_eq!(
            VolumeCalculator::volume(dec!(60), 3, 12).unwrap(),
            dec!(2160)
        );
        assert_eq!(
            VolumeCalculator::volume(dec!(102.5), 5, 5).unwrap(),
            dec!(2562.5)
        );
    }

    #[test]
    fn test_volume_zero_cases() {
        assert_eq!(VolumeCalculator::volume(dec!(0), 3, 12).unwrap(), dec!(0));
        assert_eq!(VolumeCalculator::volume(dec!(60), 0, 12).unwrap(), dec!(0));
        assert_eq!(VolumeCalculator::volume(dec!(60), 3, 0).unwrap(), dec!(0));
    }

    #[test]
    fn test_volume_rejects_negative_weight() {
        assert!(VolumeCalculator::volume(dec!(-60), 3, 12).is_err());
    }

    #[test]
    fn test_volume_for_set() {
        let set = ExerciseSet::new(dec!(60), 3, 12, Some(7)).unwrap();
        assert_eq!(VolumeCalculator::volume_for_set(&set).unwrap(), dec!(2160));
    }

    #[test]
    fn test_volume_for_set_enforces_invariants() {
        let set = ExerciseSet {
            weight: dec!(60),
            sets: 0,
            reps: 12,
            perceived_exertion: None,
        };
        assert!(VolumeCalculator::volume_for_set(&set).is_err());
    }

    #[test]
    fn test_calories_linear_proxy() {
        // 60 min at intensity 5 → 60 × 5 × 0.9 = 270 kcal
        assert_eq!(
            VolumeCalculator::calories(dec!(60), 5).unwrap(),
            dec!(270.0)
        );
        // Zero duration is a valid no-op session
        assert_eq!(VolumeCalculator::calories(dec!(0), 5).unwrap(), dec!(0.0));
    }

    #[test]
    fn test_calories_input_checks() {
        assert!(VolumeCalculator::calories(dec!(-1), 5).is_err());
        assert!(VolumeCalculator::calories(dec!(60), 0).is_err());
        assert!(VolumeCalculator::calories(dec!(60), 11).is_err());
    }
}
