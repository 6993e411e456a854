//! Training intensity recommendation
//!
//! Pure classification of a recovery score into what the athlete should
//! do today. The buckets mirror the status table numerically but are a
//! separate mapping: the decision (train hard, back off) is allowed to
//! move independently of the diagnosis (how recovered you are).

use crate::error::CalculationError;
use crate::models::TrainingIntensity;

/// Intensity recommendation engine
pub struct IntensityRecommender;

impl IntensityRecommender {
    /// Recommend a training intensity for a recovery score (0-100)
    ///
    /// Bucket table (inclusive lower bounds): <30 Rest, 30 Light,
    /// 50 Moderate, 70 High, 85 Intense — see the named constants on
    /// [`TrainingIntensity`].
    pub fn recommend(recovery_score: u8) -> Result<TrainingIntensity, CalculationError> {
        if recovery_score > 100 {
            return Err(CalculationError::invalid_input(
                "recovery_score",
                recovery_score,
                "recovery score must be between 0 and 100",
            ));
        }
        Ok(TrainingIntensity::from_score(recovery_score))
    }
}
