// Library interface for the liftrs engine modules
// This allows the CLI and integration tests to access the core functionality

pub mod advice;
pub mod assessment;
pub mod config;
pub mod error;
pub mod export;
pub mod fatigue;
pub mod intensity;
pub mod logging;
pub mod models;
pub mod onerm;
pub mod recovery;
pub mod stress;
pub mod trend;
pub mod volume;

// Re-export commonly used types for convenience
pub use advice::{Advice, AdviceGenerator};
pub use assessment::{LoadedAssessment, RecoveryAssessor};
pub use config::AppConfig;
pub use error::{CalculationError, LiftRsError, Result};
pub use fatigue::{FatigueBand, FatigueIndexCalculator};
pub use intensity::IntensityRecommender;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{
    Assessment, ExerciseSet, RecoveryInputs, RecoveryStatus, TrainingIntensity,
};
pub use onerm::{OneRepMaxEstimator, OneRepMaxModel};
pub use recovery::{RecoveryFactor, RecoveryScore, RecoveryScorer, ScoringWeights};
pub use stress::TrainingStressCalculator;
pub use trend::{LoadTrendAggregator, LoadTrendPoint, TrendConfig, TrendRecord};
pub use volume::VolumeCalculator;
