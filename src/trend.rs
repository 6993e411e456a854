//! Load trend aggregation over a date range
//!
//! Turns an unordered pile of dated workout-stress and recovery records
//! into an ascending per-day series. Same-day stress records sum
//! (cumulative daily load); same-day recovery records average (a single
//! daily recovery state). Days without data are omitted unless the caller
//! explicitly asks for a densified series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CalculationError;
use crate::models::RecoveryInputs;
use crate::recovery::{RecoveryScorer, ScoringWeights};

/// A dated input record for trend aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrendRecord {
    /// A workout's computed training stress
    Workout {
        date: NaiveDate,
        training_stress: Decimal,
    },
    /// A daily recovery check-in, scored during aggregation
    Recovery {
        date: NaiveDate,
        inputs: RecoveryInputs,
    },
}

impl TrendRecord {
    /// Date the record belongs to
    pub fn date(&self) -> NaiveDate {
        match self {
            TrendRecord::Workout { date, .. } => *date,
            TrendRecord::Recovery { date, .. } => *date,
        }
    }
}

/// One point of the trend series
///
/// At least one side is populated for non-densified output; a day that
/// only has workout records carries no fabricated recovery score, and
/// vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTrendPoint {
    /// Date of this point
    pub date: NaiveDate,

    /// Total training stress for the day (sum over the day's workouts)
    pub training_stress: Option<Decimal>,

    /// Mean recovery score for the day (average over the day's check-ins)
    pub recovery_score: Option<u8>,
}

/// Trend aggregation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Emit one point per calendar day in range, data or not.
    /// Empty days carry `None` on both sides — explicitly not zero-filled.
    pub densify: bool,
}

impl Default for TrendConfig {
    fn default() -> Self {
        TrendConfig { densify: false }
    }
}

/// Per-day accumulator used during grouping
#[derive(Debug, Default)]
struct DayAccumulator {
    stress_total: Option<Decimal>,
    recovery_score_sum: u32,
    recovery_count: u32,
}

/// Load trend aggregation engine
pub struct LoadTrendAggregator {
    config: TrendConfig,
    scorer: RecoveryScorer,
}

impl Default for LoadTrendAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadTrendAggregator {
    /// Aggregator with default configuration and scoring weights
    pub fn new() -> Self {
        LoadTrendAggregator {
            config: TrendConfig::default(),
            scorer: RecoveryScorer::new(),
        }
    }

    /// Aggregator with custom configuration
    pub fn with_config(config: TrendConfig) -> Self {
        LoadTrendAggregator {
            config,
            scorer: RecoveryScorer::new(),
        }
    }

    /// Aggregator with custom configuration and scoring weights
    pub fn with_config_and_weights(config: TrendConfig, weights: ScoringWeights) -> Self {
        LoadTrendAggregator {
            config,
            scorer: RecoveryScorer::with_weights(weights),
        }
    }

    /// Aggregate records in [start, end] inclusive into an ascending series
    ///
    /// An empty result for a valid range is not an error. Input order is
    /// irrelevant; grouping is sort-then-group via `BTreeMap`.
    pub fn trend(
        &self,
        records: &[TrendRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LoadTrendPoint>, CalculationError> {
        if start > end {
            return Err(CalculationError::InvalidRange { start, end });
        }

        let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

        for record in records {
            let date = record.date();
            if date < start || date > end {
                continue;
            }

            match record {
                TrendRecord::Workout {
                    training_stress, ..
                } => {
                    if *training_stress < Decimal::ZERO {
                        return Err(CalculationError::invalid_input(
                            "training_stress",
                            training_stress,
                            "training stress must be >= 0",
                        ));
                    }
                    let day = days.entry(date).or_default();
                    day.stress_total =
                        Some(day.stress_total.unwrap_or(Decimal::ZERO) + training_stress);
                }
                TrendRecord::Recovery { inputs, .. } => {
                    let score = self.scorer.score(inputs)?;
                    let day = days.entry(date).or_default();
                    day.recovery_score_sum += u32::from(score.overall);
                    day.recovery_count += 1;
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            days = days.len(),
            %start,
            %end,
            "trend aggregated"
        );

        if self.config.densify {
            Ok(start
                .iter_days()
                .take_while(|d| *d <= end)
                .map(|date| match days.get(&date) {
                    Some(day) => Self::point(date, day),
                    None => LoadTrendPoint {
                        date,
                        training_stress: None,
                        recovery_score: None,
                    },
                })
                .collect())
        } else {
            Ok(days
                .iter()
                .map(|(date, day)| Self::point(*date, day))
                .collect())
        }
    }

    fn point(date: NaiveDate, day: &DayAccumulator) -> LoadTrendPoint {
        let recovery_score = if day.recovery_count > 0 {
            let mean = f64::from(day.recovery_score_sum) / f64::from(day.recovery_count);
            Some(mean.round().clamp(0.0, 100.0) as u8)
        } else {
            None
        };
        LoadTrendPoint {
            date,
            training_stress: day.stress_total,
            recovery_score,
        }
    }
}
