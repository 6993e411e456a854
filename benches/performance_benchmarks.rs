use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use liftrs::models::RecoveryInputs;
use liftrs::onerm::{OneRepMaxEstimator, OneRepMaxModel};
use liftrs::recovery::RecoveryScorer;
use liftrs::trend::{LoadTrendAggregator, TrendRecord};

/// Performance benchmarks for the assessment engine
///
/// Trend aggregation is the only operation whose cost grows with input
/// size; the benchmarks check it scales sort-then-group, not quadratic.

fn sample_inputs() -> RecoveryInputs {
    RecoveryInputs {
        sleep_hours: Some(7.5),
        sleep_quality: Some(7),
        muscle_soreness: Some(4),
        fatigue_level: Some(4),
        stress_level: Some(5),
        hrv: Some(55),
        resting_heart_rate: Some(52),
        energy_level: Some(7),
    }
}

fn record_series(days: u32) -> Vec<TrendRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut records = Vec::new();
    for offset in 0..days {
        let date = start + chrono::Days::new(u64::from(offset));
        records.push(TrendRecord::Workout {
            date,
            training_stress: Decimal::from(80 + (offset % 7) * 15),
        });
        records.push(TrendRecord::Recovery {
            date,
            inputs: sample_inputs(),
        });
    }
    records
}

fn bench_onerm_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("1RM Estimation");

    for model in OneRepMaxEstimator::supported_models() {
        group.bench_with_input(
            BenchmarkId::new("estimate", model.name()),
            model,
            |b, model| {
                b.iter(|| {
                    OneRepMaxEstimator::estimate(
                        black_box(Decimal::from(100)),
                        black_box(5),
                        *model,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_recovery_scoring(c: &mut Criterion) {
    let scorer = RecoveryScorer::new();
    let inputs = sample_inputs();

    c.bench_function("recovery_score_full_inputs", |b| {
        b.iter(|| scorer.score(black_box(&inputs)));
    });
}

fn bench_trend_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Trend Aggregation");
    let aggregator = LoadTrendAggregator::new();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for &days in &[7u32, 30, 90, 365] {
        let records = record_series(days);
        let end = start + chrono::Days::new(u64::from(days));

        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(
            BenchmarkId::new("trend", days),
            &records,
            |b, records| {
                b.iter(|| aggregator.trend(black_box(records), start, end));
            },
        );
    }

    group.finish();
}

fn bench_full_assessment(c: &mut Criterion) {
    let assessor = liftrs::assessment::RecoveryAssessor::new();
    let inputs = sample_inputs();

    c.bench_function("full_assessment_pipeline", |b| {
        b.iter(|| assessor.assess(black_box(&inputs)));
    });
}

criterion_group!(
    benches,
    bench_onerm_estimation,
    bench_recovery_scoring,
    bench_trend_aggregation,
    bench_full_assessment
);
criterion_main!(benches);
