use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tabled::{Table, Tabled};

use liftrs::assessment::RecoveryAssessor;
use liftrs::config::AppConfig;
use liftrs::export;
use liftrs::fatigue::FatigueBand;
use liftrs::logging::{self, LogLevel};
use liftrs::models::{Assessment, RecoveryInputs};
use liftrs::onerm::{OneRepMaxEstimator, OneRepMaxModel};
use liftrs::trend::{LoadTrendAggregator, TrendConfig, TrendRecord};
use liftrs::volume::VolumeCalculator;

/// liftrs - Training Load & Recovery Analysis CLI
///
/// Turns raw workout and physiological inputs into one-rep-max estimates,
/// training stress, recovery scores, and training recommendations.
#[derive(Parser)]
#[command(name = "liftrs")]
#[command(version = "0.1.0")]
#[command(about = "Training load and recovery analysis", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate one-rep max from a weight/rep pair
    Onerm {
        /// Weight lifted
        #[arg(short, long)]
        weight: Decimal,

        /// Repetitions performed
        #[arg(short, long)]
        reps: u16,

        /// Formula to use (default: Epley); see `liftrs models`
        #[arg(short, long)]
        model: Option<String>,

        /// Show every supported formula side by side
        #[arg(short, long)]
        all: bool,
    },

    /// List the supported one-rep-max models in contract order
    Models,

    /// Calculate training volume and optional calorie estimate
    Volume {
        /// Weight lifted
        #[arg(short, long)]
        weight: Decimal,

        /// Number of sets
        #[arg(short, long)]
        sets: u16,

        /// Repetitions per set
        #[arg(short, long)]
        reps: u16,

        /// Session duration in minutes (enables the calorie estimate)
        #[arg(short, long)]
        duration: Option<Decimal>,

        /// Session intensity 1-10 (with --duration)
        #[arg(short, long)]
        intensity: Option<u8>,
    },

    /// Run a recovery assessment from daily check-in values
    Assess {
        /// Read RecoveryInputs from a JSON file instead of flags
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Hours slept (0-24)
        #[arg(long)]
        sleep_hours: Option<f64>,

        /// Sleep quality (1-10)
        #[arg(long)]
        sleep_quality: Option<u8>,

        /// Muscle soreness (1-10, 10 = worst)
        #[arg(long)]
        soreness: Option<u8>,

        /// Fatigue level (1-10, 10 = worst)
        #[arg(long)]
        fatigue: Option<u8>,

        /// Stress level (1-10, 10 = worst)
        #[arg(long)]
        stress: Option<u8>,

        /// HRV (RMSSD, ms)
        #[arg(long)]
        hrv: Option<u16>,

        /// Resting heart rate (30-200 bpm)
        #[arg(long)]
        resting_hr: Option<u16>,

        /// Energy level (1-10)
        #[arg(long)]
        energy: Option<u8>,

        /// Today's training stress; adds a fatigue-index reading
        #[arg(long)]
        training_stress: Option<Decimal>,

        /// Write the full assessment as JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Aggregate a trend series from a JSON record file
    Trend {
        /// JSON file with an array of trend records
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        /// Emit one point per calendar day, data or not
        #[arg(short, long)]
        densify: bool,

        /// Write the series to a file (format from extension: .csv or .json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Tabled)]
struct OneRmRow {
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Estimated 1RM")]
    estimate: String,
}

#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Sub-score")]
    score: String,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Training Stress")]
    stress: String,
    #[tabled(rename = "Recovery Score")]
    recovery: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    let mut log_config = config.log.clone();
    log_config.level = match cli.verbose {
        0 => log_config.level,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };
    logging::init_logging(&log_config)?;

    match cli.command {
        Commands::Onerm {
            weight,
            reps,
            model,
            all,
        } => run_onerm(weight, reps, model, all),
        Commands::Models => {
            println!("{}", "Supported one-rep-max models:".blue().bold());
            for model in OneRepMaxEstimator::supported_models() {
                println!("  {}", model.name());
            }
            Ok(())
        }
        Commands::Volume {
            weight,
            sets,
            reps,
            duration,
            intensity,
        } => run_volume(weight, sets, reps, duration, intensity),
        Commands::Assess {
            file,
            sleep_hours,
            sleep_quality,
            soreness,
            fatigue,
            stress,
            hrv,
            resting_hr,
            energy,
            training_stress,
            output,
        } => {
            let inputs = match file {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)?;
                    serde_json::from_str(&content)?
                }
                None => RecoveryInputs {
                    sleep_hours,
                    sleep_quality,
                    muscle_soreness: soreness,
                    fatigue_level: fatigue,
                    stress_level: stress,
                    hrv,
                    resting_heart_rate: resting_hr,
                    energy_level: energy,
                },
            };
            run_assess(&config, &inputs, training_stress, output)
        }
        Commands::Trend {
            file,
            from,
            to,
            densify,
            output,
        } => run_trend(&config, &file, from, to, densify, output),
    }
}

fn run_onerm(weight: Decimal, reps: u16, model: Option<String>, all: bool) -> Result<()> {
    println!("{}", "Estimating one-rep max...".blue().bold());

    if all {
        let rows: Vec<OneRmRow> = OneRepMaxEstimator::supported_models()
            .iter()
            .map(|m| {
                let estimate = match OneRepMaxEstimator::estimate(weight, reps, *m) {
                    Ok(est) => format!("{:.1}", est),
                    Err(e) => e.to_string(),
                };
                OneRmRow {
                    model: m.name().to_string(),
                    estimate,
                }
            })
            .collect();
        println!("{}", Table::new(rows));
        return Ok(());
    }

    let model = match model {
        Some(name) => name.parse::<OneRepMaxModel>()?,
        None => OneRepMaxModel::Epley,
    };
    let estimate = OneRepMaxEstimator::estimate(weight, reps, model)?;
    println!(
        "  {} x {} reps -> {} ({})",
        weight,
        reps,
        format!("{:.1}", estimate).green().bold(),
        model
    );
    Ok(())
}

fn run_volume(
    weight: Decimal,
    sets: u16,
    reps: u16,
    duration: Option<Decimal>,
    intensity: Option<u8>,
) -> Result<()> {
    println!("{}", "Calculating training volume...".blue().bold());
    let volume = VolumeCalculator::volume(weight, sets, reps)?;
    println!(
        "  {} x {} x {} = {} volume",
        weight,
        sets,
        reps,
        volume.to_string().green().bold()
    );

    if let Some(duration) = duration {
        let intensity = intensity
            .ok_or_else(|| anyhow!("--intensity is required together with --duration"))?;
        let calories = VolumeCalculator::calories(duration, intensity)?;
        println!(
            "  ~{} kcal over {} minutes at intensity {}",
            format!("{:.0}", calories).green(),
            duration,
            intensity
        );
    }
    Ok(())
}

fn run_assess(
    config: &AppConfig,
    inputs: &RecoveryInputs,
    training_stress: Option<Decimal>,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("{}", "Running recovery assessment...".blue().bold());

    let assessor = RecoveryAssessor::with_weights(config.scoring.clone());
    let assessment = match training_stress {
        Some(stress) => {
            let loaded = assessor.assess_with_stress(inputs, stress)?;
            let band = FatigueBand::from_index(loaded.fatigue_index);
            println!(
                "  Fatigue index:  {} ({})",
                format!("{:.1}", loaded.fatigue_index).yellow().bold(),
                band.description()
            );
            loaded.assessment
        }
        None => assessor.assess(inputs)?,
    };

    print_assessment(&assessment);

    if let Some(path) = output {
        export::export_json(&assessment, &path)?;
        println!("{}", format!("Assessment written to {}", path.display()).dimmed());
    }
    Ok(())
}

fn print_assessment(assessment: &Assessment) {
    let score_display = format!("{}/100", assessment.overall_score);
    let score_colored = match assessment.overall_score {
        s if s >= 70 => score_display.green().bold(),
        s if s >= 50 => score_display.yellow().bold(),
        _ => score_display.red().bold(),
    };
    println!("  Overall score:  {}", score_colored);
    println!(
        "  Status:         {} ({})",
        assessment.recovery_status,
        assessment.recovery_status.description()
    );
    println!(
        "  Intensity:      {} ({})",
        assessment.recommended_intensity,
        assessment.recommended_intensity.description()
    );
    println!(
        "  Est. recovery:  {} day(s)",
        assessment.estimated_recovery_days
    );

    if !assessment.component_scores.is_empty() {
        let rows: Vec<ComponentRow> = assessment
            .component_scores
            .iter()
            .map(|(factor, score)| ComponentRow {
                factor: factor.clone(),
                score: format!("{:.1}", score),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if !assessment.training_advice.is_empty() {
        println!("{}", "Training advice:".cyan().bold());
        for advice in &assessment.training_advice {
            println!("  - {}", advice);
        }
    }
    if !assessment.recovery_advice.is_empty() {
        println!("{}", "Recovery advice:".cyan().bold());
        for advice in &assessment.recovery_advice {
            println!("  - {}", advice);
        }
    }
}

fn run_trend(
    config: &AppConfig,
    file: &PathBuf,
    from: NaiveDate,
    to: NaiveDate,
    densify: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("{}", "Aggregating load trend...".blue().bold());

    let content = std::fs::read_to_string(file)?;
    let records: Vec<TrendRecord> = serde_json::from_str(&content)?;

    let trend_config = TrendConfig {
        densify: densify || config.trend.densify,
    };
    let aggregator =
        LoadTrendAggregator::with_config_and_weights(trend_config, config.scoring.clone());
    let series = aggregator.trend(&records, from, to)?;

    if series.is_empty() {
        println!("  No records in range {} to {}", from, to);
        return Ok(());
    }

    let rows: Vec<TrendRow> = series
        .iter()
        .map(|point| TrendRow {
            date: point.date.to_string(),
            stress: point
                .training_stress
                .map(|s| format!("{:.1}", s))
                .unwrap_or_else(|| "-".to_string()),
            recovery: point
                .recovery_score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    println!("{}", Table::new(rows));

    if let Some(path) = output {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => export::export_trend_csv(&series, &path)?,
            _ => export::export_json(&series, &path)?,
        }
        println!("{}", format!("Series written to {}", path.display()).dimmed());
    }
    Ok(())
}
