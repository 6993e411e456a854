//! Export of computed results to JSON and CSV
//!
//! The engine returns language-native structures; serialization for the
//! CLI lives here. Trend series get a flat CSV layout for spreadsheet
//! use, everything else exports through the generic JSON writer.

use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::trend::LoadTrendPoint;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Export any serializable data structure to pretty-printed JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

/// Export a trend series to CSV
///
/// Columns: date, training_stress, recovery_score. Absent values stay as
/// empty cells; a densified series round-trips without inventing zeros.
pub fn export_trend_csv<P: AsRef<Path>>(
    points: &[LoadTrendPoint],
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["date", "training_stress", "recovery_score"])?;

    for point in points {
        writer.write_record([
            point.date.to_string(),
            point
                .training_stress
                .map(|s: Decimal| s.to_string())
                .unwrap_or_default(),
            point
                .recovery_score
                .map(|s| s.to_string())
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    fn sample_points() -> Vec<LoadTrendPoint> {
        vec![
            LoadTrendPoint {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                training_stress: Some(dec!(172.8)),
                recovery_score: Some(86),
            },
            LoadTrendPoint {
                date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
                training_stress: None,
                recovery_score: Some(46),
            },
        ]
    }

    #[test]
    fn test_export_trend_csv() {
        let temp_file = NamedTempFile::new().unwrap();
        export_trend_csv(&sample_points(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("date,training_stress,recovery_score"));
        assert_eq!(lines.next(), Some("2024-06-01,172.8,86"));
        assert_eq!(lines.next(), Some("2024-06-02,,46"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_series() {
        let temp_file = NamedTempFile::new().unwrap();
        export_trend_csv(&[], temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content.lines().count(), 1); // header only
    }

    #[test]
    fn test_export_json_generic() {
        let temp_file = NamedTempFile::new().unwrap();
        export_json(&sample_points(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"date\": \"2024-06-01\""));
        assert!(content.contains("\"recovery_score\": 86"));

        let back: Vec<LoadTrendPoint> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, sample_points());
    }
}
