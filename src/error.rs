//! Unified error hierarchy for liftrs
//!
//! All engine errors are caller-input errors: the engine performs no I/O,
//! so nothing here is transient or retryable. Errors carry the offending
//! field and value so an embedding API layer can translate them into
//! user-facing messages mechanically.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level error type for all liftrs operations
#[derive(Debug, Error)]
pub enum LiftRsError {
    /// Engine calculation errors (invalid inputs, undefined formulas)
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Data validation errors outside the engine proper
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors (CLI/config/export boundary only)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors (CLI/export boundary only)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Engine calculation errors
///
/// Raised at the point of detection and propagated unmodified; the engine
/// never retries and never substitutes defaults for invalid primary inputs.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// A numeric invariant on a primary input is violated
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unknown one-rep-max model requested
    #[error("Unsupported model: {model}")]
    UnsupportedModel { model: String },

    /// Trend query with start date after end date
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A formula's mathematical domain is violated
    #[error("Formula {formula} is undefined here: {reason}")]
    UndefinedFormula { formula: String, reason: String },
}

impl CalculationError {
    /// Shorthand for the common invalid-input case
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        CalculationError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for liftrs operations
pub type Result<T> = std::result::Result<T, LiftRsError>;

impl LiftRsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LiftRsError::Calculation(_) => ErrorSeverity::Warning,
            LiftRsError::Validation(_) => ErrorSeverity::Warning,
            LiftRsError::Configuration(_) => ErrorSeverity::Error,
            LiftRsError::Io(_) => ErrorSeverity::Error,
            LiftRsError::Serialization(_) => ErrorSeverity::Error,
            LiftRsError::Internal(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            LiftRsError::Calculation(CalculationError::InvalidInput {
                field, reason, ..
            }) => {
                format!("The value for {} is not usable: {}.", field, reason)
            }
            LiftRsError::Calculation(CalculationError::UnsupportedModel { model }) => {
                format!(
                    "Unknown one-rep-max model \"{}\". Use `liftrs models` to list the supported ones.",
                    model
                )
            }
            LiftRsError::Calculation(CalculationError::InvalidRange { start, end }) => {
                format!("The date range {} to {} is reversed.", start, end)
            }
            LiftRsError::Configuration(_) => {
                "Configuration could not be loaded. Please check your config file.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}
