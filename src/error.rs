//! Unified error hierarchy for FitPlan
//!
//! The recommendation core is total over validated input, so errors only
//! appear at the edges: profile validation, attribute parsing, configuration
//! and export I/O.

use thiserror::Error;

use crate::export::ExportError;

/// Top-level error type for all FitPlan operations
#[derive(Debug, Error)]
pub enum FitPlanError {
    /// Profile attribute outside its accepted range
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Attribute text that does not name a known value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Profile validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric field outside its inclusive range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Input that would make the formula undefined
    #[error("Non-positive input for {calculation}: {parameter}={value}")]
    NonPositiveInput {
        calculation: &'static str,
        parameter: &'static str,
        value: String,
    },
}

/// Result type alias for FitPlan operations
pub type Result<T> = std::result::Result<T, FitPlanError>;

impl FitPlanError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitPlanError::Validation(_) => ErrorSeverity::Warning,
            FitPlanError::Parse(_) => ErrorSeverity::Warning,
            FitPlanError::Calculation(_) => ErrorSeverity::Error,
            FitPlanError::Configuration(_) => ErrorSeverity::Error,
            FitPlanError::Io(_) | FitPlanError::Export(_) => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitPlanError::Validation(ValidationError::OutOfRange {
                field,
                min,
                max,
                ..
            }) => {
                format!("Please enter a {} between {} and {}.", field, min, max)
            }
            FitPlanError::Parse(reason) => format!("Could not understand input: {}", reason),
            FitPlanError::Export(ExportError::IoError(e)) => {
                format!("Could not write the plan file: {}", e)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents the operation
    Error,
    /// Bad user input, the operation can be retried with corrected values
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FitPlanError::Validation(ValidationError::OutOfRange {
            field: "age",
            value: 12,
            min: 15,
            max: 35,
        });
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);

        let err = FitPlanError::Configuration("bad".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_user_messages() {
        let err = FitPlanError::Validation(ValidationError::OutOfRange {
            field: "height_cm",
            value: 300,
            min: 120,
            max: 220,
        });
        assert_eq!(
            err.user_message(),
            "Please enter a height_cm between 120 and 220."
        );

        let err = FitPlanError::Parse("unknown goal: yoga".to_string());
        assert!(err.user_message().contains("unknown goal"));
    }

    #[test]
    fn test_display_includes_values() {
        let err = ValidationError::OutOfRange {
            field: "weight_kg",
            value: 10,
            min: 30,
            max: 150,
        };
        assert_eq!(err.to_string(), "weight_kg must be between 30 and 150, got 10");
    }
}
