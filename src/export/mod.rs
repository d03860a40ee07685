use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::Recommendation;
use crate::models::UserProfile;

pub mod csv;
pub mod json;
pub mod text;

/// General advice appended to every full report
pub const HEALTH_TIPS: [&str; 8] = [
    "Drink 3-4 liters of water daily",
    "Sleep 7-8 hours every night",
    "Warm up before and cool down after workouts",
    "Track your progress weekly",
    "Stay consistent with your routine",
    "Avoid junk food and sugary drinks",
    "Listen to your body and rest when needed",
    "Progressive overload is key for results",
];

/// Closing disclaimer for full reports
pub const DISCLAIMER: &str = "This plan is for general guidance only. Always consult \
with healthcare professionals before starting any new diet or exercise program, \
especially if you have existing health conditions.";

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<::csv::Error> for ExportError {
    fn from(e: ::csv::Error) -> Self {
        ExportError::SerializationError(e.to_string())
    }
}

/// A recommendation together with the profile it was made for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub generated_at: DateTime<Utc>,
    pub profile: UserProfile,
    pub recommendation: Recommendation,
}

impl PlanReport {
    pub fn new(profile: UserProfile, recommendation: Recommendation) -> Self {
        PlanReport {
            generated_at: Utc::now(),
            profile,
            recommendation,
        }
    }

    /// File name like `AI_Fitness_Plan_Fat_Loss_20240115.txt`
    pub fn default_file_name(&self, format: ExportFormat) -> String {
        format!(
            "AI_Fitness_Plan_{}_{}.{}",
            self.profile.goal.to_string().replace(' ', "_"),
            self.generated_at.format("%Y%m%d"),
            format.extension()
        )
    }
}

/// Export options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Include the general health tips and disclaimer (text only)
    pub include_health_tips: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            format: ExportFormat::Text,
            include_health_tips: true,
        }
    }
}

/// Write a report in the requested format
pub fn export_report<P: AsRef<Path>>(
    report: &PlanReport,
    options: &ExportOptions,
    output_path: P,
) -> Result<(), ExportError> {
    tracing::info!(
        format = ?options.format,
        path = %output_path.as_ref().display(),
        "Exporting plan"
    );

    match options.format {
        ExportFormat::Text => {
            text::export_plan_report(report, options.include_health_tips, output_path)
        }
        ExportFormat::Json => json::export_plan_report(report, output_path),
        ExportFormat::Csv => csv::export_workout_plan(report, output_path),
    }
}

/// Resolve the output path: an explicit file, a directory to place the default name in, or the default name alone
pub fn resolve_output_path(
    report: &PlanReport,
    format: ExportFormat,
    output: Option<&Path>,
    default_dir: &Path,
) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(report.default_file_name(format)),
        Some(path) => path.to_path_buf(),
        None => default_dir.join(report.default_file_name(format)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!(ExportFormat::from_str("TXT").unwrap(), ExportFormat::Text);
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
        assert!(matches!(
            ExportFormat::from_str("pdf"),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_file_name() {
        let report = test_support::sample_report();
        assert_eq!(
            report.default_file_name(ExportFormat::Text),
            "AI_Fitness_Plan_Fat_Loss_20240915.txt"
        );
        assert_eq!(
            report.default_file_name(ExportFormat::Csv),
            "AI_Fitness_Plan_Fat_Loss_20240915.csv"
        );
    }

    #[test]
    fn test_resolve_output_path() {
        let report = test_support::sample_report();
        let dir = tempdir().unwrap();

        let path = resolve_output_path(&report, ExportFormat::Json, Some(dir.path()), Path::new("."));
        assert_eq!(path, dir.path().join("AI_Fitness_Plan_Fat_Loss_20240915.json"));

        let explicit = dir.path().join("mine.txt");
        let path = resolve_output_path(&report, ExportFormat::Text, Some(explicit.as_path()), Path::new("."));
        assert_eq!(path, explicit);

        let path = resolve_output_path(&report, ExportFormat::Text, None, dir.path());
        assert_eq!(path, dir.path().join("AI_Fitness_Plan_Fat_Loss_20240915.txt"));
    }

    #[test]
    fn test_export_report_dispatches_by_format() {
        let report = test_support::sample_report();
        let dir = tempdir().unwrap();

        for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Csv] {
            let path = dir.path().join(report.default_file_name(format));
            let options = ExportOptions {
                format,
                include_health_tips: true,
            };
            export_report(&report, &options, &path).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }
}
