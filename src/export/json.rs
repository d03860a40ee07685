use super::{ExportError, PlanReport};
use std::io::Write;
use std::path::Path;

/// Export a plan report to JSON format
pub fn export_plan_report<P: AsRef<Path>>(
    report: &PlanReport,
    output_path: P,
) -> Result<(), ExportError> {
    export_json(report, output_path)
}

/// Export any serializable data structure to JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_report;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_plan_report() {
        let report = sample_report();
        let temp_file = NamedTempFile::new().unwrap();

        export_plan_report(&report, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["profile"]["goal"], "FatLoss");
        assert_eq!(parsed["recommendation"]["bmi"]["category"], "Normal");
        assert_eq!(
            parsed["recommendation"]["diet_plan"]["title"],
            "Vegetarian Fat Loss Plan (Budget-Friendly)"
        );
        assert_eq!(
            parsed["recommendation"]["workout_plan"]["days"]["Friday"][0],
            "🔥 Cardio Blast:"
        );
    }

    #[test]
    fn test_report_reads_back() {
        let report = sample_report();
        let temp_file = NamedTempFile::new().unwrap();

        export_plan_report(&report, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: PlanReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }
}
