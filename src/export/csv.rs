use super::{ExportError, PlanReport};
use std::path::Path;

/// Export the weekly workout plan as `day,order,instruction` rows
pub fn export_workout_plan<P: AsRef<Path>>(
    report: &PlanReport,
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = ::csv::Writer::from_path(output_path)?;

    writer.write_record(["day", "order", "instruction"])?;

    for (day, lines) in report.recommendation.workout_plan.iter() {
        for (index, line) in lines.iter().enumerate() {
            let order = (index + 1).to_string();
            writer.write_record([day.name(), order.as_str(), line.as_str()])?;
        }
    }

    writer.flush()?;
    Ok(())
}
