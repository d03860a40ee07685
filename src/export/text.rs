use super::{ExportError, PlanReport, DISCLAIMER, HEALTH_TIPS};
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn section(out: &mut String, title: &str) -> Result<(), ExportError> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    Ok(())
}

/// Render a plan report as plain text
pub fn render_plan_report(
    report: &PlanReport,
    include_health_tips: bool,
) -> Result<String, ExportError> {
    let profile = &report.profile;
    let rec = &report.recommendation;
    let params = &rec.workout_parameters;
    let mut out = String::new();

    writeln!(out, "PERSONALIZED FITNESS PLAN")?;
    writeln!(out)?;

    section(&mut out, "USER PROFILE")?;
    writeln!(out, "Personal Information:")?;
    writeln!(out, "  • Age: {} years", profile.age)?;
    writeln!(out, "  • Gender: {}", profile.gender)?;
    writeln!(out, "  • Height: {} cm", profile.height_cm)?;
    writeln!(out, "  • Weight: {} kg", profile.weight_kg)?;
    writeln!(out, "  • BMI: {} ({})", rec.bmi.value, rec.bmi.category)?;
    writeln!(out)?;
    writeln!(out, "Fitness Goals:")?;
    writeln!(out, "  • Primary Goal: {}", profile.goal)?;
    writeln!(out, "  • Workout Time: {} min/day", profile.workout_minutes)?;
    writeln!(out, "  • Session Type: {}", params.session_type)?;
    writeln!(out, "  • Intensity Level: {}", params.intensity)?;
    writeln!(out, "  • Focus Area: {}", params.focus)?;
    writeln!(out, "  • Intensity Score: {}", params.score_display())?;
    writeln!(out)?;
    writeln!(out, "Diet Preferences:")?;
    writeln!(out, "  • Diet Type: {}", profile.diet_preference)?;
    writeln!(out, "  • Budget Level: {}", profile.budget)?;
    writeln!(out)?;

    section(&mut out, "7-DAY WORKOUT PLAN")?;
    for (day, lines) in rec.workout_plan.iter() {
        writeln!(out, "{}:", day.name().to_uppercase())?;
        for line in lines {
            writeln!(out, "  {}", line)?;
        }
        writeln!(out)?;
    }

    section(&mut out, "DAILY DIET PLAN")?;
    writeln!(out, "{}", rec.diet_plan.heading())?;
    writeln!(out)?;
    writeln!(out, "Daily Meals:")?;
    for meal in &rec.diet_plan.meals {
        writeln!(out, "  {}", meal)?;
    }
    writeln!(out)?;
    writeln!(out, "Nutritional Information:")?;
    writeln!(out, "  • Calories: {}", rec.diet_plan.calories)?;
    writeln!(out, "  • Protein: {}", rec.diet_plan.protein)?;
    writeln!(out)?;
    writeln!(out, "Pro Tips:")?;
    for tip in &rec.diet_plan.tips {
        writeln!(out, "  {}", tip)?;
    }
    writeln!(out)?;

    if include_health_tips {
        section(&mut out, "HEALTH TIPS")?;
        for tip in HEALTH_TIPS {
            writeln!(out, "✅ {}", tip)?;
        }
        writeln!(out)?;

        section(&mut out, "DISCLAIMER")?;
        writeln!(out, "{}", DISCLAIMER)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "Generated on: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    Ok(out)
}

/// Export a plan report to a human-readable text file
pub fn export_plan_report<P: AsRef<Path>>(
    report: &PlanReport,
    include_health_tips: bool,
    output_path: P,
) -> Result<(), ExportError> {
    let content = render_plan_report(report, include_health_tips)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
