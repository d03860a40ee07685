//! Terminal rendering of recommendations

use colored::*;
use tabled::{settings::Style, Table, Tabled};

use crate::bmi::BmiResult;
use crate::engine::Recommendation;
use crate::export::{DISCLAIMER, HEALTH_TIPS};
use crate::models::UserProfile;

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Color for a BMI category's hex token, falling back to plain white
fn category_color(bmi: &BmiResult) -> Color {
    let hex = bmi.display_color.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|c| u8::from_str_radix(c, 16).ok())
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::TrueColor { r, g, b },
        _ => Color::White,
    }
}

fn heading(title: &str) -> String {
    format!("\n{}\n", title.bold().cyan())
}

/// Summary table of the computed metrics
pub fn render_metrics(profile: &UserProfile, rec: &Recommendation) -> String {
    let params = &rec.workout_parameters;
    let rows = vec![
        MetricRow {
            metric: "BMI",
            value: format!("{} ({})", rec.bmi.value, rec.bmi.category),
        },
        MetricRow {
            metric: "Intensity",
            value: params.intensity.clone(),
        },
        MetricRow {
            metric: "Focus",
            value: params.focus.clone(),
        },
        MetricRow {
            metric: "Score",
            value: params.score_display(),
        },
        MetricRow {
            metric: "Session",
            value: format!("{} ({} min/day)", params.session_type, profile.workout_minutes),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Full terminal report: metrics, weekly plan, diet plan and optional tips
pub fn render_recommendation(
    profile: &UserProfile,
    rec: &Recommendation,
    include_health_tips: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        "BMI:".bold(),
        format!("{} ({})", rec.bmi.value, rec.bmi.category)
            .color(category_color(&rec.bmi))
            .bold()
    ));
    out.push_str(&render_metrics(profile, rec));
    out.push('\n');

    out.push_str(&heading(&format!("YOUR 7-DAY {} PLAN", profile.goal.to_string().to_uppercase())));
    for (day, lines) in rec.workout_plan.iter() {
        out.push_str(&format!("{}\n", day.name().bold().yellow()));
        for line in lines {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out.push_str(&heading(&rec.diet_plan.heading()));
    for meal in &rec.diet_plan.meals {
        out.push_str(&format!("  {}\n", meal));
    }
    out.push_str(&format!("\n  {} {}\n", "Calories:".bold(), rec.diet_plan.calories));
    out.push_str(&format!("  {} {}\n", "Protein:".bold(), rec.diet_plan.protein));
    out.push_str(&format!("\n  {}\n", "Pro Tips:".bold()));
    for tip in &rec.diet_plan.tips {
        out.push_str(&format!("  {}\n", tip));
    }

    if include_health_tips {
        out.push_str(&heading("HEALTH TIPS"));
        for tip in HEALTH_TIPS {
            out.push_str(&format!("  {} {}\n", "✓".green(), tip));
        }
        out.push_str(&format!("\n{}\n", DISCLAIMER.dimmed()));
    }

    out
}

/// Print the full report to stdout
pub fn print_recommendation(profile: &UserProfile, rec: &Recommendation, include_health_tips: bool) {
    print!("{}", render_recommendation(profile, rec, include_health_tips));
}
