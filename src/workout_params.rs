use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bmi::{NORMAL_MIN, OBESE_MIN};
use crate::models::Goal;

/// Upper bound of the reported intensity score
pub const MAX_SCORE: Decimal = dec!(5);

/// Session format derived from the available training time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// Under 30 minutes
    QuickHiit,
    /// 30 to 59 minutes
    StandardRoutine,
    /// 60 minutes or more
    ExtendedTraining,
}

impl SessionType {
    pub fn from_minutes(minutes: u16) -> Self {
        match minutes {
            0..=29 => SessionType::QuickHiit,
            30..=59 => SessionType::StandardRoutine,
            _ => SessionType::ExtendedTraining,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::QuickHiit => "Quick HIIT",
            SessionType::StandardRoutine => "Standard Routine",
            SessionType::ExtendedTraining => "Extended Training",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intensity profile for a user's training week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutParameters {
    /// e.g. "Moderate to High"
    pub intensity: String,

    /// e.g. "HIIT & Cardio"
    pub focus: String,

    /// Label from [`SessionType`]
    pub session_type: String,

    /// Score before the age adjustment (1, 2 or 3)
    pub base_score: u8,

    pub age_multiplier: Decimal,

    /// base_score × age_multiplier, clamped to [0, 5], one decimal place
    pub score: Decimal,
}

impl WorkoutParameters {
    /// Score formatted for display, e.g. "3.0/5"
    pub fn score_display(&self) -> String {
        format!("{:.1}/{}", self.score, MAX_SCORE)
    }
}

/// Decision procedure mapping body composition, goal, time and age to workout parameters
pub struct WorkoutParameterSelector;

impl WorkoutParameterSelector {
    /// Select workout parameters
    ///
    /// BMI bands take priority over the goal: underweight and obese users get
    /// a fixed profile whatever they asked for, everyone in between gets a
    /// goal-specific one.
    pub fn select(bmi: Decimal, goal: Goal, workout_minutes: u16, age: u16) -> WorkoutParameters {
        let (base_score, intensity, focus) = if bmi < NORMAL_MIN {
            (1u8, "Light to Moderate", "Strength Building & Weight Gain")
        } else if bmi >= OBESE_MIN {
            (2, "Low to Moderate", "Cardio & Fat Loss")
        } else {
            match goal {
                Goal::FatLoss => (3, "Moderate to High", "HIIT & Cardio"),
                Goal::MuscleGain => (3, "Moderate to High", "Strength Training"),
                Goal::Maintenance => (3, "Moderate", "Balanced Fitness"),
            }
        };

        let age_multiplier = Self::age_multiplier(age);
        let score = (Decimal::from(base_score) * age_multiplier)
            .clamp(Decimal::ZERO, MAX_SCORE)
            .round_dp(1);

        WorkoutParameters {
            intensity: intensity.to_string(),
            focus: focus.to_string(),
            session_type: SessionType::from_minutes(workout_minutes).label().to_string(),
            base_score,
            age_multiplier,
            score,
        }
    }

    /// Younger users get a 10% boost, users over 30 a 10% reduction
    pub fn age_multiplier(age: u16) -> Decimal {
        if age < 20 {
            dec!(1.1)
        } else if age > 30 {
            dec!(0.9)
        } else {
            dec!(1.0)
        }
    }
}
