//! Recommendation orchestration
//!
//! Combines BMI classification, workout parameter selection and the two
//! content tables into a single [`Recommendation`]. The workout and diet
//! branches read the same profile but never each other's output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::bmi::{BmiCalculator, BmiResult};
use crate::diet_plan::{DietPlan, DietPlanRepository};
use crate::error::Result;
use crate::models::UserProfile;
use crate::workout_params::{WorkoutParameterSelector, WorkoutParameters};
use crate::workout_plan::{WeeklyWorkoutPlan, WorkoutPlanRepository};

/// Everything produced for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub bmi: BmiResult,
    pub workout_parameters: WorkoutParameters,
    pub workout_plan: WeeklyWorkoutPlan,
    pub diet_plan: DietPlan,
}

/// Stateless recommendation engine
///
/// Holds no data of its own; the content tables are process-wide statics
/// built on first use, so one engine can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        RecommendationEngine
    }

    /// Build the recommendation for a profile that is already validated
    #[instrument(
        skip(self, profile),
        fields(goal = %profile.goal, diet = %profile.diet_preference, budget = %profile.budget)
    )]
    pub fn recommend(&self, profile: &UserProfile) -> Recommendation {
        let bmi = BmiCalculator::calculate(
            Decimal::from(profile.weight_kg),
            Decimal::from(profile.height_cm),
        );
        debug!(bmi = %bmi.value, category = %bmi.category, "BMI classified");

        let workout_parameters = WorkoutParameterSelector::select(
            bmi.value,
            profile.goal,
            profile.workout_minutes,
            profile.age,
        );
        debug!(
            intensity = %workout_parameters.intensity,
            focus = %workout_parameters.focus,
            score = %workout_parameters.score,
            "Workout parameters selected"
        );

        let workout_plan = WorkoutPlanRepository::plan_for(profile.goal).clone();
        let diet_plan =
            DietPlanRepository::plan_for(profile.diet_preference, profile.budget, profile.goal)
                .clone();
        debug!(diet_plan = %diet_plan.title, "Plans selected");

        Recommendation {
            bmi,
            workout_parameters,
            workout_plan,
            diet_plan,
        }
    }

    /// Validate the profile's ranges, then build its recommendation
    pub fn recommend_checked(&self, profile: &UserProfile) -> Result<Recommendation> {
        profile.validate()?;
        Ok(self.recommend(profile))
    }
}
