// Library interface for FitPlan modules
// This allows integration tests and benchmarks to access the engine directly

pub mod bmi;
pub mod config;
pub mod diet_plan;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod workout_params;
pub mod workout_plan;

// Re-export commonly used types for convenience
pub use models::*;
pub use bmi::{BmiCalculator, BmiCategory, BmiResult};
pub use diet_plan::{DietPlan, DietPlanRepository};
pub use engine::{Recommendation, RecommendationEngine};
pub use workout_params::{WorkoutParameterSelector, WorkoutParameters};
pub use workout_plan::{DayOfWeek, WeeklyWorkoutPlan, WorkoutPlanRepository};
pub use export::{ExportFormat, ExportOptions, PlanReport};
pub use error::{FitPlanError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
