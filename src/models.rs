use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{FitPlanError, ValidationError};

/// Accepted age range in years
pub const AGE_RANGE: RangeInclusive<u16> = 15..=35;

/// Accepted height range in centimeters
pub const HEIGHT_CM_RANGE: RangeInclusive<u16> = 120..=220;

/// Accepted weight range in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<u16> = 30..=150;

/// Accepted daily training time in minutes
pub const WORKOUT_MINUTES_RANGE: RangeInclusive<u16> = 15..=120;

/// Biological sex as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Primary fitness goal, drives both workout and diet selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::FatLoss, Goal::MuscleGain, Goal::Maintenance];
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
}

impl DietPreference {
    pub const ALL: [DietPreference; 2] = [DietPreference::Vegetarian, DietPreference::NonVegetarian];
}

/// Food budget tier, only used as a diet table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::FatLoss => write!(f, "Fat Loss"),
            Goal::MuscleGain => write!(f, "Muscle Gain"),
            Goal::Maintenance => write!(f, "Maintenance"),
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietPreference::Vegetarian => write!(f, "Vegetarian"),
            DietPreference::NonVegetarian => write!(f, "Non-Vegetarian"),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Low => write!(f, "Low"),
            Budget::Medium => write!(f, "Medium"),
            Budget::High => write!(f, "High"),
        }
    }
}

/// Lowercase and drop separators so "Fat Loss", "fat-loss" and "fat_loss" compare equal
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Gender {
    type Err = FitPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(FitPlanError::Parse(format!("unknown gender: {}", s))),
        }
    }
}

impl FromStr for Goal {
    type Err = FitPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "fatloss" => Ok(Goal::FatLoss),
            "musclegain" => Ok(Goal::MuscleGain),
            "maintenance" | "maintain" => Ok(Goal::Maintenance),
            _ => Err(FitPlanError::Parse(format!("unknown goal: {}", s))),
        }
    }
}

impl FromStr for DietPreference {
    type Err = FitPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "vegetarian" | "veg" => Ok(DietPreference::Vegetarian),
            "nonvegetarian" | "nonveg" => Ok(DietPreference::NonVegetarian),
            _ => Err(FitPlanError::Parse(format!("unknown diet preference: {}", s))),
        }
    }
}

impl FromStr for Budget {
    type Err = FitPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Budget::Low),
            "medium" | "med" => Ok(Budget::Medium),
            "high" => Ok(Budget::High),
            _ => Err(FitPlanError::Parse(format!("unknown budget: {}", s))),
        }
    }
}

/// The attributes a recommendation is computed from
///
/// A plain value created per request. Construct it from trusted data or call
/// [`UserProfile::validate`] before handing it to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u16,

    pub gender: Gender,

    /// Height in centimeters
    pub height_cm: u16,

    /// Weight in kilograms
    pub weight_kg: u16,

    pub goal: Goal,

    pub diet_preference: DietPreference,

    pub budget: Budget,

    /// Available training time per day
    pub workout_minutes: u16,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            age: 20,
            gender: Gender::Male,
            height_cm: 170,
            weight_kg: 65,
            goal: Goal::FatLoss,
            diet_preference: DietPreference::Vegetarian,
            budget: Budget::Low,
            workout_minutes: 45,
        }
    }
}

impl UserProfile {
    /// Check every numeric field against its accepted range
    ///
    /// Returns the first violation found, in field declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("height_cm", self.height_cm, &HEIGHT_CM_RANGE)?;
        check_range("weight_kg", self.weight_kg, &WEIGHT_KG_RANGE)?;
        check_range("workout_minutes", self.workout_minutes, &WORKOUT_MINUTES_RANGE)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u16,
    range: &RangeInclusive<u16>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(*range.start()),
            max: i64::from(*range.end()),
        })
    }
}
