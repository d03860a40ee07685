//! Authored 7-day workout schedules, one per goal

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use crate::models::Goal;

/// Days of the training week, ordered Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A week of ordered instruction lines keyed by day
///
/// Always holds exactly seven non-empty days. Deserialized input is checked
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeekData")]
pub struct WeeklyWorkoutPlan {
    pub goal: Goal,
    days: BTreeMap<DayOfWeek, Vec<String>>,
}

#[derive(Deserialize)]
struct WeekData {
    goal: Goal,
    days: BTreeMap<DayOfWeek, Vec<String>>,
}

impl TryFrom<WeekData> for WeeklyWorkoutPlan {
    type Error = String;

    fn try_from(data: WeekData) -> Result<Self, Self::Error> {
        if let Some(day) = DayOfWeek::ALL
            .into_iter()
            .find(|day| data.days.get(day).map_or(true, Vec::is_empty))
        {
            return Err(format!("{} plan has no instructions for {}", data.goal, day));
        }

        Ok(WeeklyWorkoutPlan {
            goal: data.goal,
            days: data.days,
        })
    }
}

impl WeeklyWorkoutPlan {
    fn from_days(goal: Goal, days: [&[&str]; 7]) -> Self {
        let days = DayOfWeek::ALL
            .into_iter()
            .zip(days)
            .map(|(day, lines)| (day, lines.iter().map(|l| l.to_string()).collect()))
            .collect();

        WeeklyWorkoutPlan { goal, days }
    }

    /// Instructions for one day, in order
    pub fn day(&self, day: DayOfWeek) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All days Monday through Sunday
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &[String])> {
        self.days.iter().map(|(day, lines)| (*day, lines.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Static goal → weekly plan table
pub struct WorkoutPlanRepository;

static PLANS: LazyLock<HashMap<Goal, WeeklyWorkoutPlan>> =
    LazyLock::new(|| Goal::ALL.into_iter().map(|goal| (goal, build_plan(goal))).collect());

impl WorkoutPlanRepository {
    /// Weekly plan for a goal
    pub fn plan_for(goal: Goal) -> &'static WeeklyWorkoutPlan {
        PLANS.get(&goal).unwrap_or_else(Self::fallback)
    }

    /// Weekly plan for a free-text goal, Maintenance when the text is not a known goal
    pub fn plan_for_label(label: &str) -> &'static WeeklyWorkoutPlan {
        match label.parse::<Goal>() {
            Ok(goal) => Self::plan_for(goal),
            Err(_) => {
                tracing::debug!(label, "Unrecognized goal, using maintenance plan");
                Self::fallback()
            }
        }
    }

    fn fallback() -> &'static WeeklyWorkoutPlan {
        // Every goal is inserted when the table is built
        &PLANS[&Goal::Maintenance]
    }
}

fn build_plan(goal: Goal) -> WeeklyWorkoutPlan {
    match goal {
        Goal::FatLoss => WeeklyWorkoutPlan::from_days(
            goal,
            [
                &[
                    "🔥 Warm-up: 5 min dynamic stretching",
                    "🏃 Cardio: 25 min running/cycling (moderate pace)",
                    "💪 Circuit Training:",
                    "  - Jumping jacks: 3 sets × 30 reps",
                    "  - Burpees: 3 sets × 12 reps",
                    "  - Mountain climbers: 3 sets × 20 reps",
                    "🧘 Cool down: 5 min stretching",
                ],
                &[
                    "🔥 Warm-up: 5 min jogging",
                    "💪 Upper Body Strength:",
                    "  - Push-ups: 4 sets × 12 reps",
                    "  - Dumbbell rows: 3 sets × 15 reps",
                    "  - Tricep dips: 3 sets × 12 reps",
                    "  - Plank: 3 sets × 45 sec",
                    "🧘 Cool down & stretch",
                ],
                &[
                    "🔥 HIIT Session (30 min):",
                    "  - Sprint intervals: 30 sec sprint, 30 sec rest × 10",
                    "  - Jump squats: 4 sets × 15 reps",
                    "  - High knees: 4 sets × 30 sec",
                    "  - Rest: 1 min between exercises",
                    "🧘 Yoga/Stretching: 15 min",
                ],
                &[
                    "🔥 Warm-up: 5 min",
                    "💪 Lower Body + Core:",
                    "  - Squats: 4 sets × 20 reps",
                    "  - Lunges: 3 sets × 15 reps each leg",
                    "  - Leg raises: 3 sets × 15 reps",
                    "  - Russian twists: 3 sets × 25 reps",
                    "  - Bicycle crunches: 3 sets × 20 reps",
                ],
                &[
                    "🔥 Cardio Blast:",
                    "  - Running: 30 min (interval training)",
                    "  - Jump rope: 5 sets × 2 min",
                    "💪 Core finisher:",
                    "  - Plank variations: 3 sets × 40 sec each",
                    "🧘 Cool down",
                ],
                &[
                    "🔥 Full Body Circuit:",
                    "  - Burpees: 3 sets × 15 reps",
                    "  - Push-ups: 3 sets × 15 reps",
                    "  - Squats: 3 sets × 20 reps",
                    "  - Mountain climbers: 3 sets × 25 reps",
                    "  - Plank: 3 sets × 1 min",
                    "🧘 Stretching: 10 min",
                ],
                &[
                    "🌟 Active Recovery:",
                    "  - Light yoga: 30 min",
                    "  - Walking/Cycling: 30 min (easy pace)",
                    "  - Foam rolling & stretching",
                    "💧 Focus on hydration & rest",
                ],
            ],
        ),
        Goal::MuscleGain => WeeklyWorkoutPlan::from_days(
            goal,
            [
                &[
                    "🔥 Warm-up: 5 min light cardio",
                    "💪 Chest + Triceps:",
                    "  - Bench press/Push-ups: 4 sets × 10 reps",
                    "  - Incline dumbbell press: 4 sets × 12 reps",
                    "  - Chest flyes: 3 sets × 12 reps",
                    "  - Tricep dips: 4 sets × 12 reps",
                    "  - Overhead tricep extension: 3 sets × 15 reps",
                ],
                &[
                    "🔥 Warm-up: 5 min",
                    "💪 Back + Biceps:",
                    "  - Pull-ups/Chin-ups: 4 sets × 8 reps",
                    "  - Bent-over rows: 4 sets × 12 reps",
                    "  - Lat pulldowns: 3 sets × 12 reps",
                    "  - Bicep curls: 4 sets × 12 reps",
                    "  - Hammer curls: 3 sets × 15 reps",
                ],
                &[
                    "🌟 Rest Day or Light Cardio:",
                    "  - Walking: 20-30 min",
                    "  - Stretching & mobility work",
                    "  - Focus on nutrition & recovery",
                ],
                &[
                    "🔥 Warm-up: 5 min",
                    "💪 Legs (Quad Focus):",
                    "  - Squats: 5 sets × 10 reps",
                    "  - Leg press: 4 sets × 12 reps",
                    "  - Lunges: 4 sets × 12 reps each",
                    "  - Leg extensions: 3 sets × 15 reps",
                    "  - Calf raises: 4 sets × 20 reps",
                ],
                &[
                    "🔥 Warm-up: 5 min",
                    "💪 Shoulders + Abs:",
                    "  - Military press: 4 sets × 10 reps",
                    "  - Lateral raises: 4 sets × 12 reps",
                    "  - Front raises: 3 sets × 12 reps",
                    "  - Rear delt flyes: 3 sets × 15 reps",
                    "  - Hanging leg raises: 4 sets × 12 reps",
                    "  - Plank: 3 sets × 1 min",
                ],
                &[
                    "🔥 Warm-up: 5 min",
                    "💪 Legs (Hamstring Focus):",
                    "  - Deadlifts: 4 sets × 8 reps",
                    "  - Romanian deadlifts: 4 sets × 10 reps",
                    "  - Leg curls: 4 sets × 12 reps",
                    "  - Bulgarian split squats: 3 sets × 10 each",
                    "  - Calf raises: 4 sets × 20 reps",
                ],
                &[
                    "🌟 Complete Rest:",
                    "  - No workout",
                    "  - Focus on sleep (8+ hours)",
                    "  - Meal prep for the week",
                    "  - Light stretching if needed",
                ],
            ],
        ),
        Goal::Maintenance => WeeklyWorkoutPlan::from_days(
            goal,
            [
                &[
                    "🔥 Warm-up: 5 min",
                    "💪 Full Body Strength:",
                    "  - Push-ups: 3 sets × 15 reps",
                    "  - Squats: 3 sets × 20 reps",
                    "  - Rows: 3 sets × 12 reps",
                    "  - Plank: 3 sets × 45 sec",
                ],
                &[
                    "🏃 Cardio Day:",
                    "  - Running/Cycling: 30 min moderate pace",
                    "  - Jump rope: 3 sets × 2 min",
                    "🧘 Stretching: 10 min",
                ],
                &[
                    "💪 Upper Body:",
                    "  - Push-ups: 3 sets × 12 reps",
                    "  - Dumbbell press: 3 sets × 12 reps",
                    "  - Rows: 3 sets × 12 reps",
                    "  - Bicep curls: 3 sets × 15 reps",
                ],
                &[
                    "🏃 Active Recovery:",
                    "  - Yoga: 30 min",
                    "  - Walking: 20 min",
                    "  - Mobility exercises",
                ],
                &[
                    "💪 Lower Body + Core:",
                    "  - Squats: 3 sets × 15 reps",
                    "  - Lunges: 3 sets × 12 each",
                    "  - Deadlifts: 3 sets × 10 reps",
                    "  - Plank variations: 3 sets × 40 sec",
                ],
                &[
                    "🏃 Cardio + Core:",
                    "  - Running: 25 min",
                    "  - Core circuit: 15 min",
                    "  - Stretching: 10 min",
                ],
                &[
                    "🌟 Rest Day:",
                    "  - Light walking or complete rest",
                    "  - Focus on recovery",
                ],
            ],
        ),
    }
}
