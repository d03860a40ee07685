use fitplan::diet_plan::MAINTENANCE_TITLE;
use fitplan::export::{self, ExportFormat, ExportOptions, PlanReport};
use fitplan::{
    BmiCategory, Budget, DayOfWeek, DietPreference, Gender, Goal, RecommendationEngine,
    UserProfile, WorkoutPlanRepository,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use tempfile::tempdir;

/// Integration tests that exercise the complete recommendation workflow

fn profile(weight_kg: u16, goal: Goal, diet: DietPreference, budget: Budget) -> UserProfile {
    UserProfile {
        age: 20,
        gender: Gender::Female,
        height_cm: 170,
        weight_kg,
        goal,
        diet_preference: diet,
        budget,
        workout_minutes: 45,
    }
}

#[test]
fn test_normal_weight_fat_loss_scenario() {
    let engine = RecommendationEngine::new();
    let rec = engine.recommend(&profile(65, Goal::FatLoss, DietPreference::Vegetarian, Budget::Low));

    assert_eq!(rec.bmi.value, dec!(22.49));
    assert_eq!(rec.bmi.category, BmiCategory::Normal);
    assert_eq!(rec.workout_parameters.intensity, "Moderate to High");
    assert_eq!(rec.workout_parameters.focus, "HIIT & Cardio");
    assert_eq!(rec.workout_parameters.session_type, "Standard Routine");
    assert_eq!(rec.workout_parameters.score, dec!(3.0));
    assert_eq!(rec.workout_plan.goal, Goal::FatLoss);
    assert_eq!(rec.diet_plan.title, "Vegetarian Fat Loss Plan (Budget-Friendly)");
}

#[test]
fn test_obese_profile_ignores_goal_for_parameters() {
    let engine = RecommendationEngine::new();

    for goal in Goal::ALL {
        let rec = engine.recommend(&profile(95, goal, DietPreference::Vegetarian, Budget::Low));

        assert_eq!(rec.bmi.value, dec!(32.87));
        assert_eq!(rec.bmi.category, BmiCategory::Obese);
        assert_eq!(rec.workout_parameters.base_score, 2);
        assert_eq!(rec.workout_parameters.intensity, "Low to Moderate");
        assert_eq!(rec.workout_parameters.focus, "Cardio & Fat Loss");

        // The plan still follows the requested goal
        assert_eq!(rec.workout_plan.goal, goal);
    }
}

#[test]
fn test_category_follows_unrounded_bmi_near_boundaries() {
    let engine = RecommendationEngine::new();
    let cases = [
        (56, 174, dec!(18.50), BmiCategory::Underweight),
        (64, 186, dec!(18.50), BmiCategory::Underweight),
        (57, 151, dec!(25.00), BmiCategory::Normal),
        (73, 156, dec!(30.00), BmiCategory::Overweight),
    ];

    for (weight_kg, height_cm, value, category) in cases {
        let p = UserProfile {
            weight_kg,
            height_cm,
            ..UserProfile::default()
        };
        let rec = engine.recommend(&p);
        assert_eq!(rec.bmi.value, value, "{}kg/{}cm", weight_kg, height_cm);
        assert_eq!(rec.bmi.category, category, "{}kg/{}cm", weight_kg, height_cm);
        assert_eq!(rec.bmi.display_color, category.display_color());
    }
}

#[test]
fn test_diet_fallback_for_unauthored_keys() {
    let engine = RecommendationEngine::new();

    for diet in DietPreference::ALL {
        for budget in Budget::ALL {
            let rec = engine.recommend(&profile(65, Goal::Maintenance, diet, budget));
            assert_eq!(rec.diet_plan.title, MAINTENANCE_TITLE);
        }
        for goal in Goal::ALL {
            let rec = engine.recommend(&profile(65, goal, diet, Budget::High));
            assert_eq!(rec.diet_plan.title, MAINTENANCE_TITLE);
        }
    }
}

#[test]
fn test_every_goal_has_a_full_week() {
    for goal in Goal::ALL {
        let plan = WorkoutPlanRepository::plan_for(goal);
        assert_eq!(plan.len(), 7);
        for day in DayOfWeek::ALL {
            assert!(!plan.day(day).is_empty(), "{} {} is empty", goal, day);
        }
    }
}

#[test]
fn test_unknown_goal_label_uses_maintenance_week() {
    let plan = WorkoutPlanRepository::plan_for_label("Marathon Prep");
    assert_eq!(plan, WorkoutPlanRepository::plan_for(Goal::Maintenance));
}

#[test]
fn test_checked_recommendation_rejects_out_of_range() {
    let engine = RecommendationEngine::new();
    let mut p = UserProfile::default();
    p.height_cm = 250;

    assert!(engine.recommend_checked(&p).is_err());
    assert!(engine.recommend_checked(&UserProfile::default()).is_ok());
}

#[test]
fn test_export_all_formats() {
    let profile = UserProfile {
        goal: Goal::MuscleGain,
        diet_preference: DietPreference::NonVegetarian,
        budget: Budget::Medium,
        ..UserProfile::default()
    };
    let rec = RecommendationEngine::new().recommend(&profile);
    let report = PlanReport::new(profile, rec);
    let dir = tempdir().unwrap();

    for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Csv] {
        let path = export::resolve_output_path(&report, format, Some(dir.path()), dir.path());
        let options = ExportOptions {
            format,
            include_health_tips: true,
        };
        export::export_report(&report, &options, &path).unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(file_name.starts_with("AI_Fitness_Plan_Muscle_Gain_"));
        assert!(file_name.ends_with(format.extension()));

        let content = std::fs::read_to_string(&path).unwrap();
        match format {
            ExportFormat::Text => {
                assert!(content.contains("Non-Vegetarian Muscle Gain Plan"));
                assert!(content.contains("SATURDAY:"));
            }
            ExportFormat::Json => {
                let parsed: PlanReport = serde_json::from_str(&content).unwrap();
                assert_eq!(parsed.recommendation, report.recommendation);
            }
            ExportFormat::Csv => {
                assert!(content.starts_with("day,order,instruction"));
                assert!(content.contains("Sunday,"));
            }
        }
    }
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = RecommendationEngine::new();
    let expected = engine.recommend(&UserProfile::default());

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.recommend(&UserProfile::default())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        15u16..=35,
        120u16..=220,
        30u16..=150,
        prop::sample::select(Goal::ALL.to_vec()),
        prop::sample::select(DietPreference::ALL.to_vec()),
        prop::sample::select(Budget::ALL.to_vec()),
        15u16..=120,
    )
        .prop_map(|(age, height_cm, weight_kg, goal, diet_preference, budget, workout_minutes)| {
            UserProfile {
                age,
                gender: Gender::Male,
                height_cm,
                weight_kg,
                goal,
                diet_preference,
                budget,
                workout_minutes,
            }
        })
}

proptest! {
    #[test]
    fn prop_recommendation_is_idempotent(p in arb_profile()) {
        let engine = RecommendationEngine::new();
        prop_assert_eq!(engine.recommend(&p), engine.recommend(&p));
    }

    #[test]
    fn prop_score_is_bounded(p in arb_profile()) {
        let rec = RecommendationEngine::new().recommend(&p);
        let score = rec.workout_parameters.score;
        prop_assert!(score >= dec!(0) && score <= dec!(5));
        prop_assert_eq!(score, score.round_dp(1));
    }

    #[test]
    fn prop_valid_profiles_always_recommend(p in arb_profile()) {
        prop_assert!(RecommendationEngine::new().recommend_checked(&p).is_ok());
    }
}
