use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitplan::export::{text, PlanReport};
use fitplan::{
    BmiCalculator, Budget, DietPreference, Gender, Goal, RecommendationEngine, UserProfile,
    WorkoutParameterSelector,
};
use rust_decimal_macros::dec;

/// Benchmarks for the recommendation pipeline
///
/// Every lookup is a static table read, so these mostly measure the BMI
/// arithmetic and the cost of cloning plans into the result.

fn create_profiles(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|i| UserProfile {
            age: 15 + (i % 21) as u16,
            gender: if i % 2 == 0 { Gender::Male } else { Gender::Female },
            height_cm: 120 + (i % 101) as u16,
            weight_kg: 30 + (i % 121) as u16,
            goal: Goal::ALL[i % Goal::ALL.len()],
            diet_preference: DietPreference::ALL[i % DietPreference::ALL.len()],
            budget: Budget::ALL[i % Budget::ALL.len()],
            workout_minutes: 15 + (i % 106) as u16,
        })
        .collect()
}

fn bench_bmi_calculation(c: &mut Criterion) {
    c.bench_function("bmi_calculate", |b| {
        b.iter(|| BmiCalculator::calculate(black_box(dec!(65)), black_box(dec!(170))))
    });

    c.bench_function("select_parameters", |b| {
        b.iter(|| {
            WorkoutParameterSelector::select(
                black_box(dec!(22.49)),
                black_box(Goal::FatLoss),
                black_box(45),
                black_box(20),
            )
        })
    });
}

fn bench_recommendation(c: &mut Criterion) {
    let engine = RecommendationEngine::new();
    let mut group = c.benchmark_group("Recommendation");

    for &size in &[1, 10, 100, 1000] {
        let profiles = create_profiles(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("recommend", size), &profiles, |b, profiles| {
            b.iter(|| {
                for profile in profiles {
                    black_box(engine.recommend(profile));
                }
            });
        });
    }

    group.finish();
}

fn bench_report_rendering(c: &mut Criterion) {
    let profile = UserProfile::default();
    let report = PlanReport::new(profile, RecommendationEngine::new().recommend(&profile));

    let mut group = c.benchmark_group("Report Rendering");
    group.bench_function("text", |b| {
        b.iter(|| text::render_plan_report(black_box(&report), true))
    });
    group.bench_function("json", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&report)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_bmi_calculation,
    bench_recommendation,
    bench_report_rendering
);

criterion_main!(benches);
