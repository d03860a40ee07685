//! Authored daily diet plans keyed by diet preference, budget and goal
//!
//! Only Low and Medium budgets combined with Fat Loss or Muscle Gain have
//! dedicated plans. Every other combination, including all High budget and
//! all Maintenance requests, resolves to the balanced maintenance plan.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Budget, DietPreference, Goal};

/// Number of meal slots in a day, earliest first
pub const MEAL_SLOTS: usize = 7;

/// Title of the shared fallback plan
pub const MAINTENANCE_TITLE: &str = "Balanced Maintenance Plan";

/// One day of meals with macro targets
///
/// Always holds exactly [`MEAL_SLOTS`] meals, including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DietPlanData")]
pub struct DietPlan {
    /// Glyph shown before the title
    pub icon: String,

    pub title: String,

    /// Meal slots in time order, each with its time embedded in the text
    pub meals: Vec<String>,

    /// Daily calorie range, e.g. "~1500-1600 kcal/day"
    pub calories: String,

    /// Daily protein range, e.g. "60-70g"
    pub protein: String,

    pub tips: Vec<String>,
}

#[derive(Deserialize)]
struct DietPlanData {
    icon: String,
    title: String,
    meals: Vec<String>,
    calories: String,
    protein: String,
    tips: Vec<String>,
}

impl TryFrom<DietPlanData> for DietPlan {
    type Error = String;

    fn try_from(data: DietPlanData) -> Result<Self, Self::Error> {
        if data.meals.len() != MEAL_SLOTS {
            return Err(format!(
                "{} has {} meals, expected {}",
                data.title,
                data.meals.len(),
                MEAL_SLOTS
            ));
        }

        Ok(DietPlan {
            icon: data.icon,
            title: data.title,
            meals: data.meals,
            calories: data.calories,
            protein: data.protein,
            tips: data.tips,
        })
    }
}

impl DietPlan {
    fn new(
        icon: &str,
        title: &str,
        meals: [&str; MEAL_SLOTS],
        calories: &str,
        protein: &str,
        tips: &[&str],
    ) -> Self {
        DietPlan {
            icon: icon.to_string(),
            title: title.to_string(),
            meals: meals.iter().map(|m| m.to_string()).collect(),
            calories: calories.to_string(),
            protein: protein.to_string(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Title with its icon, for display
    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// Exact-match lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DietKey {
    pub diet: DietPreference,
    pub budget: Budget,
    pub goal: Goal,
}

impl DietKey {
    pub fn new(diet: DietPreference, budget: Budget, goal: Goal) -> Self {
        DietKey { diet, budget, goal }
    }
}

static DIET_PLANS: LazyLock<HashMap<DietKey, DietPlan>> = LazyLock::new(build_table);

static MAINTENANCE_PLAN: LazyLock<DietPlan> = LazyLock::new(|| {
    DietPlan::new(
        "⚖️",
        MAINTENANCE_TITLE,
        [
            "☀️ Early Morning: Warm water + nuts",
            "🍳 Breakfast: Balanced meal with protein + carbs",
            "🍎 Mid-Morning: Fruit + beverage",
            "🍛 Lunch: Complete meal with all macros",
            "☕ Evening: Light snack",
            "🍲 Dinner: Moderate portion balanced meal",
            "🥛 Before Bed: Light beverage",
        ],
        "~2000-2200 kcal/day",
        "70-80g",
        &[
            "💡 Maintain consistent eating schedule",
            "💡 Balance all macronutrients",
            "💡 Stay hydrated",
        ],
    )
});

/// Static diet plan table with a single maintenance default
pub struct DietPlanRepository;

impl DietPlanRepository {
    /// Diet plan for an exact key, or the maintenance plan when none is authored
    pub fn plan_for(diet: DietPreference, budget: Budget, goal: Goal) -> &'static DietPlan {
        let key = DietKey::new(diet, budget, goal);
        match DIET_PLANS.get(&key) {
            Some(plan) => plan,
            None => {
                tracing::debug!(%diet, %budget, %goal, "No authored diet plan, using maintenance plan");
                &*MAINTENANCE_PLAN
            }
        }
    }

    /// The shared fallback plan
    pub fn maintenance_plan() -> &'static DietPlan {
        &*MAINTENANCE_PLAN
    }

    /// Whether a key has a dedicated plan
    pub fn has_authored_plan(diet: DietPreference, budget: Budget, goal: Goal) -> bool {
        DIET_PLANS.contains_key(&DietKey::new(diet, budget, goal))
    }
}

fn build_table() -> HashMap<DietKey, DietPlan> {
    use crate::models::Budget::{Low, Medium};
    use crate::models::DietPreference::{NonVegetarian, Vegetarian};
    use crate::models::Goal::{FatLoss, MuscleGain};

    let mut m = HashMap::new();

    // === Fat loss ===
    m.insert(
        DietKey::new(Vegetarian, Low, FatLoss),
        DietPlan::new(
            "🥗",
            "Vegetarian Fat Loss Plan (Budget-Friendly)",
            [
                "☀️ Early Morning (6:30 AM): Warm lemon water + 5 soaked almonds",
                "🍳 Breakfast (8:00 AM): 2 moong dal cheela + green chutney + 1 banana",
                "🍎 Mid-Morning (11:00 AM): 1 fruit (apple/orange) + green tea",
                "🍛 Lunch (1:30 PM): 2 chapati + dal (1 bowl) + mixed veg + cucumber salad",
                "☕ Evening (4:30 PM): Sprouts chaat (50g) + black coffee",
                "🍲 Dinner (7:30 PM): 2 chapati + palak paneer/tofu + raita",
                "🥛 Before Bed (10:00 PM): Turmeric milk (low-fat)",
            ],
            "~1500-1600 kcal/day",
            "60-70g",
            &[
                "💡 Use minimal oil in cooking",
                "💡 Drink 3-4 liters of water daily",
                "💡 Avoid rice at dinner",
                "💡 Buy seasonal vegetables for budget",
            ],
        ),
    );
    m.insert(
        DietKey::new(Vegetarian, Medium, FatLoss),
        DietPlan::new(
            "🥗",
            "Vegetarian Fat Loss Plan (Medium Budget)",
            [
                "☀️ Early Morning (6:30 AM): Warm water + 10 almonds + 2 walnuts",
                "🍳 Breakfast (8:00 AM): Oats upma with vegetables + 1 glass milk + 1 fruit",
                "🍎 Mid-Morning (11:00 AM): Greek yogurt + mixed berries + green tea",
                "🍛 Lunch (1:30 PM): 2 multigrain chapati + rajma/chole + salad + buttermilk",
                "☕ Evening (4:30 PM): Roasted chana + paneer cubes (50g) + green tea",
                "🍲 Dinner (7:30 PM): Quinoa/brown rice + grilled paneer + stir-fry veggies",
                "🥛 Before Bed (10:00 PM): Protein shake or almond milk",
            ],
            "~1600-1700 kcal/day",
            "75-85g",
            &[
                "💡 Include paneer/tofu daily",
                "💡 Use olive oil for cooking",
                "💡 Add flax seeds to meals",
            ],
        ),
    );
    m.insert(
        DietKey::new(NonVegetarian, Low, FatLoss),
        DietPlan::new(
            "🍗",
            "Non-Vegetarian Fat Loss Plan (Budget-Friendly)",
            [
                "☀️ Early Morning (6:30 AM): Warm lemon water + 5 almonds",
                "🍳 Breakfast (8:00 AM): 3 egg white omelette + 2 bread + tea",
                "🍎 Mid-Morning (11:00 AM): 1 banana + black coffee",
                "🍛 Lunch (1:30 PM): 2 chapati + chicken curry (100g) + dal + salad",
                "☕ Evening (4:30 PM): 2 boiled eggs + green tea",
                "🍲 Dinner (7:30 PM): Grilled chicken (150g) + sautéed vegetables + raita",
                "🥛 Before Bed (10:00 PM): Low-fat milk",
            ],
            "~1600-1700 kcal/day",
            "90-100g",
            &[
                "💡 Buy eggs in bulk (cheaper)",
                "💡 Use chicken breast (lean protein)",
                "💡 Include fish 2x per week if possible",
            ],
        ),
    );
    m.insert(
        DietKey::new(NonVegetarian, Medium, FatLoss),
        DietPlan::new(
            "🍗",
            "Non-Vegetarian Fat Loss Plan (Medium Budget)",
            [
                "☀️ Early Morning (6:30 AM): Warm water + 10 almonds + 2 walnuts",
                "🍳 Breakfast (8:00 AM): 4 egg white + 1 whole egg omelette + oats + fruit",
                "🍎 Mid-Morning (11:00 AM): Protein shake + 1 apple",
                "🍛 Lunch (1:30 PM): Brown rice + grilled chicken (150g) + salad + dal",
                "☕ Evening (4:30 PM): Tuna/chicken sandwich (whole wheat) + green tea",
                "🍲 Dinner (7:30 PM): Fish curry/grilled chicken (150g) + vegetables + raita",
                "🥛 Before Bed (10:00 PM): Casein protein shake or milk",
            ],
            "~1700-1800 kcal/day",
            "110-120g",
            &[
                "💡 Rotate between chicken, fish, eggs",
                "💡 Include salmon for omega-3",
                "💡 Meal prep on weekends",
            ],
        ),
    );

    // === Muscle gain ===
    m.insert(
        DietKey::new(Vegetarian, Low, MuscleGain),
        DietPlan::new(
            "💪",
            "Vegetarian Muscle Gain Plan (Budget-Friendly)",
            [
                "☀️ Early Morning (6:30 AM): Banana shake with peanut butter",
                "🍳 Breakfast (8:00 AM): 3 paratha + curd + 1 glass milk",
                "🍎 Mid-Morning (11:00 AM): Peanut butter sandwich + banana",
                "🍛 Lunch (1:30 PM): 3 chapati + dal + paneer curry + rice + salad",
                "☕ Evening (4:30 PM): Sprouts + roasted chana + tea with biscuits",
                "🍲 Dinner (7:30 PM): 3 chapati + soya chunks curry + dal + curd",
                "🥛 Before Bed (10:00 PM): Milk with protein powder/banana",
            ],
            "~2500-2700 kcal/day",
            "80-90g",
            &[
                "💡 Use peanut butter for calories",
                "💡 Soya chunks are cheap protein",
                "💡 Eat every 2-3 hours",
            ],
        ),
    );
    m.insert(
        DietKey::new(Vegetarian, Medium, MuscleGain),
        DietPlan::new(
            "💪",
            "Vegetarian Muscle Gain Plan (Medium Budget)",
            [
                "☀️ Early Morning (6:30 AM): Protein shake + 10 almonds + 2 dates",
                "🍳 Breakfast (8:00 AM): Oats with milk + paneer sandwich + fruits",
                "🍎 Mid-Morning (11:00 AM): Greek yogurt + mixed nuts + banana",
                "🍛 Lunch (1:30 PM): 4 chapati + paneer + dal + brown rice + salad",
                "☕ Evening (4:30 PM): Protein shake + peanut butter toast",
                "🍲 Dinner (7:30 PM): Quinoa + tofu curry + vegetables + raita",
                "🥛 Before Bed (10:00 PM): Casein shake + almonds",
            ],
            "~2800-3000 kcal/day",
            "100-120g",
            &[
                "💡 Include paneer, tofu, legumes daily",
                "💡 Use whey protein post-workout",
                "💡 Track your calorie surplus",
            ],
        ),
    );
    m.insert(
        DietKey::new(NonVegetarian, Low, MuscleGain),
        DietPlan::new(
            "💪",
            "Non-Vegetarian Muscle Gain Plan (Budget-Friendly)",
            [
                "☀️ Early Morning (6:30 AM): 4 boiled eggs + banana",
                "🍳 Breakfast (8:00 AM): 4 egg omelette + 3 bread + milk",
                "🍎 Mid-Morning (11:00 AM): Chicken sandwich + banana",
                "🍛 Lunch (1:30 PM): 3 chapati + chicken curry (150g) + rice + dal",
                "☕ Evening (4:30 PM): 3 boiled eggs + peanuts + tea",
                "🍲 Dinner (7:30 PM): 4 chapati + chicken/fish (200g) + vegetables",
                "🥛 Before Bed (10:00 PM): Milk with banana",
            ],
            "~2700-2900 kcal/day",
            "130-150g",
            &[
                "💡 Eggs are cheapest protein source",
                "💡 Buy chicken in bulk",
                "💡 Eat 6-7 meals per day",
            ],
        ),
    );
    m.insert(
        DietKey::new(NonVegetarian, Medium, MuscleGain),
        DietPlan::new(
            "💪",
            "Non-Vegetarian Muscle Gain Plan (Medium Budget)",
            [
                "☀️ Early Morning (6:30 AM): Protein shake + 5 whole eggs",
                "🍳 Breakfast (8:00 AM): 5 egg omelette + oats + fruits + milk",
                "🍎 Mid-Morning (11:00 AM): Chicken breast (100g) + brown rice + nuts",
                "🍛 Lunch (1:30 PM): 4 chapati + chicken (200g) + rice + dal + salad",
                "☕ Evening (4:30 PM): Tuna sandwich + protein shake",
                "🍲 Dinner (7:30 PM): Fish/chicken (200g) + quinoa + vegetables",
                "🥛 Before Bed (10:00 PM): Casein protein + peanut butter",
            ],
            "~3000-3200 kcal/day",
            "150-170g",
            &[
                "💡 Include fish for omega-3",
                "💡 Use supplements wisely",
                "💡 Progressive overload in gym",
            ],
        ),
    );

    m
}
