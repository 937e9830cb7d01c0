//! Budget-aware diet planning.
//!
//! Targets are computed from the profile with fixed formulas; the meal plan
//! itself is looked up from a static (diet type × budget tier) table.
//!
//! The calorie and protein formulas use a reference body of 70 kg and
//! 170 cm rather than the profile's recorded height and weight.

use crate::rules::{first_match, Rule};
use crate::{ActivityLevel, BudgetTier, DietType, FitnessGoal, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Reference body weight used by the calorie and protein formulas
pub const REFERENCE_WEIGHT_KG: f64 = 70.0;
/// Reference height used by the calorie formula
pub const REFERENCE_HEIGHT_CM: f64 = 170.0;

const BASE_WATER_GLASSES: u32 = 8;

/// One day of meals at a fixed cost
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: String,
    pub morning_snack: String,
    pub lunch: String,
    pub afternoon_snack: String,
    pub dinner: String,
    pub total_cost: String,
}

/// A generated diet plan for one profile and budget selection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetDietPlan {
    pub budget: BudgetTier,
    pub diet_type: DietType,
    pub calories: i64,
    pub protein_grams: i64,
    pub water_glasses: u32,
    pub meals: MealPlan,
    pub budget_tip: String,
    pub shopping_list: String,
    /// Profile fields echoed in the summary
    pub age: u32,
    pub gender: Gender,
    pub body_fat_percentage: f64,
    pub sleep_hours: f64,
    pub fitness_goal: FitnessGoal,
}

const PROTEIN_RULES: &[Rule<UserProfile, f64>] = &[
    Rule {
        name: "muscle goal",
        applies: |p| p.fitness_goal == FitnessGoal::BuildMuscle,
        outcome: 2.2,
    },
    Rule {
        name: "weight loss goal",
        applies: |p| p.fitness_goal == FitnessGoal::LoseWeight,
        outcome: 2.0,
    },
    Rule {
        name: "body fat over 25%",
        applies: |p| p.body_fat_percentage > 25.0,
        outcome: 1.8,
    },
];

fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

fn goal_adjustment(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::LoseWeight => -500.0,
        FitnessGoal::GainWeight => 300.0,
        FitnessGoal::BuildMuscle => 200.0,
        FitnessGoal::Maintain => 0.0,
    }
}

/// Basal metabolic rate (Mifflin-St Jeor) on the reference body
pub fn basal_metabolic_rate(age: u32, gender: Gender) -> f64 {
    let base = 10.0 * REFERENCE_WEIGHT_KG + 6.25 * REFERENCE_HEIGHT_CM - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Daily calorie target
pub fn calorie_target(profile: &UserProfile) -> i64 {
    let maintenance =
        basal_metabolic_rate(profile.age, profile.gender) * activity_multiplier(profile.activity_level);
    (maintenance + goal_adjustment(profile.fitness_goal)).round() as i64
}

/// Daily protein target in grams
pub fn protein_target(profile: &UserProfile) -> i64 {
    let per_kg = first_match(PROTEIN_RULES, profile, 1.6);
    (REFERENCE_WEIGHT_KG * per_kg).round() as i64
}

/// Daily water target in glasses
pub fn water_target(profile: &UserProfile) -> u32 {
    let activity_bonus = match profile.activity_level {
        ActivityLevel::VeryActive => 2,
        ActivityLevel::Active => 1,
        _ => 0,
    };
    let sleep_bonus = if profile.sleep_hours < 7.0 { 1 } else { 0 };
    BASE_WATER_GLASSES + activity_bonus + sleep_bonus
}

fn meals(
    breakfast: &str,
    morning_snack: &str,
    lunch: &str,
    afternoon_snack: &str,
    dinner: &str,
    total_cost: &str,
) -> MealPlan {
    MealPlan {
        breakfast: breakfast.into(),
        morning_snack: morning_snack.into(),
        lunch: lunch.into(),
        afternoon_snack: afternoon_snack.into(),
        dinner: dinner.into(),
        total_cost: total_cost.into(),
    }
}

/// Look up the fixed meal plan for a diet type and budget
pub fn meal_plan(diet_type: DietType, budget: BudgetTier) -> MealPlan {
    match (diet_type, budget) {
        (DietType::Vegan, BudgetTier::Low) => meals(
            "Oatmeal (1 cup) + Banana + 2 tbsp peanut butter + 1 cup almond milk",
            "Mixed nuts (1/4 cup) + Apple",
            "Brown rice (1 cup) + Black beans (1/2 cup) + Mixed vegetables + Olive oil",
            "Coconut yogurt (1 cup) + Berries",
            "Tofu curry (4oz) + Sweet potato + Broccoli + Garlic",
            "₹180",
        ),
        (DietType::Vegan, BudgetTier::Medium) => meals(
            "Whole grain toast + Avocado + 2 tbsp tahini + Spinach",
            "Protein smoothie (plant protein + banana + spinach + almond milk)",
            "Quinoa salad + Chickpeas + Mixed vegetables + Olive oil",
            "Mixed nuts (1/4 cup) + Dried fruit",
            "Lentil curry + Brown rice + Asparagus + Lemon",
            "₹320",
        ),
        (DietType::Vegan, BudgetTier::High) => meals(
            "Acai bowl + Granola + Fresh berries + Chia seeds + Almond milk",
            "Protein bar + Fresh fruit + Almond butter",
            "Tempeh stir-fry + Quinoa + Roasted vegetables + Avocado",
            "Coconut yogurt parfait + Nuts + Honey",
            "Mushroom steak + Sweet potato + Green beans + Herbs",
            "₹550",
        ),
        (DietType::NonVegan, BudgetTier::Low) => meals(
            "Oatmeal (1 cup) + Banana + 2 tbsp peanut butter + 1 cup milk",
            "Hard-boiled eggs (2) + Apple",
            "Brown rice (1 cup) + Black beans (1/2 cup) + Mixed vegetables + Olive oil",
            "Greek yogurt (1 cup) + Berries",
            "Chicken thigh (4oz) + Sweet potato + Broccoli + Garlic",
            "₹200",
        ),
        (DietType::NonVegan, BudgetTier::Medium) => meals(
            "Whole grain toast + Avocado + 2 eggs + Spinach",
            "Protein smoothie (whey + banana + spinach + milk)",
            "Quinoa salad + Grilled chicken breast + Mixed vegetables + Olive oil",
            "Mixed nuts (1/4 cup) + Dried fruit",
            "Salmon fillet (4oz) + Brown rice + Asparagus + Lemon",
            "₹380",
        ),
        (DietType::NonVegan, BudgetTier::High) => meals(
            "Acai bowl + Granola + Fresh berries + Chia seeds + Almond milk",
            "Protein bar + Fresh fruit + Almond butter",
            "Grilled salmon + Quinoa + Roasted vegetables + Avocado",
            "Greek yogurt parfait + Nuts + Honey",
            "Lean beef steak + Sweet potato + Green beans + Herbs",
            "₹650",
        ),
    }
}

/// Groceries covering the week's meals for a diet type
pub fn shopping_list(diet_type: DietType) -> String {
    let items: &[&str] = match diet_type {
        DietType::Vegan => &[
            "Oatmeal, Rice, Quinoa, Lentils",
            "Tofu, Chickpeas, Black beans, Coconut yogurt",
            "Bananas, Apples, Berries, Avocado",
            "Vegetables (frozen for budget), Mixed nuts",
            "Peanut butter, Olive oil, Tahini",
        ],
        DietType::NonVegan => &[
            "Oatmeal, Rice, Quinoa",
            "Chicken, Eggs, Greek yogurt, Salmon",
            "Bananas, Apples, Berries, Avocado",
            "Vegetables (frozen for budget), Mixed nuts",
            "Peanut butter, Olive oil, Whey protein",
        ],
    };
    items.join(", ")
}

pub fn budget_tip(budget: BudgetTier) -> &'static str {
    match budget {
        BudgetTier::Low => {
            "Shop at local markets, buy seasonal vegetables, and use lentils as primary protein source."
        }
        BudgetTier::Medium => {
            "Buy grains in bulk, shop at wholesale markets, and consider local dairy products."
        }
        BudgetTier::High => {
            "Invest in organic produce, quality proteins, and premium nuts for maximum nutrition."
        }
    }
}

/// Generate a diet plan for a profile, budget tier and diet type
pub fn generate_budget_diet(
    profile: &UserProfile,
    budget: BudgetTier,
    diet_type: DietType,
) -> BudgetDietPlan {
    let plan = BudgetDietPlan {
        budget,
        diet_type,
        calories: calorie_target(profile),
        protein_grams: protein_target(profile),
        water_glasses: water_target(profile),
        meals: meal_plan(diet_type, budget),
        budget_tip: budget_tip(budget).into(),
        shopping_list: shopping_list(diet_type),
        age: profile.age,
        gender: profile.gender,
        body_fat_percentage: profile.body_fat_percentage,
        sleep_hours: profile.sleep_hours,
        fitness_goal: profile.fitness_goal,
    };

    tracing::info!(
        "Generated {} {} diet plan: {} kcal, {}g protein",
        budget,
        diet_type,
        plan.calories,
        plan.protein_grams
    );

    plan
}

impl BudgetDietPlan {
    /// Render the plan as display lines, blocks separated by blank lines
    pub fn lines(&self) -> Vec<String> {
        vec![
            "PERSONAL PROFILE".to_string(),
            format!("Age: {} years | Gender: {}", self.age, self.gender),
            format!(
                "Body Fat: {}% | Sleep: {} hours",
                self.body_fat_percentage, self.sleep_hours
            ),
            format!(
                "Fitness Goal: {}",
                self.fitness_goal.as_str().replacen('_', " ", 1).to_uppercase()
            ),
            format!("Diet Type: {}", self.diet_type.as_str().to_uppercase()),
            format!(
                "Daily Calories: {} | Protein: {}g",
                self.calories, self.protein_grams
            ),
            String::new(),
            "MEAL PLAN".to_string(),
            format!("Breakfast: {}", self.meals.breakfast),
            format!("Morning Snack: {}", self.meals.morning_snack),
            format!("Lunch: {}", self.meals.lunch),
            format!("Afternoon Snack: {}", self.meals.afternoon_snack),
            format!("Dinner: {}", self.meals.dinner),
            format!("Hydration: {} glasses per day", self.water_glasses),
            String::new(),
            "COST SUMMARY".to_string(),
            format!("Daily Total: {}", self.meals.total_cost),
            format!("Budget Tip: {}", self.budget_tip),
            String::new(),
            "SHOPPING LIST".to_string(),
            self.shopping_list.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_low_literal_meals() {
        let profile = UserProfile {
            age: 30,
            ..UserProfile::default()
        };
        let plan = generate_budget_diet(&profile, BudgetTier::Low, DietType::Vegan);

        assert_eq!(plan.meals.total_cost, "₹180");
        assert_eq!(
            plan.meals.breakfast,
            "Oatmeal (1 cup) + Banana + 2 tbsp peanut butter + 1 cup almond milk"
        );
        assert_eq!(plan.meals.dinner, "Tofu curry (4oz) + Sweet potato + Broccoli + Garlic");
    }

    #[test]
    fn test_costs_for_every_cell() {
        let expected = [
            (DietType::Vegan, BudgetTier::Low, "₹180"),
            (DietType::Vegan, BudgetTier::Medium, "₹320"),
            (DietType::Vegan, BudgetTier::High, "₹550"),
            (DietType::NonVegan, BudgetTier::Low, "₹200"),
            (DietType::NonVegan, BudgetTier::Medium, "₹380"),
            (DietType::NonVegan, BudgetTier::High, "₹650"),
        ];
        for (diet, budget, cost) in expected {
            assert_eq!(meal_plan(diet, budget).total_cost, cost);
        }
    }

    #[test]
    fn test_calorie_target() {
        // Male, 30, moderate, maintain: (700 + 1062.5 - 150 + 5) * 1.55
        let profile = UserProfile {
            age: 30,
            ..UserProfile::default()
        };
        assert_eq!(calorie_target(&profile), 2507);

        let cutting = UserProfile {
            age: 30,
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
            fitness_goal: FitnessGoal::LoseWeight,
            ..UserProfile::default()
        };
        // (700 + 1062.5 - 150 - 161) * 1.2 - 500
        assert_eq!(calorie_target(&cutting), 1242);
    }

    #[test]
    fn test_reference_body_ignores_recorded_metrics() {
        let light = UserProfile {
            height_cm: 150.0,
            weight_kg: 45.0,
            ..UserProfile::default()
        };
        let heavy = UserProfile {
            height_cm: 195.0,
            weight_kg: 120.0,
            ..UserProfile::default()
        };
        assert_eq!(calorie_target(&light), calorie_target(&heavy));
        assert_eq!(protein_target(&light), protein_target(&heavy));
    }

    #[test]
    fn test_protein_target_precedence() {
        let muscle = UserProfile {
            fitness_goal: FitnessGoal::BuildMuscle,
            body_fat_percentage: 35.0,
            ..UserProfile::default()
        };
        assert_eq!(protein_target(&muscle), 154);

        let cutting = UserProfile {
            fitness_goal: FitnessGoal::LoseWeight,
            body_fat_percentage: 35.0,
            ..UserProfile::default()
        };
        assert_eq!(protein_target(&cutting), 140);

        let heavy = UserProfile {
            body_fat_percentage: 30.0,
            ..UserProfile::default()
        };
        assert_eq!(protein_target(&heavy), 126);

        assert_eq!(protein_target(&UserProfile::default()), 112);
    }

    #[test]
    fn test_water_target() {
        let profile = UserProfile {
            activity_level: ActivityLevel::VeryActive,
            sleep_hours: 6.0,
            ..UserProfile::default()
        };
        assert_eq!(water_target(&profile), 11);

        let active = UserProfile {
            activity_level: ActivityLevel::Active,
            sleep_hours: 7.0,
            ..UserProfile::default()
        };
        assert_eq!(water_target(&active), 9);

        assert_eq!(water_target(&UserProfile::default()), 8);
    }

    #[test]
    fn test_display_lines() {
        let profile = UserProfile {
            age: 30,
            fitness_goal: FitnessGoal::LoseWeight,
            ..UserProfile::default()
        };
        let lines = generate_budget_diet(&profile, BudgetTier::Medium, DietType::NonVegan).lines();

        assert_eq!(lines[0], "PERSONAL PROFILE");
        assert_eq!(lines[1], "Age: 30 years | Gender: male");
        assert_eq!(lines[2], "Body Fat: 15% | Sleep: 8 hours");
        assert_eq!(lines[3], "Fitness Goal: LOSE WEIGHT");
        assert_eq!(lines[4], "Diet Type: NON-VEGAN");
        assert_eq!(lines[6], "");
        assert_eq!(lines[13], "Hydration: 8 glasses per day");
        assert_eq!(lines[16], "Daily Total: ₹380");
        assert!(lines[17].starts_with("Budget Tip: Buy grains in bulk"));
        assert_eq!(lines[19], "SHOPPING LIST");
        assert!(lines[20].ends_with("Whey protein"));
        assert_eq!(lines.len(), 21);
    }
}
