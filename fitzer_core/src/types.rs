//! Core domain types for Fitzer.
//!
//! This module defines the fundamental types used throughout the system:
//! - Profile attributes (gender, activity level, fitness goal)
//! - BMI categories
//! - Assessment labels (fitness level, risks, goal priority, intensity, focus)
//! - Exercise templates and recommended exercises
//! - Diet selections (budget tier, diet type)

use serde::{Deserialize, Serialize};

/// Declares a fieldless enum whose variants map to fixed lowercase labels.
///
/// The label is used for serde, `Display` and `FromStr`. Parsing ignores case
/// and treats `-` and `_` as the same character.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical label for this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> crate::Result<Self> {
                let wanted = normalize_label(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_label(v.as_str()) == wanted)
                    .ok_or_else(|| {
                        crate::Error::Parse(format!(
                            "unknown {} '{}' (expected one of: {})",
                            stringify!($name),
                            s,
                            $name::ALL
                                .iter()
                                .map(|v| v.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ))
                    })
            }
        }
    };
}

fn normalize_label(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

// ============================================================================
// Profile Attributes
// ============================================================================

labelled_enum! {
    Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

labelled_enum! {
    /// Self-reported day-to-day activity
    ActivityLevel {
        Sedentary => "sedentary",
        Light => "light",
        Moderate => "moderate",
        Active => "active",
        VeryActive => "very_active",
    }
}

labelled_enum! {
    FitnessGoal {
        LoseWeight => "lose_weight",
        Maintain => "maintain",
        GainWeight => "gain_weight",
        BuildMuscle => "build_muscle",
    }
}

labelled_enum! {
    BmiCategory {
        Underweight => "Underweight",
        Normal => "Normal",
        Overweight => "Overweight",
        Obese => "Obese",
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Moderate
    }
}

impl Default for FitnessGoal {
    fn default() -> Self {
        FitnessGoal::Maintain
    }
}

/// The user's biometric and preference attributes
///
/// Missing fields deserialize to the defaults, so a partially saved profile
/// merges over [`UserProfile::default`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub body_fat_percentage: f64,
    pub sleep_hours: f64,
    pub activity_level: ActivityLevel,
    pub fitness_goal: FitnessGoal,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmi_category: Option<BmiCategory>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 25,
            gender: Gender::Male,
            body_fat_percentage: 15.0,
            sleep_hours: 8.0,
            activity_level: ActivityLevel::Moderate,
            fitness_goal: FitnessGoal::Maintain,
            height_cm: 0.0,
            weight_kg: 0.0,
            bmi: 0.0,
            bmi_category: None,
        }
    }
}

// ============================================================================
// Assessment Labels
// ============================================================================

labelled_enum! {
    FitnessLevel {
        Beginner => "beginner",
        BeginnerIntermediate => "beginner-intermediate",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

labelled_enum! {
    RiskFactor {
        /// Older than 50
        Age => "age",
        /// Body fat above 25%
        Weight => "weight",
        /// Less than 6 hours of sleep
        Recovery => "recovery",
    }
}

labelled_enum! {
    GoalPriority {
        FatLoss => "fat_loss",
        MuscleGain => "muscle_gain",
        Maintenance => "maintenance",
        GeneralFitness => "general_fitness",
    }
}

labelled_enum! {
    /// Training intensity, also used as the difficulty tag of a template
    Intensity {
        Low => "low",
        Moderate => "moderate",
        High => "high",
    }
}

labelled_enum! {
    /// Training focus, used both for assessment focus areas and template tags
    Focus {
        Cardiovascular => "cardiovascular",
        Core => "core",
        Strength => "strength",
        MuscleEndurance => "muscle_endurance",
        Flexibility => "flexibility",
        Balance => "balance",
        Conditioning => "conditioning",
    }
}

/// Derived view of a profile used to drive exercise selection
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileAssessment {
    pub fitness_level: FitnessLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub goal_priority: GoalPriority,
    pub intensity_level: Intensity,
    pub focus_areas: Vec<Focus>,
}

impl ProfileAssessment {
    pub fn has_risk(&self, risk: RiskFactor) -> bool {
        self.risk_factors.contains(&risk)
    }
}

// ============================================================================
// Exercise Types
// ============================================================================

labelled_enum! {
    /// Partition of the exercise catalog
    Tier {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

impl From<FitnessLevel> for Tier {
    fn from(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner | FitnessLevel::BeginnerIntermediate => Tier::Beginner,
            FitnessLevel::Intermediate => Tier::Intermediate,
            FitnessLevel::Advanced => Tier::Advanced,
        }
    }
}

/// A static catalog entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseTemplate {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub target: String,
    pub calories: u32,
    pub difficulty: Intensity,
    pub equipment: String,
    pub duration: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub intensity: Intensity,
    pub focus: Vec<Focus>,
}

impl ExerciseTemplate {
    pub fn has_focus(&self, focus: Focus) -> bool {
        self.focus.contains(&focus)
    }

    /// Whether any of the given tags is attached to this template
    pub fn has_any_focus(&self, tags: &[Focus]) -> bool {
        tags.iter().any(|f| self.has_focus(*f))
    }

    /// Whether reps are measured in time rather than counted
    ///
    /// Durations such as `30s` and open-ended `continuous` work count as
    /// time-based.
    pub fn is_time_based(&self) -> bool {
        self.reps.ends_with('s') || self.reps == "continuous"
    }
}

/// An exercise prescribed for a specific profile
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommendedExercise {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub target: String,
    pub calories: u32,
    pub difficulty: Intensity,
    pub equipment: String,
    pub duration: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub intensity: Intensity,
    pub focus: Vec<Focus>,
    pub ai_insight: String,
}

impl From<&ExerciseTemplate> for RecommendedExercise {
    fn from(t: &ExerciseTemplate) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            body_part: t.body_part.clone(),
            target: t.target.clone(),
            calories: t.calories,
            difficulty: t.difficulty,
            equipment: t.equipment.clone(),
            duration: t.duration.clone(),
            sets: t.sets.clone(),
            reps: t.reps.clone(),
            rest: t.rest.clone(),
            intensity: t.intensity,
            focus: t.focus.clone(),
            ai_insight: String::new(),
        }
    }
}

// ============================================================================
// Diet Selections
// ============================================================================

labelled_enum! {
    /// Daily food budget band
    BudgetTier {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl BudgetTier {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Low => "Low Budget",
            BudgetTier::Medium => "Medium Budget",
            BudgetTier::High => "High Budget",
        }
    }

    /// Upper bound of the daily spend, in rupees
    pub fn daily_ceiling(&self) -> u32 {
        match self {
            BudgetTier::Low => 300,
            BudgetTier::Medium => 600,
            BudgetTier::High => 1000,
        }
    }
}

labelled_enum! {
    DietType {
        Vegan => "vegan",
        NonVegan => "non-vegan",
    }
}

impl Default for BudgetTier {
    fn default() -> Self {
        BudgetTier::Low
    }
}

impl Default for DietType {
    fn default() -> Self {
        DietType::Vegan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_loosely() {
        assert_eq!("Very_Active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("non-vegan".parse::<DietType>().unwrap(), DietType::NonVegan);
        assert_eq!(
            "beginner_intermediate".parse::<FitnessLevel>().unwrap(),
            FitnessLevel::BeginnerIntermediate
        );
        assert!("jogging".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&FitnessLevel::BeginnerIntermediate).unwrap();
        assert_eq!(json, "\"beginner-intermediate\"");

        let goal: FitnessGoal = serde_json::from_str("\"build_muscle\"").unwrap();
        assert_eq!(goal, FitnessGoal::BuildMuscle);
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        let profile: UserProfile = serde_json::from_str(r#"{"age": 41}"#).unwrap();
        assert_eq!(profile.age, 41);
        assert_eq!(profile.sleep_hours, 8.0);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.bmi_category, None);
    }

    #[test]
    fn test_beginner_intermediate_uses_beginner_tier() {
        assert_eq!(Tier::from(FitnessLevel::BeginnerIntermediate), Tier::Beginner);
        assert_eq!(Tier::from(FitnessLevel::Advanced), Tier::Advanced);
    }

    #[test]
    fn test_time_based_reps() {
        let mut t = ExerciseTemplate {
            id: "plank".into(),
            name: "Plank Hold".into(),
            body_part: "core".into(),
            target: "stability".into(),
            calories: 60,
            difficulty: Intensity::Moderate,
            equipment: "none".into(),
            duration: "10-15 min".into(),
            sets: "3-4".into(),
            reps: "30-60s".into(),
            rest: "60s".into(),
            intensity: Intensity::Moderate,
            focus: vec![Focus::Core],
        };
        assert!(t.is_time_based());

        t.reps = "continuous".into();
        assert!(t.is_time_based());

        t.reps = "10-15".into();
        assert!(!t.is_time_based());
    }

    #[test]
    fn test_budget_tier_ceilings() {
        let ceilings: Vec<u32> = BudgetTier::ALL.iter().map(|b| b.daily_ceiling()).collect();
        assert_eq!(ceilings, [300, 600, 1000]);
        assert_eq!(BudgetTier::Medium.label(), "Medium Budget");
    }
}
