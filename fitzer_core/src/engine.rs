//! Recommendation engine for personalized exercise plans.
//!
//! Runs the full pipeline for one profile snapshot:
//! 1. **Analyze** the profile into fitness level, risks, goal, intensity
//! 2. **Select** up to six exercises from the matching catalog tier
//! 3. **Customize** sets/reps/rest and attach insights
//!
//! A failure anywhere in the pipeline degrades to a fixed default set. The
//! caller can tell the two apart through [`Recommendation`].

use crate::analyzer::analyze_profile;
use crate::catalog::{fallback_exercises, get_default_catalog, ExerciseCatalog};
use crate::customizer::customize_exercises;
use crate::selector::select_exercises;
use crate::{RecommendedExercise, Result, UserProfile};
use serde::Serialize;

/// Outcome of a recommendation request
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Exercises tailored to the profile
    Personalized { exercises: Vec<RecommendedExercise> },
    /// The default set, returned because personalization failed
    Fallback {
        exercises: Vec<RecommendedExercise>,
        reason: String,
    },
}

impl Recommendation {
    pub fn exercises(&self) -> &[RecommendedExercise] {
        match self {
            Recommendation::Personalized { exercises } => exercises,
            Recommendation::Fallback { exercises, .. } => exercises,
        }
    }

    pub fn into_exercises(self) -> Vec<RecommendedExercise> {
        match self {
            Recommendation::Personalized { exercises } => exercises,
            Recommendation::Fallback { exercises, .. } => exercises,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Recommendation::Fallback { .. })
    }

    /// Why personalization failed, if it did
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            Recommendation::Personalized { .. } => None,
            Recommendation::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Recommend exercises for a profile using the default catalog
pub fn recommend_exercises(profile: &UserProfile) -> Recommendation {
    recommend_from_catalog(get_default_catalog(), profile)
}

/// Recommend exercises for a profile from a specific catalog
pub fn recommend_from_catalog(catalog: &ExerciseCatalog, profile: &UserProfile) -> Recommendation {
    match personalize(catalog, profile) {
        Ok(exercises) => {
            tracing::info!("Recommended {} personalized exercises", exercises.len());
            Recommendation::Personalized { exercises }
        }
        Err(e) => {
            tracing::warn!("Personalization failed ({}), using default exercises", e);
            Recommendation::Fallback {
                exercises: fallback_exercises(),
                reason: e.to_string(),
            }
        }
    }
}

fn personalize(catalog: &ExerciseCatalog, profile: &UserProfile) -> Result<Vec<RecommendedExercise>> {
    profile.validate()?;

    let assessment = analyze_profile(profile);
    let selected = select_exercises(catalog, &assessment)?;

    Ok(customize_exercises(&selected, &assessment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::{ActivityLevel, FitnessGoal, Intensity, Tier};

    fn tier_ids(tier: Tier) -> Vec<String> {
        build_default_catalog()
            .tier(tier)
            .unwrap()
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    #[test]
    fn test_default_profile_is_personalized() {
        let rec = recommend_exercises(&UserProfile::default());
        assert!(!rec.is_fallback());
        assert_eq!(rec.exercises().len(), 6);
    }

    #[test]
    fn test_very_active_rested_uses_advanced_tier() {
        let profile = UserProfile {
            activity_level: ActivityLevel::VeryActive,
            sleep_hours: 8.0,
            ..UserProfile::default()
        };
        let rec = recommend_exercises(&profile);
        let advanced = tier_ids(Tier::Advanced);

        assert!(rec.exercises().iter().all(|e| advanced.contains(&e.id)));
        assert!(rec.exercises().iter().all(|e| e.intensity == Intensity::High));
    }

    #[test]
    fn test_age_risk_forces_beginner_tier() {
        let profile = UserProfile {
            age: 55,
            activity_level: ActivityLevel::VeryActive,
            sleep_hours: 9.0,
            ..UserProfile::default()
        };
        let rec = recommend_exercises(&profile);
        let beginner = tier_ids(Tier::Beginner);

        assert!(!rec.exercises().is_empty());
        assert!(rec.exercises().iter().all(|e| beginner.contains(&e.id)));
        // Intensity was high, but age risk forces it back down
        assert!(rec.exercises().iter().all(|e| e.intensity == Intensity::Low));
        assert!(rec.exercises().iter().all(|e| e.rest == "90-120s"));
    }

    #[test]
    fn test_fat_loss_from_high_bmi() {
        let mut profile = UserProfile {
            activity_level: ActivityLevel::Active,
            sleep_hours: 7.5,
            fitness_goal: FitnessGoal::Maintain,
            ..UserProfile::default()
        };
        profile.height_cm = 170.0;
        profile.weight_kg = 85.0;
        profile.recompute_bmi();

        let rec = recommend_exercises(&profile);
        let ids: Vec<_> = rec.exercises().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["jumping-jacks", "mountain-climbers", "push-ups", "squats", "plank"]);
    }

    #[test]
    fn test_invalid_profile_falls_back() {
        let profile = UserProfile {
            age: 0,
            ..UserProfile::default()
        };
        let rec = recommend_exercises(&profile);

        assert!(rec.is_fallback());
        assert_eq!(rec.exercises(), fallback_exercises().as_slice());
        assert!(rec.fallback_reason().unwrap().contains("age"));
    }

    #[test]
    fn test_missing_tier_falls_back() {
        let mut catalog = build_default_catalog();
        catalog.tiers.remove(&Tier::Beginner);

        let rec = recommend_from_catalog(&catalog, &UserProfile::default());
        assert!(rec.is_fallback());
        assert_eq!(rec.into_exercises().len(), 3);
    }

    #[test]
    fn test_recommendation_is_idempotent() {
        let profile = UserProfile {
            age: 38,
            body_fat_percentage: 27.0,
            sleep_hours: 6.5,
            fitness_goal: FitnessGoal::BuildMuscle,
            ..UserProfile::default()
        };
        assert_eq!(recommend_exercises(&profile), recommend_exercises(&profile));
    }
}
