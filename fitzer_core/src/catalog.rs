//! Default exercise catalog.
//!
//! Three tiers of six bodyweight-friendly exercises each. Order within a tier
//! is significant: selection takes the first entries that match a filter.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The exercise catalog, partitioned by tier
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    pub tiers: HashMap<Tier, Vec<ExerciseTemplate>>,
}

/// Cached default catalog - built once and reused across all requests
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    body_part: &str,
    target: &str,
    calories: u32,
    equipment: &str,
    duration: &str,
    (sets, reps, rest): (&str, &str, &str),
    intensity: Intensity,
    focus: &[Focus],
) -> ExerciseTemplate {
    ExerciseTemplate {
        id: id.into(),
        name: name.into(),
        body_part: body_part.into(),
        target: target.into(),
        calories,
        difficulty: intensity,
        equipment: equipment.into(),
        duration: duration.into(),
        sets: sets.into(),
        reps: reps.into(),
        rest: rest.into(),
        intensity,
        focus: focus.to_vec(),
    }
}

/// Builds the default catalog
///
/// Prefer [`get_default_catalog`] outside of tests.
pub fn build_default_catalog() -> ExerciseCatalog {
    use Focus::*;
    use Intensity::{High, Low, Moderate};

    let mut tiers = HashMap::new();

    tiers.insert(
        Tier::Beginner,
        vec![
            template("wall-push-ups", "Wall Push-ups", "chest", "upper body", 40, "wall",
                "10-15 min", ("2-3", "8-12", "60s"), Low, &[Strength]),
            template("chair-squats", "Chair-Assisted Squats", "legs", "lower body", 60, "chair",
                "10-15 min", ("2-3", "8-10", "60s"), Low, &[Strength]),
            template("seated-marches", "Seated Knee Marches", "core", "stability", 30, "chair",
                "5-10 min", ("2-3", "10-15", "45s"), Low, &[Core]),
            template("standing-calf-raises", "Standing Calf Raises", "legs", "lower body", 35, "none",
                "5-10 min", ("2-3", "12-15", "45s"), Low, &[Strength]),
            template("arm-circles", "Arm Circles", "arms", "flexibility", 25, "none",
                "5-10 min", ("2-3", "10-12", "30s"), Low, &[Flexibility]),
            template("walking-in-place", "Walking in Place", "full body", "cardiovascular", 80, "none",
                "10-15 min", ("1", "continuous", "none"), Low, &[Cardiovascular]),
        ],
    );

    tiers.insert(
        Tier::Intermediate,
        vec![
            template("push-ups", "Standard Push-ups", "chest", "upper body", 80, "none",
                "15-20 min", ("3-4", "10-15", "60-90s"), Moderate, &[Strength]),
            template("squats", "Bodyweight Squats", "legs", "lower body", 100, "none",
                "15-20 min", ("3-4", "12-15", "60-90s"), Moderate, &[Strength]),
            template("plank", "Plank Hold", "core", "stability", 60, "none",
                "10-15 min", ("3-4", "30-60s", "60s"), Moderate, &[Core]),
            template("lunges", "Forward Lunges", "legs", "lower body", 90, "none",
                "15-20 min", ("3-4", "10-12", "60-90s"), Moderate, &[Strength]),
            template("jumping-jacks", "Jumping Jacks", "full body", "cardiovascular", 150, "none",
                "10-15 min", ("3-4", "20-30", "60s"), Moderate, &[Cardiovascular]),
            template("mountain-climbers", "Mountain Climbers", "core", "conditioning", 120, "none",
                "10-15 min", ("3-4", "20-30", "60s"), Moderate, &[Conditioning]),
        ],
    );

    tiers.insert(
        Tier::Advanced,
        vec![
            template("diamond-push-ups", "Diamond Push-ups", "chest", "upper body", 100, "none",
                "15-20 min", ("4-5", "8-12", "90s"), High, &[Strength]),
            template("pistol-squats", "Pistol Squats", "legs", "lower body", 150, "none",
                "15-20 min", ("3-4", "5-8", "90-120s"), High, &[Strength]),
            template("burpees", "Burpees", "full body", "conditioning", 200, "none",
                "10-15 min", ("4-5", "8-12", "90s"), High, &[Conditioning]),
            template("handstand-push-ups", "Handstand Push-ups", "shoulders", "upper body", 120, "wall",
                "15-20 min", ("3-4", "3-8", "120s"), High, &[Strength]),
            template("muscle-ups", "Muscle-ups", "full body", "strength", 180, "pull-up bar",
                "15-20 min", ("3-4", "3-6", "120s"), High, &[Strength]),
            template("sprint-intervals", "Sprint Intervals", "full body", "cardiovascular", 250, "none",
                "15-20 min", ("6-8", "30s", "90s"), High, &[Cardiovascular]),
        ],
    );

    ExerciseCatalog { tiers }
}

/// The fixed, non-personalized set used when generation fails
pub fn fallback_exercises() -> Vec<RecommendedExercise> {
    let basic = |id: &str,
                 name: &str,
                 body_part: &str,
                 target: &str,
                 calories: u32,
                 duration: &str,
                 insight: &str| {
        RecommendedExercise {
            id: id.into(),
            name: name.into(),
            body_part: body_part.into(),
            target: target.into(),
            calories,
            difficulty: Intensity::Moderate,
            equipment: "none".into(),
            duration: duration.into(),
            sets: "3-4".into(),
            reps: "10-12".into(),
            rest: "60-90s".into(),
            intensity: Intensity::Moderate,
            focus: Vec::new(),
            ai_insight: insight.into(),
        }
    };

    vec![
        basic("push-ups", "Push-ups", "chest", "upper body", 80, "15-20 min",
            "Standard exercise for upper body strength"),
        basic("squats", "Bodyweight Squats", "legs", "lower body", 100, "15-20 min",
            "Fundamental lower body exercise"),
        basic("plank", "Plank", "core", "stability", 60, "10-15 min",
            "Core stability and strength"),
    ]
}

impl ExerciseCatalog {
    /// Exercises in a tier, in catalog order
    pub fn tier(&self, tier: Tier) -> Result<&[ExerciseTemplate]> {
        self.tiers
            .get(&tier)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::Catalog(format!("No exercises in tier '{}'", tier)))
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for tier in Tier::ALL {
            let Some(exercises) = self.tiers.get(tier) else {
                errors.push(format!("Catalog has no '{}' tier", tier));
                continue;
            };

            if exercises.is_empty() {
                errors.push(format!("Tier '{}' is empty", tier));
            }

            for ex in exercises {
                if ex.id.is_empty() {
                    errors.push(format!("Exercise in tier '{}' has empty ID", tier));
                }
                if ex.name.is_empty() {
                    errors.push(format!("Exercise '{}' has empty name", ex.id));
                }
                if ex.focus.is_empty() {
                    errors.push(format!("Exercise '{}' has no focus tags", ex.id));
                }
                if ex.sets.is_empty() || ex.reps.is_empty() || ex.rest.is_empty() {
                    errors.push(format!("Exercise '{}' has an empty set/rep/rest template", ex.id));
                }
            }

            let mut ids: Vec<_> = exercises.iter().map(|e| e.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            if ids.len() != exercises.len() {
                errors.push(format!("Tier '{}' has duplicate exercise IDs", tier));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.tiers.len(), 3);
        for tier in Tier::ALL {
            assert_eq!(catalog.tier(*tier).unwrap().len(), 6);
        }
    }

    #[test]
    fn test_default_catalog_validates() {
        let errors = get_default_catalog().validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_tier_order_is_stable() {
        let catalog = build_default_catalog();
        let ids: Vec<_> = catalog
            .tier(Tier::Advanced)
            .unwrap()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "diamond-push-ups",
                "pistol-squats",
                "burpees",
                "handstand-push-ups",
                "muscle-ups",
                "sprint-intervals"
            ]
        );
    }

    #[test]
    fn test_missing_tier_is_reported() {
        let mut catalog = build_default_catalog();
        catalog.tiers.remove(&Tier::Intermediate);

        assert!(catalog.tier(Tier::Intermediate).is_err());
        assert_eq!(catalog.validate().len(), 1);
    }

    #[test]
    fn test_fallback_set() {
        let fallback = fallback_exercises();
        assert_eq!(fallback.len(), 3);
        assert!(fallback.iter().all(|e| e.intensity == Intensity::Moderate));
        assert_eq!(fallback[2].ai_insight, "Core stability and strength");
    }
}
