//! Exercise selection.
//!
//! Picks up to six templates from one catalog tier based on the assessment.

use crate::catalog::ExerciseCatalog;
use crate::{ExerciseTemplate, Focus, GoalPriority, ProfileAssessment, Result, RiskFactor, Tier};

/// Most exercises a single recommendation holds
pub const MAX_EXERCISES: usize = 6;

/// A slice of the selection: take the first `count` templates tagged with any of `tags`
struct Pick {
    tags: &'static [Focus],
    count: usize,
}

const FAT_LOSS_PICKS: &[Pick] = &[
    Pick {
        tags: &[Focus::Cardiovascular, Focus::Conditioning],
        count: 3,
    },
    Pick {
        tags: &[Focus::Strength, Focus::Core],
        count: 3,
    },
];

const MUSCLE_GAIN_PICKS: &[Pick] = &[
    Pick {
        tags: &[Focus::Strength],
        count: 4,
    },
    Pick {
        tags: &[Focus::Core, Focus::Conditioning],
        count: 2,
    },
];

/// Resolve the catalog tier for an assessment
///
/// Age and recovery risks always drop to the beginner tier.
pub fn resolve_tier(assessment: &ProfileAssessment) -> Tier {
    if assessment.has_risk(RiskFactor::Age) || assessment.has_risk(RiskFactor::Recovery) {
        return Tier::Beginner;
    }
    Tier::from(assessment.fitness_level)
}

/// Select exercises from the catalog for an assessment
pub fn select_exercises<'a>(
    catalog: &'a ExerciseCatalog,
    assessment: &ProfileAssessment,
) -> Result<Vec<&'a ExerciseTemplate>> {
    let tier = resolve_tier(assessment);
    let available = catalog.tier(tier)?;

    let picks: &[Pick] = match assessment.goal_priority {
        GoalPriority::FatLoss => FAT_LOSS_PICKS,
        GoalPriority::MuscleGain => MUSCLE_GAIN_PICKS,
        GoalPriority::Maintenance | GoalPriority::GeneralFitness => &[],
    };

    let mut selected: Vec<&'a ExerciseTemplate> = Vec::with_capacity(MAX_EXERCISES);
    if picks.is_empty() {
        selected.extend(available.iter());
    } else {
        for pick in picks {
            selected.extend(
                available
                    .iter()
                    .filter(|ex| ex.has_any_focus(pick.tags))
                    .take(pick.count),
            );
        }
    }
    selected.truncate(MAX_EXERCISES);

    tracing::info!(
        "Selected {} exercises from {} tier for {}",
        selected.len(),
        tier,
        assessment.goal_priority
    );

    Ok(selected)
}
