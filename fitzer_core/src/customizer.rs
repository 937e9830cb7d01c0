//! Exercise customization.
//!
//! Rewrites the set/rep/rest template of each selected exercise for the
//! assessed intensity and risks, then attaches a coaching insight.
//!
//! Adjustments run in a fixed order, later ones overwrite earlier ones:
//! 1. intensity level (low / high; moderate keeps the template)
//! 2. age risk
//! 3. recovery risk

use crate::rules::{first_match, Rule};
use crate::{
    ExerciseTemplate, Focus, GoalPriority, Intensity, ProfileAssessment, RecommendedExercise,
    RiskFactor,
};

pub const INSIGHT_FAT_LOSS: &str =
    "Perfect for burning calories and improving cardiovascular health. Focus on maintaining steady breathing.";
pub const INSIGHT_MUSCLE_GAIN: &str =
    "Excellent for building muscle mass. Focus on controlled movements and proper form.";
pub const INSIGHT_AGE: &str = "Age-appropriate modification. Listen to your body and rest as needed.";
pub const INSIGHT_RECOVERY: &str = "Modified for better recovery. Ensure adequate rest between sets.";
pub const INSIGHT_GENERAL: &str =
    "Great exercise for overall fitness. Focus on proper form and gradual progression.";

const EXTENDED_REST: &str = "90-120s";
const REDUCED_SETS: &str = "2-3";

/// What the insight rules look at
struct InsightInput<'a> {
    template: &'a ExerciseTemplate,
    assessment: &'a ProfileAssessment,
}

/// Insight rules, checked against the unmodified template
fn insight_rules<'a>() -> [Rule<InsightInput<'a>, &'static str>; 4] {
    [
        Rule {
            name: "fat loss cardio",
            applies: |i| {
                i.assessment.goal_priority == GoalPriority::FatLoss
                    && i.template.has_focus(Focus::Cardiovascular)
            },
            outcome: INSIGHT_FAT_LOSS,
        },
        Rule {
            name: "muscle gain strength",
            applies: |i| {
                i.assessment.goal_priority == GoalPriority::MuscleGain
                    && i.template.has_focus(Focus::Strength)
            },
            outcome: INSIGHT_MUSCLE_GAIN,
        },
        Rule {
            name: "age risk",
            applies: |i| i.assessment.has_risk(RiskFactor::Age),
            outcome: INSIGHT_AGE,
        },
        Rule {
            name: "poor recovery on high intensity work",
            applies: |i| {
                i.assessment.has_risk(RiskFactor::Recovery) && i.template.intensity == Intensity::High
            },
            outcome: INSIGHT_RECOVERY,
        },
    ]
}

/// Pick the insight for one exercise
pub fn insight_for(template: &ExerciseTemplate, assessment: &ProfileAssessment) -> &'static str {
    let input = InsightInput {
        template,
        assessment,
    };
    first_match(&insight_rules(), &input, INSIGHT_GENERAL)
}

/// Customize one template for an assessment
pub fn customize_exercise(
    template: &ExerciseTemplate,
    assessment: &ProfileAssessment,
) -> RecommendedExercise {
    let mut exercise = RecommendedExercise::from(template);
    let timed = template.is_time_based();

    match assessment.intensity_level {
        Intensity::Low => {
            exercise.sets = REDUCED_SETS.into();
            exercise.reps = if timed { "15-30s" } else { "8-12" }.into();
            exercise.rest = EXTENDED_REST.into();
            exercise.intensity = Intensity::Low;
        }
        Intensity::High => {
            exercise.sets = "4-5".into();
            exercise.reps = if timed { "45-60s" } else { "12-20" }.into();
            exercise.rest = "60-90s".into();
            exercise.intensity = Intensity::High;
        }
        Intensity::Moderate => {}
    }

    if assessment.has_risk(RiskFactor::Age) {
        exercise.rest = EXTENDED_REST.into();
        exercise.intensity = Intensity::Low;
    }

    if assessment.has_risk(RiskFactor::Recovery) {
        exercise.sets = REDUCED_SETS.into();
        exercise.rest = EXTENDED_REST.into();
    }

    exercise.ai_insight = insight_for(template, assessment).into();
    exercise
}

/// Customize every selected template, preserving order
pub fn customize_exercises(
    selected: &[&ExerciseTemplate],
    assessment: &ProfileAssessment,
) -> Vec<RecommendedExercise> {
    selected
        .iter()
        .map(|t| customize_exercise(t, assessment))
        .collect()
}
