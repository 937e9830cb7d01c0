//! Profile analysis.
//!
//! Derives a [`ProfileAssessment`] from a [`UserProfile`]. Each field of the
//! assessment is driven by its own decision table:
//! - fitness level: first match, default beginner
//! - risk factors: every matching rule contributes
//! - goal priority: first match, default general fitness
//! - intensity: first match, default moderate
//! - focus areas: every matching rule contributes, deduplicated

use crate::rules::{all_matches, first_match, Rule};
use crate::{
    ActivityLevel, FitnessGoal, FitnessLevel, Focus, GoalPriority, Intensity, ProfileAssessment,
    RiskFactor, UserProfile,
};

const FITNESS_LEVEL_RULES: &[Rule<UserProfile, FitnessLevel>] = &[
    Rule {
        name: "very active and well rested",
        applies: very_active_and_rested,
        outcome: FitnessLevel::Advanced,
    },
    Rule {
        name: "active with 7h sleep",
        applies: |p| p.activity_level == ActivityLevel::Active && p.sleep_hours >= 7.0,
        outcome: FitnessLevel::Intermediate,
    },
    Rule {
        name: "moderate with 6h sleep",
        applies: |p| p.activity_level == ActivityLevel::Moderate && p.sleep_hours >= 6.0,
        outcome: FitnessLevel::BeginnerIntermediate,
    },
    Rule {
        name: "short sleep",
        applies: short_sleep,
        outcome: FitnessLevel::Beginner,
    },
];

const RISK_RULES: &[Rule<UserProfile, RiskFactor>] = &[
    Rule {
        name: "over 50",
        applies: over_fifty,
        outcome: RiskFactor::Age,
    },
    Rule {
        name: "body fat over 25%",
        applies: |p| p.body_fat_percentage > 25.0,
        outcome: RiskFactor::Weight,
    },
    Rule {
        name: "short sleep",
        applies: short_sleep,
        outcome: RiskFactor::Recovery,
    },
];

const GOAL_RULES: &[Rule<UserProfile, GoalPriority>] = &[
    Rule {
        name: "weight loss goal or bmi over 25",
        applies: |p| p.fitness_goal == FitnessGoal::LoseWeight || p.bmi > 25.0,
        outcome: GoalPriority::FatLoss,
    },
    Rule {
        name: "muscle goal",
        applies: |p| p.fitness_goal == FitnessGoal::BuildMuscle,
        outcome: GoalPriority::MuscleGain,
    },
    Rule {
        name: "maintain goal",
        applies: |p| p.fitness_goal == FitnessGoal::Maintain,
        outcome: GoalPriority::Maintenance,
    },
];

// High is listed first: it overrides the low-intensity downgrade.
const INTENSITY_RULES: &[Rule<UserProfile, Intensity>] = &[
    Rule {
        name: "very active and well rested",
        applies: very_active_and_rested,
        outcome: Intensity::High,
    },
    Rule {
        name: "over 50 or short sleep",
        applies: |p| over_fifty(p) || short_sleep(p),
        outcome: Intensity::Low,
    },
];

const FOCUS_RULES: &[Rule<UserProfile, &[Focus]>] = &[
    Rule {
        name: "weight loss goal or body fat over 20%",
        applies: |p| p.fitness_goal == FitnessGoal::LoseWeight || p.body_fat_percentage > 20.0,
        outcome: &[Focus::Cardiovascular, Focus::Core],
    },
    Rule {
        name: "muscle goal",
        applies: |p| p.fitness_goal == FitnessGoal::BuildMuscle,
        outcome: &[Focus::Strength, Focus::MuscleEndurance],
    },
    Rule {
        name: "always",
        applies: |_| true,
        outcome: &[Focus::Flexibility, Focus::Balance],
    },
];

fn very_active_and_rested(p: &UserProfile) -> bool {
    p.activity_level == ActivityLevel::VeryActive && p.sleep_hours >= 8.0
}

fn short_sleep(p: &UserProfile) -> bool {
    p.sleep_hours < 6.0
}

fn over_fifty(p: &UserProfile) -> bool {
    p.age > 50
}

/// Analyze a profile into the labels used for exercise selection
pub fn analyze_profile(profile: &UserProfile) -> ProfileAssessment {
    let mut focus_areas = Vec::new();
    for area in all_matches(FOCUS_RULES, profile).into_iter().flatten() {
        if !focus_areas.contains(area) {
            focus_areas.push(*area);
        }
    }

    let assessment = ProfileAssessment {
        fitness_level: first_match(FITNESS_LEVEL_RULES, profile, FitnessLevel::Beginner),
        risk_factors: all_matches(RISK_RULES, profile),
        goal_priority: first_match(GOAL_RULES, profile, GoalPriority::GeneralFitness),
        intensity_level: first_match(INTENSITY_RULES, profile, Intensity::Moderate),
        focus_areas,
    };

    tracing::debug!(
        "Assessed profile: level={}, goal={}, intensity={}, risks={:?}",
        assessment.fitness_level,
        assessment.goal_priority,
        assessment.intensity_level,
        assessment.risk_factors
    );

    assessment
}
