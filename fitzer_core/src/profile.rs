//! Profile updates and validation.

use crate::bmi::{compute_bmi, BmiReading};
use crate::{ActivityLevel, Error, FitnessGoal, Gender, Result, UserProfile};
use serde::{Deserialize, Serialize};

/// A partial profile change; only `Some` fields are applied
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub body_fat_percentage: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub fitness_goal: Option<FitnessGoal>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProfileUpdate::default()
    }

    /// Whether applying this update changes the inputs to BMI
    pub fn touches_body_metrics(&self) -> bool {
        self.height_cm.is_some() || self.weight_kg.is_some()
    }
}

impl UserProfile {
    /// Merge an update into this profile
    ///
    /// BMI is recomputed when height or weight is part of the update.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(body_fat) = update.body_fat_percentage {
            self.body_fat_percentage = body_fat;
        }
        if let Some(sleep) = update.sleep_hours {
            self.sleep_hours = sleep;
        }
        if let Some(activity) = update.activity_level {
            self.activity_level = activity;
        }
        if let Some(goal) = update.fitness_goal {
            self.fitness_goal = goal;
        }
        if let Some(height) = update.height_cm {
            self.height_cm = height;
        }
        if let Some(weight) = update.weight_kg {
            self.weight_kg = weight;
        }

        if update.touches_body_metrics() {
            self.recompute_bmi();
        }
    }

    /// Refresh the derived BMI fields from height and weight
    pub fn recompute_bmi(&mut self) -> BmiReading {
        let reading = compute_bmi(self.height_cm, self.weight_kg);
        self.bmi = reading.bmi;
        self.bmi_category = reading.category;
        tracing::debug!("Recomputed BMI: {} {}", reading.bmi, reading.category_label());
        reading
    }

    /// Check every field is within its valid range
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::InvalidProfile("age must be greater than 0".into()));
        }
        if !(0.0..=100.0).contains(&self.body_fat_percentage) {
            return Err(Error::InvalidProfile(format!(
                "body fat {}% is outside 0-100",
                self.body_fat_percentage
            )));
        }
        if !(0.0..=24.0).contains(&self.sleep_hours) {
            return Err(Error::InvalidProfile(format!(
                "sleep {}h is outside 0-24",
                self.sleep_hours
            )));
        }
        for (field, value) in [("height", self.height_cm), ("weight", self.weight_kg)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidProfile(format!(
                    "{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}
