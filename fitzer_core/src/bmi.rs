//! Body Mass Index calculation.

use crate::BmiCategory;
use serde::{Deserialize, Serialize};

/// A computed BMI value with its category
///
/// The default value (`0.0`, no category) is returned for degenerate input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: Option<BmiCategory>,
}

impl BmiReading {
    /// Category label, empty when there is no reading
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }
}

/// Compute BMI from height in centimetres and weight in kilograms
///
/// The value is rounded to one decimal place and the category is taken from
/// the rounded value, so the two always agree:
/// - `< 18.5` Underweight
/// - `[18.5, 25)` Normal
/// - `[25, 30)` Overweight
/// - `>= 30` Obese
///
/// Zero, negative or non-finite input yields [`BmiReading::default`].
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> BmiReading {
    if !(height_cm > 0.0 && weight_kg > 0.0) || !height_cm.is_finite() || !weight_kg.is_finite() {
        return BmiReading::default();
    }

    let height_m = height_cm / 100.0;
    let bmi = (weight_kg / (height_m * height_m) * 10.0).round() / 10.0;

    BmiReading {
        bmi,
        category: Some(categorize(bmi)),
    }
}

fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_reading() {
        let reading = compute_bmi(175.0, 70.0);
        assert_eq!(reading.bmi, 22.9);
        assert_eq!(reading.category, Some(BmiCategory::Normal));
    }

    #[test]
    fn test_category_boundaries() {
        // 200cm keeps the arithmetic exact: weight / 4
        assert_eq!(compute_bmi(200.0, 74.0).category, Some(BmiCategory::Normal));
        assert_eq!(compute_bmi(200.0, 73.6).category, Some(BmiCategory::Underweight));
        assert_eq!(compute_bmi(200.0, 100.0).category, Some(BmiCategory::Overweight));
        assert_eq!(compute_bmi(200.0, 120.0).category, Some(BmiCategory::Obese));
        assert_eq!(compute_bmi(200.0, 120.0).bmi, 30.0);
    }

    #[test]
    fn test_category_follows_rounded_value() {
        for (weight, bmi, category) in [
            (73.9, 18.5, BmiCategory::Normal),
            (99.9, 25.0, BmiCategory::Overweight),
            (119.9, 30.0, BmiCategory::Obese),
        ] {
            let reading = compute_bmi(200.0, weight);
            assert_eq!(reading.bmi, bmi, "weight {}", weight);
            assert_eq!(reading.category, Some(category), "weight {}", weight);
        }
    }

    #[test]
    fn test_degenerate_input_returns_sentinel() {
        assert_eq!(compute_bmi(0.0, 70.0), BmiReading::default());
        assert_eq!(compute_bmi(170.0, 0.0), BmiReading::default());
        assert_eq!(compute_bmi(-170.0, 70.0), BmiReading::default());
        assert_eq!(compute_bmi(f64::NAN, 70.0), BmiReading::default());
        assert_eq!(compute_bmi(0.0, 0.0).category_label(), "");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        for (h, w) in [(163.0, 58.3), (181.5, 92.0), (150.0, 45.0)] {
            let expected = ((w / ((h / 100.0) * (h / 100.0))) * 10.0_f64).round() / 10.0;
            assert_eq!(compute_bmi(h, w).bmi, expected);
        }
    }
}
