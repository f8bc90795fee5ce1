//! Health metrics calculations module
//!
//! Provides BMI, BMR and daily calorie calculations plus the `compute`
//! entry point that combines them with the recommendation tables.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Mifflin-St Jeor for BMR, WHO thresholds for BMI
//! 3. **Forgiving Lookups**: Unknown activity levels and categories fall back
//!    to a default bucket instead of failing
//! 4. **Type Safety**: Strong typing prevents unit confusion
//!
//! Range validation of raw request input belongs to [`crate::validation`].
//! The functions here only guard against values that would make the
//! arithmetic meaningless (zero or negative height).

use crate::errors::MetricsError;
use crate::recommendations::{recommendations_for, Goal, Recommendations};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age substituted when the caller does not supply one
pub const DEFAULT_AGE: u32 = 30;

/// Upper bound for body weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Upper bound for height in centimeters
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Accepted age range in years
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

// ============================================================================
// Input Types
// ============================================================================

/// Gender used for the BMR formula
///
/// `Unspecified` uses the male formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Interpret free-text gender, case-insensitively
    ///
    /// Anything other than "male" or "female" is `Unspecified`.
    pub fn from_text(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            _ => Gender::Unspecified,
        }
    }
}

/// Activity level for calorie calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Resolve an optional textual level, falling back to `Moderate`
    pub fn lookup(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements and lifestyle attributes for one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years, `DEFAULT_AGE` when absent
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Gender,
    /// Activity level, `Moderate` when absent
    pub activity_level: Option<ActivityLevel>,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            age: None,
            gender: Gender::Unspecified,
            activity_level: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = Some(level);
        self
    }

    /// Check the declared bounds of every numeric field
    pub fn validate(&self) -> Result<(), MetricsError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > MAX_WEIGHT_KG {
            return Err(MetricsError::invalid(format!(
                "weight must be greater than 0 and at most {} kg, got {}",
                MAX_WEIGHT_KG, self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 || self.height_cm > MAX_HEIGHT_CM {
            return Err(MetricsError::invalid(format!(
                "height must be greater than 0 and at most {} cm, got {}",
                MAX_HEIGHT_CM, self.height_cm
            )));
        }
        if let Some(age) = self.age {
            if !(MIN_AGE..=MAX_AGE).contains(&age) {
                return Err(MetricsError::invalid(format!(
                    "age must be between {} and {}, got {}",
                    MIN_AGE, MAX_AGE, age
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the half-open BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }

    /// Resolve a textual category, falling back to `Normal`
    pub fn lookup(value: &str) -> Self {
        value.parse().unwrap_or(BmiCategory::Normal)
    }
}

impl FromStr for BmiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "underweight" => Ok(BmiCategory::Underweight),
            "normal" => Ok(BmiCategory::Normal),
            "overweight" => Ok(BmiCategory::Overweight),
            "obese" => Ok(BmiCategory::Obese),
            _ => Err(format!("Unknown BMI category: {}", s)),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to one decimal place, halves away from zero
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to one decimal place.
///
/// # Errors
///
/// Returns [`MetricsError::InvalidMeasurement`] when height or weight is not
/// a positive finite number.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, MetricsError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(MetricsError::invalid(format!(
            "height must be a positive number, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(MetricsError::invalid(format!(
            "weight must be a positive number, got {}",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(round_to_one_decimal(weight_kg / (height_m * height_m)))
}

/// Classify BMI into category
///
/// Intervals are half-open: 18.5 is normal, 25.0 is overweight, 30.0 is obese.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
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

// ============================================================================
// BMR and Calorie Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
/// Otherwise: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
///
/// Unspecified gender uses the male formula.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Female => base - 161.0,
        Gender::Male | Gender::Unspecified => base + 5.0,
    }
}

/// Calculate estimated daily calorie needs
///
/// Substitutes [`DEFAULT_AGE`] for a missing age and `Moderate` for a missing
/// activity level, then rounds BMR × activity multiplier to the nearest
/// whole calorie (halves away from zero).
pub fn calculate_calories(
    weight_kg: f64,
    height_cm: f64,
    age: Option<u32>,
    gender: Gender,
    activity_level: Option<ActivityLevel>,
) -> i32 {
    let age = age.unwrap_or(DEFAULT_AGE);
    let bmr = calculate_bmr(weight_kg, height_cm, age, gender);
    let multiplier = activity_level.unwrap_or_default().multiplier();
    (bmr * multiplier).round() as i32
}

// ============================================================================
// Combined Computation
// ============================================================================

/// Complete engine output for one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub calories_needed: i32,
    pub recommendations: Recommendations,
}

/// Compute BMI, category, calorie needs and recommendation bundles
///
/// # Errors
///
/// Returns [`MetricsError::InvalidMeasurement`] when the measurement is out
/// of its declared bounds.
pub fn compute(measurement: &Measurement, goal: Option<Goal>) -> Result<HealthMetrics, MetricsError> {
    measurement.validate()?;

    let bmi = calculate_bmi(measurement.weight_kg, measurement.height_cm)?;
    let bmi_category = classify_bmi(bmi);
    let calories_needed = calculate_calories(
        measurement.weight_kg,
        measurement.height_cm,
        measurement.age,
        measurement.gender,
        measurement.activity_level,
    );
    let recommendations = recommendations_for(bmi_category, goal, measurement.activity_level);

    Ok(HealthMetrics {
        bmi,
        bmi_category,
        calories_needed,
        recommendations,
    })
}
