//! Input validation functions
//!
//! Range and vocabulary checks for raw request input. The engine assumes
//! values have passed through here; it only guards against arithmetic that
//! would be meaningless.

use crate::health_metrics::{MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE};

/// Maximum length of a profile name
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the free-text gender field
pub const MAX_GENDER_LEN: usize = 10;

/// Validate weight value (in kg)
/// Valid range: greater than 0, at most 500 kg
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than 0 kg".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!("Weight must be at most {} kg", MAX_WEIGHT_KG));
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: greater than 0, at most 300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be greater than 0 cm".to_string());
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err(format!("Height must be at most {} cm", MAX_HEIGHT_CM));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < MIN_AGE as i32 {
        return Err(format!("Age must be at least {}", MIN_AGE));
    }
    if age > MAX_AGE as i32 {
        return Err(format!("Age cannot exceed {}", MAX_AGE));
    }
    Ok(())
}

/// Valid activity levels
pub const VALID_ACTIVITY_LEVELS: &[&str] = &["sedentary", "light", "moderate", "active", "very_active"];

/// Validate activity level
pub fn validate_activity_level(level: &str) -> Result<(), String> {
    validate_choice(level, VALID_ACTIVITY_LEVELS, "activity level")
}

/// Valid health goals
pub const VALID_GOALS: &[&str] = &["weight_loss", "muscle_gain", "maintenance", "general_health"];

/// Validate health goal
pub fn validate_goal(goal: &str) -> Result<(), String> {
    validate_choice(goal, VALID_GOALS, "goal")
}

/// Valid advice record types
pub const VALID_ADVICE_TYPES: &[&str] = &["diet", "exercise", "general"];

/// Validate advice type
pub fn validate_advice_type(advice_type: &str) -> Result<(), String> {
    validate_choice(advice_type, VALID_ADVICE_TYPES, "advice type")
}

/// Validate profile name length
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

/// Validate free-text gender length
///
/// Any value is accepted; only "male" and "female" change the BMR formula.
pub fn validate_gender(gender: &str) -> Result<(), String> {
    if gender.chars().count() > MAX_GENDER_LEN {
        return Err(format!("Gender cannot exceed {} characters", MAX_GENDER_LEN));
    }
    Ok(())
}

fn validate_choice(value: &str, allowed: &[&str], what: &str) -> Result<(), String> {
    let normalized = value.to_lowercase();
    if allowed.contains(&normalized.as_str()) {
        Ok(())
    } else {
        Err(format!("Invalid {}. Must be one of: {}", what, allowed.join(", ")))
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Weight",
        "height" | "height_cm" => "Height",
        "age" => "Age",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "goals" => "Health Goals",
        "advice_type" => "Advice Type",
        "name" => "Name",
        "daily_routine" => "Daily Routine",
        "medical_conditions" => "Medical Conditions",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Attach field context to a validator result
pub fn check_field(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|msg| ValidationError::new(field, &msg))
}
