//! Health Advisor WASM Module
//!
//! WebAssembly bindings for the health metrics engine so the browser can
//! show BMI, calorie needs and recommendations without a round trip.

use health_advisor_shared::{
    self as shared, get_diet_recommendations, get_exercise_recommendations,
    get_lifestyle_recommendations, ActivityLevel, Gender, Goal, Measurement, MetricsError,
    Recommendations,
};
use wasm_bindgen::prelude::*;

/// BMI rounded to one decimal, NaN when height or weight is not positive
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    shared::calculate_bmi(weight_kg, height_cm).unwrap_or(f64::NAN)
}

/// Category name for a BMI value
#[wasm_bindgen]
pub fn classify_bmi(bmi: f64) -> String {
    shared::classify_bmi(bmi).as_str().to_string()
}

/// Daily calorie needs; unknown gender or activity strings use the defaults
#[wasm_bindgen]
pub fn calculate_calories(
    weight_kg: f64,
    height_cm: f64,
    age: Option<u32>,
    gender: Option<String>,
    activity_level: Option<String>,
) -> i32 {
    shared::calculate_calories(
        weight_kg,
        height_cm,
        age,
        gender.as_deref().map(Gender::from_text).unwrap_or_default(),
        activity_level.as_deref().and_then(|a| a.parse::<ActivityLevel>().ok()),
    )
}

/// Full engine output as JSON
#[wasm_bindgen]
pub fn compute_metrics(
    weight_kg: f64,
    height_cm: f64,
    age: Option<u32>,
    gender: Option<String>,
    activity_level: Option<String>,
    goal: Option<String>,
) -> Result<String, JsValue> {
    compute_metrics_json(
        weight_kg,
        height_cm,
        age,
        gender.as_deref(),
        activity_level.as_deref(),
        goal.as_deref(),
    )
    .map_err(|e| JsValue::from_str(&e))
}

/// Recommendation bundles for a category name as JSON
#[wasm_bindgen]
pub fn get_recommendations(
    bmi_category: &str,
    goal: Option<String>,
    activity_level: Option<String>,
) -> Result<String, JsValue> {
    recommendations_json(bmi_category, goal.as_deref(), activity_level.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn compute_metrics_json(
    weight_kg: f64,
    height_cm: f64,
    age: Option<u32>,
    gender: Option<&str>,
    activity_level: Option<&str>,
    goal: Option<&str>,
) -> Result<String, String> {
    let measurement = Measurement {
        weight_kg,
        height_cm,
        age,
        gender: gender.map(Gender::from_text).unwrap_or_default(),
        activity_level: activity_level.and_then(|a| a.parse::<ActivityLevel>().ok()),
    };

    let metrics = shared::compute(&measurement, Goal::lookup(goal))
        .map_err(|e: MetricsError| e.to_string())?;
    serde_json::to_string(&metrics).map_err(|e| e.to_string())
}

fn recommendations_json(
    bmi_category: &str,
    goal: Option<&str>,
    activity_level: Option<&str>,
) -> Result<String, serde_json::Error> {
    let recommendations = Recommendations {
        diet: get_diet_recommendations(bmi_category, goal),
        exercise: get_exercise_recommendations(bmi_category, activity_level),
        lifestyle: get_lifestyle_recommendations(bmi_category),
    };
    serde_json::to_string(&recommendations)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_compute_metrics_rejects_zero_height() {
        assert!(compute_metrics(70.0, 0.0, None, None, None, None).is_err());
    }
}
