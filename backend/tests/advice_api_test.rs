//! Router tests for POST /api/v1/health-advice
//!
//! Requests without `user_profile_id` never touch the database, so these
//! run against a lazy pool.

mod common;

use axum::http::StatusCode;
use common::{BrokenAdvice, CannedAdvice, HangingAdvice, TestApp};
use health_advisor_backend::llm::DisabledAdviceGenerator;
use rstest::rstest;
use serde_json::{json, Value};
use std::sync::Arc;

const ADVICE_PATH: &str = "/api/v1/health-advice";

async fn post_advice(app: &TestApp, body: Value) -> (StatusCode, Value) {
    let (status, body) = app.post(ADVICE_PATH, &body.to_string()).await;
    let json = serde_json::from_str(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_advice_from_generator() {
    let app = TestApp::without_database(Arc::new(CannedAdvice("Keep walking daily.")));

    let (status, body) = post_advice(
        &app,
        json!({
            "weight": 70.0,
            "height": 175.0,
            "age": 30,
            "gender": "male",
            "activity_level": "moderate"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advice"], "Keep walking daily.");
    assert_eq!(body["advice_source"], "llm");
    assert_eq!(body["bmi"], 22.9);
    assert_eq!(body["bmi_category"], "normal");
    assert_eq!(body["calories_needed"], 2641);
    assert_eq!(body["recommendations"]["diet"]["calories"], "Maintain current calorie intake");
}

#[tokio::test]
async fn test_generator_failure_uses_fallback_advice() {
    let app = TestApp::without_database(Arc::new(BrokenAdvice));

    let (status, body) = post_advice(
        &app,
        json!({"weight": 70.0, "height": 175.0, "goals": "weight_loss"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advice_source"], "fallback");
    let advice = body["advice"].as_str().unwrap();
    assert!(advice.contains("healthy range"));
    assert!(advice.contains("For weight loss"));
}

#[tokio::test]
async fn test_weight_loss_goal_overrides_diet_calories() {
    let app = TestApp::without_database(Arc::new(DisabledAdviceGenerator));

    let (status, body) = post_advice(
        &app,
        json!({"weight": 85.0, "height": 175.0, "goals": "weight_loss"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bmi"], 27.8);
    assert_eq!(body["bmi_category"], "overweight");
    assert_eq!(
        body["recommendations"]["diet"]["calories"],
        "Create a 500-750 calorie deficit"
    );
}

#[tokio::test]
async fn test_female_moderate_calories() {
    let app = TestApp::without_database(Arc::new(DisabledAdviceGenerator));

    let (status, body) = post_advice(
        &app,
        json!({
            "weight": 70.0,
            "height": 175.0,
            "age": 30,
            "gender": "female",
            "activity_level": "moderate"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calories_needed"], 2384);
}

#[rstest]
#[case::zero_height(json!({"weight": 70.0, "height": 0.0}), "height")]
#[case::heavy(json!({"weight": 600.0, "height": 175.0}), "weight")]
#[case::age_too_high(json!({"weight": 70.0, "height": 175.0, "age": 121}), "age")]
#[case::unknown_activity(json!({"weight": 70.0, "height": 175.0, "activity_level": "couch"}), "activity_level")]
#[case::unknown_goal(json!({"weight": 70.0, "height": 175.0, "goals": "bulk"}), "goals")]
#[tokio::test]
async fn test_invalid_request_is_rejected(#[case] request: Value, #[case] field: &str) {
    let app = TestApp::without_database(Arc::new(DisabledAdviceGenerator));

    let (status, body) = post_advice(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], field);
}

#[tokio::test]
async fn test_missing_height_is_rejected() {
    let app = TestApp::without_database(Arc::new(DisabledAdviceGenerator));

    let (status, _) = app.post(ADVICE_PATH, r#"{"weight": 70.0}"#).await;

    assert!(status.is_client_error());
}

#[tokio::test(start_paused = true)]
async fn test_hanging_generator_returns_fallback_before_request_timeout() {
    let app = TestApp::without_database(Arc::new(HangingAdvice));

    let (status, body) = post_advice(&app, json!({"weight": 70.0, "height": 175.0})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advice_source"], "fallback");
    assert_eq!(body["bmi"], 22.9);
}
