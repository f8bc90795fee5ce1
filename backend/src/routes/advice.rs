//! Health advice API routes

use crate::error::ApiResult;
use crate::services::HealthAdviceService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use health_advisor_shared::{
    AdviceRecordResponse, HealthAdviceRequest, HealthAdviceResponse, SaveAdviceRequest,
};

/// Create health advice routes
pub fn advice_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(get_health_advice))
        .route("/history/:user_id", get(get_advice_history))
        .route("/save", post(save_advice))
}

/// POST /api/v1/health-advice - Metrics, recommendations and advice text
async fn get_health_advice(
    State(state): State<AppState>,
    Json(req): Json<HealthAdviceRequest>,
) -> ApiResult<Json<HealthAdviceResponse>> {
    let response = HealthAdviceService::get_advice(&state, req).await?;
    Ok(Json(response))
}

/// GET /api/v1/health-advice/history/:user_id - Stored advice, newest first
async fn get_advice_history(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<AdviceRecordResponse>>> {
    let history = HealthAdviceService::history(&state, user_id).await?;
    Ok(Json(history))
}

/// POST /api/v1/health-advice/save - Store advice for a profile
async fn save_advice(
    State(state): State<AppState>,
    Json(req): Json<SaveAdviceRequest>,
) -> ApiResult<Json<AdviceRecordResponse>> {
    let record = HealthAdviceService::save_advice(&state, req).await?;
    Ok(Json(record))
}
