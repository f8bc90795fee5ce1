//! User profile API routes

use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use health_advisor_shared::{
    CreateUserProfileRequest, ListProfilesQuery, MessageResponse, UpdateUserProfileRequest,
    UserProfileResponse,
};

/// Routes nested under /user-profile
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_profile))
        .route(
            "/:id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

/// Routes nested under /user-profiles
pub fn profiles_list_routes() -> Router<AppState> {
    Router::new().route("/", get(list_profiles))
}

/// POST /api/v1/user-profile - Create a profile
async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateUserProfileRequest>,
) -> ApiResult<(StatusCode, Json<UserProfileResponse>)> {
    let profile = ProfileService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/user-profile/:id
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserProfileResponse>> {
    let profile = ProfileService::get(state.db(), id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/user-profile/:id - Only supplied fields change
async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserProfileRequest>,
) -> ApiResult<Json<UserProfileResponse>> {
    let profile = ProfileService::update(state.db(), id, req).await?;
    Ok(Json(profile))
}

/// DELETE /api/v1/user-profile/:id
async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    ProfileService::delete(state.db(), id).await?;
    Ok(Json(MessageResponse {
        message: "User profile deleted successfully".to_string(),
    }))
}

/// GET /api/v1/user-profiles?skip=&limit=
async fn list_profiles(
    State(state): State<AppState>,
    Query(query): Query<ListProfilesQuery>,
) -> ApiResult<Json<Vec<UserProfileResponse>>> {
    let profiles = ProfileService::list(state.db(), &query).await?;
    Ok(Json(profiles))
}
