//! User profile service

use crate::error::ApiError;
use crate::repositories::{ProfileFields, UpdateProfileFields, UserProfileRepository};
use health_advisor_shared::validation::{
    check_field, validate_activity_level, validate_age, validate_gender, validate_goal,
    validate_height_cm, validate_name, validate_weight_kg, ValidationError,
};
use health_advisor_shared::{
    CreateUserProfileRequest, ListProfilesQuery, UpdateUserProfileRequest, UserProfileResponse,
};
use sqlx::PgPool;
use tracing::info;

/// User profile service
pub struct ProfileService;

impl ProfileService {
    /// Create a profile
    pub async fn create(
        pool: &PgPool,
        request: CreateUserProfileRequest,
    ) -> Result<UserProfileResponse, ApiError> {
        validate_create(&request)?;

        let record = UserProfileRepository::create(
            pool,
            ProfileFields {
                name: request.name,
                age: request.age,
                weight_kg: request.weight,
                height_cm: request.height,
                gender: request.gender,
                activity_level: request.activity_level,
                daily_routine: request.daily_routine,
                medical_conditions: request.medical_conditions,
                goals: request.goals,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        info!(profile_id = record.id, "User profile created");
        Ok(record.into())
    }

    /// Fetch a profile
    pub async fn get(pool: &PgPool, id: i64) -> Result<UserProfileResponse, ApiError> {
        UserProfileRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// List profiles
    pub async fn list(
        pool: &PgPool,
        query: &ListProfilesQuery,
    ) -> Result<Vec<UserProfileResponse>, ApiError> {
        let records = UserProfileRepository::list(pool, query.offset(), query.limit())
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Apply a partial update
    pub async fn update(
        pool: &PgPool,
        id: i64,
        request: UpdateUserProfileRequest,
    ) -> Result<UserProfileResponse, ApiError> {
        validate_update(&request)?;

        let record = UserProfileRepository::update(
            pool,
            id,
            UpdateProfileFields {
                name: request.name,
                age: request.age,
                weight_kg: request.weight,
                height_cm: request.height,
                gender: request.gender,
                activity_level: request.activity_level,
                daily_routine: request.daily_routine,
                medical_conditions: request.medical_conditions,
                goals: request.goals,
            },
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| not_found(id))?;

        info!(profile_id = id, "User profile updated");
        Ok(record.into())
    }

    /// Delete a profile together with its stored advice
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), ApiError> {
        let deleted = UserProfileRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(not_found(id));
        }

        info!(profile_id = id, "User profile deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("User profile {} not found", id))
}

/// Checks shared by create and update; every field is optional here
fn validate_optional_fields(
    name: Option<&str>,
    age: Option<i32>,
    gender: Option<&str>,
    activity_level: Option<&str>,
    goals: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        check_field("name", validate_name(name))?;
    }
    if let Some(age) = age {
        check_field("age", validate_age(age))?;
    }
    if let Some(gender) = gender {
        check_field("gender", validate_gender(gender))?;
    }
    if let Some(level) = activity_level {
        check_field("activity_level", validate_activity_level(level))?;
    }
    if let Some(goals) = goals {
        check_field("goals", validate_goal(goals))?;
    }
    Ok(())
}

pub fn validate_create(request: &CreateUserProfileRequest) -> Result<(), ValidationError> {
    check_field("weight", validate_weight_kg(request.weight))?;
    check_field("height", validate_height_cm(request.height))?;
    validate_optional_fields(
        request.name.as_deref(),
        request.age,
        request.gender.as_deref(),
        request.activity_level.as_deref(),
        request.goals.as_deref(),
    )
}

pub fn validate_update(request: &UpdateUserProfileRequest) -> Result<(), ValidationError> {
    if let Some(weight) = request.weight {
        check_field("weight", validate_weight_kg(weight))?;
    }
    if let Some(height) = request.height {
        check_field("height", validate_height_cm(height))?;
    }
    validate_optional_fields(
        request.name.as_ref().and_then(Option::as_deref),
        request.age.flatten(),
        request.gender.as_ref().and_then(Option::as_deref),
        request.activity_level.as_ref().and_then(Option::as_deref),
        request.goals.as_ref().and_then(Option::as_deref),
    )
}
