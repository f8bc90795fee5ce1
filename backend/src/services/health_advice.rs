//! Health advice service
//!
//! Validates the request, runs the metrics engine, asks the advice
//! generator for text and falls back to canned advice when the generator
//! fails or misses its deadline.

use crate::error::ApiError;
use crate::llm::{fallback_advice, AdviceGenerator, AdvicePrompt, LlmError};
use crate::repositories::{
    is_missing_profile, CreateAdviceRecord, HealthAdviceRepository, UserProfileRepository,
};
use crate::state::AppState;
use health_advisor_shared::validation::{
    check_field, validate_activity_level, validate_advice_type, validate_age, validate_gender,
    validate_goal, validate_height_cm, validate_weight_kg,
};
use health_advisor_shared::{
    compute, AdviceRecordResponse, AdviceSource, AdviceType, HealthAdviceRequest,
    HealthAdviceResponse, HealthMetrics, SaveAdviceRequest, UserProfileResponse,
};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Health advice service
pub struct HealthAdviceService;

impl HealthAdviceService {
    /// Compute metrics and advice for a request
    ///
    /// When the request names a profile, the advice is stored as
    /// `general` advice for it.
    #[instrument(skip(state, request), fields(user_profile_id = ?request.user_profile_id))]
    pub async fn get_advice(
        state: &AppState,
        request: HealthAdviceRequest,
    ) -> Result<HealthAdviceResponse, ApiError> {
        validate_request(&request)?;

        if let Some(profile_id) = request.user_profile_id {
            ensure_profile_exists(state, profile_id).await?;
        }

        let metrics = compute(&request.measurement(), request.goal())?;
        let (advice, advice_source) =
            Self::generate_text(state.advisor(), state.llm_timeout(), &request, &metrics).await;

        if let Some(profile_id) = request.user_profile_id {
            HealthAdviceRepository::create(
                state.db(),
                CreateAdviceRecord {
                    user_profile_id: profile_id,
                    advice_type: AdviceType::General.as_str().to_string(),
                    advice_content: advice.clone(),
                    bmi: Some(metrics.bmi),
                    calories_needed: Some(metrics.calories_needed),
                },
            )
            .await
            .map_err(|err| insert_error(err, profile_id))?;
            info!(profile_id, "Stored generated advice");
        }

        Ok(HealthAdviceResponse {
            advice,
            bmi: metrics.bmi,
            bmi_category: metrics.bmi_category,
            calories_needed: metrics.calories_needed,
            recommendations: metrics.recommendations,
            advice_source,
        })
    }

    /// Ask the generator for advice text, substituting fallback advice on any failure
    pub async fn generate_text(
        advisor: &dyn AdviceGenerator,
        deadline: Duration,
        request: &HealthAdviceRequest,
        metrics: &HealthMetrics,
    ) -> (String, AdviceSource) {
        let prompt = AdvicePrompt::new(request, metrics);

        let outcome = match tokio::time::timeout(deadline, advisor.generate(&prompt)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(deadline.as_secs())),
        };

        match outcome {
            Ok(text) => return (text, AdviceSource::Llm),
            Err(LlmError::Disabled) => {}
            Err(e) => {
                warn!(generator = advisor.name(), error = %e, "Advice generation failed, using fallback");
            }
        }

        let advice = fallback_advice(
            Some(metrics.bmi),
            Some(metrics.calories_needed),
            request.goal(),
        );
        (advice, AdviceSource::Fallback)
    }

    /// Store advice for a profile
    ///
    /// Missing or blank content is generated from the stored profile.
    #[instrument(skip(state, request), fields(user_profile_id = request.user_profile_id))]
    pub async fn save_advice(
        state: &AppState,
        request: SaveAdviceRequest,
    ) -> Result<AdviceRecordResponse, ApiError> {
        check_field("advice_type", validate_advice_type(&request.advice_type))?;
        let advice_type: AdviceType = request
            .advice_type
            .parse()
            .map_err(ApiError::validation)?;

        let profile: UserProfileResponse =
            UserProfileRepository::find_by_id(state.db(), request.user_profile_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| profile_not_found(request.user_profile_id))?
                .into();

        let advice_request = profile.to_advice_request();
        let metrics = compute(&advice_request.measurement(), advice_request.goal())?;

        let advice_content = match request
            .advice_content
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
        {
            Some(content) => content,
            None => {
                Self::generate_text(state.advisor(), state.llm_timeout(), &advice_request, &metrics)
                    .await
                    .0
            }
        };

        let record = HealthAdviceRepository::create(
            state.db(),
            CreateAdviceRecord {
                user_profile_id: profile.id,
                advice_type: advice_type.as_str().to_string(),
                advice_content,
                bmi: Some(metrics.bmi),
                calories_needed: Some(metrics.calories_needed),
            },
        )
        .await
        .map_err(|err| insert_error(err, profile.id))?;

        info!(advice_id = record.id, advice_type = %advice_type, "Advice saved");
        Ok(record.into())
    }

    /// Advice history for a profile, newest first
    pub async fn history(
        state: &AppState,
        user_profile_id: i64,
    ) -> Result<Vec<AdviceRecordResponse>, ApiError> {
        let records = HealthAdviceRepository::list_for_profile(state.db(), user_profile_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}

/// Field-level checks for an advice request
pub fn validate_request(request: &HealthAdviceRequest) -> Result<(), ApiError> {
    check_field("weight", validate_weight_kg(request.weight))?;
    check_field("height", validate_height_cm(request.height))?;
    if let Some(age) = request.age {
        check_field("age", validate_age(age))?;
    }
    if let Some(ref gender) = request.gender {
        check_field("gender", validate_gender(gender))?;
    }
    if let Some(ref level) = request.activity_level {
        check_field("activity_level", validate_activity_level(level))?;
    }
    if let Some(ref goals) = request.goals {
        check_field("goals", validate_goal(goals))?;
    }
    Ok(())
}

async fn ensure_profile_exists(state: &AppState, profile_id: i64) -> Result<(), ApiError> {
    let exists = UserProfileRepository::exists(state.db(), profile_id)
        .await
        .map_err(ApiError::Internal)?;
    if exists {
        Ok(())
    } else {
        Err(profile_not_found(profile_id))
    }
}

fn profile_not_found(profile_id: i64) -> ApiError {
    ApiError::NotFound(format!("User profile {} not found", profile_id))
}

/// The profile can be deleted between the existence check and the insert
fn insert_error(err: anyhow::Error, profile_id: i64) -> ApiError {
    if is_missing_profile(&err) {
        profile_not_found(profile_id)
    } else {
        ApiError::Internal(err)
    }
}
