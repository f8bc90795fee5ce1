//! API request and response types

use crate::health_metrics::{ActivityLevel, BmiCategory, Gender, Measurement};
use crate::models::AdviceSource;
use crate::recommendations::{Goal, Recommendations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Default page size for profile listings
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

// ============================================================================
// Health Advice Types
// ============================================================================

/// Health advice request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAdviceRequest {
    /// Weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_routine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
    /// Persist the generated advice for this profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile_id: Option<i64>,
}

impl HealthAdviceRequest {
    /// Engine input for this request
    ///
    /// Ages outside `u32` are dropped; range checks happen in validation.
    pub fn measurement(&self) -> Measurement {
        Measurement {
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age.and_then(|a| u32::try_from(a).ok()),
            gender: self.gender.as_deref().map(Gender::from_text).unwrap_or_default(),
            activity_level: self
                .activity_level
                .as_deref()
                .and_then(|level| level.parse::<ActivityLevel>().ok()),
        }
    }

    pub fn goal(&self) -> Option<Goal> {
        Goal::lookup(self.goals.as_deref())
    }
}

/// Health advice response: computed metrics plus advice text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAdviceResponse {
    pub advice: String,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub calories_needed: i32,
    pub recommendations: Recommendations,
    pub advice_source: AdviceSource,
}

/// Request to store advice for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAdviceRequest {
    pub user_profile_id: i64,
    /// One of diet, exercise, general
    pub advice_type: String,
    /// Generated from the stored profile when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice_content: Option<String>,
}

/// Stored advice record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceRecordResponse {
    pub id: i64,
    pub user_profile_id: i64,
    pub advice_type: String,
    pub advice_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_needed: Option<i32>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Profile Types
// ============================================================================

/// Create profile request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    /// Weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub daily_routine: Option<String>,
    #[serde(default)]
    pub medical_conditions: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

/// Partial profile update
///
/// Absent fields keep their stored value. For the nullable columns an
/// explicit `null` clears the value, so those fields are `Some(None)` after
/// deserialization. Weight and height are required columns and ignore `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserProfileRequest {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<i32>>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub daily_routine: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub goals: Option<Option<String>>,
}

/// Present keys become `Some`, with `null` as `Some(None)`
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub weight: f64,
    pub height: f64,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub daily_routine: Option<String>,
    pub medical_conditions: Option<String>,
    pub goals: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfileResponse {
    /// Advice request built from the stored profile
    pub fn to_advice_request(&self) -> HealthAdviceRequest {
        HealthAdviceRequest {
            weight: self.weight,
            height: self.height,
            age: self.age,
            gender: self.gender.clone(),
            activity_level: self.activity_level.clone(),
            daily_routine: self.daily_routine.clone(),
            goals: self.goals.clone(),
            medical_conditions: self.medical_conditions.clone(),
            user_profile_id: Some(self.id),
        }
    }
}

/// Pagination for profile listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProfilesQuery {
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListProfilesQuery {
    /// Offset, never negative
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    /// Page size clamped to 1..=DEFAULT_PAGE_LIMIT
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, DEFAULT_PAGE_LIMIT)
    }
}

/// Simple message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
