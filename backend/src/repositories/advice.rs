//! Stored health advice repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use health_advisor_shared::AdviceRecordResponse;
use sqlx::PgPool;

/// Health advice record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthAdviceRecord {
    pub id: i64,
    pub user_profile_id: i64,
    pub advice_type: String,
    pub advice_content: String,
    pub bmi: Option<f64>,
    pub calories_needed: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<HealthAdviceRecord> for AdviceRecordResponse {
    fn from(record: HealthAdviceRecord) -> Self {
        AdviceRecordResponse {
            id: record.id,
            user_profile_id: record.user_profile_id,
            advice_type: record.advice_type,
            advice_content: record.advice_content,
            bmi: record.bmi,
            calories_needed: record.calories_needed,
            created_at: record.created_at,
        }
    }
}

/// Input for storing advice
#[derive(Debug, Clone)]
pub struct CreateAdviceRecord {
    pub user_profile_id: i64,
    pub advice_type: String,
    pub advice_content: String,
    pub bmi: Option<f64>,
    pub calories_needed: Option<i32>,
}

/// Whether an insert failed because the referenced profile no longer exists
pub fn is_missing_profile(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db)) => db.is_foreign_key_violation(),
        _ => false,
    }
}

/// Health advice repository
pub struct HealthAdviceRepository;

impl HealthAdviceRepository {
    /// Store an advice record
    pub async fn create(pool: &PgPool, input: CreateAdviceRecord) -> Result<HealthAdviceRecord> {
        let record = sqlx::query_as::<_, HealthAdviceRecord>(
            r#"
            INSERT INTO health_advice
                (user_profile_id, advice_type, advice_content, bmi, calories_needed)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_profile_id, advice_type, advice_content, bmi,
                      calories_needed, created_at
            "#,
        )
        .bind(input.user_profile_id)
        .bind(input.advice_type)
        .bind(input.advice_content)
        .bind(input.bmi)
        .bind(input.calories_needed)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All advice for a profile, newest first
    pub async fn list_for_profile(
        pool: &PgPool,
        user_profile_id: i64,
    ) -> Result<Vec<HealthAdviceRecord>> {
        let records = sqlx::query_as::<_, HealthAdviceRecord>(
            r#"
            SELECT id, user_profile_id, advice_type, advice_content, bmi,
                   calories_needed, created_at
            FROM health_advice
            WHERE user_profile_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_profile_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_are_not_missing_profile() {
        assert!(!is_missing_profile(&anyhow::anyhow!("connection reset")));
        assert!(!is_missing_profile(&sqlx::Error::RowNotFound.into()));
        assert!(!is_missing_profile(&sqlx::Error::PoolTimedOut.into()));
    }
}
