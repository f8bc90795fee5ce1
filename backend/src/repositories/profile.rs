//! User profile repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use health_advisor_shared::UserProfileResponse;
use sqlx::PgPool;

const PROFILE_COLUMNS: &str = "id, name, age, weight_kg, height_cm, gender, activity_level, \
     daily_routine, medical_conditions, goals, created_at, updated_at";

/// User profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserProfileRecord {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub daily_routine: Option<String>,
    pub medical_conditions: Option<String>,
    pub goals: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfileRecord> for UserProfileResponse {
    fn from(record: UserProfileRecord) -> Self {
        UserProfileResponse {
            id: record.id,
            name: record.name,
            age: record.age,
            weight: record.weight_kg,
            height: record.height_cm,
            gender: record.gender,
            activity_level: record.activity_level,
            daily_routine: record.daily_routine,
            medical_conditions: record.medical_conditions,
            goals: record.goals,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for inserting a profile
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub daily_routine: Option<String>,
    pub medical_conditions: Option<String>,
    pub goals: Option<String>,
}

/// Input for a partial profile update
///
/// `None` keeps the stored value. On nullable columns `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileFields {
    pub name: Option<Option<String>>,
    pub age: Option<Option<i32>>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub gender: Option<Option<String>>,
    pub activity_level: Option<Option<String>>,
    pub daily_routine: Option<Option<String>>,
    pub medical_conditions: Option<Option<String>>,
    pub goals: Option<Option<String>>,
}

/// Split a nullable update into "column is touched" and the new value
fn touched<T>(field: Option<Option<T>>) -> (bool, Option<T>) {
    (field.is_some(), field.flatten())
}

/// User profile repository
pub struct UserProfileRepository;

impl UserProfileRepository {
    /// Insert a new profile
    pub async fn create(pool: &PgPool, fields: ProfileFields) -> Result<UserProfileRecord> {
        let sql = format!(
            r#"
            INSERT INTO user_profiles
                (name, age, weight_kg, height_cm, gender, activity_level,
                 daily_routine, medical_conditions, goals)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROFILE_COLUMNS}
            "#
        );
        let record = sqlx::query_as::<_, UserProfileRecord>(&sql)
            .bind(fields.name)
            .bind(fields.age)
            .bind(fields.weight_kg)
            .bind(fields.height_cm)
            .bind(fields.gender)
            .bind(fields.activity_level)
            .bind(fields.daily_routine)
            .bind(fields.medical_conditions)
            .bind(fields.goals)
            .fetch_one(pool)
            .await?;

        Ok(record)
    }

    /// Find profile by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<UserProfileRecord>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM user_profiles WHERE id = $1");
        let record = sqlx::query_as::<_, UserProfileRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// List profiles in ID order
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<UserProfileRecord>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles ORDER BY id OFFSET $1 LIMIT $2"
        );
        let records = sqlx::query_as::<_, UserProfileRecord>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Apply a partial update, returning `None` when the profile does not exist
    pub async fn update(
        pool: &PgPool,
        id: i64,
        updates: UpdateProfileFields,
    ) -> Result<Option<UserProfileRecord>> {
        let sql = format!(
            r#"
            UPDATE user_profiles SET
                weight_kg = COALESCE($2, weight_kg),
                height_cm = COALESCE($3, height_cm),
                name = CASE WHEN $4 THEN $5 ELSE name END,
                age = CASE WHEN $6 THEN $7 ELSE age END,
                gender = CASE WHEN $8 THEN $9 ELSE gender END,
                activity_level = CASE WHEN $10 THEN $11 ELSE activity_level END,
                daily_routine = CASE WHEN $12 THEN $13 ELSE daily_routine END,
                medical_conditions = CASE WHEN $14 THEN $15 ELSE medical_conditions END,
                goals = CASE WHEN $16 THEN $17 ELSE goals END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        );
        let (set_name, name) = touched(updates.name);
        let (set_age, age) = touched(updates.age);
        let (set_gender, gender) = touched(updates.gender);
        let (set_activity, activity_level) = touched(updates.activity_level);
        let (set_routine, daily_routine) = touched(updates.daily_routine);
        let (set_conditions, medical_conditions) = touched(updates.medical_conditions);
        let (set_goals, goals) = touched(updates.goals);

        let record = sqlx::query_as::<_, UserProfileRecord>(&sql)
            .bind(id)
            .bind(updates.weight_kg)
            .bind(updates.height_cm)
            .bind(set_name)
            .bind(name)
            .bind(set_age)
            .bind(age)
            .bind(set_gender)
            .bind(gender)
            .bind(set_activity)
            .bind(activity_level)
            .bind(set_routine)
            .bind(daily_routine)
            .bind(set_conditions)
            .bind(medical_conditions)
            .bind(set_goals)
            .bind(goals)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Delete a profile and its advice history
    ///
    /// Returns `false` when no profile had this ID.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check if a profile exists
    pub async fn exists(pool: &PgPool, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_profiles WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
