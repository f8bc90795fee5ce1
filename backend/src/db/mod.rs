//! Database connection and pool management
//!
//! PostgreSQL pool creation, embedded migrations for the `user_profiles`
//! and `health_advice` tables, and the readiness probe query.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Pool tuning for the advice service
///
/// Traffic is light, so the pool keeps a single warm connection.
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600, // 10 minutes
        }
    }
}

impl From<&DatabaseConfig> for DbConfig {
    fn from(settings: &DatabaseConfig) -> Self {
        Self {
            url: settings.url.clone(),
            max_connections: settings.max_connections.max(1),
            ..Default::default()
        }
    }
}

/// Create a PostgreSQL connection pool from application settings
pub async fn create_pool(settings: &DatabaseConfig) -> Result<PgPool> {
    let config = DbConfig::from(settings);
    let connect_options = PgConnectOptions::from_str(&config.url)?
        .application_name("health-advisor");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        max = config.max_connections,
        min = config.min_connections,
        "Database pool created"
    );

    Ok(pool)
}

/// Run embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check that the database answers and the schema is in place
pub async fn health_check(pool: &PgPool) -> Result<()> {
    let schema_ready = sqlx::query_scalar::<_, bool>(
        "SELECT to_regclass('public.user_profiles') IS NOT NULL \
         AND to_regclass('public.health_advice') IS NOT NULL",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| {
        warn!("Database health check failed: {}", e);
        anyhow::Error::from(e)
    })?;

    if !schema_ready {
        warn!("Database reachable but migrations have not been applied");
        anyhow::bail!("database schema is missing");
    }
    Ok(())
}
