use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;
use std::time::Duration;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: Pool acquire timeout in seconds (default: 30)
///
/// # Errors
/// Returns error if DATABASE_URL is not set or connection fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let config = database_config_from(|key| env::var(key).ok())?;
    let pool = create_postgres_pool(&config)
        .await
        .context("Unable to connect to the database")?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );
    Ok(pool)
}

fn database_config_from(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<DatabaseConfig> {
    let db_url = lookup("DATABASE_URL")
        .filter(|url| !url.is_empty())
        .context("DATABASE_URL environment variable is not set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
        let max = max
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {max}"))?;
        config = config.with_max_connections(max);
    }
    if let Some(secs) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        let secs = secs
            .parse::<u64>()
            .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {secs}"))?;
        config = config.with_acquire_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}
