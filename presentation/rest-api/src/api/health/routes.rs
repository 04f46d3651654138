use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// `up` when the database answered a probe query, `down` otherwise
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint for load balancers and container probes.
pub struct HealthApi {
    pool: PgPool,
}

impl HealthApi {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_status(reachable: bool) -> &'static str {
    if reachable { "up" } else { "down" }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Always answers 200 while the process is serving; the `database` field
    /// reports whether PostgreSQL is reachable.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let reachable = persistence::db::ping(&self.pool).await;

        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            database: database_status(reachable).to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_database_status() {
        assert_eq!(database_status(true), "up");
        assert_eq!(database_status(false), "down");
    }
}
