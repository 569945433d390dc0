//! Liveness probe.
//!
//! - GET /health - store reachability and server clock

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db::DbPool, error::AppError};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Report the service healthy once the pool answers a trivial query.
///
/// A failed round trip goes through `AppError::Database`, so callers see the
/// same 500 body as any other storage failure.
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    let _: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        database: "connected",
        timestamp: Utc::now(),
    }))
}
