//! Liveness endpoint

use axum::extract::State;
use axum::{Json, Router, routing::get};
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn health_router(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(pool)
}

/// GET /health
async fn health(State(pool): State<PgPool>) -> AppResult<Json<HealthResponse>> {
    sqlx::query("SELECT 1").execute(&pool).await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        AppError::service_unavailable("Database unreachable")
            .with_code(kernel::error::conversions::STORE_ERROR)
            .with_action("Check that PostgreSQL is running and DATABASE_URL is correct")
            .with_source(e)
    })?;

    Ok(Json(HealthResponse { status: "ok" }))
}
