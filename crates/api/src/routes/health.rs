use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
}

/// GET /api/v1/health -- pure liveness probe.
///
/// Always reports "ok" without touching the database: the probe answers
/// "is the server listening", nothing more.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Mount health check routes under the `/api/v1` prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
