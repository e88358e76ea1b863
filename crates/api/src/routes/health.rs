use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Liveness probe: `ok` while the store answers, `degraded` once it
/// stops. Always 200; orchestration reads the body, not the status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = wayfarer_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health routes, mounted at the server root rather than under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
