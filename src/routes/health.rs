//! Health, readiness, and liveness probes for container orchestration.
//!
//! Used by Kubernetes, ECS, systemd, and load balancers to decide whether
//! the process is alive and whether it should receive traffic. All three
//! endpoints are pure reads; the only state they touch is the process start
//! time and the registered readiness checks.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health status response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// RFC 3339 UTC timestamp of this response
    pub timestamp: String,
    /// Seconds since process start
    pub uptime: f64,
    pub environment: String,
}

/// Readiness probe response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct LiveResponse {
    pub alive: bool,
}

/// Health status handler.
///
/// Always returns 200 while the process can respond to HTTP.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.config.app.environment.clone(),
    })
}

/// Readiness probe handler.
///
/// Runs every registered check; all must pass before the service reports
/// ready. With no checks registered (or only the in-memory store check)
/// this always returns 200.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    for check in state.readiness.iter() {
        if !check.check().await {
            tracing::warn!(check = check.name(), "Readiness check failed");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse { ready: false }),
            );
        }
    }

    (StatusCode::OK, Json(ReadyResponse { ready: true }))
}

/// Liveness probe handler. Returns 200 whenever the process is running.
pub async fn live() -> Json<LiveResponse> {
    Json(LiveResponse { alive: true })
}
