//! HTTP route handlers and router assembly.
//!
//! The router is an explicit route table: health probes, the user resource,
//! and the root discovery document, with a JSON 404 fallback for anything
//! unmatched. Request logging middleware is layered outermost so every
//! request is logged before dispatch, including ones that fall through to
//! the 404 handler.

pub mod health;
pub mod home;
pub mod users;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde_json::json;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_log_layer;
use crate::state::AppState;

/// Uniform 404 body for unmatched method+path combinations.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}

/// Creates the Axum router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Probes - never cached, orchestrators need fresh answers
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .route("/health/live", get(health::live))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    // User registry resource
    let user_routes = Router::new()
        .route("/api/users", get(users::list))
        .route("/api/users", post(users::create))
        .route("/api/users/{id}", get(users::get_by_id));

    Router::new()
        .route("/", get(home::index))
        .merge(health_routes)
        .merge(user_routes)
        .fallback(not_found)
        // A known path with the wrong method is still "unmatched" to clients
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        // Request logging middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_log_layer))
}
