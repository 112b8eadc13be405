//! Root discovery document.

use axum::Json;
use serde::Serialize;

/// Static discovery document listing the available endpoint prefixes.
#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub api: &'static str,
}

/// `GET /` handler.
pub async fn index() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        message: "Roster user registry API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/health",
            api: "/api",
        },
    })
}
