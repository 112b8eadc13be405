//! Handlers for the user registry resource.
//!
//! List, fetch-by-id, and create over the in-memory [`UserStore`]. Update
//! and delete do not exist in this service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::User;

/// Response envelope for the user list.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// Response envelope for a single user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Create-user request body. Fields default to `None` so a partial body
/// reaches the presence check instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /api/users` - full list, insertion order, no pagination.
pub async fn list(State(state): State<AppState>) -> Json<UserListResponse> {
    Json(UserListResponse {
        users: state.users.list().await,
    })
}

/// `GET /api/users/{id}`.
///
/// The path segment is parsed here rather than by the extractor: a
/// non-numeric id means the resource cannot exist, so it is reported as
/// 404 like any other unknown id, not as a client parse error.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = match id.parse::<u64>() {
        Ok(id) => state.users.get_by_id(id).await,
        Err(_) => None,
    };

    let user = user.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(UserResponse { user }))
}

/// `POST /api/users`.
///
/// Validation is presence-only: name and email must each be present and
/// non-empty. No email format or uniqueness checks.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let name = body.name.filter(|n| !n.is_empty());
    let email = body.email.filter(|e| !e.is_empty());

    let (name, email) = match (name, email) {
        (Some(name), Some(email)) => (name, email),
        _ => {
            return Err(AppError::Validation("Missing name or email".to_string()));
        }
    };

    let user = state.users.create(name, email).await;
    tracing::debug!(id = user.id, "Created user");

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}
