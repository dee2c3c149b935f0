use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::UserResponse;
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};
use crate::server::validation::validate_username;
use crate::types::{NewUser, UserPatch};

use super::DEMO_USER_ID;

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let user = state
        .store
        .get_user(id)
        .api_err("Failed to get user")?
        .or_not_found("User not found")?;

    Ok::<_, ApiError>(Json(UserResponse::from(user)))
}

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUser>,
) -> impl IntoResponse {
    validate_username(&req.username)?;

    // The store's create is unconditional; uniqueness is checked here.
    if state
        .store
        .get_user_by_username(&req.username)
        .api_err("Failed to check username")?
        .is_some()
    {
        return Err(ApiError::conflict("Username already exists"));
    }

    let user = state
        .store
        .create_user(req)
        .api_err("Failed to create user")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Partial update of the demo user's profile. The profile form also posts
/// settings toggles in the same body; fields `UserPatch` does not know are
/// ignored.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<UserPatch>,
) -> impl IntoResponse {
    let user = state
        .store
        .update_user(DEMO_USER_ID, patch)
        .api_err("Failed to update profile")?
        .or_not_found("User not found")?;

    Ok::<_, ApiError>(Json(UserResponse::from(user)))
}
