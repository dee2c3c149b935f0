use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::server::AppState;
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};
use crate::types::SettingsPatch;

use super::DEMO_USER_ID;

pub async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let settings = state
        .store
        .get_settings_by_user(DEMO_USER_ID)
        .api_err("Failed to fetch settings")?
        .or_not_found("Settings not found")?;

    Ok::<_, ApiError>(Json(settings))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<SettingsPatch>,
) -> impl IntoResponse {
    let settings = state
        .store
        .update_settings(DEMO_USER_ID, patch)
        .api_err("Failed to update settings")?
        .or_not_found("Settings not found")?;

    Ok::<_, ApiError>(Json(settings))
}
