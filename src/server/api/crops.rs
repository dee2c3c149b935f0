use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::CropSummary;
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};
use crate::types::NewCrop;

use super::DEMO_USER_ID;

pub async fn current_crop(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let crop = state
        .store
        .current_crop(DEMO_USER_ID)
        .api_err("Failed to fetch crop data")?
        .or_not_found("No current crop found")?;

    Ok::<_, ApiError>(Json(CropSummary::from(crop)))
}

pub async fn get_crop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let crop = state
        .store
        .get_crop(id)
        .api_err("Failed to fetch crop data")?
        .or_not_found("Crop not found")?;

    Ok::<_, ApiError>(Json(crop))
}

pub async fn create_crop(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewCrop>,
) -> impl IntoResponse {
    let crop = state
        .store
        .create_crop(req)
        .api_err("Failed to create crop")?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(crop)))
}
