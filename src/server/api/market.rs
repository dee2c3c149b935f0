use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};

use super::DEMO_USER_ID;

/// Market record for the demo user's current crop: resolves the crop first,
/// then looks its name up in the market data. 404 if either step misses.
pub async fn current_market_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let crop = state
        .store
        .current_crop(DEMO_USER_ID)
        .api_err("Failed to fetch crop data")?
        .or_not_found("No current crop found")?;

    let market = state
        .store
        .get_market_data_by_crop(&crop.name)
        .api_err("Failed to fetch market data")?
        .or_not_found("Market data not found")?;

    Ok::<_, ApiError>(Json(market))
}

pub async fn get_market_data(
    State(state): State<Arc<AppState>>,
    Path(crop_name): Path<String>,
) -> impl IntoResponse {
    let market = state
        .store
        .get_market_data_by_crop(&crop_name)
        .api_err("Failed to fetch market data")?
        .or_not_found("Market data not found")?;

    Ok::<_, ApiError>(Json(market))
}
