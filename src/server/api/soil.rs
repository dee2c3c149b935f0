use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::server::AppState;
use crate::server::dto::SoilSummary;
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};

use super::DEMO_USER_ID;

/// Soil reading for the demo user's current crop. 404 if the user has no
/// crops or the crop has no reading.
pub async fn current_soil_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let soil = state
        .store
        .current_soil_data(DEMO_USER_ID)
        .api_err("Failed to fetch soil data")?
        .or_not_found("Soil data not found")?;

    Ok::<_, ApiError>(Json(SoilSummary::from(soil)))
}
