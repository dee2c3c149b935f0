use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::server::AppState;
use crate::server::dto::WeatherSummary;
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};

use super::DEMO_USER_ID;

/// Weather for the demo user's location, trimmed for the dashboard. 404 when
/// the user has no location or no weather record matches it.
pub async fn current_weather(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let weather = state
        .store
        .get_weather_by_user(DEMO_USER_ID)
        .api_err("Failed to fetch weather data")?
        .or_not_found("Weather data not found")?;

    Ok::<_, ApiError>(Json(WeatherSummary::from(weather)))
}
