mod crops;
mod detection;
mod market;
mod schemes;
mod settings;
mod soil;
mod suitability;
mod users;
mod weather;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::server::AppState;

/// The demo serves a single farm profile; handlers that need "the" user
/// resolve this id.
pub(crate) const DEMO_USER_ID: i64 = 1;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Users
        .route("/user/register", post(users::register_user))
        .route("/user/profile", post(users::update_profile))
        .route("/user/{id}", get(users::get_user))
        // Weather
        .route("/weather", get(weather::current_weather))
        // Soil
        .route("/soil-data", get(soil::current_soil_data))
        // Crops
        .route("/crops", post(crops::create_crop))
        .route("/crops/current", get(crops::current_crop))
        .route("/crops/{id}", get(crops::get_crop))
        // Market data
        .route("/market/current", get(market::current_market_data))
        .route("/market/{crop_name}", get(market::get_market_data))
        // Scan and disease detection (canned reports, no store access)
        .route("/scan", post(detection::scan_crop))
        .route("/disease-detection", post(detection::detect_disease))
        // Government schemes
        .route("/government-schemes", get(schemes::list_schemes))
        // Crop suitability
        .route("/crop-suitability", get(suitability::rank_crops))
        // Settings
        .route("/settings", get(settings::get_settings))
        .route("/settings", post(settings::update_settings))
}
