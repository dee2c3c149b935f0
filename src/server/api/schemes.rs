use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::server::AppState;
use crate::server::response::{ApiError, StoreResultExt};

/// All government schemes, in insertion order.
pub async fn list_schemes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let schemes = state
        .store
        .list_schemes()
        .api_err("Failed to fetch government schemes")?;

    Ok::<_, ApiError>(Json(schemes))
}
