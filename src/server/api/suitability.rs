use axum::Json;

use crate::server::dto::CropSuitability;

/// Canned suitability ranking for the demo region. A real implementation
/// would score crops against the user's soil data.
pub async fn rank_crops() -> Json<Vec<CropSuitability>> {
    Json(vec![
        CropSuitability {
            name: "Rice",
            icon: "🌾",
            score: 92,
            soil: "Clay loam",
            water: "High",
            season: "Kharif (June-Oct)",
        },
        CropSuitability {
            name: "Wheat",
            icon: "🌿",
            score: 78,
            soil: "Clay loam",
            water: "Medium",
            season: "Rabi (Nov-Apr)",
        },
        CropSuitability {
            name: "Corn",
            icon: "🌽",
            score: 85,
            soil: "Loam",
            water: "Medium",
            season: "Kharif (June-Oct)",
        },
        CropSuitability {
            name: "Soybeans",
            icon: "🫘",
            score: 70,
            soil: "Loam",
            water: "Medium-Low",
            season: "Kharif (June-Oct)",
        },
    ])
}
