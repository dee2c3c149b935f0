use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Crop, SoilData, User, WeatherData};

/// A user as it crosses the API boundary: every stored field except the
/// password. Handlers convert through this type so the password can never
/// leak into a response by accident.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            phone: user.phone,
            location: user.location,
            farm_size: user.farm_size,
            farm_type: user.farm_type,
            created_at: user.created_at,
        }
    }
}

/// The trimmed weather payload the dashboard consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub condition: String,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<i32>,
}

impl From<WeatherData> for WeatherSummary {
    fn from(weather: WeatherData) -> Self {
        Self {
            condition: weather.condition,
            temperature: weather.temperature,
            humidity: weather.humidity,
            wind: weather.wind,
            precipitation: weather.precipitation,
            feels_like: weather.feels_like,
            uv_index: weather.uv_index,
        }
    }
}

/// Soil reading without ids or the measurement timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSummary {
    pub status: String,
    pub percentage: i32,
    #[serde(rename = "pH", skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
}

impl From<SoilData> for SoilSummary {
    fn from(soil: SoilData) -> Self {
        Self {
            status: soil.status,
            percentage: soil.percentage,
            ph: soil.ph,
            nitrogen: soil.nitrogen,
            phosphorus: soil.phosphorus,
            potassium: soil.potassium,
            soil_type: soil.soil_type,
        }
    }
}

/// Current-crop card: the crop's display fields with the status rendered as
/// its capitalized label.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSummary {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planted_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_harvest: Option<DateTime<Utc>>,
    pub growth_progress: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_needs: Option<String>,
}

impl From<Crop> for CropSummary {
    fn from(crop: Crop) -> Self {
        Self {
            id: crop.id,
            name: crop.name,
            emoji: crop.emoji,
            status: crop.status.label(),
            planted_date: crop.planted_date,
            expected_harvest: crop.expected_harvest,
            growth_progress: crop.growth_progress,
            water_needs: crop.water_needs,
            nutrition_needs: crop.nutrition_needs,
        }
    }
}

/// Canned crop-scan result. Empty lists are serialized, not skipped: the
/// scan page iterates them unconditionally.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub crop: &'static str,
    pub health: &'static str,
    pub issues: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

/// Canned disease-detection result. An empty `name` means no disease was
/// found.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub name: &'static str,
    pub confidence: i32,
    pub description: &'static str,
    pub treatment: Vec<&'static str>,
    pub preventive_measures: Vec<&'static str>,
    pub organic_remedies: Vec<&'static str>,
    pub is_severe: bool,
}

/// One entry of the canned crop-suitability ranking.
#[derive(Debug, Serialize)]
pub struct CropSuitability {
    pub name: &'static str,
    pub icon: &'static str,
    pub score: i32,
    pub soil: &'static str,
    pub water: &'static str,
    pub season: &'static str,
}
