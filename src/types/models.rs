use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health state of a crop. Serialized lowercase on the wire; summary
/// endpoints use [`CropStatus::label`] for the capitalized display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    #[default]
    Healthy,
    Stressed,
    Diseased,
}

impl CropStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CropStatus::Healthy => "Healthy",
            CropStatus::Stressed => "Stressed",
            CropStatus::Diseased => "Diseased",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseSeverity {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Stored verbatim. Must not cross the API boundary; handlers convert
    /// to `UserResponse` before responding.
    pub password: String,
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub status: CropStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planted_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_harvest: Option<DateTime<Utc>>,
    /// Percent, 0-100.
    pub growth_progress: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_size: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilData {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<i64>,
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
    pub measurement_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Lookup key; matched case-insensitively.
    pub location: String,
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
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyMandi {
    pub name: String,
    pub price: f64,
    pub distance: f64,
}

/// Price forecast series. `days` and `prices` are parallel lists; callers
/// are expected to keep them the same length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastTrend {
    pub days: Vec<String>,
    pub prices: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub id: i64,
    /// Lookup key; matched case-insensitively and not unique across records.
    pub crop_name: String,
    pub price: f64,
    /// Percent change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    /// Refreshed on every update.
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_tip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nearby_mandis: Vec<NearbyMandi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_trend: Option<ForecastTrend>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRecord {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<i64>,
    /// Empty string means the scan found no disease.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Percent, 0-100.
    #[serde(default)]
    pub confidence: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub treatment: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preventive_measures: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organic_remedies: Vec<String>,
    #[serde(default)]
    pub severity: DiseaseSeverity,
    pub scan_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentScheme {
    pub id: i64,
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eligibility: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    /// Free text: a literal date string or "Ongoing".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: i64,
    /// Logically one per user; the store does not enforce uniqueness and
    /// lookups take the first match.
    pub user_id: i64,
    pub notifications_enabled: bool,
    pub voice_assistant_enabled: bool,
    pub auto_scan_enabled: bool,
    pub dark_mode_enabled: bool,
    pub language: String,
}
