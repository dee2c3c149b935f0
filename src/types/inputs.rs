//! Insert and partial-update companions to the entity models.
//!
//! `New*` types carry the caller-supplied fields of a create operation; ids
//! and server-assigned timestamps are filled in by the store. `*Patch` types
//! are all-optional: `Some` overwrites the stored value, `None` leaves it
//! unchanged. Neither carries an id, so an update can never move a record.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::models::{
    Crop, CropStatus, DiseaseSeverity, ForecastTrend, MarketData, NearbyMandi, Settings, User,
};

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub farm_size: Option<String>,
    #[serde(default)]
    pub farm_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCrop {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub status: CropStatus,
    #[serde(default)]
    pub planted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_harvest: Option<DateTime<Utc>>,
    #[serde(default)]
    pub growth_progress: i32,
    #[serde(default)]
    pub water_needs: Option<String>,
    #[serde(default)]
    pub nutrition_needs: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub field_size: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSoilData {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub crop_id: Option<i64>,
    pub status: String,
    pub percentage: i32,
    #[serde(default, rename = "pH")]
    pub ph: Option<f64>,
    #[serde(default)]
    pub nitrogen: Option<i32>,
    #[serde(default)]
    pub phosphorus: Option<i32>,
    #[serde(default)]
    pub potassium: Option<i32>,
    #[serde(default, rename = "type")]
    pub soil_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeatherData {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub location: String,
    pub condition: String,
    pub temperature: f64,
    #[serde(default)]
    pub humidity: Option<i32>,
    #[serde(default)]
    pub wind: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub uv_index: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMarketData {
    pub crop_name: String,
    pub price: f64,
    #[serde(default)]
    pub trend: Option<f64>,
    #[serde(default)]
    pub ai_tip: Option<String>,
    #[serde(default)]
    pub nearby_mandis: Vec<NearbyMandi>,
    #[serde(default)]
    pub forecast_trend: Option<ForecastTrend>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiseaseRecord {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub crop_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub confidence: i32,
    #[serde(default)]
    pub treatment: Vec<String>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
    #[serde(default)]
    pub organic_remedies: Vec<String>,
    #[serde(default)]
    pub severity: DiseaseSeverity,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGovernmentScheme {
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSettings {
    pub user_id: i64,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default = "default_true")]
    pub voice_assistant_enabled: bool,
    #[serde(default)]
    pub auto_scan_enabled: bool,
    #[serde(default)]
    pub dark_mode_enabled: bool,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub farm_size: Option<String>,
    #[serde(default)]
    pub farm_type: Option<String>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = Some(email);
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
        if let Some(location) = self.location {
            user.location = Some(location);
        }
        if let Some(farm_size) = self.farm_size {
            user.farm_size = Some(farm_size);
        }
        if let Some(farm_type) = self.farm_type {
            user.farm_type = Some(farm_type);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropPatch {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub status: Option<CropStatus>,
    #[serde(default)]
    pub planted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expected_harvest: Option<DateTime<Utc>>,
    #[serde(default)]
    pub growth_progress: Option<i32>,
    #[serde(default)]
    pub water_needs: Option<String>,
    #[serde(default)]
    pub nutrition_needs: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub field_size: Option<f64>,
}

impl CropPatch {
    pub fn apply(self, crop: &mut Crop) {
        if let Some(user_id) = self.user_id {
            crop.user_id = user_id;
        }
        if let Some(name) = self.name {
            crop.name = name;
        }
        if let Some(emoji) = self.emoji {
            crop.emoji = Some(emoji);
        }
        if let Some(status) = self.status {
            crop.status = status;
        }
        if let Some(planted_date) = self.planted_date {
            crop.planted_date = Some(planted_date);
        }
        if let Some(expected_harvest) = self.expected_harvest {
            crop.expected_harvest = Some(expected_harvest);
        }
        if let Some(growth_progress) = self.growth_progress {
            crop.growth_progress = growth_progress;
        }
        if let Some(water_needs) = self.water_needs {
            crop.water_needs = Some(water_needs);
        }
        if let Some(nutrition_needs) = self.nutrition_needs {
            crop.nutrition_needs = Some(nutrition_needs);
        }
        if let Some(field_name) = self.field_name {
            crop.field_name = Some(field_name);
        }
        if let Some(field_size) = self.field_size {
            crop.field_size = Some(field_size);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataPatch {
    #[serde(default)]
    pub crop_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub trend: Option<f64>,
    #[serde(default)]
    pub ai_tip: Option<String>,
    #[serde(default)]
    pub nearby_mandis: Option<Vec<NearbyMandi>>,
    #[serde(default)]
    pub forecast_trend: Option<ForecastTrend>,
}

impl MarketDataPatch {
    /// Does not touch `last_updated`; the store refreshes it on update.
    pub fn apply(self, data: &mut MarketData) {
        if let Some(crop_name) = self.crop_name {
            data.crop_name = crop_name;
        }
        if let Some(price) = self.price {
            data.price = price;
        }
        if let Some(trend) = self.trend {
            data.trend = Some(trend);
        }
        if let Some(ai_tip) = self.ai_tip {
            data.ai_tip = Some(ai_tip);
        }
        if let Some(nearby_mandis) = self.nearby_mandis {
            data.nearby_mandis = nearby_mandis;
        }
        if let Some(forecast_trend) = self.forecast_trend {
            data.forecast_trend = Some(forecast_trend);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
    #[serde(default)]
    pub voice_assistant_enabled: Option<bool>,
    #[serde(default)]
    pub auto_scan_enabled: Option<bool>,
    #[serde(default)]
    pub dark_mode_enabled: Option<bool>,
    #[serde(default)]
    pub language: Option<String>,
}

impl SettingsPatch {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(notifications_enabled) = self.notifications_enabled {
            settings.notifications_enabled = notifications_enabled;
        }
        if let Some(voice_assistant_enabled) = self.voice_assistant_enabled {
            settings.voice_assistant_enabled = voice_assistant_enabled;
        }
        if let Some(auto_scan_enabled) = self.auto_scan_enabled {
            settings.auto_scan_enabled = auto_scan_enabled;
        }
        if let Some(dark_mode_enabled) = self.dark_mode_enabled {
            settings.dark_mode_enabled = dark_mode_enabled;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
    }
}
