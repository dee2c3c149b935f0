mod memory;
mod seed;

pub use memory::MemStore;
pub use seed::seed_demo_data;

use crate::error::Result;
use crate::types::*;

/// Store defines the storage interface.
///
/// Absence is a normal outcome, not an error: lookups return `Ok(None)` and
/// `delete_crop` returns `Ok(false)` when nothing matched. The error channel
/// is reserved for backends that can actually fail.
pub trait Store: Send + Sync {
    // User operations
    fn get_user(&self, id: i64) -> Result<Option<User>>;
    /// Case-insensitive, first match in insertion order.
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    /// Unconditional: uniqueness of usernames is the caller's concern.
    fn create_user(&self, user: NewUser) -> Result<User>;
    fn update_user(&self, id: i64, patch: UserPatch) -> Result<Option<User>>;

    // Crop operations
    fn get_crop(&self, id: i64) -> Result<Option<Crop>>;
    fn list_crops_by_user(&self, user_id: i64) -> Result<Vec<Crop>>;
    /// The user's first-created crop, not the most recently planted one.
    /// Consumers wanting recency-based selection need a different query.
    fn current_crop(&self, user_id: i64) -> Result<Option<Crop>>;
    fn create_crop(&self, crop: NewCrop) -> Result<Crop>;
    fn update_crop(&self, id: i64, patch: CropPatch) -> Result<Option<Crop>>;
    fn delete_crop(&self, id: i64) -> Result<bool>;

    // Soil data operations
    fn get_soil_data(&self, id: i64) -> Result<Option<SoilData>>;
    fn get_soil_data_by_crop(&self, crop_id: i64) -> Result<Option<SoilData>>;
    /// Soil data for the user's current crop; absent if either link is missing.
    fn current_soil_data(&self, user_id: i64) -> Result<Option<SoilData>>;
    fn create_soil_data(&self, data: NewSoilData) -> Result<SoilData>;

    // Weather operations
    fn get_weather(&self, id: i64) -> Result<Option<WeatherData>>;
    /// Weather for the user's location; absent if the user has no location.
    fn get_weather_by_user(&self, user_id: i64) -> Result<Option<WeatherData>>;
    /// Case-insensitive, first match in insertion order.
    fn get_weather_by_location(&self, location: &str) -> Result<Option<WeatherData>>;
    fn create_weather(&self, data: NewWeatherData) -> Result<WeatherData>;

    // Market data operations
    fn get_market_data(&self, id: i64) -> Result<Option<MarketData>>;
    /// Case-insensitive; crop names are not unique, first match wins.
    fn get_market_data_by_crop(&self, crop_name: &str) -> Result<Option<MarketData>>;
    fn list_market_data(&self) -> Result<Vec<MarketData>>;
    fn create_market_data(&self, data: NewMarketData) -> Result<MarketData>;
    /// Refreshes `last_updated` whether or not the patch changed anything.
    fn update_market_data(&self, id: i64, patch: MarketDataPatch) -> Result<Option<MarketData>>;

    // Disease record operations
    fn get_disease_record(&self, id: i64) -> Result<Option<DiseaseRecord>>;
    fn list_disease_records_by_crop(&self, crop_id: i64) -> Result<Vec<DiseaseRecord>>;
    fn create_disease_record(&self, record: NewDiseaseRecord) -> Result<DiseaseRecord>;

    // Government scheme operations
    fn get_scheme(&self, id: i64) -> Result<Option<GovernmentScheme>>;
    /// Insertion order.
    fn list_schemes(&self) -> Result<Vec<GovernmentScheme>>;
    fn create_scheme(&self, scheme: NewGovernmentScheme) -> Result<GovernmentScheme>;

    // Settings operations
    /// First match; a duplicate row for the same user is never reached.
    fn get_settings_by_user(&self, user_id: i64) -> Result<Option<Settings>>;
    fn create_settings(&self, settings: NewSettings) -> Result<Settings>;
    fn update_settings(&self, user_id: i64, patch: SettingsPatch) -> Result<Option<Settings>>;
}
