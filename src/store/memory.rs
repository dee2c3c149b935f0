use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use super::Store;
use crate::error::Result;
use crate::types::*;

/// Ordered id-keyed collection with a monotonic id counter.
///
/// Ids ascend from 1 and are never reused, so key order equals insertion
/// order and first-match scans are stable across deletes.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    /// Assigns the next id, stores the built row, and returns it.
    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|&row| pred(row)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .values()
            .filter(|&row| pred(row))
            .cloned()
            .collect()
    }

    fn update(&mut self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Default)]
struct Collections {
    users: Table<User>,
    crops: Table<Crop>,
    soil_data: Table<SoilData>,
    weather: Table<WeatherData>,
    market_data: Table<MarketData>,
    disease_records: Table<DiseaseRecord>,
    schemes: Table<GovernmentScheme>,
    settings: Table<Settings>,
}

/// In-memory implementation of [`Store`].
///
/// All collections sit behind one mutex; every operation locks, runs to
/// completion, and unlocks, so derived queries see a consistent snapshot.
/// Nothing survives process exit.
pub struct MemStore {
    collections: Mutex<Collections>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(Collections::default()),
        }
    }

    fn collections(&self) -> MutexGuard<'_, Collections> {
        self.collections.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Full Unicode fold, not ASCII-only: locations and crop names are not
/// guaranteed to be ASCII.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl Store for MemStore {
    // User operations

    fn get_user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.collections().users.get(id))
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .collections()
            .users
            .find(|u| eq_ignore_case(&u.username, username)))
    }

    fn create_user(&self, user: NewUser) -> Result<User> {
        let now = Utc::now();
        Ok(self.collections().users.insert(|id| User {
            id,
            username: user.username,
            password: user.password,
            name: user.name,
            email: user.email,
            phone: user.phone,
            location: user.location,
            farm_size: user.farm_size,
            farm_type: user.farm_type,
            created_at: now,
        }))
    }

    fn update_user(&self, id: i64, patch: UserPatch) -> Result<Option<User>> {
        Ok(self.collections().users.update(id, |user| patch.apply(user)))
    }

    // Crop operations

    fn get_crop(&self, id: i64) -> Result<Option<Crop>> {
        Ok(self.collections().crops.get(id))
    }

    fn list_crops_by_user(&self, user_id: i64) -> Result<Vec<Crop>> {
        Ok(self.collections().crops.filter(|c| c.user_id == user_id))
    }

    fn current_crop(&self, user_id: i64) -> Result<Option<Crop>> {
        Ok(self.collections().crops.find(|c| c.user_id == user_id))
    }

    fn create_crop(&self, crop: NewCrop) -> Result<Crop> {
        let now = Utc::now();
        Ok(self.collections().crops.insert(|id| Crop {
            id,
            user_id: crop.user_id,
            name: crop.name,
            emoji: crop.emoji,
            status: crop.status,
            planted_date: crop.planted_date,
            expected_harvest: crop.expected_harvest,
            growth_progress: crop.growth_progress,
            water_needs: crop.water_needs,
            nutrition_needs: crop.nutrition_needs,
            field_name: crop.field_name,
            field_size: crop.field_size,
            created_at: now,
        }))
    }

    fn update_crop(&self, id: i64, patch: CropPatch) -> Result<Option<Crop>> {
        Ok(self.collections().crops.update(id, |crop| patch.apply(crop)))
    }

    fn delete_crop(&self, id: i64) -> Result<bool> {
        Ok(self.collections().crops.remove(id))
    }

    // Soil data operations

    fn get_soil_data(&self, id: i64) -> Result<Option<SoilData>> {
        Ok(self.collections().soil_data.get(id))
    }

    fn get_soil_data_by_crop(&self, crop_id: i64) -> Result<Option<SoilData>> {
        Ok(self
            .collections()
            .soil_data
            .find(|s| s.crop_id == Some(crop_id)))
    }

    fn current_soil_data(&self, user_id: i64) -> Result<Option<SoilData>> {
        let collections = self.collections();
        let Some(crop) = collections.crops.find(|c| c.user_id == user_id) else {
            return Ok(None);
        };
        Ok(collections.soil_data.find(|s| s.crop_id == Some(crop.id)))
    }

    fn create_soil_data(&self, data: NewSoilData) -> Result<SoilData> {
        let now = Utc::now();
        Ok(self.collections().soil_data.insert(|id| SoilData {
            id,
            user_id: data.user_id,
            crop_id: data.crop_id,
            status: data.status,
            percentage: data.percentage,
            ph: data.ph,
            nitrogen: data.nitrogen,
            phosphorus: data.phosphorus,
            potassium: data.potassium,
            soil_type: data.soil_type,
            measurement_date: now,
        }))
    }

    // Weather operations

    fn get_weather(&self, id: i64) -> Result<Option<WeatherData>> {
        Ok(self.collections().weather.get(id))
    }

    fn get_weather_by_user(&self, user_id: i64) -> Result<Option<WeatherData>> {
        let collections = self.collections();
        let Some(user) = collections.users.get(user_id) else {
            return Ok(None);
        };
        let Some(location) = user.location else {
            return Ok(None);
        };
        Ok(collections
            .weather
            .find(|w| eq_ignore_case(&w.location, &location)))
    }

    fn get_weather_by_location(&self, location: &str) -> Result<Option<WeatherData>> {
        Ok(self
            .collections()
            .weather
            .find(|w| eq_ignore_case(&w.location, location)))
    }

    fn create_weather(&self, data: NewWeatherData) -> Result<WeatherData> {
        let now = Utc::now();
        Ok(self.collections().weather.insert(|id| WeatherData {
            id,
            user_id: data.user_id,
            location: data.location,
            condition: data.condition,
            temperature: data.temperature,
            humidity: data.humidity,
            wind: data.wind,
            precipitation: data.precipitation,
            feels_like: data.feels_like,
            uv_index: data.uv_index,
            timestamp: now,
        }))
    }

    // Market data operations

    fn get_market_data(&self, id: i64) -> Result<Option<MarketData>> {
        Ok(self.collections().market_data.get(id))
    }

    fn get_market_data_by_crop(&self, crop_name: &str) -> Result<Option<MarketData>> {
        Ok(self
            .collections()
            .market_data
            .find(|m| eq_ignore_case(&m.crop_name, crop_name)))
    }

    fn list_market_data(&self) -> Result<Vec<MarketData>> {
        Ok(self.collections().market_data.all())
    }

    fn create_market_data(&self, data: NewMarketData) -> Result<MarketData> {
        let now = Utc::now();
        Ok(self.collections().market_data.insert(|id| MarketData {
            id,
            crop_name: data.crop_name,
            price: data.price,
            trend: data.trend,
            last_updated: now,
            ai_tip: data.ai_tip,
            nearby_mandis: data.nearby_mandis,
            forecast_trend: data.forecast_trend,
        }))
    }

    fn update_market_data(&self, id: i64, patch: MarketDataPatch) -> Result<Option<MarketData>> {
        Ok(self.collections().market_data.update(id, |data| {
            patch.apply(data);
            data.last_updated = Utc::now();
        }))
    }

    // Disease record operations

    fn get_disease_record(&self, id: i64) -> Result<Option<DiseaseRecord>> {
        Ok(self.collections().disease_records.get(id))
    }

    fn list_disease_records_by_crop(&self, crop_id: i64) -> Result<Vec<DiseaseRecord>> {
        Ok(self
            .collections()
            .disease_records
            .filter(|r| r.crop_id == Some(crop_id)))
    }

    fn create_disease_record(&self, record: NewDiseaseRecord) -> Result<DiseaseRecord> {
        let now = Utc::now();
        Ok(self
            .collections()
            .disease_records
            .insert(|id| DiseaseRecord {
                id,
                user_id: record.user_id,
                crop_id: record.crop_id,
                name: record.name,
                description: record.description,
                confidence: record.confidence,
                treatment: record.treatment,
                preventive_measures: record.preventive_measures,
                organic_remedies: record.organic_remedies,
                severity: record.severity,
                scan_date: now,
                image_url: record.image_url,
            }))
    }

    // Government scheme operations

    fn get_scheme(&self, id: i64) -> Result<Option<GovernmentScheme>> {
        Ok(self.collections().schemes.get(id))
    }

    fn list_schemes(&self) -> Result<Vec<GovernmentScheme>> {
        Ok(self.collections().schemes.all())
    }

    fn create_scheme(&self, scheme: NewGovernmentScheme) -> Result<GovernmentScheme> {
        Ok(self.collections().schemes.insert(|id| GovernmentScheme {
            id,
            title: scheme.title,
            organization: scheme.organization,
            description: scheme.description,
            eligibility: scheme.eligibility,
            benefits: scheme.benefits,
            deadline: scheme.deadline,
            application_url: scheme.application_url,
            category: scheme.category,
            is_new: scheme.is_new,
        }))
    }

    // Settings operations

    fn get_settings_by_user(&self, user_id: i64) -> Result<Option<Settings>> {
        Ok(self.collections().settings.find(|s| s.user_id == user_id))
    }

    fn create_settings(&self, settings: NewSettings) -> Result<Settings> {
        Ok(self.collections().settings.insert(|id| Settings {
            id,
            user_id: settings.user_id,
            notifications_enabled: settings.notifications_enabled,
            voice_assistant_enabled: settings.voice_assistant_enabled,
            auto_scan_enabled: settings.auto_scan_enabled,
            dark_mode_enabled: settings.dark_mode_enabled,
            language: settings.language,
        }))
    }

    fn update_settings(&self, user_id: i64, patch: SettingsPatch) -> Result<Option<Settings>> {
        let mut collections = self.collections();
        let Some(existing) = collections.settings.find(|s| s.user_id == user_id) else {
            return Ok(None);
        };
        Ok(collections
            .settings
            .update(existing.id, |settings| patch.apply(settings)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "password123".to_string(),
            name: "Test Farmer".to_string(),
            email: None,
            phone: None,
            location: None,
            farm_size: None,
            farm_type: None,
        }
    }

    fn new_crop(user_id: i64, name: &str) -> NewCrop {
        NewCrop {
            user_id,
            name: name.to_string(),
            emoji: None,
            status: CropStatus::Healthy,
            planted_date: None,
            expected_harvest: None,
            growth_progress: 0,
            water_needs: None,
            nutrition_needs: None,
            field_name: None,
            field_size: None,
        }
    }

    fn new_soil_data(user_id: i64, crop_id: i64, percentage: i32) -> NewSoilData {
        NewSoilData {
            user_id: Some(user_id),
            crop_id: Some(crop_id),
            status: "Optimal".to_string(),
            percentage,
            ph: Some(6.8),
            nitrogen: Some(75),
            phosphorus: Some(62),
            potassium: Some(80),
            soil_type: Some("Clay Loam".to_string()),
        }
    }

    fn new_market_data(crop_name: &str, price: f64) -> NewMarketData {
        NewMarketData {
            crop_name: crop_name.to_string(),
            price,
            trend: Some(2.5),
            ai_tip: None,
            nearby_mandis: Vec::new(),
            forecast_trend: None,
        }
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = MemStore::new();

        let first = store.create_user(new_user("asha")).unwrap();
        let second = store.create_user(new_user("bhim")).unwrap();

        assert_eq!(first.id, 1);
        assert!(second.id > first.id);

        let fetched = store.get_user(first.id).unwrap().unwrap();
        assert_eq!(fetched.username, "asha");
        assert_eq!(fetched.password, "password123");
        assert_eq!(fetched.created_at, first.created_at);
    }

    #[test]
    fn test_id_counters_are_per_entity() {
        let store = MemStore::new();

        let user = store.create_user(new_user("asha")).unwrap();
        let crop = store.create_crop(new_crop(user.id, "Rice")).unwrap();

        // Both counters start at 1 independently.
        assert_eq!(user.id, 1);
        assert_eq!(crop.id, 1);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = MemStore::new();
        assert!(store.get_user(42).unwrap().is_none());
        assert!(store.get_crop(42).unwrap().is_none());
    }

    #[test]
    fn test_get_user_by_username_is_case_insensitive() {
        let store = MemStore::new();
        store.create_user(new_user("FarmerRaj")).unwrap();

        let found = store.get_user_by_username("farmerraj").unwrap().unwrap();
        assert_eq!(found.username, "FarmerRaj");
        assert!(store.get_user_by_username("someone").unwrap().is_none());
    }

    #[test]
    fn test_create_user_is_unconditional_on_duplicates() {
        let store = MemStore::new();
        let first = store.create_user(new_user("farmerraj")).unwrap();
        let second = store.create_user(new_user("farmerraj")).unwrap();

        // Username uniqueness is the boundary's concern, not the store's.
        assert!(second.id > first.id);
        let found = store.get_user_by_username("farmerraj").unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn test_update_user_merges_partial_fields() {
        let store = MemStore::new();
        let user = store.create_user(new_user("asha")).unwrap();

        let updated = store
            .update_user(
                user.id,
                UserPatch {
                    name: Some("Asha Devi".to_string()),
                    location: Some("Indore".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Asha Devi");
        assert_eq!(updated.location.as_deref(), Some("Indore"));
        // Unspecified fields survive the merge.
        assert_eq!(updated.username, "asha");
        assert_eq!(updated.password, "password123");
        assert_eq!(updated.created_at, user.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_none_and_mutates_nothing() {
        let store = MemStore::new();
        let user = store.create_user(new_user("asha")).unwrap();

        let missing = store
            .update_user(
                user.id + 1,
                UserPatch {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(missing.is_none());

        let untouched = store.get_user(user.id).unwrap().unwrap();
        assert_eq!(untouched.name, "Test Farmer");
    }

    #[test]
    fn test_delete_crop() {
        let store = MemStore::new();
        let crop = store.create_crop(new_crop(1, "Rice")).unwrap();

        assert!(store.delete_crop(crop.id).unwrap());
        assert!(store.get_crop(crop.id).unwrap().is_none());
        assert!(!store.delete_crop(crop.id).unwrap());
    }

    #[test]
    fn test_crop_ids_are_not_reused_after_delete() {
        let store = MemStore::new();
        let first = store.create_crop(new_crop(1, "Rice")).unwrap();
        store.delete_crop(first.id).unwrap();

        let second = store.create_crop(new_crop(1, "Wheat")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_current_crop_is_first_created() {
        let store = MemStore::new();
        assert!(store.current_crop(1).unwrap().is_none());

        store.create_crop(new_crop(2, "Soybean")).unwrap();
        let rice = store.create_crop(new_crop(1, "Rice")).unwrap();
        store.create_crop(new_crop(1, "Wheat")).unwrap();

        let current = store.current_crop(1).unwrap().unwrap();
        assert_eq!(current.id, rice.id);
        assert_eq!(current.name, "Rice");

        let all = store.list_crops_by_user(1).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Rice");
        assert_eq!(all[1].name, "Wheat");
    }

    #[test]
    fn test_update_crop_merges_partial_fields() {
        let store = MemStore::new();
        let crop = store.create_crop(new_crop(1, "Rice")).unwrap();

        let updated = store
            .update_crop(
                crop.id,
                CropPatch {
                    status: Some(CropStatus::Stressed),
                    growth_progress: Some(72),
                    water_needs: Some("Medium".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, CropStatus::Stressed);
        assert_eq!(updated.growth_progress, 72);
        assert_eq!(updated.water_needs.as_deref(), Some("Medium"));
        assert_eq!(updated.name, "Rice");
        assert_eq!(updated.created_at, crop.created_at);
    }

    #[test]
    fn test_current_soil_data_follows_the_crop_chain() {
        let store = MemStore::new();

        // No crops yet.
        assert!(store.current_soil_data(1).unwrap().is_none());

        let crop = store.create_crop(new_crop(1, "Rice")).unwrap();
        // Crop exists but has no soil reading.
        assert!(store.current_soil_data(1).unwrap().is_none());

        let other = store.create_crop(new_crop(2, "Wheat")).unwrap();
        store.create_soil_data(new_soil_data(2, other.id, 40)).unwrap();
        // Another user's reading is not picked up.
        assert!(store.current_soil_data(1).unwrap().is_none());

        let soil = store.create_soil_data(new_soil_data(1, crop.id, 68)).unwrap();
        let current = store.current_soil_data(1).unwrap().unwrap();
        assert_eq!(current.id, soil.id);
        assert_eq!(current.percentage, 68);
        assert_eq!(current.crop_id, Some(crop.id));

        assert_eq!(store.get_soil_data(soil.id).unwrap().unwrap().percentage, 68);
        assert_eq!(
            store.get_soil_data_by_crop(crop.id).unwrap().unwrap().id,
            soil.id
        );
    }

    #[test]
    fn test_weather_for_user_resolves_location_case_insensitively() {
        let store = MemStore::new();

        let mut user = new_user("asha");
        user.location = Some("Rajpur, Madhya Pradesh".to_string());
        let user = store.create_user(user).unwrap();

        store
            .create_weather(NewWeatherData {
                user_id: Some(user.id),
                location: "RAJPUR, MADHYA PRADESH".to_string(),
                condition: "Sunny".to_string(),
                temperature: 28.0,
                humidity: Some(65),
                wind: Some(8.0),
                precipitation: Some(0.0),
                feels_like: Some(29.0),
                uv_index: Some(7),
            })
            .unwrap();

        let weather = store.get_weather_by_user(user.id).unwrap().unwrap();
        assert_eq!(weather.condition, "Sunny");
        assert_eq!(weather.temperature, 28.0);
        assert!(store.get_weather(weather.id).unwrap().is_some());

        let by_location = store
            .get_weather_by_location("rajpur, madhya pradesh")
            .unwrap()
            .unwrap();
        assert_eq!(by_location.id, weather.id);

        // A user without a location resolves to nothing.
        let nomad = store.create_user(new_user("nomad")).unwrap();
        assert!(store.get_weather_by_user(nomad.id).unwrap().is_none());
        assert!(store.get_weather_by_user(999).unwrap().is_none());
    }

    #[test]
    fn test_market_lookup_is_case_insensitive_first_match() {
        let store = MemStore::new();
        let first = store.create_market_data(new_market_data("Rice", 2050.0)).unwrap();
        store.create_market_data(new_market_data("rice", 1990.0)).unwrap();

        for name in ["Rice", "RICE", "rice"] {
            let found = store.get_market_data_by_crop(name).unwrap().unwrap();
            assert_eq!(found.id, first.id);
            assert_eq!(found.price, 2050.0);
        }
        assert!(store.get_market_data_by_crop("Cotton").unwrap().is_none());

        assert_eq!(
            store.get_market_data(first.id).unwrap().unwrap().crop_name,
            "Rice"
        );
        assert_eq!(store.list_market_data().unwrap().len(), 2);
    }

    #[test]
    fn test_market_update_refreshes_last_updated() {
        let store = MemStore::new();
        let created = store.create_market_data(new_market_data("Rice", 2050.0)).unwrap();

        let updated = store
            .update_market_data(
                created.id,
                MarketDataPatch {
                    price: Some(2100.0),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, 2100.0);
        assert_eq!(updated.trend, Some(2.5));
        assert!(updated.last_updated >= created.last_updated);
    }

    #[test]
    fn test_disease_records_filtered_by_crop() {
        let store = MemStore::new();

        let blight = store
            .create_disease_record(NewDiseaseRecord {
                user_id: Some(1),
                crop_id: Some(7),
                name: "Bacterial Leaf Blight".to_string(),
                description: "Lesions along the leaf veins.".to_string(),
                confidence: 89,
                treatment: vec!["Drain the field".to_string()],
                preventive_measures: Vec::new(),
                organic_remedies: Vec::new(),
                severity: DiseaseSeverity::Moderate,
                image_url: None,
            })
            .unwrap();
        store
            .create_disease_record(NewDiseaseRecord {
                user_id: Some(1),
                crop_id: Some(8),
                name: String::new(),
                description: String::new(),
                confidence: 95,
                treatment: Vec::new(),
                preventive_measures: Vec::new(),
                organic_remedies: Vec::new(),
                severity: DiseaseSeverity::None,
                image_url: None,
            })
            .unwrap();

        let records = store.list_disease_records_by_crop(7).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bacterial Leaf Blight");
        assert_eq!(records[0].severity, DiseaseSeverity::Moderate);
        assert!(store.list_disease_records_by_crop(99).unwrap().is_empty());

        let fetched = store.get_disease_record(blight.id).unwrap().unwrap();
        assert_eq!(fetched.confidence, 89);
        assert_eq!(fetched.scan_date, blight.scan_date);
    }

    #[test]
    fn test_schemes_listed_in_insertion_order() {
        let store = MemStore::new();
        for title in ["PM-KISAN", "Soil Health Card Scheme", "Solar Pump Subsidy"] {
            store
                .create_scheme(NewGovernmentScheme {
                    title: title.to_string(),
                    organization: "Ministry of Agriculture".to_string(),
                    description: "Support for farmers.".to_string(),
                    eligibility: Vec::new(),
                    benefits: Vec::new(),
                    deadline: Some("Ongoing".to_string()),
                    application_url: None,
                    category: None,
                    is_new: false,
                })
                .unwrap();
        }

        let schemes = store.list_schemes().unwrap();
        let titles: Vec<&str> = schemes.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["PM-KISAN", "Soil Health Card Scheme", "Solar Pump Subsidy"]
        );

        let second = store.get_scheme(schemes[1].id).unwrap().unwrap();
        assert_eq!(second.title, "Soil Health Card Scheme");
    }

    #[test]
    fn test_settings_duplicate_rows_resolve_first_match() {
        let store = MemStore::new();

        let first = store
            .create_settings(NewSettings {
                user_id: 1,
                notifications_enabled: true,
                voice_assistant_enabled: true,
                auto_scan_enabled: false,
                dark_mode_enabled: false,
                language: "en".to_string(),
            })
            .unwrap();
        // A second row for the same user is accepted but never reached.
        store
            .create_settings(NewSettings {
                user_id: 1,
                notifications_enabled: false,
                voice_assistant_enabled: false,
                auto_scan_enabled: true,
                dark_mode_enabled: true,
                language: "hi".to_string(),
            })
            .unwrap();

        let found = store.get_settings_by_user(1).unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(found.notifications_enabled);

        let updated = store
            .update_settings(
                1,
                SettingsPatch {
                    dark_mode_enabled: Some(true),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert!(updated.dark_mode_enabled);
        assert!(updated.notifications_enabled);
        assert_eq!(updated.language, "en");

        assert!(store
            .update_settings(99, SettingsPatch::default())
            .unwrap()
            .is_none());
    }
}
