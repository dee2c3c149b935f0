use chrono::{Duration, Utc};

use super::Store;
use crate::error::Result;
use crate::types::*;

/// Populates a store with the demo farm profile: one user, a rice crop with
/// a soil reading, weather for the user's location, market data for the
/// crop, three government schemes, and a settings row.
///
/// Everything goes through the public create operations so the
/// cross-references are built from returned ids rather than assumed ones.
pub fn seed_demo_data(store: &dyn Store) -> Result<()> {
    let user = store.create_user(NewUser {
        username: "farmerraj".to_string(),
        password: "password123".to_string(),
        name: "Farmer Raj".to_string(),
        email: Some("raj@agrimail.com".to_string()),
        phone: Some("9876543210".to_string()),
        location: Some("Rajpur, Madhya Pradesh".to_string()),
        farm_size: Some("5.5 acres".to_string()),
        farm_type: Some("Mixed (Rice, Wheat)".to_string()),
    })?;

    // Planted/harvest dates are offsets from now so the demo stays mid-season
    // no matter when the process starts.
    let now = Utc::now();
    let crop = store.create_crop(NewCrop {
        user_id: user.id,
        name: "Rice".to_string(),
        emoji: Some("🌾".to_string()),
        status: CropStatus::Healthy,
        planted_date: Some(now - Duration::days(30)),
        expected_harvest: Some(now + Duration::days(45)),
        growth_progress: 65,
        water_needs: Some("High".to_string()),
        nutrition_needs: Some("Nitrogen, Potassium".to_string()),
        field_name: Some("North Field".to_string()),
        field_size: Some(2.5),
    })?;

    store.create_soil_data(NewSoilData {
        user_id: Some(user.id),
        crop_id: Some(crop.id),
        status: "Optimal".to_string(),
        percentage: 68,
        ph: Some(6.8),
        nitrogen: Some(75),
        phosphorus: Some(62),
        potassium: Some(80),
        soil_type: Some("Clay Loam".to_string()),
    })?;

    store.create_weather(NewWeatherData {
        user_id: Some(user.id),
        location: "Rajpur, Madhya Pradesh".to_string(),
        condition: "Sunny".to_string(),
        temperature: 28.0,
        humidity: Some(65),
        wind: Some(8.0),
        precipitation: Some(0.0),
        feels_like: Some(29.0),
        uv_index: Some(7),
    })?;

    store.create_market_data(NewMarketData {
        crop_name: "Rice".to_string(),
        price: 2050.0,
        trend: Some(2.5),
        ai_tip: Some(
            "Consider holding your harvest for 15 more days. Prices are projected \
             to rise by 8% during festival season."
                .to_string(),
        ),
        nearby_mandis: vec![
            NearbyMandi {
                name: "Rajpur Mandi".to_string(),
                price: 2050.0,
                distance: 5.0,
            },
            NearbyMandi {
                name: "Bhopal Central".to_string(),
                price: 2020.0,
                distance: 12.0,
            },
            NearbyMandi {
                name: "Indore Agri Hub".to_string(),
                price: 2120.0,
                distance: 25.0,
            },
        ],
        forecast_trend: Some(ForecastTrend {
            days: ["Today", "1 Week", "2 Weeks", "1 Month"]
                .map(String::from)
                .to_vec(),
            prices: vec![2050.0, 2100.0, 2210.0, 2150.0],
        }),
    })?;

    store.create_scheme(NewGovernmentScheme {
        title: "PM-KISAN".to_string(),
        organization: "Ministry of Agriculture".to_string(),
        description: "Financial assistance to small and marginal farmers through direct \
                      benefit transfer."
            .to_string(),
        eligibility: vec![
            "Small and marginal farmers with up to 2 hectares".to_string(),
            "Valid land records".to_string(),
            "Bank account linked to Aadhaar".to_string(),
        ],
        benefits: vec![
            "₹6,000 per year in three equal installments".to_string(),
            "Direct bank transfer".to_string(),
            "No middlemen".to_string(),
        ],
        deadline: Some("30 Sep 2023".to_string()),
        application_url: Some("https://pmkisan.gov.in".to_string()),
        category: Some("Financial Assistance".to_string()),
        is_new: true,
    })?;

    store.create_scheme(NewGovernmentScheme {
        title: "Soil Health Card Scheme".to_string(),
        organization: "Department of Agriculture".to_string(),
        description: "Free soil testing and recommendations for appropriate nutrients to \
                      improve soil health and fertility."
            .to_string(),
        eligibility: vec![
            "All farmers".to_string(),
            "Valid ID proof".to_string(),
            "Land ownership documents".to_string(),
        ],
        benefits: vec![
            "Free soil testing".to_string(),
            "Customized fertilizer recommendations".to_string(),
            "Increased crop yield".to_string(),
        ],
        deadline: Some("Ongoing".to_string()),
        application_url: Some("https://soilhealth.gov.in".to_string()),
        category: Some("Technical Assistance".to_string()),
        is_new: false,
    })?;

    store.create_scheme(NewGovernmentScheme {
        title: "Solar Pump Subsidy".to_string(),
        organization: "Ministry of New and Renewable Energy".to_string(),
        description: "Subsidy for installing solar-powered irrigation pumps to reduce \
                      dependency on diesel and electricity."
            .to_string(),
        eligibility: vec![
            "Small and marginal farmers".to_string(),
            "No existing solar pump".to_string(),
            "Valid bank account".to_string(),
        ],
        benefits: vec![
            "Up to 90% subsidy on solar pump installation".to_string(),
            "Reduced electricity costs".to_string(),
            "Environment-friendly irrigation".to_string(),
        ],
        deadline: Some("15 Oct 2023".to_string()),
        application_url: Some("https://mnre.gov.in/solar-pump".to_string()),
        category: Some("Irrigation".to_string()),
        is_new: true,
    })?;

    store.create_settings(NewSettings {
        user_id: user.id,
        notifications_enabled: true,
        voice_assistant_enabled: true,
        auto_scan_enabled: false,
        dark_mode_enabled: false,
        language: "en".to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    #[test]
    fn test_seed_cross_references_are_consistent() {
        let store = MemStore::new();
        seed_demo_data(&store).unwrap();

        let user = store.get_user_by_username("farmerraj").unwrap().unwrap();
        assert_eq!(user.id, 1);

        let crop = store.current_crop(user.id).unwrap().unwrap();
        assert_eq!(crop.name, "Rice");
        assert_eq!(crop.user_id, user.id);
        assert_eq!(crop.growth_progress, 65);

        let soil = store.current_soil_data(user.id).unwrap().unwrap();
        assert_eq!(soil.crop_id, Some(crop.id));
        assert_eq!(soil.percentage, 68);

        let weather = store.get_weather_by_user(user.id).unwrap().unwrap();
        assert_eq!(weather.condition, "Sunny");
        assert_eq!(weather.temperature, 28.0);

        let market = store.get_market_data_by_crop(&crop.name).unwrap().unwrap();
        assert_eq!(market.price, 2050.0);
        assert_eq!(market.nearby_mandis.len(), 3);
        let forecast = market.forecast_trend.unwrap();
        assert_eq!(forecast.days.len(), forecast.prices.len());

        let titles: Vec<String> = store
            .list_schemes()
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            ["PM-KISAN", "Soil Health Card Scheme", "Solar Pump Subsidy"]
        );

        let settings = store.get_settings_by_user(user.id).unwrap().unwrap();
        assert!(settings.notifications_enabled);
        assert!(settings.voice_assistant_enabled);
        assert!(!settings.auto_scan_enabled);
        assert!(!settings.dark_mode_enabled);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_seed_crop_is_mid_season() {
        let store = MemStore::new();
        seed_demo_data(&store).unwrap();

        let crop = store.current_crop(1).unwrap().unwrap();
        let now = Utc::now();
        assert!(crop.planted_date.unwrap() < now);
        assert!(crop.expected_harvest.unwrap() > now);
    }
}
