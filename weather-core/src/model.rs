use serde::{Deserialize, Serialize};

/// Body of `POST /api/weather`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
}

/// Everything the backend returns for one queried location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,

    /// Chronological, as supplied by the server.
    #[serde(default)]
    pub hourly_forecast: Vec<HourlyEntry>,

    /// Chronological, as supplied by the server.
    #[serde(default)]
    pub daily_forecast: Vec<DailyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub city: String,

    /// State or province. The backend calls this `admin1` and sends `""` when unknown.
    #[serde(default, rename = "admin1", alias = "region")]
    pub region: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,

    /// Degrees, clockwise from north.
    pub wind_direction: f64,

    #[serde(rename = "emoji", alias = "icon")]
    pub icon: String,

    pub description: String,

    /// Observation time, location-local ISO 8601.
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyEntry {
    pub time: String,

    #[serde(rename = "emoji", alias = "icon")]
    pub icon: String,

    pub temperature: f64,

    #[serde(default)]
    pub precipitation_probability: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyEntry {
    pub date: String,

    #[serde(rename = "emoji", alias = "icon")]
    pub icon: String,

    pub max_temp: f64,
    pub min_temp: f64,

    /// Precipitation total in mm.
    #[serde(default)]
    pub precipitation: Option<f64>,

    #[serde(default)]
    pub precipitation_probability: Option<f64>,

    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload() {
        let body = r#"{
            "current": {
                "city": "Lisbon", "admin1": "", "country": "Portugal",
                "temperature": 21, "apparent_temperature": 20, "humidity": 64,
                "wind_speed": 14, "wind_direction": 315,
                "description": "Clear sky", "emoji": "☀️",
                "timestamp": "2024-06-01T14:15"
            },
            "hourly_forecast": [
                {"time": "2024-06-01T14:00", "temperature": 21, "precipitation_probability": null,
                 "description": "Clear sky", "emoji": "☀️"}
            ],
            "daily_forecast": [
                {"date": "2024-06-01", "max_temp": 24, "min_temp": 15, "precipitation": 0.0,
                 "precipitation_probability": 5, "description": "Clear sky", "emoji": "☀️"}
            ]
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(body).expect("payload should parse");

        assert_eq!(snapshot.current.city, "Lisbon");
        assert_eq!(snapshot.current.region.as_deref(), Some(""));
        assert_eq!(snapshot.current.icon, "☀️");
        assert_eq!(snapshot.hourly_forecast[0].precipitation_probability, None);
        assert_eq!(snapshot.daily_forecast[0].precipitation_probability, Some(5.0));
    }

    #[test]
    fn accepts_region_and_icon_spellings() {
        let body = r#"{
            "current": {
                "city": "Austin", "region": "Texas",
                "temperature": 30.5, "apparent_temperature": 33, "humidity": 40,
                "wind_speed": 9, "wind_direction": 180,
                "description": "Sunny", "icon": "01d",
                "timestamp": "2024-06-01T14:15"
            }
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(body).expect("payload should parse");

        assert_eq!(snapshot.current.region.as_deref(), Some("Texas"));
        assert_eq!(snapshot.current.country, None);
        assert_eq!(snapshot.current.icon, "01d");
        assert!(snapshot.hourly_forecast.is_empty());
        assert!(snapshot.daily_forecast.is_empty());
    }
}
