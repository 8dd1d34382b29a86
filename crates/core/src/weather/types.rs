use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_optional_string;

/// A stored weather reading for a city/country pair.
///
/// `fetched_at` is the provider's own timestamp for the reading;
/// `created_at`/`updated_at` track the record lifecycle and are stamped
/// by the service through its injected clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub id: Uuid,
    pub city: String,
    pub country: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub description: String,
    /// Percentage, 0-100.
    pub humidity: i32,
    /// Meters per second, non-negative.
    pub wind_speed: f64,
    pub fetched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Weather {
    /// Sets a specific ID for this record (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the creation timestamp (useful for testing).
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Sets the update timestamp (useful for testing).
    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }
}

/// A partial update to a weather record.
///
/// Every field is optional; JSON empty strings deserialize to `None`.
/// Merge semantics live in [`merge_update`](super::merge_update) and
/// deliberately skip zero values as well - see that function for the
/// full convention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherUpdate {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub humidity: Option<i32>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl WeatherUpdate {
    /// Returns true if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.country.is_none()
            && self.temperature.is_none()
            && self.description.is_none()
            && self.humidity.is_none()
            && self.wind_speed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_weather_serializes_to_camel_case() {
        let record = Weather {
            id: Uuid::nil(),
            city: "tehran".to_string(),
            country: "IR".to_string(),
            temperature: 28.5,
            description: "clear sky".to_string(),
            humidity: 40,
            wind_speed: 3.2,
            fetched_at: fixed_timestamp(),
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("windSpeed").is_some());
        assert!(json.get("fetchedAt").is_some());
        assert!(json.get("wind_speed").is_none());
    }

    #[test]
    fn test_update_deserializes_empty_strings_as_none() {
        let json = r#"{"city": "", "country": "  ", "temperature": 12.5}"#;
        let update: WeatherUpdate = serde_json::from_str(json).unwrap();

        assert_eq!(update.city, None);
        assert_eq!(update.country, None);
        assert_eq!(update.temperature, Some(12.5));
    }

    #[test]
    fn test_update_is_empty() {
        let update: WeatherUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        let update: WeatherUpdate = serde_json::from_str(r#"{"humidity": 10}"#).unwrap();
        assert!(!update.is_empty());
    }
}
