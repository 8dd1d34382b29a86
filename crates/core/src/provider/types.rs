use chrono::{DateTime, Utc};

/// A normalized reading from an external weather provider.
///
/// `fetched_at` is the provider's timestamp for the observation, not the
/// time the request was made.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub description: String,
    pub humidity: i32,
    pub wind_speed: f64,
    pub fetched_at: DateTime<Utc>,
}
