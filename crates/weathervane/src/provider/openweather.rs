//! OpenWeather API client.
//!
//! One outbound GET per fetch, bounded by a 5 second client timeout.
//! No retries; every failure surfaces as a `ProviderError`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::Deserialize;

use weathervane_core::provider::{ProviderError, Result, WeatherProvider, WeatherReading};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Wire shape of the OpenWeather current-weather response, reduced to
/// the fields we consume.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    main: MainSection,
    #[serde(default)]
    weather: Vec<WeatherSection>,
    wind: WindSection,
    /// Observation time, unix seconds.
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct WeatherSection {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
}

impl OpenWeatherClient {
    /// Creates a new client.
    ///
    /// `base_url` is the scheme+host prefix (production:
    /// `https://api.openweathermap.org`); injectable so tests can point
    /// at a local mock server.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city: &str, country: &str) -> Result<WeatherReading> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let query = format!("{city},{country}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatus(status.as_u16()));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let description = body
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| {
                ProviderError::InvalidResponse("missing weather description".to_string())
            })?;

        let fetched_at = Utc
            .timestamp_opt(body.dt, 0)
            .single()
            .ok_or_else(|| ProviderError::InvalidResponse(format!("invalid timestamp {}", body.dt)))?;

        Ok(WeatherReading {
            temperature: body.main.temp,
            description,
            humidity: body.main.humidity,
            wind_speed: body.wind.speed,
            fetched_at,
        })
    }
}
