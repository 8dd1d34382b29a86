use async_trait::async_trait;

use super::{Result, WeatherReading};

/// Client for an external weather data provider.
///
/// One outbound call per invocation; implementations bound latency with a
/// client-side timeout and do not retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current weather for a city/country pair.
    ///
    /// City and country must be non-empty; no further validation happens
    /// at this layer.
    async fn fetch(&self, city: &str, country: &str) -> Result<WeatherReading>;
}
