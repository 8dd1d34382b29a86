//! The weather service: cache-aside orchestration across the cache,
//! the repository, and the external provider.

mod error;
mod weather;

pub use error::ServiceError;
pub use weather::WeatherService;
