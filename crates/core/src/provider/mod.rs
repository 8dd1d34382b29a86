mod error;
mod traits;
mod types;

pub use error::{ProviderError, Result};
pub use traits::WeatherProvider;
pub use types::WeatherReading;
