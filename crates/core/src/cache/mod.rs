mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{id_key, weather_key, weather_pattern};
pub use patterns::pattern_matches;
pub use serialization::{deserialize_weather, serialize_weather, SerializationError};
pub use traits::Cache;
