//! Pure functions for serializing domain types to/from cache bytes.
//!
//! JSON is used for cache storage: human-readable values that are easy
//! to inspect with redis-cli.

use thiserror::Error;

use crate::weather::Weather;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes a weather record to JSON bytes.
pub fn serialize_weather(record: &Weather) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(record).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a weather record.
pub fn deserialize_weather(bytes: &[u8]) -> Result<Weather, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
