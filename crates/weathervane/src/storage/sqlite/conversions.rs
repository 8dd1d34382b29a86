//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types,
//! testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use weathervane_core::weather::Weather;

/// Formats a timestamp for storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parses a stored RFC 3339 timestamp.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Parses a stored UUID string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Convert a SQLite row to a Weather record.
///
/// Expected columns: id, city, country, temperature, description,
/// humidity, wind_speed, fetched_at, created_at, updated_at
pub fn row_to_weather(row: &Row) -> rusqlite::Result<Weather> {
    let id: String = row.get(0)?;
    let city: String = row.get(1)?;
    let country: String = row.get(2)?;
    let temperature: f64 = row.get(3)?;
    let description: String = row.get(4)?;
    let humidity: i32 = row.get(5)?;
    let wind_speed: f64 = row.get(6)?;
    let fetched_at: String = row.get(7)?;
    let created_at: String = row.get(8)?;
    let updated_at: String = row.get(9)?;

    Ok(Weather {
        id: parse_uuid(&id)?,
        city,
        country,
        temperature,
        description,
        humidity,
        wind_speed,
        fetched_at: parse_datetime(&fetched_at)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}
