//! Field-by-field merge of partial updates onto an existing record.
//!
//! Pure function, no side effects - the service stamps `updated_at`
//! separately through its clock.

use super::types::{Weather, WeatherUpdate};

/// Merges a partial update onto an existing weather record.
///
/// A field overwrites the existing value only when it is present and
/// non-empty (strings) or non-zero (numbers). This means a client cannot
/// reset humidity to 0 or clear the description through an update; zero
/// values read as "leave unchanged". Callers that need to clear a field
/// have no way to express that - a known limitation of the update
/// contract, kept as-is.
///
/// `updated_at` is NOT touched here; the caller sets it from its clock
/// after merging.
pub fn merge_update(existing: &Weather, update: &WeatherUpdate) -> Weather {
    let mut merged = existing.clone();

    if let Some(city) = &update.city {
        if !city.is_empty() {
            merged.city = city.clone();
        }
    }
    if let Some(country) = &update.country {
        if !country.is_empty() {
            merged.country = country.clone();
        }
    }
    if let Some(temperature) = update.temperature {
        if temperature != 0.0 {
            merged.temperature = temperature;
        }
    }
    if let Some(description) = &update.description {
        if !description.is_empty() {
            merged.description = description.clone();
        }
    }
    if let Some(humidity) = update.humidity {
        if humidity != 0 {
            merged.humidity = humidity;
        }
    }
    if let Some(wind_speed) = update.wind_speed {
        if wind_speed != 0.0 {
            merged.wind_speed = wind_speed;
        }
    }

    merged
}
