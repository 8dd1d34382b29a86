//! Weather CRUD handlers.
//!
//! Handlers bind and validate JSON, delegate to the weather service,
//! and map service errors to status codes. Mutating endpoints require a
//! bearer token via the `CurrentUser` extractor.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use weathervane_auth::CurrentUser;
use weathervane_core::weather::{Weather, WeatherUpdate};

use crate::{error::ApiError, state::AppState};

/// Request payload for fetch-and-store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchWeatherRequest {
    pub city: String,
    pub country: String,
}

impl FetchWeatherRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.city.trim().is_empty() {
            return Err(ApiError::bad_request("city must not be empty"));
        }
        if self.country.trim().is_empty() {
            return Err(ApiError::bad_request("country must not be empty"));
        }
        Ok(())
    }
}

fn validate_update(update: &WeatherUpdate) -> Result<(), ApiError> {
    if let Some(humidity) = update.humidity {
        if !(0..=100).contains(&humidity) {
            return Err(ApiError::bad_request("humidity must be between 0 and 100"));
        }
    }
    if let Some(wind_speed) = update.wind_speed {
        if wind_speed < 0.0 {
            return Err(ApiError::bad_request("windSpeed must be non-negative"));
        }
    }
    Ok(())
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::bad_request(format!("invalid weather ID: {id}")))
}

/// Fetch weather for a city/country and store it (POST /weather).
pub async fn fetch_and_store(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<FetchWeatherRequest>,
) -> Result<Json<Weather>, ApiError> {
    payload.validate()?;

    tracing::debug!(city = %payload.city, country = %payload.country, %user, "Fetch-and-store requested");

    let record = state
        .service
        .fetch_and_store(&payload.city, &payload.country)
        .await?;

    Ok(Json(record))
}

/// List every weather record (GET /weather).
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Weather>>, ApiError> {
    let records = state.service.get_all().await?;
    Ok(Json(records))
}

/// Get a weather record by ID (GET /weather/{id}).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Weather>, ApiError> {
    let id = parse_id(&id)?;
    let record = state.service.get_by_id(id).await?;
    Ok(Json(record))
}

/// Get the latest weather record for a city (GET /weather/latest/{city}).
pub async fn latest_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Weather>, ApiError> {
    if city.trim().is_empty() {
        return Err(ApiError::bad_request("city must not be empty"));
    }
    let record = state.service.latest_by_city(&city).await?;
    Ok(Json(record))
}

/// Apply a partial update to a weather record (PUT /weather/{id}).
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<WeatherUpdate>,
) -> Result<Json<Weather>, ApiError> {
    let id = parse_id(&id)?;
    validate_update(&payload)?;

    tracing::debug!(%id, %user, "Update requested");

    let record = state.service.update(id, &payload).await?;
    Ok(Json(record))
}

/// Delete a weather record (DELETE /weather/{id}).
pub async fn delete(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    tracing::debug!(%id, %user, "Delete requested");

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
