//! SQLite repository implementation.
//!
//! Implements `WeatherRepository` over `tokio_rusqlite`. The schema is
//! bootstrapped at connection time with idempotent DDL.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use weathervane_core::storage::{RepositoryError, Result, WeatherRepository};
use weathervane_core::weather::Weather;

use super::conversions::{format_datetime, row_to_weather};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based weather repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file is created if it doesn't exist; the schema is
    /// applied on every open.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl WeatherRepository for SqliteRepository {
    async fn save(&self, record: &Weather) -> Result<()> {
        let id = record.id.to_string();
        let city = record.city.clone();
        let country = record.country.clone();
        let temperature = record.temperature;
        let description = record.description.clone();
        let humidity = record.humidity;
        let wind_speed = record.wind_speed;
        let fetched_at = format_datetime(&record.fetched_at);
        let created_at = format_datetime(&record.created_at);
        let updated_at = format_datetime(&record.updated_at);
        let record_id = id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_WEATHER,
                    rusqlite::params![
                        id,
                        city,
                        country,
                        temperature,
                        description,
                        humidity,
                        wind_speed,
                        fetched_at,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, record_id))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Weather> {
        let id_str = id.to_string();
        let err_id = id_str.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_WEATHER_BY_ID)
                    .map_err(wrap_err)?;
                stmt.query_row([&id_str], row_to_weather).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, err_id))
    }

    async fn find_all(&self) -> Result<Vec<Weather>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_WEATHER).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_weather).map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn find_latest_by_city(&self, city: &str) -> Result<Weather> {
        let city = city.to_string();
        let err_id = city.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_LATEST_BY_CITY)
                    .map_err(wrap_err)?;
                stmt.query_row([&city], row_to_weather).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, err_id))
    }

    async fn update(&self, record: &Weather) -> Result<()> {
        let id = record.id.to_string();
        let city = record.city.clone();
        let country = record.country.clone();
        let temperature = record.temperature;
        let description = record.description.clone();
        let humidity = record.humidity;
        let wind_speed = record.wind_speed;
        let fetched_at = format_datetime(&record.fetched_at);
        let created_at = format_datetime(&record.created_at);
        let updated_at = format_datetime(&record.updated_at);
        let record_id = id.clone();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_WEATHER,
                    rusqlite::params![
                        id,
                        city,
                        country,
                        temperature,
                        description,
                        humidity,
                        wind_speed,
                        fetched_at,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, record_id.clone()))?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Weather",
                id: record_id,
            });
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();
        let err_id = id_str.clone();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_WEATHER, [&id_str])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, err_id.clone()))?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "Weather",
                id: err_id,
            });
        }
        Ok(())
    }
}
