//! SQLite schema definition and SQL query constants.

/// SQL statement to create the weather table and its indexes.
/// Idempotent; runs at every startup.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS weather (
    id TEXT PRIMARY KEY,
    city TEXT NOT NULL,
    country TEXT NOT NULL,
    temperature REAL NOT NULL,
    description TEXT NOT NULL,
    humidity INTEGER NOT NULL,
    wind_speed REAL NOT NULL,
    fetched_at TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_weather_city ON weather(city);
CREATE INDEX IF NOT EXISTS idx_weather_city_fetched_at ON weather(city, fetched_at);
"#;

pub const INSERT_WEATHER: &str = r#"
INSERT INTO weather (id, city, country, temperature, description, humidity, wind_speed, fetched_at, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

pub const SELECT_WEATHER_BY_ID: &str = r#"
SELECT id, city, country, temperature, description, humidity, wind_speed, fetched_at, created_at, updated_at
FROM weather
WHERE id = ?1
"#;

pub const SELECT_ALL_WEATHER: &str = r#"
SELECT id, city, country, temperature, description, humidity, wind_speed, fetched_at, created_at, updated_at
FROM weather
ORDER BY created_at DESC
"#;

pub const SELECT_LATEST_BY_CITY: &str = r#"
SELECT id, city, country, temperature, description, humidity, wind_speed, fetched_at, created_at, updated_at
FROM weather
WHERE city = ?1
ORDER BY fetched_at DESC
LIMIT 1
"#;

pub const UPDATE_WEATHER: &str = r#"
UPDATE weather
SET city = ?2, country = ?3, temperature = ?4, description = ?5, humidity = ?6, wind_speed = ?7, fetched_at = ?8, created_at = ?9, updated_at = ?10
WHERE id = ?1
"#;

pub const DELETE_WEATHER: &str = r#"
DELETE FROM weather
WHERE id = ?1
"#;
