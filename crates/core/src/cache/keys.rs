use uuid::Uuid;

/// Returns the composite cache key for a city/country pair.
///
/// City and country are joined verbatim with `:`. Values that themselves
/// contain the delimiter produce ambiguous keys; inputs are not escaped
/// or rejected at this layer.
pub fn weather_key(city: &str, country: &str) -> String {
    format!("weather:{}:{}", city, country)
}

/// Returns the identity cache key for a record: its ID string.
pub fn id_key(id: Uuid) -> String {
    id.to_string()
}

/// Returns the pattern matching all composite weather keys.
pub fn weather_pattern() -> &'static str {
    "weather:*"
}
