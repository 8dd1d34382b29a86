//! Serde helper functions for request deserialization.
//!
//! Update payloads treat empty strings as "field not provided", so the
//! optional string fields deserialize through this helper.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty/whitespace strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        field: Option<String>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let result: TestStruct = serde_json::from_str(r#"{"field": ""}"#).unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_whitespace_string_is_none() {
        let result: TestStruct = serde_json::from_str(r#"{"field": "   "}"#).unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_value_is_preserved() {
        let result: TestStruct = serde_json::from_str(r#"{"field": "paris"}"#).unwrap();
        assert_eq!(result.field, Some("paris".to_string()));
    }

    #[test]
    fn test_missing_field_is_none() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_null_is_none() {
        let result: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, None);
    }
}
