//! JSON helpers for API bodies and settings files.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Longest body excerpt kept in error messages.
const EXCERPT_LEN: usize = 120;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// A response body is not JSON.
    #[error("{source} (body starts with {excerpt:?})")]
    NotJson {
        /// Parser error.
        source: serde_json::Error,
        /// Start of the offending body.
        excerpt: String,
    },

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value as pretty JSON with 2-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes a typed value from JSON bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

/// Parses an HTTP response body into an untyped JSON value.
///
/// The error keeps a short excerpt of the body, which is usually enough to
/// recognise an HTML error page from a proxy.
///
/// # Errors
///
/// Returns `SerializationError::NotJson` if the body is not valid JSON.
pub fn parse_body(bytes: &[u8]) -> Result<Value, SerializationError> {
    serde_json::from_slice(bytes).map_err(|source| SerializationError::NotJson {
        source,
        excerpt: String::from_utf8_lossy(bytes)
            .chars()
            .take(EXCERPT_LEN)
            .collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pretty_output_has_indent_and_trailing_newline() {
        let json = to_json_pretty(&json!({ "api_base_url": "http://localhost" })).unwrap();
        assert_eq!(json, "{\n  \"api_base_url\": \"http://localhost\"\n}\n");
    }

    #[test]
    fn test_parse_body_accepts_error_objects() {
        let value = parse_body(br#"{"error":"Not Found"}"#).unwrap();
        assert_eq!(value["error"], "Not Found");
    }

    #[test]
    fn test_parse_body_reports_excerpt() {
        let body = format!("<html>{}</html>", "x".repeat(500));
        let err = parse_body(body.as_bytes()).unwrap_err();

        match err {
            SerializationError::NotJson { excerpt, .. } => {
                assert!(excerpt.starts_with("<html>"));
                assert_eq!(excerpt.chars().count(), EXCERPT_LEN);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_json_bytes_type_mismatch() {
        let result: Result<Vec<u32>, _> = from_json_bytes(b"{}");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
