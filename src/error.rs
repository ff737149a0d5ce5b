//! Error types for the deck layout library.
//!
//! This module defines all error types that can occur while parsing structured
//! content payloads and building deck models.

/// Result type alias for deck layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during payload parsing and deck building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured payload is present but not the expected shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// JSON syntax failure while decoding a payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Layout configuration rejected before use
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    /// The external structuring call failed on every allowed attempt
    #[error("Structuring failed after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made before giving up
        attempts: u32,
        /// Message of the final attempt's failure
        last_error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_payload_error() {
        let err = Error::InvalidPayload("expected a JSON array".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid payload"));
        assert!(msg.contains("JSON array"));
    }

    #[test]
    fn test_retries_exhausted_error() {
        let err = Error::RetriesExhausted {
            attempts: 3,
            last_error: "connection reset".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3 attempts"));
        assert!(msg.contains("connection reset"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
