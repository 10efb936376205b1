//! Error types for the restkit client.
//!
//! # Design
//! Every failure is returned to the immediate caller exactly once; nothing is
//! retried or swallowed. Transport and serde errors are carried as sources so
//! callers can still downcast to the underlying library error.
//!
//! Non-2xx statuses are not errors at this layer. The raw response is handed
//! back and classified with `is_status_ok`.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS, DNS or protocol failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The request body could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The query params could not be flattened into a query string.
    #[error("serialization failed: {0}")]
    Query(String),

    /// The response body is not valid JSON for the requested type.
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response body stream failed while reading.
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
}

impl Error {
    /// True for both body and query-param encoding failures.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_) | Error::Query(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_count_as_serialization() {
        let err = Error::Query("top-level value must be an object".to_string());
        assert!(err.is_serialization());
        assert_eq!(
            err.to_string(),
            "serialization failed: top-level value must be an object"
        );
    }

    #[test]
    fn decode_errors_are_not_serialization() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode(source);
        assert!(!err.is_serialization());
        assert!(err.to_string().starts_with("decode failed"));
    }
}
