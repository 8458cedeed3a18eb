//! Error types for the quote service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Malformed or absent client input.
    #[error("{0}")]
    BadRequest(String),

    /// Connection or I/O failure in the backing store.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The quote text is already stored (relational store only).
    #[error("Quote already exists: {0}")]
    DuplicateQuote(String),
}

impl QuoteError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        QuoteError::BadRequest(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        QuoteError::StorageUnavailable(msg.into())
    }

    /// True for errors caused by the client rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuoteError::BadRequest(_))
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(_: serde_json::Error) -> Self {
        QuoteError::BadRequest("invalid JSON format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            QuoteError::bad_request("invalid JSON format").to_string(),
            "invalid JSON format"
        );
        assert_eq!(
            QuoteError::storage("connection refused").to_string(),
            "Storage unavailable: connection refused"
        );
        assert_eq!(
            QuoteError::DuplicateQuote("hello".into()).to_string(),
            "Quote already exists: hello"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(QuoteError::bad_request("x").is_client_error());
        assert!(!QuoteError::storage("x").is_client_error());
        assert!(!QuoteError::DuplicateQuote("x".into()).is_client_error());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: QuoteError = err.into();
        assert_eq!(err, QuoteError::bad_request("invalid JSON format"));
    }
}
