//! Wire types

use crate::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /quotes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Missing field decodes as an empty quote.
    #[serde(default)]
    pub quote: String,
}

impl QuoteRequest {
    /// Decode a raw request body.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Err(QuoteError::bad_request("request body can't be empty"));
        }
        Ok(serde_json::from_slice(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let req = QuoteRequest::from_body(br#"{"quote":"hello"}"#).unwrap();
        assert_eq!(req.quote, "hello");
    }

    #[test]
    fn test_missing_field_is_empty_quote() {
        let req = QuoteRequest::from_body(b"{}").unwrap();
        assert_eq!(req.quote, "");
    }

    #[test]
    fn test_empty_body() {
        let err = QuoteRequest::from_body(b"").unwrap_err();
        assert_eq!(err, QuoteError::bad_request("request body can't be empty"));
    }

    #[test]
    fn test_malformed() {
        for body in [&b"not json"[..], br#"{"quote": 5}"#, br#""hello""#] {
            let err = QuoteRequest::from_body(body).unwrap_err();
            assert_eq!(err, QuoteError::bad_request("invalid JSON format"));
        }
    }
}
