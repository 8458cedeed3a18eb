//! HTTP handlers

pub mod health;
pub mod quotes;

pub use health::health;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quote_core::QuoteError;

/// Error response: status from the error kind, error text as body
#[derive(Debug)]
pub struct ApiError(pub QuoteError);

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            // Duplicates are reported as a plain storage failure.
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}
