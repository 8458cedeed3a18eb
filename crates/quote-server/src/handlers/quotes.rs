//! Quote handlers

use super::ApiError;
use crate::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use quote_core::QuoteRequest;
use tracing::{debug, error};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    match state.store.get_all_quotes().await {
        Ok(quotes) => Ok(Json(quotes)),
        Err(e) => {
            error!("Failed to list quotes: {}", e);
            Err(e.into())
        }
    }
}

/// Raw bytes rather than `Json<_>` so an absent body or missing content type
/// is a 400 instead of axum's 415/422 rejections.
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req = QuoteRequest::from_body(&body)?;

    match state.store.add_quote(&req.quote).await {
        Ok(()) => {
            debug!("Added quote ({} bytes)", req.quote.len());
            Ok(StatusCode::OK)
        }
        Err(e) => {
            error!("Failed to add quote: {}", e);
            Err(e.into())
        }
    }
}
