//! Quote Service
//!
//! HTTP service exposing a list of text quotes, backed either by an
//! in-memory list or a PostgreSQL table.

pub mod config;
pub mod handlers;
pub mod router;
pub mod storage;

use quote_core::QuoteStore;
use std::sync::Arc;

pub use config::Settings;
pub use router::build_router;
pub use storage::{MemoryQuoteStore, PostgresQuoteStore, StoreKind};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }
}
