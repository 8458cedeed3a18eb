//! Storage layer
//!
//! Quotes live either in an in-process list or in a PostgreSQL table.
//! The backend is picked once at startup from the connection string.

pub mod db;
pub mod local;
pub mod memory;

pub use db::PostgresQuoteStore;
pub use local::LocalDbParams;
pub use memory::MemoryQuoteStore;

use crate::Settings;
use anyhow::{Context, Result};
use quote_core::QuoteStore;
use std::sync::Arc;
use tracing::info;

/// Which store backs the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Postgres(String),
    /// Provision and connect to a PostgreSQL container on this machine.
    LocalPostgres,
}

/// Build the store selected by the settings.
pub async fn open_store(settings: &Settings) -> Result<Arc<dyn QuoteStore>> {
    let store: Arc<dyn QuoteStore> = match settings.store_kind() {
        StoreKind::Memory => {
            info!("Using in-memory quote store");
            Arc::new(MemoryQuoteStore::new())
        }
        StoreKind::Postgres(url) => {
            info!("Connecting to PostgreSQL quote store...");
            Arc::new(
                PostgresQuoteStore::connect(&url)
                    .await
                    .context("Failed to open PostgreSQL quote store")?,
            )
        }
        StoreKind::LocalPostgres => {
            let params = LocalDbParams {
                host: settings.db_host.clone(),
                port: settings.db_port,
                ..LocalDbParams::new("quotes")
            };
            info!(
                "Provisioning local PostgreSQL at {}:{}...",
                params.host, params.port
            );
            let pool = local::run_local_db(&params)
                .await
                .context("Failed to provision local database")?;
            Arc::new(
                PostgresQuoteStore::from_pool(pool)
                    .await
                    .context("Failed to open local quote store")?,
            )
        }
    };

    info!("Quote store ready: backend={}", store.backend());
    Ok(store)
}
