//! PostgreSQL quote store

use anyhow::{Context, Result};
use async_trait::async_trait;
use quote_core::{QuoteError, QuoteStore};
use sqlx::postgres::{PgPool, PgPoolOptions};

pub struct PostgresQuoteStore {
    pool: PgPool,
}

impl PostgresQuoteStore {
    /// Connect using a PostgreSQL connection string and ensure the schema.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .connect(connection_string)
            .await
            .context("Failed to connect to PostgreSQL")?;

        tracing::info!("PostgreSQL connection established");
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and ensure the schema.
    pub async fn from_pool(pool: PgPool) -> Result<Self> {
        let store = Self { pool };
        store
            .ensure_schema()
            .await
            .context("Failed to create quotes table")?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id SERIAL PRIMARY KEY,
                quote TEXT UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn storage_error(e: sqlx::Error, quote: &str) -> QuoteError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => QuoteError::DuplicateQuote(quote.to_string()),
        _ => QuoteError::storage(e.to_string()),
    }
}

#[async_trait]
impl QuoteStore for PostgresQuoteStore {
    async fn get_all_quotes(&self) -> quote_core::Result<Vec<String>> {
        // Ordered by id so repeated listings are stable.
        let rows: Vec<Option<String>> =
            sqlx::query_scalar("SELECT quote FROM quotes ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| QuoteError::storage(e.to_string()))?;

        Ok(rows.into_iter().flatten().collect())
    }

    async fn add_quote(&self, quote: &str) -> quote_core::Result<()> {
        sqlx::query("INSERT INTO quotes (quote) VALUES ($1)")
            .bind(quote)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error(e, quote))?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Live database for these tests; they are skipped when unset.
    const TEST_DB_ENV: &str = "QUOTE_SERVICE_TEST_DATABASE_URL";

    async fn test_store() -> Option<PostgresQuoteStore> {
        let url = std::env::var(TEST_DB_ENV).ok()?;
        let store = PostgresQuoteStore::connect(&url).await.unwrap();
        sqlx::query("DELETE FROM quotes")
            .execute(store.pool())
            .await
            .unwrap();
        Some(store)
    }

    #[test]
    fn test_non_database_error_is_unavailable() {
        let err = storage_error(sqlx::Error::PoolTimedOut, "hello");
        assert!(matches!(err, QuoteError::StorageUnavailable(_)));
    }

    // The cases share one table, so they run in a single test.
    #[tokio::test]
    async fn test_postgres_store() {
        let Some(store) = test_store().await else {
            return;
        };

        assert!(store.get_all_quotes().await.unwrap().is_empty());

        store.add_quote("first").await.unwrap();
        store.add_quote("second").await.unwrap();
        assert_eq!(store.get_all_quotes().await.unwrap(), vec!["first", "second"]);

        let err = store.add_quote("first").await.unwrap_err();
        assert_eq!(err, QuoteError::DuplicateQuote("first".to_string()));

        let tricky = "it's'); DROP TABLE quotes; --";
        store.add_quote(tricky).await.unwrap();
        assert_eq!(
            store.get_all_quotes().await.unwrap(),
            vec!["first", "second", tricky]
        );

        // Reopening keeps existing rows.
        let reopened = PostgresQuoteStore::from_pool(store.pool().clone())
            .await
            .unwrap();
        assert_eq!(reopened.get_all_quotes().await.unwrap().len(), 3);
    }
}
