//! In-memory quote store (no persistence)

use async_trait::async_trait;
use quote_core::{QuoteStore, Result};
use tokio::sync::RwLock;

/// Append-only list of quotes kept in insertion order
#[derive(Default)]
pub struct MemoryQuoteStore {
    quotes: RwLock<Vec<String>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing quotes
    pub fn with_quotes<I, S>(quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            quotes: RwLock::new(quotes.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn get_all_quotes(&self) -> Result<Vec<String>> {
        Ok(self.quotes.read().await.clone())
    }

    // No uniqueness or emptiness check here.
    async fn add_quote(&self, quote: &str) -> Result<()> {
        self.quotes.write().await.push(quote.to_string());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryQuoteStore::new();
        assert_eq!(store.get_all_quotes().await.unwrap(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_insertion_order() {
        let store = MemoryQuoteStore::new();
        for q in ["first", "second", "third"] {
            store.add_quote(q).await.unwrap();
        }
        assert_eq!(
            store.get_all_quotes().await.unwrap(),
            vec!["first", "second", "third"]
        );
    }

    #[tokio::test]
    async fn test_duplicates_and_empty_allowed() {
        let store = MemoryQuoteStore::with_quotes(["hello"]);
        store.add_quote("hello").await.unwrap();
        store.add_quote("").await.unwrap();
        assert_eq!(store.get_all_quotes().await.unwrap(), vec!["hello", "hello", ""]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends() {
        let store = Arc::new(MemoryQuoteStore::new());
        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add_quote(&format!("quote {}", i)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let quotes = store.get_all_quotes().await.unwrap();
        assert_eq!(quotes.len(), 100);
        let unique: HashSet<_> = quotes.into_iter().collect();
        let expected: HashSet<_> = (0..100).map(|i| format!("quote {}", i)).collect();
        assert_eq!(unique, expected);
    }
}
