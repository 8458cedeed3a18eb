//! Storage trait for quote persistence

use crate::Result;
use async_trait::async_trait;

/// Quote store
///
/// Implementations must tolerate concurrent calls: a completed `add_quote`
/// is visible to every `get_all_quotes` that starts after it returns.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All stored quotes. Empty when nothing has been added.
    async fn get_all_quotes(&self) -> Result<Vec<String>>;

    /// Store a new quote.
    async fn add_quote(&self, quote: &str) -> Result<()>;

    /// Short backend name for logs and health reporting.
    fn backend(&self) -> &'static str;
}
