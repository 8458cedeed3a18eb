//! Quote Service Core Library
//!
//! Domain types, errors, and the storage port shared by the quote service.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{QuoteError, Result};
pub use ports::QuoteStore;
pub use types::QuoteRequest;
