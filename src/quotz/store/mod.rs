//! # Storage Layer
//!
//! The [`StorageBackend`] trait abstracts the durable and session-scoped
//! storage keys that quotz reads and writes:
//!
//! - `quotes`: the full quote collection, JSON array (durable)
//! - `filter`: the last active category filter (durable)
//! - `last viewed`: the most recently shown quote (session-scoped,
//!   write-only, must not survive a fresh process start)
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage
//!   - `quotes.json` and `filter.json` in the data directory
//!   - session key written to a per-process file under the OS temp dir,
//!     never read back
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - no persistence, fast isolated test execution
//!
//! ## Failure contract
//!
//! `load_quotes` and `load_filter` return `Ok(None)` when the key is absent
//! *or* its payload cannot be parsed; the caller falls back to the seed
//! collection / the `all` filter rather than failing startup. Write failures
//! are real errors: the in-memory state stays correct for the current
//! process, but the caller must surface that the data will not survive a
//! reload.

use crate::error::Result;
use crate::model::Quote;

pub mod fs;
pub mod memory;

/// Abstract interface for quotz storage.
pub trait StorageBackend {
    /// Load the durable quote collection. `None` means no usable data.
    fn load_quotes(&self) -> Result<Option<Vec<Quote>>>;

    /// Persist the full quote collection.
    fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()>;

    /// Load the persisted category filter, if any.
    fn load_filter(&self) -> Result<Option<String>>;

    /// Persist the active category filter.
    fn save_filter(&mut self, filter: &str) -> Result<()>;

    /// Record the last viewed quote in session-scoped storage. Write-only:
    /// the value is never read back into the model.
    fn save_last_viewed(&mut self, quote: &Quote) -> Result<()>;
}
