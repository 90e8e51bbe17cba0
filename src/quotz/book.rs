//! # Quote Book
//!
//! [`QuoteBook`] owns the authoritative in-process quote collection and the
//! selection state (active category filter + last viewed quote). It is the
//! single writer: `add`, `import` and the sync engine's replace step all go
//! through it, and every mutation persists the full collection through the
//! [`StorageBackend`] before the operation is considered complete.
//!
//! The category index is derived, never stored: `categories()` recomputes
//! the distinct-category projection on every call, in first-seen order, so
//! it can never drift from the collection itself.

use crate::error::{QuotzError, Result};
use crate::model::{seed_quotes, Quote};
use crate::store::StorageBackend;
use rand::Rng;
use std::fmt;

/// The active category filter: everything, or one exact category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Parse user/storage input. `"all"` is case-insensitive; anything else
    /// is a category name, matched case-sensitively against the collection.
    pub fn parse(raw: &str) -> Filter {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Filter::All
        } else {
            Filter::Category(raw.to_string())
        }
    }

    /// The scalar form written to durable storage.
    pub fn as_key(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(c) => c,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

pub struct QuoteBook<S: StorageBackend> {
    store: S,
    quotes: Vec<Quote>,
    filter: Filter,
    last_viewed: Option<Quote>,
}

impl<S: StorageBackend> QuoteBook<S> {
    /// Load the collection and filter from storage. Absent or unreadable
    /// durable data falls back to the built-in seed collection / the `all`
    /// filter. Never fails: the book always starts in a valid state.
    pub fn initialize(store: S) -> Self {
        let quotes = store
            .load_quotes()
            .ok()
            .flatten()
            .unwrap_or_else(seed_quotes);
        let filter = store
            .load_filter()
            .ok()
            .flatten()
            .map(|raw| Filter::parse(&raw))
            .unwrap_or(Filter::All);
        Self {
            store,
            quotes,
            filter,
            last_viewed: None,
        }
    }

    /// Trim, validate and append a single quote, persisting the collection.
    /// Invalid input leaves the collection untouched.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category)?;
        self.quotes.push(quote.clone());
        self.store.save_quotes(&self.quotes)?;
        Ok(quote)
    }

    /// Replace the whole collection. Invalid elements are dropped, not the
    /// batch. Returns the number of records kept.
    pub fn replace_all(&mut self, incoming: Vec<Quote>) -> Result<usize> {
        let cleaned = Self::validate_batch(incoming);
        let kept = cleaned.len();
        self.quotes = cleaned;
        self.store.save_quotes(&self.quotes)?;
        Ok(kept)
    }

    /// Append a batch to the existing collection. Same element-level
    /// validation as `replace_all`; no deduplication against existing
    /// records.
    pub fn append_all(&mut self, incoming: Vec<Quote>) -> Result<usize> {
        let mut cleaned = Self::validate_batch(incoming);
        let kept = cleaned.len();
        self.quotes.append(&mut cleaned);
        self.store.save_quotes(&self.quotes)?;
        Ok(kept)
    }

    fn validate_batch(incoming: Vec<Quote>) -> Vec<Quote> {
        incoming
            .into_iter()
            .filter_map(|q| Quote::new(&q.text, &q.category).ok())
            .collect()
    }

    /// Read-only snapshot of the collection, in insertion order.
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    /// Distinct categories, in first-seen order. Recomputed on every call.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for quote in &self.quotes {
            if !seen.iter().any(|c| c == &quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Set and persist the active filter. A specific category must exist in
    /// the collection at the time it is set; `all` always succeeds.
    pub fn set_filter(&mut self, raw: &str) -> Result<Filter> {
        let filter = Filter::parse(raw);
        if let Filter::Category(cat) = &filter {
            if !self.categories().iter().any(|c| c == cat) {
                return Err(QuotzError::Validation(format!(
                    "unknown category: {}",
                    cat
                )));
            }
        }
        self.store.save_filter(filter.as_key())?;
        self.filter = filter.clone();
        Ok(filter)
    }

    /// The subset the active filter selects: the full collection for `all`,
    /// otherwise exact case-sensitive category matches. A filter that no
    /// longer matches anything yields an empty set, not an error.
    pub fn candidates(&self) -> Vec<&Quote> {
        match &self.filter {
            Filter::All => self.quotes.iter().collect(),
            Filter::Category(cat) => {
                self.quotes.iter().filter(|q| &q.category == cat).collect()
            }
        }
    }

    /// Pick one candidate uniformly at random and record it as last viewed.
    /// `Ok(None)` means the current filter has no quotes; an informational
    /// outcome, not an error.
    pub fn pick_random(&mut self) -> Result<Option<Quote>> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return Ok(None);
        }
        let idx = rand::thread_rng().gen_range(0..candidates.len());
        let chosen = candidates[idx].clone();
        self.last_viewed = Some(chosen.clone());
        // Session-scoped convenience value; a write failure never fails the pick.
        let _ = self.store.save_last_viewed(&chosen);
        Ok(Some(chosen))
    }

    pub fn last_viewed(&self) -> Option<&Quote> {
        self.last_viewed.as_ref()
    }

    /// Direct access to the backing store (tests inspect persisted state).
    pub fn backend(&self) -> &S {
        &self.store
    }
}
