//! # API Facade
//!
//! [`QuotzApi`] is the single entry point for all quotz operations. It owns
//! the quote book and the sync engine, dispatches to the command layer, and
//! returns structured `CmdResult` values. It never prints: terminal output
//! is the CLI layer's job.
//!
//! Generic over [`StorageBackend`] so tests can run against
//! `InMemoryStore` while production uses `FileStore`. The remote is passed
//! per call as a [`RemoteSource`] for the same reason.

use crate::book::QuoteBook;
use crate::commands;
use crate::config::QuotzConfig;
use crate::error::Result;
use crate::remote::RemoteSource;
use crate::store::StorageBackend;
use crate::sync::SyncEngine;
use std::path::PathBuf;

pub struct QuotzApi<S: StorageBackend> {
    book: QuoteBook<S>,
    engine: SyncEngine,
    config: QuotzConfig,
    config_dir: PathBuf,
}

impl<S: StorageBackend> QuotzApi<S> {
    /// Build the facade, loading the collection and filter from the backend
    /// (with seed fallback).
    pub fn new(store: S, config: QuotzConfig, config_dir: PathBuf) -> Self {
        Self {
            book: QuoteBook::initialize(store),
            engine: SyncEngine::new(),
            config,
            config_dir,
        }
    }

    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, text, category)
    }

    pub fn list_quotes(&self, everything: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, everything)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.book)
    }

    pub fn filter(&mut self, raw: Option<&str>) -> Result<commands::CmdResult> {
        commands::filter::run(&mut self.book, raw)
    }

    pub fn show_random(&mut self) -> Result<commands::CmdResult> {
        commands::show::run(&mut self.book)
    }

    pub fn import_quotes(&mut self, path: &std::path::Path, replace: bool) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.book, path, replace)
    }

    pub fn export_quotes(&self, path: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.book, path)
    }

    pub fn sync<R: RemoteSource>(&mut self, remote: &R) -> Result<commands::CmdResult> {
        commands::sync::run(
            &mut self.book,
            &mut self.engine,
            remote,
            &self.config.default_category,
        )
    }

    pub fn push<R: RemoteSource>(&self, remote: &R) -> Result<commands::CmdResult> {
        commands::sync::push(&self.book, &self.engine, remote)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &QuotzConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> QuotzApi<InMemoryStore> {
        QuotzApi::new(
            InMemoryStore::new(),
            QuotzConfig::default(),
            PathBuf::from("."),
        )
    }

    #[test]
    fn test_add_then_categories_dispatch() {
        let mut api = api();
        api.add_quote("Be bold.", "Courage").unwrap();
        let result = api.categories().unwrap();
        assert!(result.categories.contains(&"Courage".to_string()));
    }

    #[test]
    fn test_filter_then_show_stays_in_category() {
        let mut api = api();
        api.filter(Some("Life")).unwrap();
        let result = api.show_random().unwrap();
        assert_eq!(result.picked.unwrap().category, "Life");
    }
}
