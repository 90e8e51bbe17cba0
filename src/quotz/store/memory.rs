use super::StorageBackend;
use crate::error::Result;
use crate::model::Quote;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    quotes: Option<Vec<Quote>>,
    filter: Option<String>,
    last_viewed: Option<Quote>,
    pub save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_viewed(&self) -> Option<&Quote> {
        self.last_viewed.as_ref()
    }
}

impl StorageBackend for InMemoryStore {
    fn load_quotes(&self) -> Result<Option<Vec<Quote>>> {
        Ok(self.quotes.clone())
    }

    fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()> {
        self.quotes = Some(quotes.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn load_filter(&self) -> Result<Option<String>> {
        Ok(self.filter.clone())
    }

    fn save_filter(&mut self, filter: &str) -> Result<()> {
        self.filter = Some(filter.to_string());
        Ok(())
    }

    fn save_last_viewed(&mut self, quote: &Quote) -> Result<()> {
        self.last_viewed = Some(quote.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Pre-seed the durable quotes key, bypassing validation.
        pub fn with_quotes(mut self, quotes: &[(&str, &str)]) -> Self {
            let quotes: Vec<Quote> = quotes
                .iter()
                .map(|(text, category)| Quote {
                    text: text.to_string(),
                    category: category.to_string(),
                })
                .collect();
            self.store.save_quotes(&quotes).unwrap();
            self.store.save_count = 0;
            self
        }

        pub fn with_filter(mut self, filter: &str) -> Self {
            self.store.save_filter(filter).unwrap();
            self
        }
    }
}
