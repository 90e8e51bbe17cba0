use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

/// List the collection, narrowed to the active filter when one is set.
pub fn run<S: StorageBackend>(book: &QuoteBook<S>, everything: bool) -> Result<CmdResult> {
    let quotes = if everything {
        book.all().to_vec()
    } else {
        book.candidates().into_iter().cloned().collect()
    };

    let mut result = CmdResult::default().with_listed_quotes(quotes);
    if result.listed_quotes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No quotes in this category ({}).",
            book.filter()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_run_respects_active_filter() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        book.set_filter("Life").unwrap();

        let result = run(&book, false).unwrap();
        assert_eq!(result.listed_quotes.len(), 1);

        let result = run(&book, true).unwrap();
        assert_eq!(result.listed_quotes.len(), 3);
    }
}
