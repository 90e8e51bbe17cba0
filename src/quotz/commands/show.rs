use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

/// Pick a random quote from the active filter's candidates.
pub fn run<S: StorageBackend>(book: &mut QuoteBook<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.pick_random()? {
        Some(quote) => {
            result = result.with_picked(quote);
        }
        None => {
            // Empty selection is informational, not an error.
            result.add_message(CmdMessage::info(format!(
                "No quotes in this category ({}).",
                book.filter()
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_run_picks_from_filtered_candidates() {
        let mut book = QuoteBook::initialize(crate::store::memory::InMemoryStore::new());
        book.set_filter("Life").unwrap();

        let result = run(&mut book).unwrap();
        assert_eq!(result.picked.unwrap().category, "Life");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_run_reports_empty_selection() {
        let fixture = StoreFixture::new()
            .with_quotes(&[("Only", "Here")])
            .with_filter("Gone");
        let mut book = QuoteBook::initialize(fixture.store);

        let result = run(&mut book).unwrap();
        assert!(result.picked.is_none());
        assert!(result.messages[0].content.contains("No quotes"));
    }
}
