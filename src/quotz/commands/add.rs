use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(
    book: &mut QuoteBook<S>,
    text: &str,
    category: &str,
) -> Result<CmdResult> {
    let quote = book.add(text, category)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Quote added to {}",
        quote.category
    )));
    Ok(result.with_picked(quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotzError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_run_adds_trimmed_quote() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        let result = run(&mut book, "Be bold.", "  Courage  ").unwrap();

        assert_eq!(result.picked.unwrap().category, "Courage");
        assert_eq!(book.all().len(), 4);
    }

    #[test]
    fn test_run_propagates_validation_error() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        let err = run(&mut book, "", "X").unwrap_err();
        assert!(matches!(err, QuotzError::Validation(_)));
        assert_eq!(book.all().len(), 3);
    }
}
