use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(book: &QuoteBook<S>) -> Result<CmdResult> {
    let categories = book.categories();
    let mut result = CmdResult::default().with_categories(categories);
    if result.categories.is_empty() {
        result.add_message(CmdMessage::info("No quotes yet."));
    }
    Ok(result)
}
