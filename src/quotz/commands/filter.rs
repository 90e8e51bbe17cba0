use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

/// Show the active filter, or set a new one when `raw` is given.
pub fn run<S: StorageBackend>(book: &mut QuoteBook<S>, raw: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match raw {
        None => {
            result.add_message(CmdMessage::info(format!("Active filter: {}", book.filter())));
        }
        Some(raw) => {
            let filter = book.set_filter(raw)?;
            let count = book.candidates().len();
            result.add_message(CmdMessage::success(format!(
                "Filter set to {} ({} quotes)",
                filter, count
            )));
        }
    }
    Ok(result)
}
