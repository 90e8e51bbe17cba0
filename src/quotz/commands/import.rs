use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotzError, Result};
use crate::model::Quote;
use crate::store::StorageBackend;
use std::fs;
use std::path::Path;

/// Import a JSON file into the collection. Additive by default; `replace`
/// swaps the whole collection for the file's contents.
pub fn run<S: StorageBackend>(
    book: &mut QuoteBook<S>,
    path: &Path,
    replace: bool,
) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(QuotzError::Io)?;
    let incoming = parse(&raw)?;
    let total = incoming.len();

    let kept = if replace {
        book.replace_all(incoming)?
    } else {
        book.append_all(incoming)?
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} quotes from {}",
        kept,
        path.display()
    )));
    if kept < total {
        result.add_message(CmdMessage::warning(format!(
            "Dropped {} invalid entries",
            total - kept
        )));
    }
    Ok(result)
}

/// Decode the raw text into quote shape. Only the top-level structure is the
/// codec's concern: malformed JSON or a non-array is an import error, while
/// garbage *elements* are coerced to blank records and left to the book's
/// element-level validation to drop.
pub fn parse(raw: &str) -> Result<Vec<Quote>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| QuotzError::Import(format!("not valid JSON: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| QuotzError::Import("top-level value is not an array".to_string()))?;

    Ok(items
        .iter()
        .map(|item| Quote {
            text: field(item, "text"),
            category: field(item, "category"),
        })
        .collect())
}

fn field(item: &serde_json::Value, key: &str) -> String {
    item.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
