use crate::book::QuoteBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotzError, Result};
use crate::store::StorageBackend;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Write the full collection as pretty-printed JSON. Defaults to a dated
/// filename in the current directory.
pub fn run<S: StorageBackend>(book: &QuoteBook<S>, path: Option<PathBuf>) -> Result<CmdResult> {
    let path = path.unwrap_or_else(default_filename);
    let content = serde_json::to_string_pretty(book.all()).map_err(QuotzError::Serialization)?;
    fs::write(&path, content).map_err(QuotzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} quotes to {}",
        book.all().len(),
        path.display()
    )));
    Ok(result)
}

fn default_filename() -> PathBuf {
    PathBuf::from(format!("quotes-{}.json", Utc::now().format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::import;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_export_then_replace_import_is_identity() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        book.add("Extra", "More").unwrap();
        let before = book.all().to_vec();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        run(&book, Some(path.clone())).unwrap();

        import::run(&mut book, &path, true).unwrap();
        assert_eq!(book.all(), before.as_slice());
    }

    #[test]
    fn test_export_then_append_import_duplicates() {
        let mut book = QuoteBook::initialize(InMemoryStore::new());
        let before = book.all().to_vec();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        run(&book, Some(path.clone())).unwrap();

        import::run(&mut book, &path, false).unwrap();
        assert_eq!(book.all().len(), before.len() * 2);
        assert_eq!(&book.all()[..before.len()], before.as_slice());
        assert_eq!(&book.all()[before.len()..], before.as_slice());
    }

    #[test]
    fn test_export_writes_array_of_text_category_objects() {
        let book = QuoteBook::initialize(InMemoryStore::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        run(&book, Some(path.clone())).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[0].get("text").is_some());
        assert!(items[0].get("category").is_some());
    }
}
