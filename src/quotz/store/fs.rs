use super::StorageBackend;
use crate::error::{QuotzError, Result};
use crate::model::Quote;
use std::fs;
use std::path::{Path, PathBuf};

const QUOTES_FILENAME: &str = "quotes.json";
const FILTER_FILENAME: &str = "filter.json";

pub struct FileStore {
    data_dir: PathBuf,
    session_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            session_dir: std::env::temp_dir(),
        }
    }

    /// Override where the session file lands (tests use a tempdir).
    pub fn with_session_dir(mut self, dir: PathBuf) -> Self {
        self.session_dir = dir;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(QUOTES_FILENAME)
    }

    fn filter_path(&self) -> PathBuf {
        self.data_dir.join(FILTER_FILENAME)
    }

    // Keyed by pid so the file dies with the session, not the machine.
    fn session_path(&self) -> PathBuf {
        self.session_dir
            .join(format!("quotz-session-{}.json", std::process::id()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(QuotzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileStore {
    fn load_quotes(&self) -> Result<Option<Vec<Quote>>> {
        let path = self.quotes_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(QuotzError::Io)?;
        // A corrupt payload counts as absent; the caller reseeds.
        Ok(serde_json::from_str(&content).ok())
    }

    fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(quotes).map_err(QuotzError::Serialization)?;
        fs::write(self.quotes_path(), content).map_err(QuotzError::Io)?;
        Ok(())
    }

    fn load_filter(&self) -> Result<Option<String>> {
        let path = self.filter_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(QuotzError::Io)?;
        Ok(serde_json::from_str(&content).ok())
    }

    fn save_filter(&mut self, filter: &str) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string(filter).map_err(QuotzError::Serialization)?;
        fs::write(self.filter_path(), content).map_err(QuotzError::Io)?;
        Ok(())
    }

    fn save_last_viewed(&mut self, quote: &Quote) -> Result<()> {
        let content = serde_json::to_string(quote).map_err(QuotzError::Serialization)?;
        fs::write(self.session_path(), content).map_err(QuotzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, cat: &str) -> Quote {
        Quote::new(text, cat).unwrap()
    }

    #[test]
    fn test_load_quotes_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_quotes().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let quotes = vec![quote("A", "One"), quote("B", "Two")];
        store.save_quotes(&quotes).unwrap();

        let loaded = store.load_quotes().unwrap().unwrap();
        assert_eq!(loaded, quotes);
    }

    #[test]
    fn test_corrupt_quotes_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUOTES_FILENAME), "{not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_quotes().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_filter() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        assert!(store.load_filter().unwrap().is_none());
        store.save_filter("Life").unwrap();
        assert_eq!(store.load_filter().unwrap().as_deref(), Some("Life"));
    }

    #[test]
    fn test_last_viewed_goes_to_session_dir() {
        let data = tempfile::tempdir().unwrap();
        let session = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(data.path().to_path_buf())
            .with_session_dir(session.path().to_path_buf());

        store.save_last_viewed(&quote("Hi", "World")).unwrap();

        let expected = session
            .path()
            .join(format!("quotz-session-{}.json", std::process::id()));
        assert!(expected.exists());
        // Nothing session-related should land in the data dir.
        assert_eq!(fs::read_dir(data.path()).unwrap().count(), 0);
    }
}
