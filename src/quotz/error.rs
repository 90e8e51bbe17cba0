use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotzError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Remote unavailable: {0}")]
    SyncUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, QuotzError>;
