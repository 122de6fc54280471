use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt store {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Input is not a 4-digit number with distinct digits.
    #[error("{0}")]
    InvalidNumber(String),

    /// Rejected addition: malformed, blacklisted or already recorded.
    #[error("Number is invalid, blacklisted, or already exists")]
    Unavailable(String),

    #[error("{0} is already blacklisted or recorded")]
    AlreadyExcluded(u32),

    /// Every valid number is recorded or blacklisted.
    #[error("No unused numbers left")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, NumzError>;
