use std::path::PathBuf;
use thiserror::Error;

/// Flat-file storage errors
///
/// Line numbers are 1-based positions in the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode row for {}: {source}", path.display())]
    Encode { path: PathBuf, source: csv::Error },

    #[error("{}:{line}: unreadable row: {source}", path.display())]
    Csv {
        path: PathBuf,
        line: u64,
        source: csv::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

impl StoreError {
    /// Whether the file content (not the file system) is at fault
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Csv { .. } | Self::Malformed { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
