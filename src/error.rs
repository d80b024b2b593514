//! Error types for the storage collaborators.
//!
//! Nothing here ever reaches the simulation: stores log these and fall back
//! to defaults.

use std::fmt;
use std::io;

/// Failure reading or writing a JSON file on disk.
#[derive(Debug)]
pub enum StorageError {
    /// The file could not be opened, created or written.
    Io(io::Error),
    /// The file contents were not the expected JSON.
    Format(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Format(e) => write!(f, "malformed storage data: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Format(e)
    }
}

impl StorageError {
    /// The file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

