//! Storage error types.

use std::path::PathBuf;

use ward_core::RegistryError;

/// Errors that can occur while loading or saving the bed file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A record parsed fine but violates a structural invariant.
    #[error("corrupt record for bed {bed}: {reason}")]
    Corrupt {
        /// The bed number of the offending record.
        bed: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The loaded beds could not form a valid registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Creates a [`StoreError::Corrupt`] for the given bed number.
    pub fn corrupt(bed: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            bed: bed.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a [`StoreError::Corrupt`].
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
