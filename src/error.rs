//! Error type for record collection and record file operations.
//!
//! Searching never fails; these errors come from keeping identifiers unique
//! and from reading record files.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::RecordId;

/// Errors raised by the record store and loader.
#[derive(Debug, Error)]
pub enum Error {
    /// A record with this identifier is already in the collection.
    #[error("record id already exists: {0}")]
    DuplicateId(RecordId),

    /// No record with this identifier exists.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// The operation only applies to notes.
    #[error("record {0} is not a note")]
    NotANote(RecordId),

    /// Reading a record file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file did not contain a valid JSON record array.
    #[error("invalid record file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for store and loader operations.
pub type Result<T> = std::result::Result<T, Error>;
