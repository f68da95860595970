//! Reading record collections from JSON files.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{Config, default_records_path};
use crate::error::{Error, Result};
use crate::models::Record;
use crate::store::RecordStore;

/// Loads a JSON array of records into a store.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, `Error::Parse` if it is
/// not a valid record array and `Error::DuplicateId` if two records share an id.
pub fn load_records(path: &Path) -> Result<RecordStore> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Record> = serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("loaded {} records from {}", records.len(), path.display());
    RecordStore::from_records(records)
}

/// Picks the record file to load.
///
/// Precedence: explicit path, then `config.records_path`, then the default
/// file if it exists. `None` means the sample records should be used.
pub fn resolve_records_path(explicit: Option<&Path>, config: &Config) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = &config.records_path {
        return Some(path.clone());
    }
    let fallback = default_records_path().filter(|path| path.is_file());
    if fallback.is_none() {
        debug!("no record file configured, using sample records");
    }
    fallback
}
