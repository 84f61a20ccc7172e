//! Storage boundary for the high-score table
//!
//! Stores deal only in record lists; ordering and the top-3 cut are the
//! table's job. Failures are typed here and degraded by the callers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::Record;

/// Errors raised while reading or writing records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("record data is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere records can be loaded from and saved to
pub trait RecordStore {
    fn load(&self) -> Result<Vec<Record>, StoreError>;
    fn save(&mut self, records: &[Record]) -> Result<(), StoreError>;
}

/// Records kept as a JSON array in a file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    /// A missing file is an empty table, not an error
    fn load(&self) -> Result<Vec<Record>, StoreError> {
        if !self.path.exists() {
            log::info!("No records file at {:?}, starting fresh", self.path);
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&contents)?;
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        log::info!("Saved {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}

/// In-process store for tests and sessions without a records file
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<(), StoreError> {
        self.records = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bubble-pop-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = JsonFileStore::new(scratch_path("missing"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = scratch_path("round-trip");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        let records = vec![Record::new("ANA", 900), Record::new("BO", 300)];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_garbage_file_is_json_error() {
        let path = scratch_path("garbage");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_memory_store_keeps_last_save() {
        let mut store = MemoryStore::new();
        store.save(&[Record::new("X", 1)]).unwrap();
        store.save(&[Record::new("Y", 2)]).unwrap();
        assert_eq!(store.records(), &[Record::new("Y", 2)]);
    }
}
