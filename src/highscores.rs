//! High score table
//!
//! Keeps the top three named scores, best first. Storage goes through
//! [`RecordStore`]; a table that fails to load starts empty.

use serde::{Deserialize, Serialize};

use crate::persistence::{RecordStore, StoreError};

/// Maximum number of records to keep
pub const MAX_RECORDS: usize = 3;

/// Longest name accepted at the name-entry screen
pub const MAX_NAME_LEN: usize = 10;

/// Name used when the player enters nothing
pub const ANONYMOUS: &str = "Anon";

/// A single named score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub score: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Top-3 leaderboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<Record>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary records, sorting and trimming them
    pub fn from_entries(mut entries: Vec<Record>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_RECORDS);
        Self { entries }
    }

    pub fn entries(&self) -> &[Record] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Whether `score` earns a place in the table.
    ///
    /// Any score qualifies while the table has free slots, zero included.
    pub fn is_new_record(&self, score: u64) -> bool {
        if self.entries.len() < MAX_RECORDS {
            return true;
        }
        self.entries.last().is_none_or(|lowest| score > lowest.score)
    }

    /// Insert a record and return its rank (1-indexed), or None if it fell
    /// off the bottom.
    pub fn commit(&mut self, name: &str, score: u64) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        if pos >= MAX_RECORDS {
            return None;
        }

        self.entries.insert(pos, Record::new(name, score));
        self.entries.truncate(MAX_RECORDS);
        log::info!("Record committed: {} - {} (rank {})", name, score, pos + 1);
        Some(pos + 1)
    }

    /// Load from a store, falling back to an empty table
    pub fn load_from(store: &dyn RecordStore) -> Self {
        match store.load() {
            Ok(entries) => {
                let table = Self::from_entries(entries);
                log::info!("Loaded {} records", table.entries.len());
                table
            }
            Err(e) => {
                log::warn!("Failed to load records, starting fresh: {}", e);
                Self::new()
            }
        }
    }

    pub fn save_to(&self, store: &mut dyn RecordStore) -> Result<(), StoreError> {
        store.save(&self.entries)
    }
}

/// Final name for a record: trimmed, or [`ANONYMOUS`] when blank
pub fn finalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ANONYMOUS.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Characters accepted at the name-entry screen
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}
