//! Bounded interaction history backed by an embedded key-value store
//!
//! The store keeps the full interaction list in memory (most-recent-first,
//! capped at [`HISTORY_CAPACITY`]) and mirrors it into a `sled` database
//! after every mutation, so a restart reconstructs the same state. The same
//! database also holds the display theme preference.

use crate::config::HistoryConfig;
use crate::error::{DraftgenError, Result};
use crate::mode::ContentMode;
use chrono::{Local, NaiveDate, Utc};
use directories::ProjectDirs;
use sled::Db;
use std::path::PathBuf;

pub mod types;
pub use types::{Interaction, Theme};

/// Hard upper bound on the number of retained interactions
pub const HISTORY_CAPACITY: usize = 50;

/// Database key holding the serialized interaction list
const HISTORY_KEY: &[u8] = b"history";

/// Database key holding the theme preference string
const THEME_KEY: &[u8] = b"theme";

/// Persistent, capacity-bounded interaction history
///
/// Entries are ordered most-recent-first; appending beyond capacity evicts
/// the oldest entries. Every mutation re-persists the full list, so the
/// in-memory state never diverges from the most recently persisted state.
pub struct HistoryStore {
    db: Db,
    entries: Vec<Interaction>,
    next_id: u64,
}

impl HistoryStore {
    /// Open the history store at its configured location
    ///
    /// Resolution order: the `DRAFTGEN_HISTORY_DB` environment variable,
    /// the configured `db_path`, then the user's application data directory.
    pub fn open(config: &HistoryConfig) -> Result<Self> {
        if let Ok(override_path) = std::env::var("DRAFTGEN_HISTORY_DB") {
            return Self::open_at(override_path);
        }

        if let Some(path) = &config.db_path {
            return Self::open_at(path.clone());
        }

        let proj_dirs = ProjectDirs::from("io", "draftgen", "draftgen")
            .ok_or_else(|| DraftgenError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .map_err(|e| DraftgenError::Storage(format!("Failed to create data directory: {}", e)))?;

        Self::open_at(data_dir.join("history.db"))
    }

    /// Open the history store at a specific path
    ///
    /// Primarily useful for tests where the default application data
    /// directory is not desirable (for example, a temporary directory).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use draftgen::storage::HistoryStore;
    ///
    /// let store = HistoryStore::open_at("/tmp/draftgen-history.db").unwrap();
    /// assert!(store.is_empty());
    /// ```
    pub fn open_at<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let db = sled::open(&path)
            .map_err(|e| DraftgenError::Storage(format!("Failed to open database: {}", e)))?;

        let entries = Self::load_entries(&db);
        let next_id = entries.iter().map(|i| i.id).max().map_or(1, |max| max + 1);

        tracing::debug!(
            "Opened history store at {} with {} entries",
            path.display(),
            entries.len()
        );

        Ok(Self {
            db,
            entries,
            next_id,
        })
    }

    /// Read the persisted list, treating absent or malformed data as empty
    ///
    /// Corrupt persisted data must never fail the whole process.
    fn load_entries(db: &Db) -> Vec<Interaction> {
        let bytes = match db.get(HISTORY_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read history, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Interaction>>(&bytes) {
            Ok(mut entries) => {
                entries.truncate(HISTORY_CAPACITY);
                entries
            }
            Err(e) => {
                tracing::warn!("Malformed history data, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Record a successful generation at the head of the list
    ///
    /// Evicts the oldest entries when capacity is exceeded, assigns a fresh
    /// monotonic id, and persists the resulting list.
    pub fn append(
        &mut self,
        prompt: impl Into<String>,
        output: impl Into<String>,
        mode: ContentMode,
    ) -> Result<&Interaction> {
        let interaction = Interaction {
            id: self.next_id,
            prompt: prompt.into(),
            output: output.into(),
            mode,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        self.entries.insert(0, interaction);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist()?;

        Ok(&self.entries[0])
    }

    /// Remove the entry with the given id
    ///
    /// Returns `true` if an entry was removed; deleting a non-existent id
    /// is a no-op, not an error.
    pub fn delete_by_id(&mut self, id: u64) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|i| i.id != id);

        if self.entries.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Remove all entries and the backing record
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.db
            .remove(HISTORY_KEY)
            .map_err(|e| DraftgenError::Storage(format!("Remove failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| DraftgenError::Storage(format!("Flush failed: {}", e)))?;
        Ok(())
    }

    /// All entries, most-recent-first
    pub fn entries(&self) -> &[Interaction] {
        &self.entries
    }

    /// Find an entry by id
    pub fn find(&self, id: u64) -> Option<&Interaction> {
        self.entries.iter().find(|i| i.id == id)
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the persisted theme preference
    ///
    /// Absent or malformed values fall back to the default theme.
    pub fn theme(&self) -> Theme {
        match self.db.get(THEME_KEY) {
            Ok(Some(bytes)) => std::str::from_utf8(&bytes)
                .ok()
                .and_then(Theme::parse_str)
                .unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme, using default: {}", e);
                Theme::default()
            }
        }
    }

    /// Persist the theme preference
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.db
            .insert(THEME_KEY, theme.to_string().as_bytes())
            .map_err(|e| DraftgenError::Storage(format!("Insert failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| DraftgenError::Storage(format!("Flush failed: {}", e)))?;
        Ok(())
    }

    /// Mirror the full in-memory list into the database
    fn persist(&self) -> Result<()> {
        let value = serde_json::to_vec(&self.entries)
            .map_err(|e| DraftgenError::Storage(format!("Serialization failed: {}", e)))?;

        self.db
            .insert(HISTORY_KEY, value)
            .map_err(|e| DraftgenError::Storage(format!("Insert failed: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| DraftgenError::Storage(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

/// Partition entries by the viewer's local calendar day
///
/// Pure function: preserves each group's internal order and the order in
/// which distinct days first appear in the input list. With a
/// most-recent-first input this yields groups in reverse chronological
/// order, each internally most-recent-first.
pub fn group_by_day(entries: &[Interaction]) -> Vec<(NaiveDate, Vec<&Interaction>)> {
    let mut groups: Vec<(NaiveDate, Vec<&Interaction>)> = Vec::new();

    for entry in entries {
        let day = entry.created_at.with_timezone(&Local).date_naive();
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, items)) => items.push(entry),
            None => groups.push((day, vec![entry])),
        }
    }

    groups
}
