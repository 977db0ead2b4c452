//! Remembered answers and their persistence
//!
//! The store lives in memory for the whole session and is written through
//! to its storage on every recorded answer. Storage problems on load never
//! stop the solver: a missing or corrupt file is an empty store.

use super::{FeedbackError, FeedbackKey};
use crate::core::Word;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Remembered answers keyed by (clue, pattern)
pub type FeedbackMap = FxHashMap<FeedbackKey, Word>;

/// Durable home of the feedback map
pub trait FeedbackStorage {
    /// Read every remembered answer; never fails
    fn load(&self) -> FeedbackMap;

    /// Persist the full map
    ///
    /// # Errors
    /// Returns `FeedbackError` if the map cannot be written.
    fn save(&self, entries: &FeedbackMap) -> Result<(), FeedbackError>;
}

/// Feedback kept only for the lifetime of the process
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryStorage;

impl FeedbackStorage for MemoryStorage {
    fn load(&self) -> FeedbackMap {
        FeedbackMap::default()
    }

    fn save(&self, _entries: &FeedbackMap) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// JSON object file mapping tuple-form keys to uppercase words
#[derive(Debug, Clone)]
pub struct JsonFeedbackFile {
    path: PathBuf,
}

impl JsonFeedbackFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> FeedbackError {
        FeedbackError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl FeedbackStorage for JsonFeedbackFile {
    fn load(&self) -> FeedbackMap {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!("No feedback loaded from {}: {e}", self.path.display());
                return FeedbackMap::default();
            }
        };

        let raw: BTreeMap<String, String> = match serde_json::from_str(&text) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Ignoring malformed feedback file {}: {e}", self.path.display());
                return FeedbackMap::default();
            }
        };

        let mut entries = FeedbackMap::default();
        for (key, word) in raw {
            match (key.parse::<FeedbackKey>(), Word::new(&word)) {
                (Ok(key), Ok(word)) => {
                    entries.insert(key, word);
                }
                (Err(e), _) => warn!("Skipping feedback entry: {e}"),
                (_, Err(e)) => warn!("Skipping feedback entry {key}: {e}"),
            }
        }

        info!(
            "Loaded {} feedback entries from {}",
            entries.len(),
            self.path.display()
        );
        entries
    }

    fn save(&self, entries: &FeedbackMap) -> Result<(), FeedbackError> {
        let sorted: BTreeMap<String, &str> = entries
            .iter()
            .map(|(key, word)| (key.to_string(), word.text()))
            .collect();

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        sorted.serialize(&mut serializer)?;
        buffer.push(b'\n');

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, &buffer).map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path).map_err(|e| self.io_error(e))?;

        debug!(
            "Saved {} feedback entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory feedback map with write-through persistence
pub struct FeedbackStore {
    entries: FeedbackMap,
    storage: Box<dyn FeedbackStorage + Send>,
}

impl FeedbackStore {
    /// Load the store from its storage
    #[must_use]
    pub fn open(storage: impl FeedbackStorage + Send + 'static) -> Self {
        Self {
            entries: storage.load(),
            storage: Box::new(storage),
        }
    }

    /// A store that forgets everything at exit
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage)
    }

    /// The remembered answer for a key, if any
    ///
    /// The caller decides whether it still fits the current pattern.
    #[must_use]
    pub fn lookup(&self, key: &FeedbackKey) -> Option<&Word> {
        self.entries.get(key)
    }

    /// Remember an answer, replacing any earlier one, then persist
    ///
    /// # Errors
    /// Returns `FeedbackError` if persisting fails. The in-memory entry is
    /// kept either way.
    pub fn record(&mut self, key: FeedbackKey, word: Word) -> Result<(), FeedbackError> {
        debug!("Recording {word} for {key}");
        self.entries.insert(key, word);
        self.storage.save(&self.entries)
    }

    #[must_use]
    pub fn entries(&self) -> &FeedbackMap {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
