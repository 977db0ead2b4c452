//! Lexical knowledge base
//!
//! Word senses with definitions and broader (hypernym) concepts, in the
//! shape of a WordNet synset: each sense carries a dotted label such as
//! `cat.n.01`, a gloss, and the labels of its hypernyms.
//!
//! The on-disk form is a JSON object mapping a lowercase lemma to its senses:
//!
//! ```json
//! {
//!   "cat": [
//!     { "name": "cat.n.01",
//!       "definition": "feline mammal usually having thick soft fur",
//!       "hypernyms": ["feline.n.01"] }
//!   ]
//! }
//! ```

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Separator between the parts of a sense label
pub const SENSE_NAME_SEPARATOR: char = '.';

/// Failures while loading a sense file
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("cannot read sense file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed sense data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One meaning of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Dotted label, e.g. `cat.n.01`
    pub name: String,
    pub definition: String,
    /// Labels of the broader concepts this sense is a kind of
    #[serde(default)]
    pub hypernyms: Vec<String>,
}

impl Sense {
    #[must_use]
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            hypernyms: Vec::new(),
        }
    }

    /// Builder-style hypernym attachment
    #[must_use]
    pub fn with_hypernym(mut self, hypernym: impl Into<String>) -> Self {
        self.hypernyms.push(hypernym.into());
        self
    }
}

/// Source of word senses
///
/// Keys are lowercase lemmas. Implementations must be cheap to query; the
/// scorers call them once per candidate and per clue token.
pub trait LexicalDatabase {
    /// All senses recorded for a lowercase lemma, primary sense first
    fn senses(&self, lemma: &str) -> &[Sense];

    /// True if the lemma has at least one sense
    fn contains_lemma(&self, lemma: &str) -> bool {
        !self.senses(lemma).is_empty()
    }
}

/// In-memory sense table
#[derive(Debug, Clone, Default)]
pub struct SenseDatabase {
    entries: FxHashMap<String, Vec<Sense>>,
}

impl SenseDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add senses for a lemma, appending to any existing ones
    pub fn insert(&mut self, lemma: &str, senses: impl IntoIterator<Item = Sense>) {
        self.entries
            .entry(lemma.to_lowercase())
            .or_default()
            .extend(senses);
    }

    /// Parse the JSON sense format
    ///
    /// # Errors
    /// Returns `KnowledgeError::Malformed` if the text is not a lemma -> senses object.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        let raw: FxHashMap<String, Vec<Sense>> = serde_json::from_str(json)?;
        let mut db = Self::new();
        for (lemma, senses) in raw {
            db.insert(&lemma, senses);
        }
        Ok(db)
    }

    /// Load a sense file
    ///
    /// # Errors
    /// Returns `KnowledgeError` if the file is unreadable or malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| KnowledgeError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::from_json_str(&json)?;
        info!("Loaded senses for {} lemmas from {}", db.len(), path.display());
        Ok(db)
    }

    /// Load a sense file, falling back to an empty table
    ///
    /// Every candidate then scores zero, but solving still works.
    #[must_use]
    pub fn open_or_empty<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("{e}; semantic ranking disabled");
            Self::new()
        })
    }

    /// Number of lemmas with senses
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexicalDatabase for SenseDatabase {
    fn senses(&self, lemma: &str) -> &[Sense] {
        self.entries.get(lemma).map_or(&[], Vec::as_slice)
    }
}
