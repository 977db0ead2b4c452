//! The candidate word list
//!
//! Loaded once at startup and never mutated afterwards. Without a lexicon
//! nothing else can run, so load failures are fatal.

pub mod loader;

use crate::core::Word;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Startup failures for the word list
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read word list {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} contains no valid words", path.display())]
    Empty { path: PathBuf },
    #[error("word list contains no valid words")]
    NoWords,
}

/// Immutable, ordered collection of candidate answers
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from already-validated words
    ///
    /// # Errors
    /// Returns `LexiconError::NoWords` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, LexiconError> {
        if words.is_empty() {
            return Err(LexiconError::NoWords);
        }
        Ok(Self { words })
    }

    /// Load a lexicon from a line-oriented word file
    ///
    /// # Errors
    /// See [`loader::load_from_file`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        loader::load_from_file(path)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty lexicon cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
