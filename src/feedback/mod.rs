//! Feedback: answers confirmed or corrected by the user
//!
//! Remembered answers let a repeated (clue, pattern) query skip ranking.

mod key;
mod store;

pub use key::FeedbackKey;
pub use store::{FeedbackMap, FeedbackStorage, FeedbackStore, JsonFeedbackFile, MemoryStorage};

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures when recording or persisting feedback
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("cannot write feedback file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode feedback: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("malformed feedback key {0:?}")]
    MalformedKey(String),
    #[error("invalid correction: {0}")]
    InvalidWord(#[from] WordError),
    #[error("{word} does not fit the pattern '{pattern}'")]
    PatternMismatch { word: String, pattern: String },
    #[error("no solution to confirm for this clue and pattern")]
    NothingToConfirm,
}
