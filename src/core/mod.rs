//! Core domain types for crossword solving
//!
//! Words, letter patterns, and clue tokenization. Everything here is pure
//! and independent of the lexicon, the feedback store, and the scorers.

mod pattern;
mod tokenize;
mod word;

pub use pattern::{DEFAULT_LENGTHS, Pattern, PatternError, PatternMatcher, WILDCARD};
pub use tokenize::{is_wordlike, tokenize, tokenize_lower};
pub use word::{MAX_WORD_LEN, Word, WordError};
