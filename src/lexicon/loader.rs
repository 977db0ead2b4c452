//! Word list loading
//!
//! A lexicon file holds one candidate answer per line. Case is ignored,
//! blank lines are skipped, and lines that are not valid words (digits,
//! spaces, punctuation, over-long entries) are dropped.

use super::{Lexicon, LexiconError};
use crate::core::Word;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Load a lexicon from a file
///
/// # Errors
///
/// Returns `LexiconError::Unreadable` if the file cannot be read and
/// `LexiconError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use clue_solver::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, skipped) = parse_lines(&content);
    if skipped > 0 {
        debug!("Skipped {skipped} invalid lines in {}", path.display());
    }

    let lexicon = Lexicon::from_words(words).map_err(|_| LexiconError::Empty {
        path: path.to_path_buf(),
    })?;
    info!("Loaded {} words from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Convert a string slice list to words, skipping invalid entries
///
/// # Examples
/// ```
/// use clue_solver::lexicon::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "ice cream", "dog"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse file content, returning the valid words and the count of dropped lines
fn parse_lines(content: &str) -> (Vec<Word>, usize) {
    let mut skipped = 0;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();
    (words, skipped)
}
