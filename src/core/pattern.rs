//! Letter patterns and their compiled matchers
//!
//! A pattern such as `C?T` fixes the answer length to the pattern length.
//! Alphabetic characters pin a letter at that position; `?` (or any other
//! non-alphabetic character) leaves the position open. An empty or
//! whitespace-only pattern constrains nothing except the default length range.

use super::Word;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Canonical wildcard marker
pub const WILDCARD: char = '?';

/// Lengths accepted when no pattern is given
pub const DEFAULT_LENGTHS: RangeInclusive<usize> = 2..=15;

/// Error raised when a pattern cannot be turned into a matcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern letter '{0}' has no single uppercase form")]
    UnrepresentableLetter(char),
}

/// A letter pattern as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    raw: String,
    normalized: String,
}

impl Pattern {
    /// Wrap a user-supplied pattern
    ///
    /// # Examples
    /// ```
    /// use clue_solver::core::Pattern;
    ///
    /// let pattern = Pattern::new("c?t");
    /// assert_eq!(pattern.normalized(), "C?T");
    /// assert!(pattern.has_letters());
    /// ```
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.to_uppercase();
        Self { raw, normalized }
    }

    /// Uppercased pattern text, used in feedback keys
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True for an empty or whitespace-only pattern
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// True if at least one position pins a letter
    #[must_use]
    pub fn has_letters(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
    }

    /// Compile into an exact-length matcher
    ///
    /// # Errors
    /// Returns `PatternError::UnrepresentableLetter` for a letter whose
    /// uppercase form is more than one character (for example `ß`).
    pub fn compile(&self) -> Result<PatternMatcher, PatternError> {
        if self.is_unconstrained() {
            return Ok(PatternMatcher::AnyLength(DEFAULT_LENGTHS));
        }

        let slots = self
            .raw
            .chars()
            .map(|c| {
                if !c.is_alphabetic() {
                    return Ok(None);
                }
                let mut upper = c.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) => Ok(Some(u)),
                    _ => Err(PatternError::UnrepresentableLetter(c)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PatternMatcher::Exact(slots))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Predicate over words produced by [`Pattern::compile`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternMatcher {
    /// Any word whose length falls in the range
    AnyLength(RangeInclusive<usize>),
    /// Exactly one slot per letter; `None` accepts any letter
    Exact(Vec<Option<char>>),
}

impl PatternMatcher {
    /// Check a word against the pattern
    ///
    /// # Examples
    /// ```
    /// use clue_solver::core::{Pattern, Word};
    ///
    /// let matcher = Pattern::new("C?T").compile().unwrap();
    /// assert!(matcher.matches(&Word::new("cot").unwrap()));
    /// assert!(!matcher.matches(&Word::new("cats").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::AnyLength(range) => range.contains(&word.len()),
            Self::Exact(slots) => {
                word.len() == slots.len()
                    && slots
                        .iter()
                        .zip(word.letters())
                        .all(|(slot, letter)| slot.is_none_or(|pinned| pinned == letter))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[rstest]
    #[case("C?T", "CAT", true)]
    #[case("C?T", "COT", true)]
    #[case("C?T", "CUT", true)]
    #[case("C?T", "CATS", false)]
    #[case("C?T", "AT", false)]
    #[case("C?T", "DOG", false)]
    #[case("c?t", "CAT", true)]
    #[case("???", "DOG", true)]
    #[case("C.T", "CAT", true)]
    #[case("C T", "CAT", true)]
    #[case("CAT", "CAT", true)]
    #[case("CAT", "COT", false)]
    fn exact_pattern_matching(#[case] pattern: &str, #[case] candidate: &str, #[case] expected: bool) {
        let matcher = Pattern::new(pattern).compile().unwrap();
        assert_eq!(matcher.matches(&word(candidate)), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn unconstrained_pattern_uses_default_lengths(#[case] pattern: &str) {
        let matcher = Pattern::new(pattern).compile().unwrap();
        assert_eq!(matcher, PatternMatcher::AnyLength(DEFAULT_LENGTHS));
        assert!(!matcher.matches(&word("A")));
        assert!(matcher.matches(&word("AT")));
        assert!(matcher.matches(&word("ABCDEFGHIJKLMNO")));
    }

    #[test]
    fn exact_matcher_fixes_length() {
        let matcher = Pattern::new("?A??").compile().unwrap();
        assert!(matcher.matches(&word("BATS")));
        assert!(!matcher.matches(&word("BAT")));
        assert!(!matcher.matches(&word("BATHS")));
    }

    #[test]
    fn multi_char_uppercase_is_rejected() {
        assert_eq!(
            Pattern::new("STRA?E").compile(),
            Ok(PatternMatcher::Exact(vec![
                Some('S'),
                Some('T'),
                Some('R'),
                Some('A'),
                None,
                Some('E'),
            ]))
        );
        assert_eq!(
            Pattern::new("STRAßE").compile(),
            Err(PatternError::UnrepresentableLetter('ß'))
        );
    }

    #[test]
    fn letter_detection() {
        assert!(!Pattern::new("???").has_letters());
        assert!(!Pattern::new("").has_letters());
        assert!(Pattern::new("?a?").has_letters());
        assert!(Pattern::new("  ").is_unconstrained());
        assert!(!Pattern::new("?").is_unconstrained());
    }

    #[test]
    fn normalization_uppercases() {
        assert_eq!(Pattern::new("c?t").normalized(), "C?T");
        assert_eq!(Pattern::new("c?t").to_string(), "C?T");
    }
}
