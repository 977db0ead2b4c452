//! Feedback keys and their textual form
//!
//! A key pairs the clue exactly as typed with the uppercased pattern. On
//! disk it is written as a quoted tuple, `('Feline pet', 'C?T')`, so
//! existing feedback files keep working. Strings are single-quoted unless
//! they contain a single quote and no double quote.

use super::FeedbackError;
use crate::core::Pattern;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Lookup key for remembered answers
///
/// Clue text is compared exactly: no case folding or whitespace cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackKey {
    clue: String,
    pattern: String,
}

impl FeedbackKey {
    #[must_use]
    pub fn new(clue: impl Into<String>, pattern: &Pattern) -> Self {
        Self {
            clue: clue.into(),
            pattern: pattern.normalized().to_string(),
        }
    }

    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// The normalized (uppercase) pattern
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for FeedbackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        write_quoted(f, &self.clue)?;
        f.write_str(", ")?;
        write_quoted(f, &self.pattern)?;
        f.write_char(')')
    }
}

impl FromStr for FeedbackKey {
    type Err = FeedbackError;

    /// Parse the tuple form written by `Display`
    ///
    /// # Examples
    /// ```
    /// use clue_solver::feedback::FeedbackKey;
    ///
    /// let key: FeedbackKey = "('Feline pet', 'C?T')".parse().unwrap();
    /// assert_eq!(key.clue(), "Feline pet");
    /// assert_eq!(key.pattern(), "C?T");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FeedbackError::MalformedKey(s.to_string());
        let mut cursor = Cursor { chars: s.chars().peekable() };

        cursor.expect('(').ok_or_else(malformed)?;
        let clue = cursor.quoted().ok_or_else(malformed)?;
        cursor.expect(',').ok_or_else(malformed)?;
        cursor.skip_spaces();
        let pattern = cursor.quoted().ok_or_else(malformed)?;
        cursor.expect(')').ok_or_else(malformed)?;
        if cursor.chars.next().is_some() {
            return Err(malformed());
        }

        Ok(Self { clue, pattern })
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c < ' ' || c == '\x7f' => write!(f, "\\x{:02x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

struct Cursor<'s> {
    chars: std::iter::Peekable<std::str::Chars<'s>>,
}

impl Cursor<'_> {
    fn expect(&mut self, want: char) -> Option<()> {
        (self.chars.next()? == want).then_some(())
    }

    fn skip_spaces(&mut self) {
        while self.chars.next_if_eq(&' ').is_some() {}
    }

    fn quoted(&mut self) -> Option<String> {
        let quote = self.chars.next().filter(|c| *c == '\'' || *c == '"')?;
        let mut out = String::new();

        loop {
            match self.chars.next()? {
                c if c == quote => return Some(out),
                '\\' => out.push(self.escape()?),
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Option<char> {
        Some(match self.chars.next()? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'x' => self.hex(2)?,
            'u' => self.hex(4)?,
            'U' => self.hex(8)?,
            other => other,
        })
    }

    /// Exactly `digits` hex digits naming a code point
    fn hex(&mut self, digits: usize) -> Option<char> {
        let mut code = 0;
        for _ in 0..digits {
            code = code * 16 + self.chars.next()?.to_digit(16)?;
        }
        char::from_u32(code)
    }
}
