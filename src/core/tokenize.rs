//! Clue and definition tokenization
//!
//! Splits text into word and punctuation tokens, Treebank style: trailing
//! punctuation becomes its own token and English clitics are detached
//! (`don't` -> `do`, `n't`; `cat's` -> `cat`, `'s`).

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+(?:'\w+)*|\.\.\.|[^\w\s]").expect("token pattern is valid")
});

const CLITICS: [&str; 6] = ["'s", "'m", "'d", "'re", "'ve", "'ll"];

/// Split text into tokens, preserving case
///
/// # Examples
/// ```
/// use clue_solver::core::tokenize;
///
/// assert_eq!(tokenize("Feline pet, for short."), ["Feline", "pet", ",", "for", "short", "."]);
/// assert_eq!(tokenize("Don't stop"), ["Do", "n't", "stop"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for found in TOKEN_RE.find_iter(text) {
        split_clitic(found.as_str(), &mut tokens);
    }
    tokens
}

/// Lowercase and tokenize
#[must_use]
pub fn tokenize_lower(text: &str) -> Vec<String> {
    tokenize(&text.to_lowercase())
}

/// True for tokens carrying at least one letter or digit
#[must_use]
pub fn is_wordlike(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn split_clitic(token: &str, out: &mut Vec<String>) {
    let lower = token.to_ascii_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = token.len() - 3;
        out.push(token[..cut].to_string());
        out.push(token[cut..].to_string());
        return;
    }

    if let Some(clitic) = CLITICS
        .iter()
        .find(|clitic| lower.len() > clitic.len() && lower.ends_with(*clitic))
    {
        let cut = token.len() - clitic.len();
        out.push(token[..cut].to_string());
        out.push(token[cut..].to_string());
        return;
    }

    out.push(token.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Feline pet", &["Feline", "pet"])]
    #[case("Feline pet.", &["Feline", "pet", "."])]
    #[case("Wait...", &["Wait", "..."])]
    #[case("Cat's toy", &["Cat", "'s", "toy"])]
    #[case("can't", &["ca", "n't"])]
    #[case("O'Neil", &["O'Neil"])]
    #[case("  spaced   out  ", &["spaced", "out"])]
    #[case("", &[])]
    fn tokenizes(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(text), expected);
    }

    #[test]
    fn lowercase_tokens() {
        assert_eq!(tokenize_lower("Feline PET"), ["feline", "pet"]);
    }

    #[test]
    fn wordlike_tokens() {
        assert!(is_wordlike("cat"));
        assert!(is_wordlike("n't"));
        assert!(is_wordlike("01"));
        assert!(!is_wordlike(","));
        assert!(!is_wordlike("..."));
    }
}
