//! Candidate filtering
//!
//! Applies the compiled pattern to the lexicon in lexicon order. When the
//! pattern pins no letters, the answer length is also estimated from the
//! clue and only words near that length survive.

use super::SolverConfig;
use crate::core::{DEFAULT_LENGTHS, Pattern, Word, tokenize};
use crate::lexicon::Lexicon;
use log::{debug, warn};

/// Estimate the answer length from the clue's token count
///
/// `tokens × factor` truncated to a whole number of letters, clamped to
/// the default length range.
///
/// # Examples
/// ```
/// use clue_solver::solver::estimate_length;
///
/// assert_eq!(estimate_length("Feline pet", 1.5), 3);
/// assert_eq!(estimate_length("", 1.5), 2);
/// ```
#[must_use]
pub fn estimate_length(clue: &str, factor: f64) -> usize {
    let tokens = tokenize(clue).len();
    let estimate = (tokens as f64 * factor).floor() as usize;
    estimate.clamp(*DEFAULT_LENGTHS.start(), *DEFAULT_LENGTHS.end())
}

/// Words from the lexicon that fit the pattern, in lexicon order
///
/// Never fails: if the pattern cannot be compiled the first
/// `config.fallback_limit` lexicon words are returned instead.
#[must_use]
pub fn filter_candidates<'a>(
    lexicon: &'a Lexicon,
    pattern: &Pattern,
    clue: &str,
    config: &SolverConfig,
) -> Vec<&'a Word> {
    let matcher = match pattern.compile() {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!("Pattern '{pattern}' unusable ({e}); falling back to the first {} words", config.fallback_limit);
            return lexicon.words().iter().take(config.fallback_limit).collect();
        }
    };

    let mut matches: Vec<&Word> = lexicon
        .words()
        .iter()
        .filter(|word| matcher.matches(word))
        .collect();

    if !pattern.has_letters() {
        let estimate = estimate_length(clue, config.length_factor);
        matches.retain(|word| word.len().abs_diff(estimate) <= config.length_tolerance);
        debug!(
            "No letters pinned; estimated length {estimate}, {} words within ±{}",
            matches.len(),
            config.length_tolerance
        );
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;
    use rstest::rstest;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(words_from_slice(&[
            "AT", "CAT", "COT", "CUT", "DOG", "CATS", "CART", "CATTLE", "CATERPILLAR", "A",
            "ABCDEFGHIJKLMNO",
        ]))
        .unwrap()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[rstest]
    #[case("Feline pet", 3)]
    #[case("", 2)]
    #[case("One", 2)]
    #[case("One two three", 4)]
    #[case("Feline pet.", 4)]
    #[case("a b c d e", 7)]
    #[case("a b c d e f g h i j k l m n o p", 15)]
    fn estimates_length(#[case] clue: &str, #[case] expected: usize) {
        assert_eq!(estimate_length(clue, 1.5), expected);
    }

    #[rstest]
    #[case("C?T")]
    #[case("????")]
    #[case("CA??LE")]
    #[case("ZZZZZZZZZZZZZZZZZZZZ")]
    fn exact_length_only(#[case] pattern: &str) {
        let lexicon = lexicon();
        let pattern = Pattern::new(pattern);
        let length = pattern.normalized().chars().count();
        let matches = filter_candidates(&lexicon, &pattern, "A long clue of many words here", &SolverConfig::default());
        assert!(matches.iter().all(|w| w.len() == length));
    }

    #[test]
    fn letter_pattern_keeps_lexicon_order() {
        let lexicon = lexicon();
        let matches = filter_candidates(&lexicon, &Pattern::new("c?t"), "Feline pet", &SolverConfig::default());
        assert_eq!(texts(&matches), ["CAT", "COT", "CUT"]);
    }

    #[test]
    fn letter_pattern_ignores_clue_length() {
        let lexicon = lexicon();
        let matches = filter_candidates(
            &lexicon,
            &Pattern::new("CATERPILLA?"),
            "Bug",
            &SolverConfig::default(),
        );
        assert_eq!(texts(&matches), ["CATERPILLAR"]);
    }

    #[test]
    fn empty_pattern_uses_length_estimate() {
        let lexicon = lexicon();
        let matches = filter_candidates(&lexicon, &Pattern::new(""), "Feline pet", &SolverConfig::default());
        // Estimate 3: lengths 2..=6 in the default range
        assert_eq!(
            texts(&matches),
            ["AT", "CAT", "COT", "CUT", "DOG", "CATS", "CART", "CATTLE"]
        );
    }

    #[test]
    fn odd_token_count_truncates_estimate() {
        let lexicon = Lexicon::from_words(words_from_slice(&["ABCDEFGH", "CAT"])).unwrap();
        // Three tokens: estimate 4, so at most 7 letters
        let matches = filter_candidates(&lexicon, &Pattern::new(""), "Feline pet.", &SolverConfig::default());
        assert_eq!(texts(&matches), ["CAT"]);
    }

    #[test]
    fn wildcard_only_pattern_also_uses_estimate() {
        let lexicon = lexicon();
        let long_clue = "a b c d e f g h i j";
        let matches = filter_candidates(&lexicon, &Pattern::new("???"), long_clue, &SolverConfig::default());
        // Estimate 15: three-letter words are too far away
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_pattern_stays_in_default_range() {
        let lexicon = lexicon();
        let config = SolverConfig {
            length_tolerance: 20,
            ..SolverConfig::default()
        };
        let matches = filter_candidates(&lexicon, &Pattern::new("  "), "clue", &config);
        assert!(matches.iter().all(|w| DEFAULT_LENGTHS.contains(&w.len())));
        assert!(!texts(&matches).contains(&"A".to_string()));
    }

    #[test]
    fn no_matches_is_empty() {
        let lexicon = lexicon();
        let matches = filter_candidates(&lexicon, &Pattern::new("Q?Q"), "clue", &SolverConfig::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn uncompilable_pattern_falls_back_to_lexicon_prefix() {
        let lexicon = lexicon();
        let config = SolverConfig {
            fallback_limit: 3,
            ..SolverConfig::default()
        };
        let matches = filter_candidates(&lexicon, &Pattern::new("STRAßE"), "Street", &config);
        assert_eq!(texts(&matches), ["AT", "CAT", "COT"]);
    }
}
