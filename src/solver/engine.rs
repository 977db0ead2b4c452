//! Main clue solver interface

use super::SolverConfig;
use super::filter::filter_candidates;
use crate::core::{Pattern, Word};
use crate::feedback::{FeedbackError, FeedbackKey, FeedbackStore};
use crate::lexicon::Lexicon;
use crate::semantic::{RankedCandidate, SemanticScorer, Thesaurus};
use log::{debug, info};
use rustc_hash::FxHashSet;

/// Definition shown for candidates returned without a clue
pub const NO_CLUE: &str = "No clue provided";

/// Definition shown for a remembered answer the knowledge base doesn't know
pub const USER_PROVIDED: &str = "User-provided";

/// Outcome of one solve, kept so it can later be confirmed
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    key: FeedbackKey,
    candidates: Vec<RankedCandidate>,
}

impl SolveResult {
    /// The (clue, normalized pattern) this result answers
    #[must_use]
    pub const fn key(&self) -> &FeedbackKey {
        &self.key
    }

    /// Candidates, best first
    #[must_use]
    pub fn candidates(&self) -> &[RankedCandidate] {
        &self.candidates
    }

    #[must_use]
    pub fn top(&self) -> Option<&RankedCandidate> {
        self.candidates.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Main crossword clue solver
///
/// Filters the lexicon by pattern, answers from remembered feedback when
/// possible, and otherwise ranks the survivors with the given scorer.
pub struct ClueSolver<'a, S: SemanticScorer> {
    scorer: S,
    lexicon: &'a Lexicon,
    thesaurus: &'a Thesaurus,
    feedback: FeedbackStore,
    config: SolverConfig,
    excluded: FxHashSet<Word>,
    last_result: Option<SolveResult>,
}

impl<'a, S: SemanticScorer> ClueSolver<'a, S> {
    /// Create a solver with the default configuration
    ///
    /// # Parameters
    /// - `scorer`: Ranking strategy for filtered candidates
    /// - `lexicon`: Candidate answers, in preference order
    /// - `thesaurus`: Definitions for remembered answers
    /// - `feedback`: Previously confirmed or corrected answers
    #[must_use]
    pub fn new(
        scorer: S,
        lexicon: &'a Lexicon,
        thesaurus: &'a Thesaurus,
        feedback: FeedbackStore,
    ) -> Self {
        Self {
            scorer,
            lexicon,
            thesaurus,
            feedback,
            config: SolverConfig::default(),
            excluded: FxHashSet::default(),
            last_result: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    /// The most recent solve, if any
    #[must_use]
    pub const fn last_result(&self) -> Option<&SolveResult> {
        self.last_result.as_ref()
    }

    /// Solve a clue under an optional letter pattern
    ///
    /// Returns at most `max_results` candidates, best first. The result is
    /// also kept as the last result for [`Self::confirm`].
    pub fn solve(&mut self, clue: &str, pattern: &str) -> SolveResult {
        let pattern = Pattern::new(pattern);
        let key = FeedbackKey::new(clue, &pattern);
        let candidates = self.candidates_for(clue, &pattern, &key);

        info!(
            "Solved {key}: {} candidate(s){}",
            candidates.len(),
            candidates
                .first()
                .map(|c| format!(", top {}", c.word))
                .unwrap_or_default()
        );

        let result = SolveResult { key, candidates };
        self.last_result = Some(result.clone());
        result
    }

    fn candidates_for(&self, clue: &str, pattern: &Pattern, key: &FeedbackKey) -> Vec<RankedCandidate> {
        let limit = self.config.max_results;
        let matches: Vec<Word> = filter_candidates(self.lexicon, pattern, clue, &self.config)
            .into_iter()
            .cloned()
            .collect();
        debug!("{} candidates fit '{pattern}'", matches.len());

        if clue.trim().is_empty() {
            return matches
                .into_iter()
                .take(limit)
                .map(|word| RankedCandidate::new(word, 0.0, NO_CLUE))
                .collect();
        }

        if let Some(remembered) = self.feedback.lookup(key)
            && matches.contains(remembered)
        {
            debug!("Answering {key} from feedback: {remembered}");
            let definition = self
                .thesaurus
                .primary_definition(remembered)
                .unwrap_or(USER_PROVIDED);
            let mut ranked = vec![RankedCandidate::new(remembered.clone(), 1.0, definition)];

            if self.config.fill_after_feedback && limit > 1 {
                let rest: Vec<Word> = matches.into_iter().filter(|w| w != remembered).collect();
                ranked.extend(self.scorer.rank(clue, &rest, &self.excluded, limit - 1));
            }
            return ranked;
        }

        self.scorer.rank(clue, &matches, &self.excluded, limit)
    }

    /// Remember the top candidate of the last solve for this clue and pattern
    ///
    /// # Errors
    /// Returns `FeedbackError::NothingToConfirm` unless the last solve was
    /// for exactly this clue and pattern and produced a candidate. Persisting
    /// errors are passed through; the answer is remembered for the session
    /// regardless.
    pub fn confirm(&mut self, clue: &str, pattern: &str) -> Result<Word, FeedbackError> {
        let key = FeedbackKey::new(clue, &Pattern::new(pattern));
        let word = self
            .last_result
            .as_ref()
            .filter(|result| result.key == key)
            .and_then(SolveResult::top)
            .map(|top| top.word.clone())
            .ok_or(FeedbackError::NothingToConfirm)?;

        self.feedback.record(key, word.clone())?;
        Ok(word)
    }

    /// Remember a user-supplied answer
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidWord` if `answer` isn't a valid word
    /// and `FeedbackError::PatternMismatch` if it doesn't fit `pattern`; the
    /// store is left untouched in both cases. Persisting errors are passed
    /// through.
    pub fn correct(&mut self, clue: &str, pattern: &str, answer: &str) -> Result<Word, FeedbackError> {
        let word = Word::new(answer)?;
        let pattern = Pattern::new(pattern);

        let fits = pattern
            .compile()
            .is_ok_and(|matcher| matcher.matches(&word));
        if !fits {
            return Err(FeedbackError::PatternMismatch {
                word: word.text().to_string(),
                pattern: pattern.normalized().to_string(),
            });
        }

        self.feedback.record(FeedbackKey::new(clue, &pattern), word.clone())?;
        Ok(word)
    }

    /// Skip a word in every later ranking
    pub fn exclude(&mut self, word: Word) {
        debug!("Excluding {word}");
        self.excluded.insert(word);
    }

    pub fn clear_exclusions(&mut self) {
        self.excluded.clear();
    }
}
