//! Semantic ranking strategies
//!
//! Defines the `SemanticScorer` trait and the enum that selects the active
//! strategy once at startup.

use super::dictionary::DictionaryScorer;
use super::embedding::{EmbeddingScorer, WordVectors};
use super::thesaurus::Thesaurus;
use crate::core::Word;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A candidate answer with its relevance score and supporting definition
///
/// Scores are only comparable within a single ranking call.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub word: Word,
    pub score: f64,
    pub definition: String,
}

impl RankedCandidate {
    #[must_use]
    pub fn new(word: Word, score: f64, definition: impl Into<String>) -> Self {
        Self {
            word,
            score,
            definition: definition.into(),
        }
    }
}

/// A strategy for ranking filtered candidates against a clue
pub trait SemanticScorer {
    /// Rank `candidates` for `clue`, best first, keeping at most `limit`
    ///
    /// Words in `excluded` are skipped. Ties keep candidate order.
    fn rank(
        &self,
        clue: &str,
        candidates: &[Word],
        excluded: &FxHashSet<Word>,
        limit: usize,
    ) -> Vec<RankedCandidate>;
}

/// Enum wrapper over the available strategies
///
/// Chosen once by [`ScorerKind::initialize`]; callers rank through the
/// `SemanticScorer` trait without inspecting the variant.
pub enum ScorerKind<'a> {
    /// Lexical overlap with definitions, sense labels, and hypernyms
    Dictionary(DictionaryScorer<'a>),
    /// Cosine similarity of clue and definition embeddings
    Embedding(EmbeddingScorer<'a>),
}

impl SemanticScorer for ScorerKind<'_> {
    fn rank(
        &self,
        clue: &str,
        candidates: &[Word],
        excluded: &FxHashSet<Word>,
        limit: usize,
    ) -> Vec<RankedCandidate> {
        match self {
            Self::Dictionary(s) => s.rank(clue, candidates, excluded, limit),
            Self::Embedding(s) => s.rank(clue, candidates, excluded, limit),
        }
    }
}

impl<'a> ScorerKind<'a> {
    /// Pick the active strategy
    ///
    /// Uses embeddings when a model path is given and the model loads;
    /// otherwise falls back to dictionary ranking. Never fails.
    #[must_use]
    pub fn initialize(thesaurus: &'a Thesaurus, vectors: Option<&Path>) -> Self {
        let Some(path) = vectors else {
            info!("No embedding model configured; using dictionary ranking");
            return Self::Dictionary(DictionaryScorer::new(thesaurus));
        };

        match WordVectors::from_file(path) {
            Ok(model) => {
                info!(
                    "Loaded {} word vectors ({} dimensions) from {}",
                    model.len(),
                    model.dimension(),
                    path.display()
                );
                Self::Embedding(EmbeddingScorer::new(thesaurus, model))
            }
            Err(e) => {
                warn!("Embedding model unavailable ({e}); using dictionary ranking");
                Self::Dictionary(DictionaryScorer::new(thesaurus))
            }
        }
    }

    /// Short strategy name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dictionary(_) => "dictionary",
            Self::Embedding(_) => "embedding",
        }
    }
}

/// Sort by descending score and keep the best `limit`
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn top_ranked(mut ranked: Vec<RankedCandidate>, limit: usize) -> Vec<RankedCandidate> {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Score every non-excluded candidate, preserving candidate order
#[cfg(not(feature = "parallel"))]
pub(crate) fn score_candidates<F>(
    candidates: &[Word],
    excluded: &FxHashSet<Word>,
    score: F,
) -> Vec<RankedCandidate>
where
    F: Fn(&Word) -> RankedCandidate,
{
    candidates
        .iter()
        .filter(|word| !excluded.contains(*word))
        .map(score)
        .collect()
}

/// Score every non-excluded candidate on the rayon pool, preserving candidate order
#[cfg(feature = "parallel")]
pub(crate) fn score_candidates<F>(
    candidates: &[Word],
    excluded: &FxHashSet<Word>,
    score: F,
) -> Vec<RankedCandidate>
where
    F: Fn(&Word) -> RankedCandidate + Sync + Send,
{
    use rayon::prelude::*;

    candidates
        .par_iter()
        .filter(|word| !excluded.contains(*word))
        .map(score)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::knowledge::SenseDatabase;

    fn candidate(text: &str, score: f64) -> RankedCandidate {
        RankedCandidate::new(Word::new(text).unwrap(), score, "")
    }

    fn texts(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|r| r.word.text()).collect()
    }

    #[test]
    fn top_ranked_sorts_descending_and_truncates() {
        let ranked = top_ranked(
            vec![
                candidate("AA", 0.1),
                candidate("BB", 0.9),
                candidate("CC", 0.5),
                candidate("DD", 0.7),
            ],
            3,
        );
        assert_eq!(texts(&ranked), ["BB", "DD", "CC"]);
    }

    #[test]
    fn top_ranked_is_stable_on_ties() {
        let ranked = top_ranked(
            vec![
                candidate("AA", 0.0),
                candidate("BB", 0.5),
                candidate("CC", 0.0),
                candidate("DD", 0.5),
            ],
            4,
        );
        assert_eq!(texts(&ranked), ["BB", "DD", "AA", "CC"]);
    }

    #[test]
    fn score_candidates_skips_excluded() {
        let words = vec![Word::new("CAT").unwrap(), Word::new("DOG").unwrap()];
        let excluded: FxHashSet<Word> = [Word::new("CAT").unwrap()].into_iter().collect();
        let scored = score_candidates(&words, &excluded, |w| candidate(w.text(), 1.0));
        assert_eq!(texts(&scored), ["DOG"]);
    }

    #[test]
    fn initialize_without_model_uses_dictionary() {
        let thesaurus = Thesaurus::new(SenseDatabase::new());
        assert_eq!(ScorerKind::initialize(&thesaurus, None).name(), "dictionary");
    }

    #[test]
    fn initialize_with_missing_model_falls_back() {
        let thesaurus = Thesaurus::new(SenseDatabase::new());
        let path = std::env::temp_dir().join("clue_solver_no_such_vectors.txt");
        assert_eq!(
            ScorerKind::initialize(&thesaurus, Some(&path)).name(),
            "dictionary"
        );
    }
}
