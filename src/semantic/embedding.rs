//! Embedding ranking by cosine similarity
//!
//! The clue and every definition of a candidate are encoded into a shared
//! vector space. A candidate's base score is its best definition's cosine
//! similarity to the clue; a small penalty is then subtracted for letter
//! counts far from the clue's token count:
//!
//! ```text
//! score = max(0, similarity - min(0.1, 0.03 * |letters - clue_tokens|))
//! ```

use super::dictionary::{DictionaryScorer, NO_DEFINITION};
use super::strategy::{RankedCandidate, SemanticScorer, score_candidates, top_ranked};
use super::thesaurus::Thesaurus;
use crate::core::{Word, tokenize, tokenize_lower};
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cap on the length penalty
pub const MAX_LENGTH_PENALTY: f64 = 0.1;
/// Penalty per letter of difference between answer length and clue tokens
pub const LENGTH_PENALTY_STEP: f64 = 0.03;

/// Failures of an embedding backend
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("cannot read embedding model {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: expected {expected} dimensions, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("embedding model contains no vectors")]
    EmptyModel,
    #[error("embedding backend failed: {0}")]
    Backend(String),
}

/// Encodes text into a fixed-dimension vector
pub trait TextEmbedder {
    /// Encode a piece of text
    ///
    /// # Errors
    /// Returns `EmbeddingError` if the backend cannot encode the text.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Static word-vector model with mean pooling
///
/// Reads GloVe-style text files (`token v1 v2 ... vn` per line). A leading
/// word2vec header line (`count dimension`) is skipped.
#[derive(Debug, Clone)]
pub struct WordVectors {
    vectors: FxHashMap<String, Vec<f32>>,
    dimension: usize,
}

impl WordVectors {
    /// Load a model file
    ///
    /// # Errors
    /// Returns `EmbeddingError` if the file is unreadable, malformed, ragged,
    /// or empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EmbeddingError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse model text
    ///
    /// # Errors
    /// Same conditions as [`WordVectors::from_file`], minus I/O.
    pub fn parse(text: &str) -> Result<Self, EmbeddingError> {
        let mut vectors = FxHashMap::default();
        let mut dimension = None;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };
            let values = fields
                .map(str::parse::<f32>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| EmbeddingError::Malformed {
                    line: line_no,
                    reason: e.to_string(),
                })?;

            if index == 0 && is_header(token, &values) {
                continue;
            }
            if values.is_empty() {
                return Err(EmbeddingError::Malformed {
                    line: line_no,
                    reason: format!("token '{token}' has no vector"),
                });
            }

            let expected = *dimension.get_or_insert(values.len());
            if values.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    line: line_no,
                    expected,
                    found: values.len(),
                });
            }
            vectors.insert(token.to_lowercase(), values);
        }

        let dimension = dimension.ok_or(EmbeddingError::EmptyModel)?;
        Ok(Self { vectors, dimension })
    }

    /// Number of tokens with vectors
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
}

impl TextEmbedder for WordVectors {
    /// Mean of the known token vectors; all zeros when no token is known
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut sum = vec![0.0_f32; self.dimension];
        let mut known = 0_usize;

        for token in tokenize_lower(text) {
            if let Some(vector) = self.vectors.get(&token) {
                for (total, value) in sum.iter_mut().zip(vector) {
                    *total += value;
                }
                known += 1;
            }
        }

        if known > 0 {
            let count = known as f32;
            for total in &mut sum {
                *total /= count;
            }
        }
        Ok(sum)
    }
}

fn is_header(token: &str, values: &[f32]) -> bool {
    values.len() == 1 && token.parse::<usize>().is_ok()
}

/// Cosine similarity, 0.0 when either vector has zero length
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Penalty for an answer length far from the clue's token count
#[must_use]
pub fn length_penalty(word_len: usize, clue_tokens: usize) -> f64 {
    (LENGTH_PENALTY_STEP * word_len.abs_diff(clue_tokens) as f64).min(MAX_LENGTH_PENALTY)
}

/// Embedding similarity scorer, available when a model loads
pub struct EmbeddingScorer<'a> {
    thesaurus: &'a Thesaurus,
    embedder: Box<dyn TextEmbedder + Send + Sync>,
}

impl<'a> EmbeddingScorer<'a> {
    #[must_use]
    pub fn new(thesaurus: &'a Thesaurus, embedder: impl TextEmbedder + Send + Sync + 'static) -> Self {
        Self {
            thesaurus,
            embedder: Box::new(embedder),
        }
    }

    fn score_word(&self, clue_vector: &[f32], clue_tokens: usize, word: &Word) -> RankedCandidate {
        let senses = self.thesaurus.senses(word);
        let definitions: Vec<&str> = if senses.is_empty() {
            vec![word.text()]
        } else {
            senses.iter().map(|sense| sense.definition.as_str()).collect()
        };

        let best = definitions
            .into_iter()
            .filter_map(|definition| match self.embedder.encode(definition) {
                Ok(vector) => Some((cosine_similarity(clue_vector, &vector), definition)),
                Err(e) => {
                    debug!("Skipping definition of {word}: {e}");
                    None
                }
            })
            .fold(None, |best: Option<(f64, &str)>, (similarity, definition)| match best {
                Some((top, _)) if top >= similarity => best,
                _ => Some((similarity, definition)),
            });

        let (similarity, definition) = best.unwrap_or((0.0, NO_DEFINITION));
        let score = (similarity - length_penalty(word.len(), clue_tokens)).max(0.0);
        RankedCandidate::new(word.clone(), score, definition)
    }
}

impl SemanticScorer for EmbeddingScorer<'_> {
    fn rank(
        &self,
        clue: &str,
        candidates: &[Word],
        excluded: &FxHashSet<Word>,
        limit: usize,
    ) -> Vec<RankedCandidate> {
        let clue_vector = match self.embedder.encode(clue) {
            Ok(vector) => vector,
            Err(e) => {
                warn!("Cannot encode clue ({e}); using dictionary ranking");
                return DictionaryScorer::new(self.thesaurus).rank(clue, candidates, excluded, limit);
            }
        };
        let clue_tokens = tokenize(clue).len();
        debug!(
            "Embedding ranking {} candidates against {clue_tokens} clue tokens",
            candidates.len()
        );

        let scored = score_candidates(candidates, excluded, |word| {
            self.score_word(&clue_vector, clue_tokens, word)
        });
        top_ranked(scored, limit)
    }
}
