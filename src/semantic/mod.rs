//! Semantic ranking of candidate answers
//!
//! Two strategies implement [`SemanticScorer`]: dictionary overlap (always
//! available) and embedding similarity (available when a vector model
//! loads). [`ScorerKind::initialize`] picks one at startup.

pub mod dictionary;
pub mod embedding;
pub mod knowledge;
mod lemmatizer;
pub mod strategy;
mod thesaurus;

pub use dictionary::DictionaryScorer;
pub use embedding::{EmbeddingError, EmbeddingScorer, TextEmbedder, WordVectors};
pub use knowledge::{KnowledgeError, LexicalDatabase, Sense, SenseDatabase};
pub use lemmatizer::Lemmatizer;
pub use strategy::{RankedCandidate, ScorerKind, SemanticScorer};
pub use thesaurus::Thesaurus;
