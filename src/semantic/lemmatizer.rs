//! Noun lemmatizer
//!
//! Reduces an inflected form to its dictionary lemma the way WordNet's
//! morphy does for nouns. Candidates are the form itself plus either its
//! exception-table lemma or, for regular forms, every suffix substitution.
//! The shortest candidate the knowledge base knows wins; when it knows
//! none, the form passes through unchanged.

use super::knowledge::LexicalDatabase;
use rustc_hash::FxHashMap;

/// Noun suffix substitutions, tried in order
const NOUN_RULES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const IRREGULAR_NOUNS: [(&str, &str); 14] = [
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lice", "louse"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
    ("men", "man"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
];

/// Rule-based lemmatizer backed by a knowledge base vocabulary
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: FxHashMap<&'static str, &'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR_NOUNS.into_iter().collect(),
        }
    }

    /// Lemmatize a single lowercase token
    ///
    /// # Examples
    /// ```
    /// use clue_solver::semantic::{Lemmatizer, Sense, SenseDatabase};
    ///
    /// let mut db = SenseDatabase::new();
    /// db.insert("box", [Sense::new("box.n.01", "a rigid container")]);
    /// db.insert("mouse", [Sense::new("mouse.n.01", "a small rodent")]);
    ///
    /// let lemmatizer = Lemmatizer::new();
    /// assert_eq!(lemmatizer.lemmatize(&db, "boxes"), "box");
    /// assert_eq!(lemmatizer.lemmatize(&db, "mice"), "mouse");
    /// assert_eq!(lemmatizer.lemmatize(&db, "quickly"), "quickly");
    /// ```
    #[must_use]
    pub fn lemmatize(&self, db: &dyn LexicalDatabase, token: &str) -> String {
        let derived: Vec<String> = match self.exceptions.get(token) {
            Some(&lemma) => vec![lemma.to_string()],
            None => Self::apply_rules(token).collect(),
        };

        std::iter::once(token.to_string())
            .chain(derived)
            .filter(|candidate| db.contains_lemma(candidate))
            .min_by_key(String::len)
            .unwrap_or_else(|| token.to_string())
    }

    fn apply_rules(token: &str) -> impl Iterator<Item = String> + '_ {
        NOUN_RULES.iter().filter_map(move |(suffix, replacement)| {
            token
                .strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{stem}{replacement}"))
        })
    }
}
