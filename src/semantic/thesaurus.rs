//! Sense lookup and lemma extraction shared by the scorers

use super::knowledge::{LexicalDatabase, SENSE_NAME_SEPARATOR, Sense};
use super::lemmatizer::Lemmatizer;
use crate::core::{Word, is_wordlike, tokenize_lower};
use rustc_hash::FxHashSet;

/// A knowledge base paired with the lemmatizer that reads it
pub struct Thesaurus {
    db: Box<dyn LexicalDatabase + Send + Sync>,
    lemmatizer: Lemmatizer,
}

impl Thesaurus {
    #[must_use]
    pub fn new(db: impl LexicalDatabase + Send + Sync + 'static) -> Self {
        Self {
            db: Box::new(db),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Senses of a candidate answer, primary first
    ///
    /// Tries the word as written, then its lemma, so `CATS` finds the
    /// senses recorded under `cat`.
    #[must_use]
    pub fn senses(&self, word: &Word) -> &[Sense] {
        let form = word.to_lowercase();
        let senses = self.db.senses(&form);
        if !senses.is_empty() {
            return senses;
        }
        let lemma = self.lemmatizer.lemmatize(self.db.as_ref(), &form);
        self.db.senses(&lemma)
    }

    /// Gloss of the primary sense, if the word has any sense
    #[must_use]
    pub fn primary_definition(&self, word: &Word) -> Option<&str> {
        self.senses(word).first().map(|sense| sense.definition.as_str())
    }

    /// Lemma set of free text (clue or definition)
    ///
    /// Punctuation-only tokens are dropped so that a shared comma or full
    /// stop never counts as overlap.
    #[must_use]
    pub fn text_lemmas(&self, text: &str) -> FxHashSet<String> {
        self.lemmas(tokenize_lower(text))
    }

    /// Lemma set of a sense label (`cat.n.01`)
    #[must_use]
    pub fn name_lemmas(&self, name: &str) -> FxHashSet<String> {
        self.lemmas(name.split(SENSE_NAME_SEPARATOR).map(str::to_lowercase))
    }

    fn lemmas<S: AsRef<str>>(&self, tokens: impl IntoIterator<Item = S>) -> FxHashSet<String> {
        tokens
            .into_iter()
            .filter(|token| is_wordlike(token.as_ref()))
            .map(|token| self.lemmatizer.lemmatize(self.db.as_ref(), token.as_ref()))
            .collect()
    }
}
