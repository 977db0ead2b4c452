//! Dictionary ranking by lexical overlap
//!
//! Every candidate is scored by how many clue lemmas it shares with:
//! - the gloss of its primary sense (0.5 each)
//! - the label of each of its senses (0.7 each, per sense)
//! - the label of each hypernym of each sense (0.3 each, per hypernym)
//!
//! The displayed definition is always the primary gloss, whichever sense
//! earned the points.

use super::strategy::{RankedCandidate, SemanticScorer, score_candidates, top_ranked};
use super::thesaurus::Thesaurus;
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;

/// Weight per clue lemma found in the primary definition
pub const DEFINITION_WEIGHT: f64 = 0.5;
/// Weight per clue lemma found in a sense label
pub const SENSE_NAME_WEIGHT: f64 = 0.7;
/// Weight per clue lemma found in a hypernym label
pub const HYPERNYM_WEIGHT: f64 = 0.3;

/// Shown for candidates the knowledge base does not know
pub const NO_DEFINITION: &str = "No definition";

/// Lexical overlap scorer, always available
pub struct DictionaryScorer<'a> {
    thesaurus: &'a Thesaurus,
}

impl<'a> DictionaryScorer<'a> {
    #[must_use]
    pub const fn new(thesaurus: &'a Thesaurus) -> Self {
        Self { thesaurus }
    }

    /// Score one candidate against pre-lemmatized clue text
    #[must_use]
    pub fn score_word(&self, clue_lemmas: &FxHashSet<String>, word: &Word) -> RankedCandidate {
        let senses = self.thesaurus.senses(word);
        let Some(primary) = senses.first() else {
            return RankedCandidate::new(word.clone(), 0.0, NO_DEFINITION);
        };

        let definition_lemmas = self.thesaurus.text_lemmas(&primary.definition);
        let mut score = overlap(clue_lemmas, &definition_lemmas) * DEFINITION_WEIGHT;

        for sense in senses {
            let name_lemmas = self.thesaurus.name_lemmas(&sense.name);
            score += overlap(clue_lemmas, &name_lemmas) * SENSE_NAME_WEIGHT;

            for hypernym in &sense.hypernyms {
                let hyper_lemmas = self.thesaurus.name_lemmas(hypernym);
                score += overlap(clue_lemmas, &hyper_lemmas) * HYPERNYM_WEIGHT;
            }
        }

        RankedCandidate::new(word.clone(), score, primary.definition.clone())
    }
}

impl SemanticScorer for DictionaryScorer<'_> {
    fn rank(
        &self,
        clue: &str,
        candidates: &[Word],
        excluded: &FxHashSet<Word>,
        limit: usize,
    ) -> Vec<RankedCandidate> {
        let clue_lemmas = self.thesaurus.text_lemmas(clue);
        debug!(
            "Dictionary ranking {} candidates against lemmas {clue_lemmas:?}",
            candidates.len()
        );

        let scored = score_candidates(candidates, excluded, |word| {
            self.score_word(&clue_lemmas, word)
        });
        top_ranked(scored, limit)
    }
}

fn overlap(a: &FxHashSet<String>, b: &FxHashSet<String>) -> f64 {
    a.intersection(b).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;
    use crate::semantic::knowledge::{Sense, SenseDatabase};

    fn thesaurus() -> Thesaurus {
        let mut db = SenseDatabase::new();
        db.insert(
            "cat",
            [
                Sense::new(
                    "cat.n.01",
                    "feline mammal usually having thick soft fur and no ability to roar",
                )
                .with_hypernym("feline.n.01"),
                Sense::new("guy.n.01", "an informal term for a youth or man")
                    .with_hypernym("man.n.01"),
            ],
        );
        db.insert(
            "dog",
            [Sense::new(
                "dog.n.01",
                "a member of the genus Canis that has been domesticated by man",
            )
            .with_hypernym("canine.n.02")
            .with_hypernym("domestic_animal.n.01")],
        );
        db.insert(
            "cot",
            [Sense::new("cot.n.01", "a small bed that folds up for storage")],
        );
        Thesaurus::new(db)
    }

    fn rank(thesaurus: &Thesaurus, clue: &str, words: &[&str]) -> Vec<RankedCandidate> {
        DictionaryScorer::new(thesaurus).rank(
            clue,
            &words_from_slice(words),
            &FxHashSet::default(),
            3,
        )
    }

    #[test]
    fn unknown_word_scores_zero_with_no_definition() {
        let thesaurus = thesaurus();
        let ranked = rank(&thesaurus, "Feline pet", &["XYZZY"]);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].score.abs() < f64::EPSILON);
        assert_eq!(ranked[0].definition, NO_DEFINITION);
    }

    #[test]
    fn empty_candidates_give_empty_result() {
        let thesaurus = thesaurus();
        assert!(rank(&thesaurus, "Feline pet", &[]).is_empty());
    }

    #[test]
    fn feline_clue_prefers_cat() {
        let thesaurus = thesaurus();
        let ranked = rank(&thesaurus, "Feline pet", &["DOG", "COT", "CAT"]);

        assert_eq!(ranked[0].word.text(), "CAT");
        // "feline" in the gloss (0.5) and in the hypernym label (0.3)
        assert!((ranked[0].score - 0.8).abs() < 1e-9);
        assert!(ranked.iter().skip(1).all(|r| r.score.abs() < f64::EPSILON));
    }

    #[test]
    fn sense_label_overlap_counts_for_every_sense() {
        let thesaurus = thesaurus();
        // "guy" matches the second sense label; "man" matches its hypernym
        let ranked = rank(&thesaurus, "Guy, man", &["CAT"]);
        assert!((ranked[0].score - (SENSE_NAME_WEIGHT + HYPERNYM_WEIGHT)).abs() < 1e-9);
        // Definition stays the primary gloss
        assert!(ranked[0].definition.starts_with("feline mammal"));
    }

    #[test]
    fn ties_keep_filter_order() {
        let thesaurus = thesaurus();
        let ranked = rank(&thesaurus, "Quantum flux", &["DOG", "COT", "CAT", "XYZZY"]);
        let texts: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
        assert_eq!(texts, ["DOG", "COT", "CAT"]);
    }

    #[test]
    fn results_are_bounded_and_sorted() {
        let thesaurus = thesaurus();
        let ranked = rank(
            &thesaurus,
            "A small bed for a feline",
            &["XYZZY", "DOG", "COT", "CAT", "PLUGH"],
        );
        assert!(ranked.len() <= 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn excluded_words_are_skipped() {
        let thesaurus = thesaurus();
        let excluded: FxHashSet<Word> = [Word::new("CAT").unwrap()].into_iter().collect();
        let ranked = DictionaryScorer::new(&thesaurus).rank(
            "Feline pet",
            &words_from_slice(&["CAT", "DOG"]),
            &excluded,
            3,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word.text(), "DOG");
    }
}
