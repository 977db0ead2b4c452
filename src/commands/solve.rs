//! One-shot solve, confirm, and correct commands

use crate::core::Word;
use crate::feedback::FeedbackError;
use crate::output::write_solve_result;
use crate::semantic::SemanticScorer;
use crate::solver::{ClueSolver, SolveResult};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

/// Solve a clue and write the ranked candidates
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn run_solve<S: SemanticScorer>(
    solver: &mut ClueSolver<S>,
    clue: &str,
    pattern: &str,
    out: &mut impl Write,
) -> Result<SolveResult> {
    let result = solver.solve(clue, pattern);
    write_solve_result(out, &result).context("failed to write results")?;
    Ok(result)
}

/// Solve a clue, then remember its top candidate as the answer
///
/// # Errors
/// Returns an error if nothing was found to confirm, the feedback file
/// cannot be written, or the output cannot be written.
pub fn run_confirm<S: SemanticScorer>(
    solver: &mut ClueSolver<S>,
    clue: &str,
    pattern: &str,
    out: &mut impl Write,
) -> Result<Word> {
    run_solve(solver, clue, pattern, out)?;
    let word = solver
        .confirm(clue, pattern)
        .context("cannot confirm an answer")?;
    writeln!(out, "{} {}", "✓ Remembered".green(), word.text().bold())?;
    Ok(word)
}

/// Remember a user-supplied answer, then show the updated solve
///
/// # Errors
/// Returns an error if the answer is rejected, the feedback file cannot
/// be written, or the output cannot be written.
pub fn run_correct<S: SemanticScorer>(
    solver: &mut ClueSolver<S>,
    clue: &str,
    pattern: &str,
    answer: &str,
    out: &mut impl Write,
) -> Result<Word> {
    let word = solver
        .correct(clue, pattern, answer)
        .map_err(|e| match e {
            FeedbackError::InvalidWord(_) | FeedbackError::PatternMismatch { .. } => {
                anyhow::Error::new(e).context("correction rejected")
            }
            other => anyhow::Error::new(other).context("cannot save correction"),
        })?;
    writeln!(out, "{} {}", "✓ Remembered".green(), word.text().bold())?;
    run_solve(solver, clue, pattern, out)?;
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackStore;
    use crate::lexicon::Lexicon;
    use crate::lexicon::loader::words_from_slice;
    use crate::semantic::{DictionaryScorer, Sense, SenseDatabase, Thesaurus};

    fn fixtures() -> (Lexicon, Thesaurus) {
        let mut db = SenseDatabase::new();
        db.insert("cat", [Sense::new("cat.n.01", "feline mammal")]);
        (
            Lexicon::from_words(words_from_slice(&["CAT", "COT", "DOG"])).unwrap(),
            Thesaurus::new(db),
        )
    }

    #[test]
    fn solve_writes_ranked_candidates() {
        let (lexicon, thesaurus) = fixtures();
        let mut solver = ClueSolver::new(
            DictionaryScorer::new(&thesaurus),
            &lexicon,
            &thesaurus,
            FeedbackStore::in_memory(),
        );
        let mut out = Vec::new();

        let result = run_solve(&mut solver, "Feline pet", "C?T", &mut out).unwrap();
        assert_eq!(result.top().unwrap().word.text(), "CAT");
        assert!(String::from_utf8(out).unwrap().contains("feline mammal"));
    }

    #[test]
    fn confirm_records_top_candidate() {
        let (lexicon, thesaurus) = fixtures();
        let mut solver = ClueSolver::new(
            DictionaryScorer::new(&thesaurus),
            &lexicon,
            &thesaurus,
            FeedbackStore::in_memory(),
        );

        let word = run_confirm(&mut solver, "Feline pet", "C?T", &mut Vec::new()).unwrap();
        assert_eq!(word.text(), "CAT");
        assert_eq!(solver.feedback().len(), 1);
    }

    #[test]
    fn confirm_without_candidates_fails() {
        let (lexicon, thesaurus) = fixtures();
        let mut solver = ClueSolver::new(
            DictionaryScorer::new(&thesaurus),
            &lexicon,
            &thesaurus,
            FeedbackStore::in_memory(),
        );
        let mut out = Vec::new();

        assert!(run_confirm(&mut solver, "Feline pet", "Q??", &mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains("No solutions found."));
        assert!(solver.feedback().is_empty());
    }

    #[test]
    fn correct_rejects_mismatch_and_accepts_fit() {
        let (lexicon, thesaurus) = fixtures();
        let mut solver = ClueSolver::new(
            DictionaryScorer::new(&thesaurus),
            &lexicon,
            &thesaurus,
            FeedbackStore::in_memory(),
        );

        let rejected = run_correct(&mut solver, "Camp bed", "C?T", "DOG", &mut Vec::new());
        assert!(rejected.unwrap_err().to_string().contains("rejected"));
        assert!(solver.feedback().is_empty());

        let mut out = Vec::new();
        run_correct(&mut solver, "Camp bed", "C?T", "cot", &mut out).unwrap();
        assert_eq!(solver.last_result().unwrap().top().unwrap().word.text(), "COT");
        assert!(String::from_utf8(out).unwrap().contains("COT"));
    }
}
