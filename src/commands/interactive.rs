//! Interactive CLI mode
//!
//! Line-oriented session: ask for a clue and pattern, show the ranked
//! candidates, then ask whether the top answer was right. A "no" lets the
//! user supply the correct answer, which is remembered and re-solved.

use crate::feedback::FeedbackError;
use crate::output::write_solve_result;
use crate::semantic::SemanticScorer;
use crate::solver::ClueSolver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive session until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Rejected
/// corrections and feedback save failures are reported to the user and the
/// session continues.
pub fn run_interactive<S, R, W>(solver: &mut ClueSolver<S>, input: &mut R, out: &mut W) -> io::Result<()>
where
    S: SemanticScorer,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Crossword Clue Solver                         ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Enter a clue, then a letter pattern using ? for unknown letters")?;
    writeln!(out, "(for example C?T), or leave the pattern blank for any length.")?;
    writeln!(out, "Type 'quit' to exit.\n")?;

    loop {
        let Some(clue) = prompt(input, out, "Clue")? else {
            break;
        };
        if is_quit(&clue) {
            break;
        }
        if clue.is_empty() {
            writeln!(out, "{} Please enter a clue.\n", "✗".red())?;
            continue;
        }

        let Some(pattern) = prompt(input, out, "Pattern")? else {
            break;
        };

        let result = solver.solve(&clue, &pattern);
        write_solve_result(out, &result)?;
        if result.is_empty() {
            writeln!(out)?;
            continue;
        }

        let Some(answer) = prompt(input, out, "Was this helpful? (yes/no)")? else {
            break;
        };
        match answer.to_lowercase().as_str() {
            "yes" | "y" => match solver.confirm(&clue, &pattern) {
                Ok(word) => writeln!(out, "{} {}\n", "✓ Remembered".green(), word.text().bold())?,
                Err(e) => report(out, &e)?,
            },
            "no" | "n" => {
                let Some(correction) = prompt(input, out, "Correct answer (blank to skip)")? else {
                    break;
                };
                if correction.is_empty() {
                    writeln!(out)?;
                    continue;
                }
                match solver.correct(&clue, &pattern, &correction) {
                    Ok(word) => {
                        writeln!(out, "{} {}", "✓ Remembered".green(), word.text().bold())?;
                        let updated = solver.solve(&clue, &pattern);
                        write_solve_result(out, &updated)?;
                        writeln!(out)?;
                    }
                    Err(e) => report(out, &e)?,
                }
            }
            _ => writeln!(out)?,
        }
    }

    writeln!(out, "\nGoodbye!\n")
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

fn report(out: &mut impl Write, error: &FeedbackError) -> io::Result<()> {
    writeln!(out, "{} {error}\n", "✗".red())
}

/// Read one trimmed line after a prompt; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};
    use crate::feedback::{FeedbackKey, FeedbackStore};
    use crate::lexicon::Lexicon;
    use crate::lexicon::loader::words_from_slice;
    use crate::semantic::{DictionaryScorer, Sense, SenseDatabase, Thesaurus};
    use std::io::Cursor;

    fn fixtures() -> (Lexicon, Thesaurus) {
        let mut db = SenseDatabase::new();
        db.insert("cat", [Sense::new("cat.n.01", "feline mammal")]);
        db.insert("cot", [Sense::new("cot.n.01", "a small bed")]);
        (
            Lexicon::from_words(words_from_slice(&["CAT", "COT", "DOG"])).unwrap(),
            Thesaurus::new(db),
        )
    }

    type Remembered = Vec<(FeedbackKey, Word)>;

    fn session(script: &str, lexicon: &Lexicon, thesaurus: &Thesaurus) -> (String, Remembered) {
        let mut solver = ClueSolver::new(
            DictionaryScorer::new(thesaurus),
            lexicon,
            thesaurus,
            FeedbackStore::in_memory(),
        );
        let mut out = Vec::new();
        run_interactive(&mut solver, &mut Cursor::new(script.as_bytes()), &mut out).unwrap();

        let remembered = solver
            .feedback()
            .entries()
            .iter()
            .map(|(key, word)| (key.clone(), word.clone()))
            .collect();
        (String::from_utf8(out).unwrap(), remembered)
    }

    fn key(clue: &str, pattern: &str) -> FeedbackKey {
        FeedbackKey::new(clue, &Pattern::new(pattern))
    }

    #[test]
    fn yes_confirms_top_answer() {
        let (lexicon, thesaurus) = fixtures();
        let (text, remembered) = session("Feline pet\nC?T\nyes\nquit\n", &lexicon, &thesaurus);

        assert!(text.contains("feline mammal"));
        assert!(text.contains("Goodbye!"));
        assert_eq!(remembered, [(key("Feline pet", "C?T"), Word::new("CAT").unwrap())]);
    }

    #[test]
    fn no_with_correction_remembers_and_resolves() {
        let (lexicon, thesaurus) = fixtures();
        let (text, remembered) =
            session("Camp bed\nc?t\nno\nCOT\n", &lexicon, &thesaurus);

        assert!(text.contains("Remembered"));
        assert!(text.contains("1.00"));
        assert_eq!(remembered, [(key("Camp bed", "C?T"), Word::new("COT").unwrap())]);
    }

    #[test]
    fn mismatched_correction_is_reported() {
        let (lexicon, thesaurus) = fixtures();
        let (text, remembered) =
            session("Feline pet\nC?T\nno\nDOG\nquit\n", &lexicon, &thesaurus);

        assert!(text.contains("does not fit the pattern"));
        assert!(remembered.is_empty());
    }

    #[test]
    fn empty_result_skips_question() {
        let (lexicon, thesaurus) = fixtures();
        let (text, remembered) = session("Feline pet\nQ??\nexit\n", &lexicon, &thesaurus);

        assert!(text.contains("No solutions found."));
        assert!(!text.contains("Was this helpful?"));
        assert!(remembered.is_empty());
    }

    #[test]
    fn blank_clue_is_refused() {
        let (lexicon, thesaurus) = fixtures();
        let (text, remembered) = session("\nFeline pet\nC?T\nyes\nquit\n", &lexicon, &thesaurus);

        assert!(text.contains("Please enter a clue."));
        assert!(!text.contains("No clue provided"));
        // The next line is read as a clue, not as the pattern
        assert_eq!(remembered, [(key("Feline pet", "C?T"), Word::new("CAT").unwrap())]);
    }

    #[test]
    fn end_of_input_ends_session() {
        let (lexicon, thesaurus) = fixtures();
        let (text, _) = session("", &lexicon, &thesaurus);
        assert!(text.contains("Goodbye!"));
    }
}
