//! Display functions for solve results

use super::formatters::{describe_pattern, format_score, score_bar};
use crate::semantic::RankedCandidate;
use crate::solver::SolveResult;
use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 10;

/// Write a solve result: a heading, then one block per candidate
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_solve_result(out: &mut impl Write, result: &SolveResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(RULE_WIDTH).cyan())?;
    writeln!(
        out,
        "Clue: {}   Pattern: {}",
        result.key().clue().bright_yellow().bold(),
        describe_pattern(result.key().pattern()).bright_white()
    )?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH).cyan())?;

    write_candidates(out, result.candidates())
}

/// Write ranked candidates, or "No solutions found." when there are none
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_candidates(out: &mut impl Write, candidates: &[RankedCandidate]) -> io::Result<()> {
    if candidates.is_empty() {
        return writeln!(out, "{}", "No solutions found.".red());
    }

    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(
            out,
            "{}. {} (Score: {}) {}",
            i + 1,
            candidate.word.text().bright_green().bold(),
            format_score(candidate.score).bright_yellow(),
            score_bar(candidate.score, BAR_WIDTH).green()
        )?;
        writeln!(out, "   {}", candidate.definition)?;
    }
    Ok(())
}
