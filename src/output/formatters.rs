//! Formatting utilities for terminal output

/// Format a score the way results are shown: two decimals
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Create a bar for a score in `0.0..=1.0`
///
/// Scores above 1.0 fill the bar; negative scores leave it empty.
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    // Cast is safe: the ratio is clamped to [0, 1]
    let filled = (score.clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Describe a pattern for headings: `any length` when unconstrained
#[must_use]
pub fn describe_pattern(normalized: &str) -> String {
    if normalized.trim().is_empty() {
        "any length".to_string()
    } else {
        normalized.to_string()
    }
}
