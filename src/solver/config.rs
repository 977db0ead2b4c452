//! Solver tunables

/// Engine configuration
///
/// The defaults reproduce the standard behavior: three results, a
/// 100-word fallback, and a length window of ±3 around `1.5 ×` the
/// clue's token count when the pattern pins no letters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Maximum candidates returned per solve
    pub max_results: usize,
    /// Lexicon prefix used when the pattern cannot be compiled
    pub fallback_limit: usize,
    /// Allowed distance from the estimated answer length
    pub length_tolerance: usize,
    /// Letters expected per clue token
    pub length_factor: f64,
    /// After a remembered answer, also list the best other candidates
    pub fill_after_feedback: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            fallback_limit: 100,
            length_tolerance: 3,
            length_factor: 1.5,
            fill_after_feedback: false,
        }
    }
}
