//! Clue solving
//!
//! Candidate filtering by pattern and clue length, plus the solver that
//! combines filtering, remembered feedback, and semantic ranking.

mod config;
mod engine;
mod filter;

pub use config::SolverConfig;
pub use engine::{ClueSolver, NO_CLUE, SolveResult, USER_PROVIDED};
pub use filter::{estimate_length, filter_candidates};
