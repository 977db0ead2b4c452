//! Terminal output formatting
//!
//! Display utilities for solve results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{write_candidates, write_solve_result};
