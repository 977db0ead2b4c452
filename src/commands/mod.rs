//! Command implementations

pub mod interactive;
pub mod solve;

pub use interactive::run_interactive;
pub use solve::{run_confirm, run_correct, run_solve};
