//! Crossword Clue Solver
//!
//! Ranks candidate answers for a crossword clue. Candidates come from a word
//! list filtered by a letter pattern; they are ranked by how well their
//! dictionary senses match the clue, or by embedding similarity when a
//! vector model is available. Answers the user confirms or corrects are
//! remembered for the same clue and pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use clue_solver::feedback::FeedbackStore;
//! use clue_solver::lexicon::{Lexicon, loader::words_from_slice};
//! use clue_solver::semantic::{DictionaryScorer, Sense, SenseDatabase, Thesaurus};
//! use clue_solver::solver::ClueSolver;
//!
//! let lexicon = Lexicon::from_words(words_from_slice(&["CAT", "COT", "DOG"])).unwrap();
//!
//! let mut senses = SenseDatabase::new();
//! senses.insert("cat", [Sense::new("cat.n.01", "feline mammal usually having thick soft fur")]);
//! let thesaurus = Thesaurus::new(senses);
//!
//! let mut solver = ClueSolver::new(
//!     DictionaryScorer::new(&thesaurus),
//!     &lexicon,
//!     &thesaurus,
//!     FeedbackStore::in_memory(),
//! );
//!
//! let result = solver.solve("Feline pet", "C?T");
//! assert_eq!(result.top().unwrap().word.text(), "CAT");
//! ```

// Core domain types
pub mod core;

// Candidate word list
pub mod lexicon;

// Remembered answers
pub mod feedback;

// Knowledge base and ranking strategies
pub mod semantic;

// Filtering and the solver
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
