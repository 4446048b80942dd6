//! Wheel of Fortune Solver
//!
//! Proposes fills for a partially revealed board, ranks them, and recommends
//! the next letter to guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wheel_solver::corpus::Corpus;
//! use wheel_solver::solver::{Heuristics, Solver};
//!
//! let corpus = Corpus::new(["THE", "QUICK", "BROWN", "FOX"], ["THE QUICK BROWN FOX"]);
//! let solver = Solver::new(&corpus, Heuristics::default());
//!
//! let result = solver.solve("TH_ QU_CK _RO_N _O_", None);
//! assert_eq!(result.ranked[0], "THE QUICK BROWN FOX");
//! println!("Next guess: {:?}", result.best_letter());
//! ```

// Core domain types
pub mod core;

// Word and phrase corpora
pub mod corpus;

// Solving pipeline
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
