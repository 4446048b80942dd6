//! Command implementations

pub mod solve;

pub use solve::{ScoredCandidate, SolveConfig, SolveReport, solve_puzzle};
