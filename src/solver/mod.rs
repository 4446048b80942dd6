//! Puzzle solving pipeline
//!
//! Pattern matching, candidate generation, ranking and next-letter
//! recommendation, tied together by [`Solver`].

mod engine;
pub mod generator;
pub mod heuristics;
pub mod matcher;
pub mod ranker;
pub mod recommend;

pub use engine::{SolveResult, Solver};
pub use generator::generate_candidates;
pub use heuristics::Heuristics;
pub use matcher::Matcher;
pub use ranker::rank_candidates;
pub use recommend::{LetterWeight, recommend_letters};
