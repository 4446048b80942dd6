//! Core domain types for puzzle boards
//!
//! This module contains the fundamental domain types: letter sets and board
//! patterns. Everything here is pure and cheap to construct per solve.

mod letters;
mod pattern;

pub use letters::{ALPHABET, LetterError, LetterSet};
pub use pattern::{Cell, PLACEHOLDER, Pattern};
