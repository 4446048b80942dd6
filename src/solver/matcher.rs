//! Compiled pattern matching
//!
//! A `Matcher` is a per-position predicate: fixed cells must match exactly,
//! unknown cells accept any uppercase letter outside the forbidden set.

use crate::core::{Cell, LetterSet, Pattern};

/// A pattern compiled against a forbidden-letter set
#[derive(Debug, Clone)]
pub struct Matcher {
    cells: Vec<Cell>,
    forbidden: LetterSet,
}

impl Matcher {
    /// Compile `pattern` so unknown cells reject `forbidden` letters
    ///
    /// Fixed cells are never filtered by `forbidden`.
    ///
    /// # Examples
    /// ```
    /// use wheel_solver::core::{LetterSet, Pattern};
    /// use wheel_solver::solver::Matcher;
    ///
    /// let forbidden = LetterSet::parse("CTO").unwrap();
    /// let matcher = Matcher::compile(&Pattern::new("C_T"), forbidden);
    ///
    /// assert!(matcher.matches("CAT"));
    /// assert!(!matcher.matches("COT")); // O was already tried
    /// assert!(!matcher.matches("CATS"));
    /// ```
    #[must_use]
    pub fn compile(pattern: &Pattern, forbidden: LetterSet) -> Self {
        Self {
            cells: pattern.cells().to_vec(),
            forbidden,
        }
    }

    /// Check whether a single character may fill `cell`
    #[inline]
    #[must_use]
    pub fn accepts(&self, cell: Cell, ch: char) -> bool {
        match cell {
            Cell::Fixed(expected) => ch == expected,
            Cell::Unknown => ch.is_ascii_uppercase() && !self.forbidden.contains(ch),
        }
    }

    /// Check a whole target string against the compiled pattern
    ///
    /// Targets of a different length never match, so word boundaries must
    /// line up exactly.
    #[must_use]
    pub fn matches(&self, target: &str) -> bool {
        let mut chars = target.chars();
        let all_cells_match = self
            .cells
            .iter()
            .all(|&cell| chars.next().is_some_and(|ch| self.accepts(cell, ch)));

        all_cells_match && chars.next().is_none()
    }
}
