//! Puzzle pattern representation
//!
//! A pattern is the partially revealed puzzle board, e.g. `TH_ QU_CK _RO_N _O_`:
//! - `_` marks an unknown letter
//! - a single space separates words
//! - every other character is literal and must appear as-is
//!
//! Input is uppercased on construction, so `th_` and `TH_` are the same pattern.

use super::LetterSet;
use std::convert::Infallible;
use std::fmt;

/// Marker for an unrevealed letter
pub const PLACEHOLDER: char = '_';

/// A single position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A revealed letter, space, or other literal character
    Fixed(char),
    /// An unrevealed letter
    Unknown,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        if ch == PLACEHOLDER {
            Self::Unknown
        } else {
            Self::Fixed(ch)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A normalized puzzle pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    text: String,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Create a pattern from raw board text
    ///
    /// Never fails: malformed characters become literal cells that only match
    /// themselves.
    ///
    /// # Examples
    /// ```
    /// use wheel_solver::core::{Cell, Pattern};
    ///
    /// let pattern = Pattern::new("c_t");
    /// assert_eq!(pattern.text(), "C_T");
    /// assert_eq!(pattern.cells(), &[Cell::Fixed('C'), Cell::Unknown, Cell::Fixed('T')]);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let text = text.to_uppercase();
        let cells = text.chars().map(Cell::from_char).collect();
        Self { text, cells }
    }

    /// The normalized (uppercased) pattern text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells (characters), including spaces
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of words on the board
    ///
    /// Words are separated by single spaces. Tabs and other whitespace are
    /// literal cells, and each extra space adds an empty word.
    #[must_use]
    pub fn word_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.split(' ').count()
        }
    }

    /// Number of unrevealed cells
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_unknown()).count()
    }

    /// Split the board into one pattern per word
    ///
    /// Splits on single spaces only, so a doubled, leading or trailing space
    /// yields an empty segment.
    ///
    /// # Examples
    /// ```
    /// use wheel_solver::core::Pattern;
    ///
    /// let segments = Pattern::new("HI TH_R_").segments();
    /// assert_eq!(segments.len(), 2);
    /// assert_eq!(segments[1].text(), "TH_R_");
    /// ```
    #[must_use]
    pub fn segments(&self) -> Vec<Self> {
        if self.text.is_empty() {
            return Vec::new();
        }
        self.text.split(' ').map(Self::new).collect()
    }

    /// Letters already revealed on the board
    ///
    /// A revealed letter was necessarily guessed, so these always belong to
    /// the attempted set.
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                Cell::Fixed(ch) if ch.is_ascii_uppercase() => Some(*ch),
                _ => None,
            })
            .collect()
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::str::FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
