//! Letter sets over the 26-letter alphabet
//!
//! A `LetterSet` stores membership for `A..=Z` as a 26-bit mask. It backs both
//! the attempted-letter set and the forbidden-letter set used when matching
//! unknown cells.

use std::fmt;
use thiserror::Error;

/// The uppercase alphabet, in order
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Error type for invalid letter input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not a letter A-Z")]
    NotALetter(char),
}

/// A set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Alphabet index (0-25) for an uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn index_of(letter: char) -> Option<usize> {
        if letter.is_ascii_uppercase() {
            Some(letter as usize - 'A' as usize)
        } else {
            None
        }
    }

    /// Insert a letter, returning `false` if it is not an uppercase ASCII letter
    #[inline]
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::index_of(letter) {
            Some(index) => {
                self.0 |= 1 << index;
                true
            }
            None => false,
        }
    }

    /// Check membership; non-letters are never members
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::index_of(letter) {
            Some(index) => self.0 & (1 << index) != 0,
            None => false,
        }
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ALPHABET.into_iter().filter(move |&letter| self.contains(letter))
    }

    /// Parse user-supplied attempted letters
    ///
    /// Letters are accepted in any case. Commas and whitespace are treated as
    /// separators and skipped.
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` for any other non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use wheel_solver::core::LetterSet;
    ///
    /// let set = LetterSet::parse("r, s,T").unwrap();
    /// assert_eq!(set.iter().collect::<String>(), "RST");
    ///
    /// assert!(LetterSet::parse("a1").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut set = Self::new();
        for ch in input.chars() {
            if ch == ',' || ch.is_whitespace() {
                continue;
            }
            if !set.insert(ch.to_ascii_uppercase()) {
                return Err(LetterError::NotALetter(ch));
            }
        }
        Ok(set)
    }
}

impl FromIterator<char> for LetterSet {
    /// Collect letters, uppercasing them and silently skipping non-letters
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter.to_ascii_uppercase());
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
