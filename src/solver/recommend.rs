//! Next-letter recommendation
//!
//! Every unattempted letter in a candidate earns that candidate's weight, once
//! per occurrence. Candidates found verbatim in the phrase corpus earn an extra
//! `phrase_letter_multiplier` times their weight on top. Unattempted letters
//! that end up with nothing get the absent-letter penalty, which separates
//! "appears in no candidate" from "appears rarely".

use super::heuristics::Heuristics;
use crate::core::{ALPHABET, LetterSet};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::fmt;

/// A recommended letter with its accumulated weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterWeight {
    pub letter: char,
    pub weight: i64,
}

impl fmt::Display for LetterWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.letter, self.weight)
    }
}

/// Rank every unattempted letter, best guess first
///
/// `weights` gives one integer weight per candidate (uniform 1 when `None`).
/// A weight list shorter than `candidates` only covers that many candidates.
///
/// Ties keep first-seen order across `candidates`; penalized letters follow in
/// alphabetical order. The output is deterministic for a fixed candidate order.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wheel_solver::core::LetterSet;
/// use wheel_solver::solver::{Heuristics, recommend_letters};
///
/// let candidates = ["CAT", "COT", "CUT"];
/// let attempted = LetterSet::parse("CT").unwrap();
/// let letters = recommend_letters(&candidates, attempted, None, &FxHashSet::default(), &Heuristics::default());
///
/// assert_eq!(letters.len(), 24);
/// assert_eq!(letters[0].letter, 'A');
/// assert_eq!(letters[0].weight, 1);
/// assert_eq!(letters[3].weight, -1);
/// ```
#[must_use]
pub fn recommend_letters<C: AsRef<str>>(
    candidates: &[C],
    attempted: LetterSet,
    weights: Option<&[i64]>,
    phrase_set: &FxHashSet<String>,
    heuristics: &Heuristics,
) -> Vec<LetterWeight> {
    let uniform = vec![1_i64; candidates.len()];
    let weights = weights.unwrap_or(&uniform);

    let mut totals = [0_i64; 26];
    let mut seen = LetterSet::new();
    let mut first_seen: Vec<char> = Vec::new();

    for (candidate, &weight) in candidates.iter().zip(weights) {
        let candidate = candidate.as_ref();
        let phrase_credit = if phrase_set.contains(candidate) {
            weight.saturating_mul(heuristics.phrase_letter_multiplier)
        } else {
            0
        };
        let credit = weight.saturating_add(phrase_credit);

        for ch in candidate.chars() {
            if let Some(index) = LetterSet::index_of(ch)
                && !attempted.contains(ch)
            {
                totals[index] = totals[index].saturating_add(credit);
                if !seen.contains(ch) {
                    seen.insert(ch);
                    first_seen.push(ch);
                }
            }
        }
    }

    let total_of = |letter: char| LetterSet::index_of(letter).map_or(0, |index| totals[index]);

    let credited = first_seen
        .iter()
        .filter(|&&letter| total_of(letter) != 0)
        .map(|&letter| LetterWeight {
            letter,
            weight: total_of(letter),
        });

    let absent = ALPHABET
        .iter()
        .filter(|&&letter| !attempted.contains(letter) && total_of(letter) == 0)
        .map(|&letter| LetterWeight {
            letter,
            weight: heuristics.absent_letter_penalty,
        });

    let mut letters: Vec<LetterWeight> = credited.chain(absent).collect();
    letters.sort_by_key(|entry| Reverse(entry.weight));
    letters
}
