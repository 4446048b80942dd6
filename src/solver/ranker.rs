//! Candidate ranking
//!
//! Score = one point per common letter (`ETAOINSHRDLU`) + a flat bonus when
//! the candidate is verbatim in the phrase corpus.

use super::heuristics::COMMON_LETTERS;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Base score of a single character
#[inline]
#[must_use]
pub fn letter_score(ch: char) -> u32 {
    u32::from(COMMON_LETTERS.contains(ch))
}

/// Full rank score for one candidate
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wheel_solver::solver::ranker::score;
///
/// let phrases: FxHashSet<String> = ["HI THERE".to_string()].into_iter().collect();
///
/// assert_eq!(score("ZZZ", &phrases, 100), 0);
/// assert_eq!(score("CAT", &phrases, 100), 2); // T and A
/// assert_eq!(score("HI THERE", &phrases, 100), 107);
/// ```
#[must_use]
pub fn score<S>(candidate: &str, phrase_set: &HashSet<String, S>, phrase_bonus: u32) -> u32
where
    S: std::hash::BuildHasher,
{
    let base: u32 = candidate.chars().map(letter_score).sum();
    if phrase_set.contains(candidate) {
        base.saturating_add(phrase_bonus)
    } else {
        base
    }
}

/// Order candidates best first
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn rank_candidates(
    candidates: &[String],
    phrase_set: &FxHashSet<String>,
    phrase_bonus: u32,
) -> Vec<String> {
    let mut scored: Vec<(&String, u32)> = candidates
        .iter()
        .map(|candidate| (candidate, score(candidate, phrase_set, phrase_bonus)))
        .collect();

    scored.sort_by_key(|&(_, points)| Reverse(points));
    scored.into_iter().map(|(candidate, _)| candidate.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase_set(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn letter_scores() {
        for ch in COMMON_LETTERS.chars() {
            assert_eq!(letter_score(ch), 1);
        }
        for ch in ['B', 'Z', 'Q', ' ', '\''] {
            assert_eq!(letter_score(ch), 0);
        }
    }

    #[test]
    fn ranks_by_common_letters() {
        let ranked = rank_candidates(&strings(&["ZZZ", "EAT", "BAT"]), &phrase_set(&[]), 100);
        assert_eq!(ranked, vec!["EAT", "BAT", "ZZZ"]);
    }

    #[test]
    fn phrase_bonus_outranks_letter_score() {
        let phrases = phrase_set(&["JAZZ BOX"]);
        let ranked = rank_candidates(&strings(&["NEAT SOIL", "JAZZ BOX"]), &phrases, 100);
        assert_eq!(ranked[0], "JAZZ BOX");
    }

    #[test]
    fn configured_bonus_is_used() {
        let phrases = phrase_set(&["BOX"]);
        assert_eq!(score("BOX", &phrases, 0), 1);
        assert_eq!(score("BOX", &phrases, 7), 8);
        assert_eq!(score("BOX", &phrases, u32::MAX), u32::MAX);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_candidates(&strings(&["CAT", "COT", "CUT"]), &phrase_set(&[]), 100);
        assert_eq!(ranked, vec!["CAT", "COT", "CUT"]);
    }

    #[test]
    fn ranked_is_permutation_with_non_increasing_scores() {
        let phrases = phrase_set(&["SO LONG"]);
        let candidates = strings(&["BY JOVE", "SO LONG", "NO RAIN", "QI ZAX"]);
        let ranked = rank_candidates(&candidates, &phrases, 100);

        let mut sorted_in = candidates.clone();
        let mut sorted_out = ranked.clone();
        sorted_in.sort();
        sorted_out.sort();
        assert_eq!(sorted_in, sorted_out);

        let scores: Vec<u32> = ranked.iter().map(|c| score(c, &phrases, 100)).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn empty_input() {
        assert!(rank_candidates(&[], &phrase_set(&[]), 100).is_empty());
    }
}
