//! Candidate generation
//!
//! Two independent paths feed the candidate pool:
//! - the phrase path matches whole phrases from the phrase corpus
//! - the word path fills each board word from the word corpus and joins the
//!   per-word choices with a cartesian product
//!
//! The word path is combinatorial: per-word list sizes multiply. An optional
//! cap stops composition early.

use super::matcher::Matcher;
use crate::core::{LetterSet, Pattern};
use crate::corpus::Corpus;
use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Phrases that match the whole board
///
/// Only phrases with the same number of words are considered.
#[must_use]
pub fn phrase_candidates(
    pattern: &Pattern,
    phrases: &[String],
    forbidden: LetterSet,
) -> Vec<String> {
    let matcher = Matcher::compile(pattern, forbidden);
    let word_count = pattern.word_count();

    phrases
        .par_iter()
        .filter(|phrase| phrase.split(' ').count() == word_count)
        .filter(|phrase| matcher.matches(phrase))
        .cloned()
        .collect()
}

/// Words that fit a single board word
///
/// Duplicate corpus entries are collapsed; corpus order is kept.
#[must_use]
pub fn segment_words<'a>(
    segment: &Pattern,
    words: &'a [String],
    forbidden: LetterSet,
) -> Vec<&'a str> {
    let matcher = Matcher::compile(segment, forbidden);

    let matching: Vec<&str> = words
        .par_iter()
        .filter(|word| matcher.matches(word))
        .map(String::as_str)
        .collect();

    let mut seen = FxHashSet::default();
    matching.into_iter().filter(|word| seen.insert(*word)).collect()
}

/// Board fills composed from the word corpus
///
/// Returns nothing if any board word has no fitting corpus word, or if the
/// board has no words at all. An empty board word (a doubled, leading or
/// trailing space) cannot be filled either. With `max_candidates` set, at most that many
/// combinations are produced.
#[must_use]
pub fn word_candidates(
    pattern: &Pattern,
    words: &[String],
    forbidden: LetterSet,
    max_candidates: Option<usize>,
) -> Vec<String> {
    let segments = pattern.segments();
    if segments.is_empty() || segments.iter().any(Pattern::is_empty) {
        return Vec::new();
    }

    let mut per_segment = Vec::with_capacity(segments.len());
    for segment in &segments {
        let fits = segment_words(segment, words, forbidden);
        debug!("segment {segment} has {} fitting words", fits.len());
        if fits.is_empty() {
            return Vec::new();
        }
        per_segment.push(fits);
    }

    let combinations = per_segment
        .iter()
        .map(Vec::len)
        .fold(1_usize, usize::saturating_mul);

    let limit = match max_candidates {
        Some(limit) if combinations > limit => {
            warn!(
                "pattern {pattern} has {combinations} word combinations, keeping the first {limit}"
            );
            limit
        }
        _ => combinations,
    };

    per_segment
        .iter()
        .map(|fits| fits.iter().copied())
        .multi_cartesian_product()
        .take(limit)
        .map(|combination| combination.join(" "))
        .collect()
}

/// Union of both paths, deduplicated and sorted
///
/// # Examples
/// ```
/// use wheel_solver::core::{LetterSet, Pattern};
/// use wheel_solver::corpus::Corpus;
/// use wheel_solver::solver::generate_candidates;
///
/// let corpus = Corpus::new(["CAT", "COT", "DOG"], ["CAT"]);
/// let pattern = Pattern::new("C_T");
///
/// let candidates = generate_candidates(&pattern, &corpus, pattern.revealed_letters(), None);
/// assert_eq!(candidates, vec!["CAT", "COT"]);
/// ```
#[must_use]
pub fn generate_candidates(
    pattern: &Pattern,
    corpus: &Corpus,
    forbidden: LetterSet,
    max_candidates: Option<usize>,
) -> Vec<String> {
    let from_phrases = phrase_candidates(pattern, corpus.phrases(), forbidden);
    let from_words = word_candidates(pattern, corpus.words(), forbidden, max_candidates);
    debug!(
        "pattern {pattern}: {} phrase matches, {} word compositions",
        from_phrases.len(),
        from_words.len()
    );

    let unique: FxHashSet<String> = from_phrases.into_iter().chain(from_words).collect();
    let mut candidates: Vec<String> = unique.into_iter().collect();
    candidates.sort_unstable();
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn phrase_path_requires_same_word_count() {
        let phrases = strings(&["HI THERE", "HITHERE", "HI THERE NOW"]);
        let pattern = Pattern::new("HI THERE");
        let found = phrase_candidates(&pattern, &phrases, pattern.revealed_letters());
        assert_eq!(found, vec!["HI THERE"]);
    }

    #[test]
    fn phrase_path_applies_forbidden_letters_to_unknowns_only() {
        let phrases = strings(&["GO NOW", "GO HOW", "SO NOW"]);
        let pattern = Pattern::new("GO _OW");
        let forbidden = pattern.revealed_letters().union(LetterSet::parse("H").unwrap());

        let found = phrase_candidates(&pattern, &phrases, forbidden);
        assert_eq!(found, vec!["GO NOW"]);
    }

    #[test]
    fn segment_words_filters_by_length_and_letters() {
        let words = strings(&["CAT", "CART", "COT", "CAT", "DOG"]);
        let fits = segment_words(&Pattern::new("C_T"), &words, LetterSet::EMPTY);
        assert_eq!(fits, vec!["CAT", "COT"]);
    }

    #[test]
    fn word_path_builds_cartesian_product() {
        let words = strings(&["HI", "HA", "HO", "YOU", "YOB"]);
        let pattern = Pattern::new("H_ YO_");
        // O is revealed, so HO cannot fill the first word
        let found = word_candidates(&pattern, &words, pattern.revealed_letters(), None);
        assert_eq!(found, vec!["HI YOU", "HI YOB", "HA YOU", "HA YOB"]);
    }

    #[test]
    fn word_path_short_circuits_on_empty_segment() {
        let words = strings(&["HI", "HO"]);
        let pattern = Pattern::new("H_ _____");
        let found = word_candidates(&pattern, &words, pattern.revealed_letters(), None);
        assert!(found.is_empty());
    }

    #[test]
    fn word_path_empty_pattern_yields_nothing() {
        let words = strings(&["A"]);
        assert!(word_candidates(&Pattern::new(""), &words, LetterSet::EMPTY, None).is_empty());
        assert!(word_candidates(&Pattern::new("   "), &words, LetterSet::EMPTY, None).is_empty());
    }

    #[test]
    fn word_path_keeps_whitespace_layout() {
        let words = strings(&["CAT", "DOG"]);
        for board in ["C_T  D_G", "C_T\tD_G", " C_T", "C_T "] {
            let pattern = Pattern::new(board);
            let found = word_candidates(&pattern, &words, pattern.revealed_letters(), None);
            assert!(found.is_empty(), "{board:?} produced {found:?}");
        }
    }

    #[test]
    fn every_candidate_matches_the_whole_board() {
        let corpus = Corpus::new(["CAT", "COT", "DOG", "DIG"], ["CAT DOG"]);
        for board in ["C_T D_G", "C_T  D_G", "C_T\tD_G", " C_T", "C_T "] {
            let pattern = Pattern::new(board);
            let forbidden = pattern.revealed_letters();
            let matcher = Matcher::compile(&pattern, forbidden);
            let candidates = generate_candidates(&pattern, &corpus, forbidden, None);
            assert!(
                candidates.iter().all(|c| matcher.matches(c)),
                "{board:?} produced {candidates:?}"
            );
        }
    }

    #[test]
    fn word_path_respects_cap() {
        let words = strings(&["AB", "CD", "EF"]);
        let pattern = Pattern::new("__ __");
        let found = word_candidates(&pattern, &words, LetterSet::EMPTY, Some(4));
        assert_eq!(found.len(), 4);
        assert_eq!(found[0], "AB AB");

        let uncapped = word_candidates(&pattern, &words, LetterSet::EMPTY, None);
        assert_eq!(uncapped.len(), 9);
    }

    #[test]
    fn union_deduplicates_and_sorts() {
        let corpus = Corpus::new(["HI", "THERE", "HO"], ["HI THERE"]);
        let pattern = Pattern::new("H_ THERE");
        let candidates = generate_candidates(&pattern, &corpus, pattern.revealed_letters(), None);
        assert_eq!(candidates, vec!["HI THERE", "HO THERE"]);
    }

    #[test]
    fn only_phrase_path_when_no_words_fit() {
        let corpus = Corpus::new(["A", "I"], ["HI THERE"]);
        let pattern = Pattern::new("__ _____");
        let candidates = generate_candidates(&pattern, &corpus, LetterSet::EMPTY, None);
        assert_eq!(candidates, vec!["HI THERE"]);
    }
}
