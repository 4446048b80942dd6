//! Word and phrase corpora
//!
//! A `Corpus` is the immutable snapshot the solver draws candidates from. It is
//! built once (from files via [`loader`] or from in-memory lists) and then
//! shared by reference across any number of solves.

pub mod loader;

use rustc_hash::FxHashSet;

pub use loader::{CorpusError, CorpusPaths, load_corpus};

/// Word list plus phrase list, uppercased
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<String>,
    phrases: Vec<String>,
    phrase_set: FxHashSet<String>,
}

impl Corpus {
    /// Build a corpus from in-memory lists
    ///
    /// Entries are trimmed and uppercased and blank entries are dropped. Words
    /// keep duplicates; phrases are deduplicated keeping the first occurrence.
    ///
    /// # Examples
    /// ```
    /// use wheel_solver::corpus::Corpus;
    ///
    /// let corpus = Corpus::new(["cat", "cot"], ["hi there", "HI THERE"]);
    /// assert_eq!(corpus.words(), &["CAT", "COT"]);
    /// assert_eq!(corpus.phrases(), &["HI THERE"]);
    /// assert!(corpus.contains_phrase("HI THERE"));
    /// ```
    pub fn new<W, P>(words: W, phrases: P) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize_entry(word.as_ref()))
            .collect();

        let mut phrase_set = FxHashSet::default();
        let phrases = phrases
            .into_iter()
            .filter_map(|phrase| normalize_entry(phrase.as_ref()))
            .filter(|phrase| phrase_set.insert(phrase.clone()))
            .collect();

        Self {
            words,
            phrases,
            phrase_set,
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Phrase membership set
    #[inline]
    #[must_use]
    pub const fn phrase_set(&self) -> &FxHashSet<String> {
        &self.phrase_set
    }

    /// Check whether `candidate` is verbatim a phrase-corpus entry
    #[inline]
    #[must_use]
    pub fn contains_phrase(&self, candidate: &str) -> bool {
        self.phrase_set.contains(candidate)
    }

    /// True when both lists are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }
}

fn normalize_entry(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
