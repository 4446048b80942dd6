//! Corpus loading utilities
//!
//! Reads one-entry-per-line text files into a [`Corpus`]. The default data
//! directory layout is:
//!
//! ```text
//! data/
//!   words.txt     # one word per line
//!   phrases.txt   # one phrase per line
//! ```

use super::Corpus;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the word list inside a data directory
pub const WORDS_FILE_NAME: &str = "words.txt";
/// File name of the phrase list inside a data directory
pub const PHRASES_FILE_NAME: &str = "phrases.txt";

/// Error type for corpus loading
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Locations of the two corpus files
///
/// A required file must exist. An optional file that is missing loads as an
/// empty list with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub words: PathBuf,
    pub phrases: PathBuf,
    pub words_required: bool,
    pub phrases_required: bool,
}

impl CorpusPaths {
    /// Default file names inside `dir`, both optional
    #[must_use]
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            words: dir.join(WORDS_FILE_NAME),
            phrases: dir.join(PHRASES_FILE_NAME),
            words_required: false,
            phrases_required: false,
        }
    }

    /// Use an explicit word list, which must then exist
    #[must_use]
    pub fn with_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.words = path.into();
        self.words_required = true;
        self
    }

    /// Use an explicit phrase list, which must then exist
    #[must_use]
    pub fn with_phrases(mut self, path: impl Into<PathBuf>) -> Self {
        self.phrases = path.into();
        self.phrases_required = true;
        self
    }
}

impl Default for CorpusPaths {
    fn default() -> Self {
        Self::in_dir("data")
    }
}

/// Load both lists into a corpus
///
/// # Errors
///
/// Returns `CorpusError::Read` if a required file is missing or any existing
/// file cannot be read.
///
/// # Examples
/// ```no_run
/// use wheel_solver::corpus::{CorpusPaths, load_corpus};
///
/// let corpus = load_corpus(&CorpusPaths::in_dir("data")).unwrap();
/// println!("Loaded {} words", corpus.words().len());
/// ```
pub fn load_corpus(paths: &CorpusPaths) -> Result<Corpus, CorpusError> {
    let words = read_lines(&paths.words, paths.words_required)?
        .map(|content| parse_words(&content))
        .unwrap_or_default();
    let phrases = read_lines(&paths.phrases, paths.phrases_required)?
        .map(|content| parse_phrases(&content))
        .unwrap_or_default();

    let corpus = Corpus::new(words, phrases);
    info!(
        "loaded corpus: {} words from {}, {} phrases from {}",
        corpus.words().len(),
        paths.words.display(),
        corpus.phrases().len(),
        paths.phrases.display()
    );
    Ok(corpus)
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `CorpusError::Read` if the file cannot be read.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let content = read_lines(path.as_ref(), true)?.unwrap_or_default();
    Ok(parse_words(&content))
}

/// Load a phrase list from a file
///
/// # Errors
///
/// Returns `CorpusError::Read` if the file cannot be read.
pub fn load_phrases<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let content = read_lines(path.as_ref(), true)?.unwrap_or_default();
    Ok(parse_phrases(&content))
}

/// Words: one per line, trimmed and uppercased, blank lines skipped
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Phrases: one per line, normalized with [`normalize_phrase`], blanks skipped
#[must_use]
pub fn parse_phrases(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize_phrase)
        .filter(|phrase| !phrase.is_empty())
        .collect()
}

/// Normalize a phrase for board matching
///
/// Uppercases, turns punctuation into spaces (keeping letters, digits,
/// apostrophes and double quotes), and collapses whitespace runs.
///
/// # Examples
/// ```
/// use wheel_solver::corpus::loader::normalize_phrase;
///
/// assert_eq!(normalize_phrase("  rock-and-roll,  baby!"), "ROCK AND ROLL BABY");
/// assert_eq!(normalize_phrase("don't stop"), "DON'T STOP");
/// ```
#[must_use]
pub fn normalize_phrase(line: &str) -> String {
    let cleaned: String = line
        .to_uppercase()
        .chars()
        .map(|ch| {
            if ch.is_ascii_uppercase() || ch.is_ascii_digit() || matches!(ch, ' ' | '\'' | '"') {
                ch
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read a file, mapping a missing optional file to `None`
fn read_lines(path: &Path, required: bool) -> Result<Option<String>, CorpusError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            warn!(
                "corpus file {} not found, continuing with an empty list",
                path.display()
            );
            Ok(None)
        }
        Err(source) => Err(CorpusError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
