//! Puzzle solving command
//!
//! Solves one board and collects what the CLI prints about it.

use crate::core::{LetterError, LetterSet, Pattern};
use crate::solver::ranker::score;
use crate::solver::{SolveResult, Solver};

/// Configuration for solving a board
pub struct SolveConfig {
    pub pattern: Pattern,
    pub attempted: LetterSet,
    pub top: usize,
}

impl SolveConfig {
    /// Build a config from raw CLI input
    ///
    /// # Errors
    ///
    /// Returns `LetterError` if `attempted` contains anything other than
    /// letters, commas and whitespace.
    pub fn new(pattern: &str, attempted: Option<&str>) -> Result<Self, LetterError> {
        let attempted = attempted.map(LetterSet::parse).transpose()?.unwrap_or_default();
        Ok(Self {
            pattern: Pattern::new(pattern),
            attempted,
            top: 10,
        })
    }

    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }
}

/// A ranked fill with its score
pub struct ScoredCandidate {
    pub text: String,
    pub score: u32,
    pub in_phrase_corpus: bool,
}

/// Everything reported about one solve
pub struct SolveReport {
    pub pattern: Pattern,
    pub result: SolveResult,
    /// The best `top` ranked fills
    pub top: Vec<ScoredCandidate>,
}

impl SolveReport {
    #[must_use]
    pub fn total_solutions(&self) -> usize {
        self.result.solutions.len()
    }

    /// Board cells still hidden
    #[must_use]
    pub fn hidden_cells(&self) -> usize {
        self.pattern.unknown_count()
    }
}

/// Solve a board using the given solver
#[must_use]
pub fn solve_puzzle(config: SolveConfig, solver: &Solver<'_>) -> SolveReport {
    let result = solver.solve_pattern(&config.pattern, config.attempted);

    let corpus = solver.corpus();
    let phrase_bonus = solver.heuristics().phrase_bonus;
    let top = result
        .ranked
        .iter()
        .take(config.top)
        .map(|text| ScoredCandidate {
            score: score(text, corpus.phrase_set(), phrase_bonus),
            in_phrase_corpus: corpus.contains_phrase(text),
            text: text.clone(),
        })
        .collect();

    SolveReport {
        pattern: config.pattern,
        result,
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::solver::Heuristics;

    fn setup_corpus() -> Corpus {
        Corpus::new(
            ["THE", "QUICK", "QUACK", "BROWN", "CROWN", "FOX", "BOX"],
            ["THE QUICK BROWN FOX"],
        )
    }

    #[test]
    fn config_parses_attempted_letters() {
        let config = SolveConfig::new("th_", Some("a, b")).unwrap();
        assert_eq!(config.pattern.text(), "TH_");
        assert_eq!(config.attempted.to_string(), "AB");
        assert_eq!(config.top, 10);
    }

    #[test]
    fn config_rejects_invalid_attempted() {
        assert!(SolveConfig::new("th_", Some("a;b")).is_err());
    }

    #[test]
    fn config_without_attempted_is_empty() {
        let config = SolveConfig::new("___", None).unwrap().with_top(3);
        assert!(config.attempted.is_empty());
        assert_eq!(config.top, 3);
    }

    #[test]
    fn solve_puzzle_reports_scored_top_candidates() {
        let corpus = setup_corpus();
        let solver = Solver::new(&corpus, Heuristics::default());
        let config = SolveConfig::new("TH_ QU_CK _RO_N _O_", None).unwrap();

        let report = solve_puzzle(config, &solver);

        // QUICK/QUACK for the second word, FOX/BOX for the fourth; C is revealed
        // so CROWN is out
        assert_eq!(report.total_solutions(), 4);
        assert_eq!(report.hidden_cells(), 6);
        let best = &report.top[0];
        assert_eq!(best.text, "THE QUICK BROWN FOX");
        assert!(best.in_phrase_corpus);
        assert!(best.score > 100);
        assert!(report.top[1..].iter().all(|c| !c.in_phrase_corpus));
    }

    #[test]
    fn solve_puzzle_respects_top_limit() {
        let corpus = setup_corpus();
        let solver = Solver::new(&corpus, Heuristics::default());
        let config = SolveConfig::new("TH_ QU_CK _RO_N _O_", None)
            .unwrap()
            .with_top(2);

        let report = solve_puzzle(config, &solver);

        assert_eq!(report.top.len(), 2);
        assert_eq!(report.total_solutions(), 4);
    }

    #[test]
    fn solve_puzzle_without_matches() {
        let corpus = setup_corpus();
        let solver = Solver::new(&corpus, Heuristics::default());
        let config = SolveConfig::new("______ ___", None).unwrap();

        let report = solve_puzzle(config, &solver);

        assert_eq!(report.total_solutions(), 0);
        assert!(report.top.is_empty());
        assert_eq!(report.result.next_letter.len(), 26);
    }
}
