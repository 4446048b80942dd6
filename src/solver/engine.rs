//! Main puzzle solver interface

use super::generator::generate_candidates;
use super::heuristics::Heuristics;
use super::ranker::rank_candidates;
use super::recommend::{LetterWeight, recommend_letters};
use crate::core::{LetterSet, Pattern};
use crate::corpus::Corpus;
use log::debug;

/// Result of solving one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// Every consistent fill, sorted alphabetically
    pub solutions: Vec<String>,
    /// The same fills, best first
    pub ranked: Vec<String>,
    /// Every unattempted letter, best guess first
    pub next_letter: Vec<LetterWeight>,
    /// Letters treated as attempted (explicit guesses plus revealed letters)
    pub attempted: LetterSet,
}

impl SolveResult {
    /// The top letter recommendation, if any letter is left to guess
    #[must_use]
    pub fn best_letter(&self) -> Option<LetterWeight> {
        self.next_letter.first().copied()
    }

    /// The top ranked fill, if any
    #[must_use]
    pub fn best_solution(&self) -> Option<&str> {
        self.ranked.first().map(String::as_str)
    }
}

/// Main puzzle solver
///
/// Borrows an immutable corpus, so one corpus can back many solvers and many
/// concurrent solves.
pub struct Solver<'a> {
    corpus: &'a Corpus,
    heuristics: Heuristics,
}

impl<'a> Solver<'a> {
    /// Create a new solver over `corpus`
    #[must_use]
    pub const fn new(corpus: &'a Corpus, heuristics: Heuristics) -> Self {
        Self { corpus, heuristics }
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }

    /// Solve a board given as text
    ///
    /// `attempted` holds letters already guessed; letters revealed on the
    /// board are added automatically.
    ///
    /// # Examples
    /// ```
    /// use wheel_solver::corpus::Corpus;
    /// use wheel_solver::solver::{Heuristics, Solver};
    ///
    /// let corpus = Corpus::new(["CAT", "COT", "CUT", "DOG"], Vec::<String>::new());
    /// let solver = Solver::new(&corpus, Heuristics::default());
    ///
    /// let result = solver.solve("c_t", None);
    /// assert_eq!(result.solutions, vec!["CAT", "COT", "CUT"]);
    /// assert_eq!(result.best_letter().unwrap().letter, 'A');
    /// ```
    #[must_use]
    pub fn solve(&self, pattern: &str, attempted: Option<LetterSet>) -> SolveResult {
        self.solve_pattern(&Pattern::new(pattern), attempted.unwrap_or_default())
    }

    /// Solve an already parsed board
    #[must_use]
    pub fn solve_pattern(&self, pattern: &Pattern, attempted: LetterSet) -> SolveResult {
        let attempted = attempted.union(pattern.revealed_letters());
        let forbidden = attempted;
        let phrase_set = self.corpus.phrase_set();

        let solutions = generate_candidates(
            pattern,
            self.corpus,
            forbidden,
            self.heuristics.max_candidates,
        );
        debug!(
            "pattern {pattern} with attempted [{attempted}]: {} solutions",
            solutions.len()
        );

        if solutions.is_empty() {
            let next_letter =
                recommend_letters::<String>(&[], attempted, None, phrase_set, &self.heuristics);
            return SolveResult {
                solutions,
                ranked: Vec::new(),
                next_letter,
                attempted,
            };
        }

        let ranked = rank_candidates(&solutions, phrase_set, self.heuristics.phrase_bonus);
        let next_letter = recommend_letters(&ranked, attempted, None, phrase_set, &self.heuristics);

        SolveResult {
            solutions,
            ranked,
            next_letter,
            attempted,
        }
    }
}
