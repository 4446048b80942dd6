//! Wheel of Fortune Solver - CLI
//!
//! Solves a partially revealed board against word and phrase lists and
//! suggests the next letter to call.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wheel_solver::{
    commands::{SolveConfig, solve_puzzle},
    corpus::{Corpus, CorpusPaths, load_corpus},
    output::{print_letter_table, print_solve_report},
    solver::{Heuristics, Solver},
};

#[derive(Parser)]
#[command(
    name = "wheel_solver",
    about = "Wheel of Fortune solver: candidate fills, ranking and next-letter advice",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding words.txt and phrases.txt
    #[arg(short, long, global = true, default_value = "data")]
    data: PathBuf,

    /// Word list file (overrides <DATA>/words.txt)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Phrase list file (overrides <DATA>/phrases.txt)
    #[arg(long, global = true)]
    phrases: Option<PathBuf>,

    #[command(flatten)]
    tuning: TuningArgs,
}

/// Heuristic weights and limits
#[derive(Args)]
struct TuningArgs {
    /// Stop composing word-list fills after this many (0 = unbounded)
    #[arg(long, global = true, default_value = "250000")]
    max_candidates: usize,

    /// Rank bonus for fills found verbatim in the phrase list
    #[arg(long, global = true, default_value = "100")]
    phrase_bonus: u32,

    /// Extra letter credit for phrase-list fills, as a multiple of their weight
    #[arg(long, global = true, default_value = "10")]
    phrase_multiplier: i64,

    /// Weight for letters that appear in no candidate
    #[arg(long, global = true, default_value = "-1", allow_negative_numbers = true)]
    absent_penalty: i64,
}

impl TuningArgs {
    fn heuristics(&self) -> Heuristics {
        Heuristics {
            phrase_bonus: self.phrase_bonus,
            phrase_letter_multiplier: self.phrase_multiplier,
            absent_letter_penalty: self.absent_penalty,
            max_candidates: (self.max_candidates > 0).then_some(self.max_candidates),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find, rank and print candidate solutions for a board
    Solve {
        /// The board, '_' for unknown letters, e.g. "TH_ QU_CK _RO_N _O_"
        pattern: String,

        /// Letters already called, e.g. "RSTLNE" or "r,s,t"
        #[arg(short, long)]
        attempted: Option<String>,

        /// Number of ranked solutions to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Show scores and the full letter table
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print only the next-letter recommendations for a board
    Letters {
        /// The board, '_' for unknown letters
        pattern: String,

        /// Letters already called
        #[arg(short, long)]
        attempted: Option<String>,
    },
}

/// Resolve corpus file locations from the CLI flags
///
/// Files named explicitly must exist; the defaults inside `--data` may be absent.
fn corpus_paths(cli: &Cli) -> CorpusPaths {
    let mut paths = CorpusPaths::in_dir(&cli.data);
    if let Some(words) = &cli.words {
        paths = paths.with_words(words);
    }
    if let Some(phrases) = &cli.phrases {
        paths = paths.with_phrases(phrases);
    }
    paths
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let corpus = load_corpus(&corpus_paths(&cli)).context("could not load corpus")?;
    let solver = Solver::new(&corpus, cli.tuning.heuristics());

    match &cli.command {
        Commands::Solve {
            pattern,
            attempted,
            top,
            verbose,
        } => run_solve_command(&solver, pattern, attempted.as_deref(), *top, *verbose),
        Commands::Letters { pattern, attempted } => {
            run_letters_command(&solver, pattern, attempted.as_deref())
        }
    }
}

fn run_solve_command(
    solver: &Solver<'_>,
    pattern: &str,
    attempted: Option<&str>,
    top: usize,
    verbose: bool,
) -> Result<()> {
    warn_if_empty(solver.corpus());

    let config = SolveConfig::new(pattern, attempted)
        .context("invalid --attempted letters")?
        .with_top(top);
    let report = solve_puzzle(config, solver);

    print_solve_report(&report, verbose);
    Ok(())
}

fn run_letters_command(solver: &Solver<'_>, pattern: &str, attempted: Option<&str>) -> Result<()> {
    warn_if_empty(solver.corpus());

    let config = SolveConfig::new(pattern, attempted).context("invalid --attempted letters")?;
    let report = solve_puzzle(config, solver);

    print_letter_table(&report.result.next_letter, 26);
    Ok(())
}

fn warn_if_empty(corpus: &Corpus) {
    if corpus.is_empty() {
        log::warn!("word and phrase lists are both empty; every letter will score as absent");
    }
}
