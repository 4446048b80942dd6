//! Display functions for command results

use super::formatters::{board_tiles, weight_bar};
use crate::commands::SolveReport;
use crate::solver::LetterWeight;
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board:     {}  {}",
        board_tiles(&report.pattern).bright_white().bold(),
        format!("({} hidden)", report.hidden_cells()).bright_black()
    );
    let attempted = if report.result.attempted.is_empty() {
        "(none)".to_string()
    } else {
        report.result.attempted.to_string()
    };
    println!("Attempted: {}", attempted.bright_black());
    println!("{}", "─".repeat(60).cyan());

    let total = report.total_solutions();
    if total == 0 {
        println!("\n{}", "❌ No candidate solutions found".red().bold());
    } else {
        println!(
            "\n📋 {} candidate {}, top {}:",
            total.to_string().bright_cyan().bold(),
            if total == 1 { "solution" } else { "solutions" },
            report.top.len()
        );

        for (i, candidate) in report.top.iter().enumerate() {
            let marker = if candidate.in_phrase_corpus { "★" } else { " " };
            let text = if i == 0 {
                candidate.text.bright_green().bold()
            } else {
                candidate.text.bright_white()
            };

            if verbose {
                println!(
                    "  {:>3}. {} {text}  {}",
                    i + 1,
                    marker.bright_yellow(),
                    format!("(score {})", candidate.score).bright_black()
                );
            } else {
                println!("  {:>3}. {} {text}", i + 1, marker.bright_yellow());
            }
        }
    }

    print_letter_table(&report.result.next_letter, if verbose { 26 } else { 5 });
}

/// Print letter recommendations, best first
pub fn print_letter_table(letters: &[LetterWeight], limit: usize) {
    println!("\n🔤 {}", "Next letter:".bright_cyan().bold());

    let Some(best) = letters.first() else {
        println!("   {}", "every letter has been attempted".bright_black());
        return;
    };

    let max_weight = best.weight;
    for entry in letters.iter().take(limit) {
        let bar = weight_bar(entry.weight, max_weight, 30);
        let weight = if entry.weight < 0 {
            format!("{:>5}", entry.weight).red()
        } else {
            format!("{:>5}", entry.weight).bright_yellow()
        };
        println!("   {}  [{}] {weight}", entry.letter.to_string().bold(), bar.green());
    }

    if letters.len() > limit {
        println!(
            "   {}",
            format!("… {} more", letters.len() - limit).bright_black()
        );
    }
}
