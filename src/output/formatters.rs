//! Formatting utilities for terminal output

use crate::core::{Cell, Pattern};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value.max(0.0) / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter weight relative to the strongest letter
///
/// Penalized (negative) weights render as an empty bar.
#[must_use]
pub fn weight_bar(weight: i64, max_weight: i64, width: usize) -> String {
    create_progress_bar(weight as f64, max_weight as f64, width)
}

/// Render a board with visible tiles, e.g. `C_T` → `[C][ ][T]`
#[must_use]
pub fn board_tiles(pattern: &Pattern) -> String {
    pattern
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Fixed(' ') => "   ".to_string(),
            Cell::Fixed(ch) => format!("[{ch}]"),
            Cell::Unknown => "[ ]".to_string(),
        })
        .collect()
}
