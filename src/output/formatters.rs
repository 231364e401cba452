//! Formatting utilities for terminal output

use crate::core::{Color, EMPTY_CHAR, Feedback, Row};
use colored::{ColoredString, Colorize};

/// Terminal color for each palette entry
#[must_use]
pub const fn peg_rgb(color: Color) -> (u8, u8, u8) {
    match color.ordinal() {
        0 => (255, 0, 0),     // red
        1 => (0, 255, 255),   // aqua
        2 => (0, 160, 0),     // green
        3 => (255, 255, 255), // white
        4 => (165, 42, 42),   // brown
        5 => (255, 255, 0),   // yellow
        6 => (128, 0, 128),   // purple
        _ => (255, 165, 0),   // orange
    }
}

/// A peg code painted in its own color
#[must_use]
pub fn paint_peg(color: Color) -> ColoredString {
    let (r, g, b) = peg_rgb(color);
    color.code_char().to_string().truecolor(r, g, b).bold()
}

/// A row painted peg by peg, empty slots dimmed
#[must_use]
pub fn paint_row(row: &Row) -> String {
    row.slots()
        .iter()
        .map(|slot| match slot {
            Some(color) => format!("{} ", paint_peg(*color)),
            None => format!("{} ", EMPTY_CHAR.to_string().bright_black()),
        })
        .collect()
}

/// Feedback as key pegs: `●` red, `○` white, `·` miss
#[must_use]
pub fn feedback_marks(feedback: Feedback, slots: usize) -> String {
    let red = usize::from(feedback.red);
    let white = usize::from(feedback.white);
    let misses = slots.saturating_sub(red + white);

    format!("{}{}{}", "●".repeat(red), "○".repeat(white), "·".repeat(misses))
}
