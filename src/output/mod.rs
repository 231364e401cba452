//! Terminal output formatting
//!
//! Display utilities for boards, feedback and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_help, print_inspect_report, print_outcome, print_palette, print_score,
    print_turn_feedback,
};
