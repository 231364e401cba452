//! Mastermind
//!
//! Game engine for the code-breaking board game: a hidden code of colored
//! pegs, rows of guesses, and red/white feedback on each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Board, Color, GameConfig};
//!
//! // 4 slots, 6 colors, 8 rows; code is red, aqua, green, white
//! let mut board = Board::new(GameConfig::default(), &[1, 2, 3, 4]);
//!
//! for (col, color) in [Color::RED, Color::AQUA, Color::WHITE, Color::GREEN]
//!     .into_iter()
//!     .enumerate()
//! {
//!     board.set_peg(0, col, color);
//! }
//! board.next_row_if_possible();
//!
//! let feedback = board.test_row(0);
//! println!("{} red, {} white", feedback.red, feedback.white);
//! assert_eq!(board.active_row(), Some(1));
//! ```

// Core domain types
pub mod core;

// Save file I/O
pub mod savefile;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
