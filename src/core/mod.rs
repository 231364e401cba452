//! Core game engine for Mastermind
//!
//! This module contains the board model, guess scoring and the save-image
//! codec. Nothing here performs I/O or prints; every failure is reported
//! as a `bool` or `Option` to the caller.

mod board;
pub mod codec;
mod config;
mod feedback;
mod peg;
mod row;

pub use board::{Board, GameOutcome, HEADER_LEN, LoadError, RowState, random_solution};
pub use config::{
    DEFAULT_COLORS, DEFAULT_ROWS, DEFAULT_SLOTS, GameConfig, MAX_COLORS, MAX_ROWS, MAX_SLOTS,
    MIN_COLORS, MIN_ROWS, MIN_SLOTS,
};
pub use feedback::Feedback;
pub use peg::{CLEAR_CHAR, Color, EMPTY_CHAR, PALETTE_SIZE};
pub use row::{Row, RowParseError, Slot};
