//! Save file utilities
//!
//! A save file holds exactly one board save image, no framing or version
//! byte. See [`Board::to_bytes`] for the layout.

use crate::core::Board;
use std::fs;
use std::io;
use std::path::Path;

/// Load a board from a save file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an
/// `InvalidData` error if it is too short to hold a board header.
///
/// # Examples
/// ```no_run
/// use mastermind::savefile::load_board;
///
/// let board = load_board("game.mm").unwrap();
/// println!("{} rows of {} pegs", board.max_rows(), board.slots());
/// ```
pub fn load_board<P: AsRef<Path>>(path: P) -> io::Result<Board> {
    let data = fs::read(path)?;
    Board::from_bytes(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a board to a save file, replacing any existing file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_board<P: AsRef<Path>>(path: P, board: &Board) -> io::Result<()> {
    fs::write(path, board.to_bytes())
}
