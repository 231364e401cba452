//! Fresh game construction
//!
//! Builds the board a new game starts from, with either a typed or a
//! random solution.

use crate::core::{Board, GameConfig, Row};

/// Create a board for a new game
///
/// With `solution` set, the code is parsed against the config and must
/// fill every slot; otherwise a random solution is drawn.
///
/// # Errors
///
/// Returns an error if the solution text is malformed or has empty slots.
///
/// # Examples
/// ```
/// use mastermind::commands::new_board;
/// use mastermind::core::GameConfig;
///
/// let board = new_board(GameConfig::default(), Some("ragw")).unwrap();
/// assert_eq!(board.active_row(), Some(0));
/// assert!(new_board(GameConfig::default(), Some("ra-w")).is_err());
/// ```
pub fn new_board(config: GameConfig, solution: Option<&str>) -> Result<Board, String> {
    let Some(text) = solution else {
        return Ok(Board::random(config));
    };

    let row = Row::parse(text, config.slots(), config.colors())
        .map_err(|e| format!("Invalid solution: {e}"))?;
    if !row.is_full() {
        return Err("Invalid solution: every slot needs a peg".to_string());
    }

    Ok(Board::new(config, &row.to_codes()))
}
