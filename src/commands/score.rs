//! One-off scoring of a guess against a code

use crate::core::{Board, Feedback, GameConfig, MAX_SLOTS, MIN_ROWS, MIN_SLOTS, PALETTE_SIZE, Row};

/// Score `guess` against `solution`, both given as color codes
///
/// Runs the guess through a scratch board so the result is exactly what a
/// game would report.
///
/// # Errors
///
/// Returns an error if either code is malformed, has empty slots, or the
/// two differ in length.
///
/// # Examples
/// ```
/// use mastermind::commands::score_codes;
///
/// let feedback = score_codes("ragw", "rawg").unwrap();
/// assert_eq!((feedback.red, feedback.white), (2, 2));
/// ```
pub fn score_codes(solution: &str, guess: &str) -> Result<Feedback, String> {
    let slots = solution.trim().chars().count();
    if !(MIN_SLOTS..=MAX_SLOTS).contains(&slots) {
        return Err(format!(
            "Codes must have between {MIN_SLOTS} and {MAX_SLOTS} pegs, got {slots}"
        ));
    }

    let config = GameConfig::new(slots, PALETTE_SIZE, MIN_ROWS);
    let parse = |label: &str, text: &str| -> Result<Row, String> {
        let row = Row::parse(text, slots, PALETTE_SIZE)
            .map_err(|e| format!("Invalid {label}: {e}"))?;
        if row.is_full() {
            Ok(row)
        } else {
            Err(format!("Invalid {label}: every slot needs a peg"))
        }
    };
    let solution = parse("solution", solution)?;
    let guess = parse("guess", guess)?;

    let mut board = Board::new(config, &solution.to_codes());
    for (col, color) in guess.slots().iter().enumerate() {
        if let Some(color) = color {
            board.set_peg(0, col, *color);
        }
    }
    Ok(board.test_row(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_match_board() {
        assert_eq!(score_codes("ragw", "rawg"), Ok(Feedback::new(2, 2)));
        assert_eq!(score_codes("ragw", "rrrr"), Ok(Feedback::new(1, 0)));
        assert_eq!(score_codes("ragw", "ragw"), Ok(Feedback::new(4, 0)));
        assert_eq!(score_codes("ragw", "bbyy"), Ok(Feedback::new(0, 0)));
        assert_eq!(score_codes("rrgg", "ggrr"), Ok(Feedback::new(0, 4)));
    }

    #[test]
    fn rejects_mismatched_codes() {
        assert!(score_codes("ragw", "rag").is_err());
        assert!(score_codes("ragw", "ra-w").is_err());
        assert!(score_codes("r", "r").is_err());
        assert!(score_codes("ragwz", "ragwr").is_err());
    }
}
