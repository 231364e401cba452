//! Save file inspection
//!
//! Summarizes a board the way a player would read it: each row with its
//! state and feedback, plus the game outcome.

use crate::core::{Board, Feedback, GameOutcome, RowState};

/// Summary of one guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    pub index: usize,
    pub pegs: String,
    pub state: RowState,
    /// Only present for full rows
    pub feedback: Option<Feedback>,
}

/// Summary of a whole board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub slots: usize,
    pub colors: usize,
    pub max_rows: usize,
    pub rows: Vec<RowReport>,
    pub outcome: GameOutcome,
    /// Only filled in when asked for
    pub solution: Option<String>,
}

/// Build a report for `board`, revealing the solution only if `reveal` is set
#[must_use]
pub fn inspect_board(board: &Board, reveal: bool) -> InspectReport {
    let rows = board
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RowReport {
            index,
            pegs: row.to_string(),
            state: board.row_state(index).unwrap_or(RowState::NotReached),
            feedback: board.is_row_full(index).then(|| board.test_row(index)),
        })
        .collect();

    InspectReport {
        slots: board.slots(),
        colors: board.colors(),
        max_rows: board.max_rows(),
        rows,
        outcome: board.outcome(),
        solution: reveal.then(|| board.reveal_solution().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, GameConfig};

    #[test]
    fn report_mid_game() {
        let mut board = Board::new(GameConfig::new(4, 6, 3), &[1, 2, 3, 4]);
        for (col, color) in [Color::RED, Color::AQUA, Color::WHITE, Color::GREEN]
            .into_iter()
            .enumerate()
        {
            board.set_peg(0, col, color);
        }
        board.next_row_if_possible();
        board.set_peg(1, 0, Color::BROWN);

        let report = inspect_board(&board, false);
        assert_eq!((report.slots, report.colors, report.max_rows), (4, 6, 3));
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert_eq!(report.solution, None);

        assert_eq!(report.rows[0].pegs, "rawg");
        assert_eq!(report.rows[0].state, RowState::Completed);
        assert_eq!(report.rows[0].feedback, Some(Feedback::new(2, 2)));

        assert_eq!(report.rows[1].pegs, "b---");
        assert_eq!(report.rows[1].state, RowState::Active);
        assert_eq!(report.rows[1].feedback, None);

        assert_eq!(report.rows[2].state, RowState::NotReached);
    }

    #[test]
    fn reveal_includes_solution() {
        let board = Board::new(GameConfig::default(), &[8, 7, 6, 5]);
        let report = inspect_board(&board, true);
        assert_eq!(report.solution.as_deref(), Some("opyb"));
    }
}
