//! Game board: hidden solution, guess rows and the active-row state machine
//!
//! The active row is not stored separately. It is the single row whose
//! `editable` flag is set; every row before it is completed and every row
//! after it is not yet reached. Only [`Board::next_row_if_possible`] moves
//! it, one row at a time.
//!
//! # Save image
//!
//! ```text
//! 1 byte   slots
//! 1 byte   colors
//! 1 byte   max rows
//! ...      squeeze(solution codes ++ row 0 codes ++ ... ++ row n-1 codes)
//! ```

use super::codec::{squeeze, unsqueeze};
use super::config::GameConfig;
use super::feedback::Feedback;
use super::peg::Color;
use super::row::Row;
use rand::Rng;
use std::fmt;

/// Length of the save-image header
pub const HEADER_LEN: usize = 3;

/// Error type for save images that cannot describe a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    TruncatedHeader(usize),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedHeader(len) => {
                write!(f, "Save data must start with a {HEADER_LEN}-byte header, got {len} bytes")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Progress of a single guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    NotReached,
    Active,
    Completed,
}

/// Game result as judged from the board contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won { row: usize },
    Lost,
}

/// Full game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    solution: Row,
    rows: Vec<Row>,
}

impl Board {
    /// Create a board with the solution given as wire codes
    ///
    /// Dimensions are clamped through [`GameConfig`]. All rows start empty
    /// and only the first one is editable.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Board, Color, GameConfig};
    ///
    /// let mut board = Board::new(GameConfig::default(), &[1, 2, 3, 4]);
    /// assert_eq!(board.active_row(), Some(0));
    /// assert!(board.set_peg(0, 0, Color::RED));
    /// assert!(!board.set_peg(1, 0, Color::RED));
    /// ```
    #[must_use]
    pub fn new(config: GameConfig, solution: &[u8]) -> Self {
        let slots = config.slots();
        let mut rows: Vec<Row> = (0..config.max_rows())
            .map(|_| Row::new(slots, false))
            .collect();
        rows[0].set_editable(true);

        Self {
            config,
            solution: Row::from_codes(solution, slots, false),
            rows,
        }
    }

    /// Create a board with a solution drawn from `rng`
    pub fn random_with<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let solution = random_solution(rng, config.slots(), config.colors());
        Self::new(config, &solution)
    }

    /// Create a board with a solution drawn from the thread-local generator
    #[must_use]
    pub fn random(config: GameConfig) -> Self {
        Self::random_with(config, &mut rand::rng())
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.config.slots()
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.config.colors()
    }

    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.config.max_rows()
    }

    /// Guess rows in order
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// The hidden code, for showing once the game is over
    #[must_use]
    pub const fn reveal_solution(&self) -> &Row {
        &self.solution
    }

    /// Peg at (`row`, `col`); `None` when empty or out of range
    #[must_use]
    pub fn peg_at(&self, row: usize, col: usize) -> Option<Color> {
        self.rows.get(row).and_then(|r| r.peg_at(col))
    }

    /// Place a peg; fails on bad coordinates or a row that is not editable
    pub fn set_peg(&mut self, row: usize, col: usize, color: Color) -> bool {
        self.rows
            .get_mut(row)
            .is_some_and(|r| r.set_peg(col, color))
    }

    /// Remove a peg under the same guard as [`Board::set_peg`]
    pub fn clear_peg(&mut self, row: usize, col: usize) -> bool {
        self.rows.get_mut(row).is_some_and(|r| r.clear_peg(col))
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(Row::is_full)
    }

    /// Score a guess row against the solution
    ///
    /// Returns [`Feedback::NONE`] for a bad index, a row that is not full,
    /// or a solution that is not full.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Board, Color, Feedback, GameConfig};
    ///
    /// // red, aqua, green, white
    /// let mut board = Board::new(GameConfig::default(), &[1, 2, 3, 4]);
    /// for (col, color) in [Color::RED, Color::AQUA, Color::WHITE, Color::GREEN]
    ///     .into_iter()
    ///     .enumerate()
    /// {
    ///     board.set_peg(0, col, color);
    /// }
    /// assert_eq!(board.test_row(0), Feedback::new(2, 2));
    /// ```
    #[must_use]
    pub fn test_row(&self, row: usize) -> Feedback {
        match self.rows.get(row) {
            Some(guess) if guess.is_full() && self.solution.is_full() => {
                let red = self.solution.red_count(guess);
                let white = self.solution.white_count(guess);
                Feedback::new(red, white.saturating_sub(red))
            }
            _ => Feedback::NONE,
        }
    }

    /// Replace the solution if the candidate fills every slot
    pub fn set_solution(&mut self, solution: &[u8]) -> bool {
        let candidate = Row::from_codes(solution, self.slots(), false);
        if candidate.is_full() {
            self.solution = candidate;
            true
        } else {
            false
        }
    }

    /// Index of the row currently accepting pegs
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(Row::is_editable)
    }

    /// Progress of `row`, derived from the editable flags
    ///
    /// With no active row every row counts as completed.
    #[must_use]
    pub fn row_state(&self, row: usize) -> Option<RowState> {
        if row >= self.rows.len() {
            return None;
        }
        let state = match self.active_row() {
            Some(active) if row < active => RowState::Completed,
            Some(active) if row == active => RowState::Active,
            Some(_) => RowState::NotReached,
            None => RowState::Completed,
        };
        Some(state)
    }

    /// Move the active row forward by one if it is full
    ///
    /// Completing the last row leaves no active row. Nothing happens while
    /// the active row still has empty slots.
    pub fn next_row_if_possible(&mut self) {
        let Some(active) = self.active_row() else {
            return;
        };
        if !self.rows[active].is_full() {
            return;
        }

        self.rows[active].set_editable(false);
        if let Some(next) = self.rows.get_mut(active + 1) {
            next.set_editable(true);
        }
    }

    /// Judge the game: the first all-red row wins, no active row loses
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        let slots = self.slots();
        if let Some(row) = (0..self.rows.len()).find(|&i| self.test_row(i).is_win(slots)) {
            return GameOutcome::Won { row };
        }
        if self.active_row().is_some() {
            GameOutcome::InProgress
        } else {
            GameOutcome::Lost
        }
    }

    /// Encode the board as a save image
    ///
    /// The image is `3 + ceil(slots * (1 + max_rows) / 2)` bytes long.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut pegs = Vec::with_capacity(self.config.peg_count());
        pegs.extend(self.solution.to_codes());
        for row in &self.rows {
            pegs.extend(row.to_codes());
        }

        let mut data = Vec::with_capacity(HEADER_LEN + pegs.len().div_ceil(2));
        data.push(self.slots() as u8);
        data.push(self.colors() as u8);
        data.push(self.max_rows() as u8);
        data.extend(squeeze(&pegs));
        data
    }

    /// Decode a save image produced by [`Board::to_bytes`]
    ///
    /// Header values are clamped like any other dimensions. Peg codes
    /// outside the palette, and pegs missing from a short payload, load as
    /// empty slots. The first row that is not full becomes active.
    ///
    /// # Errors
    /// Returns `LoadError::TruncatedHeader` if `data` is shorter than the
    /// three header bytes.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Board, GameConfig};
    ///
    /// let board = Board::new(GameConfig::new(4, 6, 8), &[1, 2, 3, 4]);
    /// let loaded = Board::from_bytes(&board.to_bytes()).unwrap();
    /// assert_eq!(loaded, board);
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        let [slots, colors, max_rows, payload @ ..] = data else {
            return Err(LoadError::TruncatedHeader(data.len()));
        };

        let config = GameConfig::new(
            usize::from(*slots),
            usize::from(*colors),
            usize::from(*max_rows),
        );
        let codes = unsqueeze(payload);
        let slots = config.slots();
        let segment = |index: usize| codes.get(index * slots..).unwrap_or(&[]);

        let solution = Row::from_codes(segment(0), slots, false);
        let rows = (1..=config.max_rows())
            .map(|i| Row::from_codes(segment(i), slots, false))
            .collect();

        let mut board = Self {
            config,
            solution,
            rows,
        };
        board.reset_active_row();
        Ok(board)
    }

    fn reset_active_row(&mut self) {
        let first_open = self.rows.iter().position(|row| !row.is_full());
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_editable(Some(i) == first_open);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::random(GameConfig::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Peg codes for a random solution of `slots` pegs over the first `colors` colors
pub fn random_solution<R: Rng>(rng: &mut R, slots: usize, colors: usize) -> Vec<u8> {
    (0..slots)
        .map(|_| Color::random(&mut *rng, colors).to_code())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// red, aqua, green, white
    const SOLUTION: [u8; 4] = [1, 2, 3, 4];

    fn board() -> Board {
        Board::new(GameConfig::new(4, 6, 8), &SOLUTION)
    }

    fn fill_row(board: &mut Board, row: usize, colors: &[Color]) {
        for (col, &color) in colors.iter().enumerate() {
            assert!(board.set_peg(row, col, color), "row {row} col {col}");
        }
    }

    fn play(board: &mut Board, colors: &[Color]) {
        let row = board.active_row().unwrap();
        fill_row(board, row, colors);
        board.next_row_if_possible();
    }

    const MISS: [Color; 4] = [Color::BROWN, Color::BROWN, Color::BROWN, Color::BROWN];

    #[test]
    fn new_board_has_first_row_active() {
        let b = board();
        assert_eq!(b.rows().len(), 8);
        assert_eq!(b.active_row(), Some(0));
        assert_eq!(b.row_state(0), Some(RowState::Active));
        assert_eq!(b.row_state(1), Some(RowState::NotReached));
        assert_eq!(b.row_state(8), None);
        assert!(b.rows().iter().all(|r| r.len() == 4 && !r.is_full()));
        assert_eq!(b.reveal_solution().len(), 4);
    }

    #[test]
    fn construction_clamps_dimensions() {
        let b = Board::new(GameConfig::new(40, 1, 0), &[1; 10]);
        assert_eq!((b.slots(), b.colors(), b.max_rows()), (10, 2, 2));
        assert_eq!(b.reveal_solution().len(), 10);

        let b = Board::new(GameConfig::new(4, 6, 25), &SOLUTION);
        assert_eq!(b.max_rows(), 20);
        assert_eq!(b.rows().len(), 20);
    }

    #[test]
    fn scenario_two_red_two_white() {
        let mut b = board();
        fill_row(&mut b, 0, &[Color::RED, Color::AQUA, Color::WHITE, Color::GREEN]);
        assert_eq!(b.test_row(0), Feedback::new(2, 2));
    }

    #[test]
    fn scenario_duplicate_guess_is_capped() {
        let mut b = board();
        fill_row(&mut b, 0, &[Color::RED; 4]);
        assert_eq!(b.test_row(0), Feedback::new(1, 0));
    }

    #[test]
    fn test_row_needs_full_rows() {
        let mut b = board();
        b.set_peg(0, 0, Color::RED);
        assert_eq!(b.test_row(0), Feedback::NONE);
        assert_eq!(b.test_row(99), Feedback::NONE);

        let mut partial = Board::new(GameConfig::default(), &[1, 2]);
        fill_row(&mut partial, 0, &[Color::RED, Color::AQUA, Color::GREEN, Color::WHITE]);
        assert_eq!(partial.test_row(0), Feedback::NONE);
    }

    #[test]
    fn perfect_guess_is_all_red() {
        let mut b = board();
        fill_row(&mut b, 0, &[Color::RED, Color::AQUA, Color::GREEN, Color::WHITE]);
        let feedback = b.test_row(0);
        assert_eq!(feedback, Feedback::new(4, 0));
        assert!(feedback.is_win(b.slots()));
    }

    #[test]
    fn out_of_range_coordinates() {
        let mut b = board();
        assert_eq!(b.peg_at(8, 0), None);
        assert_eq!(b.peg_at(0, 4), None);
        assert!(!b.set_peg(8, 0, Color::RED));
        assert!(!b.set_peg(0, 4, Color::RED));
        assert!(!b.clear_peg(8, 0));
        assert!(!b.is_row_full(8));
        assert!(b.row(8).is_none());
    }

    #[test]
    fn inactive_rows_reject_edits() {
        let mut b = board();
        let before = b.row(3).cloned();
        assert!(!b.set_peg(3, 0, Color::RED));
        assert!(!b.clear_peg(3, 0));
        assert_eq!(b.row(3).cloned(), before);
    }

    #[test]
    fn clear_peg_on_active_row() {
        let mut b = board();
        assert!(b.set_peg(0, 2, Color::GREEN));
        assert_eq!(b.peg_at(0, 2), Some(Color::GREEN));
        assert!(b.clear_peg(0, 2));
        assert_eq!(b.peg_at(0, 2), None);
    }

    #[test]
    fn next_row_waits_for_full_row() {
        let mut b = board();
        b.set_peg(0, 0, Color::RED);
        let snapshot = b.clone();
        b.next_row_if_possible();
        b.next_row_if_possible();
        assert_eq!(b, snapshot);
        assert_eq!(b.active_row(), Some(0));
    }

    #[test]
    fn next_row_advances_one_step() {
        let mut b = board();
        fill_row(&mut b, 0, &MISS);
        b.next_row_if_possible();
        assert_eq!(b.active_row(), Some(1));
        assert_eq!(b.row_state(0), Some(RowState::Completed));

        // row 1 is empty, so a second call does nothing
        b.next_row_if_possible();
        assert_eq!(b.active_row(), Some(1));
    }

    #[test]
    fn completed_rows_stay_locked() {
        let mut b = board();
        play(&mut b, &MISS);
        assert!(!b.set_peg(0, 0, Color::RED));
        assert!(!b.clear_peg(0, 0));
        assert_eq!(b.peg_at(0, 0), Some(Color::BROWN));
    }

    #[test]
    fn at_most_one_active_row() {
        let mut b = board();
        for _ in 0..b.max_rows() {
            let editable = b.rows().iter().filter(|r| r.is_editable()).count();
            assert_eq!(editable, 1);
            play(&mut b, &MISS);
        }
        assert_eq!(b.active_row(), None);
        assert!((0..b.max_rows()).all(|i| b.row_state(i) == Some(RowState::Completed)));
    }

    #[test]
    fn outcome_tracks_progress() {
        let mut b = board();
        assert_eq!(b.outcome(), GameOutcome::InProgress);
        play(&mut b, &MISS);
        play(&mut b, &[Color::RED, Color::AQUA, Color::GREEN, Color::WHITE]);
        assert_eq!(b.outcome(), GameOutcome::Won { row: 1 });

        let mut lost = Board::new(GameConfig::new(4, 6, 2), &SOLUTION);
        play(&mut lost, &MISS);
        assert_eq!(lost.outcome(), GameOutcome::InProgress);
        play(&mut lost, &MISS);
        assert_eq!(lost.outcome(), GameOutcome::Lost);
    }

    #[test]
    fn set_solution_rejects_partial() {
        let mut b = board();
        assert!(!b.set_solution(&[1, 0, 3, 4]));
        assert!(!b.set_solution(&[1, 2]));
        assert!(!b.set_solution(&[1, 2, 3, 9]));
        assert_eq!(b.reveal_solution().to_codes(), SOLUTION.to_vec());

        assert!(b.set_solution(&[5, 5, 5, 5]));
        assert_eq!(b.reveal_solution().to_string(), "bbbb");
    }

    #[test]
    fn save_image_layout() {
        let mut b = Board::new(GameConfig::new(4, 6, 2), &SOLUTION);
        fill_row(&mut b, 0, &[Color::RED, Color::RED, Color::AQUA, Color::AQUA]);

        // 4 * 3 = 12 codes -> 6 packed bytes
        assert_eq!(
            b.to_bytes(),
            vec![4, 6, 2, 0x21, 0x43, 0x11, 0x22, 0x00, 0x00]
        );
    }

    #[test]
    fn save_image_length_rounds_up() {
        let b = Board::new(GameConfig::new(3, 6, 2), &[1, 2, 3]);
        // 3 * 3 = 9 codes -> 5 packed bytes
        assert_eq!(b.to_bytes().len(), HEADER_LEN + 5);
    }

    #[test]
    fn round_trip_mid_game() {
        let mut b = board();
        play(&mut b, &MISS);
        play(&mut b, &[Color::RED, Color::AQUA, Color::WHITE, Color::GREEN]);
        b.set_peg(2, 1, Color::YELLOW);

        let loaded = Board::from_bytes(&b.to_bytes()).unwrap();
        assert_eq!(loaded, b);
        assert_eq!(loaded.active_row(), Some(2));
        assert_eq!(loaded.test_row(1), Feedback::new(2, 2));
        assert_eq!(loaded.to_string(), b.to_string());
    }

    #[test]
    fn round_trip_odd_peg_count() {
        let mut rng = StdRng::seed_from_u64(3);
        // 5 * 3 = 15 codes
        let mut b = Board::random_with(GameConfig::new(5, 8, 2), &mut rng);
        play(&mut b, &[Color::ORANGE; 5]);
        let loaded = Board::from_bytes(&b.to_bytes()).unwrap();
        assert_eq!(loaded, b);
    }

    #[test]
    fn round_trip_finished_game() {
        let mut b = Board::new(GameConfig::new(4, 6, 2), &SOLUTION);
        play(&mut b, &MISS);
        play(&mut b, &MISS);
        let loaded = Board::from_bytes(&b.to_bytes()).unwrap();
        assert_eq!(loaded.active_row(), None);
        assert_eq!(loaded, b);
    }

    #[test]
    fn from_bytes_rejects_short_header() {
        assert_eq!(Board::from_bytes(&[]), Err(LoadError::TruncatedHeader(0)));
        assert_eq!(Board::from_bytes(&[4, 6]), Err(LoadError::TruncatedHeader(2)));
    }

    #[test]
    fn from_bytes_degrades_bad_codes() {
        // solution r a g w, row 0 holds r + three bad codes
        let data = [4, 6, 2, 0x21, 0x43, 0x91, 0xFF, 0x00, 0x00];
        let b = Board::from_bytes(&data).unwrap();
        assert_eq!(b.row(0).unwrap().to_string(), "r---");
        assert_eq!(b.active_row(), Some(0));
        assert_eq!(b.reveal_solution().to_string(), "ragw");
    }

    #[test]
    fn from_bytes_pads_missing_pegs() {
        let b = Board::from_bytes(&[4, 6, 8]).unwrap();
        assert_eq!(b.rows().len(), 8);
        assert!(!b.reveal_solution().is_full());
        assert_eq!(b.active_row(), Some(0));
        assert_eq!(b.test_row(0), Feedback::NONE);
    }

    #[test]
    fn random_solution_is_full_and_in_palette() {
        let mut rng = StdRng::seed_from_u64(42);
        let codes = random_solution(&mut rng, 6, 3);
        assert_eq!(codes.len(), 6);
        assert!(codes.iter().all(|&c| (1..=3).contains(&c)));

        let b = Board::random(GameConfig::default());
        assert!(b.reveal_solution().is_full());
        assert!(b.reveal_solution().slots().iter().flatten().all(|c| c.ordinal() < 6));
    }

    #[test]
    fn display_lists_guess_rows() {
        let mut b = Board::new(GameConfig::new(4, 6, 2), &SOLUTION);
        fill_row(&mut b, 0, &[Color::RED, Color::AQUA, Color::GREEN, Color::WHITE]);
        assert_eq!(b.to_string(), "ragw\n----\n");
    }
}
