//! A single row of peg slots
//!
//! Rows hold either the hidden solution or one player guess. The length is
//! fixed at construction; the `editable` flag gates every mutation.

use super::peg::{CLEAR_CHAR, Color, EMPTY_CHAR};
use rustc_hash::FxHashMap;
use std::fmt;

/// One position in a row
pub type Slot = Option<Color>;

/// Error type for row text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    InvalidLength { expected: usize, got: usize },
    UnknownColor { position: usize, found: char },
}

impl fmt::Display for RowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Expected {expected} pegs, got {got}")
            }
            Self::UnknownColor { position, found } => {
                write!(f, "Unknown color '{found}' at position {}", position + 1)
            }
        }
    }
}

impl std::error::Error for RowParseError {}

/// Fixed-width sequence of slots plus an editability flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pegs: Vec<Slot>,
    editable: bool,
}

impl Row {
    /// Create an empty row of `len` slots
    #[must_use]
    pub fn new(len: usize, editable: bool) -> Self {
        Self {
            pegs: vec![None; len],
            editable,
        }
    }

    /// Build a row of `len` slots from wire codes
    ///
    /// Codes outside the palette become empty slots, as do slots past the
    /// end of `codes`.
    #[must_use]
    pub fn from_codes(codes: &[u8], len: usize, editable: bool) -> Self {
        let pegs = (0..len)
            .map(|i| codes.get(i).copied().and_then(Color::from_code))
            .collect();
        Self { pegs, editable }
    }

    /// Build a row directly from colors
    #[must_use]
    pub fn from_colors(colors: &[Color], editable: bool) -> Self {
        Self {
            pegs: colors.iter().copied().map(Some).collect(),
            editable,
        }
    }

    /// Parse a row from color codes, one character per slot
    ///
    /// `-` and `x` leave a slot empty. Only the first `available` palette
    /// colors are accepted.
    ///
    /// # Errors
    /// Returns `RowParseError` if the text has the wrong number of
    /// characters or names a color outside the palette prefix.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Row};
    ///
    /// let row = Row::parse("rag-", 4, 6).unwrap();
    /// assert_eq!(row.peg_at(1), Some(Color::AQUA));
    /// assert_eq!(row.peg_at(3), None);
    /// assert!(!row.is_full());
    /// ```
    pub fn parse(text: &str, len: usize, available: usize) -> Result<Self, RowParseError> {
        let chars: Vec<char> = text.trim().chars().collect();

        if chars.len() != len {
            return Err(RowParseError::InvalidLength {
                expected: len,
                got: chars.len(),
            });
        }

        let pegs = chars
            .iter()
            .enumerate()
            .map(|(position, &ch)| match ch {
                EMPTY_CHAR | CLEAR_CHAR => Ok(None),
                _ => Color::from_code_char(ch, available)
                    .map(Some)
                    .ok_or(RowParseError::UnknownColor { position, found: ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pegs,
            editable: false,
        })
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Whether the row has zero slots
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Slots in column order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.pegs
    }

    /// Peg at column `col`; `None` when empty or out of range
    #[inline]
    #[must_use]
    pub fn peg_at(&self, col: usize) -> Slot {
        self.pegs.get(col).copied().flatten()
    }

    /// Place `color` at `col` if the row is editable and `col` is in range
    pub fn set_peg(&mut self, col: usize, color: Color) -> bool {
        self.write_slot(col, Some(color))
    }

    /// Empty the slot at `col` under the same guard as [`Row::set_peg`]
    pub fn clear_peg(&mut self, col: usize) -> bool {
        self.write_slot(col, None)
    }

    fn write_slot(&mut self, col: usize, value: Slot) -> bool {
        if !self.editable {
            return false;
        }
        match self.pegs.get_mut(col) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// True when every slot holds a peg
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pegs.iter().all(Option::is_some)
    }

    #[inline]
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        self.editable
    }

    pub const fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub const fn toggle_editable(&mut self) {
        self.editable = !self.editable;
    }

    /// Count of each color present in the row
    #[must_use]
    pub fn color_frequency(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for color in self.pegs.iter().flatten() {
            *counts.entry(*color).or_insert(0) += 1;
        }
        counts
    }

    /// Positions where both rows hold the same color
    #[must_use]
    pub fn red_count(&self, other: &Self) -> u8 {
        self.pegs
            .iter()
            .zip(&other.pegs)
            .filter(|(a, b)| a.is_some() && a == b)
            .count() as u8
    }

    /// Color matches ignoring position (includes every red match)
    #[must_use]
    pub fn white_count(&self, other: &Self) -> u8 {
        let other_counts = other.color_frequency();
        self.color_frequency()
            .iter()
            .map(|(color, &count)| count.min(other_counts.get(color).copied().unwrap_or(0)))
            .sum()
    }

    /// Wire codes for each slot (`0` for empty)
    #[must_use]
    pub fn to_codes(&self) -> Vec<u8> {
        self.pegs
            .iter()
            .map(|slot| slot.map_or(0, Color::to_code))
            .collect()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.pegs {
            match slot {
                Some(color) => write!(f, "{color}")?,
                None => write!(f, "{EMPTY_CHAR}")?,
            }
        }
        Ok(())
    }
}
