//! Guess feedback
//!
//! Feedback is a pair of counts. It never says which positions matched.

use std::fmt;

/// Red/white feedback for one guess row
///
/// - `red`: correct color in the correct position
/// - `white`: correct color in the wrong position (white-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub red: u8,
    pub white: u8,
}

impl Feedback {
    /// Feedback for rows that cannot be scored
    pub const NONE: Self = Self { red: 0, white: 0 };

    #[inline]
    #[must_use]
    pub const fn new(red: u8, white: u8) -> Self {
        Self { red, white }
    }

    /// All `slots` pegs are red
    #[inline]
    #[must_use]
    pub const fn is_win(self, slots: usize) -> bool {
        self.red as usize == slots && slots > 0
    }

    /// Total pegs of the right color, regardless of position
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.red + self.white
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} red, {} white", self.red, self.white)
    }
}
