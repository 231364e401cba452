//! Board dimensions
//!
//! Every value is clamped on construction, so a `GameConfig` is always in
//! bounds no matter where the numbers came from (CLI flags, save headers).

use super::peg::PALETTE_SIZE;

pub const MIN_SLOTS: usize = 2;
pub const MAX_SLOTS: usize = 10;
pub const MIN_COLORS: usize = 2;
pub const MAX_COLORS: usize = PALETTE_SIZE;
pub const MIN_ROWS: usize = 2;
pub const MAX_ROWS: usize = 20;

pub const DEFAULT_SLOTS: usize = 4;
pub const DEFAULT_COLORS: usize = 6;
pub const DEFAULT_ROWS: usize = 8;

/// Slots per row, palette size and number of guess rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    slots: usize,
    colors: usize,
    max_rows: usize,
}

impl GameConfig {
    /// Create a config, clamping each value into its bounds
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameConfig;
    ///
    /// let config = GameConfig::new(1, 50, 30);
    /// assert_eq!(config.slots(), 2);
    /// assert_eq!(config.colors(), 8);
    /// assert_eq!(config.max_rows(), 20);
    /// ```
    #[must_use]
    pub const fn new(slots: usize, colors: usize, max_rows: usize) -> Self {
        Self {
            slots: clamp(slots, MIN_SLOTS, MAX_SLOTS),
            colors: clamp(colors, MIN_COLORS, MAX_COLORS),
            max_rows: clamp(max_rows, MIN_ROWS, MAX_ROWS),
        }
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    #[inline]
    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Peg codes stored in a save image: solution plus every guess row
    #[inline]
    #[must_use]
    pub const fn peg_count(&self) -> usize {
        self.slots * (1 + self.max_rows)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS, DEFAULT_COLORS, DEFAULT_ROWS)
    }
}

// `Ord::clamp` is not const
const fn clamp(value: usize, min: usize, max: usize) -> usize {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
