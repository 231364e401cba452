//! Peg colors
//!
//! The palette is a fixed, ordered table of eight symbolic colors. A game
//! uses a prefix of it (`colors` entries). Colors travel through save files
//! as one-based codes so that `0` can stand for an empty slot.

use rand::Rng;
use std::fmt;

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 8;

/// Character collaborators use to clear a slot; never a color code
pub const CLEAR_CHAR: char = 'x';

/// Character used for an empty slot in text form
pub const EMPTY_CHAR: char = '-';

/// One palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PaletteEntry {
    name: &'static str,
    code: char,
}

const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    PaletteEntry { name: "red", code: 'r' },
    PaletteEntry { name: "aqua", code: 'a' },
    PaletteEntry { name: "green", code: 'g' },
    PaletteEntry { name: "white", code: 'w' },
    PaletteEntry { name: "brown", code: 'b' },
    PaletteEntry { name: "yellow", code: 'y' },
    PaletteEntry { name: "purple", code: 'p' },
    PaletteEntry { name: "orange", code: 'o' },
];

/// A symbolic peg color, identified by its palette ordinal (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    pub const RED: Self = Self(0);
    pub const AQUA: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const WHITE: Self = Self(3);
    pub const BROWN: Self = Self(4);
    pub const YELLOW: Self = Self(5);
    pub const PURPLE: Self = Self(6);
    pub const ORANGE: Self = Self(7);

    /// Every color in canonical order
    pub const ALL: [Self; PALETTE_SIZE] = [
        Self::RED,
        Self::AQUA,
        Self::GREEN,
        Self::WHITE,
        Self::BROWN,
        Self::YELLOW,
        Self::PURPLE,
        Self::ORANGE,
    ];

    /// Zero-based position in the palette
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0 as usize
    }

    /// Human-readable name ("red", "aqua", ...)
    #[must_use]
    pub const fn name(self) -> &'static str {
        PALETTE[self.0 as usize].name
    }

    /// Single-character input/output code
    #[must_use]
    pub const fn code_char(self) -> char {
        PALETTE[self.0 as usize].code
    }

    /// Wire code: ordinal + 1, so `0` stays free for "no color"
    #[inline]
    #[must_use]
    pub const fn to_code(self) -> u8 {
        self.0 + 1
    }

    /// Inverse of [`Color::to_code`]
    ///
    /// Returns `None` for `0` and for anything past the palette; malformed
    /// codes read as empty slots rather than errors.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_code(1), Some(Color::RED));
    /// assert_eq!(Color::from_code(0), None);
    /// assert_eq!(Color::from_code(9), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code >= 1 && (code as usize) <= PALETTE_SIZE {
            Some(Self(code - 1))
        } else {
            None
        }
    }

    /// Find the color whose code is `ch` among the first `available` colors
    ///
    /// Matching is case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_code_char('g', 6), Some(Color::GREEN));
    /// assert_eq!(Color::from_code_char('G', 6), None);
    /// // orange is the eighth color, outside a six-color game
    /// assert_eq!(Color::from_code_char('o', 6), None);
    /// ```
    #[must_use]
    pub fn from_code_char(ch: char, available: usize) -> Option<Self> {
        Self::ALL
            .iter()
            .take(available)
            .find(|color| color.code_char() == ch)
            .copied()
    }

    /// Pick a color uniformly among the first `available` (capped at the palette)
    ///
    /// An `available` of zero is treated as one.
    pub fn random<R: Rng>(rng: &mut R, available: usize) -> Self {
        let limit = available.clamp(1, PALETTE_SIZE);
        Self::ALL[rng.random_range(0..limit)]
    }

    /// [`Color::random`] using the thread-local generator
    #[must_use]
    pub fn random_thread(available: usize) -> Self {
        Self::random(&mut rand::rng(), available)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn codes_are_one_based() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.ordinal(), i);
            assert_eq!(usize::from(color.to_code()), i + 1);
            assert_eq!(Color::from_code(color.to_code()), Some(*color));
        }
    }

    #[test]
    fn out_of_range_codes_are_empty() {
        assert_eq!(Color::from_code(0), None);
        for code in 9..=u8::MAX {
            assert_eq!(Color::from_code(code), None, "code {code}");
        }
    }

    #[test]
    fn code_chars_are_unique() {
        let mut seen: Vec<char> = Color::ALL.iter().map(|c| c.code_char()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PALETTE_SIZE);
        assert!(!seen.contains(&CLEAR_CHAR));
        assert!(!seen.contains(&EMPTY_CHAR));
    }

    #[test]
    fn from_code_char_respects_available() {
        assert_eq!(Color::from_code_char('r', 2), Some(Color::RED));
        assert_eq!(Color::from_code_char('a', 2), Some(Color::AQUA));
        assert_eq!(Color::from_code_char('g', 2), None);
        assert_eq!(Color::from_code_char('o', 8), Some(Color::ORANGE));
        assert_eq!(Color::from_code_char('o', 100), Some(Color::ORANGE));
    }

    #[test]
    fn from_code_char_rejects_unknown() {
        assert_eq!(Color::from_code_char('z', 8), None);
        assert_eq!(Color::from_code_char('R', 8), None);
        assert_eq!(Color::from_code_char(CLEAR_CHAR, 8), None);
    }

    #[test]
    fn random_stays_in_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        for available in 1..=PALETTE_SIZE {
            for _ in 0..200 {
                assert!(Color::random(&mut rng, available).ordinal() < available);
            }
        }
    }

    #[test]
    fn random_caps_at_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            assert!(Color::random(&mut rng, 50).ordinal() < PALETTE_SIZE);
        }
        assert_eq!(Color::random(&mut rng, 0), Color::RED);
    }

    #[test]
    fn random_thread_stays_in_prefix() {
        for _ in 0..50 {
            assert!(Color::random_thread(3).ordinal() < 3);
        }
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(Color::PURPLE.to_string(), "p");
        assert_eq!(Color::WHITE.name(), "white");
    }
}
