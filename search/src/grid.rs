//! Value types for symbols, 2×2 patterns, 3-symbol words and 4×4 blocks.
//!
//! All three containers are fixed-size arrays with structural equality,
//! ordering and hashing. Orientation matters: a pattern and its rotation are
//! different patterns, and a word read forwards differs from the same cells
//! read backwards unless it is a palindrome.
//!
//! # Example
//!
//! ```
//! use fws_search::{Pattern, Word};
//!
//! let p = Pattern::new([[0, 1], [1, 2]]);
//! assert_eq!(p.to_string(), "0,1/1,2");
//! assert_eq!(p.get(1, 1), 2);
//!
//! let w = Word::new([8, 2, 9]);
//! assert_eq!(w.to_string(), "8 2 9");
//! assert_ne!(w, w.reversed());
//! ```

use core::fmt;

/// An alphabet element, an integer in `[0, N)`.
pub type Symbol = u16;

/// Side length of a [`Pattern`].
pub const PATTERN_SIDE: usize = 2;

/// Side length of a [`Block`].
pub const BLOCK_SIDE: usize = 2 * PATTERN_SIDE;

/// Number of symbols in a [`Word`].
pub const WORD_LEN: usize = 3;

// ============================================================================
// Pattern - 2×2 grid
// ============================================================================

/// A 2×2 grid of symbols, row-major.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pattern([[Symbol; PATTERN_SIDE]; PATTERN_SIDE]);

impl Pattern {
    /// The all-background pattern.
    pub const ZERO: Self = Self([[0; PATTERN_SIDE]; PATTERN_SIDE]);

    /// Create a pattern from its rows.
    #[inline]
    pub const fn new(rows: [[Symbol; PATTERN_SIDE]; PATTERN_SIDE]) -> Self {
        Self(rows)
    }

    /// Symbol at row `y`, column `x`.
    #[inline]
    pub const fn get(&self, y: usize, x: usize) -> Symbol {
        self.0[y][x]
    }

    /// Row-major rows.
    #[inline]
    pub const fn rows(&self) -> &[[Symbol; PATTERN_SIDE]; PATTERN_SIDE] {
        &self.0
    }

    /// Cells in row-major order: top-left, top-right, bottom-left, bottom-right.
    pub fn cells(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().flatten().copied()
    }

    pub(crate) fn set(&mut self, y: usize, x: usize, symbol: Symbol) {
        self.0[y][x] = symbol;
    }
}

impl From<[[Symbol; PATTERN_SIDE]; PATTERN_SIDE]> for Pattern {
    fn from(rows: [[Symbol; PATTERN_SIDE]; PATTERN_SIDE]) -> Self {
        Self::new(rows)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[tl, tr], [bl, br]] = self.0;
        write!(f, "{},{}/{},{}", tl, tr, bl, br)
    }
}

// ============================================================================
// Word - 3 symbols along one direction
// ============================================================================

/// Three consecutive cells read along one compass direction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Word([Symbol; WORD_LEN]);

impl Word {
    /// Create a word from its symbols in reading order.
    #[inline]
    pub const fn new(symbols: [Symbol; WORD_LEN]) -> Self {
        Self(symbols)
    }

    /// Symbols in reading order.
    #[inline]
    pub const fn symbols(&self) -> &[Symbol; WORD_LEN] {
        &self.0
    }

    /// The same cells read in the opposite direction.
    #[inline]
    pub const fn reversed(&self) -> Self {
        let [s0, s1, s2] = self.0;
        Self([s2, s1, s0])
    }
}

impl From<[Symbol; WORD_LEN]> for Word {
    fn from(symbols: [Symbol; WORD_LEN]) -> Self {
        Self::new(symbols)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s0, s1, s2] = self.0;
        write!(f, "{} {} {}", s0, s1, s2)
    }
}

// ============================================================================
// Block - 4×4 grid
// ============================================================================

/// A 4×4 grid of symbols: the image of one pattern under one substitution step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block([[Symbol; BLOCK_SIDE]; BLOCK_SIDE]);

impl Block {
    /// Create a block from its rows.
    #[inline]
    pub const fn new(rows: [[Symbol; BLOCK_SIDE]; BLOCK_SIDE]) -> Self {
        Self(rows)
    }

    /// Symbol at row `y`, column `x`.
    #[inline]
    pub const fn get(&self, y: usize, x: usize) -> Symbol {
        self.0[y][x]
    }

    /// Row-major rows.
    #[inline]
    pub const fn rows(&self) -> &[[Symbol; BLOCK_SIDE]; BLOCK_SIDE] {
        &self.0
    }

    /// The 2×2 quadrant whose top-left cell is `(2 * qy, 2 * qx)`.
    ///
    /// # Panics
    ///
    /// Panics if `qy` or `qx` is greater than 1.
    pub fn quadrant(&self, qy: usize, qx: usize) -> Pattern {
        let (y, x) = (qy * PATTERN_SIDE, qx * PATTERN_SIDE);
        Pattern::new([
            [self.0[y][x], self.0[y][x + 1]],
            [self.0[y + 1][x], self.0[y + 1][x + 1]],
        ])
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Block").field(&self.0).finish()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            let [a, b, c, d] = row;
            write!(f, "{},{},{},{}", a, b, c, d)?;
        }
        Ok(())
    }
}
