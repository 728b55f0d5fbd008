//! Feature extraction from a 4×4 block.
//!
//! A block yields:
//!
//! - nine overlapping 2×2 sub-patterns, one per top-left offset in `[0, 3)²`;
//! - every 3-cell word that stays inside the block when read from any of the
//!   16 cells in any of the 8 compass directions. Walks that leave the block
//!   produce nothing; there is no wraparound and no padding.
//!
//! Of the 128 `(cell, direction)` walks only 48 stay inside a 4×4 block.
//!
//! # Example
//!
//! ```
//! use fws_search::{Block, Direction, Word};
//!
//! let block = Block::new([[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);
//! assert_eq!(block.sub_patterns().count(), 9);
//! assert_eq!(block.words().count(), 48);
//! assert_eq!(block.word_at(0, 0, Direction::SouthEast), Some(Word::new([0, 5, 10])));
//! assert_eq!(block.word_at(0, 3, Direction::East), None);
//! ```

use crate::grid::{Block, Pattern, Word, BLOCK_SIDE, PATTERN_SIDE, WORD_LEN};

/// One of the 8 compass directions a word can be read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(dy, dx) = (-1, -1)`
    NorthWest,
    /// `(dy, dx) = (-1, 0)`
    North,
    /// `(dy, dx) = (-1, 1)`
    NorthEast,
    /// `(dy, dx) = (0, -1)`
    West,
    /// `(dy, dx) = (0, 1)`
    East,
    /// `(dy, dx) = (1, -1)`
    SouthWest,
    /// `(dy, dx) = (1, 0)`
    South,
    /// `(dy, dx) = (1, 1)`
    SouthEast,
}

impl Direction {
    /// All directions, ordered by `(dy, dx)`.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Row and column step.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// `start + i * step` if it lies in `[0, BLOCK_SIDE)`.
#[inline]
fn offset(start: usize, step: isize, i: usize) -> Option<usize> {
    let pos = start as isize + step * i as isize;
    (0..BLOCK_SIDE as isize).contains(&pos).then_some(pos as usize)
}

impl Block {
    /// The nine overlapping 2×2 sub-patterns, row-major by top-left offset.
    ///
    /// Duplicates are kept: the same pattern may appear at several offsets.
    pub fn sub_patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        let span = BLOCK_SIDE - PATTERN_SIDE + 1;
        (0..span).flat_map(move |y| {
            (0..span).map(move |x| {
                Pattern::new([
                    [self.get(y, x), self.get(y, x + 1)],
                    [self.get(y + 1, x), self.get(y + 1, x + 1)],
                ])
            })
        })
    }

    /// The word read from `(y, x)` towards `direction`, if all three cells
    /// lie inside the block.
    pub fn word_at(&self, y: usize, x: usize, direction: Direction) -> Option<Word> {
        if y >= BLOCK_SIDE || x >= BLOCK_SIDE {
            return None;
        }
        let (dy, dx) = direction.delta();
        let mut symbols = [0; WORD_LEN];
        for (i, slot) in symbols.iter_mut().enumerate() {
            *slot = self.get(offset(y, dy, i)?, offset(x, dx, i)?);
        }
        Some(Word::new(symbols))
    }

    /// Every in-bounds word, grouped by direction and then by start cell in
    /// row-major order. Duplicates are kept.
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        Direction::ALL.into_iter().flat_map(move |direction| {
            (0..BLOCK_SIDE).flat_map(move |y| {
                (0..BLOCK_SIDE).filter_map(move |x| self.word_at(y, x, direction))
            })
        })
    }
}
