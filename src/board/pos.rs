//! Grid positions and jump directions.
//!
//! Positions are row-major indices into the 7x7 grid: `row * 7 + col`.
//! The encoding is total over the grid; whether a position is actually
//! playable is a property of the [`Board`](crate::board::Board), not of
//! the position itself.

use serde::{Deserialize, Serialize};

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 7;

/// Total cells in the grid, playable or not.
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The center cell (row 3, col 3): the lone empty cell at game start and
/// the target square for a perfect win.
pub const CENTER: Pos = Pos::from_row_col(3, 3);

/// A position on the 7x7 grid.
///
/// ## Example
///
/// ```
/// use peg_solitaire::Pos;
///
/// let pos = Pos::from_row_col(3, 2);
/// assert_eq!(pos.index(), 23);
/// assert_eq!(pos.row(), 3);
/// assert_eq!(pos.col(), 2);
///
/// // Checked conversion from a raw index
/// assert_eq!(Pos::from_index(23), Some(pos));
/// assert_eq!(Pos::from_index(49), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos(u8);

impl Pos {
    /// Create a position from row and column (0-6 each).
    ///
    /// Panics if either coordinate is off the grid.
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self((row * BOARD_SIZE + col) as u8)
    }

    /// Create a position from a raw row-major index.
    ///
    /// Returns `None` if the index is outside the grid.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < TOTAL_CELLS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the row (0-6).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Get the column (0-6).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Get the jump destination two cells away in the given direction.
    ///
    /// Returns `None` if the destination falls off the grid.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row() as isize + d_row as isize;
        let col = self.col() as isize + d_col as isize;

        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Self::from_row_col(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Get the cell between this position and another two cells away on
    /// one axis: the peg captured by the jump.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::from_row_col((self.row() + other.row()) / 2, (self.col() + other.col()) / 2)
    }

    /// Iterate over every grid position in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TOTAL_CELLS as u8).map(Self)
    }
}

/// A jump direction.
///
/// The `all()` order (up, down, left, right) is fixed: both the
/// destinations in [`Board::valid_moves_from`](crate::Board::valid_moves_from)
/// and the deterministic hint scan depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Get the (row, col) offset of a jump in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-2, 0),
            Direction::Down => (2, 0),
            Direction::Left => (0, -2),
            Direction::Right => (0, 2),
        }
    }

    /// Get all directions in scan order.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
    }
}
