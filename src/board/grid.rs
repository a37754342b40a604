//! The 7x7 cross-shaped grid and jump legality.
//!
//! ## Legality
//!
//! A jump from `a` to `b` is legal iff all of:
//! 1. `b` is on the grid and its cell is `Empty`
//! 2. `a` holds a `Peg`
//! 3. the offset is exactly two cells along exactly one axis
//! 4. the midpoint cell holds a `Peg` (the piece being captured)
//!
//! The same predicate backs selection highlighting, move execution, hint
//! generation, and stuck-board detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::pos::{Direction, Pos, BOARD_SIZE, CENTER};

/// Playable cells on the cross board.
pub const PLAYABLE_CELLS: usize = 33;

/// The 7x7 grid.
///
/// The four 2x2 corner blocks are `Invalid` for the lifetime of the board;
/// the other 33 cells hold `Empty` or `Peg`. Storage is private, so a
/// shared reference doubles as an immutable snapshot for renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board in the canonical starting layout: every playable
    /// cell holds a peg except the center, which is empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            cells: [[Cell::Invalid; BOARD_SIZE]; BOARD_SIZE],
        };
        board.reset();
        board
    }

    /// Create a board with pegs at exactly the given positions and every
    /// other playable cell empty.
    ///
    /// Panics if any position lands in a corner block.
    #[must_use]
    pub fn with_pegs(pegs: &[Pos]) -> Self {
        let mut board = Self::new();
        for pos in Pos::all() {
            if board.get(pos).is_playable() {
                board.set(pos, Cell::Empty);
            }
        }
        for &pos in pegs {
            assert!(
                board.get(pos).is_playable(),
                "peg placed outside the playable region"
            );
            board.set(pos, Cell::Peg);
        }
        board
    }

    /// Restore the canonical starting layout.
    pub fn reset(&mut self) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                self.cells[row][col] = if in_corner_block(row, col) {
                    Cell::Invalid
                } else {
                    Cell::Peg
                };
            }
        }
        self.cells[CENTER.row()][CENTER.col()] = Cell::Empty;
    }

    /// Get the cell at a position.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Get the full grid, row by row, for rendering.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Count the pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        Pos::all().filter(|&pos| self.get(pos) == Cell::Peg).count()
    }

    /// Check whether a jump from `from` to `to` is legal.
    #[must_use]
    pub fn is_legal_jump(&self, from: Pos, to: Pos) -> bool {
        // Destination must be a playable, unoccupied cell
        if self.get(to) != Cell::Empty {
            return false;
        }

        // Source must hold a peg
        if self.get(from) != Cell::Peg {
            return false;
        }

        // Exactly two cells along exactly one axis
        let d_row = from.row().abs_diff(to.row());
        let d_col = from.col().abs_diff(to.col());
        if !((d_row == 2 && d_col == 0) || (d_row == 0 && d_col == 2)) {
            return false;
        }

        // The jumped-over cell must hold the peg being captured
        self.get(from.midpoint(to)) == Cell::Peg
    }

    /// Enumerate every legal jump destination for the peg at `from`,
    /// in fixed direction order (up, down, left, right).
    ///
    /// Empty if `from` holds no peg or the peg is stuck.
    #[must_use]
    pub fn valid_moves_from(&self, from: Pos) -> SmallVec<[Pos; 4]> {
        let mut moves = SmallVec::new();
        for direction in Direction::all() {
            if let Some(to) = from.step(direction) {
                if self.is_legal_jump(from, to) {
                    moves.push(to);
                }
            }
        }
        moves
    }

    /// Check whether any peg on the board has a legal jump.
    #[must_use]
    pub fn has_any_move(&self) -> bool {
        Pos::all().any(|pos| {
            self.get(pos) == Cell::Peg && !self.valid_moves_from(pos).is_empty()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if (row, col) falls in one of the four 2x2 corner blocks.
fn in_corner_block(row: usize, col: usize) -> bool {
    (row < 2 || row > 4) && (col < 2 || col > 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();

        assert_eq!(board.peg_count(), 32);
        assert_eq!(board.get(CENTER), Cell::Empty);

        let invalid = Pos::all()
            .filter(|&pos| board.get(pos) == Cell::Invalid)
            .count();
        assert_eq!(invalid, 16);

        let playable = Pos::all()
            .filter(|&pos| board.get(pos).is_playable())
            .count();
        assert_eq!(playable, PLAYABLE_CELLS);
    }

    #[test]
    fn test_corner_blocks_invalid() {
        let board = Board::new();

        for &(row, col) in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(board.get(Pos::from_row_col(row, col)), Cell::Invalid);
            assert_eq!(board.get(Pos::from_row_col(row, 6 - col)), Cell::Invalid);
            assert_eq!(board.get(Pos::from_row_col(6 - row, col)), Cell::Invalid);
            assert_eq!(board.get(Pos::from_row_col(6 - row, 6 - col)), Cell::Invalid);
        }
    }

    #[test]
    fn test_legal_jump_into_center() {
        let board = Board::new();

        // The four pegs two cells from the empty center can jump into it
        assert!(board.is_legal_jump(Pos::from_row_col(1, 3), CENTER));
        assert!(board.is_legal_jump(Pos::from_row_col(5, 3), CENTER));
        assert!(board.is_legal_jump(Pos::from_row_col(3, 1), CENTER));
        assert!(board.is_legal_jump(Pos::from_row_col(3, 5), CENTER));
    }

    #[test]
    fn test_jump_rejects_occupied_destination() {
        let board = Board::new();

        // (3,2) -> (3,4): destination holds a peg
        assert!(!board.is_legal_jump(
            Pos::from_row_col(3, 2),
            Pos::from_row_col(3, 4)
        ));
    }

    #[test]
    fn test_jump_rejects_empty_source() {
        let board = Board::new();

        // Center is empty, so nothing can jump out of it
        assert!(!board.is_legal_jump(CENTER, Pos::from_row_col(3, 1)));
    }

    #[test]
    fn test_jump_rejects_bad_geometry() {
        let board = Board::with_pegs(&[
            Pos::from_row_col(3, 1),
            Pos::from_row_col(3, 2),
            Pos::from_row_col(2, 2),
        ]);

        let from = Pos::from_row_col(3, 1);

        // Distance 2 on both axes (diagonal)
        assert!(!board.is_legal_jump(from, Pos::from_row_col(5, 3)));
        // Distance 1
        assert!(!board.is_legal_jump(from, Pos::from_row_col(3, 0)));
        // Distance 3
        assert!(!board.is_legal_jump(from, Pos::from_row_col(3, 4)));
        // Same cell
        assert!(!board.is_legal_jump(from, from));
    }

    #[test]
    fn test_jump_rejects_empty_midpoint() {
        let board = Board::with_pegs(&[Pos::from_row_col(3, 1)]);

        // (3,2) is empty: nothing to capture
        assert!(!board.is_legal_jump(
            Pos::from_row_col(3, 1),
            Pos::from_row_col(3, 3)
        ));
    }

    #[test]
    fn test_valid_moves_direction_order() {
        // A peg at the center with neighbors on all four sides and all
        // four landing cells open
        let board = Board::with_pegs(&[
            CENTER,
            Pos::from_row_col(2, 3),
            Pos::from_row_col(4, 3),
            Pos::from_row_col(3, 2),
            Pos::from_row_col(3, 4),
        ]);

        let moves = board.valid_moves_from(CENTER);
        assert_eq!(
            moves.as_slice(),
            &[
                Pos::from_row_col(1, 3),
                Pos::from_row_col(5, 3),
                Pos::from_row_col(3, 1),
                Pos::from_row_col(3, 5),
            ]
        );
    }

    #[test]
    fn test_valid_moves_stuck_peg() {
        let board = Board::new();

        // (3,2) has pegs or walls in every direction on the fresh board
        assert!(board.valid_moves_from(Pos::from_row_col(3, 2)).is_empty());
        // Empty and invalid cells have no moves either
        assert!(board.valid_moves_from(CENTER).is_empty());
        assert!(board.valid_moves_from(Pos::from_row_col(0, 0)).is_empty());
    }

    #[test]
    fn test_has_any_move() {
        assert!(Board::new().has_any_move());

        // Two pegs in opposite corners of the cross: both stuck
        let stuck = Board::with_pegs(&[
            Pos::from_row_col(0, 2),
            Pos::from_row_col(6, 4),
        ]);
        assert!(!stuck.has_any_move());

        // A lone peg can never move
        assert!(!Board::with_pegs(&[CENTER]).has_any_move());
    }

    #[test]
    fn test_with_pegs() {
        let board = Board::with_pegs(&[CENTER, Pos::from_row_col(3, 2)]);

        assert_eq!(board.peg_count(), 2);
        assert_eq!(board.get(CENTER), Cell::Peg);
        assert_eq!(board.get(Pos::from_row_col(3, 2)), Cell::Peg);
        assert_eq!(board.get(Pos::from_row_col(3, 4)), Cell::Empty);
        assert_eq!(board.get(Pos::from_row_col(0, 0)), Cell::Invalid);
    }

    #[test]
    fn test_reset_restores_canonical_layout() {
        let mut board = Board::with_pegs(&[CENTER]);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
