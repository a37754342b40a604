//! The game engine.
//!
//! Owns the board, the current selection, and the undo history. Every
//! operation is a synchronous in-memory state transition; illegal input
//! is reported through return values, never by panicking.

use crate::board::{Board, Cell, Pos, CENTER};

use super::moves::Move;
use super::result::{ClickResult, GameState};

/// A single peg-solitaire game session.
///
/// ## Example
///
/// ```
/// use peg_solitaire::{ClickResult, GameEngine, GameState};
///
/// let mut engine = GameEngine::new();
/// assert_eq!(engine.game_state(), GameState::InProgress);
///
/// // Jump the peg at (3,1) over (3,2) into the empty center.
/// engine.handle_click(22);
/// assert_eq!(engine.handle_click(24), ClickResult::MoveMade);
///
/// assert_eq!(engine.move_count(), 1);
/// assert!(engine.undo_move());
/// assert_eq!(engine.move_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    selected: Option<Pos>,
    history: Vec<Move>,
}

impl GameEngine {
    /// Create an engine on the canonical starting board.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create an engine on a custom board, with no selection and an
    /// empty history.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            selected: None,
            history: Vec::new(),
        }
    }

    /// Dispatch a click on a cell, by row-major index.
    ///
    /// Precedence:
    /// 1. out-of-range index or `Invalid` cell: [`ClickResult::InvalidMove`]
    /// 2. a peg other than the selected one: select it
    /// 3. the selected peg: deselect it
    /// 4. an empty cell reachable by a legal jump from the selection:
    ///    execute the jump
    /// 5. anything else: [`ClickResult::InvalidMove`], no state change
    pub fn handle_click(&mut self, index: usize) -> ClickResult {
        let Some(pos) = Pos::from_index(index) else {
            return ClickResult::InvalidMove;
        };

        let cell = self.board.get(pos);
        if cell == Cell::Invalid {
            return ClickResult::InvalidMove;
        }

        if cell == Cell::Peg && self.selected != Some(pos) {
            self.selected = Some(pos);
            return ClickResult::PegSelected {
                valid_moves: self.board.valid_moves_from(pos),
            };
        }

        if self.selected == Some(pos) {
            self.selected = None;
            return ClickResult::Deselected;
        }

        if cell == Cell::Empty {
            if let Some(from) = self.selected {
                if self.board.is_legal_jump(from, pos) {
                    self.make_move(from, pos);
                    self.selected = None;
                    return ClickResult::MoveMade;
                }
            }
        }

        ClickResult::InvalidMove
    }

    fn make_move(&mut self, from: Pos, to: Pos) {
        let captured = from.midpoint(to);

        self.board.set(from, Cell::Empty);
        self.board.set(to, Cell::Peg);
        self.board.set(captured, Cell::Empty);

        self.history.push(Move::jump(from, to));
    }

    /// Undo the most recent move, restoring the three affected cells and
    /// clearing any selection.
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(mv) = self.history.pop() else {
            return false;
        };

        self.board.set(mv.from, Cell::Peg);
        self.board.set(mv.to, Cell::Empty);
        if let Some(captured) = mv.captured {
            self.board.set(captured, Cell::Peg);
        }

        self.selected = None;
        true
    }

    /// Suggest a move: the first peg in row-major order that has a legal
    /// jump, paired with its first destination in direction order.
    ///
    /// Deterministic over unmodified state. The returned move carries no
    /// capture; it has not been executed. Returns `None` when no peg can
    /// move.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        for from in Pos::all() {
            if self.board.get(from) != Cell::Peg {
                continue;
            }
            if let Some(&to) = self.board.valid_moves_from(from).first() {
                return Some(Move::hint(from, to));
            }
        }
        None
    }

    /// Classify the current board.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        match self.board.peg_count() {
            1 if self.board.get(CENTER) == Cell::Peg => GameState::PerfectWin,
            1 => GameState::Win,
            _ if self.board.has_any_move() => GameState::InProgress,
            _ => GameState::GameOver,
        }
    }

    /// Count the pegs left on the board.
    #[must_use]
    pub fn remaining_pegs(&self) -> usize {
        self.board.peg_count()
    }

    /// Count the executed moves since the last reset.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Check whether there is a move to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get a read-only snapshot of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the currently selected peg, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Reinitialize in place: canonical layout, no selection, empty
    /// history.
    pub fn reset(&mut self) {
        self.board.reset();
        self.selected = None;
        self.history.clear();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
