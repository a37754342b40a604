//! Click outcomes and derived game state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Pos;

/// What a cell click did.
///
/// Only `PegSelected` carries a payload: the legal destinations of the
/// newly selected peg, for the caller to highlight. The engine keeps no
/// record of highlighted cells beyond the current selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickResult {
    /// A peg was selected. `valid_moves` lists every legal destination in
    /// fixed direction order; it may be empty for a stuck peg.
    PegSelected {
        valid_moves: SmallVec<[Pos; 4]>,
    },
    /// The selected peg was clicked again; the selection is cleared.
    Deselected,
    /// A legal jump was executed and recorded in history.
    MoveMade,
    /// Anything else: an invalid or out-of-range cell, an illegal jump,
    /// or an empty cell with no selection. No state changed.
    InvalidMove,
}

/// Derived game classification; never stored, always recomputed from the
/// current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// More than one peg remains and at least one legal jump exists.
    InProgress,
    /// One peg remains, not on the center cell.
    Win,
    /// One peg remains, on the center cell.
    PerfectWin,
    /// More than one peg remains and no peg can move.
    GameOver,
}

impl GameState {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}
