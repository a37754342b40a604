//! Cell values.

use serde::{Deserialize, Serialize};

/// What a single grid square holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Outside the cross-shaped playable region. Fixed for the lifetime
    /// of a board; never selectable, never a jump source or target.
    Invalid,
    /// Playable, currently unoccupied.
    Empty,
    /// Playable, currently holds a peg.
    Peg,
}

impl Cell {
    /// Check if this cell is inside the playable region.
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, Cell::Invalid)
    }
}
