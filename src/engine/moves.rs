//! Completed and hypothetical jumps.

use serde::{Deserialize, Serialize};

use crate::board::Pos;

/// A jump from one cell to another.
///
/// Executed moves always carry the captured midpoint so they can be
/// undone. A hint describes a jump that has not happened yet, so its
/// `captured` field is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The cell the peg jumped from.
    pub from: Pos,
    /// The cell the peg landed on.
    pub to: Pos,
    /// The cell of the captured peg, `None` for hints.
    pub captured: Option<Pos>,
}

impl Move {
    /// Create an executed jump; the captured cell is the midpoint.
    #[must_use]
    pub fn jump(from: Pos, to: Pos) -> Self {
        Self {
            from,
            to,
            captured: Some(from.midpoint(to)),
        }
    }

    /// Create a hint: a suggested jump with no capture recorded.
    #[must_use]
    pub fn hint(from: Pos, to: Pos) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }
}
