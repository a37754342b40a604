//! Board representation: cells, positions, and the cross-shaped grid.
//!
//! ## Key Types
//!
//! - `Cell`: What a grid square holds (`Invalid`, `Empty`, `Peg`)
//! - `Pos`: Row-major index into the 7x7 grid
//! - `Direction`: The four jump directions, in fixed scan order
//! - `Board`: The grid itself, with jump-legality queries

pub mod cell;
pub mod grid;
pub mod pos;

pub use cell::Cell;
pub use grid::{Board, PLAYABLE_CELLS};
pub use pos::{Direction, Pos, BOARD_SIZE, CENTER, TOTAL_CELLS};
