//! # peg-solitaire
//!
//! A game-state engine for English peg solitaire (the 33-cell cross board).
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine knows nothing about rendering, timers,
//!    sound, or persistence. A caller feeds it clicked cell indices and
//!    reads back board snapshots and state queries.
//!
//! 2. **Total Inputs**: Every cell index is accepted. Out-of-range or
//!    illegal input is reported through [`ClickResult::InvalidMove`],
//!    never by panicking.
//!
//! 3. **Reversible History**: Every executed jump is recorded and can be
//!    undone exactly, restoring the previous board cell-for-cell.
//!
//! ## Modules
//!
//! - `board`: Cell values, positions, directions, and the 7x7 cross grid
//! - `engine`: Click dispatch, jump execution, undo, hints, game state
//! - `scoring`: Final score table keyed by remaining pegs
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::{ClickResult, GameEngine};
//!
//! let mut engine = GameEngine::new();
//!
//! // Select the peg at row 3, col 1; its only jump lands in the center.
//! let result = engine.handle_click(22);
//! assert!(matches!(result, ClickResult::PegSelected { .. }));
//!
//! assert_eq!(engine.handle_click(24), ClickResult::MoveMade);
//! assert_eq!(engine.remaining_pegs(), 31);
//! assert!(engine.can_undo());
//! ```

pub mod board;
pub mod engine;
pub mod scoring;

// Re-export commonly used types
pub use crate::board::{
    Board, Cell, Direction, Pos,
    BOARD_SIZE, CENTER, PLAYABLE_CELLS, TOTAL_CELLS,
};

pub use crate::engine::{ClickResult, GameEngine, GameState, Move};

pub use crate::scoring::final_score;
