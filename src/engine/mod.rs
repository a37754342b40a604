//! The game engine: click dispatch, jump execution, undo, and hints.
//!
//! ## Key Types
//!
//! - `Move`: A completed or hypothetical jump
//! - `ClickResult`: What a cell click did, as a tagged union
//! - `GameState`: Derived terminal/in-progress classification
//! - `GameEngine`: The board plus selection and undo history

pub mod game;
pub mod moves;
pub mod result;

pub use game::GameEngine;
pub use moves::Move;
pub use result::{ClickResult, GameState};
