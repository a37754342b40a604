//! Property-based tests over arbitrary click sequences.
//!
//! The engine must accept any input without panicking, hold the
//! peg/move-count conservation law, never disturb the invalid corner
//! mask, and undo every executed move exactly.

use peg_solitaire::{Board, Cell, ClickResult, GameEngine, Pos};
use proptest::prelude::*;

proptest! {
    /// Any click sequence, including out-of-range indices, keeps the
    /// engine consistent: every executed move removes exactly one peg.
    #[test]
    fn clicks_preserve_conservation(clicks in prop::collection::vec(0usize..64, 0..200)) {
        let mut engine = GameEngine::new();

        for index in clicks {
            let _ = engine.handle_click(index);
            prop_assert_eq!(engine.remaining_pegs() + engine.move_count(), 32);
        }
    }

    /// The invalid corner blocks never change, whatever the caller does.
    #[test]
    fn corner_mask_is_fixed(clicks in prop::collection::vec(0usize..49, 0..200)) {
        let mut engine = GameEngine::new();

        for index in clicks {
            engine.handle_click(index);
        }

        for pos in Pos::all() {
            let corner = (pos.row() < 2 || pos.row() > 4) && (pos.col() < 2 || pos.col() > 4);
            prop_assert_eq!(engine.board().get(pos) == Cell::Invalid, corner);
        }
    }

    /// Undoing immediately after a move restores the exact prior board,
    /// move count, and a cleared selection.
    #[test]
    fn move_then_undo_round_trips(clicks in prop::collection::vec(0usize..49, 0..300)) {
        let mut engine = GameEngine::new();

        for index in clicks {
            let before = engine.board().clone();
            let count = engine.move_count();

            if engine.handle_click(index) == ClickResult::MoveMade {
                prop_assert!(engine.undo_move());
                prop_assert_eq!(engine.board(), &before);
                prop_assert_eq!(engine.move_count(), count);
                prop_assert_eq!(engine.selected(), None);
            }
        }
    }

    /// Undoing everything always lands back on the canonical board.
    #[test]
    fn undo_all_restores_initial(clicks in prop::collection::vec(0usize..49, 0..300)) {
        let mut engine = GameEngine::new();

        for index in clicks {
            engine.handle_click(index);
        }

        while engine.undo_move() {}

        prop_assert_eq!(engine.board(), &Board::new());
        prop_assert_eq!(engine.move_count(), 0);
        prop_assert!(!engine.can_undo());
    }
}
