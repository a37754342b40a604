//! Final score table.
//!
//! Applied by the caller once [`GameEngine::game_state`](crate::GameEngine::game_state)
//! reports a terminal state. Fewer pegs left means a higher score, with
//! 200 reserved for finishing on a single peg.

/// Score awarded for ending a game with `remaining_pegs` pegs on the
/// board. Nine or more pegs score zero.
#[must_use]
pub fn final_score(remaining_pegs: usize) -> u32 {
    match remaining_pegs {
        1 => 200,
        2 => 175,
        3 => 150,
        4 => 125,
        5 => 100,
        6 => 75,
        7 => 50,
        8 => 25,
        _ => 0,
    }
}
