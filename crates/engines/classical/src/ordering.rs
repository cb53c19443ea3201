//! Move ordering: captures first, most valuable victim / least valuable attacker.

use std::cmp::Reverse;

use chess_core::{Move, Position};

use crate::config::EvalConfig;
use crate::score::Score;

/// Victim value minus attacker value, or `None` for a quiet move.
pub fn mvv_lva(pos: &Position, mv: Move, cfg: &EvalConfig) -> Option<Score> {
    let victim = pos.captured_piece(mv)?;
    let attacker = pos.board().piece_on(mv.from)?;
    Some(cfg.piece_value(victim) - cfg.piece_value(attacker))
}

/// Sorts captures ahead of quiet moves, best trade first.
/// Quiet moves keep their generation order.
pub fn order_moves(pos: &Position, moves: &mut [Move], cfg: &EvalConfig) {
    moves.sort_by_key(|&mv| Reverse(mvv_lva(pos, mv, cfg)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
