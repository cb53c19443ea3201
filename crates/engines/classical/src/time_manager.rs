//! Per-move depth and time budgets.
//!
//! The schedule is fixed: a share of the remaining clock that depends on the
//! move number, and a depth chosen from the game phase. No increment or
//! panic time is considered.

use std::time::Duration;

use chess_core::{Position, SearchLimits};

use crate::config::{MAX_DEPTH, SearchConfig};
use crate::phase::GamePhase;

/// What the driver may spend on one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    pub max_depth: u8,
    /// None: depth-limited only
    pub budget: Option<Duration>,
}

pub fn plan(pos: &Position, cfg: &SearchConfig, limits: &SearchLimits) -> SearchPlan {
    let budget = limits.move_time.or_else(|| {
        limits
            .clock
            .map(|remaining| move_budget(remaining, pos.fullmove_number(), cfg))
    });
    SearchPlan {
        max_depth: max_depth(pos, cfg, limits),
        budget,
    }
}

/// Share of the remaining clock for the move at `fullmove`.
pub fn move_budget(remaining: Duration, fullmove: u16, cfg: &SearchConfig) -> Duration {
    let divisor = if fullmove < cfg.early_moves {
        cfg.early_divisor
    } else if fullmove < cfg.middle_moves {
        cfg.middle_divisor
    } else {
        cfg.late_divisor
    };
    remaining / divisor.max(1)
}

/// Deepest iteration for this move. An explicit depth wins over the schedule.
pub fn max_depth(pos: &Position, cfg: &SearchConfig, limits: &SearchLimits) -> u8 {
    if let Some(depth) = limits.depth {
        return depth.clamp(1, MAX_DEPTH);
    }

    let fullmove = pos.fullmove_number();
    let depth = match GamePhase::classify(pos.board()) {
        GamePhase::KingRookEndgame => cfg.rook_endgame_depth,
        GamePhase::KingQueenEndgame => cfg.queen_endgame_depth,
        _ if fullmove < cfg.opening_moves => cfg.opening_depth,
        _ if fullmove >= cfg.long_game_moves => cfg.long_game_depth,
        _ => cfg.base_depth,
    };
    depth.clamp(1, MAX_DEPTH)
}

#[cfg(test)]
#[path = "time_manager_tests.rs"]
mod time_manager_tests;
