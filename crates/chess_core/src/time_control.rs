//! Search limits and the per-move clock.
//!
//! Engines poll the clock only between depth iterations, so nothing here is
//! shared across threads.

use std::time::{Duration, Instant};

use cozy_chess::Color;

use crate::uci::GoParams;

/// Limits requested for one move.
///
/// Every field is optional: an engine fills the gaps from its own schedule
/// (phase-dependent depth, clock-derived budget).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Fixed search depth in plies
    pub depth: Option<u8>,
    /// Fixed thinking time for this move
    pub move_time: Option<Duration>,
    /// Remaining game clock of the side to move
    pub clock: Option<Duration>,
}

impl SearchLimits {
    /// Create limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// Create limits with only a fixed move time.
    pub fn move_time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::default()
        }
    }

    /// Create limits from the remaining game clock.
    pub fn clock(remaining: Duration) -> Self {
        Self {
            clock: Some(remaining),
            ..Self::default()
        }
    }

    /// Translate a `go` command, picking the clock of the side to move.
    pub fn from_go(go: &GoParams, side: Color) -> Self {
        Self {
            depth: go.depth,
            move_time: go.movetime.map(Duration::from_millis),
            clock: go.time_left(side).map(Duration::from_millis),
        }
    }
}

/// Wall clock for a single move selection.
#[derive(Debug, Clone, Copy)]
pub struct TimeControl {
    start: Instant,
    /// Time allowed for this move (None = unbounded)
    budget: Option<Duration>,
}

impl TimeControl {
    /// Start the clock now.
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get remaining time (None if there is no budget).
    pub fn remaining(&self) -> Option<Duration> {
        let budget = self.budget?;
        Some(budget.saturating_sub(self.elapsed()))
    }

    /// True once the budget has been used up.
    pub fn is_exhausted(&self) -> bool {
        self.budget.is_some_and(|budget| self.elapsed() >= budget)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
