pub mod error;
pub mod position;
pub mod time_control;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use error::ChessError;
pub use position::{MoveGuard, Position, START_FEN};
pub use time_control::*;
pub use types::*;
pub use uci::*;

use std::time::Duration;

// =============================================================================
// Engine trait: implemented by every search engine in the workspace
// =============================================================================

/// Progress report emitted after each completed search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u8,
    /// Score in centipawns from the side to move's perspective
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the engine's perspective
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position; returned unchanged
    /// * `limits` - Search limits (depth, time, etc.)
    /// * `report` - Called once per completed depth
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(
        &mut self,
        pos: &mut Position,
        limits: &SearchLimits,
        report: &mut dyn FnMut(&SearchInfo),
    ) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
