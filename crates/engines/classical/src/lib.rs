//! Classical Chess Engine
//!
//! Negamax alpha-beta search with a capture-only quiescence extension, MVV-LVA
//! move ordering and a phase-aware piece-square evaluation. Iterative
//! deepening runs under a clock-derived time budget.
//!
//! Engine variants differ only in data: see [`EngineConfig`].

pub mod config;
pub mod driver;
pub mod error;
pub mod eval;
pub mod ordering;
pub mod phase;
pub mod pst;
pub mod score;
pub mod search;
pub mod time_manager;

use std::path::Path;

use chess_core::{Engine, Position, SearchInfo, SearchLimits, SearchResult};
use tracing::warn;

pub use config::{EngineConfig, EvalConfig, PositionalWeights, SearchConfig};
pub use driver::get_best_move;
pub use error::{ConfigError, SearchError};
pub use eval::evaluate;
pub use phase::GamePhase;
pub use score::{INFINITY, MATE_SCORE, Score};

/// Classical chess engine driven by an [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    config: EngineConfig,
    /// Node counter of the last search
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Load an engine profile from a TOML file.
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::with_config(EngineConfig::load(path)?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(
        &mut self,
        pos: &mut Position,
        limits: &SearchLimits,
        report: &mut dyn FnMut(&SearchInfo),
    ) -> SearchResult {
        match get_best_move(pos, &self.config, limits, report) {
            Ok(result) => {
                self.nodes = result.nodes;
                result
            }
            Err(SearchError::NoLegalMove) => {
                warn!(fen = %pos.fen(), "search requested in a finished game");
                self.nodes = 0;
                SearchResult {
                    best_move: None,
                    score: score::color_sign(pos.side_to_move()) * evaluate(pos, 0, &self.config.eval),
                    depth: 0,
                    nodes: 0,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Classical v2.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
