//! Iterative deepening under a time budget.

use chess_core::{Move, Position, SearchInfo, SearchLimits, SearchResult, TimeControl};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::score::{MATE_SCORE, Score, mate_distance};
use crate::search::{Searcher, find_mate_in_one};
use crate::time_manager;

/// Chooses a move for the side to move in `pos`.
///
/// Depths run from 1 to the planned maximum. The clock is checked only after
/// a depth completes, so the result always comes from a finished iteration.
/// `report` receives one event per completed depth. `pos` is returned in the
/// state it was received in.
pub fn get_best_move(
    pos: &mut Position,
    cfg: &EngineConfig,
    limits: &SearchLimits,
    report: &mut dyn FnMut(&SearchInfo),
) -> Result<SearchResult, SearchError> {
    let plan = time_manager::plan(pos, &cfg.search, limits);
    let clock = TimeControl::start(plan.budget);

    if !pos.has_legal_moves() {
        return Err(SearchError::NoLegalMove);
    }

    if let Some(mv) = find_mate_in_one(pos) {
        let score = MATE_SCORE - 1;
        report(&SearchInfo {
            depth: 1,
            score,
            nodes: 0,
            elapsed: clock.elapsed(),
        });
        info!(%mv, "mate in one");
        return Ok(SearchResult {
            best_move: Some(mv),
            score,
            depth: 1,
            nodes: 0,
        });
    }

    debug!(
        max_depth = plan.max_depth,
        budget_ms = clock.budget().map(|b| b.as_millis() as u64),
        "starting search"
    );

    let mut searcher = Searcher::new(cfg);
    let mut best: Option<(Move, Score, u8)> = None;

    for depth in 1..=plan.max_depth {
        let Some((mv, score)) = searcher.search_root(pos, depth) else {
            break;
        };
        best = Some((mv, score, depth));

        let info = SearchInfo {
            depth,
            score,
            nodes: searcher.total_nodes(),
            elapsed: clock.elapsed(),
        };
        debug!(
            depth,
            score,
            nodes = info.nodes,
            seldepth = searcher.seldepth,
            "depth complete"
        );
        report(&info);

        if score > 0
            && let Some(plies) = mate_distance(score)
        {
            info!(depth, plies, "forced mate found");
            break;
        }
        if clock.is_exhausted() {
            debug!(depth, "time budget used up");
            break;
        }
    }

    let (mv, score, depth) = best.ok_or(SearchError::NoLegalMove)?;
    info!(%mv, score, depth, nodes = searcher.total_nodes(), "best move");
    Ok(SearchResult {
        best_move: Some(mv),
        score,
        depth,
        nodes: searcher.total_nodes(),
    })
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
