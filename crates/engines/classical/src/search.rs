//! Negamax search with alpha-beta pruning and a capture-only quiescence
//! extension.
//!
//! Every node applies moves through [`Position::play`], so the position is
//! restored on every exit path, cutoffs included.

use chess_core::{Move, Position};

use crate::config::{EngineConfig, MAX_DEPTH, MAX_QUIESCENCE_DEPTH};
use crate::eval::evaluate;
use crate::ordering::order_moves;
use crate::score::{INFINITY, Score, color_sign};

/// Single-threaded searcher holding the configuration and node statistics.
#[derive(Debug)]
pub struct Searcher<'a> {
    cfg: &'a EngineConfig,
    /// Interior and horizon nodes
    pub nodes: u64,
    /// Quiescence nodes
    pub qnodes: u64,
    /// Deepest ply reached, quiescence included
    pub seldepth: u8,
}

impl<'a> Searcher<'a> {
    pub fn new(cfg: &'a EngineConfig) -> Self {
        Self {
            cfg,
            nodes: 0,
            qnodes: 0,
            seldepth: 0,
        }
    }

    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.qnodes
    }

    /// Searches every root move to `depth` with a full window.
    ///
    /// Returns the best move and its score for the side to move, or `None`
    /// when the root has no legal move.
    pub fn search_root(&mut self, pos: &mut Position, depth: u8) -> Option<(Move, Score)> {
        let depth = depth.clamp(1, MAX_DEPTH);
        let color = color_sign(pos.side_to_move());

        let mut moves = pos.legal_moves();
        order_moves(pos, &mut moves, &self.cfg.eval);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, Score)> = None;

        for mv in moves {
            let capture = pos.is_capture(mv);
            let score = {
                let mut child = pos.play(mv);
                -self.negamax(&mut child, depth - 1, -beta, -alpha, -color, 1, capture)
            };
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    /// Score of `pos` for the side to move (`color` is its sign).
    #[allow(clippy::too_many_arguments)]
    pub fn negamax(
        &mut self,
        pos: &mut Position,
        depth: u8,
        mut alpha: Score,
        beta: Score,
        color: Score,
        ply: u8,
        last_was_capture: bool,
    ) -> Score {
        self.nodes += 1;
        self.seldepth = self.seldepth.max(ply);

        if depth == 0 {
            if last_was_capture {
                let qdepth = self.cfg.search.quiescence_depth.min(MAX_QUIESCENCE_DEPTH);
                return self.quiescence(pos, alpha, beta, color, ply, qdepth);
            }
            return color * evaluate(pos, ply, &self.cfg.eval);
        }

        let mut moves = pos.legal_moves();
        if moves.is_empty() {
            // Checkmate or stalemate: the evaluator scores it.
            return color * evaluate(pos, ply, &self.cfg.eval);
        }
        if pos.is_draw() {
            return 0;
        }

        order_moves(pos, &mut moves, &self.cfg.eval);

        let mut best = -INFINITY;
        for mv in moves {
            let capture = pos.is_capture(mv);
            let score = {
                let mut child = pos.play(mv);
                -self.negamax(&mut child, depth - 1, -beta, -alpha, -color, ply + 1, capture)
            };

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        best
    }

    /// Capture-only search below the horizon, at most `depth` plies.
    pub fn quiescence(
        &mut self,
        pos: &mut Position,
        mut alpha: Score,
        beta: Score,
        color: Score,
        ply: u8,
        depth: u8,
    ) -> Score {
        self.qnodes += 1;
        self.seldepth = self.seldepth.max(ply);

        let stand_pat = color * evaluate(pos, ply, &self.cfg.eval);
        if depth == 0 {
            return stand_pat;
        }

        let mut moves = pos.legal_moves();
        if moves.is_empty() || pos.is_draw() {
            return stand_pat;
        }

        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        moves.retain(|&mv| pos.is_capture(mv));
        order_moves(pos, &mut moves, &self.cfg.eval);

        for mv in moves {
            let score = {
                let mut child = pos.play(mv);
                -self.quiescence(&mut child, -beta, -alpha, -color, ply + 1, depth - 1)
            };

            if score >= beta {
                return beta;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}

/// A move that checkmates immediately, if one exists.
pub fn find_mate_in_one(pos: &mut Position) -> Option<Move> {
    pos.legal_moves().into_iter().find(|&mv| {
        let child = pos.play(mv);
        child.is_checkmate()
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
