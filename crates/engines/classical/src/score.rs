//! Centipawn scores and the mate range.

use chess_core::Color;

pub type Score = i32;

/// Score of delivering mate at the root; a mate found `ply` plies deep
/// scores `MATE_SCORE - ply`.
pub const MATE_SCORE: Score = 10_000;

/// Bound of the search window, beyond any reachable score.
pub const INFINITY: Score = 30_000;

/// Mate distances never exceed this many plies.
const MAX_MATE_PLY: Score = 100;

#[inline]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_SCORE - MAX_MATE_PLY
}

/// Plies to mate encoded in a mate score, if it is one.
pub fn mate_distance(score: Score) -> Option<Score> {
    is_mate_score(score).then(|| MATE_SCORE - score.abs())
}

/// +1 for White, -1 for Black: converts absolute scores to side-relative.
#[inline]
pub fn color_sign(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
