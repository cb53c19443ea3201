//! Material-based game phase classification.
//!
//! The phase is recomputed from the board on every evaluation; it is never
//! stored alongside a position.

use chess_core::{Board, Color, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Normal,
    Endgame,
    /// King and rook against a bare king
    KingRookEndgame,
    /// King and queen against a bare king
    KingQueenEndgame,
}

impl GamePhase {
    pub fn classify(board: &Board) -> GamePhase {
        if board.occupied().len() == 3 {
            if board.pieces(Piece::Rook).len() == 1 {
                return GamePhase::KingRookEndgame;
            }
            if board.pieces(Piece::Queen).len() == 1 {
                return GamePhase::KingQueenEndgame;
            }
        }

        let counts = [Color::White, Color::Black].map(|color| MajorCount::of(board, color));
        let endgame = counts.iter().any(|c| c.is_reduced())
            || counts.iter().all(|c| c.queens == 2 && c.rooks == 0 && c.others == 0);

        if endgame {
            GamePhase::Endgame
        } else {
            GamePhase::Normal
        }
    }

    /// Endgame terms and the endgame king table apply.
    #[inline]
    pub fn is_endgame(self) -> bool {
        !matches!(self, GamePhase::Normal)
    }

    /// Lone rook or queen against a bare king.
    #[inline]
    pub fn is_mating_signature(self) -> bool {
        matches!(
            self,
            GamePhase::KingRookEndgame | GamePhase::KingQueenEndgame
        )
    }
}

/// Heavy-piece census of one side.
struct MajorCount {
    rooks: u32,
    queens: u32,
    /// Pawns and minor pieces
    others: u32,
}

impl MajorCount {
    fn of(board: &Board, color: Color) -> Self {
        let count = |piece| board.colored_pieces(color, piece).len();
        Self {
            rooks: count(Piece::Rook),
            queens: count(Piece::Queen),
            others: count(Piece::Pawn) + count(Piece::Knight) + count(Piece::Bishop),
        }
    }

    /// No heavy pieces, two rooks without a queen, or a queen without rooks.
    fn is_reduced(&self) -> bool {
        (self.rooks == 0 && self.queens == 0)
            || (self.rooks == 2 && self.queens == 0)
            || (self.queens == 1 && self.rooks == 0)
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod phase_tests;
