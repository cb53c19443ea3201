pub use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};

/// Reason a position has no further play (or may be claimed drawn).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal {
    Checkmate,
    Stalemate,
    FiftyMoves,
    Repetition,
    InsufficientMaterial,
}

impl Terminal {
    pub fn is_draw(self) -> bool {
        !matches!(self, Terminal::Checkmate)
    }
}

// Helpers
pub fn file_of(sq: Square) -> i32 {
    sq.file() as i32
}
pub fn rank_of(sq: Square) -> i32 {
    sq.rank() as i32
}

/// King-step (Chebyshev) distance between two squares, 0..=7.
pub fn square_distance(a: Square, b: Square) -> i32 {
    let df = (file_of(a) - file_of(b)).abs();
    let dr = (rank_of(a) - rank_of(b)).abs();
    df.max(dr)
}

/// Square colour parity: true for light squares.
pub fn is_light_square(sq: Square) -> bool {
    (file_of(sq) + rank_of(sq)) % 2 == 1
}
