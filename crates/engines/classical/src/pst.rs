//! Default piece-square tables.
//!
//! Tables are drawn as seen from White: the first row is rank 8, the last
//! row rank 1. [`table_index`] maps a square to its slot for either colour,
//! so one table serves both sides.

use chess_core::{Color, Square};

#[rustfmt::skip]
pub const PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     60,  60,  55,  55,  55,  50,  60,  60,
     25,  20,  40,  45,  45,  20,  10,  25,
     10,   5,  30,  40,  40,   5,  -5,  10,
     10, -20,  45,  50,  50,   5, -20,  10,
     10,  10,  10,   5,   5, -30,  20,  25,
      5,   5,   5, -20, -20,  10,  10,  10,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const KNIGHT: [i32; 64] = [
     10, -10,  10,   5,  10,  10,  -5, -30,
     -5,   5,  10,   5,  15,  10,   0,   5,
      5,  20,  30,  50,  50,  30,  10,  10,
      0,  20,  45,  40,  40,  45,  20,  -5,
    -20,  10,  30,  45,  45,  30,  10, -20,
     -5,  10,  35,   0,   0,  35,  20,  -5,
      5,   0,   5,  10,  10,   5,   5,  15,
    -50, -30,  -5,   5,   5,  10, -30, -50,
];

#[rustfmt::skip]
pub const BISHOP: [i32; 64] = [
     -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,
     -5,   5,   0,   5,   5,   0,   5,   5,
      0,   0,  10,   0,   0,  15,   0,   0,
      5,  20,   0,  10,  10,   0,  30,   0,
     25,   5,  30,  10,  10,  25,   0,  20,
     -5,  10,  20,  10,   5,   0,  25,   0,
      5,  20,  35,  20,  20,   5,  20,  20,
     -5,  25, -20,   0,   0, -25, -10,  -5,
];

#[rustfmt::skip]
pub const ROOK: [i32; 64] = [
     15,  15,  15,  15,  15,  15,  15,  15,
     15,  15,  15,  20,  20,  15,  15,  15,
      0,   5,   5,  10,  10,   5,   5,   0,
      0,   0,   0,   5,   5,   0,   0,   0,
      0,   0,   0,   5,   5,   0,   0,   0,
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
    -10,   0,   5,  10,  10,   5,   0, -10,
];

#[rustfmt::skip]
pub const QUEEN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      0,   5,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,  -5,   5,   5,   0,   0,   0,
      0,   0,   5,   5,   5,   5,   0,   0,
      0,  10,   0,   5,   0,   5,   5,   0,
      0,   0,   5,   5,  10,   0,   0,   0,
      0,   0,   0,  -5,   0,   0,   0,   0,
];

/// King safety: stay home behind the pawns.
#[rustfmt::skip]
pub const KING_MIDDLEGAME: [i32; 64] = [
    -90, -80, -80, -80, -80, -80, -80, -90,
    -70, -70, -70, -70, -70, -70, -70, -70,
    -60, -60, -60, -70, -70, -60, -60, -50,
    -50, -50, -50, -60, -60, -50, -50, -50,
    -40, -40, -40, -60, -60, -40, -40, -40,
    -30, -30, -30, -50, -50, -30, -30, -30,
      5,   5, -20, -20, -30, -20,   5,   5,
     -5,  70,  60,   0, -10,  10,  70,  10,
];

/// King activity: head for the centre.
#[rustfmt::skip]
pub const KING_ENDGAME: [i32; 64] = [
     20,  20,  20,  25,  25,  20,  20,  20,
     20,  25,  25,  30,  30,  25,  25,  20,
     15,  20,  40,  50,  50,  40,  20,  15,
     10,  15,  50,  60,  60,  50,  15,  10,
     10,  10,  40,  60,  60,  40,  10,   5,
      5,  10,  35,  40,  40,  35,  10,   5,
    -20,   5,  10,  30,  30,  20,  10, -10,
    -60, -50, -40, -15, -15, -35, -40, -50,
];

/// Bonus for the attacker when the defending king sits on a square.
/// Edges and corners score highest.
#[rustfmt::skip]
pub const CORNER_CAGE: [i32; 64] = [
    100,  95,  90,  85,  85,  90,  95, 100,
     95,  60,  50,  50,  50,  50,  60,  95,
     90,  50,  10,  10,  10,  10,  50,  90,
     85,  50,  10, -20, -20,  10,  50,  85,
     85,  50,  10, -20, -20,  10,  50,  85,
     90,  50,  10,  10,  10,  10,  50,  90,
     95,  60,  50,  50,  50,  50,  60,  95,
    100,  95,  90,  85,  85,  90,  95, 100,
];

/// Slot of `sq` in a table drawn rank 8 first, for a piece of `color`.
///
/// White reads the table upside down; Black reads it as drawn, which is the
/// vertical mirror of White's view.
#[inline]
pub fn table_index(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.flip_rank() as usize,
        Color::Black => sq as usize,
    }
}

#[cfg(test)]
#[path = "pst_tests.rs"]
mod pst_tests;
