//! Static evaluation.
//!
//! Scores are absolute: positive favours White. The search converts to the
//! side to move with [`color_sign`]. `ply` is the distance from the search
//! root and only affects mate scores, so shallower mates score higher.

use chess_core::{BitBoard, Board, Color, Piece, Position, Square, file_of, rank_of, square_distance};
use cozy_chess::{get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves};

use crate::config::EvalConfig;
use crate::phase::GamePhase;
use crate::pst::table_index;
use crate::score::{MATE_SCORE, Score, color_sign};

/// Evaluates `pos` from White's point of view.
///
/// Terminal positions short-circuit every other term: checkmate scores
/// `MATE_SCORE - ply` for the winner, and stalemate, claimable draws and
/// insufficient material score exactly 0.
pub fn evaluate(pos: &Position, ply: u8, cfg: &EvalConfig) -> Score {
    let stm = pos.side_to_move();
    if !pos.has_legal_moves() {
        if pos.in_check() {
            return -color_sign(stm) * (MATE_SCORE - ply as Score);
        }
        return 0;
    }
    if pos.is_draw() {
        return 0;
    }

    let board = pos.board();
    let phase = GamePhase::classify(board);

    let mut score = material_and_placement(board, phase, cfg);

    if pos.in_check() {
        score -= color_sign(stm) * cfg.check_penalty;
    }

    score += positional_term(board, cfg);

    if phase.is_endgame() {
        score += open_file_term(board, cfg);
        if let Some(attacker) = mating_side(board, phase, cfg) {
            score += color_sign(attacker) * mating_drive(board, attacker, phase, cfg);
        }
    }

    score
}

/// Material plus piece-square bonuses for both sides.
pub fn material_and_placement(board: &Board, phase: GamePhase, cfg: &EvalConfig) -> Score {
    let endgame = phase.is_endgame();
    let mut score = 0;
    for color in Color::ALL {
        let sign = color_sign(color);
        for piece in Piece::ALL {
            let value = cfg.piece_value(piece);
            let table = cfg.tables.for_piece(piece, endgame);
            for sq in board.colored_pieces(color, piece) {
                score += sign * (value + table.get(table_index(sq, color)));
            }
        }
    }
    score
}

/// Total piece value of one side.
pub fn material(board: &Board, color: Color, cfg: &EvalConfig) -> Score {
    Piece::ALL
        .iter()
        .map(|&piece| cfg.piece_value(piece) * board.colored_pieces(color, piece).len() as Score)
        .sum()
}

/// Side that should be driving the enemy king into a corner.
///
/// With a lone rook or queen on the board it is that piece's owner;
/// otherwise the side ahead on material, and nobody when material is level.
pub fn mating_side(board: &Board, phase: GamePhase, cfg: &EvalConfig) -> Option<Color> {
    if phase.is_mating_signature() {
        let major = lone_major(board)?;
        return board.color_on(major);
    }
    let white = material(board, Color::White, cfg);
    let black = material(board, Color::Black, cfg);
    match white.cmp(&black) {
        std::cmp::Ordering::Greater => Some(Color::White),
        std::cmp::Ordering::Less => Some(Color::Black),
        std::cmp::Ordering::Equal => None,
    }
}

/// Weighted mobility, castling, king shelter and pawn weaknesses, White
/// minus Black. Terms with a zero weight are not computed.
pub fn positional_term(board: &Board, cfg: &EvalConfig) -> Score {
    let w = &cfg.positional;
    let mut score = 0;
    for color in Color::ALL {
        let mut side = 0;
        if w.mobility != 0 {
            side += w.mobility * mobility(board, color) as Score;
        }
        if w.castled_bonus != 0 && is_castled(board, color) {
            side += w.castled_bonus;
        }
        if w.pawn_shield_bonus != 0 {
            side += w.pawn_shield_bonus * pawn_shield(board, color) as Score;
        }
        if w.weak_pawn_penalty != 0 {
            side -= w.weak_pawn_penalty * weak_pawns(board, color) as Score;
        }
        score += color_sign(color) * side;
    }
    score
}

/// Squares reachable by `color`'s knights, bishops, rooks and queens that are
/// not occupied by its own pieces.
pub fn mobility(board: &Board, color: Color) -> u32 {
    let own = board.colors(color);
    let occupied = board.occupied();
    let queens = board.colored_pieces(color, Piece::Queen);

    let mut count = 0;
    for sq in board.colored_pieces(color, Piece::Knight) {
        count += (get_knight_moves(sq) & !own).len();
    }
    for sq in board.colored_pieces(color, Piece::Bishop) | queens {
        count += (get_bishop_moves(sq, occupied) & !own).len();
    }
    for sq in board.colored_pieces(color, Piece::Rook) | queens {
        count += (get_rook_moves(sq, occupied) & !own).len();
    }
    count
}

/// King on its castled square with the rook next to it on the inside.
pub fn is_castled(board: &Board, color: Color) -> bool {
    let (short, short_rook, long, long_rook) = match color {
        Color::White => (Square::G1, Square::F1, Square::C1, Square::D1),
        Color::Black => (Square::G8, Square::F8, Square::C8, Square::D8),
    };
    let king = board.king(color);
    let rooks = board.colored_pieces(color, Piece::Rook);
    (king == short && rooks.has(short_rook)) || (king == long && rooks.has(long_rook))
}

/// Own pawns on the three squares directly in front of the king.
pub fn pawn_shield(board: &Board, color: Color) -> u32 {
    let king = board.king(color);
    let ahead = rank_of(king) + color_sign(color);
    let pawns = board.colored_pieces(color, Piece::Pawn);
    (get_king_moves(king) & pawns)
        .into_iter()
        .filter(|&sq| rank_of(sq) == ahead)
        .count() as u32
}

/// Pawns sharing a file with another own pawn, plus pawns with no own pawn on
/// a neighbouring file. A pawn that is both counts twice.
pub fn weak_pawns(board: &Board, color: Color) -> u32 {
    let pawns = board.colored_pieces(color, Piece::Pawn);
    let mut per_file = [0u32; 8];
    for sq in pawns {
        per_file[file_of(sq) as usize] += 1;
    }

    let mut weak = 0;
    for (file, &count) in per_file.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if count > 1 {
            weak += count;
        }
        let left = file > 0 && per_file[file - 1] > 0;
        let right = file < 7 && per_file[file + 1] > 0;
        if !left && !right {
            weak += count;
        }
    }
    weak
}

/// All attacker-relative endgame terms (positive is good for `attacker`).
fn mating_drive(board: &Board, attacker: Color, phase: GamePhase, cfg: &EvalConfig) -> Score {
    let mut score = king_mobility_term(board, attacker, cfg)
        + king_distance_term(board, attacker, cfg)
        + corner_term(board, attacker, cfg);
    if phase.is_mating_signature() {
        score += major_piece_term(board, attacker, cfg);
    }
    score
}

/// Rooks and queens standing on files without pawns, White minus Black.
pub fn open_file_term(board: &Board, cfg: &EvalConfig) -> Score {
    let pawns = board.pieces(Piece::Pawn);
    let heavy = board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    let mut score = 0;
    for sq in heavy {
        if (pawns & sq.file().bitboard()).is_empty()
            && let Some(color) = board.color_on(sq)
        {
            score += color_sign(color) * cfg.endgame.open_file_bonus;
        }
    }
    score
}

/// Penalty per square the defending king can still step to safely.
pub fn king_mobility_term(board: &Board, attacker: Color, cfg: &EvalConfig) -> Score {
    -cfg.endgame.king_mobility_penalty * safe_king_squares(board, !attacker) as Score
}

/// Rewards the attacking king for closing in on the defending king.
pub fn king_distance_term(board: &Board, attacker: Color, cfg: &EvalConfig) -> Score {
    let distance = square_distance(board.king(attacker), board.king(!attacker));
    cfg.endgame.king_distance_weight * (7 - distance)
}

/// Lone rook or queen: keep range from the defending king and cut it off.
pub fn major_piece_term(board: &Board, attacker: Color, cfg: &EvalConfig) -> Score {
    let Some(major) = lone_major(board) else {
        return 0;
    };
    let own_king = board.king(attacker);
    let their_king = board.king(!attacker);

    let mut score = cfg.endgame.major_piece_distance_weight * square_distance(major, their_king);
    let file_cut = strictly_between(
        major.file() as i32,
        own_king.file() as i32,
        their_king.file() as i32,
    );
    let rank_cut = strictly_between(
        major.rank() as i32,
        own_king.rank() as i32,
        their_king.rank() as i32,
    );
    if file_cut || rank_cut {
        score += cfg.endgame.cutoff_bonus;
    }
    score
}

/// Bonus for the defending king standing near the edge of the board.
pub fn corner_term(board: &Board, attacker: Color, cfg: &EvalConfig) -> Score {
    let their_king = board.king(!attacker);
    cfg.endgame
        .corner_table
        .get(table_index(their_king, Color::White))
}

/// King steps for `defender` that are empty or capturable and unattacked.
/// Sliders see through the defending king, so retreating along a check ray
/// is not counted as safe.
pub fn safe_king_squares(board: &Board, defender: Color) -> u32 {
    let king = board.king(defender);
    let blockers = board.occupied() ^ king.bitboard();
    let attacked = attack_map(board, !defender, blockers);
    (get_king_moves(king) & !board.colors(defender) & !attacked).len()
}

fn attack_map(board: &Board, color: Color, blockers: BitBoard) -> BitBoard {
    let mut attacks = get_king_moves(board.king(color));
    for sq in board.colored_pieces(color, Piece::Pawn) {
        attacks |= get_pawn_attacks(sq, color);
    }
    for sq in board.colored_pieces(color, Piece::Knight) {
        attacks |= get_knight_moves(sq);
    }
    let queens = board.colored_pieces(color, Piece::Queen);
    for sq in board.colored_pieces(color, Piece::Bishop) | queens {
        attacks |= get_bishop_moves(sq, blockers);
    }
    for sq in board.colored_pieces(color, Piece::Rook) | queens {
        attacks |= get_rook_moves(sq, blockers);
    }
    attacks
}

fn lone_major(board: &Board) -> Option<Square> {
    (board.pieces(Piece::Rook) | board.pieces(Piece::Queen))
        .into_iter()
        .next()
}

fn strictly_between(x: i32, a: i32, b: i32) -> bool {
    (a < x && x < b) || (b < x && x < a)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
