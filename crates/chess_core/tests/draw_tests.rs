//! Tests for game-end detection
//!
//! This module tests all terminal conditions through the public API:
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material
//! - Checkmate precedence

use chess_core::{Position, Terminal, parse_uci_move};

fn play_line(pos: &mut Position, line: &[&str]) {
    for txt in line {
        let mv = parse_uci_move(pos, txt).unwrap_or_else(|| panic!("illegal move {txt}"));
        pos.make_move(mv).unwrap();
    }
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(pos.legal_moves().is_empty(), "Stalemate position should have no legal moves");
    assert!(!pos.in_check(), "Stalemate means king is not in check");
    assert_eq!(pos.terminal(), Some(Terminal::Stalemate));
    assert!(Terminal::Stalemate.is_draw());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let pos = Position::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").unwrap();

    assert!(
        pos.is_fifty_move_draw(),
        "Position with halfmove_clock=100 should be a draw"
    );
    assert!(pos.can_claim_draw());
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut pos = Position::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").unwrap();
    play_line(&mut pos, &["e2e4"]);

    assert_eq!(pos.halfmove_clock(), 0);
    assert!(!pos.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_reached_by_quiet_move() {
    let mut pos = Position::from_fen("8/8/8/4k3/8/3K4/8/R7 w - - 99 60").unwrap();
    assert!(!pos.is_fifty_move_draw());

    play_line(&mut pos, &["a1a2"]);
    assert!(pos.is_fifty_move_draw());
    assert_eq!(pos.terminal(), Some(Terminal::FiftyMoves));
}

// =============================================================================
// Repetition Tests
// =============================================================================

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut pos = Position::startpos();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    play_line(&mut pos, &shuffle);
    assert!(!pos.is_threefold_repetition());

    play_line(&mut pos, &shuffle);
    assert!(pos.is_threefold_repetition());
    assert!(pos.is_draw());
}

#[test]
fn test_pawn_move_breaks_repetition_window() {
    let mut pos = Position::startpos();
    play_line(&mut pos, &["g1f3", "g8f6", "f3g1", "f6g8", "e2e3", "e7e6"]);
    play_line(&mut pos, &["g1f3", "g8f6", "f3g1", "f6g8"]);

    assert_eq!(pos.repetition_count(), 2);
    assert!(!pos.is_threefold_repetition());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_king_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert!(pos.is_insufficient_material());
    assert_eq!(pos.terminal(), Some(Terminal::InsufficientMaterial));
}

#[test]
fn test_king_bishop_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_pawn_is_sufficient() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1").unwrap();
    assert!(!pos.is_insufficient_material());
    assert_eq!(pos.terminal(), None);
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_checkmate_beats_fifty_move_claim() {
    // Back-rank mate delivered on the hundredth quiet half-move
    let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 100 60").unwrap();

    assert!(pos.is_checkmate());
    assert_eq!(pos.terminal(), Some(Terminal::Checkmate));
    assert!(!Terminal::Checkmate.is_draw());
}
