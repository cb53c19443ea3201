use super::*;
use chess_core::parse_uci_move;

#[test]
fn test_captures_come_first_by_mvv_lva() {
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/3QK3 w - - 0 1").unwrap();
    let cfg = EvalConfig::default();
    let mut moves = pos.legal_moves();
    order_moves(&pos, &mut moves, &cfg);

    let pawn_takes = parse_uci_move(&pos, "e4d5").unwrap();
    let queen_takes = parse_uci_move(&pos, "d1d5").unwrap();
    assert_eq!(moves[0], pawn_takes);
    assert_eq!(moves[1], queen_takes);
    assert!(moves[2..].iter().all(|&mv| !pos.is_capture(mv)));

    assert_eq!(mvv_lva(&pos, pawn_takes, &cfg), Some(510));
    assert_eq!(mvv_lva(&pos, queen_takes, &cfg), Some(0));
}

#[test]
fn test_quiet_moves_keep_generation_order() {
    let pos = Position::startpos();
    let generated = pos.legal_moves();
    let mut ordered = generated.clone();
    order_moves(&pos, &mut ordered, &EvalConfig::default());
    assert_eq!(ordered, generated);
}

#[test]
fn test_losing_capture_still_precedes_quiet_moves() {
    // Queen takes a defended pawn
    let pos = Position::from_fen("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1").unwrap();
    let cfg = EvalConfig::default();
    let mut moves = pos.legal_moves();
    order_moves(&pos, &mut moves, &cfg);

    let capture = parse_uci_move(&pos, "d1d5").unwrap();
    assert_eq!(moves[0], capture);
    assert_eq!(mvv_lva(&pos, capture, &cfg), Some(90 - 600));
}

#[test]
fn test_en_passant_is_ordered_as_capture() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    let cfg = EvalConfig::default();
    let mut moves = pos.legal_moves();
    order_moves(&pos, &mut moves, &cfg);

    assert_eq!(moves[0], parse_uci_move(&pos, "e5d6").unwrap());
    assert_eq!(mvv_lva(&pos, moves[0], &cfg), Some(0));
}
