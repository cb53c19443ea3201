use super::*;

fn mv(from: Square, to: Square) -> Move {
    Move {
        from,
        to,
        promotion: None,
    }
}

#[test]
fn test_startpos_has_twenty_moves() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.fullmove_number(), 1);
    assert_eq!(pos.fen(), START_FEN);
}

#[test]
fn test_invalid_fen_rejected() {
    let err = Position::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, ChessError::InvalidFen { .. }));
}

#[test]
fn test_piece_on() {
    let pos = Position::startpos();
    assert_eq!(pos.piece_on(Square::E1), Some((Color::White, Piece::King)));
    assert_eq!(pos.piece_on(Square::D8), Some((Color::Black, Piece::Queen)));
    assert_eq!(pos.piece_on(Square::E4), None);
}

#[test]
fn test_capture_detection() {
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.is_capture(mv(Square::E4, Square::D5)));
    assert_eq!(pos.captured_piece(mv(Square::E4, Square::D5)), Some(Piece::Queen));
    assert!(!pos.is_capture(mv(Square::E4, Square::E5)));
}

#[test]
fn test_en_passant_is_capture() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    let ep = mv(Square::E5, Square::D6);
    assert!(pos.legal_moves().contains(&ep));
    assert_eq!(pos.captured_piece(ep), Some(Piece::Pawn));
}

#[test]
fn test_castling_is_not_capture() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castle = mv(Square::E1, Square::H1);
    assert!(pos.legal_moves().contains(&castle));
    assert!(!pos.is_capture(castle));
}

#[test]
fn test_guard_restores_position() {
    let mut pos = Position::startpos();
    let hash = pos.hash();
    let fen = pos.fen();

    {
        let mut child = pos.play(mv(Square::E2, Square::E4));
        assert_eq!(child.side_to_move(), Color::Black);
        assert_eq!(child.moves_played(), 1);
        {
            let grandchild = child.play(mv(Square::E7, Square::E5));
            assert_eq!(grandchild.moves_played(), 2);
        }
        assert_eq!(child.side_to_move(), Color::Black);
    }

    assert_eq!(pos.hash(), hash);
    assert_eq!(pos.fen(), fen);
    assert_eq!(pos.moves_played(), 0);
}

#[test]
fn test_make_move_rejects_illegal() {
    let mut pos = Position::startpos();
    let err = pos.make_move(mv(Square::E2, Square::E5)).unwrap_err();
    assert!(matches!(err, ChessError::IllegalMove(_)));
    assert_eq!(pos.moves_played(), 0);

    pos.make_move(mv(Square::E2, Square::E4)).unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
}

#[test]
fn test_checkmate_detection() {
    let pos =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert!(pos.in_check());
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert_eq!(pos.terminal(), Some(Terminal::Checkmate));
}

#[test]
fn test_stalemate_detection() {
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!pos.in_check());
    assert!(pos.is_stalemate());
    assert_eq!(pos.terminal(), Some(Terminal::Stalemate));
}

#[test]
fn test_insufficient_material_cases() {
    let bare = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert!(bare.is_insufficient_material());

    let knight = Position::from_fen("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1").unwrap();
    assert!(knight.is_insufficient_material());

    // c1 and f8 are both dark squares.
    let same_colour = Position::from_fen("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();
    assert!(same_colour.is_insufficient_material());

    // c1 dark, c8 light.
    let opposite = Position::from_fen("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1").unwrap();
    assert!(!opposite.is_insufficient_material());

    let two_knights = Position::from_fen("8/8/8/4k3/8/4K3/8/5NN1 w - - 0 1").unwrap();
    assert!(!two_knights.is_insufficient_material());

    let rook = Position::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 0 1").unwrap();
    assert!(!rook.is_insufficient_material());
}

#[test]
fn test_fifty_move_rule() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").unwrap();
    assert!(pos.is_fifty_move_draw());
    assert!(pos.can_claim_draw());
    assert_eq!(pos.terminal(), Some(Terminal::FiftyMoves));

    let fresh = Position::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 99 60").unwrap();
    assert!(!fresh.is_fifty_move_draw());
}

#[test]
fn test_threefold_repetition() {
    let mut pos = Position::startpos();
    let shuffle = [
        mv(Square::G1, Square::F3),
        mv(Square::G8, Square::F6),
        mv(Square::F3, Square::G1),
        mv(Square::F6, Square::G8),
    ];

    for m in shuffle {
        pos.make_move(m).unwrap();
    }
    assert_eq!(pos.repetition_count(), 2);
    assert!(!pos.is_threefold_repetition());

    for m in shuffle {
        pos.make_move(m).unwrap();
    }
    assert_eq!(pos.repetition_count(), 3);
    assert!(pos.is_threefold_repetition());
    assert!(pos.is_draw());
    assert_eq!(pos.terminal(), Some(Terminal::Repetition));
}

#[test]
fn test_repetition_unwinds_with_guard() {
    let mut pos = Position::startpos();
    for m in [
        mv(Square::G1, Square::F3),
        mv(Square::G8, Square::F6),
        mv(Square::F3, Square::G1),
    ] {
        pos.make_move(m).unwrap();
    }

    {
        let child = pos.play(mv(Square::F6, Square::G8));
        assert_eq!(child.repetition_count(), 2);
    }
    assert_eq!(pos.repetition_count(), 1);
}
