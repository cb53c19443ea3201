use super::*;

#[test]
fn test_white_pawn_near_promotion_uses_second_row() {
    assert_eq!(PAWN[table_index(Square::A7, Color::White)], 60);
    assert_eq!(PAWN[table_index(Square::A2, Color::Black)], 60);
}

#[test]
fn test_colours_mirror_each_other() {
    for sq in Square::ALL {
        let mirrored = sq.flip_rank();
        assert_eq!(
            table_index(sq, Color::White),
            table_index(mirrored, Color::Black)
        );
    }
}

#[test]
fn test_king_tables_prefer_castled_and_central() {
    let g1 = table_index(Square::G1, Color::White);
    let e1 = table_index(Square::E1, Color::White);
    assert!(KING_MIDDLEGAME[g1] > KING_MIDDLEGAME[e1]);

    let e4 = table_index(Square::E4, Color::White);
    let a1 = table_index(Square::A1, Color::White);
    assert!(KING_ENDGAME[e4] > KING_ENDGAME[a1]);
}
