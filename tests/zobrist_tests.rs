//! Zobrist key equality: equivalent positions hash identically regardless
//! of how they were reached.

use chess_engine::board::fen::parse_fen;
use chess_engine::movegen::generate_legal_moves;

#[test]
fn equivalent_fens_hash_equal() {
    // Same position, reachable via two different opening move orders, so
    // castling rights, side to move, and piece placement all agree.
    let a = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
    let b = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn replayed_moves_hash_equal_to_loaded_fen() {
    let mut pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();

    let e2e4 = generate_legal_moves(&pos)
        .iter()
        .find(|m| m.to_uci() == "e2e4")
        .copied()
        .expect("e2e4 is legal from the start position");
    pos.make_move(e2e4);

    let e7e5 = generate_legal_moves(&pos)
        .iter()
        .find(|m| m.to_uci() == "e7e5")
        .copied()
        .expect("e7e5 is legal after 1. e4");
    pos.make_move(e7e5);

    // No white pawn sits on d5 or f5, so the en-passant square must not be
    // set even though black just played a double pawn push.
    let expected = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
    assert_eq!(pos.hash(), expected.hash());
}

#[test]
fn ep_square_is_only_set_when_a_pawn_can_actually_capture() {
    // 1. e4 Nf6 2. e5 d5: the e5 pawn can capture en passant on d6, so the
    // ep square must be set this time.
    let mut pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    for uci in ["e2e4", "g8f6", "e4e5", "d7d5"] {
        let m = generate_legal_moves(&pos)
            .iter()
            .find(|m| m.to_uci() == uci)
            .copied()
            .unwrap_or_else(|| panic!("{uci} should be legal"));
        pos.make_move(m);
    }
    let expected = parse_fen("rnbqkb1r/ppp1pppp/5n2/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
    assert_eq!(pos.hash(), expected.hash());
}
