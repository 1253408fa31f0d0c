//! Move-generation scenarios: legal move counts in ordinary, checkmate,
//! stalemate, and en-passant-gated positions.

use chess_engine::board::fen::parse_fen;
use chess_engine::movegen::generate_legal_moves;

#[test]
fn initial_position_has_twenty_legal_moves() {
    let pos = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(generate_legal_moves(&pos).len(), 20);
}

#[test]
fn checkmate_position_has_no_legal_moves() {
    let pos = parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1").unwrap();
    assert!(pos.in_check(pos.side_to_move()));
    assert_eq!(generate_legal_moves(&pos).len(), 0);
}

#[test]
fn stalemate_position_has_no_legal_moves_and_is_not_check() {
    let pos = parse_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
    assert!(!pos.in_check(pos.side_to_move()));
    assert_eq!(generate_legal_moves(&pos).len(), 0);
}

#[test]
fn en_passant_capture_appears_only_when_the_ep_square_is_set() {
    let with_ep = parse_fen("r1bqkbnr/ppp1pppp/2n5/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
    let moves = generate_legal_moves(&with_ep);
    let has_ep_capture = moves.iter().any(|m| m.to_uci() == "e5d6");
    assert!(has_ep_capture, "e5d6 should be legal when the ep square is set");

    let without_ep = parse_fen("r1bqkbnr/ppp1pppp/2n5/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3").unwrap();
    let moves = generate_legal_moves(&without_ep);
    let has_ep_capture = moves.iter().any(|m| m.to_uci() == "e5d6");
    assert!(!has_ep_capture, "e5d6 should not be legal without the ep square set");
}
