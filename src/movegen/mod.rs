//! Move generation: pseudo-legal, capture-only (for quiescence), and legal
//! (pseudo-legal filtered by leaving the mover's king safe).

mod castling;
mod pawns;
mod pieces;

use crate::board::types::{Move, MoveList, PieceKind};
use crate::board::Position;

/// All pseudo-legal moves for the side to move: may leave the mover's own
/// king in check.
#[must_use]
pub fn generate_pseudo_legal_moves(pos: &Position) -> MoveList {
    let mut moves = MoveList::new();
    let color = pos.side_to_move();
    pawns::generate_pawn_moves(pos, color, &mut moves, false);
    pieces::generate_knight_moves(pos, color, &mut moves, false);
    pieces::generate_bishop_moves(pos, color, &mut moves, false);
    pieces::generate_rook_moves(pos, color, &mut moves, false);
    pieces::generate_queen_moves(pos, color, &mut moves, false);
    pieces::generate_king_moves(pos, color, &mut moves, false);
    castling::generate_castling_moves(pos, color, &mut moves);
    moves
}

/// Captures and promotions only, for quiescence search.
#[must_use]
pub fn generate_capture_moves(pos: &Position) -> MoveList {
    let mut moves = MoveList::new();
    let color = pos.side_to_move();
    pawns::generate_pawn_moves(pos, color, &mut moves, true);
    pieces::generate_knight_moves(pos, color, &mut moves, true);
    pieces::generate_bishop_moves(pos, color, &mut moves, true);
    pieces::generate_rook_moves(pos, color, &mut moves, true);
    pieces::generate_queen_moves(pos, color, &mut moves, true);
    pieces::generate_king_moves(pos, color, &mut moves, true);
    moves
}

/// Whether making `m` leaves the mover's own king safe.
#[must_use]
pub fn is_legal(pos: &Position, m: Move) -> bool {
    let mut pos = pos.clone();
    let color = m.moving_color();
    let undo = pos.make_move(m);
    let legal = !pos.in_check(color);
    pos.unmake_move(m, undo);
    legal
}

/// All legal moves for the side to move.
#[must_use]
pub fn generate_legal_moves(pos: &Position) -> MoveList {
    let mut legal = MoveList::new();
    for &m in generate_pseudo_legal_moves(pos).as_slice() {
        if is_legal(pos, m) {
            legal.push(m);
        }
    }
    legal
}

/// Whether the side to move has at least one legal move (used for
/// checkmate/stalemate detection without generating the full list).
#[must_use]
pub fn has_legal_move(pos: &Position) -> bool {
    generate_pseudo_legal_moves(pos).as_slice().iter().any(|&m| is_legal(pos, m))
}

pub(crate) fn piece_value(kind: PieceKind) -> i32 {
    kind.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::{parse_fen, START_FEN};

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let pos = parse_fen(START_FEN).unwrap();
        assert_eq!(generate_legal_moves(&pos).len(), 20);
    }

    #[test]
    fn checkmate_position_has_no_legal_moves() {
        // Fool's mate: after 1.f3 e5 2.g4 Qh4#
        let pos = parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert!(pos.in_check(pos.side_to_move()));
        assert!(!has_legal_move(&pos));
    }

    #[test]
    fn stalemate_position_has_no_legal_moves_and_no_check() {
        // Classic stalemate: black king a8, white king a6, white queen b6.
        let pos = parse_fen("k7/8/1Q6/1K6/8/8/8/8 b - - 0 1").unwrap();
        assert!(!pos.in_check(pos.side_to_move()));
        assert!(!has_legal_move(&pos));
    }
}
