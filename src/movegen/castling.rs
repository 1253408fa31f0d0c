//! Castling move generation.

use crate::board::types::{CastlingRights, Color, Move, MoveList, MoveSpec, PieceKind, Square};
use crate::board::Position;

pub fn generate_castling_moves(pos: &Position, color: Color, moves: &mut MoveList) {
    if pos.in_check(color) {
        return;
    }
    let rank = if color == Color::White { 0 } else { 7 };
    let king_from = Square::new(rank, 4);

    if pos.castling_rights().has(CastlingRights::kingside_bit(color)) {
        let passes = [Square::new(rank, 5), Square::new(rank, 6)];
        if passes.iter().all(|&sq| pos.piece_at(sq).is_none())
            && passes.iter().all(|&sq| !pos.is_square_attacked(sq, color.opponent()))
        {
            moves.push(Move::new(MoveSpec {
                from: king_from,
                to: Square::new(rank, 6),
                moving_color: color,
                moving_kind: PieceKind::King,
                captured_kind: None,
                promotion_kind: None,
                is_castle: true,
                is_en_passant: false,
            }));
        }
    }

    if pos.castling_rights().has(CastlingRights::queenside_bit(color)) {
        let empties = [Square::new(rank, 1), Square::new(rank, 2), Square::new(rank, 3)];
        let passes = [Square::new(rank, 2), Square::new(rank, 3)];
        if empties.iter().all(|&sq| pos.piece_at(sq).is_none())
            && passes.iter().all(|&sq| !pos.is_square_attacked(sq, color.opponent()))
        {
            moves.push(Move::new(MoveSpec {
                from: king_from,
                to: Square::new(rank, 2),
                moving_color: color,
                moving_kind: PieceKind::King,
                captured_kind: None,
                promotion_kind: None,
                is_castle: true,
                is_en_passant: false,
            }));
        }
    }
}
