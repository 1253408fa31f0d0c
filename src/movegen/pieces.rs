//! Knight, bishop, rook, queen, and (non-castling) king move generation.

use crate::attack_tables;
use crate::board::types::{Color, Move, MoveList, MoveSpec, PieceKind};
use crate::board::Position;

fn emit_from_attacks(
    pos: &Position,
    color: Color,
    kind: PieceKind,
    from_sq: crate::board::types::Square,
    mut attacks: crate::board::types::Bitboard,
    moves: &mut MoveList,
    captures_only: bool,
) {
    let own = pos.occupied_by(color);
    attacks &= !own;
    for to_sq in attacks.iter() {
        let captured = pos.piece_at(to_sq).map(|(_, k)| k);
        if captures_only && captured.is_none() {
            continue;
        }
        moves.push(Move::new(MoveSpec {
            from: from_sq,
            to: to_sq,
            moving_color: color,
            moving_kind: kind,
            captured_kind: captured,
            promotion_kind: None,
            is_castle: false,
            is_en_passant: false,
        }));
    }
}

pub fn generate_knight_moves(pos: &Position, color: Color, moves: &mut MoveList, captures_only: bool) {
    for from_sq in pos.pieces_of(color, PieceKind::Knight).iter() {
        let attacks = attack_tables::knight_attacks(from_sq);
        emit_from_attacks(pos, color, PieceKind::Knight, from_sq, attacks, moves, captures_only);
    }
}

pub fn generate_king_moves(pos: &Position, color: Color, moves: &mut MoveList, captures_only: bool) {
    for from_sq in pos.pieces_of(color, PieceKind::King).iter() {
        let attacks = attack_tables::king_attacks(from_sq);
        emit_from_attacks(pos, color, PieceKind::King, from_sq, attacks, moves, captures_only);
    }
}

pub fn generate_bishop_moves(pos: &Position, color: Color, moves: &mut MoveList, captures_only: bool) {
    let occ = pos.occupied();
    for from_sq in pos.pieces_of(color, PieceKind::Bishop).iter() {
        let attacks = attack_tables::bishop_attacks(from_sq, occ);
        emit_from_attacks(pos, color, PieceKind::Bishop, from_sq, attacks, moves, captures_only);
    }
}

pub fn generate_rook_moves(pos: &Position, color: Color, moves: &mut MoveList, captures_only: bool) {
    let occ = pos.occupied();
    for from_sq in pos.pieces_of(color, PieceKind::Rook).iter() {
        let attacks = attack_tables::rook_attacks(from_sq, occ);
        emit_from_attacks(pos, color, PieceKind::Rook, from_sq, attacks, moves, captures_only);
    }
}

pub fn generate_queen_moves(pos: &Position, color: Color, moves: &mut MoveList, captures_only: bool) {
    let occ = pos.occupied();
    for from_sq in pos.pieces_of(color, PieceKind::Queen).iter() {
        let attacks = attack_tables::queen_attacks(from_sq, occ);
        emit_from_attacks(pos, color, PieceKind::Queen, from_sq, attacks, moves, captures_only);
    }
}
