//! Pawn moves: single/double pushes, captures, en passant, promotions.

use crate::attack_tables;
use crate::board::types::{Color, Move, MoveList, MoveSpec, PieceKind, Square};
use crate::board::Position;

fn push_move(
    moves: &mut MoveList,
    color: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    is_en_passant: bool,
) {
    let promotion_rank = if color == Color::White { 7 } else { 0 };
    if to.rank() == promotion_rank {
        for &promo in &PieceKind::PROMOTION_KINDS {
            moves.push(Move::new(MoveSpec {
                from,
                to,
                moving_color: color,
                moving_kind: PieceKind::Pawn,
                captured_kind: captured,
                promotion_kind: Some(promo),
                is_castle: false,
                is_en_passant: false,
            }));
        }
    } else {
        moves.push(Move::new(MoveSpec {
            from,
            to,
            moving_color: color,
            moving_kind: PieceKind::Pawn,
            captured_kind: captured,
            promotion_kind: None,
            is_castle: false,
            is_en_passant,
        }));
    }
}

pub fn generate_pawn_moves(pos: &Position, color: Color, moves: &mut MoveList, captures_only: bool) {
    let pawns = pos.pieces_of(color, PieceKind::Pawn);
    let occ = pos.occupied();
    let enemy = pos.occupied_by(color.opponent());
    let start_rank = if color == Color::White { 1 } else { 6 };

    for from in pawns.iter() {
        if let Some(one) = from.forward(color == Color::White) {
            if !occ.contains(one) {
                if !captures_only {
                    push_move(moves, color, from, one, None, false);
                }
                if from.rank() == start_rank {
                    if let Some(two) = one.forward(color == Color::White) {
                        if !occ.contains(two) && !captures_only {
                            moves.push(Move::new(MoveSpec {
                                from,
                                to: two,
                                moving_color: color,
                                moving_kind: PieceKind::Pawn,
                                captured_kind: None,
                                promotion_kind: None,
                                is_castle: false,
                                is_en_passant: false,
                            }));
                        }
                    }
                }
            }
        }

        let attacks = attack_tables::pawn_attacks(color, from);
        for to in (attacks & enemy).iter() {
            let captured = pos.piece_at(to).map(|(_, k)| k);
            push_move(moves, color, from, to, captured, false);
        }

        if let Some(ep_sq) = pos.en_passant_square() {
            if attack_tables::pawn_attacks(color, from).contains(ep_sq) {
                push_move(moves, color, from, ep_sq, Some(PieceKind::Pawn), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;

    #[test]
    fn en_passant_is_generated_when_legal() {
        // White pawn e5, black just played d7-d5: en passant on d6.
        let pos = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
        let mut moves = MoveList::new();
        generate_pawn_moves(&pos, Color::White, &mut moves, false);
        assert!(moves.as_slice().iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn promotion_generates_all_four_piece_kinds() {
        let pos = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
        let mut moves = MoveList::new();
        generate_pawn_moves(&pos, Color::White, &mut moves, false);
        let promo_count = moves.as_slice().iter().filter(|m| m.is_promotion()).count();
        assert_eq!(promo_count, 4);
    }
}
