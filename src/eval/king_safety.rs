//! King shield, rook-open-file, and bishop-pair terms.

use crate::attack_tables;
use crate::board::types::{Bitboard, Color, PieceKind};
use crate::board::Position;

use super::params::EvalParams;

/// Pawn-shield bonus: requires the king to still sit on its own back rank
/// and at least two friendly pawns on the three files around it, one rank
/// in front. A centralized king gets no shield credit regardless of how
/// many pawns happen to stand nearby.
#[must_use]
pub fn king_shield_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let king_sq = pos.king_square(color);
    let back_rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    if king_sq.rank() != back_rank {
        return 0;
    }
    let pawns = pos.pieces_of(color, PieceKind::Pawn);
    let shield_rank = match color {
        Color::White => king_sq.rank() + 1,
        Color::Black => king_sq.rank() - 1,
    };
    let mut count = 0;
    for file in king_sq.file().saturating_sub(1)..=(king_sq.file() + 1).min(7) {
        if pawns.contains(crate::board::types::Square::new(shield_rank, file)) {
            count += 1;
        }
    }
    if count >= 2 {
        params.king_shield_bonus
    } else {
        0
    }
}

/// Rook bonuses for open and semi-open files.
#[must_use]
pub fn rook_activity_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let own_pawns = pos.pieces_of(color, PieceKind::Pawn);
    let enemy_pawns = pos.pieces_of(color.opponent(), PieceKind::Pawn);
    let mut score = 0;
    for sq in pos.pieces_of(color, PieceKind::Rook).iter() {
        let file_mask = Bitboard::file_mask(sq.file());
        let own_pawn_on_file = file_mask.intersects(own_pawns);
        let enemy_pawn_on_file = file_mask.intersects(enemy_pawns);
        if !own_pawn_on_file && !enemy_pawn_on_file {
            score += params.rook_open_file_bonus;
        } else if !own_pawn_on_file {
            score += params.rook_semi_open_file_bonus;
        }
    }
    score
}

/// Bishop-pair bonus: a flat bonus for holding both bishops.
#[must_use]
pub fn bishop_pair_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    if pos.pieces_of(color, PieceKind::Bishop).popcount() >= 2 {
        params.bishop_pair_bonus
    } else {
        0
    }
}

/// Bonus per square adjacent to the enemy king that `color` attacks.
#[must_use]
pub fn restrict_king_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let enemy_king_sq = pos.king_square(color.opponent());
    let mut count = 0;
    for sq in attack_tables::king_attacks(enemy_king_sq).iter() {
        if pos.is_square_attacked(sq, color) {
            count += 1;
        }
    }
    count * params.restrict_king_bonus
}

/// Penalty per empty square immediately around the own king — an "airy"
/// king position with no pieces nearby to block approach.
#[must_use]
pub fn airy_king_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let king_sq = pos.king_square(color);
    let mut empty_neighbors = 0;
    for sq in attack_tables::king_attacks(king_sq).iter() {
        if pos.piece_at(sq).is_none() {
            empty_neighbors += 1;
        }
    }
    -(empty_neighbors * params.airy_king_penalty)
}

/// Bonus for non-pawn pieces defending another friendly piece.
#[must_use]
pub fn supporting_piece_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let own = pos.occupied_by(color);
    let mut count = 0;
    for kind in [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen, PieceKind::King] {
        for sq in pos.pieces_of(color, kind).iter() {
            let attacks = match kind {
                PieceKind::Knight => attack_tables::knight_attacks(sq),
                PieceKind::King => attack_tables::king_attacks(sq),
                PieceKind::Bishop => attack_tables::bishop_attacks(sq, pos.occupied()),
                PieceKind::Rook => attack_tables::rook_attacks(sq, pos.occupied()),
                PieceKind::Queen => attack_tables::queen_attacks(sq, pos.occupied()),
                PieceKind::Pawn => Bitboard::EMPTY,
            };
            if !(attacks & own & !Bitboard::from_square(sq)).is_empty() {
                count += 1;
            }
        }
    }
    count * params.supporting_piece_bonus
}

/// Flat bonus/penalty for giving or receiving check.
#[must_use]
pub fn check_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let mut score = 0;
    if pos.in_check(color) {
        score -= params.checked_penalty;
    }
    if pos.in_check(color.opponent()) {
        score += params.checking_bonus;
    }
    score
}
