//! Doubled, isolated, passed, and supported pawn terms.

use crate::board::types::{Bitboard, Color, PieceKind};
use crate::board::Position;

use super::params::EvalParams;

/// Squares in front of `color`'s pawns on `file` and its neighbors, used
/// to test whether a pawn is passed.
fn passed_pawn_blockers_mask(color: Color, file: usize, rank: usize) -> Bitboard {
    let mut mask = 0u64;
    for f in file.saturating_sub(1)..=(file + 1).min(7) {
        let ranks: Box<dyn Iterator<Item = usize>> = if color == Color::White {
            Box::new((rank + 1)..8)
        } else {
            Box::new(0..rank)
        };
        for r in ranks {
            mask |= 1u64 << (r * 8 + f);
        }
    }
    Bitboard(mask)
}

/// Pawn-structure score, positive favors `color`. Combines doubled,
/// isolated, passed, and supported-pawn terms; returned as a single
/// centipawn delta (not phase-split — structure matters comparably in
/// both phases).
#[must_use]
pub fn pawn_structure_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    let own_pawns = pos.pieces_of(color, PieceKind::Pawn);
    let enemy_pawns = pos.pieces_of(color.opponent(), PieceKind::Pawn);
    let mut score = 0i32;

    let mut file_counts = [0u32; 8];
    for sq in own_pawns.iter() {
        file_counts[sq.file()] += 1;
    }
    for &count in &file_counts {
        if count > 1 {
            score -= params.doubled_pawn_penalty * (count as i32 - 1);
        }
    }

    let attacks_of = |pawns: Bitboard, color: Color| -> Bitboard {
        let mut attacked = Bitboard::EMPTY;
        for sq in pawns.iter() {
            attacked |= crate::attack_tables::pawn_attacks(color, sq);
        }
        attacked
    };
    let own_pawn_attacks = attacks_of(own_pawns, color);

    for sq in own_pawns.iter() {
        let file = sq.file();
        let neighbor_files = Bitboard::file_mask(file.saturating_sub(1))
            | Bitboard::file_mask(file)
            | Bitboard::file_mask((file + 1).min(7));
        let has_neighbor_pawn = (own_pawns & !Bitboard::from_square(sq)).intersects(neighbor_files);
        if !has_neighbor_pawn {
            score -= params.isolated_pawn_penalty;
        }

        if own_pawn_attacks.contains(sq) {
            score += params.supported_pawn_bonus;
        }

        if crate::attack_tables::pawn_attacks(color, sq).intersects(pos.occupied_by(color)) {
            score += params.supporting_pawn_bonus;
        }

        let blockers = passed_pawn_blockers_mask(color, file, sq.rank());
        if !blockers.intersects(enemy_pawns) {
            score += params.passed_pawn_bonus;
        }
    }

    score
}
