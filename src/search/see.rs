//! Static Exchange Evaluation: estimate the material outcome of a capture
//! sequence on one square without a full search.
//!
//! Each step of the exchange picks the *least valuable* attacker able to
//! recapture, not simply the lowest-indexed attacking square — picking an
//! arbitrary attacker instead of the cheapest one understates how bad a
//! losing exchange looks, since a stronger piece would be offered up
//! first instead of last.

use crate::attack_tables;
use crate::board::types::{Bitboard, Color, PieceKind, Square};
use crate::board::Position;

fn least_valuable_attacker(
    pos: &Position,
    sq: Square,
    occ: Bitboard,
    color: Color,
) -> Option<(Square, PieceKind)> {
    for &kind in &PieceKind::ALL {
        let candidates = attackers_of_kind(pos, sq, occ, color, kind);
        if !candidates.is_empty() {
            return candidates.iter().next().map(|from| (from, kind));
        }
    }
    None
}

fn attackers_of_kind(pos: &Position, sq: Square, occ: Bitboard, color: Color, kind: PieceKind) -> Bitboard {
    let pieces = pos.pieces_of(color, kind) & occ;
    if pieces.is_empty() {
        return Bitboard::EMPTY;
    }
    match kind {
        PieceKind::Pawn => attack_tables::pawn_attacks(color.opponent(), sq) & pieces,
        PieceKind::Knight => attack_tables::knight_attacks(sq) & pieces,
        PieceKind::King => attack_tables::king_attacks(sq) & pieces,
        PieceKind::Bishop => attack_tables::bishop_attacks(sq, occ) & pieces,
        PieceKind::Rook => attack_tables::rook_attacks(sq, occ) & pieces,
        PieceKind::Queen => attack_tables::queen_attacks(sq, occ) & pieces,
    }
}

/// Estimated material swing (centipawns, positive favors the side making
/// `m`) of the full capture sequence on `m.to()`.
#[must_use]
pub fn see(pos: &Position, m: crate::board::types::Move) -> i32 {
    let to = m.to();
    let mut occ = pos.occupied() & !Bitboard::from_square(m.from());

    let mut initial_victim_value = m.captured_kind().map_or(0, PieceKind::value);
    if m.is_en_passant() {
        let is_white = m.moving_color() == Color::White;
        let capture_rank = if is_white { to.rank() - 1 } else { to.rank() + 1 };
        let ep_capture_sq = Square::new(capture_rank, to.file());
        occ &= !Bitboard::from_square(ep_capture_sq);
        initial_victim_value = PieceKind::Pawn.value();
    }

    let mut gains = vec![initial_victim_value];
    let mut attacker_kind = m.moving_kind();
    let mut side = m.moving_color().opponent();

    loop {
        let Some((from, kind)) = least_valuable_attacker(pos, to, occ, side) else { break };
        let depth = gains.len();
        gains.push(attacker_kind.value() - gains[depth - 1]);
        if gains[depth].max(-gains[depth - 1]) < 0 {
            break;
        }
        occ &= !Bitboard::from_square(from);
        attacker_kind = kind;
        side = side.opponent();
        if gains.len() > 32 {
            break;
        }
    }

    for i in (1..gains.len()).rev() {
        gains[i - 1] = -(-gains[i - 1]).max(gains[i]);
    }
    gains[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;
    use crate::board::types::{MoveSpec, Square};

    fn mv(pos: &Position, from: (usize, usize), to: (usize, usize)) -> crate::board::types::Move {
        let from_sq = Square::new(from.0, from.1);
        let to_sq = Square::new(to.0, to.1);
        let (color, kind) = pos.piece_at(from_sq).unwrap();
        let captured = pos.piece_at(to_sq).map(|(_, k)| k);
        crate::board::types::Move::new(MoveSpec {
            from: from_sq,
            to: to_sq,
            moving_color: color,
            moving_kind: kind,
            captured_kind: captured,
            promotion_kind: None,
            is_castle: false,
            is_en_passant: false,
        })
    }

    #[test]
    fn pawn_takes_undefended_pawn_gains_its_value() {
        let pos = parse_fen("4k3/8/8/8/3p4/4P3/8/4K3 w - - 0 1").unwrap();
        let m = mv(&pos, (2, 4), (3, 3));
        assert_eq!(see(&pos, m), PieceKind::Pawn.value());
    }

    #[test]
    fn capturing_a_defended_pawn_with_a_queen_loses_material() {
        // White queen takes a pawn defended by a black pawn: queen for pawn is a loss.
        let pos = parse_fen("4k3/3p4/8/2Q5/8/8/8/4K3 w - - 0 1").unwrap();
        let m = mv(&pos, (4, 2), (6, 3));
        assert!(see(&pos, m) < 0);
    }
}
