//! Precomputed attack tables.
//!
//! Knight, king and pawn attacks are simple delta lookups, built once into
//! `LazyLock` statics. Sliding-piece (bishop/rook/queen) attacks use
//! PEXT-indexed tables: for each square we precompute the "relevant
//! occupancy" mask (the squares in each ray that matter, excluding board
//! edges), and for every possible occupancy subset of that mask we
//! precompute the attack set by ray-casting once at startup. A query then
//! reduces to `table[sq][pext(occupied, mask[sq])]`.

use std::sync::LazyLock;

use crate::bits::pext;
use crate::board::types::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];
const KING_DELTAS: [(i32, i32); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1),
];

fn leaper_table(deltas: &[(i32, i32)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for sq in 0..64 {
        let rank = (sq / 8) as i32;
        let file = (sq % 8) as i32;
        let mut bb = 0u64;
        for &(dr, df) in deltas {
            let nr = rank + dr;
            let nf = file + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                bb |= 1u64 << (nr * 8 + nf);
            }
        }
        table[sq as usize] = bb;
    }
    table
}

static KNIGHT_ATTACKS: LazyLock<[u64; 64]> = LazyLock::new(|| leaper_table(&KNIGHT_DELTAS));
static KING_ATTACKS: LazyLock<[u64; 64]> = LazyLock::new(|| leaper_table(&KING_DELTAS));

static PAWN_ATTACKS: LazyLock<[[u64; 64]; 2]> = LazyLock::new(|| {
    let mut table = [[0u64; 64]; 2];
    for sq in 0..64usize {
        let rank = (sq / 8) as i32;
        let file = (sq % 8) as i32;
        for (color, dr) in [(0usize, 1i32), (1usize, -1i32)] {
            let mut bb = 0u64;
            for df in [-1i32, 1i32] {
                let nr = rank + dr;
                let nf = file + df;
                if (0..8).contains(&nr) && (0..8).contains(&nf) {
                    bb |= 1u64 << (nr * 8 + nf);
                }
            }
            table[color][sq] = bb;
        }
    }
    table
});

#[inline]
#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

#[inline]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][sq.index()])
}

const ROOK_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Relevant-occupancy mask for a slider on `sq` along `dirs`: every square
/// reachable by ray-casting except the final square on each ray (the
/// board edge never blocks anything, so it never needs to appear as a
/// PEXT index bit).
fn relevant_mask(sq: usize, dirs: &[(i32, i32); 4]) -> u64 {
    let rank = (sq / 8) as i32;
    let file = (sq % 8) as i32;
    let mut mask = 0u64;
    for &(dr, df) in dirs {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let at_edge = match (dr, df) {
                (1, 0) | (-1, 0) => r == 0 || r == 7,
                (0, 1) | (0, -1) => f == 0 || f == 7,
                _ => r == 0 || r == 7 || f == 0 || f == 7,
            };
            if !at_edge {
                mask |= 1u64 << (r * 8 + f);
            }
            r += dr;
            f += df;
        }
    }
    mask
}

fn ray_attacks(sq: usize, occupied: u64, dirs: &[(i32, i32); 4]) -> u64 {
    let rank = (sq / 8) as i32;
    let file = (sq % 8) as i32;
    let mut attacks = 0u64;
    for &(dr, df) in dirs {
        let mut r = rank + dr;
        let mut f = file + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupied & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

struct SliderTable {
    masks: [u64; 64],
    /// `attacks[sq]` is indexed by `pext(occupied, masks[sq])`.
    attacks: Vec<[u64; 4096]>,
}

fn build_slider_table(dirs: &[(i32, i32); 4]) -> SliderTable {
    let mut masks = [0u64; 64];
    let mut attacks = Vec::with_capacity(64);
    for sq in 0..64usize {
        let mask = relevant_mask(sq, dirs);
        masks[sq] = mask;
        let bits = mask.count_ones();
        let mut table = [0u64; 4096];
        let subset_count = 1u32 << bits;
        for index in 0..subset_count {
            let occ = crate::bits::pdep(index as u64, mask);
            table[index as usize] = ray_attacks(sq, occ, dirs);
        }
        attacks.push(table);
    }
    SliderTable { masks, attacks }
}

static ROOK_TABLE: LazyLock<SliderTable> = LazyLock::new(|| build_slider_table(&ROOK_DIRS));
static BISHOP_TABLE: LazyLock<SliderTable> = LazyLock::new(|| build_slider_table(&BISHOP_DIRS));

#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let table = &ROOK_TABLE;
    let idx = pext(occupied.0, table.masks[sq.index()]);
    Bitboard(table.attacks[sq.index()][idx as usize])
}

#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let table = &BISHOP_TABLE;
    let idx = pext(occupied.0, table.masks[sq.index()]);
    Bitboard(table.attacks[sq.index()][idx as usize])
}

#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_attacks_from_corner_are_two_squares() {
        let attacks = knight_attacks(Square::new(0, 0));
        assert_eq!(attacks.popcount(), 2);
    }

    #[test]
    fn king_attacks_from_center_are_eight_squares() {
        let attacks = king_attacks(Square::new(3, 3));
        assert_eq!(attacks.popcount(), 8);
    }

    #[test]
    fn rook_attacks_on_empty_board_span_full_rank_and_file() {
        let attacks = rook_attacks(Square::new(0, 0), Bitboard::EMPTY);
        // 7 squares along rank 1, 7 along file a
        assert_eq!(attacks.popcount(), 14);
    }

    #[test]
    fn rook_attacks_stop_at_first_blocker() {
        let occ = Bitboard::from_square(Square::new(0, 3));
        let attacks = rook_attacks(Square::new(0, 0), occ);
        assert!(attacks.contains(Square::new(0, 3)));
        assert!(!attacks.contains(Square::new(0, 4)));
    }

    #[test]
    fn bishop_attacks_on_empty_board_from_center() {
        let attacks = bishop_attacks(Square::new(3, 3), Bitboard::EMPTY);
        assert_eq!(attacks.popcount(), 13);
    }

    #[test]
    fn pawn_attacks_are_color_dependent() {
        let white = pawn_attacks(Color::White, Square::new(1, 4));
        let black = pawn_attacks(Color::Black, Square::new(6, 4));
        assert_eq!(white.popcount(), 2);
        assert_eq!(black.popcount(), 2);
        assert!(white.contains(Square::new(2, 3)));
        assert!(black.contains(Square::new(5, 3)));
    }
}
