//! Zobrist hashing: incrementally-updatable 64-bit position keys.

use rand::prelude::*;
use std::sync::LazyLock;

use super::types::{CastlingRights, Color, PieceKind, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};

pub(crate) struct ZobristKeys {
    /// `piece_keys[piece_kind][color][square]`
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    /// `castling_keys[color][side]`: side 0 = kingside, 1 = queenside.
    castling_keys: [[u64; 2]; 2],
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed: keys must be reproducible across runs for reliable
        // TT/perft cross-checks, not cryptographically random.
        let mut rng = StdRng::seed_from_u64(1_234_567_890_u64);
        let mut piece_keys = [[[0u64; 64]; 2]; 6];
        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        let mut castling_keys = [[0u64; 2]; 2];
        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let mut en_passant_keys = [0u64; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys { piece_keys, black_to_move_key, castling_keys, en_passant_keys }
    }
}

static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::new);

#[inline]
#[must_use]
pub(crate) fn piece_key(color: Color, kind: PieceKind, sq: Square) -> u64 {
    ZOBRIST.piece_keys[kind.index()][color.index()][sq.index()]
}

#[inline]
#[must_use]
pub(crate) fn side_to_move_key() -> u64 {
    ZOBRIST.black_to_move_key
}

#[inline]
#[must_use]
pub(crate) fn en_passant_key(file: usize) -> u64 {
    ZOBRIST.en_passant_keys[file]
}

/// XOR delta between two castling-rights states, to fold into a running
/// hash whenever rights change.
#[must_use]
pub(crate) fn castling_delta(before: CastlingRights, after: CastlingRights) -> u64 {
    let mut delta = 0u64;
    let bits = [
        (Color::White, CASTLE_WHITE_K, 0usize),
        (Color::White, CASTLE_WHITE_Q, 1usize),
        (Color::Black, CASTLE_BLACK_K, 0usize),
        (Color::Black, CASTLE_BLACK_Q, 1usize),
    ];
    for (color, bit, side) in bits {
        if before.has(bit) != after.has(bit) {
            delta ^= ZOBRIST.castling_keys[color.index()][side];
        }
    }
    delta
}

/// Hash the full position from scratch. Used only when loading a FEN;
/// make/unmake maintain the hash incrementally afterward.
#[must_use]
pub(crate) fn hash_position(
    pieces: impl Iterator<Item = (Color, PieceKind, Square)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant_file: Option<usize>,
) -> u64 {
    let mut hash = 0u64;
    for (color, kind, sq) in pieces {
        hash ^= piece_key(color, kind, sq);
    }
    if side_to_move == Color::Black {
        hash ^= side_to_move_key();
    }
    hash ^= castling_delta(CastlingRights::none(), castling);
    if let Some(file) = en_passant_file {
        hash ^= en_passant_key(file);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_keys_are_distinct_per_square() {
        let a = piece_key(Color::White, PieceKind::Pawn, Square::new(1, 0));
        let b = piece_key(Color::White, PieceKind::Pawn, Square::new(1, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn castling_delta_is_its_own_inverse() {
        let all = CastlingRights::all();
        let none = CastlingRights::none();
        let d1 = castling_delta(all, none);
        let d2 = castling_delta(none, all);
        assert_eq!(d1, d2);
        assert_eq!(castling_delta(all, all), 0);
    }

    #[test]
    fn keys_are_stable_across_calls() {
        let a = piece_key(Color::Black, PieceKind::King, Square::new(7, 4));
        let b = piece_key(Color::Black, PieceKind::King, Square::new(7, 4));
        assert_eq!(a, b);
    }
}
