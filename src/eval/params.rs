//! Tunable evaluation weights, registered as UCI spin options (see
//! `uci::options`). Defaults are the classical values; everything here is
//! data, not algorithm — the blending formula lives in `eval::mod`.

use crate::board::types::PieceKind;

/// Default per-kind material value, indexed by [`PieceKind::index`].
pub const MATERIAL: [i32; 6] = [100, 320, 330, 500, 900, 2000];

#[derive(Clone, Copy, Debug)]
pub struct EvalParams {
    /// Per-kind material weights, UCI-tunable (`PawnValue` … `KingValue`).
    pub material: [i32; 6],
    /// Score magnitude assigned to a mate at ply 0 (`MateScore`).
    pub mate_score: i32,

    pub bishop_pair_bonus: i32,
    pub rook_open_file_bonus: i32,
    pub rook_semi_open_file_bonus: i32,
    pub doubled_pawn_penalty: i32,
    pub isolated_pawn_penalty: i32,
    pub passed_pawn_bonus: i32,
    pub supported_pawn_bonus: i32,
    pub king_shield_bonus: i32,

    /// Bonus per square adjacent to the enemy king that this side attacks.
    pub restrict_king_bonus: i32,
    /// Penalty per empty square immediately around the own king.
    pub airy_king_penalty: i32,
    /// Bonus for a pawn defending another friendly pawn or piece.
    pub supporting_pawn_bonus: i32,
    /// Bonus for a non-pawn piece defending another friendly piece.
    pub supporting_piece_bonus: i32,
    /// Penalty applied while this side's own king is in check.
    pub checked_penalty: i32,
    /// Bonus applied while this side is giving check.
    pub checking_bonus: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            material: MATERIAL,
            mate_score: 100_000,

            bishop_pair_bonus: 30,
            rook_open_file_bonus: 25,
            rook_semi_open_file_bonus: 12,
            doubled_pawn_penalty: 12,
            isolated_pawn_penalty: 15,
            passed_pawn_bonus: 20,
            supported_pawn_bonus: 8,
            king_shield_bonus: 50,

            restrict_king_bonus: 4,
            airy_king_penalty: 6,
            supporting_pawn_bonus: 5,
            supporting_piece_bonus: 3,
            checked_penalty: 40,
            checking_bonus: 25,
        }
    }
}

#[must_use]
pub fn material_value(kind: PieceKind) -> i32 {
    MATERIAL[kind.index()]
}
