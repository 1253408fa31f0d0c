//! Static evaluation: material, phase-blended piece-square tables, pawn
//! structure, rook activity, bishop pair, and king shield.
//!
//! Not maintained incrementally (an explicit non-goal) — every call walks
//! the position from scratch. The phase blend follows the weighting
//! named in the design: `early_weight = remaining / 14`, `end_weight =
//! clamp(8 - remaining, 0, 8) / 14`, where `remaining` is the number of
//! non-pawn, non-king pieces left on the board (max 14, the starting
//! count of knights+bishops+rooks+queens for both sides).

mod king_safety;
mod material_pst;
mod pawn_structure;
pub mod params;

use crate::board::types::{Color, PieceKind};
use crate::board::Position;

pub use params::EvalParams;

fn side_totals(pos: &Position, color: Color, params: &EvalParams) -> (i32, i32) {
    let mut mg = 0;
    let mut eg = 0;
    for &kind in &PieceKind::ALL {
        for sq in pos.pieces_of(color, kind).iter() {
            let (piece_mg, piece_eg) = material_pst::piece_score(kind, color, sq, &params.material);
            mg += piece_mg;
            eg += piece_eg;
        }
    }
    (mg, eg)
}

fn non_pawn_piece_count(pos: &Position, color: Color) -> i32 {
    [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
        .iter()
        .map(|&kind| pos.pieces_of(color, kind).popcount() as i32)
        .sum()
}

fn structural_score(pos: &Position, color: Color, params: &EvalParams) -> i32 {
    pawn_structure::pawn_structure_score(pos, color, params)
        + king_safety::king_shield_score(pos, color, params)
        + king_safety::rook_activity_score(pos, color, params)
        + king_safety::bishop_pair_score(pos, color, params)
        + king_safety::restrict_king_score(pos, color, params)
        + king_safety::airy_king_score(pos, color, params)
        + king_safety::supporting_piece_score(pos, color, params)
        + king_safety::check_score(pos, color, params)
}

/// Evaluate `pos`, returning a centipawn score from the perspective of the
/// side to move (positive favors the mover).
#[must_use]
pub fn evaluate(pos: &Position, params: &EvalParams) -> i32 {
    let (white_mg, white_eg) = side_totals(pos, Color::White, params);
    let (black_mg, black_eg) = side_totals(pos, Color::Black, params);
    let mg_total = white_mg - black_mg;
    let eg_total = white_eg - black_eg;

    let remaining = non_pawn_piece_count(pos, Color::White) + non_pawn_piece_count(pos, Color::Black);
    let early_weight = f64::from(remaining) / 14.0;
    let end_weight = f64::from((8 - remaining).clamp(0, 8)) / 14.0;

    let blended = (f64::from(mg_total) * early_weight) + (f64::from(eg_total) * end_weight);

    let structural =
        structural_score(pos, Color::White, params) - structural_score(pos, Color::Black, params);

    let total = blended.round() as i32 + structural;

    match pos.side_to_move() {
        Color::White => total,
        Color::Black => -total,
    }
}
