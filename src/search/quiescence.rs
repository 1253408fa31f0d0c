//! Quiescence search: capture-only extension at the search horizon.

use crate::board::Position;
use crate::eval::{self, EvalParams};
use crate::movegen;

use super::ordering::mvv_lva_score;
use super::see::see;

/// Capture-only alpha-beta from `pos`, called once the main search reaches
/// depth zero. Returns a score from the perspective of `pos`'s side to move.
pub fn quiesce(pos: &mut Position, mut alpha: i32, beta: i32, params: &EvalParams, nodes: &mut u64) -> i32 {
    *nodes += 1;
    let stand_pat = eval::evaluate(pos, params);

    if stand_pat >= beta {
        return beta;
    }
    if alpha < stand_pat {
        alpha = stand_pat;
    }

    let color = pos.side_to_move();
    let captures = movegen::generate_capture_moves(pos);
    let mut scored: Vec<(i32, crate::board::types::Move)> =
        captures.as_slice().iter().map(|&m| (mvv_lva_score(m), m)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    for (_, m) in scored {
        if see(pos, m) < 0 {
            continue;
        }

        let undo = pos.make_move(m);
        if pos.in_check(color) {
            pos.unmake_move(m, undo);
            continue;
        }
        let score = -quiesce(pos, -beta, -alpha, params, nodes);
        pos.unmake_move(m, undo);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
