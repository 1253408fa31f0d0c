//! Principal-variation search: the interior alpha-beta driver and the
//! iterative-deepening loop that calls it from the root.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::board::types::{Move, MAX_PLY};
use crate::board::Position;
use crate::eval::{self, EvalParams};
use crate::movegen;

use super::constants::{MATE_THRESHOLD, SCORE_INFINITE};
use super::ordering::{self, HistoryTable, KillerTable};
use super::quiescence::quiesce;
use super::tt::{self, Bound, TranspositionTable};

/// Everything a running search needs, threaded through every node.
pub struct SearchContext<'a> {
    pub pos: &'a mut Position,
    pub tt: &'a mut TranspositionTable,
    pub killers: &'a mut KillerTable,
    pub history: &'a mut HistoryTable,
    pub params: &'a EvalParams,
    pub stop: &'a AtomicBool,
    pub nodes: u64,
}

impl SearchContext<'_> {
    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// One line of iterative-deepening progress, handed to the UCI layer.
pub struct IterationInfo {
    pub depth: i32,
    pub score: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub pv_move: Option<Move>,
    pub hashfull_permille: u32,
}

fn reduction_for(depth: i32) -> i32 {
    2.min(depth / 2)
}

/// Alpha-beta search with PVS at depth `depth`, `ply` half-moves from the
/// root. Returns a score from the perspective of `ctx.pos`'s side to move.
pub fn negamax(ctx: &mut SearchContext<'_>, depth: i32, ply: usize, mut alpha: i32, beta: i32) -> i32 {
    if ctx.should_stop() {
        return alpha;
    }
    if depth <= 0 {
        return quiesce(ctx.pos, alpha, beta, ctx.params, &mut ctx.nodes);
    }
    ctx.nodes += 1;

    if ply > 0 && (ctx.pos.is_fifty_move_rule() || ctx.pos.repetition_count() >= 2) {
        return 0;
    }

    let hash = ctx.pos.hash();
    let mut hash_move = None;
    if let Some(entry) = ctx.tt.probe(hash) {
        hash_move = Some(entry.best_move);
        if i32::from(entry.depth) >= depth {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::LowerBound if entry.score >= beta => return beta,
                Bound::UpperBound if entry.score <= alpha => return alpha,
                _ => {}
            }
        }
    }

    let color = ctx.pos.side_to_move();
    let node_in_check = ctx.pos.in_check(color);
    let mut moves = movegen::generate_pseudo_legal_moves(ctx.pos);
    ordering::order_moves(&mut moves, hash_move, ply, ctx.killers, ctx.history, color.index());

    let orig_alpha = alpha;
    let mut best_score = -SCORE_INFINITE;
    let mut best_move = Move::NULL;
    let mut legal_moves_found = 0usize;
    let mut quiets_tried: Vec<Move> = Vec::new();

    for i in 0..moves.len() {
        let m = moves[i];
        let undo = ctx.pos.make_move(m);
        if ctx.pos.in_check(color) {
            ctx.pos.unmake_move(m, undo);
            continue;
        }
        legal_moves_found += 1;
        let is_quiet = !m.is_capture() && !m.is_promotion();
        let gives_check = ctx.pos.in_check(ctx.pos.side_to_move());

        let score = if legal_moves_found == 1 {
            -negamax(ctx, depth - 1, ply + 1, -beta, -alpha)
        } else {
            let eligible_for_lmr = depth >= 3
                && is_quiet
                && !node_in_check
                && !gives_check
                && !ctx.killers.is_killer(ply, m);
            let reduction = if eligible_for_lmr { reduction_for(depth) } else { 0 };

            let reduced = -negamax(ctx, depth - 1 - reduction, ply + 1, -alpha - 1, -alpha);
            if reduced > alpha && reduced < beta {
                -negamax(ctx, depth - 1, ply + 1, -beta, -alpha)
            } else {
                reduced
            }
        };

        ctx.pos.unmake_move(m, undo);

        if is_quiet {
            quiets_tried.push(m);
        }

        if score >= beta {
            if is_quiet {
                ctx.killers.store(ply, m);
                ctx.history.record(color.index(), m, depth);
                for &other in &quiets_tried {
                    if other != m {
                        ctx.history.penalize(color.index(), other, depth);
                    }
                }
            }
            ctx.tt.store(hash, depth as i8, beta, tt::classify(score, orig_alpha, beta), m);
            return beta;
        }

        if score > best_score {
            best_score = score;
            best_move = m;
        }
        if score > alpha {
            alpha = score;
        }
    }

    if legal_moves_found == 0 {
        return if node_in_check { -ctx.params.mate_score + ply as i32 } else { 0 };
    }

    ctx.tt.store(hash, depth as i8, alpha, tt::classify(alpha, orig_alpha, beta), best_move);
    alpha
}

/// Run iterative deepening from `ctx.pos`'s current position up to
/// `max_depth`, invoking `on_iteration` after every completed depth.
pub fn iterative_deepening(
    ctx: &mut SearchContext<'_>,
    max_depth: i32,
    mut on_iteration: impl FnMut(&IterationInfo),
) -> Option<Move> {
    let start = Instant::now();
    let mut best_move = None;

    for depth in 1..=max_depth {
        if ctx.should_stop() {
            break;
        }
        let score = negamax(ctx, depth, 0, -SCORE_INFINITE, SCORE_INFINITE);
        if ctx.should_stop() && depth > 1 {
            break;
        }

        let root_move = ctx.tt.probe(ctx.pos.hash()).map(|e| e.best_move);
        if let Some(m) = root_move {
            if !m.is_null() {
                best_move = Some(m);
            }
        }

        on_iteration(&IterationInfo {
            depth,
            score,
            nodes: ctx.nodes,
            elapsed_ms: start.elapsed().as_millis() as u64,
            pv_move: best_move,
            hashfull_permille: ctx.tt.hashfull_permille(),
        });

        if score.abs() >= MATE_THRESHOLD {
            break;
        }
    }

    best_move
}

const _: () = assert!(MAX_PLY >= 64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;
    use crate::search::ordering::{HistoryTable, KillerTable};
    use crate::search::tt::TranspositionTable;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn finds_mate_in_one() {
        // Ra1-a8 is a back-rank checkmate: the black king's own pawns
        // block every flight square on the seventh rank.
        let mut pos = parse_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut tt = TranspositionTable::with_size_mb(1);
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();
        let params = EvalParams::default();
        let stop = AtomicBool::new(false);
        let mut ctx = SearchContext {
            pos: &mut pos,
            tt: &mut tt,
            killers: &mut killers,
            history: &mut history,
            params: &params,
            stop: &stop,
            nodes: 0,
        };
        let best = iterative_deepening(&mut ctx, 3, |_| {});
        let best = best.expect("a move should be found");
        assert_eq!(best.to_uci(), "a1a8");
    }

    #[test]
    fn detects_stalemate_as_draw() {
        let mut pos = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut tt = TranspositionTable::with_size_mb(1);
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();
        let params = EvalParams::default();
        let stop = AtomicBool::new(false);
        let mut ctx = SearchContext {
            pos: &mut pos,
            tt: &mut tt,
            killers: &mut killers,
            history: &mut history,
            params: &params,
            stop: &stop,
            nodes: 0,
        };
        let score = negamax(&mut ctx, 1, 0, -SCORE_INFINITE, SCORE_INFINITE);
        assert_eq!(score, 0);
    }
}
