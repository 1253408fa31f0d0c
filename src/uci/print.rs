//! Formats the lines the engine emits during and after a search.

use crate::board::types::Move;
use crate::search::IterationInfo;

/// `info depth <D> score cp <S> time <ms> nodes <N> nps <NPS> hashfull <H>
/// pv <move>`, emitted once per completed iterative-deepening depth.
pub fn print_info(info: &IterationInfo) {
    let nps = if info.elapsed_ms > 0 { info.nodes * 1000 / info.elapsed_ms } else { info.nodes };
    match info.pv_move {
        Some(m) => println!(
            "info depth {} score cp {} time {} nodes {} nps {} hashfull {} pv {}",
            info.depth, info.score, info.elapsed_ms, info.nodes, nps, info.hashfull_permille, m.to_uci()
        ),
        None => println!(
            "info depth {} score cp {} time {} nodes {} nps {} hashfull {}",
            info.depth, info.score, info.elapsed_ms, info.nodes, nps, info.hashfull_permille
        ),
    }
}

/// `bestmove <move>`, emitted exactly once per completed search. If no
/// legal move exists (checkmate or stalemate at the root), the null-move
/// sentinel `0000` is emitted instead.
pub fn print_bestmove(best: Option<Move>) {
    match best {
        Some(m) => println!("bestmove {}", m.to_uci()),
        None => println!("bestmove 0000"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nps_is_zero_safe() {
        let info = IterationInfo { depth: 1, score: 0, nodes: 100, elapsed_ms: 0, pv_move: None, hashfull_permille: 0 };
        print_info(&info); // must not panic on divide-by-zero
    }
}
