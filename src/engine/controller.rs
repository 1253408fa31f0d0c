//! The search controller: owns the position and the tables a search needs,
//! and runs the search in a single background worker thread per the
//! controller/worker split.
//!
//! The controller thread (the one driving this struct) dequeues UCI
//! commands one at a time; `go` spawns a worker and returns immediately,
//! `stop`/`join` bring it back under the controller's exclusive control.
//! Only one worker ever runs at a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::board::fen::{parse_fen, START_FEN};
use crate::board::types::{Color, Move};
use crate::board::Position;
use crate::eval::{self, EvalParams};
use crate::search::constants::{MATE_THRESHOLD, SCORE_INFINITE};
use crate::search::{self, HistoryTable, IterationInfo, KillerTable, SearchContext, TranspositionTable};

use super::time;

/// Stack size for the search worker thread: recursive negamax can run
/// deep enough to overflow the default 8 MB thread stack.
const SEARCH_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Depth used for `go infinite` and as the ceiling for `go depth infinite`.
pub const MAX_SEARCH_DEPTH: i32 = 64;

/// Shared tables a search consumes. The controller owns these and hands
/// them to the worker for the duration of a search; it must not touch
/// them again until the worker has joined.
pub struct SharedSearchState {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

impl SharedSearchState {
    fn new(tt_mb: usize) -> Self {
        SharedSearchState {
            tt: TranspositionTable::with_size_mb(tt_mb),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    fn clear(&mut self) {
        self.tt.clear();
        self.killers = KillerTable::new();
        self.history = HistoryTable::new();
    }
}

/// Parameters parsed from a `go` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoParams {
    pub depth: Option<i32>,
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movetime: Option<u64>,
    pub infinite: bool,
}

/// A running search: the stop flag the controller sets and the handle it
/// joins before touching shared state again.
struct SearchJob {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Owns the position and the shared search tables and drives the
/// worker-thread lifecycle described in the concurrency model: at most one
/// worker running at a time, joined before the next command is processed.
pub struct EngineController {
    position: Position,
    state: Arc<Mutex<SharedSearchState>>,
    params: EvalParams,
    job: Option<SearchJob>,
}

impl EngineController {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        EngineController {
            position: parse_fen(START_FEN).expect("start FEN parses"),
            state: Arc::new(Mutex::new(SharedSearchState::new(tt_mb))),
            params: EvalParams::default(),
            job: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut EvalParams {
        &mut self.params
    }

    /// Clear TT/killers/history/seen-keys and reset to the initial
    /// position, per `ucinewgame`.
    pub fn new_game(&mut self) {
        self.join();
        self.state.lock().clear();
        self.position = parse_fen(START_FEN).expect("start FEN parses");
    }

    /// Replace the current position with `base`, applying `moves` (long
    /// algebraic notation) in order. An ill-formed or illegal move in the
    /// list is skipped rather than corrupting the position.
    pub fn set_position(&mut self, mut base: Position, moves: &[String]) {
        self.join();
        for uci_move in moves {
            match find_legal_move(&base, uci_move) {
                Some(m) => {
                    base.make_move(m);
                }
                None => {
                    log::warn!("skipping ill-formed or illegal move '{uci_move}' in position list");
                }
            }
        }
        self.position = base;
    }

    /// Replace the position from a FEN string. A FEN that fails to parse
    /// reverts to the initial position and logs a warning rather than
    /// aborting.
    pub fn set_position_fen(&mut self, fen: &str, moves: &[String]) {
        match parse_fen(fen) {
            Ok(pos) => self.set_position(pos, moves),
            Err(err) => {
                log::warn!("malformed FEN '{fen}': {err}; reverting to the initial position");
                self.set_position(parse_fen(START_FEN).expect("start FEN parses"), moves);
            }
        }
    }

    /// Begin a search in a background worker thread and return
    /// immediately. `on_info` is called from the worker thread after each
    /// completed depth; `on_bestmove` once, when the search concludes
    /// (naturally, by `stop`, or by the time budget running out).
    pub fn go(
        &mut self,
        go_params: GoParams,
        on_info: impl Fn(&IterationInfo) + Send + 'static,
        on_bestmove: impl FnOnce(Option<Move>) + Send + 'static,
    ) {
        self.join();

        let max_depth = go_params
            .depth
            .filter(|_| !go_params.infinite)
            .unwrap_or(MAX_SEARCH_DEPTH)
            .min(MAX_SEARCH_DEPTH);

        let per_move_cap_ms = if go_params.infinite {
            None
        } else if let Some(mt) = go_params.movetime {
            Some(mt)
        } else {
            let (time_left, inc) = match self.position.side_to_move() {
                Color::White => (go_params.wtime, go_params.winc),
                Color::Black => (go_params.btime, go_params.binc),
            };
            time_left.map(|t| time::per_move_cap_ms(t, inc.unwrap_or(0)))
        };

        let stop = Arc::new(AtomicBool::new(false));
        let mut position = self.position.clone();
        let state = Arc::clone(&self.state);
        let params = self.params;
        let worker_stop = Arc::clone(&stop);

        const MAX_POLL_SLEEP_MS: u64 = 5;
        let timer = per_move_cap_ms.map(|cap_ms| {
            let timer_stop = Arc::clone(&stop);
            let deadline = Instant::now() + Duration::from_millis(cap_ms);
            thread::spawn(move || loop {
                if timer_stop.load(Ordering::Relaxed) {
                    break;
                }
                let now = Instant::now();
                if now >= deadline {
                    timer_stop.store(true, Ordering::Relaxed);
                    break;
                }
                thread::sleep((deadline - now).min(Duration::from_millis(MAX_POLL_SLEEP_MS)));
            })
        });

        let handle = thread::Builder::new()
            .name("search-worker".into())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut state = state.lock();
                let start = Instant::now();
                let mut total_nodes = 0u64;
                let mut previous_depth_elapsed_ms = 0u64;
                let mut best_move = None;

                for depth in 1..=max_depth {
                    if worker_stop.load(Ordering::Relaxed) {
                        break;
                    }
                    if let Some(cap_ms) = per_move_cap_ms {
                        if depth > 1 && !time::should_continue(previous_depth_elapsed_ms, cap_ms) {
                            break;
                        }
                    }

                    let depth_start = Instant::now();
                    let mut ctx = SearchContext {
                        pos: &mut position,
                        tt: &mut state.tt,
                        killers: &mut state.killers,
                        history: &mut state.history,
                        params: &params,
                        stop: &worker_stop,
                        nodes: total_nodes,
                    };
                    let score = search::negamax(&mut ctx, depth, 0, -SCORE_INFINITE, SCORE_INFINITE);
                    total_nodes = ctx.nodes;

                    if worker_stop.load(Ordering::Relaxed) && depth > 1 {
                        break;
                    }

                    let root_move = state.tt.probe(position.hash()).map(|e| e.best_move);
                    if let Some(m) = root_move.filter(|m| !m.is_null()) {
                        best_move = Some(m);
                    }

                    on_info(&IterationInfo {
                        depth,
                        score,
                        nodes: total_nodes,
                        elapsed_ms: start.elapsed().as_millis() as u64,
                        pv_move: best_move,
                        hashfull_permille: state.tt.hashfull_permille(),
                    });

                    previous_depth_elapsed_ms = depth_start.elapsed().as_millis() as u64;

                    if score.abs() >= MATE_THRESHOLD {
                        break;
                    }
                }

                // Wake the timer thread promptly even on natural completion,
                // so it doesn't poll until its own deadline for no reason.
                worker_stop.store(true, Ordering::Relaxed);

                if best_move.is_none() {
                    best_move = movegen_first_legal_move(&position);
                }

                on_bestmove(best_move);
                if let Some(timer) = timer {
                    let _ = timer.join();
                }
            })
            .expect("failed to spawn search worker thread");

        self.job = Some(SearchJob { stop, handle });
    }

    /// Set the shared stop flag. The worker finishes its current node,
    /// commits its best move so far, and exits; call `join` to wait for
    /// it.
    pub fn stop(&mut self) {
        if let Some(job) = &self.job {
            job.stop.store(true, Ordering::Relaxed);
        }
    }

    /// Block until the current worker (if any) has emitted `bestmove` and
    /// returned. No-op if nothing is running.
    pub fn join(&mut self) {
        if let Some(job) = self.job.take() {
            job.stop.store(true, Ordering::Relaxed);
            let _ = job.handle.join();
        }
    }

    /// Set the stop flag and join, for `quit`.
    pub fn shutdown(&mut self) {
        self.join();
    }
}

/// Blocking adapter for callers that want a synchronous move rather than
/// the async callback-driven `go`/`stop` interface. Runs its own
/// throwaway search state at a fixed shallow depth, independent of the
/// worker thread `go` spawns.
impl super::ChessEngine for EngineController {
    fn identify(&self) -> (&'static str, &'static str) {
        ("chess_engine", "chess_engine contributors")
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) {
        crate::uci::options::apply_setoption(&mut self.params, name, value);
    }

    fn find_best_move(&mut self, position: &Position) -> Option<Move> {
        const BLOCKING_SEARCH_DEPTH: i32 = 4;
        let mut pos = position.clone();
        let mut tt = TranspositionTable::with_size_mb(crate::search::tt::DEFAULT_TT_MB);
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();
        let stop = AtomicBool::new(false);
        let mut ctx = SearchContext {
            pos: &mut pos,
            tt: &mut tt,
            killers: &mut killers,
            history: &mut history,
            params: &self.params,
            stop: &stop,
            nodes: 0,
        };
        search::iterative_deepening(&mut ctx, BLOCKING_SEARCH_DEPTH, |_| {})
            .or_else(|| movegen_first_legal_move(position))
    }

    fn evaluate(&self, position: &Position) -> i32 {
        eval::evaluate(position, &self.params)
    }

    fn new_game(&mut self) {
        EngineController::new_game(self);
    }
}

/// The error-handling design requires `stop` to yield a move even if no
/// depth has completed: the first legal root move.
fn movegen_first_legal_move(pos: &Position) -> Option<Move> {
    crate::movegen::generate_legal_moves(pos).as_slice().first().copied()
}

/// Find the legal move on `pos` whose long-algebraic notation matches
/// `uci_move`, or `None` if it is ill-formed or illegal in this position.
fn find_legal_move(pos: &Position, uci_move: &str) -> Option<Move> {
    crate::movegen::generate_legal_moves(pos)
        .as_slice()
        .iter()
        .copied()
        .find(|m| m.to_uci().eq_ignore_ascii_case(uci_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn go_with_shallow_depth_reports_a_legal_bestmove() {
        let mut controller = EngineController::new(1);
        let (tx, rx) = mpsc::channel();
        controller.go(
            GoParams { depth: Some(2), ..GoParams::default() },
            |_info| {},
            move |best| {
                let _ = tx.send(best);
            },
        );
        controller.join();
        let best = rx.recv().expect("bestmove callback fires").expect("a move is found");
        assert!(find_legal_move(controller.position(), &best.to_uci()).is_some());
    }

    #[test]
    fn set_position_skips_ill_formed_moves() {
        let mut controller = EngineController::new(1);
        let moves = vec!["e2e4".to_string(), "not-a-move".to_string(), "e7e5".to_string()];
        controller.set_position(parse_fen(START_FEN).unwrap(), &moves);
        // Both legal moves apply; only the malformed token in between is
        // skipped, leaving the board consistent rather than corrupted.
        assert_eq!(controller.position().side_to_move(), Color::White);
        assert!(controller.position().pieces_of(Color::White, crate::board::types::PieceKind::Pawn).popcount() == 8);
    }

    #[test]
    fn stop_before_any_depth_completes_still_yields_a_move() {
        let mut controller = EngineController::new(1);
        let (tx, rx) = mpsc::channel();
        controller.go(
            GoParams { infinite: true, ..GoParams::default() },
            |_info| {},
            move |best| {
                let _ = tx.send(best);
            },
        );
        controller.stop();
        controller.join();
        let best = rx.recv().expect("bestmove callback fires");
        assert!(best.is_some());
    }
}
