//! Trivial [`ChessEngine`] implementations that stand in for the primary
//! search engine: material-only (no search, one-ply static comparison)
//! and random (uniform choice among legal moves). Useful for fuzzing the
//! UCI loop or as a fast sparring partner during development.

use rand::seq::SliceRandom;

use crate::board::types::Move;
use crate::board::Position;
use crate::eval::{self, EvalParams};
use crate::movegen::generate_legal_moves;

use super::ChessEngine;

/// Ranks legal moves by the static evaluation of the position they lead
/// to; no recursive search. `set_option` accepts the same material and
/// structural weight names as the primary engine.
pub struct MaterialEngine {
    params: EvalParams,
}

impl MaterialEngine {
    #[must_use]
    pub fn new() -> Self {
        MaterialEngine { params: EvalParams::default() }
    }
}

impl Default for MaterialEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessEngine for MaterialEngine {
    fn identify(&self) -> (&'static str, &'static str) {
        ("chess_engine (material baseline)", "chess_engine contributors")
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) {
        crate::uci::options::apply_setoption(&mut self.params, name, value);
    }

    fn find_best_move(&mut self, position: &Position) -> Option<Move> {
        generate_legal_moves(position)
            .iter()
            .copied()
            .max_by_key(|&m| {
                let mut after = position.clone();
                after.make_move(m);
                -eval::evaluate(&after, &self.params)
            })
    }

    fn evaluate(&self, position: &Position) -> i32 {
        eval::evaluate(position, &self.params)
    }

    fn new_game(&mut self) {}
}

/// Picks uniformly at random among the legal moves.
pub struct RandomEngine;

impl RandomEngine {
    #[must_use]
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessEngine for RandomEngine {
    fn identify(&self) -> (&'static str, &'static str) {
        ("chess_engine (random baseline)", "chess_engine contributors")
    }

    fn set_option(&mut self, _name: &str, _value: Option<&str>) {}

    fn find_best_move(&mut self, position: &Position) -> Option<Move> {
        generate_legal_moves(position).as_slice().choose(&mut rand::thread_rng()).copied()
    }

    fn evaluate(&self, _position: &Position) -> i32 {
        0
    }

    fn new_game(&mut self) {}
}
