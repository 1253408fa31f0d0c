//! Search: iterative-deepening PVS over a transposition table, killer and
//! history move ordering, quiescence, and static exchange evaluation.

pub mod constants;
pub mod ordering;
pub mod pvs;
pub mod quiescence;
pub mod see;
pub mod tt;

pub use ordering::{HistoryTable, KillerTable};
pub use pvs::{iterative_deepening, negamax, IterationInfo, SearchContext};
pub use tt::TranspositionTable;
