//! Direct-mapped transposition table.
//!
//! Single-threaded by design — search is non-parallel (an explicit
//! non-goal), so there is no need for per-entry synchronization; the
//! table lives behind the one `parking_lot::Mutex` the controller already
//! holds around all shared search state.

use crate::board::types::Move;

pub const DEFAULT_TT_MB: usize = 16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bound {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Clone, Copy)]
pub struct TtEntry {
    pub key: u64,
    pub depth: i8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Move,
}

pub struct TranspositionTable {
    entries: Vec<Option<TtEntry>>,
    mask: usize,
}

impl TranspositionTable {
    #[must_use]
    pub fn with_size_mb(mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TtEntry>>().max(1);
        let slots = (mb * 1024 * 1024 / entry_size).max(1);
        let slots = slots.next_power_of_two() / 2;
        let slots = slots.max(1 << 16);
        TranspositionTable { entries: vec![None; slots], mask: slots - 1 }
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        let entry = self.entries[self.index(key)]?;
        if entry.key == key {
            Some(entry)
        } else {
            None
        }
    }

    pub fn store(&mut self, key: u64, depth: i8, score: i32, bound: Bound, best_move: Move) {
        let idx = self.index(key);
        self.entries[idx] = Some(TtEntry { key, depth, score, bound, best_move });
    }

    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = None;
        }
    }

    /// Permille of slots occupied, for the UCI `hashfull` info field.
    #[must_use]
    pub fn hashfull_permille(&self) -> u32 {
        let sample = self.entries.len().min(1000);
        if sample == 0 {
            return 0;
        }
        let occupied = self.entries[..sample].iter().filter(|e| e.is_some()).count();
        ((occupied * 1000) / sample) as u32
    }
}

/// Classify a search score against the alpha/beta window at the point it
/// was stored — used uniformly at root and interior nodes (the corrected
/// behavior from the design's Open Question: root entries are not always
/// stored as `Exact`).
#[must_use]
pub fn classify(score: i32, alpha: i32, beta: i32) -> Bound {
    if score <= alpha {
        Bound::UpperBound
    } else if score >= beta {
        Bound::LowerBound
    } else {
        Bound::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::with_size_mb(1);
        tt.store(0xDEAD_BEEF, 4, 120, Bound::Exact, Move::NULL);
        let entry = tt.probe(0xDEAD_BEEF).unwrap();
        assert_eq!(entry.score, 120);
        assert_eq!(entry.depth, 4);
    }

    #[test]
    fn probe_misses_on_key_collision_in_same_slot() {
        let mut tt = TranspositionTable::with_size_mb(1);
        tt.store(1, 1, 1, Bound::Exact, Move::NULL);
        let colliding_key = 1 + ((tt.mask as u64) + 1);
        assert!(tt.probe(colliding_key).is_none());
    }

    #[test]
    fn classify_matches_alpha_beta_window() {
        assert_eq!(classify(10, 20, 30), Bound::UpperBound);
        assert_eq!(classify(40, 20, 30), Bound::LowerBound);
        assert_eq!(classify(25, 20, 30), Bound::Exact);
    }
}
