//! Search-wide score and depth constants.

/// Score magnitude used for a mate-in-zero at the root; actual mate scores
/// are this value minus the ply at which the mate occurs.
pub const MATE_SCORE: i32 = 30_000;

/// Scores with absolute value at or above this are mate scores, not
/// ordinary evaluation.
pub const MATE_THRESHOLD: i32 = 29_000;

/// Window bound used for the initial full-width alpha-beta call.
pub const SCORE_INFINITE: i32 = 30_001;

/// Quiescence recursion depth cap, guarding against runaway check
/// extensions in constructed positions.
pub const MAX_QSEARCH_PLY: i32 = 32;
