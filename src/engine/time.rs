//! Per-move time budgeting for the search controller.
//!
//! Deliberately narrower than a full time-management module: the design
//! calls for a flat ≤10% cap on remaining time plus a depth-continuation
//! heuristic, not moves-to-go estimation or panic-mode fallbacks.

/// Margin subtracted from the projected next-depth cost before comparing
/// against the per-move cap.
const SMALL_BUFFER_MS: i64 = 50;

/// Branching-factor estimate used to project the next iteration's cost
/// from the previous one's elapsed time.
const BRANCHING_FACTOR_ESTIMATE: i64 = 10;

/// Cap per-move thinking at ≤10% of the mover's remaining time. The
/// increment is folded into the pool before the 10% cut is taken, since a
/// move played now regains `inc_ms` immediately afterward.
#[must_use]
pub fn per_move_cap_ms(time_left_ms: u64, inc_ms: u64) -> u64 {
    let pool = time_left_ms.saturating_add(inc_ms);
    (pool / 10).max(1).min(time_left_ms.max(1))
}

/// Whether another iterative-deepening depth should be attempted, given
/// how long the previous depth took and the overall per-move cap.
///
/// `max(previous_depth_elapsed * 10, 0) + small_buffer < per_move_cap`.
#[must_use]
pub fn should_continue(previous_depth_elapsed_ms: u64, per_move_cap_ms: u64) -> bool {
    let projected = (previous_depth_elapsed_ms as i64) * BRANCHING_FACTOR_ESTIMATE;
    projected.max(0) + SMALL_BUFFER_MS < per_move_cap_ms as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_is_at_most_ten_percent_of_remaining_time() {
        assert_eq!(per_move_cap_ms(100_000, 0), 10_000);
    }

    #[test]
    fn cap_never_exceeds_remaining_time() {
        assert!(per_move_cap_ms(5, 0) <= 5);
    }

    #[test]
    fn continuation_heuristic_blocks_once_projection_exceeds_cap() {
        assert!(should_continue(100, 10_000));
        assert!(!should_continue(2_000, 10_000));
    }
}
