//! Scoring module - speed curve and milestone detection
//!
//! The snake speeds up as the score grows: every 10 points shaves
//! `SPEED_DECREASE_MS` off the tick interval, floored at `MIN_SPEED_MS`.

use tui_snake_types::{INITIAL_SPEED_MS, MILESTONE_STEP, MIN_SPEED_MS, SPEED_DECREASE_MS};

/// Tick interval in milliseconds for a given score.
///
/// Non-increasing in `score` and clamped to `MIN_SPEED_MS`.
pub fn tick_interval_ms(score: u32) -> u64 {
    let reduction = (score as u64 / 10) * SPEED_DECREASE_MS;
    INITIAL_SPEED_MS.saturating_sub(reduction).max(MIN_SPEED_MS)
}

/// Whether `score` is an exact (non-zero) milestone multiple.
pub fn is_milestone(score: u32) -> bool {
    score > 0 && score % MILESTONE_STEP == 0
}
