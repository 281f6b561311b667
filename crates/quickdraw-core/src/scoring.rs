//! Final score calculation.

use crate::constants::SCORE_PER_SECOND;

/// Score for a round: whole seconds survived times `SCORE_PER_SECOND`.
/// A clock that runs backwards scores zero.
pub fn final_score(started_at_ms: u64, ended_at_ms: u64) -> u32 {
    let whole_secs = ended_at_ms.saturating_sub(started_at_ms) / 1000;
    u32::try_from(whole_secs)
        .unwrap_or(u32::MAX)
        .saturating_mul(SCORE_PER_SECOND)
}
