use crate::policy::Policy;
use gateora_types::Verdict;

pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;

/// Clamp an accumulated score into `0..=100`. Applied once, after every rule has run.
pub fn clamp_score(raw: i32) -> u32 {
    raw.clamp(SCORE_MIN, SCORE_MAX) as u32
}

/// Map a clamped score to a verdict using the policy's thresholds.
pub fn compose_verdict(score: u32, policy: &Policy) -> Verdict {
    let t = policy.thresholds();
    if score >= t.block_at {
        Verdict::Block
    } else if score >= t.warn_at {
        Verdict::Warn
    } else {
        Verdict::Allow
    }
}
