use super::SignalTrail;
use crate::model::TransactionIntent;
use crate::policy::Policy;
use gateora_types::ids;

const STRICT_MODE_DELTA: i32 = 8;

pub fn run(_intent: &TransactionIntent, policy: &Policy, trail: &mut SignalTrail) {
    if policy.strict_mode {
        trail.add(
            STRICT_MODE_DELTA,
            ids::TITLE_STRICT_MODE,
            "Stricter thresholds applied.",
        );
    }
}
