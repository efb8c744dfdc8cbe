use super::{Headline, SignalTrail};
use crate::format::format_plain;
use crate::model::TransactionIntent;
use crate::policy::Policy;
use gateora_types::ids;

const UNKNOWN_REPUTATION_DELTA: i32 = 15;
const UNKNOWN_CONTRACT_FLOOR: i32 = 80;
const NEW_CONTRACT_DELTA: i32 = 10;
const NEW_CONTRACT_MAX_DAYS: f64 = 7.0;

pub fn reputation(intent: &TransactionIntent, policy: &Policy, trail: &mut SignalTrail) {
    if !intent.has_unknown_reputation() {
        return;
    }

    trail.add(
        UNKNOWN_REPUTATION_DELTA,
        ids::TITLE_UNKNOWN_REPUTATION,
        "Target has no trusted reputation signals.",
    );

    if policy.block_unknown_contracts {
        trail.raise_to(
            UNKNOWN_CONTRACT_FLOOR,
            ids::TITLE_POLICY_TRIGGERED,
            "Policy blocks unknown contracts.",
        );
        trail.pin_headline(ids::TOP_UNKNOWN_CONTRACT_BLOCKED);
    }
}

pub fn age(intent: &TransactionIntent, _policy: &Policy, trail: &mut SignalTrail) {
    let Some(days) = intent.contract_age_days else {
        return;
    };
    if days < NEW_CONTRACT_MAX_DAYS {
        trail.add(
            NEW_CONTRACT_DELTA,
            ids::TITLE_VERY_NEW_CONTRACT,
            format!("Contract age is {} day(s).", format_plain(days)),
        );
        trail.headline(ids::TOP_VERY_NEW_CONTRACT, Headline::IfUnset);
    }
}
