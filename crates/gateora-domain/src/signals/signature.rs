use super::{Headline, SignalTrail};
use crate::model::{TransactionIntent, TxType};
use crate::policy::Policy;
use gateora_types::ids;

const SIGNATURE_DELTA: i32 = 20;
const LOOKALIKE_DELTA: i32 = 20;
const DRAINER_DELTA: i32 = 55;

pub fn run(intent: &TransactionIntent, _policy: &Policy, trail: &mut SignalTrail) {
    if intent.kind != TxType::Sign {
        return;
    }

    trail.add(
        SIGNATURE_DELTA,
        ids::TITLE_SIGNATURE_REQUEST,
        "User is asked to sign an off-chain message.",
    );
    trail.headline(ids::TOP_SIGNATURE_REQUEST, Headline::Overwrite);

    if intent.domain_lookalike == Some(true) {
        trail.add(
            LOOKALIKE_DELTA,
            ids::TITLE_LOOKALIKE_DOMAIN,
            "Domain appears to mimic a known brand.",
        );
        trail.headline(ids::TOP_LOOKALIKE_DOMAIN, Headline::Overwrite);
    }

    if intent.known_drainer_pattern == Some(true) {
        trail.add(
            DRAINER_DELTA,
            ids::TITLE_KNOWN_DRAINER,
            "Message matches a known draining signature pattern.",
        );
        trail.headline(ids::TOP_KNOWN_DRAINER, Headline::Overwrite);
    }
}
