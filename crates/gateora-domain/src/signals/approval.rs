use super::{Headline, SignalTrail};
use crate::model::{TransactionIntent, TxType};
use crate::policy::Policy;
use gateora_types::ids;

const UNLIMITED_DELTA: i32 = 45;
const UNLIMITED_FLOOR: i32 = 85;
const LIMITED_DELTA: i32 = 5;
const UNVERIFIED_SPENDER_DELTA: i32 = 25;

pub fn run(intent: &TransactionIntent, policy: &Policy, trail: &mut SignalTrail) {
    if intent.kind != TxType::Approve {
        return;
    }

    if intent.is_unlimited_approval() {
        trail.add(
            UNLIMITED_DELTA,
            ids::TITLE_UNLIMITED_APPROVAL,
            "Allowance is MAX_UINT (unlimited spend).",
        );
        trail.headline(ids::TOP_UNLIMITED_APPROVAL, Headline::Overwrite);

        if policy.block_unlimited_approvals {
            trail.raise_to(
                UNLIMITED_FLOOR,
                ids::TITLE_POLICY_TRIGGERED,
                "Policy blocks unlimited approvals.",
            );
        }
    } else {
        trail.add(
            LIMITED_DELTA,
            ids::TITLE_LIMITED_APPROVAL,
            "Approval amount is limited.",
        );
    }

    if intent.spender_verified == Some(false) {
        trail.add(
            UNVERIFIED_SPENDER_DELTA,
            ids::TITLE_UNVERIFIED_SPENDER,
            "Spender address is not verified.",
        );
        trail.headline(
            ids::TOP_UNVERIFIED_SPENDER,
            Headline::Unless(ids::TOP_UNLIMITED_APPROVAL),
        );
    }
}
