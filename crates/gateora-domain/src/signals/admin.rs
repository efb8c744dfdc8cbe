use super::{Headline, SignalTrail};
use crate::model::TransactionIntent;
use crate::policy::Policy;
use gateora_types::ids;

const UPGRADEABLE_DELTA: i32 = 12;
const WITHDRAW_DELTA: i32 = 18;
const PAUSE_DELTA: i32 = 10;

pub fn run(intent: &TransactionIntent, _policy: &Policy, trail: &mut SignalTrail) {
    if intent.upgradeable == Some(true) {
        trail.add(
            UPGRADEABLE_DELTA,
            ids::TITLE_UPGRADEABLE,
            "Upgradeable contracts increase governance/admin risk.",
        );
        trail.headline(ids::TOP_UPGRADEABLE_RISK, Headline::IfUnset);
    }

    if intent.admin_can_withdraw == Some(true) {
        trail.add(
            WITHDRAW_DELTA,
            ids::TITLE_ADMIN_WITHDRAW,
            "Admin can withdraw funds or move assets.",
        );
        trail.headline(ids::TOP_ADMIN_WITHDRAW, Headline::Overwrite);
    }

    if intent.admin_can_pause == Some(true) {
        trail.add(
            PAUSE_DELTA,
            ids::TITLE_ADMIN_PAUSE,
            "Admin can pause protocol activity.",
        );
    }
}
