use super::{Headline, SignalTrail};
use crate::model::TransactionIntent;
use crate::policy::Policy;
use gateora_types::ids;

const GAS_ANOMALY_DELTA: i32 = 12;

pub fn run(intent: &TransactionIntent, _policy: &Policy, trail: &mut SignalTrail) {
    if intent.gas_anomaly == Some(true) {
        trail.add(
            GAS_ANOMALY_DELTA,
            ids::TITLE_GAS_ANOMALY,
            "Unusual fee / gas pattern detected.",
        );
        trail.headline(ids::TOP_GAS_ANOMALY, Headline::IfUnset);
    }
}
