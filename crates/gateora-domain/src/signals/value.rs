use super::{Headline, SignalTrail};
use crate::format::format_grouped;
use crate::model::TransactionIntent;
use crate::policy::Policy;
use gateora_types::ids;

const HIGH_VALUE_DELTA: i32 = 15;
const HIGH_VALUE_MIN_USD: f64 = 5000.0;

pub fn run(intent: &TransactionIntent, _policy: &Policy, trail: &mut SignalTrail) {
    let Some(usd) = intent.value_usd else { return };
    if usd >= HIGH_VALUE_MIN_USD {
        trail.add(
            HIGH_VALUE_DELTA,
            ids::TITLE_HIGH_VALUE,
            format!("Estimated value: ~${}.", format_grouped(usd)),
        );
        trail.headline(ids::TOP_HIGH_VALUE_TRANSFER, Headline::Overwrite);
    }
}
