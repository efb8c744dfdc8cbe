//! Fuzz target for intent parsing and evaluation.
//!
//! Goal: parsing may reject input, but any intent it accepts must evaluate
//! without panicking and produce a score in `0..=100`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_intent_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use gateora_domain::policy::Policy;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct IntentInput {
    json: String,
    block_unlimited_approvals: bool,
    block_unknown_contracts: bool,
    strict_mode: bool,
}

fuzz_target!(|input: IntentInput| {
    if input.json.len() > 8192 {
        return;
    }

    let Ok(intent) = gateora_app::parse_intent(&input.json) else {
        return;
    };

    let policy = Policy {
        block_unlimited_approvals: input.block_unlimited_approvals,
        block_unknown_contracts: input.block_unknown_contracts,
        strict_mode: input.strict_mode,
    };
    let result = gateora_domain::evaluate(&intent, &policy);
    assert!(result.score <= 100);
    assert_eq!(result.reasons.is_empty(), result.score == 0);
});
