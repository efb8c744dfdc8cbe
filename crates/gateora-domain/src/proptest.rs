//! Property-based tests for the evaluation engine.
//!
//! These cover score bounds, determinism, strict-mode monotonicity, the policy floors and
//! the reason/top-signal bookkeeping.

use crate::engine::evaluate;
use crate::model::{Allowance, Amount, TransactionIntent, TxType};
use crate::policy::Policy;
use crate::test_support::titles;
use gateora_types::{ids, Verdict};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_tx_type() -> impl Strategy<Value = TxType> {
    prop_oneof![
        Just(TxType::Approve),
        Just(TxType::Swap),
        Just(TxType::Transfer),
        Just(TxType::Sign),
        "[a-z]{0,8}".prop_map(|s| TxType::parse(&s)),
    ]
}

fn arb_allowance() -> impl Strategy<Value = Option<Allowance>> {
    prop_oneof![
        Just(None),
        Just(Some(Allowance::Unlimited)),
        "[0-9]{1,6}".prop_map(|s| Some(Allowance::Amount(Amount::Text(s)))),
    ]
}

fn arb_flag() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
}

fn arb_reputation() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("unknown".to_string())),
        Just(Some("trusted".to_string())),
        Just(Some("Unknown".to_string())),
    ]
}

fn arb_number() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0f64..50_000.0).prop_map(Some)]
}

fn arb_intent() -> impl Strategy<Value = TransactionIntent> {
    (
        (arb_tx_type(), arb_allowance(), arb_flag(), arb_reputation()),
        (arb_number(), arb_number()),
        (arb_flag(), arb_flag()),
        (arb_flag(), arb_flag(), arb_flag(), arb_flag()),
    )
        .prop_map(
            |(
                (kind, allowance, spender_verified, contract_reputation),
                (contract_age_days, value_usd),
                (domain_lookalike, known_drainer_pattern),
                (upgradeable, admin_can_withdraw, admin_can_pause, gas_anomaly),
            )| TransactionIntent {
                kind,
                allowance,
                spender_verified,
                contract_reputation,
                contract_age_days,
                value_usd,
                domain_lookalike,
                known_drainer_pattern,
                upgradeable,
                admin_can_withdraw,
                admin_can_pause,
                gas_anomaly,
                ..TransactionIntent::default()
            },
        )
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(unlimited, unknown, strict)| Policy {
        block_unlimited_approvals: unlimited,
        block_unknown_contracts: unknown,
        strict_mode: strict,
    })
}

/// Reason titles the rule table says should fire, in rule order, derived from the intent fields
/// without running the engine.
fn expected_titles(intent: &TransactionIntent, policy: &Policy) -> Vec<&'static str> {
    let mut out = Vec::new();

    if intent.kind == TxType::Approve {
        if intent.allowance == Some(Allowance::Unlimited) {
            out.push(ids::TITLE_UNLIMITED_APPROVAL);
            if policy.block_unlimited_approvals {
                out.push(ids::TITLE_POLICY_TRIGGERED);
            }
        } else {
            out.push(ids::TITLE_LIMITED_APPROVAL);
        }
        if intent.spender_verified == Some(false) {
            out.push(ids::TITLE_UNVERIFIED_SPENDER);
        }
    }
    if intent.contract_reputation.as_deref() == Some("unknown") {
        out.push(ids::TITLE_UNKNOWN_REPUTATION);
        if policy.block_unknown_contracts {
            out.push(ids::TITLE_POLICY_TRIGGERED);
        }
    }
    if intent.contract_age_days.is_some_and(|d| d < 7.0) {
        out.push(ids::TITLE_VERY_NEW_CONTRACT);
    }
    if intent.value_usd.is_some_and(|v| v >= 5000.0) {
        out.push(ids::TITLE_HIGH_VALUE);
    }
    if intent.kind == TxType::Sign {
        out.push(ids::TITLE_SIGNATURE_REQUEST);
        if intent.domain_lookalike == Some(true) {
            out.push(ids::TITLE_LOOKALIKE_DOMAIN);
        }
        if intent.known_drainer_pattern == Some(true) {
            out.push(ids::TITLE_KNOWN_DRAINER);
        }
    }
    for (flag, title) in [
        (intent.upgradeable, ids::TITLE_UPGRADEABLE),
        (intent.admin_can_withdraw, ids::TITLE_ADMIN_WITHDRAW),
        (intent.admin_can_pause, ids::TITLE_ADMIN_PAUSE),
        (intent.gas_anomaly, ids::TITLE_GAS_ANOMALY),
    ] {
        if flag == Some(true) {
            out.push(title);
        }
    }
    if policy.strict_mode {
        out.push(ids::TITLE_STRICT_MODE);
    }
    out
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn score_is_bounded_and_matches_verdict(intent in arb_intent(), policy in arb_policy()) {
        let result = evaluate(&intent, &policy);
        prop_assert!(result.score <= 100);

        let t = policy.thresholds();
        let expected = if result.score >= t.block_at {
            Verdict::Block
        } else if result.score >= t.warn_at {
            Verdict::Warn
        } else {
            Verdict::Allow
        };
        prop_assert_eq!(result.verdict, expected);
    }

    #[test]
    fn evaluation_is_deterministic(intent in arb_intent(), policy in arb_policy()) {
        prop_assert_eq!(evaluate(&intent, &policy), evaluate(&intent, &policy));
    }

    #[test]
    fn strict_mode_never_lowers_score_or_verdict(intent in arb_intent(), policy in arb_policy()) {
        let relaxed = Policy { strict_mode: false, ..policy };
        let strict = Policy { strict_mode: true, ..policy };

        let a = evaluate(&intent, &relaxed);
        let b = evaluate(&intent, &strict);
        prop_assert!(b.score >= a.score);
        prop_assert!(b.verdict >= a.verdict);
    }

    #[test]
    fn blocked_unlimited_approval_always_blocks(intent in arb_intent(), policy in arb_policy()) {
        let intent = TransactionIntent {
            kind: TxType::Approve,
            allowance: Some(Allowance::Unlimited),
            ..intent
        };
        let policy = Policy { block_unlimited_approvals: true, ..policy };

        let result = evaluate(&intent, &policy);
        prop_assert!(result.score >= 85);
        prop_assert_eq!(result.verdict, Verdict::Block);
    }

    #[test]
    fn blocked_unknown_contract_owns_the_headline(intent in arb_intent(), policy in arb_policy()) {
        let intent = TransactionIntent {
            contract_reputation: Some("unknown".to_string()),
            ..intent
        };
        let policy = Policy { block_unknown_contracts: true, ..policy };

        let result = evaluate(&intent, &policy);
        prop_assert!(result.score >= 80);
        prop_assert_eq!(result.verdict, Verdict::Block);
        prop_assert_eq!(result.top_signal.as_str(), ids::TOP_UNKNOWN_CONTRACT_BLOCKED);
    }

    #[test]
    fn zero_score_means_no_reasons(intent in arb_intent(), policy in arb_policy()) {
        let result = evaluate(&intent, &policy);
        prop_assert_eq!(result.reasons.is_empty(), result.score == 0);
        if result.reasons.is_empty() {
            prop_assert_eq!(result.top_signal.as_str(), ids::TOP_NONE);
        }
    }

    #[test]
    fn policy_reasons_follow_policy_flags(intent in arb_intent(), policy in arb_policy()) {
        let result = evaluate(&intent, &policy);

        let triggered = result
            .reasons
            .iter()
            .filter(|r| r.title == ids::TITLE_POLICY_TRIGGERED)
            .count();
        let expected = usize::from(
            policy.block_unlimited_approvals
                && intent.kind == TxType::Approve
                && intent.is_unlimited_approval(),
        ) + usize::from(policy.block_unknown_contracts && intent.has_unknown_reputation());
        prop_assert_eq!(triggered, expected);

        let strict_last = result
            .reasons
            .last()
            .is_some_and(|r| r.title == ids::TITLE_STRICT_MODE);
        prop_assert_eq!(strict_last, policy.strict_mode);
    }

    #[test]
    fn reasons_are_exactly_the_fired_rules_in_order(intent in arb_intent(), policy in arb_policy()) {
        let result = evaluate(&intent, &policy);
        prop_assert_eq!(titles(&result.reasons), expected_titles(&intent, &policy));
    }

    #[test]
    fn summary_leads_with_verdict_and_score(intent in arb_intent(), policy in arb_policy()) {
        let result = evaluate(&intent, &policy);
        let prefix = format!("Verdict: {} (Risk {}/100).", result.verdict, result.score);
        prop_assert!(result.summary.starts_with(&prefix));
    }
}
