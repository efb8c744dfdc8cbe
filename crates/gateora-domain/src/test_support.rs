use crate::model::{Allowance, Amount, TransactionIntent, TxType};
use crate::policy::Policy;
use gateora_types::Reason;

pub fn policy(block_unlimited: bool, block_unknown: bool, strict: bool) -> Policy {
    Policy {
        block_unlimited_approvals: block_unlimited,
        block_unknown_contracts: block_unknown,
        strict_mode: strict,
    }
}

pub fn approve(allowance: Option<Allowance>, spender_verified: Option<bool>) -> TransactionIntent {
    TransactionIntent {
        allowance,
        spender_verified,
        ..TransactionIntent::new(TxType::Approve)
    }
}

pub fn amount(text: &str) -> Option<Allowance> {
    Some(Allowance::Amount(Amount::Text(text.to_string())))
}

pub fn sign(lookalike: bool, drainer: bool) -> TransactionIntent {
    TransactionIntent {
        domain_lookalike: Some(lookalike),
        known_drainer_pattern: Some(drainer),
        ..TransactionIntent::new(TxType::Sign)
    }
}

pub fn generic() -> TransactionIntent {
    TransactionIntent::new(TxType::parse("other"))
}

pub fn titles(reasons: &[Reason]) -> Vec<&str> {
    reasons.iter().map(|r| r.title.as_str()).collect()
}
