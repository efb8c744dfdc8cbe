//! One-paragraph natural-language summary of an evaluated intent.

use crate::format::format_grouped;
use crate::model::{non_empty, Allowance, TransactionIntent, TxType};
use gateora_types::Verdict;

/// Render the summary: a fixed verdict sentence followed by a type-specific description.
pub fn compose_summary(intent: &TransactionIntent, verdict: Verdict, score: u32) -> String {
    let mut parts: Vec<String> = vec![format!("Verdict: {verdict} (Risk {score}/100).")];

    match &intent.kind {
        TxType::Approve => {
            parts.push(format!(
                "Approval request for {}.",
                non_empty(&intent.token).unwrap_or("a token")
            ));
            parts.push(match &intent.allowance {
                Some(Allowance::Unlimited) => "Approval is unlimited (MAX).".to_string(),
                Some(Allowance::Amount(amount)) => format!("Approval amount: {amount}."),
                None => "Approval amount: unspecified.".to_string(),
            });
            if let Some(spender) = non_empty(&intent.spender) {
                parts.push(format!("Spender: {spender}."));
            }
            if intent.spender_verified == Some(false) {
                parts.push("Spender is not verified.".to_string());
            }
        }
        TxType::Swap => {
            let via = non_empty(&intent.to).unwrap_or("router");
            parts.push(match &intent.slippage {
                Some(slippage) => format!("Swap via {via} with {slippage}% slippage."),
                None => format!("Swap via {via} with unspecified slippage."),
            });
        }
        TxType::Transfer => {
            parts.push(format!(
                "Transfer of {} to {} worth ~${}.",
                non_empty(&intent.token).unwrap_or("asset"),
                non_empty(&intent.to).unwrap_or("recipient"),
                format_grouped(intent.value_usd.unwrap_or(0.0))
            ));
        }
        TxType::Sign => {
            parts.push(format!(
                "Signature request ({}) from domain {}.",
                non_empty(&intent.message_type).unwrap_or("message"),
                non_empty(&intent.domain).unwrap_or("unknown")
            ));
        }
        TxType::Other(_) => {
            parts.push(format!(
                "Interaction with {} on {}.",
                non_empty(&intent.to).unwrap_or("contract"),
                non_empty(&intent.chain).unwrap_or("chain")
            ));
        }
    }

    parts.join(" ")
}
