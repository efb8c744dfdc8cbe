use crate::model::TransactionIntent;
use crate::policy::Policy;
use crate::signals;
use crate::summary::compose_summary;
use crate::verdict::{clamp_score, compose_verdict};
use gateora_types::EvaluationResult;

/// Evaluate `intent` under `policy`. Pure and total: the same inputs always yield the same
/// result, and no input makes it fail.
pub fn evaluate(intent: &TransactionIntent, policy: &Policy) -> EvaluationResult {
    let assessment = signals::run_all(intent, policy);

    let score = clamp_score(assessment.raw_score);
    let verdict = compose_verdict(score, policy);
    let summary = compose_summary(intent, verdict, score);

    EvaluationResult {
        score,
        verdict,
        reasons: assessment.reasons,
        top_signal: assessment.top_signal,
        summary,
    }
}
