use crate::model::TransactionIntent;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a parsed intent.
///
/// The canonical form is the compact JSON serialization of the parsed intent, so fields that
/// were dropped as malformed and key order in the original text do not affect the result.
pub fn fingerprint_intent(intent: &TransactionIntent) -> String {
    let canonical = serde_json::to_vec(intent).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    let digest = hasher.finalize();
    hex::encode(digest)
}
