//! Stable identifiers for signals, the reason titles they emit, and top-signal labels.
//!
//! Signal IDs are dotted namespaces. Titles and labels are user-facing strings that appear in
//! `reasons[].title` and `topSignal`; they are part of the output contract and must not drift.

// Signals
pub const SIGNAL_APPROVAL_UNLIMITED: &str = "approval.unlimited";
pub const SIGNAL_APPROVAL_LIMITED: &str = "approval.limited";
pub const SIGNAL_APPROVAL_UNVERIFIED_SPENDER: &str = "approval.unverified_spender";
pub const SIGNAL_CONTRACT_UNKNOWN_REPUTATION: &str = "contract.unknown_reputation";
pub const SIGNAL_CONTRACT_NEW: &str = "contract.new";
pub const SIGNAL_VALUE_HIGH: &str = "value.high";
pub const SIGNAL_SIGNATURE_REQUEST: &str = "signature.request";
pub const SIGNAL_SIGNATURE_LOOKALIKE_DOMAIN: &str = "signature.lookalike_domain";
pub const SIGNAL_SIGNATURE_KNOWN_DRAINER: &str = "signature.known_drainer";
pub const SIGNAL_ADMIN_UPGRADEABLE: &str = "admin.upgradeable";
pub const SIGNAL_ADMIN_WITHDRAW: &str = "admin.withdraw";
pub const SIGNAL_ADMIN_PAUSE: &str = "admin.pause";
pub const SIGNAL_GAS_ANOMALY: &str = "gas.anomaly";
pub const SIGNAL_POLICY_BLOCK_UNLIMITED: &str = "policy.block_unlimited_approvals";
pub const SIGNAL_POLICY_BLOCK_UNKNOWN: &str = "policy.block_unknown_contracts";
pub const SIGNAL_POLICY_STRICT_MODE: &str = "policy.strict_mode";

// Reason titles
pub const TITLE_UNLIMITED_APPROVAL: &str = "Unlimited approval";
pub const TITLE_LIMITED_APPROVAL: &str = "Limited approval";
pub const TITLE_UNVERIFIED_SPENDER: &str = "Unverified spender";
pub const TITLE_UNKNOWN_REPUTATION: &str = "Unknown reputation";
pub const TITLE_VERY_NEW_CONTRACT: &str = "Very new contract";
pub const TITLE_HIGH_VALUE: &str = "High value";
pub const TITLE_SIGNATURE_REQUEST: &str = "Signature request";
pub const TITLE_LOOKALIKE_DOMAIN: &str = "Lookalike domain";
pub const TITLE_KNOWN_DRAINER: &str = "Known drainer pattern";
pub const TITLE_UPGRADEABLE: &str = "Upgradeable contract";
pub const TITLE_ADMIN_WITHDRAW: &str = "Admin withdraw privileges";
pub const TITLE_ADMIN_PAUSE: &str = "Admin pause privileges";
pub const TITLE_GAS_ANOMALY: &str = "Gas anomaly";
pub const TITLE_POLICY_TRIGGERED: &str = "Policy triggered";
pub const TITLE_STRICT_MODE: &str = "Strict mode";

// Top-signal labels
pub const TOP_NONE: &str = "No critical signals";
pub const TOP_UNLIMITED_APPROVAL: &str = "Unlimited approval";
pub const TOP_UNVERIFIED_SPENDER: &str = "Unverified spender";
pub const TOP_UNKNOWN_CONTRACT_BLOCKED: &str = "Unknown contract blocked";
pub const TOP_VERY_NEW_CONTRACT: &str = "Very new contract";
pub const TOP_HIGH_VALUE_TRANSFER: &str = "High value transfer";
pub const TOP_SIGNATURE_REQUEST: &str = "Signature request";
pub const TOP_LOOKALIKE_DOMAIN: &str = "Lookalike domain";
pub const TOP_KNOWN_DRAINER: &str = "Known drainer pattern";
pub const TOP_UPGRADEABLE_RISK: &str = "Upgradeable risk";
pub const TOP_ADMIN_WITHDRAW: &str = "Admin withdraw privileges";
pub const TOP_GAS_ANOMALY: &str = "Gas anomaly";

/// Allowance marker used by wallets for "spend anything" approvals.
pub const ALLOWANCE_MAX_UINT: &str = "MAX_UINT";
/// Alternate spelling of the unlimited marker accepted on input.
pub const ALLOWANCE_UNLIMITED: &str = "UNLIMITED";

/// Map a reason title or top-signal label back to the signal that produces it.
///
/// `"Policy triggered"` is shared by two policy signals and is not mapped here.
pub fn signal_for_label(label: &str) -> Option<&'static str> {
    let id = match label {
        TITLE_UNLIMITED_APPROVAL => SIGNAL_APPROVAL_UNLIMITED,
        TITLE_LIMITED_APPROVAL => SIGNAL_APPROVAL_LIMITED,
        TITLE_UNVERIFIED_SPENDER => SIGNAL_APPROVAL_UNVERIFIED_SPENDER,
        TITLE_UNKNOWN_REPUTATION => SIGNAL_CONTRACT_UNKNOWN_REPUTATION,
        TOP_UNKNOWN_CONTRACT_BLOCKED => SIGNAL_POLICY_BLOCK_UNKNOWN,
        TITLE_VERY_NEW_CONTRACT => SIGNAL_CONTRACT_NEW,
        TITLE_HIGH_VALUE | TOP_HIGH_VALUE_TRANSFER => SIGNAL_VALUE_HIGH,
        TITLE_SIGNATURE_REQUEST => SIGNAL_SIGNATURE_REQUEST,
        TITLE_LOOKALIKE_DOMAIN => SIGNAL_SIGNATURE_LOOKALIKE_DOMAIN,
        TITLE_KNOWN_DRAINER => SIGNAL_SIGNATURE_KNOWN_DRAINER,
        TITLE_UPGRADEABLE | TOP_UPGRADEABLE_RISK => SIGNAL_ADMIN_UPGRADEABLE,
        TITLE_ADMIN_WITHDRAW => SIGNAL_ADMIN_WITHDRAW,
        TITLE_ADMIN_PAUSE => SIGNAL_ADMIN_PAUSE,
        TITLE_GAS_ANOMALY => SIGNAL_GAS_ANOMALY,
        TITLE_STRICT_MODE => SIGNAL_POLICY_STRICT_MODE,
        _ => return None,
    };
    Some(id)
}
