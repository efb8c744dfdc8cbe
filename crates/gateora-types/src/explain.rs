//! Explain registry for signals.
//!
//! Maps signal IDs, reason titles, and top-signal labels to human-readable explanations with
//! guidance on what to check before proceeding.

use crate::ids;

/// Explanation entry for a signal.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the signal.
    pub title: &'static str,
    /// What the signal detects and why it raises risk.
    pub description: &'static str,
    /// What the user should verify or change.
    pub remediation: &'static str,
    /// Intent fragments that do and do not fire the signal.
    pub examples: ExamplePair,
}

/// Before and after intent examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Intent that fires the signal.
    pub before: &'static str,
    /// Intent that does not.
    pub after: &'static str,
}

/// Look up an explanation by signal ID, reason title, or top-signal label.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    if identifier == ids::TITLE_POLICY_TRIGGERED {
        return Some(explain_policy_triggered());
    }
    let signal = ids::signal_for_label(identifier).unwrap_or(identifier);

    match signal {
        ids::SIGNAL_APPROVAL_UNLIMITED => Some(explain_unlimited_approval()),
        ids::SIGNAL_APPROVAL_LIMITED => Some(explain_limited_approval()),
        ids::SIGNAL_APPROVAL_UNVERIFIED_SPENDER => Some(explain_unverified_spender()),
        ids::SIGNAL_CONTRACT_UNKNOWN_REPUTATION => Some(explain_unknown_reputation()),
        ids::SIGNAL_CONTRACT_NEW => Some(explain_new_contract()),
        ids::SIGNAL_VALUE_HIGH => Some(explain_high_value()),
        ids::SIGNAL_SIGNATURE_REQUEST => Some(explain_signature_request()),
        ids::SIGNAL_SIGNATURE_LOOKALIKE_DOMAIN => Some(explain_lookalike_domain()),
        ids::SIGNAL_SIGNATURE_KNOWN_DRAINER => Some(explain_known_drainer()),
        ids::SIGNAL_ADMIN_UPGRADEABLE => Some(explain_upgradeable()),
        ids::SIGNAL_ADMIN_WITHDRAW => Some(explain_admin_withdraw()),
        ids::SIGNAL_ADMIN_PAUSE => Some(explain_admin_pause()),
        ids::SIGNAL_GAS_ANOMALY => Some(explain_gas_anomaly()),
        ids::SIGNAL_POLICY_BLOCK_UNLIMITED => Some(explain_policy_block_unlimited()),
        ids::SIGNAL_POLICY_BLOCK_UNKNOWN => Some(explain_policy_block_unknown()),
        ids::SIGNAL_POLICY_STRICT_MODE => Some(explain_strict_mode()),
        _ => None,
    }
}

/// List all known signal IDs, in evaluation order.
pub fn all_signal_ids() -> &'static [&'static str] {
    &[
        ids::SIGNAL_APPROVAL_UNLIMITED,
        ids::SIGNAL_POLICY_BLOCK_UNLIMITED,
        ids::SIGNAL_APPROVAL_LIMITED,
        ids::SIGNAL_APPROVAL_UNVERIFIED_SPENDER,
        ids::SIGNAL_CONTRACT_UNKNOWN_REPUTATION,
        ids::SIGNAL_POLICY_BLOCK_UNKNOWN,
        ids::SIGNAL_CONTRACT_NEW,
        ids::SIGNAL_VALUE_HIGH,
        ids::SIGNAL_SIGNATURE_REQUEST,
        ids::SIGNAL_SIGNATURE_LOOKALIKE_DOMAIN,
        ids::SIGNAL_SIGNATURE_KNOWN_DRAINER,
        ids::SIGNAL_ADMIN_UPGRADEABLE,
        ids::SIGNAL_ADMIN_WITHDRAW,
        ids::SIGNAL_ADMIN_PAUSE,
        ids::SIGNAL_GAS_ANOMALY,
        ids::SIGNAL_POLICY_STRICT_MODE,
    ]
}

/// List all reason titles a rule can emit.
pub fn all_reason_titles() -> &'static [&'static str] {
    &[
        ids::TITLE_UNLIMITED_APPROVAL,
        ids::TITLE_POLICY_TRIGGERED,
        ids::TITLE_LIMITED_APPROVAL,
        ids::TITLE_UNVERIFIED_SPENDER,
        ids::TITLE_UNKNOWN_REPUTATION,
        ids::TITLE_VERY_NEW_CONTRACT,
        ids::TITLE_HIGH_VALUE,
        ids::TITLE_SIGNATURE_REQUEST,
        ids::TITLE_LOOKALIKE_DOMAIN,
        ids::TITLE_KNOWN_DRAINER,
        ids::TITLE_UPGRADEABLE,
        ids::TITLE_ADMIN_WITHDRAW,
        ids::TITLE_ADMIN_PAUSE,
        ids::TITLE_GAS_ANOMALY,
        ids::TITLE_STRICT_MODE,
    ]
}

// --- Approval signals ---

fn explain_unlimited_approval() -> Explanation {
    Explanation {
        title: "Unlimited Approval",
        description: "\
Fires when an `approve` request sets the allowance to the MAX_UINT marker.

An unlimited allowance lets the spender move every unit of the token the wallet holds, now
and in the future, without asking again:
- A compromised or malicious spender can drain the full balance
- The approval outlives the transaction that needed it
- Revoking requires a separate on-chain transaction",
        remediation: "\
Approve only the amount the current action needs. If the dApp insists on an unlimited
allowance, revoke it once the interaction is complete.",
        examples: ExamplePair {
            before: r#"{ "type": "approve", "token": "USDC", "allowance": "MAX_UINT" }"#,
            after: r#"{ "type": "approve", "token": "USDC", "allowance": "250" }"#,
        },
    }
}

fn explain_limited_approval() -> Explanation {
    Explanation {
        title: "Limited Approval",
        description: "\
Fires for every `approve` request whose allowance is not the unlimited marker.

A bounded allowance still grants spending rights, so it carries a small baseline risk.",
        remediation: "\
Confirm the amount matches what the action needs and that the spender is the contract you
expect.",
        examples: ExamplePair {
            before: r#"{ "type": "approve", "allowance": "250" }"#,
            after: r#"{ "type": "transfer", "token": "USDC", "valueUSD": 250 }"#,
        },
    }
}

fn explain_unverified_spender() -> Explanation {
    Explanation {
        title: "Unverified Spender",
        description: "\
Fires when an `approve` request names a spender explicitly marked as not verified
(`spenderVerified: false`). An absent flag does not fire.

Unverified spenders have no published source or audit trail linking them to the dApp you
think you are using.",
        remediation: "\
Check the spender address against the project's official documentation before approving.",
        examples: ExamplePair {
            before: r#"{ "type": "approve", "spender": "0xabc...", "spenderVerified": false }"#,
            after: r#"{ "type": "approve", "spender": "0xabc...", "spenderVerified": true }"#,
        },
    }
}

// --- Contract signals ---

fn explain_unknown_reputation() -> Explanation {
    Explanation {
        title: "Unknown Reputation",
        description: "\
Fires when the target contract has no trusted reputation signals
(`contractReputation: \"unknown\"`).",
        remediation: "\
Look the contract up on a block explorer and confirm it belongs to the project. Enable
`block_unknown_contracts` to escalate these automatically.",
        examples: ExamplePair {
            before: r#"{ "type": "other", "contractReputation": "unknown" }"#,
            after: r#"{ "type": "other", "contractReputation": "trusted" }"#,
        },
    }
}

fn explain_new_contract() -> Explanation {
    Explanation {
        title: "Very New Contract",
        description: "\
Fires when the target contract was deployed less than 7 days ago.

Freshly deployed contracts have had little time for review and are a common vehicle for
short-lived scams.",
        remediation: "\
Wait for the contract to build history, or verify the deployment through official channels.",
        examples: ExamplePair {
            before: r#"{ "type": "other", "contractAgeDays": 2 }"#,
            after: r#"{ "type": "other", "contractAgeDays": 400 }"#,
        },
    }
}

// --- Value signals ---

fn explain_high_value() -> Explanation {
    Explanation {
        title: "High Value",
        description: "\
Fires when the estimated value moved is at least $5,000.

Large transfers make any other weakness in the request more expensive.",
        remediation: "\
Double-check the recipient and consider splitting the transfer or sending a small test amount
first.",
        examples: ExamplePair {
            before: r#"{ "type": "transfer", "valueUSD": 12500 }"#,
            after: r#"{ "type": "transfer", "valueUSD": 120 }"#,
        },
    }
}

// --- Signature signals ---

fn explain_signature_request() -> Explanation {
    Explanation {
        title: "Signature Request",
        description: "\
Fires for every off-chain signature request (`type: \"sign\"`).

Signed messages such as permits or orders can authorize asset movement without an on-chain
transaction the wallet would otherwise show.",
        remediation: "\
Read the message type and origin domain. Never sign messages you cannot decode.",
        examples: ExamplePair {
            before: r#"{ "type": "sign", "messageType": "Permit2", "domain": "app.example" }"#,
            after: r#"{ "type": "transfer", "token": "ETH", "valueUSD": 40 }"#,
        },
    }
}

fn explain_lookalike_domain() -> Explanation {
    Explanation {
        title: "Lookalike Domain",
        description: "\
Fires when the requesting domain appears to mimic a known brand.",
        remediation: "\
Close the page and navigate to the project from a bookmark or its official links.",
        examples: ExamplePair {
            before: r#"{ "type": "sign", "domain": "uniswaap.org", "domainLookalike": true }"#,
            after: r#"{ "type": "sign", "domain": "app.uniswap.org" }"#,
        },
    }
}

fn explain_known_drainer() -> Explanation {
    Explanation {
        title: "Known Drainer Pattern",
        description: "\
Fires when the message matches a known wallet-draining signature pattern.",
        remediation: "\
Do not sign. Report the site and revoke any approvals granted to it.",
        examples: ExamplePair {
            before: r#"{ "type": "sign", "knownDrainerPattern": true }"#,
            after: r#"{ "type": "sign", "knownDrainerPattern": false }"#,
        },
    }
}

// --- Admin signals ---

fn explain_upgradeable() -> Explanation {
    Explanation {
        title: "Upgradeable Contract",
        description: "\
Fires when the target contract is upgradeable. Its code can change after you interact with
it, so today's review may not hold tomorrow.",
        remediation: "\
Check who controls upgrades (multisig, timelock) and whether upgrades are announced ahead of
time.",
        examples: ExamplePair {
            before: r#"{ "type": "other", "upgradeable": true }"#,
            after: r#"{ "type": "other", "upgradeable": false }"#,
        },
    }
}

fn explain_admin_withdraw() -> Explanation {
    Explanation {
        title: "Admin Withdraw Privileges",
        description: "\
Fires when a privileged admin can withdraw funds or move assets held by the contract.",
        remediation: "\
Only deposit what you are prepared to trust the admin key holders with.",
        examples: ExamplePair {
            before: r#"{ "type": "other", "adminCanWithdraw": true }"#,
            after: r#"{ "type": "other" }"#,
        },
    }
}

fn explain_admin_pause() -> Explanation {
    Explanation {
        title: "Admin Pause Privileges",
        description: "\
Fires when an admin can pause protocol activity, which may lock funds temporarily.",
        remediation: "\
Check the protocol's pause policy and how long a pause can last.",
        examples: ExamplePair {
            before: r#"{ "type": "other", "adminCanPause": true }"#,
            after: r#"{ "type": "other" }"#,
        },
    }
}

// --- Gas signals ---

fn explain_gas_anomaly() -> Explanation {
    Explanation {
        title: "Gas Anomaly",
        description: "\
Fires when the request carries an unusual fee or gas pattern, which can indicate hidden
calls or a transaction built to fail expensively.",
        remediation: "\
Simulate the transaction and compare the fee with similar interactions.",
        examples: ExamplePair {
            before: r#"{ "type": "swap", "gasAnomaly": true }"#,
            after: r#"{ "type": "swap", "gasAnomaly": false }"#,
        },
    }
}

// --- Policy signals ---

fn explain_policy_block_unlimited() -> Explanation {
    Explanation {
        title: "Policy: Block Unlimited Approvals",
        description: "\
Raises the score to at least 85 when an unlimited approval is requested and
`block_unlimited_approvals` is enabled.",
        remediation: "\
Request a bounded allowance, or disable the policy for this evaluation if the risk is
understood.",
        examples: ExamplePair {
            before: r#"{ "type": "approve", "allowance": "MAX_UINT" }"#,
            after: r#"{ "type": "approve", "allowance": "100" }"#,
        },
    }
}

fn explain_policy_block_unknown() -> Explanation {
    Explanation {
        title: "Policy: Block Unknown Contracts",
        description: "\
Raises the score to at least 80 and reports \"Unknown contract blocked\" as the top signal when
the target has unknown reputation and `block_unknown_contracts` is enabled.",
        remediation: "\
Interact only with contracts that have established reputation signals.",
        examples: ExamplePair {
            before: r#"{ "type": "other", "contractReputation": "unknown" }"#,
            after: r#"{ "type": "other", "contractReputation": "trusted" }"#,
        },
    }
}

fn explain_strict_mode() -> Explanation {
    Explanation {
        title: "Strict Mode",
        description: "\
Adds a flat +8 to every score and lowers the verdict thresholds (WARN at 40 instead of 50,
BLOCK at 70 instead of 80).",
        remediation: "\
Strict mode is a policy choice, not a property of the transaction. Disable it with
`strict_mode = false` for a less conservative assessment.",
        examples: ExamplePair {
            before: r#"{ "type": "swap", "slippage": 0.5 }"#,
            after: r#"{ "type": "swap", "slippage": 0.5 }"#,
        },
    }
}

fn explain_policy_triggered() -> Explanation {
    Explanation {
        title: "Policy Triggered",
        description: "\
Recorded when a policy toggle escalates the score to a floor. The reason detail names the
policy: unlimited approvals (floor 85) or unknown contracts (floor 80).",
        remediation: "\
See `policy.block_unlimited_approvals` or `policy.block_unknown_contracts` for details.",
        examples: ExamplePair {
            before: r#"{ "type": "approve", "allowance": "MAX_UINT" }"#,
            after: r#"{ "type": "approve", "allowance": "100" }"#,
        },
    }
}
