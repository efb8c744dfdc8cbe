use gateora_types::PolicyData;

/// Caller-controlled toggles, immutable for the duration of one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    /// Escalate unlimited approvals to a score of at least 85.
    pub block_unlimited_approvals: bool,
    /// Escalate unknown-reputation targets to a score of at least 80.
    pub block_unknown_contracts: bool,
    /// Flat +8 bias and tighter verdict thresholds.
    pub strict_mode: bool,
}

impl Policy {
    pub fn strict() -> Self {
        Self {
            block_unlimited_approvals: true,
            block_unknown_contracts: true,
            strict_mode: true,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        if self.strict_mode {
            Thresholds {
                warn_at: 40,
                block_at: 70,
            }
        } else {
            Thresholds {
                warn_at: 50,
                block_at: 80,
            }
        }
    }
}

/// Score cut-offs for WARN and BLOCK.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub warn_at: u32,
    pub block_at: u32,
}

impl From<Policy> for PolicyData {
    fn from(p: Policy) -> Self {
        PolicyData {
            block_unlimited_approvals: p.block_unlimited_approvals,
            block_unknown_contracts: p.block_unknown_contracts,
            strict_mode: p.strict_mode,
        }
    }
}

impl From<PolicyData> for Policy {
    fn from(p: PolicyData) -> Self {
        Policy {
            block_unlimited_approvals: p.block_unlimited_approvals,
            block_unknown_contracts: p.block_unknown_contracts,
            strict_mode: p.strict_mode,
        }
    }
}
