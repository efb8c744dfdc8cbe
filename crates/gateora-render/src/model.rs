#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Allow,
    Warn,
    Block,
}

impl RenderableVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderableVerdict::Allow => "ALLOW",
            RenderableVerdict::Warn => "WARN",
            RenderableVerdict::Block => "BLOCK",
        }
    }

    /// One-line guidance shown next to the verdict.
    pub fn note(self) -> &'static str {
        match self {
            RenderableVerdict::Allow => "Looks safe based on current signals.",
            RenderableVerdict::Warn => "Potential risk detected. Review signals before proceeding.",
            RenderableVerdict::Block => "High risk detected. Transaction should be blocked.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReason {
    pub title: String,
    pub detail: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderablePolicy {
    pub block_unlimited_approvals: bool,
    pub block_unknown_contracts: bool,
    pub strict_mode: bool,
}

/// Display switches. They only affect presentation, never the stored result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableDisplay {
    pub explain_more: bool,
    pub max_reasons: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub label: Option<String>,
    pub pack: String,
    pub policy: RenderablePolicy,
    pub verdict: RenderableVerdict,
    pub score: u32,
    pub top_signal: String,
    pub summary: String,
    pub reasons: Vec<RenderableReason>,
    pub display: RenderableDisplay,
    /// Pretty-printed evaluated intent, when the report carries one.
    pub transaction_json: Option<String>,
}

impl RenderableReport {
    /// Reasons to show after applying the display cap.
    pub fn shown_reasons(&self) -> &[RenderableReason] {
        let n = self.reasons.len().min(self.display.max_reasons);
        &self.reasons[..n]
    }
}
