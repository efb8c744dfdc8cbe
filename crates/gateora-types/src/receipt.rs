use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for gateora reports.
pub const SCHEMA_REPORT_V1: &str = "gateora.report.v1";

/// Coarse outcome of an evaluation. Ordered from least to most severe.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Allow,
    Warn,
    Block,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Allow => "ALLOW",
            Verdict::Warn => "WARN",
            Verdict::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the reason trail: which rule fired and what it saw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reason {
    pub title: String,
    pub detail: String,
}

impl Reason {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Output of a single evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Risk score in `0..=100`.
    pub score: u32,
    pub verdict: Verdict,
    /// Every rule that fired, in evaluation order.
    pub reasons: Vec<Reason>,
    /// Headline label, or `"No critical signals"`.
    pub top_signal: String,
    pub summary: String,
}

/// Policy toggles as recorded in a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyData {
    pub block_unlimited_approvals: bool,
    pub block_unknown_contracts: bool,
    pub strict_mode: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Gateora-specific run payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GateoraData {
    /// Policy pack the effective policy was resolved from.
    pub pack: String,
    pub policy: PolicyData,
    /// Hex SHA-256 of the canonical intent JSON.
    pub intent_fingerprint: String,
    /// The evaluated intent in canonical form (the JSON the fingerprint covers).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub intent: serde_json::Value,
}

/// A generic receipt/envelope.
///
/// Keeping this generic allows run-specific data to vary while the outer shape stays stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = GateoraData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Caller-supplied name for the evaluated intent (scenario name, file name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: TData,
    pub result: EvaluationResult,
}

pub type GateoraReport = ReportEnvelope<GateoraData>;
