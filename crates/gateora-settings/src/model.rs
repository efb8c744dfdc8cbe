use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `gateora.toml` schema v1.
///
/// User-facing and permissive: every key is optional and unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GateoraConfigV1 {
    /// Optional schema string for tooling (`gateora.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Policy pack: `basic`, `strict` or `degen`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack: Option<String>,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Per-toggle overrides of the pack's policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_unlimited_approvals: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_unknown_contracts: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Show the reason list in rendered reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain_more: Option<bool>,

    /// How many reasons to render before truncating the list. Must be at least 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reasons: Option<u32>,
}
