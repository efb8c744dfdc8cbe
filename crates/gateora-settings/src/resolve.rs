use crate::{model::GateoraConfigV1, presets};
use gateora_domain::policy::Policy;

pub const DEFAULT_MAX_REASONS: usize = 8;

/// Command-line overrides. `None` means "not given".
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub pack: Option<String>,
    pub block_unlimited_approvals: Option<bool>,
    pub block_unknown_contracts: Option<bool>,
    pub strict_mode: Option<bool>,
    pub explain_more: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    pub explain_more: bool,
    pub max_reasons: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Canonical pack name (an unknown request resolves to `basic`).
    pub pack: String,
    pub policy: Policy,
    pub display: DisplaySettings,
}

pub fn resolve_config(
    cfg: GateoraConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let pack = overrides
        .pack
        .clone()
        .or(cfg.pack.clone())
        .unwrap_or_else(|| "basic".to_string());

    let mut resolved = presets::preset(&pack);

    let policy = &mut resolved.policy;
    if let Some(v) = overrides
        .block_unlimited_approvals
        .or(cfg.policy.block_unlimited_approvals)
    {
        policy.block_unlimited_approvals = v;
    }
    if let Some(v) = overrides
        .block_unknown_contracts
        .or(cfg.policy.block_unknown_contracts)
    {
        policy.block_unknown_contracts = v;
    }
    if let Some(v) = overrides.strict_mode.or(cfg.policy.strict_mode) {
        policy.strict_mode = v;
    }

    if let Some(v) = overrides.explain_more.or(cfg.display.explain_more) {
        resolved.display.explain_more = v;
    }
    if let Some(max) = cfg.display.max_reasons {
        if max == 0 {
            anyhow::bail!("invalid display.max_reasons: 0 (expected at least 1)");
        }
        resolved.display.max_reasons = max as usize;
    }

    Ok(resolved)
}
