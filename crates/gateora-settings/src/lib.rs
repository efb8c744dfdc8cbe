//! Config parsing and policy-pack resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{DisplayConfig, GateoraConfigV1, PolicyConfig};
pub use presets::{preset, PACK_NAMES};
pub use resolve::{DisplaySettings, Overrides, ResolvedConfig, DEFAULT_MAX_REASONS};

/// Parse `gateora.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GateoraConfigV1> {
    let cfg: GateoraConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy and display options (pack preset, then config, then overrides).
pub fn resolve_config(
    cfg: GateoraConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
