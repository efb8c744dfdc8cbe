use crate::resolve::{DisplaySettings, ResolvedConfig, DEFAULT_MAX_REASONS};
use gateora_domain::policy::Policy;

pub const PACK_NAMES: &[&str] = &["basic", "strict", "degen"];

/// Named policy packs. Unknown names fall back to `basic`.
pub fn preset(pack: &str) -> ResolvedConfig {
    match pack {
        "strict" => strict_pack(),
        "degen" => degen_pack(),
        _ => basic_pack(),
    }
}

fn basic_pack() -> ResolvedConfig {
    ResolvedConfig {
        pack: "basic".to_string(),
        policy: Policy {
            block_unlimited_approvals: true,
            block_unknown_contracts: false,
            strict_mode: false,
        },
        display: DisplaySettings {
            explain_more: true,
            max_reasons: DEFAULT_MAX_REASONS,
        },
    }
}

fn strict_pack() -> ResolvedConfig {
    ResolvedConfig {
        pack: "strict".to_string(),
        policy: Policy::strict(),
        display: DisplaySettings {
            explain_more: true,
            max_reasons: DEFAULT_MAX_REASONS,
        },
    }
}

// Nothing escalates and the reason list stays collapsed.
fn degen_pack() -> ResolvedConfig {
    ResolvedConfig {
        pack: "degen".to_string(),
        policy: Policy::default(),
        display: DisplaySettings {
            explain_more: false,
            max_reasons: DEFAULT_MAX_REASONS,
        },
    }
}
