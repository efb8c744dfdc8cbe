//! Fuzz target for `gateora.toml` parsing and resolution.
//!
//! Goal: config handling should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = gateora_settings::parse_config_toml(text)
    {
        let _ = gateora_settings::resolve_config(cfg, Default::default());
    }
});
