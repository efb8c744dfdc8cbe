//! Use case orchestration for gateora.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It stays thin and delegates the heavy lifting.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod evaluate;
mod explain;
mod intent;
mod render;
mod report;

pub use catalog::{parse_catalog, CatalogError, Scenario, ScenarioCatalog};
pub use evaluate::{
    build_report, format_scenario_line, resolve_settings, run_evaluate, run_scenarios,
    verdict_exit_code, EvaluateInput, EvaluateOutput, ScenarioOutcome, ScenariosInput,
};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use intent::{parse_intent, IntentError};
pub use render::{render_markdown, render_text};
pub use report::{display_for_report, parse_report_json, serialize_report, to_renderable};
