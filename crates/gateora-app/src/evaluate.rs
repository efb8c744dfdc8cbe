//! The `evaluate` and `scenarios` use cases: resolve settings, evaluate intents, build reports.

use crate::catalog::parse_catalog;
use crate::intent::parse_intent;
use anyhow::Context;
use gateora_domain::fingerprint::fingerprint_intent;
use gateora_domain::model::TransactionIntent;
use gateora_settings::{GateoraConfigV1, Overrides, ResolvedConfig};
use gateora_types::{GateoraData, GateoraReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    /// Intent JSON text.
    pub intent_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Optional caller-supplied name for the intent.
    pub label: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EvaluateOutput {
    pub report: GateoraReport,
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text. Empty text means "pack defaults".
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        GateoraConfigV1::default()
    } else {
        gateora_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = gateora_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(
        pack = %resolved.pack,
        block_unlimited_approvals = resolved.policy.block_unlimited_approvals,
        block_unknown_contracts = resolved.policy.block_unknown_contracts,
        strict_mode = resolved.policy.strict_mode,
        "resolved policy"
    );
    Ok(resolved)
}

/// Evaluate one intent under the resolved policy and wrap the result in a report envelope.
pub fn build_report(
    intent: &TransactionIntent,
    resolved: &ResolvedConfig,
    label: Option<String>,
) -> GateoraReport {
    let started_at = OffsetDateTime::now_utc();
    let result = gateora_domain::evaluate(intent, &resolved.policy);
    let finished_at = OffsetDateTime::now_utc();

    tracing::debug!(
        kind = intent.kind.as_str(),
        score = result.score,
        verdict = %result.verdict,
        reasons = result.reasons.len(),
        top_signal = %result.top_signal,
        "evaluated intent"
    );

    GateoraReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "gateora".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        label,
        data: GateoraData {
            pack: resolved.pack.clone(),
            policy: resolved.policy.into(),
            intent_fingerprint: fingerprint_intent(intent),
            intent: serde_json::to_value(intent).unwrap_or_default(),
        },
        result,
    }
}

/// Run the evaluate use case: parse config and intent, evaluate, produce a report.
pub fn run_evaluate(input: EvaluateInput<'_>) -> anyhow::Result<EvaluateOutput> {
    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let intent = parse_intent(input.intent_text)?;
    let report = build_report(&intent, &resolved, input.label);

    Ok(EvaluateOutput {
        report,
        resolved_config: resolved,
    })
}

#[derive(Clone, Debug)]
pub struct ScenariosInput<'a> {
    pub catalog_text: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
    /// Evaluate only this scenario (unknown ids select the first one).
    pub id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ScenarioOutcome {
    pub id: String,
    pub report: GateoraReport,
}

/// Evaluate every selected scenario of a catalog, in catalog order.
pub fn run_scenarios(input: ScenariosInput<'_>) -> anyhow::Result<Vec<ScenarioOutcome>> {
    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let catalog = parse_catalog(input.catalog_text)?;

    let selected = catalog.select(input.id.as_deref())?;
    if let Some(id) = input.id.as_deref()
        && selected.first().is_some_and(|s| s.id != id)
    {
        tracing::warn!(requested = id, "unknown scenario id; using the first scenario");
    }

    selected
        .into_iter()
        .map(|scenario| -> anyhow::Result<ScenarioOutcome> {
            let intent = scenario.intent()?;
            Ok(ScenarioOutcome {
                id: scenario.id.clone(),
                report: build_report(&intent, &resolved, Some(scenario.name.clone())),
            })
        })
        .collect()
}

/// One tab-separated line per scenario: id, verdict, score, top signal.
pub fn format_scenario_line(outcome: &ScenarioOutcome) -> String {
    let r = &outcome.report.result;
    format!("{}\t{}\t{}\t{}", outcome.id, r.verdict, r.score, r.top_signal)
}

/// Process exit code for a verdict: BLOCK fails the run, ALLOW and WARN pass.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Allow | Verdict::Warn => 0,
        Verdict::Block => 2,
    }
}
