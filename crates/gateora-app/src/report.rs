use anyhow::Context;
use gateora_render::{
    RenderableDisplay, RenderablePolicy, RenderableReason, RenderableReport, RenderableVerdict,
};
use gateora_settings::{DisplaySettings, Overrides};
use gateora_types::{GateoraReport, Verdict, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<GateoraReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    let report: GateoraReport =
        serde_json::from_value(value).context("parse gateora v1 report")?;
    Ok(report)
}

pub fn serialize_report(report: &GateoraReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Display settings for re-rendering a stored report: the pack recorded in the report, then
/// command-line overrides. The current config file does not apply.
pub fn display_for_report(report: &GateoraReport, overrides: &Overrides) -> DisplaySettings {
    let pack = overrides.pack.as_deref().unwrap_or(&report.data.pack);
    let mut display = gateora_settings::preset(pack).display;
    if let Some(explain_more) = overrides.explain_more {
        display.explain_more = explain_more;
    }
    display
}

pub fn to_renderable(report: &GateoraReport, display: DisplaySettings) -> RenderableReport {
    let policy = report.data.policy;
    RenderableReport {
        label: report.label.clone(),
        pack: report.data.pack.clone(),
        policy: RenderablePolicy {
            block_unlimited_approvals: policy.block_unlimited_approvals,
            block_unknown_contracts: policy.block_unknown_contracts,
            strict_mode: policy.strict_mode,
        },
        verdict: match report.result.verdict {
            Verdict::Allow => RenderableVerdict::Allow,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Block => RenderableVerdict::Block,
        },
        score: report.result.score,
        top_signal: report.result.top_signal.clone(),
        summary: report.result.summary.clone(),
        reasons: report
            .result
            .reasons
            .iter()
            .map(|r| RenderableReason {
                title: r.title.clone(),
                detail: r.detail.clone(),
            })
            .collect(),
        display: RenderableDisplay {
            explain_more: display.explain_more,
            max_reasons: display.max_reasons,
        },
        transaction_json: (!report.data.intent.is_null())
            .then(|| serde_json::to_string_pretty(&report.data.intent).ok())
            .flatten(),
    }
}
