use crate::RenderableReport;

fn on_off(v: bool) -> &'static str {
    if v { "on" } else { "off" }
}

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# GateOra risk report\n\n");
    if let Some(label) = &report.label {
        out.push_str(&format!("- Scenario: {}\n", label));
    }
    out.push_str(&format!(
        "- Verdict: **{}**\n- Risk score: {}/100\n- Top signal: {}\n",
        report.verdict.as_str(),
        report.score,
        report.top_signal
    ));
    out.push_str(&format!(
        "- Pack: `{}` (unlimited approvals: {}, unknown contracts: {}, strict mode: {})\n\n",
        report.pack,
        on_off(report.policy.block_unlimited_approvals),
        on_off(report.policy.block_unknown_contracts),
        on_off(report.policy.strict_mode)
    ));

    out.push_str(&format!("> {}\n\n", report.verdict.note()));
    out.push_str(&format!("{}\n\n", report.summary));

    if !report.display.explain_more {
        out.push_str("Signal details hidden (explain more is off).\n");
        return out;
    }

    if report.reasons.is_empty() {
        out.push_str("No signals.\n");
        return out;
    }

    out.push_str("## Signals\n\n");
    let shown = report.shown_reasons();
    for r in shown {
        out.push_str(&format!("- **{}**: {}\n", r.title, r.detail));
    }

    if shown.len() < report.reasons.len() {
        out.push_str(&format!(
            "\n> Note: showing {} of {} signals.\n",
            shown.len(),
            report.reasons.len()
        ));
    }

    out
}
