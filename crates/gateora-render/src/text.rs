use crate::RenderableReport;

/// Plain-text report meant for pasting into chats and tickets.
pub fn render_text(report: &RenderableReport) -> String {
    let mut lines = vec![
        "GateOra Report".to_string(),
        format!("Scenario: {}", report.label.as_deref().unwrap_or("Custom")),
        format!("Verdict: {}", report.verdict.as_str()),
        format!("Risk Score: {}/100", report.score),
        format!("Top signal: {}", report.top_signal),
        String::new(),
        "Top signals:".to_string(),
    ];

    let shown = report.shown_reasons();
    if shown.is_empty() {
        lines.push("- none".to_string());
    }
    for r in shown {
        lines.push(format!("- {}: {}", r.title, r.detail));
    }

    lines.push(String::new());
    lines.push(report.summary.clone());

    if let Some(json) = &report.transaction_json {
        lines.push(String::new());
        lines.push("Transaction JSON:".to_string());
        lines.push(json.clone());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
