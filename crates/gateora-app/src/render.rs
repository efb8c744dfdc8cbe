//! Render use cases: markdown and plain-text reports from in-memory reports.

use gateora_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    gateora_render::render_markdown(report)
}

pub fn render_text(report: &RenderableReport) -> String {
    gateora_render::render_text(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::{build_report, resolve_settings};
    use crate::intent::parse_intent;
    use crate::report::to_renderable;
    use gateora_settings::Overrides;

    fn sample(overrides: Overrides) -> RenderableReport {
        let resolved = resolve_settings("", overrides).expect("settings");
        let intent = parse_intent(
            r#"{"type":"approve","allowance":"MAX_UINT","token":"USDC","contractReputation":"unknown"}"#,
        )
        .expect("intent");
        let report = build_report(&intent, &resolved, None);
        to_renderable(&report, resolved.display)
    }

    #[test]
    fn markdown_lists_signals_for_basic_pack() {
        let md = render_markdown(&sample(Overrides::default()));
        assert!(md.contains("- Verdict: **BLOCK**"));
        assert!(md.contains("- **Unlimited approval**: Allowance is MAX_UINT (unlimited spend)."));
        assert!(md.contains("- **Unknown reputation**"));
    }

    #[test]
    fn degen_pack_hides_signal_details() {
        let md = render_markdown(&sample(Overrides {
            pack: Some("degen".to_string()),
            ..Overrides::default()
        }));
        assert!(md.contains("Signal details hidden"));
        assert!(!md.contains("## Signals"));
    }

    #[test]
    fn text_report_smoke() {
        let text = render_text(&sample(Overrides::default()));
        assert!(text.starts_with("GateOra Report\nScenario: Custom\nVerdict: BLOCK\n"));
        assert!(text.contains("- Policy triggered: Policy blocks unlimited approvals."));
        assert!(text.ends_with(
            "Transaction JSON:\n{\n  \"type\": \"approve\",\n  \"allowance\": \"MAX_UINT\",\n  \"token\": \"USDC\",\n  \"contractReputation\": \"unknown\"\n}\n"
        ));
    }
}
