//! The `explain` use case: look up signal documentation.

use gateora_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available signal ids and reason titles.
    NotFound {
        identifier: String,
        available_signal_ids: &'static [&'static str],
        available_titles: &'static [&'static str],
    },
}

/// Look up an explanation for a signal id, reason title, or top-signal label.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_signal_ids: explain::all_signal_ids(),
            available_titles: explain::all_reason_titles(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("What to check\n");
    out.push_str("-------------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Fires:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("Does not fire:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" message for terminal display.
pub fn format_not_found(identifier: &str, signal_ids: &[&str], titles: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown signal id or title: {}\n\n", identifier));
    out.push_str("Available signal ids:\n");
    for id in signal_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable reason titles:\n");
    for title in titles {
        out.push_str(&format!("  - {}\n", title));
    }

    out
}
