//! CLI entry point for gateora.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `gateora-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use gateora_app::{
    display_for_report, format_scenario_line, parse_report_json, render_markdown, render_text,
    run_evaluate, run_explain, run_scenarios, serialize_report, to_renderable, verdict_exit_code,
    EvaluateInput, ExplainOutput, ScenariosInput,
};
use gateora_settings::Overrides;
use gateora_types::GateoraReport;
use std::io::Read;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_TARGETS: &[&str] = &["gateora_cli", "gateora_app"];

#[derive(Parser, Debug)]
#[command(
    name = "gateora",
    version,
    about = "Advisory risk guardrail for wallet transactions and signature requests"
)]
struct Cli {
    /// Path to gateora config TOML (missing file means pack defaults).
    #[arg(long, default_value = "gateora.toml")]
    config: Utf8PathBuf,

    /// Override policy pack (basic|strict|degen).
    #[arg(long)]
    pack: Option<String>,

    /// Escalate unlimited approvals to at least 85.
    #[arg(long)]
    block_unlimited_approvals: Option<bool>,

    /// Escalate unknown-reputation targets to at least 80.
    #[arg(long)]
    block_unknown_contracts: Option<bool>,

    /// Add a flat +8 and tighten verdict thresholds to 40/70.
    #[arg(long)]
    strict_mode: Option<bool>,

    /// Show the reason list in rendered reports.
    #[arg(long)]
    explain_more: Option<bool>,

    /// Debug logging for gateora crates (otherwise RUST_LOG applies).
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one transaction intent and write the JSON report.
    Evaluate {
        /// Intent JSON file, or `-` for stdin.
        #[arg(long)]
        intent: Utf8PathBuf,

        /// Name recorded in the report (scenario name, file name).
        #[arg(long)]
        label: Option<String>,

        /// Where to write the JSON report (stdout if not specified).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/gateora/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Evaluate scenarios from a catalog and print one line per scenario.
    Scenarios {
        /// Catalog JSON: `{"scenarios": [{"id", "name", "tx"}]}`.
        #[arg(long)]
        catalog: Utf8PathBuf,

        /// Only this scenario (unknown ids select the first one).
        #[arg(long)]
        id: Option<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render the plain-text copy report from an existing JSON report.
    Text {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,
    },

    /// Explain a signal id, reason title, or top-signal label.
    Explain {
        /// e.g. "signature.known_drainer", "Known drainer pattern", "Upgradeable risk".
        identifier: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        let directives: Vec<String> = LOG_TARGETS.iter().map(|t| format!("{t}=debug")).collect();
        EnvFilter::new(format!("{},warn", directives.join(",")))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.cmd {
        Commands::Evaluate {
            intent,
            label,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_evaluate(
            &cli,
            intent,
            label.clone(),
            report_out.as_deref(),
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Scenarios { catalog, id } => cmd_scenarios(&cli, catalog, id.clone()),
        Commands::Md { report, output } => cmd_md(&cli, report, output.as_deref()),
        Commands::Text { report } => cmd_text(&cli, report),
        Commands::Explain { identifier } => cmd_explain(identifier),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("gateora error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        pack: cli.pack.clone(),
        block_unlimited_approvals: cli.block_unlimited_approvals,
        block_unknown_contracts: cli.block_unknown_contracts,
        strict_mode: cli.strict_mode,
        explain_more: cli.explain_more,
    }
}

/// Missing config file is allowed (pack defaults apply).
fn read_config(cli: &Cli) -> String {
    match std::fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %cli.config, error = %err, "no config file; using pack defaults");
            String::new()
        }
    }
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read intent from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read intent: {}", path))
}

fn cmd_evaluate(
    cli: &Cli,
    intent_path: &Utf8Path,
    label: Option<String>,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let intent_text = read_input(intent_path)?;
    let config_text = read_config(cli);

    let output = run_evaluate(EvaluateInput {
        intent_text: &intent_text,
        config_text: &config_text,
        overrides: overrides(cli),
        label,
    })?;

    let data = serialize_report(&output.report)?;
    match report_out {
        Some(path) => write_file(path, &data).context("write report json")?,
        None => println!("{}", String::from_utf8_lossy(&data)),
    }

    if let Some(path) = markdown_out {
        let renderable = to_renderable(&output.report, output.resolved_config.display);
        let md = render_markdown(&renderable);
        write_file(path, md.as_bytes()).context("write markdown")?;
    }

    eprintln!("{}", output.report.result.summary);
    Ok(verdict_exit_code(output.report.result.verdict))
}

fn cmd_scenarios(cli: &Cli, catalog_path: &Utf8Path, id: Option<String>) -> anyhow::Result<i32> {
    let catalog_text = std::fs::read_to_string(catalog_path)
        .with_context(|| format!("read catalog: {}", catalog_path))?;
    let config_text = read_config(cli);

    let outcomes = run_scenarios(ScenariosInput {
        catalog_text: &catalog_text,
        config_text: &config_text,
        overrides: overrides(cli),
        id,
    })?;

    for outcome in &outcomes {
        println!("{}", format_scenario_line(outcome));
    }
    Ok(0)
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn load_report(report_path: &Utf8Path) -> anyhow::Result<GateoraReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(cli: &Cli, report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report = load_report(report_path)?;
    let display = display_for_report(&report, &overrides(cli));
    let md = render_markdown(&to_renderable(&report, display));

    match output {
        Some(out_path) => write_file(out_path, md.as_bytes()).context("write markdown output")?,
        None => print!("{}", md),
    }
    Ok(0)
}

fn cmd_text(cli: &Cli, report_path: &Utf8Path) -> anyhow::Result<i32> {
    let report = load_report(report_path)?;
    let display = display_for_report(&report, &overrides(cli));
    print!("{}", render_text(&to_renderable(&report, display)));
    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", gateora_app::format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_signal_ids,
            available_titles,
        } => {
            eprint!(
                "{}",
                gateora_app::format_not_found(&identifier, available_signal_ids, available_titles)
            );
            Ok(1)
        }
    }
}
