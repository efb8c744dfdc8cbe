//! CLI behavior beyond the golden fixtures: stdin input, overrides, rendering, scenarios,
//! explain, and error exits.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn gateora_cmd() -> Command {
    Command::cargo_bin("gateora").expect("gateora binary not found")
}

/// Command running in an empty temp dir, so no stray `gateora.toml` is picked up.
fn isolated(temp: &TempDir) -> Command {
    let mut cmd = gateora_cmd();
    cmd.current_dir(temp.path());
    cmd
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn catalog_path() -> PathBuf {
    repo_root().join("demos").join("scenarios.json")
}

fn evaluate_stdin(temp: &TempDir, args: &[&str], intent: &str) -> (i32, Value, String) {
    let output = isolated(temp)
        .args(args)
        .args(["evaluate", "--intent", "-"])
        .write_stdin(intent)
        .output()
        .expect("run gateora");
    let report: Value = serde_json::from_slice(&output.stdout).expect("report json on stdout");
    (
        output.status.code().unwrap_or(-1),
        report,
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn evaluate_reads_stdin_and_prints_summary_to_stderr() {
    let temp = TempDir::new().unwrap();
    let (code, report, stderr) =
        evaluate_stdin(&temp, &[], r#"{"type":"sign","knownDrainerPattern":true}"#);

    assert_eq!(code, 0);
    assert_eq!(report["result"]["verdict"], "WARN");
    assert_eq!(report["result"]["score"], 75);
    assert!(stderr.contains("Verdict: WARN (Risk 75/100)."));
}

#[test]
fn policy_flags_override_the_pack() {
    let temp = TempDir::new().unwrap();
    let intent = r#"{"type":"approve","allowance":"UNLIMITED"}"#;

    let (code, report, _) = evaluate_stdin(&temp, &[], intent);
    assert_eq!(code, 2);
    assert_eq!(report["result"]["score"], 85);

    let (code, report, _) = evaluate_stdin(
        &temp,
        &["--block-unlimited-approvals", "false"],
        intent,
    );
    assert_eq!(code, 0);
    assert_eq!(report["result"]["score"], 45);
    assert_eq!(report["data"]["policy"]["blockUnlimitedApprovals"], false);

    let (_, report, _) = evaluate_stdin(&temp, &["--pack", "degen", "--strict-mode", "true"], intent);
    assert_eq!(report["data"]["pack"], "degen");
    assert_eq!(report["result"]["score"], 53);
    assert_eq!(report["result"]["verdict"], "WARN");
}

#[test]
fn config_file_is_read_from_working_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("gateora.toml"), "pack = \"strict\"\n").unwrap();

    let (_, report, _) = evaluate_stdin(&temp, &[], r#"{"type":"swap"}"#);
    assert_eq!(report["data"]["pack"], "strict");
    assert_eq!(report["result"]["score"], 8);
}

#[test]
fn label_is_recorded() {
    let temp = TempDir::new().unwrap();
    let output = isolated(&temp)
        .args(["evaluate", "--intent", "-", "--label", "My swap"])
        .write_stdin(r#"{"type":"swap"}"#)
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["label"], "My swap");
}

#[test]
fn invalid_intent_exits_with_error_and_no_report() {
    let temp = TempDir::new().unwrap();
    isolated(&temp)
        .args(["evaluate", "--intent", "-"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid input"));

    isolated(&temp)
        .args(["evaluate", "--intent", "-"])
        .write_stdin("not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn missing_intent_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    isolated(&temp)
        .args(["evaluate", "--intent", "nope.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read intent: nope.json"));
}

#[test]
fn bad_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("gateora.toml"),
        "[display]\nmax_reasons = 0\n",
    )
    .unwrap();

    isolated(&temp)
        .args(["evaluate", "--intent", "-"])
        .write_stdin("{}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_reasons"));
}

#[test]
fn evaluate_writes_report_and_markdown_then_renders_them() {
    let temp = TempDir::new().unwrap();
    let report_path = temp.path().join("out").join("report.json");
    let md_path = temp.path().join("out").join("report.md");

    isolated(&temp)
        .args(["evaluate", "--intent", "-", "--label", "Vault deposit"])
        .arg("--report-out")
        .arg(&report_path)
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .write_stdin(r#"{"type":"other","upgradeable":true,"adminCanWithdraw":true,"gasAnomaly":true}"#)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("- Scenario: Vault deposit"));
    assert!(md.contains("- Verdict: **ALLOW**"));
    assert!(md.contains("- **Admin withdraw privileges**: Admin can withdraw funds or move assets."));

    isolated(&temp)
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# GateOra risk report"));

    isolated(&temp)
        .args(["--explain-more", "false", "md", "--report"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Signal details hidden"));

    isolated(&temp)
        .arg("text")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "GateOra Report\nScenario: Vault deposit\nVerdict: ALLOW\nRisk Score: 42/100\n",
        ))
        .stdout(predicate::str::contains("- Gas anomaly: Unusual fee / gas pattern detected."))
        .stdout(predicate::str::contains(
            "Transaction JSON:\n{\n  \"type\": \"other\",\n  \"upgradeable\": true,",
        ));
}

#[test]
fn rendering_a_stored_report_uses_its_pack_display() {
    let temp = TempDir::new().unwrap();
    let report_path = temp.path().join("degen.json");

    isolated(&temp)
        .args(["--pack", "degen", "evaluate", "--intent", "-", "--report-out"])
        .arg(&report_path)
        .write_stdin(r#"{"type":"sign","knownDrainerPattern":true}"#)
        .assert()
        .code(0);

    isolated(&temp)
        .args(["md", "--report"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Signal details hidden"))
        .stdout(predicate::str::contains("## Signals").not());

    isolated(&temp)
        .args(["--explain-more", "true", "md", "--report"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Signals"));
}

#[test]
fn md_rejects_foreign_reports() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("other.json");
    std::fs::write(&path, r#"{"schema":"sensor.report.v1"}"#).unwrap();

    isolated(&temp)
        .arg("md")
        .arg("--report")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown report schema"));
}

#[test]
fn scenarios_prints_one_line_per_scenario() {
    let temp = TempDir::new().unwrap();
    isolated(&temp)
        .arg("scenarios")
        .arg("--catalog")
        .arg(catalog_path())
        .assert()
        .success()
        .stdout(
            "safe_swap\tALLOW\t0\tNo critical signals\n\
             unlimited_approval_unknown\tBLOCK\t100\tUnlimited approval\n\
             phishing_signature_drainer\tBLOCK\t95\tKnown drainer pattern\n\
             new_contract_high_value\tALLOW\t40\tHigh value transfer\n\
             upgradeable_admin\tWARN\t52\tAdmin withdraw privileges\n",
        );
}

#[test]
fn scenarios_select_one_and_fall_back_to_first() {
    let temp = TempDir::new().unwrap();
    isolated(&temp)
        .args(["--block-unknown-contracts", "true", "scenarios", "--id", "new_contract_high_value"])
        .arg("--catalog")
        .arg(catalog_path())
        .assert()
        .success()
        .stdout("new_contract_high_value\tBLOCK\t100\tUnknown contract blocked\n");

    isolated(&temp)
        .args(["scenarios", "--id", "does_not_exist"])
        .arg("--catalog")
        .arg(catalog_path())
        .assert()
        .success()
        .stdout("safe_swap\tALLOW\t0\tNo critical signals\n");
}

#[test]
fn explain_known_and_unknown_identifiers() {
    gateora_cmd()
        .args(["explain", "signature.known_drainer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What to check"));

    gateora_cmd()
        .args(["explain", "Upgradeable risk"])
        .assert()
        .success();

    gateora_cmd()
        .args(["explain", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available signal ids:"));
}

#[test]
fn emitted_report_validates_against_generated_schema() {
    let temp = TempDir::new().unwrap();
    let (_, report, _) = evaluate_stdin(
        &temp,
        &["--pack", "strict"],
        r#"{"type":"transfer","valueUSD":12500,"contractReputation":"unknown"}"#,
    );

    let schema = schemars::schema_for!(gateora_types::GateoraReport);
    let schema_value = serde_json::to_value(&schema).unwrap();
    let validator = jsonschema::validator_for(&schema_value).expect("compile schema");

    let errors: Vec<String> = validator.iter_errors(&report).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "schema errors: {errors:?}");
}
