//! Developer tasks (schema generation, fixture checks, explain coverage).
//!
//! Kept separate so the end-user CLI stays small.

use anyhow::{bail, Context};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(gateora_types::GateoraReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(gateora_settings::GateoraConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "gateora.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "gateora.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate every golden report under tests/fixtures/ against the generated report schema,
/// and check that it is already normalized (placeholders instead of timestamps and version).
fn check_fixtures() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to convert report schema to JSON")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;

    let dir = fixtures_dir();
    let mut errors = Vec::new();
    let mut count = 0;

    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path().join("expected.report.json");
        if !path.exists() {
            continue;
        }
        count += 1;

        let name = path.display().to_string();
        let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {name}"))?;
        let value: serde_json::Value =
            serde_json::from_str(&content).with_context(|| format!("Failed to parse {name}"))?;

        for err in validator.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }

        if gateora_test_util::normalize_nondeterministic(value.clone()) != value {
            errors.push(format!("{name}: contains real timestamps or a real tool version"));
        }
    }

    if errors.is_empty() {
        println!("✓ {count} golden reports validate against gateora.report.v1");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Fixture validation failed with {} errors", errors.len())
    }
}

/// Every signal id and reason title must resolve to a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let signal_ids = gateora_types::explain::all_signal_ids();
    let titles = gateora_types::explain::all_reason_titles();

    let mut errors = Vec::new();

    for (kind, identifiers) in [("Signal ID", signal_ids), ("Reason title", titles)] {
        for identifier in identifiers {
            match gateora_types::lookup_explanation(identifier) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{kind} '{identifier}' has empty title"));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{kind} '{identifier}' has empty description"));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{kind} '{identifier}' has empty remediation"));
                    }
                }
                None => errors.push(format!("{kind} '{identifier}' has no explanation")),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} signal IDs have explanations", signal_ids.len());
        println!("✓ {} reason titles have explanations", titles.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  check-fixtures    Validate golden reports in tests/fixtures/ against the schema");
    eprintln!("  explain-coverage  Validate all signal IDs and reason titles have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
