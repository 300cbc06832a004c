use std::path::Path;

use anyhow::Context;
use estrich_core::ConformityVerdict;
use estrich_core::responses::{BatchEntry, BatchReport, ConformityRecord};
use estrich_schema::{CompiledSchema, SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::output::output;

const RECORD_SCHEMA: &str = "conformity_record";

pub fn run(file: &str, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let records = load_records(Path::new(file))?;
    let schema = SchemaRegistry::new()
        .compile(RECORD_SCHEMA)
        .context("conformity record schema unavailable")?;
    let report = evaluate(&records, &schema)?;
    tracing::info!(
        file,
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "batch evaluated"
    );
    output(&report, flags.format)?;
    Ok(Outcome::from_passed(report.failed == 0))
}

/// Read a batch file. The top level must be a JSON array; its items are
/// checked one by one in [`evaluate`].
fn load_records(path: &Path) -> anyhow::Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("batch file {} is not valid JSON", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        other => anyhow::bail!(
            "batch file {} must contain a JSON array of records, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Evaluate every record against the compiled record schema. A record that
/// fails validation becomes a failed entry; it never aborts the batch.
fn evaluate(records: &[Value], schema: &CompiledSchema) -> anyhow::Result<BatchReport> {
    let mut entries = Vec::with_capacity(records.len());
    for (index, item) in records.iter().enumerate() {
        let entry = match schema.validate(item) {
            Ok(()) => match serde_json::from_value::<ConformityRecord>(item.clone()) {
                Ok(record) => BatchEntry {
                    index,
                    verdict: estrich_core::check_conformity_by_name(
                        record.measured,
                        &record.declared_class,
                        &record.test_type,
                    ),
                    label: record.label,
                },
                Err(error) => invalid_entry(index, item, &[error.to_string()]),
            },
            Err(SchemaError::ValidationFailed { errors }) => {
                tracing::debug!(index, errors = errors.len(), "batch record rejected");
                invalid_entry(index, item, &errors)
            }
            Err(other) => return Err(other).context("conformity record check failed"),
        };
        entries.push(entry);
    }
    Ok(BatchReport::from_entries(entries))
}

fn invalid_entry(index: usize, item: &Value, errors: &[String]) -> BatchEntry {
    let text = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);
    BatchEntry {
        index,
        label: text("label"),
        verdict: ConformityVerdict {
            passed: false,
            message: format!("Ungültiger Datensatz: {}", errors.join("; ")),
            measured: item.get("measured").and_then(Value::as_f64).unwrap_or_default(),
            required: None,
            declared_class: text("declared_class").unwrap_or_default(),
            test_type: None,
        },
    }
}
