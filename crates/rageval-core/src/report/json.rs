use crate::model::{EvaluationResult, FailureReport};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

pub fn write_evaluations(results: &[EvaluationResult], out: &Path) -> anyhow::Result<()> {
    write_pretty(results, out)
}

pub fn write_failure_report(report: &FailureReport, out: &Path) -> anyhow::Result<()> {
    write_pretty(report, out)
}

pub fn read_evaluations(path: &Path) -> anyhow::Result<Vec<EvaluationResult>> {
    read_json(path)
}

pub fn read_failure_report(path: &Path) -> anyhow::Result<FailureReport> {
    read_json(path)
}

fn write_pretty<T: Serialize + ?Sized>(value: &T, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
