//! Loading evaluation items from JSON.
//!
//! Accepted layouts are `{"data": [item, ...]}` and a bare `[item, ...]`.

use crate::errors::RunError;
use crate::model::EvaluationItem;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

pub fn load_dataset(path: &Path) -> Result<Vec<EvaluationItem>, RunError> {
    let source = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RunError::missing_input(source.clone(), e.to_string())
        } else {
            RunError::input_parse(source.clone(), e.to_string())
        }
    })?;
    let items = parse_dataset(&raw, &source)?;
    tracing::info!("loaded {} items from {}", items.len(), source);
    Ok(items)
}

pub fn parse_dataset(raw: &str, source: &str) -> Result<Vec<EvaluationItem>, RunError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| RunError::input_parse(source, e.to_string()))?;

    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut obj) => obj.remove("data").ok_or_else(|| {
            RunError::input_parse(source, "expected a `data` array at the top level")
        })?,
        _ => {
            return Err(RunError::input_parse(
                source,
                "expected an array of items or an object with a `data` array",
            ))
        }
    };

    let items: Vec<EvaluationItem> =
        serde_json::from_value(list).map_err(|e| RunError::input_parse(source, e.to_string()))?;

    if items.is_empty() {
        tracing::warn!("dataset {} contains no items", source);
    }
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(&item.id) {
            tracing::warn!("dataset {} has duplicate id {}", source, item.id);
        }
    }

    Ok(items)
}
