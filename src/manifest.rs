use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Read a composer manifest and return its `extra` block, if any.
///
/// A missing or unreadable file, or one that is not valid JSON, is an error.
/// A manifest without `extra` is not.
pub fn read_extra(manifest_path: &Path) -> Result<Option<Value>> {
    let content = std::fs::read_to_string(manifest_path)
        .with_context(|| format!("could not read manifest {}", manifest_path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", manifest_path.display()))?;

    Ok(extract_extra(json))
}

fn extract_extra(mut json: Value) -> Option<Value> {
    match json.get_mut("extra") {
        Some(extra) if !extra.is_null() => Some(extra.take()),
        _ => None,
    }
}
