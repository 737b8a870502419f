//! package.json name patching

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Overwrite the `name` field of a package.json, keeping every other field
/// and the original key order.
pub async fn set_name(package_json: &Path, name: &str) -> Result<()> {
    let content = fs::read_to_string(package_json)
        .await
        .with_context(|| format!("Failed to read {}", package_json.display()))?;

    let mut value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", package_json.display()))?;

    let fields = value
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("{} is not a JSON object", package_json.display()))?;
    fields.insert("name".to_string(), Value::String(name.to_string()));

    let mut output = serde_json::to_string_pretty(&value)?;
    output.push('\n');

    fs::write(package_json, output)
        .await
        .with_context(|| format!("Failed to write {}", package_json.display()))
}
