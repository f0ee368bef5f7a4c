use crate::config::{self, Config};
use anyhow::{Context, Result};
use serde_json::Value;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = lookup(key, config)?;
    match value {
        Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }
    Ok(())
}

/// Resolve a dotted key such as `output.format`.
pub fn lookup(key: &str, config: &Config) -> Result<Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }
    Ok(current.clone())
}

/// Return a copy of `config` with `key` set to `raw`.
///
/// `raw` is read as JSON when it parses (`true`, `3`), otherwise as a string.
pub fn apply(config: &Config, key: &str, raw: &str) -> Result<Config> {
    let mut value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &mut value;
    for part in key.split('.') {
        current = current
            .get_mut(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }
    if current.is_object() {
        anyhow::bail!("Key '{}' is a section, not a value", key);
    }
    *current = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let updated: Config = serde_json::from_value(value)
        .with_context(|| format!("Invalid value '{}' for {}", raw, key))?;
    updated.validate()?;
    Ok(updated)
}

pub fn set(key: &str, raw: &str, config: &Config) -> Result<()> {
    let updated = apply(config, key, raw)?;

    let path = crate::platform::config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    config::save_to_path(&updated, &path)?;

    tracing::info!(key, value = raw, path = %path.display(), "config updated");
    println!("✓ {} = {}", key, raw);
    Ok(())
}
