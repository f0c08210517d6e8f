// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{CommitlintError, ConfigError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::default::{default_document, example_config};
use super::schema::RuleConfig;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".commitlintrc.json";

/// Largest configuration file we are willing to read.
const MAX_CONFIG_SIZE: u64 = 100_000;

/// Path of the configuration file in the working directory.
pub fn config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(CONFIG_FILE))
}

/// Whether a configuration file exists in the working directory.
pub fn config_exists() -> bool {
    config_path().map(|p| p.is_file()).unwrap_or(false)
}

/// Load configuration from the working directory, falling back to defaults.
pub fn load_config() -> Result<RuleConfig> {
    let path = config_path()?;
    if !path.is_file() {
        tracing::debug!("No configuration file found, using defaults");
        return Ok(RuleConfig::from_value(default_document()));
    }

    let cwd = std::env::current_dir()?;
    let content = read_config_file(&path, Some(&cwd))?;
    parse_config(&content, &path)
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<RuleConfig> {
    let content = read_config_file(path, None)?;
    parse_config(&content, path)
}

/// Parse a JSON document and merge it over the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<RuleConfig> {
    let document: Value = serde_json::from_str(content).map_err(|e| {
        CommitlintError::Config(ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    if !document.is_object() {
        return Err(CommitlintError::Config(ConfigError::NotAnObject));
    }

    validate_document(&document)?;

    Ok(RuleConfig::from_value(merge_values(
        default_document(),
        document,
    )))
}

/// Merge two documents, with the overlay taking precedence.
///
/// Objects merge key by key; arrays and scalars replace wholesale. A `null`
/// in the overlay leaves the base value in place.
pub fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                if value.is_null() {
                    continue;
                }
                match base.get_mut(&key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        let current = existing.take();
                        *existing = merge_values(current, value);
                    }
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        (_, overlay) => overlay,
    }
}

/// Write the default configuration file.
pub fn write_default_config(path: &Path) -> Result<()> {
    std::fs::write(path, example_config()).map_err(|e| {
        CommitlintError::Config(ConfigError::WriteFailed {
            message: format!("{}: {}", path.display(), e),
        })
    })?;
    tracing::debug!("Wrote default configuration to {:?}", path);
    Ok(())
}

fn read_config_file(path: &Path, root: Option<&Path>) -> Result<String> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let resolved = path.canonicalize().map_err(|_| {
        CommitlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        })
    })?;

    if let Some(root) = root {
        let root = root.canonicalize()?;
        if !resolved.starts_with(&root) {
            return Err(CommitlintError::Config(ConfigError::OutsideWorkingDir {
                path: path.to_path_buf(),
            }));
        }
    }

    let size = std::fs::metadata(&resolved)?.len();
    if size > MAX_CONFIG_SIZE {
        return Err(CommitlintError::Config(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_SIZE,
        }));
    }

    Ok(std::fs::read_to_string(&resolved)?)
}

/// Reject values that are present but unusable, before they are merged.
///
/// `null` counts as unset and is skipped here and in [`merge_values`].
fn validate_document(document: &Value) -> Result<()> {
    for key in ["type", "scope"] {
        if let Some(allowed) = present(document, &format!("/rules/{}/allowed", key)) {
            let Some(items) = allowed.as_array() else {
                return Err(invalid(&format!("rules.{}.allowed", key), "must be an array"));
            };
            if !items.iter().all(Value::is_string) {
                return Err(invalid(
                    &format!("rules.{}.allowed", key),
                    "must contain only strings",
                ));
            }
        }
    }

    if let Some(min) = present(document, "/rules/subject/min_length") {
        if !min.is_u64() {
            return Err(invalid(
                "rules.subject.min_length",
                "must be a non-negative integer",
            ));
        }
    }

    if let Some(max) = present(document, "/rules/subject/max_length") {
        if max.as_u64().map_or(true, |n| n < 1) {
            return Err(invalid(
                "rules.subject.max_length",
                "must be a positive integer",
            ));
        }
    }

    if let Some(case) = present(document, "/rules/subject/case") {
        if !matches!(case.as_str(), Some("lower" | "upper" | "any")) {
            return Err(invalid(
                "rules.subject.case",
                "must be one of: lower, upper, any",
            ));
        }
    }

    Ok(())
}

fn present<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    document.pointer(pointer).filter(|value| !value.is_null())
}

fn invalid(key: &str, message: &str) -> CommitlintError {
    CommitlintError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    })
}
