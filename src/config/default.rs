// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use serde_json::{json, Value};

use super::schema::RuleConfig;

/// Schema reference written into generated configuration files.
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/eshanized/commitlint-rs/main/docs/schema.json";

/// Types accepted out of the box.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "ci", "build", "revert",
];

/// The default configuration document that user files are merged over.
pub fn default_document() -> Value {
    json!({
        "rules": {
            "type": {
                "required": true,
                "allowed": DEFAULT_TYPES,
            },
            "scope": {
                "required": false,
                "allowed": [],
            },
            "subject": {
                "min_length": 1,
                "max_length": 100,
                "case": "any",
                "end_with_period": false,
            },
            "body": {
                "max_line_length": 100,
                "leading_blank": true,
            },
            "footer": {
                "leading_blank": true,
            },
        },
        "patterns": {
            "breaking_change": "^BREAKING CHANGE:",
            "issue_reference": "(?i)(?:close[sd]?|fix(?:e[sd])?|resolve[sd]?)\\s+#\\d+",
        },
        "hooks": {
            "commit-msg": true,
            "pre-commit": false,
            "pre-push": false,
        },
        "pre_commit_commands": {},
        "format": {
            "conventional": true,
        },
    })
}

/// Get the default configuration.
pub fn default_config() -> RuleConfig {
    RuleConfig::from_value(default_document())
}

/// Generate the contents of a fresh `.commitlintrc.json`.
pub fn example_config() -> String {
    let mut document = serde_json::Map::new();
    document.insert("$schema".to_string(), Value::String(SCHEMA_URL.to_string()));
    if let Value::Object(defaults) = default_document() {
        document.extend(defaults);
    }

    let mut output =
        serde_json::to_string_pretty(&Value::Object(document)).unwrap_or_else(|_| "{}".to_string());
    output.push('\n');
    output
}
