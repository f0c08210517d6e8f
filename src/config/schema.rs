// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Mirrors the `.commitlintrc.json` document. Every leaf is optional and a
//! leaf of the wrong shape deserializes as absent; the accessor methods on
//! [`RuleConfig`] supply the documented defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The rule configuration consumed by the validator and the hook installer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuleConfig {
    /// Header format requirements.
    #[serde(deserialize_with = "lenient")]
    pub format: FormatConfig,

    /// Per-section rules.
    #[serde(deserialize_with = "lenient")]
    pub rules: RulesConfig,

    /// Named custom patterns. Accepted but not enforced.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Map<String, Value>>,

    /// Hook name to enabled flag.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Map<String, Value>>,

    /// Label to shell command, run in order by the pre-commit hook.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pre_commit_commands: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    /// Whether the header must be `type(scope): subject`.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub conventional: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub commit_type: ListRule,

    #[serde(deserialize_with = "lenient")]
    pub scope: ListRule,

    #[serde(deserialize_with = "lenient")]
    pub subject: SubjectRule,

    #[serde(deserialize_with = "lenient")]
    pub body: BodyRule,

    #[serde(deserialize_with = "lenient")]
    pub footer: FooterRule,
}

/// Presence and allow-list rule shared by `type` and `scope`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ListRule {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Allowed values; empty means anything goes.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SubjectRule {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub case: Option<SubjectCase>,

    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end_with_period: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BodyRule {
    /// Per-line limit; 0 disables the check.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_line_length: Option<usize>,

    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub leading_blank: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FooterRule {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub leading_blank: Option<bool>,
}

/// Case constraint on the first character of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCase {
    Lower,
    Upper,
    #[default]
    Any,
}

impl SubjectCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectCase::Lower => "lower",
            SubjectCase::Upper => "upper",
            SubjectCase::Any => "any",
        }
    }
}

impl std::fmt::Display for SubjectCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hooks managed by `install`/`uninstall`, with their enabled-by-default flag.
pub const MANAGED_HOOKS: &[(&str, bool)] =
    &[("commit-msg", true), ("pre-commit", false), ("pre-push", false)];

impl RuleConfig {
    /// Build a configuration from an arbitrary JSON value.
    ///
    /// Anything that is not an object yields the empty configuration.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!("Ignoring malformed configuration: {}", e);
            Self::default()
        })
    }

    pub fn conventional_format(&self) -> bool {
        self.format.conventional.unwrap_or(true)
    }

    pub fn type_required(&self) -> bool {
        self.rules.commit_type.required.unwrap_or(true)
    }

    pub fn allowed_types(&self) -> &[String] {
        self.rules.commit_type.allowed.as_deref().unwrap_or_default()
    }

    pub fn scope_required(&self) -> bool {
        self.rules.scope.required.unwrap_or(false)
    }

    pub fn allowed_scopes(&self) -> &[String] {
        self.rules.scope.allowed.as_deref().unwrap_or_default()
    }

    pub fn subject_min_length(&self) -> usize {
        self.rules.subject.min_length.unwrap_or(1)
    }

    pub fn subject_max_length(&self) -> usize {
        self.rules.subject.max_length.unwrap_or(100)
    }

    pub fn subject_case(&self) -> SubjectCase {
        self.rules.subject.case.unwrap_or_default()
    }

    pub fn subject_end_with_period(&self) -> bool {
        self.rules.subject.end_with_period.unwrap_or(false)
    }

    pub fn body_max_line_length(&self) -> usize {
        self.rules.body.max_line_length.unwrap_or(100)
    }

    pub fn body_leading_blank(&self) -> bool {
        self.rules.body.leading_blank.unwrap_or(true)
    }

    pub fn footer_leading_blank(&self) -> bool {
        self.rules.footer.leading_blank.unwrap_or(true)
    }

    /// Whether `install` should write the given hook.
    pub fn hook_enabled(&self, hook: &str) -> bool {
        let fallback = MANAGED_HOOKS
            .iter()
            .find(|(name, _)| *name == hook)
            .is_some_and(|(_, enabled)| *enabled);

        self.hooks
            .as_ref()
            .and_then(|hooks| hooks.get(hook))
            .and_then(Value::as_bool)
            .unwrap_or(fallback)
    }

    /// Configured pre-commit commands in file order. Non-string entries are skipped.
    pub fn pre_commit_commands(&self) -> Vec<(&str, &str)> {
        self.pre_commit_commands
            .iter()
            .flatten()
            .filter_map(|(label, command)| command.as_str().map(|c| (label.as_str(), c)))
            .collect()
    }
}

/// Deserialize a value, treating anything of the wrong shape as its default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_config_defaults() {
        let config = RuleConfig::default();
        assert!(config.conventional_format());
        assert!(config.type_required());
        assert!(config.allowed_types().is_empty());
        assert!(!config.scope_required());
        assert_eq!(config.subject_min_length(), 1);
        assert_eq!(config.subject_max_length(), 100);
        assert_eq!(config.subject_case(), SubjectCase::Any);
        assert!(!config.subject_end_with_period());
        assert_eq!(config.body_max_line_length(), 100);
        assert!(config.body_leading_blank());
        assert!(config.footer_leading_blank());
    }

    #[test]
    fn test_from_value_reads_rules() {
        let config = RuleConfig::from_value(json!({
            "format": { "conventional": false },
            "rules": {
                "type": { "required": false, "allowed": ["feat", "fix"] },
                "scope": { "required": true, "allowed": ["api"] },
                "subject": { "min_length": 10, "max_length": 20, "case": "lower", "end_with_period": true },
                "body": { "max_line_length": 0, "leading_blank": false },
                "footer": { "leading_blank": false }
            }
        }));

        assert!(!config.conventional_format());
        assert!(!config.type_required());
        assert_eq!(config.allowed_types(), ["feat", "fix"]);
        assert!(config.scope_required());
        assert_eq!(config.allowed_scopes(), ["api"]);
        assert_eq!(config.subject_min_length(), 10);
        assert_eq!(config.subject_max_length(), 20);
        assert_eq!(config.subject_case(), SubjectCase::Lower);
        assert!(config.subject_end_with_period());
        assert_eq!(config.body_max_line_length(), 0);
        assert!(!config.body_leading_blank());
        assert!(!config.footer_leading_blank());
    }

    #[test]
    fn test_wrong_shapes_are_absent() {
        let config = RuleConfig::from_value(json!({
            "format": "yes",
            "rules": {
                "type": { "required": "sure", "allowed": "feat" },
                "scope": [1, 2, 3],
                "subject": { "min_length": -4, "max_length": "long", "case": "title" },
                "body": { "max_line_length": 1.5 }
            },
            "hooks": ["commit-msg"]
        }));

        assert!(config.conventional_format());
        assert!(config.type_required());
        assert!(config.allowed_types().is_empty());
        assert!(!config.scope_required());
        assert_eq!(config.subject_min_length(), 1);
        assert_eq!(config.subject_max_length(), 100);
        assert_eq!(config.subject_case(), SubjectCase::Any);
        assert_eq!(config.body_max_line_length(), 100);
        assert!(config.hook_enabled("commit-msg"));
    }

    #[test]
    fn test_non_object_is_empty_config() {
        assert_eq!(RuleConfig::from_value(json!([1, 2])), RuleConfig::default());
        assert_eq!(RuleConfig::from_value(json!("text")), RuleConfig::default());
    }

    #[test]
    fn test_hook_enabled_defaults() {
        let config = RuleConfig::default();
        assert!(config.hook_enabled("commit-msg"));
        assert!(!config.hook_enabled("pre-commit"));
        assert!(!config.hook_enabled("post-merge"));

        let config = RuleConfig::from_value(json!({
            "hooks": { "commit-msg": false, "pre-commit": true }
        }));
        assert!(!config.hook_enabled("commit-msg"));
        assert!(config.hook_enabled("pre-commit"));
    }

    #[test]
    fn test_pre_commit_commands_keep_order() {
        let config = RuleConfig::from_value(json!({
            "pre_commit_commands": {
                "Passing Check": "echo pass",
                "Failing Check": "exit 1",
                "Broken": 42,
                "Another": "echo again"
            }
        }));

        assert_eq!(
            config.pre_commit_commands(),
            vec![
                ("Passing Check", "echo pass"),
                ("Failing Check", "exit 1"),
                ("Another", "echo again"),
            ]
        );
    }

    #[test]
    fn test_subject_case_display() {
        assert_eq!(SubjectCase::Lower.to_string(), "lower");
        assert_eq!(SubjectCase::Upper.as_str(), "upper");
    }
}
