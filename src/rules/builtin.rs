// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each rule category is a pure function from a parsed message and a
//! configuration snapshot to the list of violations it found.

use crate::commit::CommitMessage;
use crate::config::{RuleConfig, SubjectCase};

/// Signature shared by all rule categories.
pub type RuleFn = fn(&CommitMessage, &RuleConfig) -> Vec<String>;

/// One independently evaluated group of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Format,
    Type,
    Scope,
    Subject,
    Body,
    Footer,
    Patterns,
}

impl RuleCategory {
    /// Evaluation order. Error order in a result follows this order.
    pub const PIPELINE: [RuleCategory; 7] = [
        RuleCategory::Format,
        RuleCategory::Type,
        RuleCategory::Scope,
        RuleCategory::Subject,
        RuleCategory::Body,
        RuleCategory::Footer,
        RuleCategory::Patterns,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleCategory::Format => "format",
            RuleCategory::Type => "type",
            RuleCategory::Scope => "scope",
            RuleCategory::Subject => "subject",
            RuleCategory::Body => "body",
            RuleCategory::Footer => "footer",
            RuleCategory::Patterns => "patterns",
        }
    }

    /// The function implementing this category.
    pub fn rule(&self) -> RuleFn {
        match self {
            RuleCategory::Format => check_format,
            RuleCategory::Type => check_type,
            RuleCategory::Scope => check_scope,
            RuleCategory::Subject => check_subject,
            RuleCategory::Body => check_body,
            RuleCategory::Footer => check_footer,
            RuleCategory::Patterns => check_patterns,
        }
    }

    /// Run this category against a message.
    pub fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
        (self.rule())(message, config)
    }
}

/// Apply every rule category, in pipeline order, to a commit message.
pub fn apply_builtin_rules(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    RuleCategory::PIPELINE
        .iter()
        .flat_map(|category| {
            let errors = category.check(message, config);
            if !errors.is_empty() {
                tracing::debug!("{} rules reported {} issue(s)", category.name(), errors.len());
            }
            errors
        })
        .collect()
}

/// Header must follow the conventional commit grammar.
fn check_format(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    if config.conventional_format() && !message.has_valid_format() {
        vec![
            "Commit message must follow conventional commit format: type(scope): description"
                .to_string(),
        ]
    } else {
        Vec::new()
    }
}

/// Type presence and allow-list.
fn check_type(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    let Some(commit_type) = message.commit_type() else {
        return if config.type_required() {
            vec!["Commit type is required".to_string()]
        } else {
            Vec::new()
        };
    };

    let allowed = config.allowed_types();
    if !allowed.is_empty() && !allowed.iter().any(|t| t == commit_type) {
        return vec![format!(
            "Invalid commit type \"{}\". Allowed types: {}",
            commit_type,
            allowed.join(", ")
        )];
    }

    Vec::new()
}

/// Scope presence and allow-list.
fn check_scope(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    let Some(scope) = message.scope() else {
        return if config.scope_required() {
            vec!["Commit scope is required".to_string()]
        } else {
            Vec::new()
        };
    };

    let allowed = config.allowed_scopes();
    if !allowed.is_empty() && !allowed.iter().any(|s| s == scope) {
        return vec![format!(
            "Invalid commit scope \"{}\". Allowed scopes: {}",
            scope,
            allowed.join(", ")
        )];
    }

    Vec::new()
}

/// Subject length, first-character case and trailing period.
fn check_subject(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    let Some(subject) = message.subject().filter(|s| !s.is_empty()) else {
        return vec!["Commit subject is required".to_string()];
    };

    let mut errors = Vec::new();
    let length = message.subject_length();

    let min = config.subject_min_length();
    if length < min {
        errors.push(format!("Subject too short (minimum {} characters)", min));
    }

    let max = config.subject_max_length();
    if length > max {
        errors.push(format!("Subject too long (maximum {} characters)", max));
    }

    // Only cased letters are checked; "2fa: ..." style subjects pass either way.
    if let Some(first) = subject.chars().next() {
        match config.subject_case() {
            SubjectCase::Lower if first.is_uppercase() => {
                errors.push("Subject must start with lowercase letter".to_string());
            }
            SubjectCase::Upper if first.is_lowercase() => {
                errors.push("Subject must start with uppercase letter".to_string());
            }
            _ => {}
        }
    }

    let ends_with_period = subject.ends_with('.');
    if config.subject_end_with_period() {
        if !ends_with_period {
            errors.push("Subject must end with a period".to_string());
        }
    } else if ends_with_period {
        errors.push("Subject must not end with a period".to_string());
    }

    errors
}

/// Body separation and per-line length. Skipped when there is no body.
fn check_body(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    let Some(body) = message.body() else {
        return Vec::new();
    };

    let mut errors = Vec::new();

    if config.body_leading_blank() && !message.has_blank_line_after_subject() {
        errors.push("Body must be separated from subject by a blank line".to_string());
    }

    let max = config.body_max_line_length();
    if max > 0 {
        for (index, line) in body.split('\n').enumerate() {
            if line.chars().count() > max {
                errors.push(format!(
                    "Body line {} exceeds maximum length of {} characters",
                    index + 1,
                    max
                ));
            }
        }
    }

    errors
}

/// Footer separation. Skipped when there is no footer.
fn check_footer(message: &CommitMessage, config: &RuleConfig) -> Vec<String> {
    if message.footer().is_none() {
        return Vec::new();
    }

    if config.footer_leading_blank() && !message.has_blank_line_before_footer() {
        vec!["Footer must be separated from body by a blank line".to_string()]
    } else {
        Vec::new()
    }
}

/// Custom patterns are accepted in configuration but never enforced.
fn check_patterns(_message: &CommitMessage, _config: &RuleConfig) -> Vec<String> {
    Vec::new()
}
