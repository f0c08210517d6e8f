// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use console::style;
use serde::Serialize;

/// Result of validating a commit message.
///
/// A result is valid exactly when it carries no errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    #[serde(rename = "type")]
    commit_type: Option<String>,
    scope: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid(commit_type: Option<String>, scope: Option<String>) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            commit_type,
            scope,
        }
    }

    /// A result carrying the given errors. Validity follows from the list.
    pub fn invalid(errors: Vec<String>, commit_type: Option<String>, scope: Option<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            commit_type,
            scope,
        }
    }

    /// A failing result with a single error and no parsed header.
    pub fn error(message: impl Into<String>) -> Self {
        Self::invalid(vec![message.into()], None, None)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn commit_type(&self) -> Option<&str> {
        self.commit_type.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Numbered error list for terminal output, one error per line.
    pub fn format_errors(&self) -> String {
        self.errors
            .iter()
            .enumerate()
            .map(|(i, error)| format!("  {} {}", style(format!("{}.", i + 1)).red().bold(), error))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// JSON rendering: `{"valid", "errors", "type", "scope"}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print in JSON format.
    pub fn print_json(&self) {
        println!("{}", self.to_json());
    }
}
