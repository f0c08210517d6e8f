// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::commit::CommitMessage;
use crate::config::RuleConfig;

use super::builtin::apply_builtin_rules;
use super::validator::ValidationResult;

/// Longest message, in characters, that will be validated.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Rule engine for validating commit messages against a configuration snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    config: &'a RuleConfig,
}

impl<'a> RuleEngine<'a> {
    /// Create a new rule engine over the given configuration.
    pub fn new(config: &'a RuleConfig) -> Self {
        Self { config }
    }

    /// Validate a raw commit message.
    ///
    /// Never panics: an internal failure becomes a single
    /// `Validation error: ...` entry.
    pub fn validate_string(&self, message: &str) -> ValidationResult {
        match panic::catch_unwind(AssertUnwindSafe(|| {
            self.validate(&CommitMessage::parse(message))
        })) {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::warn!("Validation aborted: {}", reason);
                ValidationResult::error(format!("Validation error: {}", reason))
            }
        }
    }

    /// Validate an already parsed commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        if message.is_empty() {
            return ValidationResult::error("Commit message cannot be empty");
        }

        if message.character_count() > MAX_MESSAGE_LENGTH {
            return ValidationResult::error("Commit message too long (max 10,000 characters)");
        }

        let commit_type = message.commit_type().map(str::to_string);
        let scope = message.scope().map(str::to_string);

        if message.should_skip_validation() {
            tracing::debug!("Skipping validation for generated commit message");
            return ValidationResult::valid(commit_type, scope);
        }

        let errors = apply_builtin_rules(message, self.config);
        tracing::debug!("Validation finished with {} error(s)", errors.len());

        if errors.is_empty() {
            ValidationResult::valid(commit_type, scope)
        } else {
            ValidationResult::invalid(errors, commit_type, scope)
        }
    }
}

/// Validate a raw commit message against a configuration.
pub fn validate(message: &str, config: &RuleConfig) -> ValidationResult {
    RuleEngine::new(config).validate_string(message)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
