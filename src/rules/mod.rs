// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Rules are grouped into categories evaluated in a fixed order. Every
//! category runs, and the errors of all categories are collected into a
//! single [`ValidationResult`].

mod builtin;
mod engine;
mod validator;

pub use builtin::{apply_builtin_rules, RuleCategory, RuleFn};
pub use engine::{validate, RuleEngine, MAX_MESSAGE_LENGTH};
pub use validator::ValidationResult;
