// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Conventional commit linter and Git hook manager
//!
//! Parses commit messages in the conventional commit format, validates them
//! against rules loaded from `.commitlintrc.json`, and manages the Git hooks
//! that run the validation.
//!
//! # Features
//!
//! - **Total Parser**: Any input yields a [`CommitMessage`]; missing parts are absent
//! - **Rule Engine**: Format, type, scope, subject, body and footer checks
//! - **Lenient Configuration**: User settings deep-merged over built-in defaults
//! - **Git Hooks**: commit-msg and pre-commit scripts with backup and restore
//!
//! # Example
//!
//! ```
//! use commitlint::config::default_config;
//! use commitlint::rules::validate;
//!
//! let config = default_config();
//!
//! let result = validate("feat(auth): add login", &config);
//! assert!(result.is_valid());
//! assert_eq!(result.scope(), Some("auth"));
//!
//! let result = validate("Add login", &config);
//! assert!(!result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use commit::CommitMessage;
pub use config::RuleConfig;
pub use error::{CommitlintError, ExitCode, Result};
pub use rules::{validate, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
