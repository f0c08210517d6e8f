// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitlint.
//!
//! A commit message that breaks the rules is not an error here: it is a
//! normal [`ValidationResult`](crate::rules::ValidationResult). These types
//! cover the surrounding machinery (configuration, hook files, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitlint operations.
#[derive(Error, Debug)]
pub enum CommitlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // Repository discovery
    #[error("Not a Git repository")]
    NotARepository,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Invalid user input
    #[error("{0}")]
    InvalidArgument(String),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for CommitlintError {
    fn from(err: dialoguer::Error) -> Self {
        CommitlintError::Ui(err.to_string())
    }
}

impl From<git2::Error> for CommitlintError {
    fn from(err: git2::Error) -> Self {
        if err.code() == git2::ErrorCode::NotFound {
            CommitlintError::NotARepository
        } else {
            CommitlintError::WithContext {
                context: "git".to_string(),
                message: err.message().to_string(),
            }
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Access denied: {path} is outside the working directory")]
    OutsideWorkingDir { path: PathBuf },

    #[error("Configuration file too large: {path} ({size} bytes, max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid JSON in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Configuration must be a JSON object")]
    NotAnObject,

    #[error("Config {key} {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to write configuration: {message}")]
    WriteFailed { message: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Invalid hook name \"{hook}\". Valid hooks: {valid}")]
    InvalidName { hook: String, valid: String },

    #[error("Hook \"{hook}\" does not exist")]
    NotFound { hook: String },

    #[error("Hook \"{hook}\" was not installed by commitlint")]
    NotOwned { hook: String },

    #[error("No commitlint hooks found to remove")]
    NothingInstalled,

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Failed to render hook '{hook}': {message}")]
    TemplateFailed { hook: String, message: String },
}

/// Result type alias for commitlint operations.
pub type Result<T> = std::result::Result<T, CommitlintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CommitlintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

/// Process exit codes reported by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    ValidationFailed = 1,
    RuntimeError = 5,
}

impl ExitCode {
    /// Numeric process status.
    pub fn code(self) -> i32 {
        self as i32
    }
}
