// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// commitlint - Conventional commit linter and Git hook manager
///
/// Validates commit messages against configurable rules and installs the
/// Git hooks that run the validation on every commit.
#[derive(Parser, Debug)]
#[command(name = "commitlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit linter and Git hook manager", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (defaults to .commitlintrc.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a commit message
    Validate(ValidateArgs),

    /// Install git hooks and create a default configuration
    Install(InstallArgs),

    /// Remove the git hooks installed by commitlint
    Uninstall(UninstallArgs),

    /// Add a custom command to a git hook
    Add(AddArgs),

    /// Remove a git hook installed by commitlint
    Remove(RemoveArgs),

    /// Show hook and configuration status
    List(ListArgs),

    /// Create a default .commitlintrc.json
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the validate command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ValidateArgs {
    /// Commit message to validate (defaults to the pending COMMIT_EDITMSG)
    pub message: Option<String>,

    /// Read the commit message from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Suppress output (exit code only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Show detailed error information
    #[arg(long)]
    pub verbose_errors: bool,
}

/// Arguments for the install command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InstallArgs {
    /// Overwrite existing hooks without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Skip creating the default configuration file
    #[arg(long)]
    pub skip_config: bool,
}

/// Arguments for the uninstall command.
#[derive(Parser, Debug, Default, Clone)]
pub struct UninstallArgs {
    /// Uninstall without confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the add command.
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Git hook name (pre-commit, commit-msg, pre-push, post-commit, pre-rebase,
    /// post-checkout, post-merge, pre-receive, post-receive, update)
    pub hook: String,

    /// Command to execute in the hook
    pub command: String,

    /// Overwrite an existing hook without confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the remove command.
#[derive(Parser, Debug, Clone)]
pub struct RemoveArgs {
    /// Git hook name
    pub hook: String,

    /// Remove without confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the list command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ListArgs {
    /// Show detailed information
    #[arg(short, long)]
    pub verbose: bool,

    /// Show only hooks information
    #[arg(long, conflicts_with = "config_only")]
    pub hooks_only: bool,

    /// Show only configuration information
    #[arg(long)]
    pub config_only: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Whether JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }

    /// Whether the command asked for exit-code-only output.
    pub fn is_quiet(&self) -> bool {
        matches!(&self.command, Commands::Validate(args) if args.quiet)
    }
}
