// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::config::{RuleConfig, MANAGED_HOOKS};
use crate::error::{CommitlintError, HookError, Result};
use crate::git::GitPaths;
use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{
    insert_custom_command, is_commitlint_hook, HookTemplate, TemplateContext,
};

/// Hooks that `add` accepts.
pub const VALID_HOOKS: &[&str] = &[
    "pre-commit",
    "commit-msg",
    "pre-push",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-receive",
    "post-receive",
    "update",
];

/// Longest custom command accepted by `add`.
pub const MAX_COMMAND_LENGTH: usize = 1000;

lazy_static! {
    static ref HOOK_NAME_REGEX: Regex = Regex::new(r"^[a-z-]+$").unwrap();

    static ref DANGEROUS_COMMANDS: Vec<Regex> = vec![
        Regex::new(r"rm\s+-rf\s*/").unwrap(),
        Regex::new(r">\s*/dev/s[a-z]+").unwrap(),
        Regex::new(r"curl.*\|\s*sh").unwrap(),
        Regex::new(r"wget.*\|\s*sh").unwrap(),
    ];
}

/// Installation state of a single hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookStatus {
    pub name: String,
    pub installed: bool,
    pub path: PathBuf,
    pub modified: Option<DateTime<Local>>,
}

/// Manager for git hooks.
#[derive(Debug, Clone)]
pub struct HookManager {
    hooks_dir: PathBuf,
    binary: String,
}

impl HookManager {
    /// Create a new hook manager for the repository containing the current directory.
    pub fn new() -> Result<Self> {
        let paths = GitPaths::discover_current()?;
        Ok(Self::with_hooks_dir(paths.hooks_dir()))
    }

    /// Create a hook manager for the repository containing `start`.
    pub fn discover(start: &Path) -> Result<Self> {
        let paths = GitPaths::discover(start)?;
        Ok(Self::with_hooks_dir(paths.hooks_dir()))
    }

    /// Create a hook manager over an explicit hooks directory.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Self {
        Self {
            hooks_dir,
            binary: current_binary(),
        }
    }

    /// Override the binary the commit-msg hook invokes.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Path of a hook file.
    pub fn hook_path(&self, hook: &str) -> PathBuf {
        self.hooks_dir.join(hook)
    }

    fn backup_path(&self, hook: &str) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", hook))
    }

    /// Whether a hook file exists, whoever wrote it.
    pub fn hook_exists(&self, hook: &str) -> bool {
        self.hook_path(hook).exists()
    }

    /// Whether a hook exists and was written by commitlint.
    pub fn is_installed(&self, hook: &str) -> bool {
        fs::read_to_string(self.hook_path(hook))
            .map(|content| is_commitlint_hook(&content))
            .unwrap_or(false)
    }

    /// Whether any managed hook file exists.
    pub fn has_existing_hooks(&self) -> bool {
        MANAGED_HOOKS.iter().any(|(hook, _)| self.hook_exists(hook))
    }

    /// Whether any managed hook was written by commitlint.
    pub fn has_installed_hooks(&self) -> bool {
        MANAGED_HOOKS.iter().any(|(hook, _)| self.is_installed(hook))
    }

    /// Install the hooks enabled in the configuration.
    ///
    /// Returns the names of the hooks written.
    pub fn install(&self, config: &RuleConfig) -> Result<Vec<String>> {
        self.ensure_hooks_dir()?;

        let context = TemplateContext {
            binary: self.binary.clone(),
            commands: config
                .pre_commit_commands()
                .into_iter()
                .map(|(label, command)| (label.to_string(), command.to_string()))
                .collect(),
        };

        let mut installed = Vec::new();
        for template in [HookTemplate::CommitMsg, HookTemplate::PreCommit] {
            let hook = template.filename();
            if !config.hook_enabled(hook) {
                tracing::debug!("Hook {} disabled in configuration", hook);
                continue;
            }

            let script = template.render(&context)?;
            self.backup_foreign(hook)?;
            self.write_hook(hook, &script)?;
            installed.push(hook.to_string());
        }

        Ok(installed)
    }

    /// Remove every managed hook written by commitlint, restoring backups.
    ///
    /// Returns the names of the hooks removed.
    pub fn uninstall(&self) -> Result<Vec<String>> {
        let mut removed = Vec::new();

        for (hook, _) in MANAGED_HOOKS {
            if !self.is_installed(hook) {
                continue;
            }
            self.remove_owned(hook)?;
            removed.push(hook.to_string());
        }

        Ok(removed)
    }

    /// Add a custom command to a hook, creating the hook when needed.
    pub fn add_custom(&self, hook: &str, command: &str) -> Result<PathBuf> {
        validate_hook_name(hook)?;
        validate_command(command)?;
        self.ensure_hooks_dir()?;

        let path = self.hook_path(hook);
        let script = match fs::read_to_string(&path) {
            Ok(content) if is_commitlint_hook(&content) => content,
            existing => {
                if existing.is_ok() {
                    self.backup_foreign(hook)?;
                }
                HookTemplate::Generic(hook.to_string()).render(&TemplateContext::default())?
            }
        };

        self.write_hook(hook, &insert_custom_command(&script, command))?;
        tracing::debug!("Added custom command to {} hook", hook);
        Ok(path)
    }

    /// Remove a hook written by commitlint, restoring a backup if present.
    pub fn remove_custom(&self, hook: &str) -> Result<()> {
        validate_removal_name(hook)?;

        if !self.hook_exists(hook) {
            return Err(CommitlintError::Hook(HookError::NotFound {
                hook: hook.to_string(),
            }));
        }

        if !self.is_installed(hook) {
            return Err(CommitlintError::Hook(HookError::NotOwned {
                hook: hook.to_string(),
            }));
        }

        self.remove_owned(hook)
    }

    /// Status of the managed hooks.
    pub fn status(&self) -> Vec<HookStatus> {
        MANAGED_HOOKS
            .iter()
            .map(|(hook, _)| {
                let path = self.hook_path(hook);
                let modified = fs::metadata(&path)
                    .and_then(|meta| meta.modified())
                    .ok()
                    .map(DateTime::<Local>::from);

                HookStatus {
                    name: hook.to_string(),
                    installed: self.is_installed(hook),
                    path,
                    modified,
                }
            })
            .collect()
    }

    fn ensure_hooks_dir(&self) -> Result<()> {
        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir).map_err(|e| {
                CommitlintError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }
        Ok(())
    }

    /// Move a hook we did not write out of the way.
    fn backup_foreign(&self, hook: &str) -> Result<()> {
        let path = self.hook_path(hook);
        if !path.exists() || self.is_installed(hook) {
            return Ok(());
        }

        let backup = self.backup_path(hook);
        fs::rename(&path, &backup).map_err(|e| {
            CommitlintError::Hook(HookError::InstallFailed {
                hook: hook.to_string(),
                message: format!("Failed to backup existing hook: {}", e),
            })
        })?;
        tracing::info!("Backed up existing {} hook to {:?}", hook, backup);
        Ok(())
    }

    fn write_hook(&self, hook: &str, script: &str) -> Result<()> {
        let path = self.hook_path(hook);
        let install_failed = |message: String| {
            CommitlintError::Hook(HookError::InstallFailed {
                hook: hook.to_string(),
                message,
            })
        };

        fs::write(&path, script).map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&path)
                .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms)
                .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))?;
        }

        tracing::debug!("Wrote hook {:?}", path);
        Ok(())
    }

    fn remove_owned(&self, hook: &str) -> Result<()> {
        let path = self.hook_path(hook);
        let backup = self.backup_path(hook);

        if backup.exists() {
            fs::rename(&backup, &path).map_err(|e| {
                CommitlintError::Hook(HookError::RemoveFailed {
                    hook: hook.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
            tracing::info!("Restored previous {} hook from backup", hook);
        } else {
            fs::remove_file(&path).map_err(|e| {
                CommitlintError::Hook(HookError::RemoveFailed {
                    hook: hook.to_string(),
                    message: format!("Failed to remove hook: {}", e),
                })
            })?;
        }

        Ok(())
    }
}

/// Check a hook name against the hooks `add` accepts.
pub fn validate_hook_name(hook: &str) -> Result<()> {
    if VALID_HOOKS.contains(&hook) {
        Ok(())
    } else {
        Err(CommitlintError::Hook(HookError::InvalidName {
            hook: hook.to_string(),
            valid: VALID_HOOKS.join(", "),
        }))
    }
}

/// Check a custom hook command before it is written to disk.
pub fn validate_command(command: &str) -> Result<()> {
    let invalid = |message: &str| {
        Err(CommitlintError::Hook(HookError::InvalidCommand {
            message: message.to_string(),
        }))
    };

    if command.trim().is_empty() {
        return invalid("Command cannot be empty");
    }

    if command.chars().count() > MAX_COMMAND_LENGTH {
        return invalid("Command too long (maximum 1000 characters)");
    }

    if DANGEROUS_COMMANDS.iter().any(|re| re.is_match(command)) {
        return invalid("Command contains potentially dangerous operations");
    }

    Ok(())
}

/// Check a hook name passed to `remove` before it is joined onto the hooks directory.
pub fn validate_removal_name(hook: &str) -> Result<()> {
    if hook.trim().is_empty() {
        return Err(CommitlintError::InvalidArgument(
            "Hook name cannot be empty".to_string(),
        ));
    }

    if !HOOK_NAME_REGEX.is_match(hook) {
        return Err(CommitlintError::InvalidArgument(
            "Hook name must contain only lowercase letters and hyphens".to_string(),
        ));
    }

    Ok(())
}

/// The running executable, falling back to a `PATH` lookup.
fn current_binary() -> String {
    std::env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "commitlint".to_string())
}
