// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::commit::{sanitize_bytes, strip_comments};
use crate::config::{self, RuleConfig};
use crate::error::{CommitlintError, ConfigError, ExitCode, HookError, Result, ResultExt};
use crate::git::GitPaths;
use crate::hooks::{self, HookManager};
use crate::rules::{self, ValidationResult};

use super::args::{
    AddArgs, Cli, Commands, InitArgs, InstallArgs, ListArgs, RemoveArgs, UninstallArgs,
    ValidateArgs,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Validate(args) => run_validate(&cli, args),
        Commands::Install(args) => run_install(&cli, args),
        Commands::Uninstall(args) => run_uninstall(args),
        Commands::Add(args) => run_add(args),
        Commands::Remove(args) => run_remove(args),
        Commands::List(args) => run_list(&cli, args),
        Commands::Init(args) => run_init(&cli, args),
        Commands::Version => run_version(),
    }
}

/// Load configuration from `--config` or the working directory.
fn load_config(cli: &Cli) -> Result<RuleConfig> {
    match &cli.config {
        Some(path) => RuleConfig::load_from(path),
        None => RuleConfig::load(),
    }
}

/// Ask a yes/no question, defaulting to no.
fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Run the validate command.
fn run_validate(cli: &Cli, args: &ValidateArgs) -> Result<ExitCode> {
    tracing::debug!("Running validate command with args: {:?}", args);

    let message = read_commit_message(args)?;
    if message.trim().is_empty() {
        tracing::info!("Empty commit message provided");
        if !args.quiet {
            if cli.is_json() {
                ValidationResult::error("No commit message provided").print_json();
            } else {
                println!("{} No commit message provided", style("✗").red().bold());
            }
        }
        return Ok(ExitCode::ValidationFailed);
    }

    let config = load_config(cli)?;
    let result = rules::validate(&message, &config);
    tracing::debug!(
        "Validation completed: valid={} errors={:?} type={:?} scope={:?}",
        result.is_valid(),
        result.errors(),
        result.commit_type(),
        result.scope()
    );

    if !args.quiet {
        if cli.is_json() {
            result.print_json();
        } else if result.is_valid() {
            print_valid(&result);
        } else {
            print_invalid(&result, &config, args.verbose_errors);
        }
    }

    Ok(if result.is_valid() {
        ExitCode::Success
    } else {
        ExitCode::ValidationFailed
    })
}

/// Message from the argument, else `--file`, else the pending `COMMIT_EDITMSG`.
fn read_commit_message(args: &ValidateArgs) -> Result<String> {
    if let Some(message) = &args.message {
        return Ok(message.trim().to_string());
    }

    let path = match &args.file {
        Some(path) => path.clone(),
        None => GitPaths::discover_current()?.commit_editmsg(),
    };
    read_message_file(&path)
}

fn read_message_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CommitlintError::InvalidArgument(format!(
            "File not found: {}",
            path.display()
        )));
    }

    tracing::debug!("Reading commit message from {:?}", path);
    let bytes = std::fs::read(path).context(format!("Failed to read {}", path.display()))?;
    Ok(strip_comments(&sanitize_bytes(&bytes)).trim().to_string())
}

fn print_valid(result: &ValidationResult) {
    println!("{} Commit message is valid!", style("✓").green().bold());

    if let Some(commit_type) = result.commit_type() {
        println!("  Type: {}", style(commit_type).cyan());
    }
    if let Some(scope) = result.scope() {
        println!("  Scope: {}", style(scope).cyan());
    }
}

fn print_invalid(result: &ValidationResult, config: &RuleConfig, verbose: bool) {
    println!("{} Commit message validation failed!", style("✗").red().bold());
    println!();
    println!("{}", style("🔍 Issues Found:").bold());
    println!("{}", result.format_errors());

    if verbose {
        println!();
        println!(
            "{} Total errors found: {}",
            style("ℹ").blue(),
            result.error_count()
        );
    }

    println!();
    println!("{}", style("💡 Examples of valid commit messages:").bold());
    for example in example_messages(config) {
        println!("  • {}", example);
    }
    println!();
    println!(
        "{}",
        style(format!(
            "For more information, check your {} configuration file.",
            config::CONFIG_FILE
        ))
        .dim()
    );
}

/// Example headers built from the first two allowed types.
fn example_messages(config: &RuleConfig) -> Vec<String> {
    let allowed = config.allowed_types();
    let first = allowed.first().map_or("feat", String::as_str);
    let second = allowed.get(1).map_or("fix", String::as_str);

    vec![
        format!("{}: add new user authentication", first),
        format!("{}: resolve login validation issue", second),
        format!("{}(auth): implement JWT token validation", first),
    ]
}

/// Run the install command.
fn run_install(cli: &Cli, args: &InstallArgs) -> Result<ExitCode> {
    tracing::debug!("Running install command with args: {:?}", args);

    let manager = HookManager::new()?;

    if !args.force && manager.has_existing_hooks() {
        println!("{} Git hooks already exist!", style("⚠").yellow().bold());
        if !confirm("Do you want to overwrite existing hooks?")? {
            return Err(CommitlintError::Cancelled);
        }
    }

    if !args.skip_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => config::config_path()?,
        };
        if path.exists() {
            println!("📝 Using existing configuration file");
        } else {
            config::write_default_config(&path)?;
            println!(
                "📝 Created default configuration file: {}",
                path.display()
            );
        }
    }

    let config = load_config(cli)?;
    let installed = manager.install(&config)?;
    for hook in &installed {
        println!("{} Installed {} hook", style("✓").green().bold(), hook);
    }
    tracing::info!("Installed hooks: {:?}", installed);

    println!();
    println!("{} Git hooks installed successfully!", style("✓").green().bold());
    println!(
        "  {}",
        style(format!(
            "Customize your commit rules in {}",
            config::CONFIG_FILE
        ))
        .dim()
    );
    println!();
    println!("{}", style("🚀 Quick Start").bold());
    println!("  Invalid commit: git commit -m \"bad commit message\"");
    println!("  Valid commit:   git commit -m \"feat: add new validation feature\"");
    println!("  With scope:     git commit -m \"fix(auth): resolve login validation issue\"");

    Ok(ExitCode::Success)
}

/// Run the uninstall command.
fn run_uninstall(args: &UninstallArgs) -> Result<ExitCode> {
    tracing::debug!("Running uninstall command with args: {:?}", args);

    let manager = HookManager::new()?;

    if !manager.has_installed_hooks() {
        return Err(CommitlintError::Hook(HookError::NothingInstalled));
    }

    if !args.force && !confirm("Are you sure you want to remove commitlint hooks?")? {
        return Err(CommitlintError::Cancelled);
    }

    let removed = manager.uninstall()?;
    for hook in &removed {
        println!("{} Removed {} hook", style("✓").green().bold(), hook);
    }
    println!(
        "  {}",
        style(format!(
            "Configuration file ({}) was preserved.",
            config::CONFIG_FILE
        ))
        .dim()
    );

    Ok(ExitCode::Success)
}

/// Run the add command.
fn run_add(args: &AddArgs) -> Result<ExitCode> {
    tracing::debug!("Running add command with args: {:?}", args);

    let manager = HookManager::new()?;
    hooks::validate_hook_name(&args.hook)?;
    hooks::validate_command(&args.command)?;

    if !args.force
        && manager.hook_exists(&args.hook)
        && !confirm(&format!("Hook \"{}\" already exists. Overwrite?", args.hook))?
    {
        return Err(CommitlintError::Cancelled);
    }

    let path = manager.add_custom(&args.hook, &args.command)?;
    tracing::info!("Custom hook {} added", args.hook);

    println!(
        "{} Custom hook \"{}\" added successfully!",
        style("✓").green().bold(),
        args.hook
    );
    println!("  Hook name: {}", args.hook);
    println!("  Command:   {}", args.command);
    println!("  Hook file: {}", path.display());

    Ok(ExitCode::Success)
}

/// Run the remove command.
fn run_remove(args: &RemoveArgs) -> Result<ExitCode> {
    tracing::debug!("Running remove command with args: {:?}", args);

    let manager = HookManager::new()?;
    hooks::validate_removal_name(&args.hook)?;

    if !manager.hook_exists(&args.hook) {
        return Err(CommitlintError::Hook(HookError::NotFound {
            hook: args.hook.clone(),
        }));
    }

    if !args.force
        && !confirm(&format!(
            "Are you sure you want to remove hook \"{}\"?",
            args.hook
        ))?
    {
        return Err(CommitlintError::Cancelled);
    }

    manager.remove_custom(&args.hook)?;
    tracing::info!("Custom hook {} removed", args.hook);

    println!(
        "{} Custom hook \"{}\" removed successfully!",
        style("✓").green().bold(),
        args.hook
    );

    Ok(ExitCode::Success)
}

/// Run the list command.
fn run_list(cli: &Cli, args: &ListArgs) -> Result<ExitCode> {
    tracing::debug!("Running list command with args: {:?}", args);

    let manager = HookManager::new()?;
    let config_file = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };

    if cli.is_json() {
        print_list_json(cli, args, &manager, &config_file)?;
        return Ok(ExitCode::Success);
    }

    if !args.config_only {
        print_hooks_status(&manager, args.verbose);
    }

    if !args.hooks_only {
        if !args.config_only {
            println!();
        }
        print_config_status(cli, &config_file, args.verbose);
    }

    Ok(ExitCode::Success)
}

fn print_hooks_status(manager: &HookManager, verbose: bool) {
    println!("{}", style("🪝 Git Hooks Status").bold());

    let statuses = manager.status();
    let installed = statuses.iter().filter(|s| s.installed).count();

    for status in &statuses {
        let marker = if status.installed {
            style("✓ Installed    ").green()
        } else {
            style("✗ Not Installed").red()
        };
        let mut line = format!("  {:<12} {}", status.name, marker);

        if verbose && status.installed {
            line.push_str(&format!("  {}", status.path.display()));
            if let Some(modified) = status.modified {
                line.push_str(&format!(
                    "  {}",
                    style(modified.format("%Y-%m-%d %H:%M:%S")).dim()
                ));
            }
        }
        println!("{}", line);
    }

    println!(
        "  {}",
        style(format!(
            "Summary: {} of {} hooks installed",
            installed,
            statuses.len()
        ))
        .dim()
    );
}

fn print_config_status(cli: &Cli, config_file: &Path, verbose: bool) {
    println!("{}", style("⚙️  Configuration").bold());

    if !config_file.exists() {
        println!(
            "  {} No configuration file found ({})",
            style("⚠").yellow().bold(),
            config::CONFIG_FILE
        );
        println!(
            "  {}",
            style("Run \"commitlint install\" to create a default configuration.").dim()
        );
        return;
    }

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            println!(
                "  {} Failed to load configuration: {}",
                style("✗").red().bold(),
                e
            );
            return;
        }
    };

    println!("  Config file: {}", config_file.display());

    if verbose {
        print_detailed_config(&config);
        return;
    }

    println!("  Allowed types: {}", config.allowed_types().join(", "));
    if config.scope_required() {
        println!("  Scope: Required");
        if !config.allowed_scopes().is_empty() {
            println!("  Allowed scopes: {}", config.allowed_scopes().join(", "));
        }
    } else {
        println!("  Scope: Optional");
    }
}

fn print_detailed_config(config: &RuleConfig) {
    let rules = serde_json::to_value(&config.rules).unwrap_or_default();
    if let Some(rules) = rules.as_object() {
        println!("  {}", style("Rules:").cyan());
        for (name, rule) in rules {
            println!("    {}: {}", name, rule);
        }
    }

    if let Some(patterns) = config.patterns.as_ref().filter(|p| !p.is_empty()) {
        println!("  {}", style("Patterns:").cyan());
        for (name, pattern) in patterns {
            match pattern.as_str() {
                Some(pattern) => println!("    {}: {}", name, pattern),
                None => println!("    {}: {}", name, pattern),
            }
        }
    }

    println!("  {}", style("Hook Configuration:").cyan());
    for (hook, _) in config::MANAGED_HOOKS {
        let state = if config.hook_enabled(hook) {
            "Enabled"
        } else {
            "Disabled"
        };
        println!("    {}: {}", hook, state);
    }

    let commands = config.pre_commit_commands();
    if !commands.is_empty() {
        println!("  {}", style("Pre-commit Commands:").cyan());
        for (label, command) in commands {
            println!("    {}: {}", label, command);
        }
    }
}

fn print_list_json(
    cli: &Cli,
    args: &ListArgs,
    manager: &HookManager,
    config_file: &Path,
) -> Result<()> {
    let mut output = serde_json::Map::new();

    if !args.config_only {
        let hooks: Vec<_> = manager
            .status()
            .into_iter()
            .map(|status| {
                json!({
                    "name": status.name,
                    "installed": status.installed,
                    "path": status.path.display().to_string(),
                    "modified": status.modified.map(|m| m.to_rfc3339()),
                })
            })
            .collect();
        output.insert("hooks".to_string(), json!(hooks));
    }

    if !args.hooks_only {
        let exists = config_file.exists();
        let rules = if exists {
            Some(serde_json::to_value(load_config(cli)?).unwrap_or_default())
        } else {
            None
        };
        output.insert(
            "config".to_string(),
            json!({
                "path": config_file.display().to_string(),
                "exists": exists,
                "settings": rules,
            }),
        );
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_default()
    );
    Ok(())
}

/// Run the init command.
fn run_init(cli: &Cli, args: &InitArgs) -> Result<ExitCode> {
    tracing::debug!("Running init command with args: {:?}", args);

    let path: PathBuf = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };

    if path.exists() && !args.force {
        return Err(CommitlintError::Config(ConfigError::WriteFailed {
            message: format!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            ),
        }));
    }

    config::write_default_config(&path)?;
    println!("{} Created {}", style("✓").green().bold(), path.display());

    Ok(ExitCode::Success)
}

/// Run the version command.
fn run_version() -> Result<ExitCode> {
    println!("commitlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_example_messages_use_allowed_types() {
        let config = RuleConfig::from_value(json!({
            "rules": { "type": { "allowed": ["build", "ci", "docs"] } }
        }));
        assert_eq!(
            example_messages(&config),
            [
                "build: add new user authentication",
                "ci: resolve login validation issue",
                "build(auth): implement JWT token validation",
            ]
        );
    }

    #[test]
    fn test_example_messages_fallback() {
        let examples = example_messages(&RuleConfig::default());
        assert!(examples[0].starts_with("feat: "));
        assert!(examples[1].starts_with("fix: "));

        let single = RuleConfig::from_value(json!({
            "rules": { "type": { "allowed": ["chore"] } }
        }));
        let examples = example_messages(&single);
        assert!(examples[0].starts_with("chore: "));
        assert!(examples[1].starts_with("fix: "));
    }

    #[test]
    fn test_read_commit_message_from_argument() {
        let args = ValidateArgs {
            message: Some("  feat: add thing  ".to_string()),
            ..Default::default()
        };
        assert_eq!(read_commit_message(&args).unwrap(), "feat: add thing");
    }

    #[test]
    fn test_read_commit_message_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(
            &path,
            "fix: handle errors\r\n\r\n# Please enter the commit message\r\n",
        )
        .unwrap();

        let args = ValidateArgs {
            file: Some(path),
            ..Default::default()
        };
        assert_eq!(read_commit_message(&args).unwrap(), "fix: handle errors");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            file: Some(dir.path().join("missing")),
            ..Default::default()
        };
        assert!(matches!(
            read_commit_message(&args),
            Err(CommitlintError::InvalidArgument(_))
        ));
    }
}
