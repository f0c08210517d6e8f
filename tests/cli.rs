// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use git2::Repository;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn commitlint(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commitlint").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn setup_test_repo() -> (TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    (dir, repo)
}

fn hooks_dir(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join(".git").join("hooks")
}

#[test]
fn test_validate_valid_message() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .args(["validate", "feat(auth): add login"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Commit message is valid!"))
        .stdout(predicate::str::contains("Type: feat"))
        .stdout(predicate::str::contains("Scope: auth"));
}

#[test]
fn test_validate_invalid_message() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .args(["validate", "Add login"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Commit message validation failed!"))
        .stdout(predicate::str::contains("1. Commit message must follow conventional commit format"))
        .stdout(predicate::str::contains("2. Commit type is required"))
        .stdout(predicate::str::contains("feat: add new user authentication"));
}

#[test]
fn test_validate_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".commitlintrc.json"),
        r#"{ "rules": { "type": { "allowed": ["build", "ci"] } } }"#,
    )
    .unwrap();

    commitlint(dir.path())
        .args(["validate", "feat: add login"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Invalid commit type \"feat\". Allowed types: build, ci",
        ))
        .stdout(predicate::str::contains("ci: resolve login validation issue"));
}

#[test]
fn test_validate_explicit_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("strict.json");
    fs::write(&config, r#"{ "rules": { "scope": { "required": true } } }"#).unwrap();

    commitlint(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["validate", "feat: add login"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Commit scope is required"));
}

#[test]
fn test_validate_empty_message() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .args(["validate", "   "])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No commit message provided"));
}

#[test]
fn test_validate_quiet() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .args(["validate", "--quiet", "not conventional"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_json_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = commitlint(dir.path())
        .args(["--format", "json", "validate", "fix(api): handle timeouts."])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["type"], "fix");
    assert_eq!(json["scope"], "api");
    assert_eq!(json["errors"][0], "Subject must not end with a period");
}

#[test]
fn test_validate_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let message = dir.path().join("MSG");
    fs::write(&message, "docs: update readme\n\n# Please enter the commit message\n").unwrap();

    commitlint(dir.path())
        .arg("validate")
        .arg(format!("--file={}", message.display()))
        .assert()
        .code(0);
}

#[test]
fn test_validate_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .args(["validate", "--file", "does-not-exist"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_validate_reads_commit_editmsg() {
    let (dir, _repo) = setup_test_repo();
    fs::write(dir.path().join(".git/COMMIT_EDITMSG"), "chore: bump deps\n").unwrap();

    commitlint(dir.path())
        .arg("validate")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Type: chore"));
}

#[test]
fn test_validate_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".commitlintrc.json"), "[1, 2, 3]").unwrap();

    commitlint(dir.path())
        .args(["validate", "feat: add login"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Configuration must be a JSON object"));
}

#[test]
fn test_validate_skips_merge_commits() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .args(["validate", "Merge branch 'feature' into main"])
        .assert()
        .code(0);
}

#[test]
fn test_install_and_uninstall() {
    let (dir, _repo) = setup_test_repo();

    commitlint(dir.path())
        .args(["install", "--force"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Installed commit-msg hook"))
        .stdout(predicate::str::contains("Created default configuration file"));

    let hook = fs::read_to_string(hooks_dir(&dir).join("commit-msg")).unwrap();
    assert!(hook.contains("# commitlint hook"));
    assert!(hook.contains("validate --file=\"$1\" --quiet"));
    assert!(dir.path().join(".commitlintrc.json").exists());

    commitlint(dir.path())
        .args(["uninstall", "--force"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Removed commit-msg hook"));

    assert!(!hooks_dir(&dir).join("commit-msg").exists());
    assert!(dir.path().join(".commitlintrc.json").exists());
}

#[test]
fn test_install_skip_config_restores_foreign_hook() {
    let (dir, _repo) = setup_test_repo();
    fs::create_dir_all(hooks_dir(&dir)).unwrap();
    fs::write(hooks_dir(&dir).join("commit-msg"), "#!/bin/sh\necho mine\n").unwrap();

    commitlint(dir.path())
        .args(["install", "--force", "--skip-config"])
        .assert()
        .code(0);

    assert!(!dir.path().join(".commitlintrc.json").exists());
    assert!(hooks_dir(&dir).join("commit-msg.backup").exists());

    commitlint(dir.path())
        .args(["uninstall", "--force"])
        .assert()
        .code(0);

    let restored = fs::read_to_string(hooks_dir(&dir).join("commit-msg")).unwrap();
    assert!(restored.contains("echo mine"));
}

#[test]
fn test_install_creates_explicit_config() {
    let (dir, _repo) = setup_test_repo();
    let config = dir.path().join("lint.json");

    commitlint(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["install", "--force"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Created default configuration file"))
        .stdout(predicate::str::contains("Installed commit-msg hook"));

    assert!(config.exists());
    assert!(!dir.path().join(".commitlintrc.json").exists());
}

#[test]
fn test_uninstall_without_hooks() {
    let (dir, _repo) = setup_test_repo();

    commitlint(dir.path())
        .args(["uninstall", "--force"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No commitlint hooks found to remove"));
}

#[test]
fn test_install_outside_repository() {
    let dir = tempfile::tempdir().unwrap();
    if Repository::discover(dir.path()).is_ok() {
        return;
    }

    commitlint(dir.path())
        .args(["install", "--force"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Not a Git repository"));
}

#[test]
fn test_add_and_remove_custom_hook() {
    let (dir, _repo) = setup_test_repo();

    commitlint(dir.path())
        .args(["add", "pre-push", "cargo test", "--force"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Custom hook \"pre-push\" added successfully!"));

    let hook = fs::read_to_string(hooks_dir(&dir).join("pre-push")).unwrap();
    assert!(hook.contains("# Custom command\ncargo test\n"));

    commitlint(dir.path())
        .args(["remove", "pre-push", "--force"])
        .assert()
        .code(0);

    assert!(!hooks_dir(&dir).join("pre-push").exists());
}

#[test]
fn test_add_rejects_invalid_input() {
    let (dir, _repo) = setup_test_repo();

    commitlint(dir.path())
        .args(["add", "pre-everything", "echo hi", "--force"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid hook name \"pre-everything\""));

    commitlint(dir.path())
        .args(["add", "pre-commit", "curl https://example.com/x | sh", "--force"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("potentially dangerous"));

    assert!(!hooks_dir(&dir).join("pre-commit").exists());
}

#[test]
fn test_remove_errors() {
    let (dir, _repo) = setup_test_repo();

    commitlint(dir.path())
        .args(["remove", "pre-push", "--force"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Hook \"pre-push\" does not exist"));

    commitlint(dir.path())
        .args(["remove", "Pre_Push", "--force"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("lowercase letters and hyphens"));

    fs::create_dir_all(hooks_dir(&dir)).unwrap();
    fs::write(hooks_dir(&dir).join("post-merge"), "#!/bin/sh\necho mine\n").unwrap();

    commitlint(dir.path())
        .args(["remove", "post-merge", "--force"])
        .assert()
        .code(5);
    assert!(hooks_dir(&dir).join("post-merge").exists());
}

#[test]
fn test_list() {
    let (dir, _repo) = setup_test_repo();

    commitlint(dir.path())
        .args(["install", "--force"])
        .assert()
        .code(0);

    commitlint(dir.path())
        .args(["list", "--verbose"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("commit-msg"))
        .stdout(predicate::str::contains("Summary: 1 of 3 hooks installed"))
        .stdout(predicate::str::contains("Hook Configuration:"));

    commitlint(dir.path())
        .args(["list", "--config-only"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Allowed types: feat, fix"))
        .stdout(predicate::str::contains("Scope: Optional"))
        .stdout(predicate::str::contains("Git Hooks Status").not());
}

#[test]
fn test_list_json() {
    let (dir, _repo) = setup_test_repo();

    let output = commitlint(dir.path())
        .args(["--format", "json", "list", "--hooks-only"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["hooks"].as_array().unwrap().len(), 3);
    assert_eq!(json["hooks"][0]["name"], "commit-msg");
    assert_eq!(json["hooks"][0]["installed"], false);
    assert!(json.get("config").is_none());
}

#[test]
fn test_init() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path()).arg("init").assert().code(0);

    let content = fs::read_to_string(dir.path().join(".commitlintrc.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["rules"]["subject"]["max_length"], 100);

    commitlint(dir.path())
        .arg("init")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("--force"));

    commitlint(dir.path()).args(["init", "--force"]).assert().code(0);
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path())
        .arg("version")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with(format!(
            "commitlint {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_command() {
    let dir = tempfile::tempdir().unwrap();

    commitlint(dir.path()).arg("frobnicate").assert().code(5);
}
