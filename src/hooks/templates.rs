// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

use crate::error::{CommitlintError, HookError, Result};
use handlebars::Handlebars;
use serde_json::json;

/// Marker line identifying hooks written by commitlint.
pub const HOOK_MARKER: &str = "# commitlint hook";

const COMMIT_MSG_TEMPLATE: &str = r#"#!/bin/sh
{{marker}}
#
# Git commit-msg hook generated by commitlint {{version}}
# Validates commit messages against .commitlintrc.json
#

git_dir="$(git rev-parse --git-dir 2>/dev/null || echo .git)"

if [ -f "$git_dir/MERGE_HEAD" ] || [ -f "$git_dir/REBASE_HEAD" ] || [ -f "$git_dir/CHERRY_PICK_HEAD" ]; then
    echo "🔄 In rebase/merge/cherry-pick mode. Skipping validation."
    exit 0
fi

commitlint={{binary}}
if ! command -v "$commitlint" >/dev/null 2>&1; then
    echo "⚠️  commitlint not found. Skipping validation."
    exit 0
fi

"$commitlint" validate --file="$1" --quiet || exit $?

exit 0
"#;

const PRE_COMMIT_TEMPLATE: &str = r#"#!/bin/sh
{{marker}}
#
# Git pre-commit hook generated by commitlint {{version}}
# Commands come from pre_commit_commands in .commitlintrc.json
#
{{#each commands}}

echo {{this.banner}}
{{this.command}}
status=$?
if [ $status -ne 0 ]; then
    echo {{this.failure}}
    exit $status
fi
{{/each}}

exit 0
"#;

const GENERIC_TEMPLATE: &str = r#"#!/bin/sh
{{marker}}
#
# Git {{hook}} hook generated by commitlint {{version}}
#

exit 0
"#;

/// A hook script commitlint knows how to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookTemplate {
    /// Runs `commitlint validate` on the pending message.
    CommitMsg,
    /// Runs the configured pre-commit commands in order.
    PreCommit,
    /// Empty script for an arbitrary hook, ready for custom commands.
    Generic(String),
}

/// Values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    /// Binary invoked by the commit-msg hook.
    pub binary: String,
    /// Labelled commands for the pre-commit hook, in run order.
    pub commands: Vec<(String, String)>,
}

impl HookTemplate {
    /// Template for a hook name. Unknown names get the generic script.
    pub fn for_hook(hook: &str) -> Self {
        match hook {
            "commit-msg" => HookTemplate::CommitMsg,
            "pre-commit" => HookTemplate::PreCommit,
            other => HookTemplate::Generic(other.to_string()),
        }
    }

    /// File name of the hook inside the hooks directory.
    pub fn filename(&self) -> &str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
            HookTemplate::PreCommit => "pre-commit",
            HookTemplate::Generic(hook) => hook,
        }
    }

    /// Render the script.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(true);

        let (template, data) = match self {
            HookTemplate::CommitMsg => (
                COMMIT_MSG_TEMPLATE,
                json!({
                    "marker": HOOK_MARKER,
                    "version": crate::version::VERSION,
                    "binary": shell_quote(&context.binary),
                }),
            ),
            HookTemplate::PreCommit => {
                let commands: Vec<_> = context
                    .commands
                    .iter()
                    .map(|(label, command)| {
                        json!({
                            "banner": shell_quote(&format!("🔍 {}...", label)),
                            "failure": shell_quote(&format!("❌ {} failed", label)),
                            "command": command,
                        })
                    })
                    .collect();
                (
                    PRE_COMMIT_TEMPLATE,
                    json!({
                        "marker": HOOK_MARKER,
                        "version": crate::version::VERSION,
                        "commands": commands,
                    }),
                )
            }
            HookTemplate::Generic(hook) => (
                GENERIC_TEMPLATE,
                json!({
                    "marker": HOOK_MARKER,
                    "version": crate::version::VERSION,
                    "hook": hook,
                }),
            ),
        };

        registry.render_template(template, &data).map_err(|e| {
            CommitlintError::Hook(HookError::TemplateFailed {
                hook: self.filename().to_string(),
                message: e.to_string(),
            })
        })
    }
}

/// Quote a string for POSIX `sh` using single quotes.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Whether a hook script carries the commitlint marker.
pub fn is_commitlint_hook(content: &str) -> bool {
    content.lines().any(|line| line.trim() == HOOK_MARKER)
}

/// Insert a custom command before the script's final `exit 0`.
///
/// Scripts without a trailing `exit 0` get the command appended.
pub fn insert_custom_command(script: &str, command: &str) -> String {
    let mut lines: Vec<&str> = script.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    match lines.last() {
        Some(last) if last.trim() == "exit 0" => {
            let at = lines.len() - 1;
            for (offset, line) in ["# Custom command", command, ""].into_iter().enumerate() {
                lines.insert(at + offset, line);
            }
        }
        _ => lines.extend(["", "# Custom command", command]),
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
