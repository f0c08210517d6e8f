// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;

use super::sanitize::sanitize;

lazy_static! {
    /// Conventional commit header: `type(scope): subject`.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^([a-z]+)(\(([^)]+)\))?:\s*(.+)$").unwrap();

    /// Lines that open the footer region.
    static ref FOOTER_REGEXES: Vec<Regex> = vec![
        Regex::new(r"^BREAKING CHANGE:").unwrap(),
        Regex::new(r"(?i)^(Closes|Close|Closed|Fixes|Fix|Fixed|Resolves|Resolve|Resolved)\s+#\d+")
            .unwrap(),
        Regex::new(r"(?i)^(Refs|Ref)\s+#\d+").unwrap(),
        Regex::new(r"(?i)^(Co-authored-by|Signed-off-by|Reviewed-by|Acked-by|Tested-by):")
            .unwrap(),
    ];
}

/// Prefixes of messages generated by git itself, which are never linted.
const SKIP_PREFIXES: &[&str] = &["Merge ", "Revert ", "Initial commit", "fixup!", "squash!"];

/// A parsed commit message.
///
/// Parsing is total: any string yields a value. `commit_type` and `scope`
/// are only set when the header follows the conventional format; otherwise
/// the whole header becomes the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
    lines: Vec<String>,
    commit_type: Option<String>,
    scope: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    footer: Option<String>,
    footer_start: Option<usize>,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Self {
        let raw = sanitize(message);
        let lines: Vec<String> = raw.split('\n').map(str::to_string).collect();

        let mut parsed = Self {
            raw,
            lines,
            commit_type: None,
            scope: None,
            subject: None,
            body: None,
            footer: None,
            footer_start: None,
        };

        parsed.parse_header();
        parsed.parse_body_and_footer();
        parsed
    }

    fn parse_header(&mut self) {
        let header = self.lines[0].as_str();

        if let Some(captures) = HEADER_REGEX.captures(header) {
            self.commit_type = captures.get(1).map(|m| m.as_str().to_string());
            self.scope = captures
                .get(3)
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty());
            self.subject = captures.get(4).map(|m| m.as_str().to_string());
        } else if !header.is_empty() {
            self.subject = Some(header.to_string());
        }
    }

    fn parse_body_and_footer(&mut self) {
        if self.lines.len() <= 1 {
            return;
        }

        // One blank line after the header is a separator, not body.
        let start = if is_blank(&self.lines[1]) { 2 } else { 1 };

        let footer_start = (start..self.lines.len()).find(|&i| is_footer_line(&self.lines[i]));
        let body_end = footer_start.unwrap_or(self.lines.len());

        let mut body_lines: Vec<&str> = self.lines[start.min(body_end)..body_end]
            .iter()
            .map(String::as_str)
            .collect();
        while body_lines.last().is_some_and(|line| is_blank(line)) {
            body_lines.pop();
        }

        self.body = if body_lines.is_empty() {
            None
        } else {
            Some(body_lines.join("\n"))
        };
        self.footer = footer_start.map(|i| self.lines[i..].join("\n"));
        self.footer_start = footer_start;
    }

    /// The sanitized message.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sanitized message split on newlines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Commit type, if the header is conventional.
    pub fn commit_type(&self) -> Option<&str> {
        self.commit_type.as_deref()
    }

    /// Scope, if the header is conventional and has one.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Subject line (the whole header for non-conventional messages).
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Body text between header and footer.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Footer region, from the first footer line to the end.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Index into [`lines`](Self::lines) where the footer region starts.
    pub fn footer_start(&self) -> Option<usize> {
        self.footer_start
    }

    /// Whether the header follows `type(scope): subject`.
    pub fn has_valid_format(&self) -> bool {
        HEADER_REGEX.is_match(&self.lines[0])
    }

    /// Whether line 1 exists and is blank.
    pub fn has_blank_line_after_subject(&self) -> bool {
        self.lines.get(1).is_some_and(|line| is_blank(line))
    }

    /// Whether the line before the footer is blank. Vacuously true without a footer.
    pub fn has_blank_line_before_footer(&self) -> bool {
        match self.footer_start {
            None => true,
            Some(0) => false,
            Some(i) => is_blank(&self.lines[i - 1]),
        }
    }

    pub fn is_merge_commit(&self) -> bool {
        self.raw.starts_with("Merge ")
    }

    pub fn is_revert_commit(&self) -> bool {
        self.raw.starts_with("Revert ")
    }

    pub fn is_initial_commit(&self) -> bool {
        self.raw.starts_with("Initial commit")
    }

    pub fn is_fixup_commit(&self) -> bool {
        self.raw.starts_with("fixup!") || self.raw.starts_with("squash!")
    }

    /// Whether this message is generated by git and exempt from the rules.
    pub fn should_skip_validation(&self) -> bool {
        SKIP_PREFIXES.iter().any(|prefix| self.raw.starts_with(prefix))
    }

    /// Whether the footer announces a breaking change.
    pub fn is_breaking_change(&self) -> bool {
        self.footer
            .as_deref()
            .is_some_and(|f| f.lines().any(|line| line.starts_with("BREAKING CHANGE:")))
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }

    pub fn character_count(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn subject_length(&self) -> usize {
        self.subject.as_deref().map_or(0, |s| s.chars().count())
    }

    /// Copy with the type replaced.
    pub fn with_type(&self, commit_type: impl Into<String>) -> Self {
        Self {
            commit_type: Some(commit_type.into()),
            ..self.clone()
        }
    }

    /// Copy with the scope replaced.
    pub fn with_scope(&self, scope: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            ..self.clone()
        }
    }

    /// Copy with the subject replaced.
    pub fn with_subject(&self, subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..self.clone()
        }
    }

    /// Copy with the body replaced. An empty body clears it.
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            body: if body.is_empty() { None } else { Some(body) },
            ..self.clone()
        }
    }

    /// Copy with the footer replaced. An empty footer clears it.
    pub fn with_footer(&self, footer: impl Into<String>) -> Self {
        let footer = footer.into();
        Self {
            footer: if footer.is_empty() { None } else { Some(footer) },
            ..self.clone()
        }
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_footer_line(line: &str) -> bool {
    FOOTER_REGEXES.iter().any(|re| re.is_match(line))
}
