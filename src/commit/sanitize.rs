// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Input cleaning applied before parsing.

/// Normalize line endings, drop control characters other than tab and
/// newline, and trim surrounding whitespace.
pub fn sanitize(message: &str) -> String {
    let normalized = message.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Decode raw bytes (e.g. a commit message file) lossily and sanitize them.
pub fn sanitize_bytes(bytes: &[u8]) -> String {
    sanitize(&String::from_utf8_lossy(bytes))
}

/// Marker git writes above the diff in `commit -v`; nothing below it is message.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// Remove the comment lines git adds to an editor-composed message.
///
/// Everything from the scissors line down is dropped, then every line
/// starting with `#`.
pub fn strip_comments(message: &str) -> String {
    message
        .lines()
        .take_while(|line| !(line.starts_with('#') && line.contains(SCISSORS)))
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings() {
        assert_eq!(sanitize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize("fe\u{0}at:\u{1b} x\u{7f}"), "feat: x");
        assert_eq!(sanitize("a\tb"), "a\tb");
    }

    #[test]
    fn test_trims() {
        assert_eq!(sanitize("\n\n  feat: x \n\t"), "feat: x");
    }

    #[test]
    fn test_invalid_utf8() {
        let cleaned = sanitize_bytes(b"feat: caf\xff\n");
        assert_eq!(cleaned, "feat: caf\u{fffd}");
    }

    #[test]
    fn test_strip_comments() {
        let editor = "feat: add thing\n\nbody\n# Please enter the commit message\n#\tmodified: a.rs\n";
        assert_eq!(strip_comments(editor), "feat: add thing\n\nbody");

        let verbose = "fix: x\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n";
        assert_eq!(strip_comments(verbose), "fix: x");

        assert_eq!(strip_comments("feat: keep #123 refs"), "feat: keep #123 refs");
    }
}
