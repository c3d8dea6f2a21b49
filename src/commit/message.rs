// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CommitError, LintError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the conventional commit header.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w*)(?:\((?P<scope>[^()\r\n]*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).unwrap();

    /// Regex for a footer line: a breaking change note, a hyphenated git
    /// trailer (`Signed-off-by: ...`) or an issue reference (`Closes #12`).
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[ -]CHANGE: \S|[A-Za-z]\w*(?:-\w+)+: \S|[A-Za-z][\w-]*:? #\d)"
    ).unwrap();

    /// Headers git and hosting services generate, skipped by the linter.
    static ref IGNORED_HEADERS: Vec<Regex> = [
        r"^Merge pull request ",
        r"^Merge (?:remote-tracking )?branch ",
        r"^Merge tag ",
        r"^Merge .+ into .+",
        r"^Merged .+ (?:in|into) .+",
        r"^Merged PR .+: .+",
        r"^Auto-merged .+ into .+",
        r"^Automatic merge",
        r#"^[Rr]evert ""#,
        r"^(?:amend|fixup|squash)! ",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Marker git places above the diff in verbose commit templates.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// A parsed commit message.
///
/// Header parts are `None` when the header does not follow the
/// `type(scope)!: subject` format, so rules can report on them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitMessage {
    /// Cleaned message text.
    pub raw: String,
    /// First line.
    pub header: String,
    /// Commit type (feat, fix, etc.).
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (trailers, breaking change notes).
    pub footer: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
    /// Whether a blank line separates the header from the body.
    pub body_leading_blank: bool,
    /// Whether a blank line precedes the footer.
    pub footer_leading_blank: bool,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Result<Self> {
        let cleaned = clean(message);
        if cleaned.is_empty() {
            return Err(LintError::Commit(CommitError::EmptyMessage));
        }

        let lines: Vec<&str> = cleaned.lines().collect();
        let header = lines[0].to_string();
        let rest = &lines[1..];

        let mut parsed = Self {
            raw: cleaned.clone(),
            header: header.clone(),
            ..Default::default()
        };

        if let Some(captures) = HEADER_REGEX.captures(&header) {
            parsed.commit_type = non_empty(captures.name("type").map(|m| m.as_str()));
            parsed.scope = non_empty(captures.name("scope").map(|m| m.as_str()));
            parsed.subject = non_empty(captures.name("subject").map(|m| m.as_str()));
            parsed.is_breaking = captures.name("breaking").is_some();
        }

        let footer_start = find_footer_start(rest);

        let body_lines = trim_blank_lines(&rest[..footer_start]);
        if !body_lines.is_empty() {
            parsed.body = Some(body_lines.join("\n"));
            parsed.body_leading_blank = rest.first().map_or(false, |l| l.trim().is_empty());
        }

        if footer_start < rest.len() {
            parsed.footer = Some(rest[footer_start..].join("\n"));
            parsed.footer_leading_blank =
                footer_start > 0 && rest[footer_start - 1].trim().is_empty();
            if rest[footer_start..]
                .iter()
                .any(|l| l.starts_with("BREAKING CHANGE") || l.starts_with("BREAKING-CHANGE"))
            {
                parsed.is_breaking = true;
            }
        }

        Ok(parsed)
    }

    /// Whether the header is one git generates for merges, reverts or
    /// autosquash commits.
    pub fn is_ignored(&self) -> bool {
        IGNORED_HEADERS.iter().any(|re| re.is_match(&self.header))
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}

/// Drop comment lines and everything below the scissors line, then trim
/// surrounding blank lines.
fn clean(message: &str) -> String {
    let mut kept = Vec::new();
    for line in message.lines() {
        if line.starts_with('#') {
            if line.contains(SCISSORS) {
                break;
            }
            continue;
        }
        kept.push(line.trim_end());
    }
    trim_blank_lines(&kept).join("\n")
}

fn trim_blank_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].to_vec()
}

/// Index in `rest` where the footer begins, or `rest.len()` if there is none.
///
/// The footer is the longest run of trailer lines that ends the last
/// paragraph.
fn find_footer_start(rest: &[&str]) -> usize {
    let paragraph_start = rest
        .iter()
        .rposition(|l| l.trim().is_empty())
        .map_or(0, |i| i + 1);

    let mut start = rest.len();
    while start > paragraph_start && TRAILER_REGEX.is_match(rest[start - 1]) {
        start -= 1;
    }
    start
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let msg = CommitMessage::parse("feat(core): add new feature").unwrap();
        assert_eq!(msg.commit_type.as_deref(), Some("feat"));
        assert_eq!(msg.scope.as_deref(), Some("core"));
        assert_eq!(msg.subject.as_deref(), Some("add new feature"));
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_without_scope() {
        let msg = CommitMessage::parse("fix: handle empty input").unwrap();
        assert_eq!(msg.commit_type.as_deref(), Some("fix"));
        assert!(msg.scope.is_none());
    }

    #[test]
    fn test_parse_breaking_marker() {
        let msg = CommitMessage::parse("feat(api)!: drop v1 endpoints").unwrap();
        assert!(msg.is_breaking);
        assert_eq!(msg.scope.as_deref(), Some("api"));
    }

    #[test]
    fn test_parse_non_conventional_header() {
        let msg = CommitMessage::parse("Update readme").unwrap();
        assert!(msg.commit_type.is_none());
        assert!(msg.subject.is_none());
        assert_eq!(msg.header, "Update readme");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            CommitMessage::parse("  \n\n"),
            Err(LintError::Commit(CommitError::EmptyMessage))
        ));
        assert!(CommitMessage::parse("# only a comment\n").is_err());
    }

    #[test]
    fn test_parse_body() {
        let msg = CommitMessage::parse("fix: fix bug\n\nThis is the body\nacross lines").unwrap();
        assert_eq!(msg.body.as_deref(), Some("This is the body\nacross lines"));
        assert!(msg.body_leading_blank);
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_body_without_blank_line() {
        let msg = CommitMessage::parse("fix: fix bug\nbody right away").unwrap();
        assert_eq!(msg.body.as_deref(), Some("body right away"));
        assert!(!msg.body_leading_blank);
    }

    #[test]
    fn test_parse_footer() {
        let msg = CommitMessage::parse(
            "feat: add login\n\nUse the new session store.\n\nRefs #12\nReviewed-by: Ana",
        )
        .unwrap();
        assert_eq!(msg.body.as_deref(), Some("Use the new session store."));
        assert_eq!(msg.footer.as_deref(), Some("Refs #12\nReviewed-by: Ana"));
        assert!(msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_footer_glued_to_body() {
        let msg = CommitMessage::parse("feat: add login\n\nSome text\nCloses #4").unwrap();
        assert_eq!(msg.body.as_deref(), Some("Some text"));
        assert_eq!(msg.footer.as_deref(), Some("Closes #4"));
        assert!(!msg.footer_leading_blank);
    }

    #[test]
    fn test_prose_paragraph_is_not_a_footer() {
        let msg = CommitMessage::parse(
            "perf: warm caches\n\nFirst paragraph.\n\nNote: caches are flushed on startup",
        )
        .unwrap();
        assert_eq!(
            msg.body.as_deref(),
            Some("First paragraph.\n\nNote: caches are flushed on startup")
        );
        assert!(msg.footer.is_none());
    }

    #[test]
    fn test_parse_issue_reference_with_colon() {
        let msg = CommitMessage::parse("fix: crash on save\n\nFixes: #31").unwrap();
        assert!(msg.body.is_none());
        assert_eq!(msg.footer.as_deref(), Some("Fixes: #31"));
    }

    #[test]
    fn test_parse_breaking_footer() {
        let msg =
            CommitMessage::parse("refactor: rename config\n\nBREAKING CHANGE: key renamed").unwrap();
        assert!(msg.is_breaking);
        assert!(msg.body.is_none());
        assert_eq!(msg.footer.as_deref(), Some("BREAKING CHANGE: key renamed"));
    }

    #[test]
    fn test_strips_comments_and_scissors() {
        let raw = "docs: fix typo\n\n# Please enter the commit message\n\
                   # ------------------------ >8 ------------------------\n\
                   diff --git a/x b/x\n";
        let msg = CommitMessage::parse(raw).unwrap();
        assert_eq!(msg.raw, "docs: fix typo");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_generated_headers_are_ignored() {
        for header in [
            "Merge branch 'feature/login'",
            "Merge branch 'main' of github.com:acme/app",
            "Merge remote-tracking branch 'origin/main'",
            "Merge pull request #42 from acme/login",
            "Merge tag 'v1.2.0'",
            "Merge 3f2a1c0 into 9b8e7d6",
            "Merged feature/login into main",
            "Merged PR 17: add login",
            "Auto-merged src/lib.rs into main",
            "Automatic merge from release/1.2",
            "Revert \"feat: add login\"",
            "revert \"fix: typo\"",
            "fixup! feat: add login",
            "squash! feat: add login",
            "amend! feat: add login",
        ] {
            let msg = CommitMessage::parse(header).unwrap();
            assert!(msg.is_ignored(), "{} should be ignored", header);
        }
    }

    #[test]
    fn test_regular_headers_are_not_ignored() {
        for header in [
            "feat: add login",
            "revert: drop cache layer",
            "Merge",
            "fix: merge branch names correctly",
            "Update readme",
        ] {
            let msg = CommitMessage::parse(header).unwrap();
            assert!(!msg.is_ignored(), "{} should be linted", header);
        }
    }

    #[test]
    fn test_header_len_counts_chars() {
        let msg = CommitMessage::parse("fix: café").unwrap();
        assert_eq!(msg.header_len(), 9);
    }
}
