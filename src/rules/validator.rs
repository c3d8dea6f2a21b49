// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::config::Severity;
use console::{style, Style};

/// A single validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Name of the rule that reported the issue.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Reporting level taken from the rule definition.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Whether this issue fails the lint run.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error() {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} [{}]",
            prefix,
            self.message,
            code_style.apply_to(&self.code)
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n    {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.code,
            "level": u8::from(self.severity),
            "message": self.message,
            "suggestion": self.suggestion,
        })
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The linted message.
    pub message: String,
    /// Commit SHA if validating an existing commit.
    pub commit_sha: Option<String>,
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings.
    pub warnings: Vec<ValidationIssue>,
    /// Whether the message announces a breaking change.
    pub breaking: bool,
    /// Whether the message was skipped as a generated merge, revert or
    /// autosquash commit.
    pub ignored: bool,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            breaking: false,
            ignored: false,
        }
    }

    /// Record an issue under errors or warnings by its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Off => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the text report to stdout.
    pub fn print(&self) {
        print!("{}", self.render_text());
    }

    /// Render in text format.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let first_line = self.message.lines().next().unwrap_or("");
        let status = if self.ignored {
            style("-").dim()
        } else if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                out.push_str(&format!("{} {} {}\n", status, style(short_sha).cyan(), first_line));
            }
            None => out.push_str(&format!("{} input: {}\n", status, first_line)),
        }

        if self.breaking {
            out.push_str(&format!("  {}\n", style("breaking change").magenta()));
        }

        for issue in self.errors.iter().chain(&self.warnings) {
            out.push_str(&format!("  {}\n", issue.format()));
        }

        if self.issue_count() > 0 {
            out.push_str(&format!("  {}\n", style(self.summary()).dim()));
        }

        out
    }

    /// Build the JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "input": self.message,
            "breaking": self.breaking,
            "ignored": self.ignored,
            "errors": self.errors.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
