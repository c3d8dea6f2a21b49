// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::{self, LintConfig, ResolvedRules};
use crate::error::Result;
use crate::git;

use super::builtin::builtin_rule;
use super::validator::{ValidationIssue, ValidationResult};

/// Rule engine for validating commit messages.
///
/// The configuration is resolved once on construction and read-only after.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: ResolvedRules,
}

impl RuleEngine {
    /// Create a new rule engine from a configuration.
    pub fn new(config: LintConfig) -> Result<Self> {
        let rules = config::resolve(&config)?;
        tracing::debug!("Resolved {} rules", rules.len());
        Ok(Self { rules })
    }

    /// The effective rule table.
    pub fn rules(&self) -> &ResolvedRules {
        &self.rules
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.raw.clone());
        result.breaking = message.is_breaking;

        if message.is_ignored() {
            tracing::debug!("Skipping generated commit: {}", message.header);
            result.ignored = true;
            return result;
        }

        for (name, rule) in &self.rules {
            if !rule.is_enabled() {
                continue;
            }
            let Some(check) = builtin_rule(name) else {
                continue;
            };

            if let Some(violation) = check(message, rule.applicability, rule.value.as_ref()) {
                tracing::debug!("Rule {} failed: {}", name, violation.message);
                result.push(ValidationIssue {
                    code: name.clone(),
                    message: violation.message,
                    suggestion: violation.suggestion,
                    severity: rule.severity,
                });
            }
        }

        result
    }

    /// Validate a commit message string.
    pub fn validate_string(&self, message: &str) -> Result<ValidationResult> {
        let parsed = CommitMessage::parse(message)?;
        Ok(self.validate(&parsed))
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<ValidationResult> {
        let (sha, message) = git::get_commit(reference)?;
        let mut result = self.validate_string(&message)?;
        result.commit_sha = Some(sha);
        Ok(result)
    }

    /// Check every commit reachable from `to` but not from `from`.
    pub fn check_range(&self, from: &str, to: &str) -> Result<Vec<ValidationResult>> {
        let commits = git::get_commit_range(from, to)?;
        let mut results = Vec::with_capacity(commits.len());

        for (sha, message) in commits {
            let mut result = self.validate_string(&message)?;
            result.commit_sha = Some(sha);
            results.push(result);
        }

        Ok(results)
    }
}
