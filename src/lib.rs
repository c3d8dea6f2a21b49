// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cclint - Conventional Commit Linter
//!
//! Lints commit messages against a commitlint-style rule table.
//!
//! # Features
//!
//! - **Project Rule Table**: extends the conventional preset with a custom
//!   commit type allow-list and an empty scope allow-list
//! - **Presets**: `extends` layers built-in rule sets under local overrides
//! - **Rule Engine**: header, type, scope, subject, body and footer rules
//! - **Git Integration**: lint a message file, the last commit or a range
//! - **Git Hooks**: install a `commit-msg` hook that runs the linter
//!
//! # Example
//!
//! ```
//! use cclint::config::project_config;
//! use cclint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(project_config()).unwrap();
//!
//! assert!(engine.validate_string("feat: add login").unwrap().is_valid());
//! assert!(!engine.validate_string("oops: add login").unwrap().is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{LintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cclint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
