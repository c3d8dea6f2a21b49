// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cclint.
//!
//! Lint failures are not errors: they are reported as issues on a
//! [`ValidationResult`](crate::rules::ValidationResult). The types here cover
//! everything that prevents a lint run from completing, plus the final
//! "lint failed" status returned to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cclint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Lint outcome
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to read commit message from {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },
}

/// Outcome of a failed lint run.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{errors} errors, {warnings} warnings found")]
    Failed { errors: usize, warnings: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for cclint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
