// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Where a commit message to lint comes from.

use crate::error::{CommitError, LintError, Result};
use std::io::Read;
use std::path::PathBuf;

/// Default message file git hands to the `commit-msg` hook.
pub const COMMIT_EDITMSG: &str = ".git/COMMIT_EDITMSG";

/// A single commit message input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Message given directly on the command line.
    Text(String),
    /// Message file, as written by git for hooks.
    File(PathBuf),
    /// Message piped on standard input.
    Stdin,
}

impl MessageSource {
    /// Read the message text.
    pub fn read(&self) -> Result<String> {
        match self {
            MessageSource::Text(text) => Ok(text.clone()),
            MessageSource::File(path) => {
                tracing::debug!("Reading commit message from {:?}", path);
                std::fs::read_to_string(path).map_err(|e| {
                    LintError::Commit(CommitError::ReadFailed {
                        source_name: path.display().to_string(),
                        message: e.to_string(),
                    })
                })
            }
            MessageSource::Stdin => {
                tracing::debug!("Reading commit message from stdin");
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer).map_err(|e| {
                    LintError::Commit(CommitError::ReadFailed {
                        source_name: "stdin".to_string(),
                        message: e.to_string(),
                    })
                })?;
                Ok(buffer)
            }
        }
    }
}
