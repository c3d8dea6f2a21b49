// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, LintError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository for reading commit history.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            LintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LintError::Git(GitError::NotARepository)
            } else {
                LintError::Git(GitError::from(e))
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the SHA and message of a commit.
    pub fn get_commit_message(&self, reference: &str) -> Result<(Oid, String)> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            LintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;
        Ok((commit.id(), message.to_string()))
    }

    /// Get commits reachable from `to` but not from `from`, newest first.
    pub fn get_commits_in_range(&self, from: &str, to: &str) -> Result<Vec<(Oid, String)>> {
        let revwalk_err = |command: &str, e: git2::Error| {
            LintError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self
            .inner
            .revwalk()
            .map_err(|e| revwalk_err("revwalk", e))?;

        let to_commit = self.get_commit(to)?;
        let from_commit = self.get_commit(from)?;

        revwalk
            .push(to_commit.id())
            .map_err(|e| revwalk_err("revwalk.push", e))?;
        revwalk
            .hide(from_commit.id())
            .map_err(|e| revwalk_err("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| revwalk_err("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                LintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, commit.message().unwrap_or("").to_string()));
        }

        tracing::debug!("Found {} commits in {}..{}", commits.len(), from, to);
        Ok(commits)
    }
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get the SHA and message of a commit in the current repository.
pub fn get_commit(reference: &str) -> Result<(String, String)> {
    let repo = Repository::open_current()?;
    let (oid, message) = repo.get_commit_message(reference)?;
    Ok((oid.to_string(), message))
}

/// Get commits in `from..to` in the current repository.
pub fn get_commit_range(from: &str, to: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(from, to)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}
