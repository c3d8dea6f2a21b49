// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for the `commit-msg` git hook.

use crate::error::{HookError, LintError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the managed hook.
pub const COMMIT_MSG_HOOK: &str = "commit-msg";

/// Line that marks a hook as ours.
const HOOK_MARKER: &str = "# Generated by cclint";

/// Manager for the cclint git hook.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the repository in the current directory.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::for_hooks_dir(repo.git_dir().join("hooks"))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn for_hooks_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                LintError::Hook(HookError::InstallFailed {
                    hook: COMMIT_MSG_HOOK.to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }
        Ok(Self { hooks_dir })
    }

    fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(COMMIT_MSG_HOOK)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", COMMIT_MSG_HOOK))
    }

    /// Install the `commit-msg` hook.
    ///
    /// A foreign hook is kept as `commit-msg.backup` when `force` is set.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if hook_path.exists() && !is_cclint_hook(&hook_path)? {
            if !force {
                return Err(LintError::Hook(HookError::AlreadyExists {
                    hook: COMMIT_MSG_HOOK.to_string(),
                }));
            }
            fs::rename(&hook_path, self.backup_path()).map_err(|e| {
                LintError::Hook(HookError::InstallFailed {
                    hook: COMMIT_MSG_HOOK.to_string(),
                    message: format!("Failed to backup existing hook: {}", e),
                })
            })?;
        }

        fs::write(&hook_path, hook_script()).map_err(|e| {
            LintError::Hook(HookError::InstallFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        make_executable(&hook_path)?;
        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Remove the hook and restore any backup.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(());
        }

        if !is_cclint_hook(&hook_path)? {
            return Err(LintError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: "Hook was not installed by cclint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            LintError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path)?;
        }

        Ok(())
    }

    /// Whether the cclint hook is installed.
    pub fn is_installed(&self) -> bool {
        let hook_path = self.hook_path();
        hook_path.exists() && is_cclint_hook(&hook_path).unwrap_or(false)
    }
}

/// Shell script run by git with the message file as `$1`.
pub fn hook_script() -> String {
    format!(
        "#!/bin/sh\n{} v{}\nexec cclint lint --edit \"$1\"\n",
        HOOK_MARKER,
        crate::version::VERSION
    )
}

fn is_cclint_hook(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    Ok(content.contains(HOOK_MARKER))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|e| {
        LintError::Hook(HookError::InstallFailed {
            hook: COMMIT_MSG_HOOK.to_string(),
            message: format!("Failed to set permissions: {}", e),
        })
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::for_hooks_dir(dir.path().join("hooks")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_hook_script() {
        let script = hook_script();
        assert!(script.starts_with("#!/bin/sh"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains("cclint lint --edit \"$1\""));
    }

    #[test]
    fn test_install_and_uninstall() {
        let (_dir, manager) = manager();
        assert!(!manager.is_installed());

        manager.install(false).unwrap();
        assert!(manager.is_installed());

        // Reinstalling over our own hook is fine.
        manager.install(false).unwrap();

        manager.uninstall().unwrap();
        assert!(!manager.is_installed());
        assert!(!manager.hook_path().exists());
    }

    #[test]
    fn test_foreign_hook_is_preserved() {
        let (_dir, manager) = manager();
        fs::write(manager.hook_path(), "#!/bin/sh\nnpx commitlint --edit\n").unwrap();

        assert!(matches!(
            manager.install(false),
            Err(LintError::Hook(HookError::AlreadyExists { .. }))
        ));
        assert!(matches!(
            manager.uninstall(),
            Err(LintError::Hook(HookError::RemoveFailed { .. }))
        ));

        manager.install(true).unwrap();
        assert!(manager.backup_path().exists());

        manager.uninstall().unwrap();
        let restored = fs::read_to_string(manager.hook_path()).unwrap();
        assert!(restored.contains("npx commitlint"));
    }

    #[cfg(unix)]
    #[test]
    fn test_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, manager) = manager();
        manager.install(false).unwrap();
        let mode = fs::metadata(manager.hook_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
