// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cclint binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch directory holding the project configuration.
fn project_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".commitlintrc.toml"),
        cclint::config::project_config_toml(),
    )
    .unwrap();
    dir
}

fn cclint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cclint").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CCLINT_CONFIG")
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

#[test]
fn accepts_allowed_type() {
    let dir = project_dir();
    cclint(&dir)
        .args(["lint", "-m", "feat: add login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feat: add login"));
}

#[test]
fn rejects_unknown_type() {
    let dir = project_dir();
    cclint(&dir)
        .args(["lint", "-m", "oops: add login"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("type-enum"))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn empty_scope_list_allows_scopes() {
    let dir = project_dir();
    cclint(&dir)
        .args(["lint", "-m", "feat(auth): add login"])
        .assert()
        .success();
}

#[test]
fn reads_message_from_stdin() {
    let dir = project_dir();
    cclint(&dir)
        .arg("lint")
        .write_stdin("instr: trace request flow\n")
        .assert()
        .success();
}

#[test]
fn reads_message_from_edit_file() {
    let dir = project_dir();
    let msg = dir.path().join("MSG");
    std::fs::write(&msg, "random: nope\n\n# comment line\n").unwrap();

    cclint(&dir)
        .args(["lint", "--edit"])
        .arg(&msg)
        .assert()
        .failure()
        .stdout(predicate::str::contains("type must be one of"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = project_dir();
    cclint(&dir)
        .args(["lint", "-m", "fix: typo\nbody without blank line"])
        .assert()
        .success();

    cclint(&dir)
        .args(["lint", "--strict", "-m", "fix: typo\nbody without blank line"])
        .assert()
        .failure();
}

#[test]
fn json_output() {
    let dir = project_dir();
    let output = cclint(&dir)
        .args(["--format", "json", "lint", "-m", "oops: add login"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["name"], "type-enum");
}

#[test]
fn explicit_config_overrides_discovery() {
    let dir = project_dir();
    let custom = dir.path().join("custom.json");
    std::fs::write(
        &custom,
        r#"{ "rules": { "type-enum": [2, "always", ["oops"]] } }"#,
    )
    .unwrap();

    cclint(&dir)
        .args(["--config"])
        .arg(&custom)
        .args(["lint", "-m", "oops: add login"])
        .assert()
        .success();
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".commitlintrc.toml"),
        "[rules]\ntype-enum = [7, \"always\", [\"feat\"]]\n",
    )
    .unwrap();

    cclint(&dir)
        .args(["lint", "-m", "feat: add login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn print_config_shows_project_rules() {
    let dir = project_dir();
    cclint(&dir)
        .arg("print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("@commitlint/config-conventional"))
        .stdout(predicate::str::contains("scope-enum = [2, \"always\", []]"))
        .stdout(predicate::str::contains("\"instr\""));
}

#[test]
fn print_config_resolved_includes_preset_rules() {
    let dir = project_dir();
    cclint(&dir)
        .args(["print-config", "--resolved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header-max-length"))
        .stdout(predicate::str::contains("instr"));
}

#[test]
fn init_writes_project_config() {
    let dir = TempDir::new().unwrap();
    cclint(&dir).arg("init").assert().success();

    let written = std::fs::read_to_string(dir.path().join(".commitlintrc.toml")).unwrap();
    assert_eq!(written, cclint::config::project_config_toml());

    cclint(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cclint(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn hooks_install_in_git_repo() {
    let dir = project_dir();
    git2::Repository::init(dir.path()).unwrap();

    cclint(&dir)
        .args(["hooks", "install"])
        .assert()
        .success();

    let hook = std::fs::read_to_string(dir.path().join(".git/hooks/commit-msg")).unwrap();
    assert!(hook.contains("cclint lint --edit"));

    cclint(&dir)
        .args(["hooks", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ commit-msg"));
}

/// Create a repository whose history is `messages`, oldest first.
fn repo_with_commits(dir: &TempDir, messages: &[&str]) {
    let repo = git2::Repository::init(dir.path()).unwrap();
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let mut parent: Option<git2::Oid> = None;
    for message in messages {
        let parents: Vec<git2::Commit> = parent
            .map(|oid| repo.find_commit(oid).unwrap())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        parent = Some(
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
                .unwrap(),
        );
    }
}

#[test]
fn lints_last_commit() {
    let dir = project_dir();
    repo_with_commits(&dir, &["wip: half done"]);

    cclint(&dir)
        .args(["lint", "--last"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wip: half done"));
}

#[test]
fn version_command() {
    let dir = project_dir();
    cclint(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cclint "));
}

#[test]
fn range_json_is_one_document() {
    let dir = project_dir();
    repo_with_commits(
        &dir,
        &["chore: init", "feat: add login", "oops: add logout", "fix: typo"],
    );

    let output = cclint(&dir)
        .args(["--format", "json", "lint", "--from", "HEAD~3"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let commits = json.as_array().unwrap();
    assert_eq!(commits.len(), 3);
    assert_eq!(
        commits.iter().filter(|c| c["valid"] == false).count(),
        1
    );
}

#[test]
fn range_skips_generated_commits() {
    let dir = project_dir();
    repo_with_commits(
        &dir,
        &[
            "chore: init",
            "Merge branch 'feature/login'",
            "Revert \"feat: add login\"\n\nThis reverts commit 3f2a1c0.",
            "fixup! chore: init",
        ],
    );

    cclint(&dir)
        .args(["lint", "--from", "HEAD~3"])
        .assert()
        .success();
}

#[test]
#[cfg(target_os = "linux")]
fn user_config_applies_without_project_file() {
    let dir = TempDir::new().unwrap();
    let user_dir = dir.path().join(".config").join("cclint");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[rules]\ntype-enum = [2, \"always\", [\"oops\"]]\n",
    )
    .unwrap();

    cclint(&dir)
        .args(["lint", "-m", "oops: add login"])
        .assert()
        .success();
}
