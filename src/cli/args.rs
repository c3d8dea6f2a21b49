// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::commit::source::COMMIT_EDITMSG;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cclint - conventional commit message linter
///
/// Lints commit messages against the project rule table or a
/// `.commitlintrc.toml` found in the current directory or above.
#[derive(Parser, Debug)]
#[command(name = "cclint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for lint results
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CCLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint commit messages (default command)
    Lint(LintArgs),

    /// Print the effective configuration
    PrintConfig(PrintConfigArgs),

    /// Write the project configuration to .commitlintrc.toml
    Init(InitArgs),

    /// Manage the commit-msg git hook
    Hooks(HooksArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Clone)]
pub struct LintArgs {
    /// Commit message to lint
    #[arg(short, long, conflicts_with_all = ["edit", "from", "last"])]
    pub message: Option<String>,

    /// Read the message from a file (defaults to .git/COMMIT_EDITMSG)
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = COMMIT_EDITMSG,
        conflicts_with_all = ["from", "last"]
    )]
    pub edit: Option<PathBuf>,

    /// Lint commits after this revision
    #[arg(long, value_name = "REV", conflicts_with = "last")]
    pub from: Option<String>,

    /// Lint commits up to this revision
    #[arg(long, value_name = "REV", default_value = "HEAD")]
    pub to: String,

    /// Lint the last commit
    #[arg(long)]
    pub last: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the print-config command.
#[derive(Parser, Debug, Default, Clone)]
pub struct PrintConfigArgs {
    /// Print the rule table after presets are applied
    #[arg(long)]
    pub resolved: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace an existing hook (it is kept as commit-msg.backup)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Lint(LintArgs::default()))
    }
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            message: None,
            edit: None,
            from: None,
            to: "HEAD".to_string(),
            last: false,
            strict: false,
        }
    }
}
