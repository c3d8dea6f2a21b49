// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::MessageSource;
use crate::config::{self, LintConfig};
use crate::error::{LintError, Result, ResultExt, ValidationError};
use crate::hooks::{HookManager, COMMIT_MSG_HOOK};
use crate::rules::{RuleEngine, ValidationResult};
use std::path::Path;

use super::args::{Cli, Commands, HooksAction, InitArgs, LintArgs, OutputFormat, PrintConfigArgs};

/// Config file written by `cclint init`.
const INIT_CONFIG_FILE: &str = ".commitlintrc.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, args),
        Commands::PrintConfig(args) => run_print_config(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Hooks(args) => run_hooks(args.action),
        Commands::Version => run_version(),
    }
}

/// Load configuration from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<LintConfig> {
    match cli.config {
        Some(ref path) => LintConfig::load_from(path),
        None => LintConfig::load(),
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let engine = RuleEngine::new(load_config(cli)?)?;
    let is_range = args.from.is_some();

    let results = if let Some(ref from) = args.from {
        engine.check_range(from, &args.to)?
    } else if args.last {
        vec![engine.check_commit("HEAD")?]
    } else {
        let source = match (args.message, args.edit) {
            (Some(message), _) => MessageSource::Text(message),
            (None, Some(path)) => MessageSource::File(path),
            (None, None) => MessageSource::Stdin,
        };
        vec![engine.validate_string(&source.read()?)?]
    };

    match cli.format {
        Some(OutputFormat::Json) => println!("{}", render_json(&results, is_range)?),
        _ => results.iter().for_each(ValidationResult::print),
    }

    lint_outcome(&results, args.strict)
}

/// Render lint results as one JSON document.
///
/// A range is always an array, even with zero or one commit. A single
/// message is a bare object.
fn render_json(results: &[ValidationResult], is_range: bool) -> Result<String> {
    let json = match results {
        [single] if !is_range => single.to_json(),
        all => serde_json::Value::Array(all.iter().map(ValidationResult::to_json).collect()),
    };
    serde_json::to_string_pretty(&json).context("Failed to render lint results")
}

/// Turn lint results into the command's exit status.
fn lint_outcome(results: &[ValidationResult], strict: bool) -> Result<()> {
    let errors: usize = results.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    if errors > 0 || (strict && warnings > 0) {
        Err(LintError::Validation(ValidationError::Failed { errors, warnings }))
    } else {
        Ok(())
    }
}

/// Run the print-config command.
fn run_print_config(cli: &Cli, args: PrintConfigArgs) -> Result<()> {
    let config = load_config(cli)?;

    let output = if args.resolved {
        let resolved = LintConfig {
            extends: Vec::new(),
            rules: config::resolve(&config)?,
        };
        render_config(&resolved, cli.format)?
    } else {
        render_config(&config, cli.format)?
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn render_config(config: &LintConfig, format: Option<OutputFormat>) -> Result<String> {
    match format {
        Some(OutputFormat::Json) => {
            serde_json::to_string_pretty(config).context("Failed to render configuration")
        }
        _ => toml::to_string(config).context("Failed to render configuration"),
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    config::write_project_config(Path::new(INIT_CONFIG_FILE), args.force)?;
    println!("✓ Created {}", INIT_CONFIG_FILE);
    Ok(())
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    tracing::debug!("Running hooks command: {:?}", action);

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { force } => {
            manager.install(force)?;
            println!("✓ Installed {} hook", COMMIT_MSG_HOOK);
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled {} hook", COMMIT_MSG_HOOK);
        }
        HooksAction::Status => {
            let icon = if manager.is_installed() { "✓" } else { "✗" };
            println!("{} {}", icon, COMMIT_MSG_HOOK);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cclint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
