// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and resolution.

use crate::error::{ConfigError, LintError, Result};
use crate::rules;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::presets::preset_rules;
use super::project::{project_config, project_config_toml};
use super::schema::{LintConfig, RuleDefinition};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[".commitlintrc.toml", "commitlint.toml", ".commitlintrc.json"];

/// Effective rule table after presets and local overrides are applied.
pub type ResolvedRules = BTreeMap<String, RuleDefinition>;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Find the configuration file in the current directory or parent
/// directories, falling back to the user config directory.
pub fn find_config_file() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|dir| find_config_file_from(&dir))
        .or_else(user_config_file)
}

/// Find the configuration file starting from a specific directory.
///
/// Only `start_dir` and its ancestors are searched.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// `cclint/config.toml` under the platform config directory, if present.
fn user_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir()?.join("cclint").join("config.toml");
    user_config.is_file().then_some(user_config)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using project defaults");
            Ok(project_config())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Parse configuration from a string.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LintConfig> {
    let parsed: std::result::Result<LintConfig, ConfigError> = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        }),
    };

    Ok(parsed?)
}

/// Flatten `extends` and local rules into the effective rule table.
///
/// Presets apply in order, later ones replacing rules of earlier ones. Local
/// rules go on top. Unknown rule names are dropped with a warning.
pub fn resolve(config: &LintConfig) -> Result<ResolvedRules> {
    let mut resolved = ResolvedRules::new();

    for preset in &config.extends {
        tracing::debug!("Applying preset: {}", preset);
        resolved.extend(preset_rules(preset)?);
    }

    for (name, rule) in &config.rules {
        resolved.insert(name.clone(), rule.clone());
    }

    resolved.retain(|name, _| {
        let known = rules::is_known_rule(name);
        if !known {
            tracing::warn!("Ignoring unknown rule '{}'", name);
        }
        known
    });

    validate(&resolved)?;
    Ok(resolved)
}

/// Check rule parameters against what each rule expects.
pub fn validate(resolved: &ResolvedRules) -> Result<()> {
    for (name, rule) in resolved {
        if !rule.is_enabled() {
            continue;
        }
        rules::check_parameter(name, rule).map_err(|message| ConfigError::InvalidValue {
            key: name.clone(),
            message,
        })?;
    }
    Ok(())
}

/// Write the project configuration to `path`.
pub fn write_project_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(LintError::Config(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    std::fs::write(path, project_config_toml())?;
    tracing::debug!("Wrote configuration to {:?}", path);
    Ok(())
}
