// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule presets referenced from `extends`.

use crate::error::ConfigError;
use std::collections::BTreeMap;

use super::schema::{Applicability, RuleDefinition, Severity};

#[derive(Debug, Clone, Copy)]
enum Preset {
    ConfigConventional,
}

/// Returns the list of all available preset names.
pub fn available_presets() -> &'static [&'static str] {
    &["@commitlint/config-conventional"]
}

fn resolve_preset(name: &str) -> Option<Preset> {
    match name {
        "@commitlint/config-conventional" | "config-conventional" => {
            Some(Preset::ConfigConventional)
        }
        _ => None,
    }
}

/// Get the rule table of a preset by name.
pub fn preset_rules(name: &str) -> Result<BTreeMap<String, RuleDefinition>, ConfigError> {
    let preset = resolve_preset(name).ok_or_else(|| ConfigError::UnknownPreset {
        name: name.to_string(),
        available: available_presets().join(", "),
    })?;

    let rules = match preset {
        Preset::ConfigConventional => config_conventional(),
    };

    Ok(rules
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect())
}

fn config_conventional() -> Vec<(&'static str, RuleDefinition)> {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};

    vec![
        ("body-leading-blank", RuleDefinition::new(Warning, Always)),
        (
            "body-max-line-length",
            RuleDefinition::new(Error, Always).with_value(100u64),
        ),
        ("footer-leading-blank", RuleDefinition::new(Warning, Always)),
        (
            "footer-max-line-length",
            RuleDefinition::new(Error, Always).with_value(100u64),
        ),
        (
            "header-max-length",
            RuleDefinition::new(Error, Always).with_value(100u64),
        ),
        ("header-trim", RuleDefinition::new(Error, Always)),
        (
            "subject-case",
            RuleDefinition::new(Error, Never).with_value(vec![
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ]),
        ),
        ("subject-empty", RuleDefinition::new(Error, Never)),
        (
            "subject-full-stop",
            RuleDefinition::new(Error, Never).with_value("."),
        ),
        (
            "type-case",
            RuleDefinition::new(Error, Always).with_value("lower-case"),
        ),
        ("type-empty", RuleDefinition::new(Error, Never)),
        (
            "type-enum",
            RuleDefinition::new(Error, Always).with_value(vec![
                "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                "style", "test",
            ]),
        ),
    ]
}
