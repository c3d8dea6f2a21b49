// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The project rule table.
//!
//! This is the configuration cclint falls back to when no config file is
//! found, and the one `cclint init` writes. It inherits the conventional
//! preset and overrides two rules: the commit type allow-list and an empty
//! scope allow-list.

use super::schema::{Applicability, LintConfig, RuleDefinition, Severity};

/// Preset the project configuration inherits.
pub const PROJECT_PRESET: &str = "@commitlint/config-conventional";

/// Allowed commit types, in declaration order.
pub const PROJECT_TYPES: &[&str] = &[
    "fix", "build", "revert", "wip", "feat", "chore", "ci", "docs", "style", "refactor", "perf",
    "test", "instr",
];

/// Build the project configuration.
pub fn project_config() -> LintConfig {
    let mut config = LintConfig {
        extends: vec![PROJECT_PRESET.to_string()],
        ..Default::default()
    };

    config.rules.insert(
        "type-enum".to_string(),
        RuleDefinition::new(Severity::Error, Applicability::Always)
            .with_value(PROJECT_TYPES.to_vec()),
    );
    config.rules.insert(
        "scope-enum".to_string(),
        RuleDefinition::new(Severity::Error, Applicability::Always).with_value(Vec::<&str>::new()),
    );

    config
}

/// The project configuration as a `.commitlintrc.toml` document.
pub fn project_config_toml() -> &'static str {
    r#"# cclint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

extends = ["@commitlint/config-conventional"]

[rules]
type-enum = [
  2,
  "always",
  [
    "fix",
    "build",
    "revert",
    "wip",
    "feat",
    "chore",
    "ci",
    "docs",
    "style",
    "refactor",
    "perf",
    "test",
    "instr",
  ],
]
scope-enum = [2, "always", []]
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RuleValue;
    use crate::rules::RuleEngine;
    use std::collections::HashSet;

    fn type_enum_values(config: &LintConfig) -> Vec<String> {
        match config.rule("type-enum").and_then(|r| r.value.clone()) {
            Some(RuleValue::List(items)) => items,
            other => panic!("type-enum should carry a list, got {:?}", other),
        }
    }

    #[test]
    fn test_single_base_preset() {
        let config = project_config();
        assert_eq!(config.extends, vec!["@commitlint/config-conventional"]);
    }

    #[test]
    fn test_exactly_two_rules() {
        let config = project_config();
        let names: Vec<&str> = config.rules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["scope-enum", "type-enum"]);
    }

    #[test]
    fn test_type_enum_shape() {
        let config = project_config();
        let rule = config.rule("type-enum").unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.applicability, Applicability::Always);
    }

    #[test]
    fn test_type_enum_members() {
        let types = type_enum_values(&project_config());
        assert_eq!(types.len(), 13);

        let unique: HashSet<&String> = types.iter().collect();
        assert_eq!(unique.len(), types.len());

        for expected in ["feat", "fix", "chore", "instr", "wip"] {
            assert!(types.iter().any(|t| t == expected), "missing {}", expected);
        }
        assert!(!types.iter().any(|t| t == "random"));
        assert_eq!(types, PROJECT_TYPES);
    }

    #[test]
    fn test_scope_enum_shape() {
        let config = project_config();
        let rule = config.rule("scope-enum").unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.applicability, Applicability::Always);
        assert_eq!(rule.value, Some(RuleValue::List(Vec::new())));
    }

    #[test]
    fn test_toml_document_matches_typed_config() {
        let parsed: LintConfig = toml::from_str(project_config_toml()).unwrap();
        assert_eq!(parsed, project_config());
    }

    #[test]
    fn test_repository_config_file_matches() {
        let committed = include_str!("../../.commitlintrc.toml");
        assert_eq!(committed, project_config_toml());
    }

    #[test]
    fn test_lint_scenarios() {
        let engine = RuleEngine::new(project_config()).unwrap();

        let accepted = engine.validate_string("feat: add login").unwrap();
        assert!(accepted.is_valid(), "{:?}", accepted.errors);

        let rejected = engine.validate_string("oops: add login").unwrap();
        assert!(!rejected.is_valid());
        assert!(rejected.errors.iter().any(|e| e.code == "type-enum"));

        let scoped = engine.validate_string("feat(auth): add login").unwrap();
        assert!(scoped.is_valid(), "{:?}", scoped.errors);
    }

    #[test]
    fn test_project_types_beyond_preset_are_accepted() {
        let engine = RuleEngine::new(project_config()).unwrap();
        for commit_type in ["wip", "instr"] {
            let result = engine
                .validate_string(&format!("{}: trace request flow", commit_type))
                .unwrap();
            assert!(result.is_valid(), "{} should be allowed", commit_type);
        }
    }
}
