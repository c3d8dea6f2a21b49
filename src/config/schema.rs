// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A lint configuration is a list of presets to inherit plus a table of rule
//! overrides. Each rule is written as a short array, the same shape in TOML
//! and JSON:
//!
//! ```toml
//! extends = ["@commitlint/config-conventional"]
//!
//! [rules]
//! type-enum = [2, "always", ["feat", "fix"]]
//! scope-enum = [2, "always", []]
//! body-leading-blank = [1]
//! ```

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The main configuration structure for cclint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// Presets to inherit, applied in order under the local rules.
    pub extends: Vec<String>,

    /// Local rule overrides, keyed by rule name.
    pub rules: BTreeMap<String, RuleDefinition>,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Look up a local rule override.
    pub fn rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }
}

/// How a rule violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Off = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!(
                "invalid severity {} (expected 0 = off, 1 = warning, 2 = error)",
                other
            )),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule condition is asserted or negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation of the applicability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Apply this applicability to a raw condition.
    pub fn holds(&self, condition: bool) -> bool {
        match self {
            Applicability::Always => condition,
            Applicability::Never => !condition,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(u64),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// The parameter as a number, if it is one.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleValue::Number(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    /// The parameter as a list of strings. A single string counts as a
    /// one-element list.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            RuleValue::List(items) => Some(items.iter().map(String::as_str).collect()),
            RuleValue::Text(text) => Some(vec![text.as_str()]),
            RuleValue::Number(_) => None,
        }
    }

    /// The parameter as a single string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Vec<&str>> for RuleValue {
    fn from(items: Vec<&str>) -> Self {
        RuleValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&str> for RuleValue {
    fn from(text: &str) -> Self {
        RuleValue::Text(text.to_string())
    }
}

impl From<u64> for RuleValue {
    fn from(n: u64) -> Self {
        RuleValue::Number(n)
    }
}

/// A single rule entry: `[severity, applicability, value]`.
///
/// Trailing elements may be omitted. A missing applicability means
/// `always`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDefinition {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleDefinition {
    /// Create a rule definition.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            value: None,
        }
    }

    /// Set the rule parameter.
    pub fn with_value(mut self, value: impl Into<RuleValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// A rule that is switched off.
    pub fn off() -> Self {
        Self::new(Severity::Off, Applicability::Always)
    }

    /// Whether the rule is reported at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }
}

impl Serialize for RuleDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref value) = self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = RuleDefinition;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array [severity, applicability, value]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleDefinition, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let applicability: Applicability = seq.next_element()?.unwrap_or_default();
                let value: Option<RuleValue> = seq.next_element()?;

                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }

                Ok(RuleDefinition {
                    severity,
                    applicability,
                    value,
                })
            }
        }

        deserializer.deserialize_seq(RuleVisitor)
    }
}
