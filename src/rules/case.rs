// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter case checks used by the `*-case` rules.

use std::fmt;
use std::str::FromStr;

/// A letter case a header part can be required (or forbidden) to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCase {
    Lower,
    Upper,
    Sentence,
    Start,
    Pascal,
    Camel,
    Kebab,
    Snake,
}

impl TargetCase {
    /// Get the string representation of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetCase::Lower => "lower-case",
            TargetCase::Upper => "upper-case",
            TargetCase::Sentence => "sentence-case",
            TargetCase::Start => "start-case",
            TargetCase::Pascal => "pascal-case",
            TargetCase::Camel => "camel-case",
            TargetCase::Kebab => "kebab-case",
            TargetCase::Snake => "snake-case",
        }
    }

    /// Check whether `input` is written in this case.
    ///
    /// Input that starts with a digit or has no letters satisfies every case.
    pub fn matches(&self, input: &str) -> bool {
        if input.starts_with(|c: char| c.is_ascii_digit()) || !input.chars().any(char::is_alphabetic)
        {
            return true;
        }

        match self {
            TargetCase::Lower => input == input.to_lowercase(),
            TargetCase::Upper => input == input.to_uppercase(),
            TargetCase::Sentence => input.chars().next().map_or(false, char::is_uppercase),
            TargetCase::Start => input.split(' ').all(|word| {
                word.chars().next().map_or(false, char::is_uppercase)
                    && word.chars().all(char::is_alphanumeric)
            }),
            TargetCase::Pascal => {
                input.chars().next().map_or(false, char::is_uppercase)
                    && input.chars().all(char::is_alphanumeric)
                    && input.chars().any(char::is_lowercase)
            }
            TargetCase::Camel => {
                input.chars().next().map_or(false, char::is_lowercase)
                    && input.chars().all(char::is_alphanumeric)
            }
            TargetCase::Kebab => is_delimited_lower(input, '-'),
            TargetCase::Snake => is_delimited_lower(input, '_'),
        }
    }
}

fn is_delimited_lower(input: &str, delimiter: char) -> bool {
    input.split(delimiter).all(|word| {
        !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_lowercase() || c.is_ascii_digit())
    })
}

impl FromStr for TargetCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(TargetCase::Lower),
            "upper-case" | "uppercase" => Ok(TargetCase::Upper),
            "sentence-case" | "sentencecase" => Ok(TargetCase::Sentence),
            "start-case" | "startcase" => Ok(TargetCase::Start),
            "pascal-case" | "pascalcase" => Ok(TargetCase::Pascal),
            "camel-case" | "camelcase" => Ok(TargetCase::Camel),
            "kebab-case" | "kebabcase" => Ok(TargetCase::Kebab),
            "snake-case" | "snakecase" => Ok(TargetCase::Snake),
            other => Err(format!("unknown case '{}'", other)),
        }
    }
}

impl fmt::Display for TargetCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
