// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule checks one condition on a parsed message. The condition is
//! asserted for `always` and negated for `never`. A part that is absent
//! (no scope, no body) passes every rule except the `*-empty` ones.

use crate::commit::CommitMessage;
use crate::config::{Applicability, RuleDefinition, RuleValue};
use std::collections::HashSet;

use super::case::TargetCase;

/// A failed rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
    pub suggestion: Option<String>,
}

impl Violation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Signature shared by all built-in rules.
pub type RuleFn = fn(&CommitMessage, Applicability, Option<&RuleValue>) -> Option<Violation>;

const BUILTIN_RULES: &[(&str, RuleFn)] = &[
    ("body-empty", body_empty),
    ("body-leading-blank", body_leading_blank),
    ("body-max-line-length", body_max_line_length),
    ("footer-leading-blank", footer_leading_blank),
    ("footer-max-line-length", footer_max_line_length),
    ("header-max-length", header_max_length),
    ("header-min-length", header_min_length),
    ("header-trim", header_trim),
    ("scope-case", scope_case),
    ("scope-empty", scope_empty),
    ("scope-enum", scope_enum),
    ("subject-case", subject_case),
    ("subject-empty", subject_empty),
    ("subject-full-stop", subject_full_stop),
    ("type-case", type_case),
    ("type-empty", type_empty),
    ("type-enum", type_enum),
];

/// Look up a built-in rule by name.
pub fn builtin_rule(name: &str) -> Option<RuleFn> {
    BUILTIN_RULES
        .iter()
        .find(|(rule_name, _)| *rule_name == name)
        .map(|(_, rule)| *rule)
}

/// Whether a rule name is implemented.
pub fn is_known_rule(name: &str) -> bool {
    builtin_rule(name).is_some()
}

/// Names of all built-in rules.
pub fn known_rules() -> impl Iterator<Item = &'static str> {
    BUILTIN_RULES.iter().map(|(name, _)| *name)
}

/// Check that an enabled rule carries the parameter it needs.
pub fn check_parameter(name: &str, rule: &RuleDefinition) -> Result<(), String> {
    let value = rule.value.as_ref();

    match name {
        "type-enum" | "scope-enum" => {
            let items = match value {
                Some(RuleValue::List(items)) => items,
                _ => return Err("expected a list of allowed values".to_string()),
            };
            if name == "type-enum" && items.is_empty() {
                return Err("the list of allowed types must not be empty".to_string());
            }
            let mut seen = HashSet::new();
            if let Some(dup) = items.iter().find(|item| !seen.insert(item.as_str())) {
                return Err(format!("'{}' is listed more than once", dup));
            }
            Ok(())
        }
        "type-case" | "scope-case" | "subject-case" => {
            let cases = value
                .and_then(RuleValue::as_list)
                .ok_or_else(|| "expected a case name or a list of case names".to_string())?;
            if cases.is_empty() {
                return Err("expected at least one case name".to_string());
            }
            for case in cases {
                case.parse::<TargetCase>()?;
            }
            Ok(())
        }
        "header-max-length" | "header-min-length" | "body-max-line-length"
        | "footer-max-line-length" => match value.and_then(RuleValue::as_number) {
            Some(_) => Ok(()),
            None => Err("expected a length".to_string()),
        },
        "subject-full-stop" => match value {
            None | Some(RuleValue::Text(_)) => Ok(()),
            Some(_) => Err("expected the full stop character as a string".to_string()),
        },
        _ => Ok(()),
    }
}

fn must(applicability: Applicability) -> &'static str {
    match applicability {
        Applicability::Always => "must",
        Applicability::Never => "must not",
    }
}

fn may(applicability: Applicability) -> &'static str {
    match applicability {
        Applicability::Always => "must",
        Applicability::Never => "may not",
    }
}

fn cases_of(value: Option<&RuleValue>) -> Vec<TargetCase> {
    value
        .and_then(RuleValue::as_list)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.parse().ok())
        .collect()
}

fn join_cases(cases: &[TargetCase]) -> String {
    cases
        .iter()
        .map(TargetCase::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_enum(
    part: &str,
    input: Option<&str>,
    applicability: Applicability,
    value: Option<&RuleValue>,
    segments: impl Fn(&str) -> Vec<String>,
) -> Option<Violation> {
    let input = input?;
    let allowed = value.and_then(RuleValue::as_list).unwrap_or_default();
    if allowed.is_empty() {
        return None;
    }

    let items = segments(input);
    let holds = match applicability {
        Applicability::Always => items.iter().all(|i| allowed.contains(&i.as_str())),
        Applicability::Never => !items.iter().any(|i| allowed.contains(&i.as_str())),
    };

    if holds {
        None
    } else {
        Some(
            Violation::new(format!(
                "{} {} be one of [{}]",
                part,
                must(applicability),
                allowed.join(", ")
            ))
            .with_suggestion(format!("Found '{}'", input)),
        )
    }
}

fn check_case(
    part: &str,
    input: Option<&str>,
    applicability: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let input = input?;
    let cases = cases_of(value);
    if cases.is_empty() {
        return None;
    }

    let condition = cases.iter().any(|c| c.matches(input));
    if applicability.holds(condition) {
        None
    } else {
        Some(Violation::new(format!(
            "{} {} be {}",
            part,
            must(applicability),
            join_cases(&cases)
        )))
    }
}

fn check_empty(part: &str, input: Option<&str>, applicability: Applicability) -> Option<Violation> {
    let condition = input.map_or(true, |s| s.trim().is_empty());
    if applicability.holds(condition) {
        None
    } else {
        Some(Violation::new(format!("{} {} be empty", part, may(applicability))))
    }
}

fn check_max_line_length(
    part: &str,
    text: Option<&str>,
    applicability: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let text = text?;
    let max = value.and_then(RuleValue::as_number)?;
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    if applicability.holds(longest <= max) {
        None
    } else {
        Some(
            Violation::new(format!(
                "{}'s lines {} be longer than {} characters",
                part,
                must(negate(applicability)),
                max
            ))
            .with_suggestion(format!("Wrap lines at {} characters", max)),
        )
    }
}

fn check_leading_blank(
    part: &str,
    present: bool,
    has_blank: bool,
    applicability: Applicability,
) -> Option<Violation> {
    if !present || applicability.holds(has_blank) {
        None
    } else {
        Some(Violation::new(format!(
            "{} {} have leading blank line",
            part,
            must(applicability)
        )))
    }
}

fn negate(applicability: Applicability) -> Applicability {
    match applicability {
        Applicability::Always => Applicability::Never,
        Applicability::Never => Applicability::Always,
    }
}

fn single(input: &str) -> Vec<String> {
    vec![input.to_string()]
}

fn scope_segments(input: &str) -> Vec<String> {
    input
        .split(|c| c == '/' || c == '\\' || c == ',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn type_enum(msg: &CommitMessage, app: Applicability, value: Option<&RuleValue>) -> Option<Violation> {
    check_enum("type", msg.commit_type.as_deref(), app, value, single)
}

fn type_case(msg: &CommitMessage, app: Applicability, value: Option<&RuleValue>) -> Option<Violation> {
    check_case("type", msg.commit_type.as_deref(), app, value)
}

fn type_empty(msg: &CommitMessage, app: Applicability, _: Option<&RuleValue>) -> Option<Violation> {
    check_empty("type", msg.commit_type.as_deref(), app)
}

fn scope_enum(msg: &CommitMessage, app: Applicability, value: Option<&RuleValue>) -> Option<Violation> {
    check_enum("scope", msg.scope.as_deref(), app, value, scope_segments)
}

fn scope_case(msg: &CommitMessage, app: Applicability, value: Option<&RuleValue>) -> Option<Violation> {
    check_case("scope", msg.scope.as_deref(), app, value)
}

fn scope_empty(msg: &CommitMessage, app: Applicability, _: Option<&RuleValue>) -> Option<Violation> {
    check_empty("scope", msg.scope.as_deref(), app)
}

fn subject_case(msg: &CommitMessage, app: Applicability, value: Option<&RuleValue>) -> Option<Violation> {
    check_case("subject", msg.subject.as_deref(), app, value)
}

fn subject_empty(msg: &CommitMessage, app: Applicability, _: Option<&RuleValue>) -> Option<Violation> {
    check_empty("subject", msg.subject.as_deref(), app)
}

fn subject_full_stop(
    msg: &CommitMessage,
    app: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let subject = msg.subject.as_deref()?;
    let stop = value.and_then(RuleValue::as_text).unwrap_or(".");

    if app.holds(subject.ends_with(stop)) {
        None
    } else {
        Some(
            Violation::new(format!("subject {} end with full stop", may(app)))
                .with_suggestion(format!("Check the trailing '{}'", stop)),
        )
    }
}

fn header_max_length(
    msg: &CommitMessage,
    app: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let max = value.and_then(RuleValue::as_number)?;
    let len = msg.header_len();

    if app.holds(len <= max) {
        None
    } else {
        Some(
            Violation::new(format!(
                "header {} be longer than {} characters, current length is {}",
                must(negate(app)),
                max,
                len
            ))
            .with_suggestion(format!("Shorten the header to {} characters or less", max)),
        )
    }
}

fn header_min_length(
    msg: &CommitMessage,
    app: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    let min = value.and_then(RuleValue::as_number)?;
    let len = msg.header_len();

    if app.holds(len >= min) {
        None
    } else {
        Some(Violation::new(format!(
            "header {} be shorter than {} characters, current length is {}",
            must(negate(app)),
            min,
            len
        )))
    }
}

fn header_trim(msg: &CommitMessage, app: Applicability, _: Option<&RuleValue>) -> Option<Violation> {
    let trimmed = msg.header.trim() == msg.header;

    if app.holds(trimmed) {
        None
    } else {
        Some(Violation::new(format!(
            "header {} have leading or trailing whitespace",
            must(negate(app))
        )))
    }
}

fn body_leading_blank(
    msg: &CommitMessage,
    app: Applicability,
    _: Option<&RuleValue>,
) -> Option<Violation> {
    check_leading_blank("body", msg.body.is_some(), msg.body_leading_blank, app)
}

fn body_max_line_length(
    msg: &CommitMessage,
    app: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    check_max_line_length("body", msg.body.as_deref(), app, value)
}

fn body_empty(msg: &CommitMessage, app: Applicability, _: Option<&RuleValue>) -> Option<Violation> {
    check_empty("body", msg.body.as_deref(), app)
}

fn footer_leading_blank(
    msg: &CommitMessage,
    app: Applicability,
    _: Option<&RuleValue>,
) -> Option<Violation> {
    check_leading_blank("footer", msg.footer.is_some(), msg.footer_leading_blank, app)
}

fn footer_max_line_length(
    msg: &CommitMessage,
    app: Applicability,
    value: Option<&RuleValue>,
) -> Option<Violation> {
    check_max_line_length("footer", msg.footer.as_deref(), app, value)
}
