// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides the built-in lint rules and the engine that applies
//! a resolved rule table to commit messages.

mod builtin;
mod case;
mod engine;
mod validator;

pub use builtin::{builtin_rule, check_parameter, is_known_rule, known_rules, RuleFn, Violation};
pub use case::TargetCase;
pub use engine::RuleEngine;
pub use validator::{ValidationIssue, ValidationResult};
