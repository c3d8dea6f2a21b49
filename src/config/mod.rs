// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cclint.
//!
//! This module handles the rule configuration: its schema, the built-in
//! presets it can extend, the project rule table, and loading plus
//! resolution of config files.

mod loader;
pub mod presets;
mod project;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config, resolve,
    validate, write_project_config, ConfigFormat, ResolvedRules,
};
pub use project::{project_config, project_config_toml, PROJECT_PRESET, PROJECT_TYPES};
pub use schema::*;
