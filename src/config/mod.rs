// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitlint.
//!
//! This module loads `.commitlintrc.json`, merges it over the built-in
//! defaults and exposes the result as a [`RuleConfig`] snapshot. There is no
//! process-wide cache: callers load once and pass the snapshot by reference.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    config_exists, config_path, load_config, load_config_from, merge_values, parse_config,
    write_default_config, CONFIG_FILE,
};
pub use schema::*;

impl RuleConfig {
    /// Load configuration from the working directory.
    pub fn load() -> crate::error::Result<Self> {
        load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        load_config_from(path)
    }
}
