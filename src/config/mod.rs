//! Configuration loading
//!
//! Settings come from CLI flags, an optional config file, and built-in defaults,
//! in that order of precedence.

use crate::install::DEFAULT_FETCH_COMMAND;
use crate::manifest::DEFAULT_MANIFEST_NAME;
use serde::Deserialize;

pub mod loader;

pub use loader::load_config;

/// File-backed settings for go-getter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Program and leading arguments run once per dependency.
    pub fetch_command: Vec<String>,
    /// Extensions of files scanned for imports.
    pub source_extensions: Vec<String>,
    /// File name used when the manifest location is a directory.
    pub manifest_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_command: DEFAULT_FETCH_COMMAND.iter().map(|s| s.to_string()).collect(),
            source_extensions: vec![".go".to_string()],
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}
