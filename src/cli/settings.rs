//! Startup resolution of everything the commands need.

use super::utils::parse_extensions;
use super::Cli;
use crate::config::Config;
use crate::error::GetterError;
use crate::manifest::resolve_manifest_path;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Values resolved once at startup and handed to each command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub manifest_path: PathBuf,
    pub source_dir: PathBuf,
    pub config: Config,
}

impl Settings {
    /// Merge CLI flags over `config`. `default_dir` is where the manifest lives
    /// when `--libraries` is not given.
    pub fn resolve(cli: &Cli, default_dir: &Path, mut config: Config) -> Self {
        if let Some(extensions) = parse_extensions(cli.extensions.as_deref()) {
            config.source_extensions = extensions;
        }

        let manifest_path =
            resolve_manifest_path(cli.libraries.as_deref(), default_dir, &config.manifest_name);
        let source_dir = match cli.source.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Self { manifest_path, source_dir, config }
    }
}

/// Reject flag combinations that would do no work.
pub fn validate(cli: &Cli) -> std::result::Result<(), GetterError> {
    if !cli.update && !cli.install {
        return Err(GetterError::Validation(
            "Either --update or --install must be specified".to_string(),
        ));
    }
    Ok(())
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed locating the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))
}
