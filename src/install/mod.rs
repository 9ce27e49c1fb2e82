//! Sequential dependency fetching driven by a manifest.

use crate::error::{GetterError, Result};
use std::process::Command;

/// Command line run per dependency when no config overrides it.
pub const DEFAULT_FETCH_COMMAND: &[&str] = &["go", "get"];

/// Something that can fetch a single dependency and report its output.
pub trait Fetcher {
    /// Fetch `dependency`, returning the captured output on success.
    fn fetch(&mut self, dependency: &str) -> Result<String>;

    /// Human-readable form of the command used for `dependency`.
    fn describe(&self, dependency: &str) -> String;
}

/// Runs an external command (`go get` by default) once per dependency.
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: String,
    args: Vec<String>,
}

impl CommandFetcher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// Build from a full command line such as `["go", "get"]`.
    pub fn from_command(command: &[String]) -> Result<Self> {
        let (program, args) = command.split_first().ok_or_else(|| {
            GetterError::Validation("fetch_command must name a program".to_string())
        })?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }
}

impl Fetcher for CommandFetcher {
    fn fetch(&mut self, dependency: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(dependency)
            .output()
            .map_err(|e| GetterError::Fetch {
                dependency: dependency.to_string(),
                message: format!("could not start '{}': {}", self.program, e),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            let mut message = format!("'{}' {}", self.describe(dependency), output.status);
            let detail = combined.trim();
            if !detail.is_empty() {
                message.push_str(": ");
                message.push_str(detail);
            }
            return Err(GetterError::Fetch { dependency: dependency.to_string(), message });
        }

        Ok(combined)
    }

    fn describe(&self, dependency: &str) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(dependency);
        parts.join(" ")
    }
}

/// Fetch every entry in order, stopping at the first failure.
///
/// Returns the number of dependencies fetched.
pub fn install_all<F: Fetcher + ?Sized>(entries: &[String], fetcher: &mut F) -> Result<usize> {
    let mut fetched = 0;
    for dependency in entries {
        tracing::info!("{}", fetcher.describe(dependency));
        let output = fetcher.fetch(dependency)?;
        let output = output.trim_end();
        if !output.is_empty() {
            tracing::info!("{}", output);
        }
        fetched += 1;
    }
    Ok(fetched)
}
