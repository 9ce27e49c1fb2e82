//! Error taxonomy shared by the extractor, manifest and installer.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GetterError>;

#[derive(Debug, Error)]
pub enum GetterError {
    #[error("{0}")]
    Validation(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed parsing imports in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed fetching {dependency}: {message}")]
    Fetch { dependency: String, message: String },
}

impl GetterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse { path: path.into(), message: message.into() }
    }
}
