use std::path::{Path, PathBuf};

use crate::config::ConfigError;
use thiserror::Error;

/// A fatal resolution failure.
///
/// Every variant aborts startup: no directive sequence is produced and the
/// runtime is not constructed. Whether the process exits is up to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("could not load config '{path}': {source}")]
    CompanionConfig { path: PathBuf, source: ConfigError },

    #[error("could not read router config '{path}': {source}")]
    RouterConfig { path: PathBuf, source: ConfigError },

    #[error("could not create router: {0}")]
    Construct(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// The file that failed to load, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CompanionConfig { path, .. } | Self::RouterConfig { path, .. } => Some(path),
            Self::Construct(_) => None,
        }
    }
}
