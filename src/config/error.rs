use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse router config '{path}': {source}")]
    JsonError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unclosed variable reference (missing '}}') in '{0}'")]
    UnclosedReference(PathBuf),
}
