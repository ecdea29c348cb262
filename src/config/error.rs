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
        source: serde_yaml::Error,
    },

    #[error("invalid config document: {0}")]
    InvalidDocument(#[from] serde_yaml::Error),

    #[error("unable to parse '{field}' \"{value}\"")]
    DecodeShape { field: String, value: String },

    #[error("unsupported backend: '{0}'")]
    UnknownBackend(String),

    #[error("{0} is not a valid merge behavior")]
    InvalidMergeBehavior(String),
}
