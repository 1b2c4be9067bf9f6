use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BzrError {
    #[error("No such file or not readable: {path} ({reason})")]
    Path { path: PathBuf, reason: String },

    #[error("Not a bzr branch: {path} ({reason})")]
    NotABranch { path: PathBuf, reason: String },

    #[error("No such info-key: {field}")]
    MissingField { field: String },

    #[error("Malformed timestamp: {value:?}")]
    MalformedTimestamp { value: String },

    #[error("Bzr command failed: {command}\n{output}")]
    CommandFailed { command: String, output: String },

    #[error("Bzr command timed out after {timeout:?}: {command}")]
    CommandTimeout { command: String, timeout: Duration },

    #[error("Invalid revision range: {0}")]
    InvalidRange(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BzrError>;
