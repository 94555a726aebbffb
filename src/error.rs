//! Error types for ipsweep.
//!
//! Uses `thiserror` for ergonomic error definitions.
//!
//! Only [`AnalyzeError`] ever crosses the core analysis boundary: a probe
//! that fails is dropped from the result pool rather than surfaced, so
//! [`ProbeError`] stays local to the probing layer.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for a whole analysis run.
///
/// An analysis fails as a unit only when the input cannot be parsed;
/// everything after parsing folds into the address pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),
}

/// Per-host probe failures.
///
/// These never propagate out of an analysis; a host whose probe errors is
/// simply absent from the final pool.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type alias for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Configuration loading/saving errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("probe setup failed: {0}")]
    ProbeSetup(#[from] ProbeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
