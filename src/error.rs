//! Crate-level error types.

use thiserror::Error;

/// Failures while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No platform config directory could be determined.
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    /// The config crate failed to read or deserialize a source.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    /// A value was read but is out of range.
    #[error("Invalid setting `{key}`: {reason}")]
    Invalid {
        /// Dotted setting name.
        key: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Top-level error for the binary and engine setup.
#[derive(Error, Debug)]
pub enum Error {
    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
