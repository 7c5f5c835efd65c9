//! Error types for configuration parsing.

use std::path::PathBuf;

use gitdeck_primitives::KeyParseError;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Non-fatal problems found while loading. The affected setting falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
	#[error("invalid key for {field}: {source}")]
	InvalidKey { field: &'static str, source: KeyParseError },

	#[error("invalid color {value:?} for branch prefix {prefix:?}")]
	InvalidColor { prefix: String, value: String },

	#[error("refresh interval must be at least one second, got {0}")]
	InvalidInterval(u64),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
