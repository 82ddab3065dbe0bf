//! Error types for widget building and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a widget list at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	/// The page object or its type could not be determined.
	#[error("cannot build widgets: page {what} is unknown")]
	MissingPageContext {
		/// Which part of the page context was missing.
		what: &'static str,
	},
}

/// Errors that can occur when loading widget configuration.
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

	/// A descriptor override table names a page type the registry lacks.
	#[error("descriptor overrides for unknown page type '{page}'")]
	UnknownPageType { page: String },

	/// A mixin reference is an empty string.
	#[error("empty mixin name in '{fragment}'")]
	EmptyMixinName { fragment: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
