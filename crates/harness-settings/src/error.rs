//! Error types for the settings module.
//!
//! This module defines the error types used throughout the harness-settings crate.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors that can occur while building, loading or saving harness settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// A builder operation was called before any database context was opened.
	#[error("Invalid sequence: `{operation}` requires a database added with `add_database` first")]
	InvalidSequence {
		/// Name of the builder operation that was called out of order.
		operation: &'static str,
	},

	/// The assembled configuration violates one or more invariants.
	#[error("Validation error: {0}")]
	Validation(ValidationErrors),

	/// Settings file not found.
	#[error("Settings file not found: {0}")]
	FileNotFound(String),

	/// Unsupported file extension.
	#[error("Unsupported file extension: {0}")]
	UnsupportedExtension(String),

	/// Error parsing settings data.
	#[error("Parse error: {0}")]
	ParseError(String),

	/// Error serializing settings data.
	#[error("Serialization error: {0}")]
	SerializationError(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	JsonError(#[from] serde_json::Error),

	/// YAML serialization/deserialization error (when yaml feature is enabled).
	#[cfg(feature = "yaml")]
	#[error("YAML error: {0}")]
	YamlError(#[from] serde_yaml::Error),
}

impl SettingsError {
	/// Returns the validation violations carried by this error, if any.
	pub fn violations(&self) -> Option<&ValidationErrors> {
		match self {
			Self::Validation(errors) => Some(errors),
			_ => None,
		}
	}
}

impl From<ValidationErrors> for SettingsError {
	fn from(errors: ValidationErrors) -> Self {
		Self::Validation(errors)
	}
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
