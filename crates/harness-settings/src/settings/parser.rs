//! Settings file parsing.
//!
//! This module handles parsing of settings files in JSON and YAML formats.
//! Parsed configurations are validated with the same rules the builder uses.

use std::path::Path;

use super::{HarnessConfiguration, SettingsFormat};
use crate::error::{SettingsError, SettingsResult};

/// Parser for settings files.
///
/// Supports both JSON and YAML formats (YAML requires the `yaml` feature).
#[derive(Debug, Default)]
pub struct SettingsParser;

impl SettingsParser {
	/// Creates a new settings parser.
	pub fn new() -> Self {
		Self
	}

	/// Parses a settings file from the given path.
	///
	/// The format is automatically detected from the file extension.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The file extension is not recognized
	/// - The file cannot be read
	/// - The file content is invalid or fails validation
	pub fn parse_file(&self, path: &Path) -> SettingsResult<HarnessConfiguration> {
		let format = SettingsFormat::from_path(path).ok_or_else(|| {
			SettingsError::UnsupportedExtension(
				path.extension()
					.and_then(|e| e.to_str())
					.unwrap_or("(none)")
					.to_string(),
			)
		})?;

		let content = std::fs::read_to_string(path).map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				SettingsError::FileNotFound(path.display().to_string())
			} else {
				SettingsError::IoError(e)
			}
		})?;

		tracing::debug!(path = %path.display(), %format, "parsing harness settings");
		self.parse_string(&content, format)
	}

	/// Parses settings from a string and validates the result.
	pub fn parse_string(
		&self,
		content: &str,
		format: SettingsFormat,
	) -> SettingsResult<HarnessConfiguration> {
		let config = match format {
			SettingsFormat::Json => self.parse_json(content)?,
			SettingsFormat::Yaml => self.parse_yaml(content)?,
		};

		config.validate()?;
		Ok(config)
	}

	fn parse_json(&self, content: &str) -> SettingsResult<HarnessConfiguration> {
		let value: serde_json::Value = serde_json::from_str(content)?;
		if !value.is_object() {
			return Err(SettingsError::ParseError(
				"Expected an object with a `databases` list".to_string(),
			));
		}
		Ok(serde_json::from_value(value)?)
	}

	#[cfg(feature = "yaml")]
	fn parse_yaml(&self, content: &str) -> SettingsResult<HarnessConfiguration> {
		let value: serde_yaml::Value = serde_yaml::from_str(content)?;
		if !value.is_mapping() {
			return Err(SettingsError::ParseError(
				"Expected a mapping with a `databases` list".to_string(),
			));
		}
		Ok(serde_yaml::from_value(value)?)
	}

	#[cfg(not(feature = "yaml"))]
	fn parse_yaml(&self, _content: &str) -> SettingsResult<HarnessConfiguration> {
		Err(SettingsError::UnsupportedExtension(
			"YAML support requires the 'yaml' feature".to_string(),
		))
	}
}
