//! Settings serialization.
//!
//! Writes a [`HarnessConfiguration`] back to the file formats the parser reads.

use std::path::Path;

use super::{HarnessConfiguration, SettingsFormat};
use crate::error::{SettingsError, SettingsResult};

/// Serializer for harness settings files.
#[derive(Debug, Clone)]
pub struct SettingsSerializer {
	format: SettingsFormat,
	pretty: bool,
}

impl SettingsSerializer {
	/// Creates a serializer producing pretty-printed JSON.
	pub fn new() -> Self {
		Self {
			format: SettingsFormat::Json,
			pretty: true,
		}
	}

	/// Sets the output format.
	pub fn with_format(mut self, format: SettingsFormat) -> Self {
		self.format = format;
		self
	}

	/// Sets whether JSON output is pretty-printed.
	pub fn with_pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	/// Returns the configured output format.
	pub fn format(&self) -> SettingsFormat {
		self.format
	}

	/// Serializes a configuration to a string.
	pub fn serialize(&self, config: &HarnessConfiguration) -> SettingsResult<String> {
		match self.format {
			SettingsFormat::Json => self.serialize_json(config),
			SettingsFormat::Yaml => self.serialize_yaml(config),
		}
	}

	fn serialize_json(&self, config: &HarnessConfiguration) -> SettingsResult<String> {
		let result = if self.pretty {
			serde_json::to_string_pretty(config)
		} else {
			serde_json::to_string(config)
		};
		result.map_err(|e| SettingsError::SerializationError(e.to_string()))
	}

	#[cfg(feature = "yaml")]
	fn serialize_yaml(&self, config: &HarnessConfiguration) -> SettingsResult<String> {
		serde_yaml::to_string(config).map_err(|e| SettingsError::SerializationError(e.to_string()))
	}

	#[cfg(not(feature = "yaml"))]
	fn serialize_yaml(&self, _config: &HarnessConfiguration) -> SettingsResult<String> {
		Err(SettingsError::UnsupportedExtension(
			"YAML support requires the 'yaml' feature".to_string(),
		))
	}

	/// Writes a configuration to a file in the configured format.
	pub fn write_to_file(&self, config: &HarnessConfiguration, path: &Path) -> SettingsResult<()> {
		let content = self.serialize(config)?;
		std::fs::write(path, content)?;
		tracing::debug!(path = %path.display(), databases = config.len(), "wrote harness settings");
		Ok(())
	}
}

impl Default for SettingsSerializer {
	fn default() -> Self {
		Self::new()
	}
}
