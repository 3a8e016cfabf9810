//! Settings format definitions.
//!
//! This module defines the configuration tree produced by
//! [`SettingsBuilder`](crate::SettingsBuilder) and the file formats it can be
//! persisted in.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A collection to create, and optionally seed, inside a database.
///
/// # Example
///
/// ```json
/// {
///   "name": "people",
///   "seed_on_create": true,
///   "data_source_path": "data/people.json"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
	pub(crate) name: String,

	#[serde(default)]
	pub(crate) seed_on_create: bool,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) data_source_path: Option<String>,
}

impl CollectionDescriptor {
	/// Creates a new collection descriptor.
	pub fn new(name: impl Into<String>, seed_on_create: bool, data_source_path: Option<String>) -> Self {
		Self {
			name: name.into(),
			seed_on_create,
			data_source_path,
		}
	}

	/// Returns the collection name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if the collection is seeded when it is created.
	pub fn seed_on_create(&self) -> bool {
		self.seed_on_create
	}

	/// Returns the seed data source, treating an empty path as absent.
	pub fn data_source_path(&self) -> Option<&str> {
		self.data_source_path.as_deref().filter(|path| !path.is_empty())
	}
}

/// A logical database with its connection target and collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
	pub(crate) name: String,

	#[serde(default)]
	pub(crate) connection_string: String,

	#[serde(default)]
	pub(crate) drop_before_use: bool,

	#[serde(default)]
	pub(crate) collections: Vec<CollectionDescriptor>,
}

impl DatabaseDescriptor {
	/// Creates a new database descriptor.
	pub fn new(
		name: impl Into<String>,
		connection_string: impl Into<String>,
		drop_before_use: bool,
		collections: Vec<CollectionDescriptor>,
	) -> Self {
		Self {
			name: name.into(),
			connection_string: connection_string.into(),
			drop_before_use,
			collections,
		}
	}

	/// Opens an empty database context, as `add_database` does.
	pub(crate) fn named(name: String) -> Self {
		Self::new(name, String::new(), false, Vec::new())
	}

	/// Returns the database name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the connection string.
	pub fn connection_string(&self) -> &str {
		&self.connection_string
	}

	/// Returns true if the database is dropped before it is used.
	pub fn drop_before_use(&self) -> bool {
		self.drop_before_use
	}

	/// Returns the collections in insertion order.
	pub fn collections(&self) -> &[CollectionDescriptor] {
		&self.collections
	}

	/// Looks up a collection by name.
	pub fn collection(&self, name: &str) -> Option<&CollectionDescriptor> {
		self.collections.iter().find(|c| c.name == name)
	}

	/// Iterates over the collections that are seeded on create.
	pub fn seeded_collections(&self) -> impl Iterator<Item = &CollectionDescriptor> {
		self.collections.iter().filter(|c| c.seed_on_create)
	}
}

/// The complete, read-only harness configuration.
///
/// Instances are produced by [`SettingsBuilder::build`](crate::SettingsBuilder::build)
/// or [`SettingsParser`](super::SettingsParser); both validate before handing
/// the configuration out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfiguration {
	#[serde(default)]
	pub(crate) databases: Vec<DatabaseDescriptor>,
}

impl HarnessConfiguration {
	/// Creates a configuration from database descriptors without validating it.
	pub fn new(databases: Vec<DatabaseDescriptor>) -> Self {
		Self { databases }
	}

	/// Returns the databases in insertion order.
	pub fn databases(&self) -> &[DatabaseDescriptor] {
		&self.databases
	}

	/// Looks up a database by name.
	pub fn database(&self, name: &str) -> Option<&DatabaseDescriptor> {
		self.databases.iter().find(|d| d.name == name)
	}

	/// Returns the database names in insertion order.
	pub fn database_names(&self) -> Vec<&str> {
		self.databases.iter().map(|d| d.name.as_str()).collect()
	}

	/// Returns the number of databases.
	pub fn len(&self) -> usize {
		self.databases.len()
	}

	/// Returns true if no database is configured.
	pub fn is_empty(&self) -> bool {
		self.databases.is_empty()
	}

	/// Validates the configuration, collecting every violation.
	pub fn validate(&self) -> Result<(), crate::validation::ValidationErrors> {
		crate::validation::validate_configuration(self)
	}
}

/// Supported settings file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SettingsFormat {
	/// JSON format (default).
	#[default]
	Json,

	/// YAML format (requires `yaml` feature).
	Yaml,
}

impl SettingsFormat {
	/// Determines the settings format from a file extension.
	///
	/// # Example
	///
	/// ```
	/// # use harness_settings::settings::SettingsFormat;
	/// assert_eq!(SettingsFormat::from_extension("json"), Some(SettingsFormat::Json));
	/// assert_eq!(SettingsFormat::from_extension("YML"), Some(SettingsFormat::Yaml));
	/// assert_eq!(SettingsFormat::from_extension("xml"), None);
	/// ```
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext.to_lowercase().as_str() {
			"json" => Some(Self::Json),
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}

	/// Determines the settings format from a file path.
	pub fn from_path(path: &Path) -> Option<Self> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::from_extension)
	}

	/// Returns the default file extension for this format.
	pub fn extension(&self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Yaml => "yaml",
		}
	}
}

impl std::fmt::Display for SettingsFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Json => write!(f, "JSON"),
			Self::Yaml => write!(f, "YAML"),
		}
	}
}
