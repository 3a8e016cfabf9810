//! Fluent builder for harness configurations.
//!
//! The builder keeps a single cursor, the database currently being described.
//! [`SettingsBuilder::add_database`] seals the current database and opens a
//! new one; every other operation applies to the open database. Validation is
//! deferred to [`SettingsBuilder::build`] so collections can be added
//! conditionally without rolling anything back.
//!
//! # Example
//!
//! ```
//! use harness_settings::SettingsBuilder;
//!
//! let config = SettingsBuilder::new()
//!     .add_database("test")
//!     .with_connection_string("conn")
//!     .drop_database_first()
//!     .add_collection("col1", true, "path1")
//!     .add_collection("col2", true, "path2")
//!     .add_database("test2")
//!     .with_connection_string("conn2")
//!     .add_collection("col1", false, "")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.database_names(), vec!["test", "test2"]);
//! ```

use crate::error::{SettingsError, SettingsResult};
use crate::settings::{CollectionDescriptor, DatabaseDescriptor, HarnessConfiguration};

/// Stateful assembler for a [`HarnessConfiguration`].
///
/// Every operation takes the builder by value and returns it, so calls chain.
/// An operation that needs an open database but finds none is recorded and
/// reported by [`build`](Self::build) as [`SettingsError::InvalidSequence`].
#[derive(Debug, Default)]
#[must_use = "a settings builder does nothing until `build` is called"]
pub struct SettingsBuilder {
	databases: Vec<DatabaseDescriptor>,
	current: Option<DatabaseDescriptor>,
	out_of_sequence: Option<&'static str>,
}

impl SettingsBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Seals the open database, if any, and opens a new one.
	///
	/// An empty name is reported by [`build`](Self::build).
	pub fn add_database(mut self, name: impl Into<String>) -> Self {
		self.seal_current();
		self.current = Some(DatabaseDescriptor::named(name.into()));
		self
	}

	/// Sets the connection string of the open database.
	pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
		if let Some(database) = self.current_mut("with_connection_string") {
			database.connection_string = connection_string.into();
		}
		self
	}

	/// Marks the open database to be dropped before use. Idempotent.
	pub fn drop_database_first(mut self) -> Self {
		if let Some(database) = self.current_mut("drop_database_first") {
			database.drop_before_use = true;
		}
		self
	}

	/// Appends a collection to the open database.
	///
	/// `data_source_path` is only required when `seed_on_create` is true; an
	/// empty path is stored as absent.
	pub fn add_collection(
		mut self,
		name: impl Into<String>,
		seed_on_create: bool,
		data_source_path: impl Into<String>,
	) -> Self {
		let data_source_path = Some(data_source_path.into()).filter(|path| !path.is_empty());
		if let Some(database) = self.current_mut("add_collection") {
			database
				.collections
				.push(CollectionDescriptor::new(name, seed_on_create, data_source_path));
		}
		self
	}

	/// Seals the last database, validates everything and returns the configuration.
	///
	/// # Errors
	///
	/// - [`SettingsError::InvalidSequence`] if an operation was called before
	///   any database was added
	/// - [`SettingsError::Validation`] carrying every violation found
	pub fn build(mut self) -> SettingsResult<HarnessConfiguration> {
		if let Some(operation) = self.out_of_sequence {
			return Err(SettingsError::InvalidSequence { operation });
		}

		self.seal_current();
		let config = HarnessConfiguration::new(self.databases);
		config.validate()?;

		tracing::debug!(databases = config.len(), "built harness configuration");
		Ok(config)
	}

	fn seal_current(&mut self) {
		if let Some(database) = self.current.take() {
			tracing::trace!(
				database = database.name(),
				collections = database.collections().len(),
				"sealed database context"
			);
			self.databases.push(database);
		}
	}

	fn current_mut(&mut self, operation: &'static str) -> Option<&mut DatabaseDescriptor> {
		if self.current.is_none() && self.out_of_sequence.is_none() {
			self.out_of_sequence = Some(operation);
		}
		self.current.as_mut()
	}
}
