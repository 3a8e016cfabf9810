//! Validation of assembled harness configurations.
//!
//! Validation never stops at the first problem: every violation found in a
//! configuration is collected so fixture authors get a complete diagnostic
//! in one pass.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::settings::{DatabaseDescriptor, HarnessConfiguration};

/// A single invariant violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
	/// A database was added with an empty name.
	#[error("database at index {index} has an empty name")]
	EmptyDatabaseName {
		/// Position of the database in the configuration.
		index: usize,
	},

	/// Two or more databases share a name.
	#[error("database name '{name}' is used more than once")]
	DuplicateDatabaseName {
		/// The duplicated name.
		name: String,
	},

	/// A database has no connection string.
	#[error("database '{database}' has no connection string")]
	MissingConnectionString {
		/// Name of the offending database.
		database: String,
	},

	/// A collection was added with an empty name.
	#[error("collection at index {index} in database '{database}' has an empty name")]
	EmptyCollectionName {
		/// Name of the owning database.
		database: String,
		/// Position of the collection in the database.
		index: usize,
	},

	/// Two or more collections in one database share a name.
	#[error("collection name '{collection}' is used more than once in database '{database}'")]
	DuplicateCollectionName {
		/// Name of the owning database.
		database: String,
		/// The duplicated collection name.
		collection: String,
	},

	/// A collection is seeded on create but has no data source.
	#[error("collection '{collection}' in database '{database}' is seeded on create but has no data source path")]
	MissingDataSourcePath {
		/// Name of the owning database.
		database: String,
		/// Name of the offending collection.
		collection: String,
	},
}

/// Every violation found while validating a configuration, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
	violations: Vec<Violation>,
}

impl ValidationErrors {
	/// Creates an empty violation list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a violation.
	pub fn push(&mut self, violation: Violation) {
		self.violations.push(violation);
	}

	/// Returns true if no violation was recorded.
	pub fn is_empty(&self) -> bool {
		self.violations.is_empty()
	}

	/// Returns the number of recorded violations.
	pub fn len(&self) -> usize {
		self.violations.len()
	}

	/// Returns true if the given violation was recorded.
	pub fn contains(&self, violation: &Violation) -> bool {
		self.violations.contains(violation)
	}

	/// Iterates over the recorded violations.
	pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
		self.violations.iter()
	}

	/// Returns the recorded violations.
	pub fn violations(&self) -> &[Violation] {
		&self.violations
	}

	/// Converts into `Ok(())` when empty, `Err(self)` otherwise.
	pub fn into_result(self) -> Result<(), Self> {
		if self.is_empty() { Ok(()) } else { Err(self) }
	}
}

impl From<Vec<Violation>> for ValidationErrors {
	fn from(violations: Vec<Violation>) -> Self {
		Self { violations }
	}
}

impl<'a> IntoIterator for &'a ValidationErrors {
	type Item = &'a Violation;
	type IntoIter = std::slice::Iter<'a, Violation>;

	fn into_iter(self) -> Self::IntoIter {
		self.violations.iter()
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, violation) in self.violations.iter().enumerate() {
			if idx > 0 {
				f.write_str("; ")?;
			}
			write!(f, "{}", violation)?;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

/// Validates a whole configuration, collecting every violation.
pub fn validate_configuration(config: &HarnessConfiguration) -> Result<(), ValidationErrors> {
	let mut errors = ValidationErrors::new();
	let mut seen = HashSet::new();
	let mut reported = HashSet::new();

	for (index, database) in config.databases().iter().enumerate() {
		if database.name().is_empty() {
			errors.push(Violation::EmptyDatabaseName { index });
		} else if !seen.insert(database.name()) && reported.insert(database.name()) {
			errors.push(Violation::DuplicateDatabaseName {
				name: database.name().to_string(),
			});
		}

		validate_database(database, &mut errors);
	}

	errors.into_result()
}

fn validate_database(database: &DatabaseDescriptor, errors: &mut ValidationErrors) {
	if database.connection_string().is_empty() {
		errors.push(Violation::MissingConnectionString {
			database: database.name().to_string(),
		});
	}

	let mut seen = HashSet::new();
	let mut reported = HashSet::new();
	for (index, collection) in database.collections().iter().enumerate() {
		if collection.name().is_empty() {
			errors.push(Violation::EmptyCollectionName {
				database: database.name().to_string(),
				index,
			});
		} else if !seen.insert(collection.name()) && reported.insert(collection.name()) {
			errors.push(Violation::DuplicateCollectionName {
				database: database.name().to_string(),
				collection: collection.name().to_string(),
			});
		}

		if collection.seed_on_create() && collection.data_source_path().is_none() {
			errors.push(Violation::MissingDataSourcePath {
				database: database.name().to_string(),
				collection: collection.name().to_string(),
			});
		}
	}
}
