//! Seed data providers.
//!
//! A collection that is seeded on create names a data source. Anything that
//! can produce a finite sequence of records can serve as that source; the
//! harness does not define the record shape beyond "a JSON-like value".

use std::path::{Path, PathBuf};

use harness_settings::{CollectionDescriptor, SettingsFormat};
use serde::Serialize;
use serde_json::Value;

use crate::error::{HarnessError, HarnessResult};

/// Produces the records used to seed a collection.
pub trait DataProvider {
	/// Returns every record, in order.
	fn get_data(&self) -> HarnessResult<Vec<Value>>;
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
	fn get_data(&self) -> HarnessResult<Vec<Value>> {
		(**self).get_data()
	}
}

/// Provides in-memory records.
///
/// # Example
///
/// ```
/// use harness_core::data::{DataProvider, StaticDataProvider};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Person {
///     first_name: &'static str,
///     age: u32,
/// }
///
/// let provider = StaticDataProvider::new(vec![Person { first_name: "Peter", age: 31 }]);
/// let records = provider.get_data().unwrap();
/// assert_eq!(records[0]["first_name"], "Peter");
/// ```
#[derive(Debug, Clone)]
pub struct StaticDataProvider<T> {
	records: Vec<T>,
}

impl<T: Serialize> StaticDataProvider<T> {
	/// Creates a provider over the given records.
	pub fn new(records: Vec<T>) -> Self {
		Self { records }
	}
}

impl<T: Serialize> DataProvider for StaticDataProvider<T> {
	fn get_data(&self) -> HarnessResult<Vec<Value>> {
		self.records
			.iter()
			.enumerate()
			.map(|(idx, record)| {
				serde_json::to_value(record).map_err(|e| {
					HarnessError::DataProvider(format!("Invalid record at index {}: {}", idx, e))
				})
			})
			.collect()
	}
}

/// Reads records from a JSON (or, with the `yaml` feature, YAML) file.
///
/// The file holds either a list of records or a single record.
#[derive(Debug, Clone)]
pub struct FileDataProvider {
	path: PathBuf,
}

impl FileDataProvider {
	/// Creates a provider reading the given file.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Creates the provider for a seeded collection.
	///
	/// Relative data source paths are resolved against `base_dir`. Returns
	/// `None` for collections that are not seeded on create or have no path.
	pub fn for_collection(collection: &CollectionDescriptor, base_dir: &Path) -> Option<Self> {
		if !collection.seed_on_create() {
			return None;
		}
		collection
			.data_source_path()
			.map(|path| Self::new(base_dir.join(path)))
	}

	/// Returns the file the provider reads.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read(&self) -> HarnessResult<String> {
		std::fs::read_to_string(&self.path).map_err(|e| {
			HarnessError::DataProvider(format!("Cannot read {}: {}", self.path.display(), e))
		})
	}

	fn parse_json(&self, content: &str) -> HarnessResult<Vec<Value>> {
		let value: Value = serde_json::from_str(content).map_err(|e| {
			HarnessError::DataProvider(format!("Invalid JSON in {}: {}", self.path.display(), e))
		})?;
		self.records_from(value)
	}

	#[cfg(feature = "yaml")]
	fn parse_yaml(&self, content: &str) -> HarnessResult<Vec<Value>> {
		let value: Value = serde_yaml::from_str(content).map_err(|e| {
			HarnessError::DataProvider(format!("Invalid YAML in {}: {}", self.path.display(), e))
		})?;
		self.records_from(value)
	}

	#[cfg(not(feature = "yaml"))]
	fn parse_yaml(&self, _content: &str) -> HarnessResult<Vec<Value>> {
		Err(HarnessError::DataProvider(
			"YAML support requires the 'yaml' feature".to_string(),
		))
	}

	fn records_from(&self, value: Value) -> HarnessResult<Vec<Value>> {
		match value {
			Value::Array(records) => Ok(records),
			record @ Value::Object(_) => Ok(vec![record]),
			_ => Err(HarnessError::DataProvider(format!(
				"Expected a list of records or a single record in {}",
				self.path.display()
			))),
		}
	}
}

impl DataProvider for FileDataProvider {
	fn get_data(&self) -> HarnessResult<Vec<Value>> {
		let format = SettingsFormat::from_path(&self.path).ok_or_else(|| {
			HarnessError::DataProvider(format!(
				"Unsupported data file extension: {}",
				self.path.display()
			))
		})?;

		let content = self.read()?;
		let records = match format {
			SettingsFormat::Json => self.parse_json(&content)?,
			SettingsFormat::Yaml => self.parse_yaml(&content)?,
		};
		tracing::debug!(path = %self.path.display(), records = records.len(), "loaded seed data");
		Ok(records)
	}
}
