//! Shared helpers for harness-core integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use harness_core::prelude::*;
use harness_settings::SettingsParser;
use parking_lot::Mutex;
use serde_json::Value;

static INIT: Once = Once::new();

/// Initialize logging for tests (call once)
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_test_writer()
			.with_max_level(tracing::Level::DEBUG)
			.try_init();
	});
}

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	UsingSettings(String),
	Build(String),
}

/// Provisioning manager that records every call and returns one client per path.
#[derive(Default, Clone)]
pub struct RecordingManager {
	calls: Arc<Mutex<Vec<Call>>>,
}

pub struct RecordingBuilder {
	path: String,
	calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingManager {
	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().clone()
	}

	pub fn using_settings_calls(&self) -> Vec<String> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::UsingSettings(path) => Some(path),
				Call::Build(_) => None,
			})
			.collect()
	}

	pub fn build_count(&self) -> usize {
		self.calls()
			.iter()
			.filter(|call| matches!(call, Call::Build(_)))
			.count()
	}
}

impl ProvisioningManager for RecordingManager {
	type Client = String;
	type Builder = RecordingBuilder;

	fn using_settings(&self, path: &str) -> RecordingBuilder {
		self.calls.lock().push(Call::UsingSettings(path.to_string()));
		RecordingBuilder {
			path: path.to_string(),
			calls: Arc::clone(&self.calls),
		}
	}
}

impl ProvisioningBuilder for RecordingBuilder {
	type Client = String;

	fn build(self) -> Result<ClientMap<String>, ProvisioningError> {
		self.calls.lock().push(Call::Build(self.path.clone()));
		Ok(ClientMap::from([("default".to_string(), self.path)]))
	}
}

/// In-memory stand-in for a datastore client: collections of records.
#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
	pub connection_string: String,
	pub dropped: bool,
	pub collections: HashMap<String, Vec<Value>>,
}

/// Provisioning manager backed by real settings files and seed files.
pub struct MemoryManager {
	base_dir: PathBuf,
}

pub struct MemoryBuilder {
	settings_path: PathBuf,
	base_dir: PathBuf,
}

impl MemoryManager {
	pub fn new(base_dir: impl AsRef<Path>) -> Self {
		Self {
			base_dir: base_dir.as_ref().to_path_buf(),
		}
	}
}

impl ProvisioningManager for MemoryManager {
	type Client = MemoryClient;
	type Builder = MemoryBuilder;

	fn using_settings(&self, path: &str) -> MemoryBuilder {
		MemoryBuilder {
			settings_path: self.base_dir.join(path),
			base_dir: self.base_dir.clone(),
		}
	}
}

impl ProvisioningBuilder for MemoryBuilder {
	type Client = MemoryClient;

	fn build(self) -> Result<ClientMap<MemoryClient>, ProvisioningError> {
		let config = SettingsParser::new()
			.parse_file(&self.settings_path)
			.map_err(|e| ProvisioningError::with_source("cannot load settings", e))?;

		let mut clients = ClientMap::new();
		for database in config.databases() {
			let mut client = MemoryClient {
				connection_string: database.connection_string().to_string(),
				dropped: database.drop_before_use(),
				collections: HashMap::new(),
			};
			for collection in database.collections() {
				let records = match FileDataProvider::for_collection(collection, &self.base_dir) {
					Some(provider) => provider
						.get_data()
						.map_err(|e| ProvisioningError::with_source("cannot seed collection", e))?,
					None => Vec::new(),
				};
				client
					.collections
					.insert(collection.name().to_string(), records);
			}
			clients.insert(database.name().to_string(), client);
		}
		Ok(clients)
	}
}
