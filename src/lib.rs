//! # Fixture Harness
//!
//! Declarative database test-fixture provisioning.
//!
//! A test suite declares which settings file describes its databases, and
//! whether they are provisioned as soon as the suite is constructed. A
//! datastore integration implements [`ProvisioningManager`]; the
//! [`Harness`] embedded in the suite drives it exactly once.
//!
//! ## Feature Flags
//!
//! - `macros` (default) - `#[derive(HarnessSuite)]`
//! - `yaml` - YAML settings and seed files
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use harness::prelude::*;
//!
//! #[derive(HarnessSuite)]
//! #[harness_config(config_file_path = "people.json")]
//! struct PeopleSuite {
//!     harness: Harness<MongoManager>,
//! }
//!
//! impl PeopleSuite {
//!     fn new(manager: MongoManager) -> HarnessResult<Self> {
//!         Ok(Self { harness: Harness::new::<Self>(manager)? })
//!     }
//! }
//!
//! // people.json, written once by a setup script
//! let settings = SettingsBuilder::new()
//!     .add_database("test")
//!     .with_connection_string("mongodb://localhost:27017")
//!     .drop_database_first()
//!     .add_collection("people", true, "people-seed.json")
//!     .build()?;
//! SettingsSerializer::new().write_to_file(&settings, Path::new("people.json"))?;
//! ```

pub mod lifecycle;
pub mod provisioning;
pub mod settings;

// Re-export settings
pub use harness_settings::{
	CollectionDescriptor, DatabaseDescriptor, HarnessConfiguration, SettingsBuilder,
	SettingsError, SettingsParser, SettingsSerializer,
};

// Re-export harness core
pub use harness_core::{
	ClientMap, DataProvider, FileDataProvider, Harness, HarnessConfig, HarnessError,
	HarnessResult, HarnessState, HarnessSuite, LifecycleDirective, LifecycleResolver,
	ProvisioningBuilder, ProvisioningError, ProvisioningManager, StaticDataProvider, SuiteType,
	register_harness_config,
};

/// Convenience re-exports for suites and datastore integrations.
pub mod prelude {
	pub use crate::{
		ClientMap, DataProvider, FileDataProvider, Harness, HarnessConfig, HarnessError,
		HarnessResult, HarnessState, HarnessSuite, LifecycleDirective, LifecycleResolver,
		ProvisioningBuilder, ProvisioningError, ProvisioningManager, StaticDataProvider,
		SuiteType, register_harness_config,
	};

	pub use crate::{
		CollectionDescriptor, DatabaseDescriptor, HarnessConfiguration, SettingsBuilder,
		SettingsError, SettingsParser, SettingsSerializer,
	};
}
