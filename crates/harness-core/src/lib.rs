//! Lifecycle resolution and provisioning for database test fixtures.
//!
//! A test suite declares, through a [`HarnessConfig`] marker, which settings
//! source describes its databases and whether they are provisioned as soon
//! as the suite is constructed. The crate provides:
//!
//! - **Lifecycle resolution**: [`LifecycleResolver`] turns a suite type, or
//!   the nearest ancestor carrying a marker, into a [`LifecycleDirective`]
//! - **Harness**: [`Harness`] provisions a suite's databases exactly once,
//!   automatically or on an explicit [`Harness::build`]
//! - **Provisioning contract**: [`ProvisioningManager`] and
//!   [`ProvisioningBuilder`], implemented by the datastore integration
//! - **Seed data**: [`DataProvider`] implementations for files and in-memory
//!   records
//!
//! # Features
//!
//! - `macros` - `#[derive(HarnessSuite)]` (enabled by default)
//! - `yaml` - YAML settings and seed files
//! - `full` - All features enabled
//!
//! # Quick Start
//!
//! ```ignore
//! use harness_core::prelude::*;
//!
//! #[derive(HarnessSuite)]
//! #[harness_config(config_file_path = "people.json")]
//! struct PeopleSuite {
//!     harness: Harness<MongoManager>,
//! }
//!
//! impl PeopleSuite {
//!     fn new(manager: MongoManager) -> HarnessResult<Self> {
//!         // provisions immediately: auto_run defaults to true
//!         Ok(Self { harness: Harness::new::<Self>(manager)? })
//!     }
//! }
//! ```
//!
//! Manual suites defer provisioning:
//!
//! ```ignore
//! #[derive(HarnessSuite)]
//! #[harness_config(auto_run = false)]
//! struct ReportingSuite;
//!
//! let mut harness = Harness::new::<ReportingSuite>(manager)?; // nothing provisioned
//! let clients = harness.build()?;                              // provisions from "ReportingSuite.json"
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod data;
pub mod error;
pub mod harness;
pub mod lifecycle;
pub mod prelude;
pub mod provisioning;

// Re-export commonly used types at crate root
pub use data::{DataProvider, FileDataProvider, StaticDataProvider};
pub use error::{HarnessError, HarnessResult};
pub use harness::{Harness, HarnessState};
pub use lifecycle::{
	HarnessConfig, HarnessSuite, LifecycleDirective, LifecycleResolver, SuiteType,
	register_harness_config,
};
pub use provisioning::{ClientMap, ProvisioningBuilder, ProvisioningError, ProvisioningManager};

// Re-export derive macro when available
#[cfg(feature = "macros")]
pub use harness_macros::HarnessSuite;
