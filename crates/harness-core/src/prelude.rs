//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the harness-core crate.

// Error types
pub use crate::error::{HarnessError, HarnessResult};

// Lifecycle types
pub use crate::lifecycle::{
	HarnessConfig, HarnessSuite, LifecycleDirective, LifecycleResolver, SuiteType,
	register_harness_config,
};

// Harness types
pub use crate::harness::{Harness, HarnessState};
pub use crate::provisioning::{
	ClientMap, ProvisioningBuilder, ProvisioningError, ProvisioningManager,
};

// Seed data
pub use crate::data::{DataProvider, FileDataProvider, StaticDataProvider};

// Re-export the HarnessSuite derive macro when available
#[cfg(feature = "macros")]
pub use harness_macros::HarnessSuite;
