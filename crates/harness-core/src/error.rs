//! Error types for the harness core.

use harness_settings::SettingsError;
use thiserror::Error;

use crate::provisioning::ProvisioningError;

/// Errors that can occur while resolving or provisioning a harness.
#[derive(Debug, Error)]
pub enum HarnessError {
	/// The suite type, and every ancestor, lacks a harness configuration marker.
	#[error("No harness configuration found for suite `{suite}`")]
	MissingConfiguration {
		/// Simple name of the suite type.
		suite: &'static str,
	},

	/// The harness is not in a state that permits the requested operation.
	#[error("Invalid operation: {0}")]
	InvalidOperation(String),

	/// The provisioning collaborator failed.
	#[error("Provisioning failed: {0}")]
	Provisioning(#[from] ProvisioningError),

	/// Settings could not be built or loaded.
	#[error(transparent)]
	Settings(#[from] SettingsError),

	/// A data provider could not produce its records.
	#[error("Data provider error: {0}")]
	DataProvider(String),
}

/// Result type alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
