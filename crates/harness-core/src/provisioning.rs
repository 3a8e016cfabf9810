//! The provisioning collaborator contract.
//!
//! The harness never talks to a datastore itself. It hands the resolved
//! settings source to a [`ProvisioningManager`], which returns a builder; the
//! builder turns the settings into live client handles keyed by database
//! name. How the source is parsed, in which order databases are dropped and
//! collections seeded, and how clients connect all belong to the manager.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

/// Live client handles keyed by database name.
pub type ClientMap<C> = HashMap<String, C>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised by a provisioning collaborator.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProvisioningError {
	message: String,
	#[source]
	source: Option<BoxError>,
}

impl ProvisioningError {
	/// Creates an error with a message.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			source: None,
		}
	}

	/// Creates an error wrapping an underlying cause.
	pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
		Self {
			message: message.into(),
			source: Some(source.into()),
		}
	}

	/// Returns the error message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Entry point of the provisioning collaborator.
///
/// # Example
///
/// ```
/// use harness_core::provisioning::{ClientMap, ProvisioningBuilder, ProvisioningError, ProvisioningManager};
///
/// struct EchoManager;
///
/// struct EchoBuilder(String);
///
/// impl ProvisioningManager for EchoManager {
///     type Client = String;
///     type Builder = EchoBuilder;
///
///     fn using_settings(&self, path: &str) -> EchoBuilder {
///         EchoBuilder(path.to_string())
///     }
/// }
///
/// impl ProvisioningBuilder for EchoBuilder {
///     type Client = String;
///
///     fn build(self) -> Result<ClientMap<String>, ProvisioningError> {
///         Ok(ClientMap::from([("source".to_string(), self.0)]))
///     }
/// }
///
/// let clients = EchoManager.using_settings("Suite.json").build().unwrap();
/// assert_eq!(clients["source"], "Suite.json");
/// ```
pub trait ProvisioningManager {
	/// Client handle type produced for each database.
	type Client;

	/// Builder returned by [`using_settings`](Self::using_settings).
	type Builder: ProvisioningBuilder<Client = Self::Client>;

	/// Selects the settings source to provision from.
	fn using_settings(&self, path: &str) -> Self::Builder;
}

/// Second step of the provisioning collaborator.
pub trait ProvisioningBuilder {
	/// Client handle type produced for each database.
	type Client;

	/// Provisions every configured database and returns its clients.
	fn build(self) -> Result<ClientMap<Self::Client>, ProvisioningError>;
}

impl<M: ProvisioningManager + ?Sized> ProvisioningManager for &M {
	type Client = M::Client;
	type Builder = M::Builder;

	fn using_settings(&self, path: &str) -> Self::Builder {
		(**self).using_settings(path)
	}
}

impl<M: ProvisioningManager + ?Sized> ProvisioningManager for Arc<M> {
	type Client = M::Client;
	type Builder = M::Builder;

	fn using_settings(&self, path: &str) -> Self::Builder {
		(**self).using_settings(path)
	}
}

impl<M: ProvisioningManager + ?Sized> ProvisioningManager for Box<M> {
	type Client = M::Client;
	type Builder = M::Builder;

	fn using_settings(&self, path: &str) -> Self::Builder {
		(**self).using_settings(path)
	}
}
