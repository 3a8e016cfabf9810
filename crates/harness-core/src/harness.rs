//! Per-suite provisioning harness.
//!
//! A [`Harness`] owns the provisioning pass of one test-suite instance:
//!
//! ```text
//! resolve ──► Resolved ──(auto_run: activate / manual: build)──► Provisioned
//!                                         └── collaborator error ──► Failed
//! ```
//!
//! Provisioning happens at most once. [`Harness::new`] runs both phases, so
//! constructing an auto-run suite means its fixtures are ready; this blocking
//! side effect of construction is part of the contract. Use
//! [`Harness::resolve`] and [`Harness::activate`] to run the phases
//! separately.

use std::fmt;

use crate::error::{HarnessError, HarnessResult};
use crate::lifecycle::{HarnessSuite, LifecycleDirective, LifecycleResolver};
use crate::provisioning::{ClientMap, ProvisioningBuilder, ProvisioningManager};

/// Lifecycle state of a [`Harness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarnessState {
	/// Directive resolved, nothing provisioned yet.
	Resolved,
	/// Clients provisioned. Terminal.
	Provisioned,
	/// The provisioning attempt failed. Terminal.
	Failed,
}

impl fmt::Display for HarnessState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Resolved => write!(f, "resolved"),
			Self::Provisioned => write!(f, "provisioned"),
			Self::Failed => write!(f, "failed"),
		}
	}
}

/// Provisions the databases of one test-suite instance exactly once.
///
/// Suites embed a harness and expose its clients:
///
/// ```
/// use harness_core::prelude::*;
///
/// struct StaticManager;
/// struct StaticBuilder;
///
/// impl ProvisioningManager for StaticManager {
///     type Client = &'static str;
///     type Builder = StaticBuilder;
///     fn using_settings(&self, _path: &str) -> StaticBuilder {
///         StaticBuilder
///     }
/// }
///
/// impl ProvisioningBuilder for StaticBuilder {
///     type Client = &'static str;
///     fn build(self) -> Result<ClientMap<&'static str>, ProvisioningError> {
///         Ok(ClientMap::from([("test".to_string(), "client")]))
///     }
/// }
///
/// struct PeopleSuite {
///     harness: Harness<StaticManager>,
/// }
///
/// impl HarnessSuite for PeopleSuite {
///     fn harness_config() -> Option<HarnessConfig> {
///         Some(HarnessConfig::new())
///     }
/// }
///
/// impl PeopleSuite {
///     fn new() -> HarnessResult<Self> {
///         Ok(Self { harness: Harness::new::<Self>(StaticManager)? })
///     }
/// }
///
/// let suite = PeopleSuite::new().unwrap();
/// assert_eq!(suite.harness.client("test"), Some(&"client"));
/// assert_eq!(suite.harness.directive().config_source_name(), "PeopleSuite.json");
/// ```
pub struct Harness<M: ProvisioningManager> {
	manager: M,
	directive: LifecycleDirective,
	state: HarnessState,
	clients: ClientMap<M::Client>,
}

impl<M: ProvisioningManager> Harness<M> {
	/// Resolves the directive of `S` and, in auto-run mode, provisions.
	///
	/// # Errors
	///
	/// - [`HarnessError::MissingConfiguration`] if `S` carries no marker
	/// - [`HarnessError::Provisioning`] if auto-run provisioning fails
	pub fn new<S: HarnessSuite>(manager: M) -> HarnessResult<Self> {
		let mut harness = Self::resolve::<S>(manager)?;
		harness.activate()?;
		Ok(harness)
	}

	/// Resolves the directive of `S` without provisioning.
	pub fn resolve<S: HarnessSuite>(manager: M) -> HarnessResult<Self> {
		let directive = LifecycleResolver::new().resolve::<S>()?;
		Ok(Self::with_directive(manager, directive))
	}

	/// Creates an unprovisioned harness from an explicit directive.
	pub fn with_directive(manager: M, directive: LifecycleDirective) -> Self {
		Self {
			manager,
			directive,
			state: HarnessState::Resolved,
			clients: ClientMap::new(),
		}
	}

	/// Runs auto-run provisioning.
	///
	/// Provisions when the directive is auto-run and nothing has been
	/// provisioned yet; does nothing for manual suites, which wait for
	/// [`build`](Self::build).
	///
	/// # Errors
	///
	/// [`HarnessError::InvalidOperation`] if provisioning already ran.
	pub fn activate(&mut self) -> HarnessResult<()> {
		self.ensure_resolved("activate")?;
		if self.directive.auto_run() {
			self.provision()?;
		}
		Ok(())
	}

	/// Provisions a manual (`auto_run = false`) suite.
	///
	/// # Errors
	///
	/// [`HarnessError::InvalidOperation`] if the suite is auto-run or
	/// provisioning already ran.
	pub fn build(&mut self) -> HarnessResult<&ClientMap<M::Client>> {
		self.ensure_resolved("build")?;
		if self.directive.auto_run() {
			return Err(HarnessError::InvalidOperation(format!(
				"suite `{}` provisions automatically; `build` is only valid when auto_run is false",
				self.directive.suite()
			)));
		}
		self.provision()?;
		Ok(&self.clients)
	}

	/// Returns the provisioned clients, or `None` before provisioning.
	pub fn clients(&self) -> Option<&ClientMap<M::Client>> {
		match self.state {
			HarnessState::Provisioned => Some(&self.clients),
			_ => None,
		}
	}

	/// Returns the client of one database.
	pub fn client(&self, database: &str) -> Option<&M::Client> {
		self.clients()?.get(database)
	}

	/// Consumes the harness, returning the provisioned clients.
	pub fn into_clients(self) -> Option<ClientMap<M::Client>> {
		match self.state {
			HarnessState::Provisioned => Some(self.clients),
			_ => None,
		}
	}

	/// Returns the resolved directive.
	pub fn directive(&self) -> &LifecycleDirective {
		&self.directive
	}

	/// Returns the lifecycle state.
	pub fn state(&self) -> HarnessState {
		self.state
	}

	/// Returns true once clients are provisioned.
	pub fn is_provisioned(&self) -> bool {
		self.state == HarnessState::Provisioned
	}

	/// Returns the provisioning manager.
	pub fn manager(&self) -> &M {
		&self.manager
	}

	fn ensure_resolved(&self, operation: &str) -> HarnessResult<()> {
		match self.state {
			HarnessState::Resolved => Ok(()),
			state => Err(HarnessError::InvalidOperation(format!(
				"cannot {} suite `{}`: provisioning already ran (state: {})",
				operation,
				self.directive.suite(),
				state
			))),
		}
	}

	fn provision(&mut self) -> HarnessResult<()> {
		let source = self.directive.config_source_name();
		tracing::info!(suite = self.directive.suite(), source, "provisioning harness");

		match self.manager.using_settings(source).build() {
			Ok(clients) => {
				tracing::info!(
					suite = self.directive.suite(),
					databases = clients.len(),
					"harness provisioned"
				);
				self.clients = clients;
				self.state = HarnessState::Provisioned;
				Ok(())
			}
			Err(error) => {
				tracing::warn!(
					suite = self.directive.suite(),
					source,
					%error,
					"harness provisioning failed"
				);
				self.state = HarnessState::Failed;
				Err(error.into())
			}
		}
	}
}

impl<M: ProvisioningManager> fmt::Debug for Harness<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Harness")
			.field("directive", &self.directive)
			.field("state", &self.state)
			.field("databases", &self.clients.keys().collect::<Vec<_>>())
			.finish()
	}
}
