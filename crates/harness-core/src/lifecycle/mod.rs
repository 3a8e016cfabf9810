//! Declarative lifecycle metadata for test suites.
//!
//! A suite type declares which settings source it provisions from, and
//! whether provisioning runs automatically, through a [`HarnessConfig`]
//! marker. Markers are attached in one of three ways:
//!
//! - implementing [`HarnessSuite::harness_config`] by hand
//! - `#[derive(HarnessSuite)]` with a `#[harness_config(..)]` attribute
//!   (requires the `macros` feature)
//! - [`register_harness_config`] for types whose impl stays empty
//!
//! Suites inherit the marker of their [`HarnessSuite::parent`] when they
//! carry none themselves. [`LifecycleResolver`] walks that chain.

mod registry;
mod resolver;

use std::any::TypeId;
use std::fmt;

pub use registry::{register_harness_config, registered_harness_config, unregister_harness_config};
pub use resolver::{LifecycleDirective, LifecycleResolver};

/// Declarative marker describing a suite's settings source and run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
	config_file_path: Option<String>,
	auto_run: bool,
}

impl HarnessConfig {
	/// Creates a marker with no explicit source and auto-run enabled.
	pub fn new() -> Self {
		Self {
			config_file_path: None,
			auto_run: true,
		}
	}

	/// Sets an explicit settings source.
	pub fn with_config_file_path(mut self, path: impl Into<String>) -> Self {
		self.config_file_path = Some(path.into());
		self
	}

	/// Sets whether provisioning runs when the harness is constructed.
	pub fn with_auto_run(mut self, auto_run: bool) -> Self {
		self.auto_run = auto_run;
		self
	}

	/// Returns the explicit settings source, treating an empty path as absent.
	pub fn config_file_path(&self) -> Option<&str> {
		self.config_file_path.as_deref().filter(|path| !path.is_empty())
	}

	/// Returns true if provisioning runs when the harness is constructed.
	pub fn auto_run(&self) -> bool {
		self.auto_run
	}
}

impl Default for HarnessConfig {
	fn default() -> Self {
		Self::new()
	}
}

/// Static metadata of a test-suite type.
///
/// Every method has a default, so an empty impl declares a suite with no
/// marker of its own and no parent.
///
/// # Example
///
/// ```
/// use harness_core::lifecycle::{HarnessConfig, HarnessSuite, SuiteType};
///
/// struct DatabaseSuite;
///
/// impl HarnessSuite for DatabaseSuite {
///     fn harness_config() -> Option<HarnessConfig> {
///         Some(HarnessConfig::new().with_auto_run(false))
///     }
/// }
///
/// struct PeopleSuite;
///
/// impl HarnessSuite for PeopleSuite {
///     fn parent() -> Option<SuiteType> {
///         Some(SuiteType::of::<DatabaseSuite>())
///     }
/// }
///
/// assert_eq!(PeopleSuite::suite_name(), "PeopleSuite");
/// ```
pub trait HarnessSuite: 'static {
	/// Marker attached directly to this type.
	fn harness_config() -> Option<HarnessConfig> {
		None
	}

	/// Ancestor whose marker is inherited when this type has none.
	fn parent() -> Option<SuiteType> {
		None
	}

	/// Simple, unqualified name of this type.
	fn suite_name() -> &'static str {
		simple_type_name::<Self>()
	}
}

/// Value descriptor of a [`HarnessSuite`] type.
#[derive(Clone, Copy)]
pub struct SuiteType {
	type_id: TypeId,
	name: &'static str,
	harness_config: fn() -> Option<HarnessConfig>,
	parent: fn() -> Option<SuiteType>,
}

impl SuiteType {
	/// Describes the suite type `S`.
	pub fn of<S: HarnessSuite>() -> Self {
		Self {
			type_id: TypeId::of::<S>(),
			name: S::suite_name(),
			harness_config: S::harness_config,
			parent: S::parent,
		}
	}

	/// Returns the `TypeId` of the described type.
	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	/// Returns the simple name of the described type.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the marker attached directly to the described type.
	pub fn harness_config(&self) -> Option<HarnessConfig> {
		(self.harness_config)()
	}

	/// Returns the parent suite type.
	pub fn parent(&self) -> Option<SuiteType> {
		(self.parent)()
	}

	/// Iterates over this type and then its ancestors, nearest first.
	///
	/// A type that reappears in its own chain ends the iteration.
	pub fn ancestors(&self) -> Ancestors {
		Ancestors {
			next: Some(*self),
			visited: Vec::new(),
		}
	}
}

impl PartialEq for SuiteType {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for SuiteType {}

impl fmt::Debug for SuiteType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SuiteType").field("name", &self.name).finish()
	}
}

/// Iterator over a suite type and its ancestors. See [`SuiteType::ancestors`].
#[derive(Debug)]
pub struct Ancestors {
	next: Option<SuiteType>,
	visited: Vec<TypeId>,
}

impl Iterator for Ancestors {
	type Item = SuiteType;

	fn next(&mut self) -> Option<SuiteType> {
		let current = self.next.take()?;
		if self.visited.contains(&current.type_id) {
			return None;
		}
		self.visited.push(current.type_id);
		self.next = current.parent();
		Some(current)
	}
}

/// Returns the unqualified name of `T`, without generic arguments.
///
/// ```
/// # use harness_core::lifecycle::simple_type_name;
/// assert_eq!(simple_type_name::<std::collections::HashMap<String, u8>>(), "HashMap");
/// assert_eq!(simple_type_name::<u32>(), "u32");
/// ```
pub fn simple_type_name<T: ?Sized>() -> &'static str {
	let full = std::any::type_name::<T>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}
