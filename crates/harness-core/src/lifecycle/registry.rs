//! Global registry of harness markers.
//!
//! Attaches [`HarnessConfig`] markers to suite types without touching their
//! [`HarnessSuite`](super::HarnessSuite) impl. A marker implemented on the
//! type itself wins over a registered one.

use std::any::TypeId;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::HarnessConfig;
use super::resolver::invalidate_directives;

/// Markers keyed by suite type.
static MARKER_REGISTRY: Lazy<RwLock<HashMap<TypeId, HarnessConfig>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers a marker for the suite type `S`, replacing any previous one.
///
/// # Example
///
/// ```
/// use harness_core::lifecycle::{HarnessConfig, HarnessSuite, LifecycleResolver, register_harness_config};
///
/// struct LegacySuite;
/// impl HarnessSuite for LegacySuite {}
///
/// register_harness_config::<LegacySuite>(HarnessConfig::new().with_config_file_path("legacy.json"));
///
/// let directive = LifecycleResolver::new().resolve::<LegacySuite>().unwrap();
/// assert_eq!(directive.config_source_name(), "legacy.json");
/// ```
pub fn register_harness_config<S: 'static>(config: HarnessConfig) {
	MARKER_REGISTRY.write().insert(TypeId::of::<S>(), config);
	invalidate_directives();
}

/// Removes the registered marker for the suite type `S`.
pub fn unregister_harness_config<S: 'static>() -> Option<HarnessConfig> {
	let removed = MARKER_REGISTRY.write().remove(&TypeId::of::<S>());
	if removed.is_some() {
		invalidate_directives();
	}
	removed
}

/// Returns the registered marker for the suite type `S`.
pub fn registered_harness_config<S: 'static>() -> Option<HarnessConfig> {
	lookup(TypeId::of::<S>())
}

pub(super) fn lookup(type_id: TypeId) -> Option<HarnessConfig> {
	MARKER_REGISTRY.read().get(&type_id).cloned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct RegisteredOnly;
	struct NeverRegistered;
	struct Replaced;

	#[rstest]
	fn test_register_and_lookup() {
		register_harness_config::<RegisteredOnly>(
			HarnessConfig::new().with_config_file_path("registered.json"),
		);

		let config = registered_harness_config::<RegisteredOnly>().unwrap();
		assert_eq!(config.config_file_path(), Some("registered.json"));
		assert!(registered_harness_config::<NeverRegistered>().is_none());
	}

	#[rstest]
	fn test_register_replaces_and_unregister_removes() {
		register_harness_config::<Replaced>(HarnessConfig::new());
		register_harness_config::<Replaced>(HarnessConfig::new().with_auto_run(false));

		let removed = unregister_harness_config::<Replaced>().unwrap();
		assert!(!removed.auto_run());
		assert!(registered_harness_config::<Replaced>().is_none());
		assert!(unregister_harness_config::<Replaced>().is_none());
	}
}
