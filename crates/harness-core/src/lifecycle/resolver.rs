//! Resolution of a suite type to its settings source and run mode.

use std::any::TypeId;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::{HarnessConfig, HarnessSuite, SuiteType, registry};
use crate::error::{HarnessError, HarnessResult};

/// Resolved directives keyed by suite type.
///
/// `generation` advances on every invalidation; a directive computed under an
/// older generation is never stored.
#[derive(Default)]
struct DirectiveCache {
	generation: u64,
	entries: HashMap<TypeId, LifecycleDirective>,
}

static DIRECTIVE_CACHE: Lazy<RwLock<DirectiveCache>> =
	Lazy::new(|| RwLock::new(DirectiveCache::default()));

pub(super) fn invalidate_directives() {
	let mut cache = DIRECTIVE_CACHE.write();
	cache.generation += 1;
	cache.entries.clear();
}

/// The settings source and run mode resolved for a suite type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleDirective {
	suite: &'static str,
	config_source_name: String,
	auto_run: bool,
}

impl LifecycleDirective {
	/// Creates a directive directly, bypassing type metadata.
	pub fn new(suite: &'static str, config_source_name: impl Into<String>, auto_run: bool) -> Self {
		Self {
			suite,
			config_source_name: config_source_name.into(),
			auto_run,
		}
	}

	/// Returns the simple name of the suite the directive was resolved for.
	pub fn suite(&self) -> &'static str {
		self.suite
	}

	/// Returns the settings source handed to the provisioning manager.
	pub fn config_source_name(&self) -> &str {
		&self.config_source_name
	}

	/// Returns true if provisioning runs when the harness is constructed.
	pub fn auto_run(&self) -> bool {
		self.auto_run
	}
}

/// Resolves [`LifecycleDirective`]s from suite metadata.
///
/// Resolution is pure and deterministic; successful results are memoized per
/// type until a marker is registered or removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LifecycleResolver;

impl LifecycleResolver {
	/// Creates a resolver.
	pub fn new() -> Self {
		Self
	}

	/// Resolves the directive for the suite type `S`.
	///
	/// # Errors
	///
	/// Returns [`HarnessError::MissingConfiguration`] if neither `S` nor any
	/// of its ancestors carries a marker.
	pub fn resolve<S: HarnessSuite>(&self) -> HarnessResult<LifecycleDirective> {
		self.resolve_type(SuiteType::of::<S>())
	}

	/// Resolves the directive for a described suite type.
	pub fn resolve_type(&self, suite: SuiteType) -> HarnessResult<LifecycleDirective> {
		let generation = {
			let cache = DIRECTIVE_CACHE.read();
			if let Some(directive) = cache.entries.get(&suite.type_id()) {
				return Ok(directive.clone());
			}
			cache.generation
		};

		let (_, config) = nearest_marker(suite).ok_or(HarnessError::MissingConfiguration {
			suite: suite.name(),
		})?;

		let config_source_name = match config.config_file_path() {
			Some(path) => path.to_string(),
			None => default_source_name(suite),
		};
		let directive = LifecycleDirective::new(suite.name(), config_source_name, config.auto_run());

		tracing::debug!(
			suite = directive.suite(),
			source = directive.config_source_name(),
			auto_run = directive.auto_run(),
			"resolved harness lifecycle"
		);
		let mut cache = DIRECTIVE_CACHE.write();
		if cache.generation == generation {
			cache
				.entries
				.entry(suite.type_id())
				.or_insert_with(|| directive.clone());
		}
		Ok(directive)
	}

	/// Returns the nearest marker on `S` or its ancestors.
	pub fn find_harness_config<S: HarnessSuite>(&self) -> Option<HarnessConfig> {
		nearest_marker(SuiteType::of::<S>()).map(|(_, config)| config)
	}

	/// Returns the suite type that carries the marker `S` resolves to.
	pub fn marker_owner<S: HarnessSuite>(&self) -> Option<SuiteType> {
		nearest_marker(SuiteType::of::<S>()).map(|(owner, _)| owner)
	}

	/// Forgets every memoized directive.
	pub fn clear_cache(&self) {
		invalidate_directives();
	}
}

/// Default settings source, `<TypeName>.json`, named after the concrete suite.
fn default_source_name(suite: SuiteType) -> String {
	format!("{}.json", suite.name())
}

fn nearest_marker(suite: SuiteType) -> Option<(SuiteType, HarnessConfig)> {
	suite.ancestors().find_map(|ty| {
		ty.harness_config()
			.or_else(|| registry::lookup(ty.type_id()))
			.map(|config| (ty, config))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lifecycle::register_harness_config;
	use rstest::rstest;

	struct ExplicitPath;
	impl HarnessSuite for ExplicitPath {
		fn harness_config() -> Option<HarnessConfig> {
			Some(HarnessConfig::new().with_config_file_path("TestPath"))
		}
	}

	struct DefaultPath;
	impl HarnessSuite for DefaultPath {
		fn harness_config() -> Option<HarnessConfig> {
			Some(HarnessConfig::new())
		}
	}

	struct Manual;
	impl HarnessSuite for Manual {
		fn harness_config() -> Option<HarnessConfig> {
			Some(HarnessConfig::new().with_config_file_path("TestPath").with_auto_run(false))
		}
	}

	struct Unmarked;
	impl HarnessSuite for Unmarked {}

	struct InheritsDefault;
	impl HarnessSuite for InheritsDefault {
		fn parent() -> Option<SuiteType> {
			Some(SuiteType::of::<DefaultPath>())
		}
	}

	struct InheritsManual;
	impl HarnessSuite for InheritsManual {
		fn parent() -> Option<SuiteType> {
			Some(SuiteType::of::<Manual>())
		}
	}

	struct InheritsUnmarked;
	impl HarnessSuite for InheritsUnmarked {
		fn parent() -> Option<SuiteType> {
			Some(SuiteType::of::<Unmarked>())
		}
	}

	struct TraitBeatsRegistry;
	impl HarnessSuite for TraitBeatsRegistry {
		fn harness_config() -> Option<HarnessConfig> {
			Some(HarnessConfig::new().with_config_file_path("from-trait.json"))
		}
	}

	struct LateRegistered;
	impl HarnessSuite for LateRegistered {}

	struct Reconfigured;
	impl HarnessSuite for Reconfigured {}

	#[rstest]
	fn test_explicit_path() {
		let directive = LifecycleResolver::new().resolve::<ExplicitPath>().unwrap();
		assert_eq!(directive.config_source_name(), "TestPath");
		assert!(directive.auto_run());
		assert_eq!(directive.suite(), "ExplicitPath");
	}

	#[rstest]
	fn test_default_path_uses_type_name() {
		let directive = LifecycleResolver::new().resolve::<DefaultPath>().unwrap();
		assert_eq!(directive.config_source_name(), "DefaultPath.json");
	}

	#[rstest]
	fn test_auto_run_false() {
		let directive = LifecycleResolver::new().resolve::<Manual>().unwrap();
		assert!(!directive.auto_run());
	}

	#[rstest]
	fn test_unmarked_is_missing_configuration() {
		let result = LifecycleResolver::new().resolve::<Unmarked>();
		assert!(matches!(
			result,
			Err(HarnessError::MissingConfiguration { suite: "Unmarked" })
		));
	}

	#[rstest]
	fn test_inherited_marker_defaults_to_concrete_name() {
		let resolver = LifecycleResolver::new();
		let directive = resolver.resolve::<InheritsDefault>().unwrap();
		assert_eq!(directive.config_source_name(), "InheritsDefault.json");
		assert_eq!(
			resolver.marker_owner::<InheritsDefault>(),
			Some(SuiteType::of::<DefaultPath>())
		);
	}

	#[rstest]
	fn test_inherited_marker_keeps_explicit_settings() {
		let directive = LifecycleResolver::new().resolve::<InheritsManual>().unwrap();
		assert_eq!(directive.config_source_name(), "TestPath");
		assert!(!directive.auto_run());
	}

	#[rstest]
	fn test_unmarked_ancestors_are_missing_configuration() {
		let result = LifecycleResolver::new().resolve::<InheritsUnmarked>();
		assert!(matches!(
			result,
			Err(HarnessError::MissingConfiguration {
				suite: "InheritsUnmarked"
			})
		));
	}

	#[rstest]
	fn test_trait_marker_beats_registry() {
		register_harness_config::<TraitBeatsRegistry>(
			HarnessConfig::new().with_config_file_path("from-registry.json"),
		);
		let directive = LifecycleResolver::new()
			.resolve::<TraitBeatsRegistry>()
			.unwrap();
		assert_eq!(directive.config_source_name(), "from-trait.json");
	}

	#[rstest]
	fn test_registration_after_failed_resolution() {
		let resolver = LifecycleResolver::new();
		assert!(resolver.resolve::<LateRegistered>().is_err());

		register_harness_config::<LateRegistered>(HarnessConfig::new().with_auto_run(false));
		let directive = resolver.resolve::<LateRegistered>().unwrap();
		assert_eq!(directive.config_source_name(), "LateRegistered.json");
		assert!(!directive.auto_run());
	}

	#[rstest]
	fn test_resolution_is_memoized_and_stable() {
		let resolver = LifecycleResolver::new();
		let first = resolver.resolve::<ExplicitPath>().unwrap();
		let second = resolver.resolve::<ExplicitPath>().unwrap();
		assert_eq!(first, second);

		resolver.clear_cache();
		assert_eq!(resolver.resolve::<ExplicitPath>().unwrap(), first);
	}

	#[rstest]
	fn test_concurrent_registration_is_never_shadowed_by_cache() {
		let resolver = LifecycleResolver::new();

		for round in 0..200 {
			let path = format!("round-{}.json", round);
			std::thread::scope(|scope| {
				for _ in 0..4 {
					scope.spawn(|| {
						for _ in 0..10 {
							let _ = resolver.resolve::<Reconfigured>();
						}
					});
				}
				scope.spawn(|| {
					register_harness_config::<Reconfigured>(
						HarnessConfig::new().with_config_file_path(path.as_str()),
					);
				});
			});

			let directive = resolver.resolve::<Reconfigured>().unwrap();
			assert_eq!(directive.config_source_name(), path);
		}
	}

	#[rstest]
	fn test_find_harness_config() {
		let resolver = LifecycleResolver::new();
		assert!(resolver.find_harness_config::<InheritsManual>().is_some());
		assert!(resolver.find_harness_config::<Unmarked>().is_none());
	}
}
