//! Procedural macros for harness-core.
//!
//! This crate provides the `#[derive(HarnessSuite)]` macro for declaring
//! test suites and their harness markers at compile time.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_paths;
mod suite_derive;

/// Derives a `HarnessSuite` implementation for a type.
///
/// # Attributes
///
/// - `#[harness_config]` - Attach a marker with the default settings source
///   (`<TypeName>.json`) and auto-run enabled
/// - `#[harness_config(config_file_path = "path")]` - Attach a marker with an
///   explicit settings source
/// - `#[harness_config(auto_run = false)]` - Defer provisioning to an explicit
///   `build` call
/// - `#[harness(parent = Type)]` - Inherit the marker of another suite type
///
/// # Example
///
/// ```ignore
/// use harness_core::HarnessSuite;
///
/// #[derive(HarnessSuite)]
/// #[harness_config(config_file_path = "TestPath", auto_run = false)]
/// struct DatabaseSuite;
///
/// #[derive(HarnessSuite)]
/// #[harness(parent = DatabaseSuite)]
/// struct PeopleSuite;
/// ```
///
/// This generates:
///
/// ```ignore
/// impl ::harness_core::lifecycle::HarnessSuite for DatabaseSuite {
///     fn harness_config() -> Option<HarnessConfig> {
///         Some(HarnessConfig::new().with_config_file_path("TestPath").with_auto_run(false))
///     }
/// }
///
/// impl ::harness_core::lifecycle::HarnessSuite for PeopleSuite {
///     fn parent() -> Option<SuiteType> {
///         Some(SuiteType::of::<DatabaseSuite>())
///     }
/// }
/// ```
#[proc_macro_derive(HarnessSuite, attributes(harness_config, harness))]
pub fn derive_harness_suite(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	suite_derive::expand(&input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}
