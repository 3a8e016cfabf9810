//! Helper functions for dynamic crate path resolution using proc_macro_crate
//!
//! The derive may be used inside `harness-core` itself, by crates depending
//! on `harness-core` directly, or through the `fixture-harness` facade.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

/// Library name of the `fixture-harness` facade package.
const FACADE_LIB: &str = "harness";

/// Resolves the path of the `lifecycle` module for the crate being compiled.
///
/// # Strategy
///
/// 1. Internal usage (`harness-core` itself): `crate::lifecycle`
/// 2. `fixture-harness` is a dependency: `::harness::lifecycle`, or the
///    renamed dependency
/// 3. `harness-core` is a dependency: `::harness_core::lifecycle`
/// 4. Fallback: `::harness_core::lifecycle`
pub(crate) fn lifecycle_path() -> TokenStream {
	resolve_lifecycle_path(
		crate_name("harness-core").ok(),
		crate_name("fixture-harness").ok(),
	)
}

fn resolve_lifecycle_path(core: Option<FoundCrate>, facade: Option<FoundCrate>) -> TokenStream {
	if let Some(FoundCrate::Itself) = core {
		return quote!(crate::lifecycle);
	}

	match facade {
		Some(FoundCrate::Itself) => return quote!(crate::lifecycle),
		Some(FoundCrate::Name(name)) => {
			// dependency key is `fixture-harness`; the library is named `harness`
			let name = if name == "fixture_harness" {
				FACADE_LIB.to_string()
			} else {
				name
			};
			let ident = Ident::new(&name, Span::call_site());
			return quote!(::#ident::lifecycle);
		}
		None => {}
	}

	match core {
		Some(FoundCrate::Name(name)) => {
			let ident = Ident::new(&name, Span::call_site());
			quote!(::#ident::lifecycle)
		}
		_ => quote!(::harness_core::lifecycle),
	}
}
