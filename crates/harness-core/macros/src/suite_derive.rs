//! Implementation of `#[derive(HarnessSuite)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, LitBool, LitStr, Meta, Type};

use crate::crate_paths::lifecycle_path;

/// Parsed `#[harness_config(..)]` attribute.
#[derive(Default)]
struct ConfigAttr {
	config_file_path: Option<LitStr>,
	auto_run: Option<LitBool>,
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let mut config: Option<ConfigAttr> = None;
	let mut parent: Option<Type> = None;

	for attr in &input.attrs {
		if attr.path().is_ident("harness_config") {
			if config.is_some() {
				return Err(syn::Error::new_spanned(
					attr,
					"duplicate `harness_config` attribute",
				));
			}
			config = Some(parse_config(attr)?);
		} else if attr.path().is_ident("harness") {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("parent") {
					if parent.is_some() {
						return Err(meta.error("duplicate `parent`"));
					}
					parent = Some(meta.value()?.parse()?);
					Ok(())
				} else {
					Err(meta.error("unsupported harness key; expected `parent`"))
				}
			})?;
		}
	}

	let lifecycle = lifecycle_path();

	let config_fn = config.map(|config| {
		let path = config
			.config_file_path
			.map(|path| quote!(.with_config_file_path(#path)));
		let auto_run = config.auto_run.map(|auto_run| quote!(.with_auto_run(#auto_run)));
		quote! {
			fn harness_config() -> ::core::option::Option<#lifecycle::HarnessConfig> {
				::core::option::Option::Some(
					#lifecycle::HarnessConfig::new() #path #auto_run
				)
			}
		}
	});

	let parent_fn = parent.map(|parent| {
		quote! {
			fn parent() -> ::core::option::Option<#lifecycle::SuiteType> {
				::core::option::Option::Some(#lifecycle::SuiteType::of::<#parent>())
			}
		}
	});

	Ok(quote! {
		impl #impl_generics #lifecycle::HarnessSuite for #name #ty_generics #where_clause {
			#config_fn
			#parent_fn
		}
	})
}

fn parse_config(attr: &Attribute) -> syn::Result<ConfigAttr> {
	let mut parsed = ConfigAttr::default();

	// bare `#[harness_config]`
	if let Meta::Path(_) = attr.meta {
		return Ok(parsed);
	}

	attr.parse_nested_meta(|meta| {
		if meta.path.is_ident("config_file_path") {
			parsed.config_file_path = Some(meta.value()?.parse()?);
			Ok(())
		} else if meta.path.is_ident("auto_run") {
			parsed.auto_run = Some(meta.value()?.parse()?);
			Ok(())
		} else {
			Err(meta.error(
				"unsupported harness_config key; expected `config_file_path` or `auto_run`",
			))
		}
	})?;

	Ok(parsed)
}
