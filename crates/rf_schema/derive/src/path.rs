//! Paths into `rf_schema` used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `rf_schema` crate.
///
/// 1. For crates that depend on `rf_schema`, `::rf_schema` is returned.
/// 2. For crates that depend on `rf_core`, `::rf_core::schema` is returned.
/// 3. Otherwise `::rf_schema` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is resolved once per
/// expansion and passed around.
pub(crate) fn rf_schema() -> syn::Path {
    rf_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("rf_schema"))
}

#[inline(always)]
pub(crate) fn schema_(rf_schema_path: &syn::Path) -> TokenStream {
    quote! { #rf_schema_path::registry::Schema }
}

#[inline(always)]
pub(crate) fn schema_builder_(rf_schema_path: &syn::Path) -> TokenStream {
    quote! { #rf_schema_path::registry::SchemaBuilder }
}

#[inline(always)]
pub(crate) fn accessor_(rf_schema_path: &syn::Path) -> TokenStream {
    quote! { #rf_schema_path::access::Accessor }
}

#[inline(always)]
pub(crate) fn value_(rf_schema_path: &syn::Path) -> TokenStream {
    quote! { #rf_schema_path::Value }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(rf_schema_path: &syn::Path) -> TokenStream {
    quote! { #rf_schema_path::__macro_exports::auto_register }
}
