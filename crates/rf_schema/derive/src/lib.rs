//! See [`Schema`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static SCHEMA_ATTRIBUTE_NAME: &str = "schema";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Schema Derivation
///
/// `#[derive(Schema)]` implements `Schema` for a struct with named fields.
/// Every field is registered under its own name, in declaration order.
///
/// The struct must implement `Default`, and every registered field must be
/// an `i32`, `bool`, `String`, another `Schema` type, or a `Vec` of those.
///
/// ```rust, ignore
/// #[derive(Default, Schema)]
/// struct Info {
///     id: i32,
///     tags: Vec<i32>,
/// }
/// ```
///
/// ## Field Attributes
///
/// ### Defaults
///
/// A scalar field (`i32`, `bool`, `String`) may carry a default. The
/// default is used when a document does not contain the member.
///
/// ```rust, ignore
/// #[derive(Default, Schema)]
/// struct Info {
///     #[schema(default = "none")]
///     name: String,
///     #[schema(default = -1)]
///     port: i32,
/// }
/// ```
///
/// ### Renaming
///
/// ```rust, ignore
/// #[derive(Default, Schema)]
/// struct Info {
///     #[schema(rename = "startTime")]
///     start_time: i32,
/// }
/// ```
///
/// ### Skipping
///
/// A skipped field is not registered. It keeps whatever value it has
/// through decoding and never appears in encoded output.
///
/// ```rust, ignore
/// #[derive(Default, Schema)]
/// struct Info {
///     id: i32,
///     #[schema(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Type Attributes
///
/// ### Type Name
///
/// The registered type name defaults to the struct's identifier. Generic
/// structs report the full `core::any::type_name` instead.
///
/// ```rust, ignore
/// #[derive(Default, Schema)]
/// #[schema(type_name = "sinfo")]
/// struct Info { /* ... */ }
/// ```
///
/// ### Auto Registration
///
/// With the `auto_register` feature, `SchemaRegistry::auto_register` builds
/// the descriptors of every type marked like this. Generic types are
/// ignored.
///
/// ```rust, ignore
/// #[derive(Default, Schema)]
/// #[schema(auto_register)]
/// struct Info { /* ... */ }
/// ```
#[proc_macro_derive(Schema, attributes(schema))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::SchemaStruct::parse(&ast) {
        Ok(data) => impls::impl_schema(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
