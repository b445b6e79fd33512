//! Parsing of `#[schema(...)]` attributes.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, LitStr};

use crate::SCHEMA_ATTRIBUTE_NAME;

fn duplicate(span: Span, name: &str) -> syn::Error {
    syn::Error::new(span, format!("duplicate `{name}` attribute"))
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// `#[schema(type_name = "...", auto_register)]` on the struct.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub type_name: Option<LitStr>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(SCHEMA_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_name") {
                    if result.type_name.is_some() {
                        return Err(duplicate(meta.path.span(), "type_name"));
                    }
                    result.type_name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    if result.auto_register.is_some() {
                        return Err(duplicate(meta.path.span(), "auto_register"));
                    }
                    result.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported schema type attribute, expected `type_name` or `auto_register`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// `#[schema(rename = "...", default = <expr>, skip)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub default: Option<Expr>,
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(SCHEMA_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(duplicate(meta.path.span(), "rename"));
                    }
                    result.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("default") {
                    if result.default.is_some() {
                        return Err(duplicate(meta.path.span(), "default"));
                    }
                    result.default = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    if result.skip.is_some() {
                        return Err(duplicate(meta.path.span(), "skip"));
                    }
                    result.skip = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported schema field attribute, expected `rename`, `default` or `skip`",
                    ))
                }
            })?;
        }

        if let Some(span) = result.skip
            && (result.rename.is_some() || result.default.is_some())
        {
            return Err(syn::Error::new(
                span,
                "a skipped field cannot also have `rename` or `default`",
            ));
        }

        Ok(result)
    }
}
