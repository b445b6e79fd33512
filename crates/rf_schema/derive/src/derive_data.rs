//! The parsed shape of a `#[derive(Schema)]` input.

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Expr, Fields, Generics, Ident, LitStr, Type};

use crate::attributes::{FieldAttributes, TypeAttributes};

/// One field that takes part in the schema.
pub(crate) struct SchemaField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The registered name, after `rename`.
    pub name: LitStr,
    pub default: Option<Expr>,
}

pub(crate) struct SchemaStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    /// Registered fields in declaration order. Skipped fields are absent.
    pub fields: Vec<SchemaField<'a>>,
    pub rf_schema_path: syn::Path,
}

impl<'a> SchemaStruct<'a> {
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Schema` can only be derived for structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Schema` can only be derived for structs with named fields",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let fields = match &data.fields {
            Fields::Named(named) => {
                let mut fields = Vec::with_capacity(named.named.len());
                for field in &named.named {
                    let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                    if field_attrs.skip.is_some() {
                        continue;
                    }
                    // Named fields always have an ident.
                    let Some(ident) = field.ident.as_ref() else {
                        continue;
                    };
                    let name = field_attrs
                        .rename
                        .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
                    fields.push(SchemaField {
                        ident,
                        ty: &field.ty,
                        name,
                        default: field_attrs.default,
                    });
                }
                fields
            }
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new(
                    unnamed.span(),
                    "`Schema` can only be derived for structs with named fields",
                ));
            }
        };

        for (index, field) in fields.iter().enumerate() {
            if fields[..index]
                .iter()
                .any(|prev| prev.name.value() == field.name.value())
            {
                return Err(syn::Error::new(
                    field.name.span(),
                    format!("field name `{}` is registered twice", field.name.value()),
                ));
            }
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
            rf_schema_path: crate::path::rf_schema(),
        })
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
