//! Code generation for `#[derive(Schema)]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{LitStr, parse_quote};

use crate::derive_data::SchemaStruct;
use crate::path;

/// Generate the `Schema` impl, and the auto-register entry if requested.
pub(crate) fn impl_schema(data: &SchemaStruct) -> TokenStream {
    let rf_schema_path = &data.rf_schema_path;
    let schema_ = path::schema_(rf_schema_path);
    let schema_builder_ = path::schema_builder_(rf_schema_path);
    let accessor_ = path::accessor_(rf_schema_path);

    let ident = data.ident;
    let builder = if data.fields.is_empty() {
        format_ident!("_builder")
    } else {
        format_ident!("builder")
    };

    let registrations = data.fields.iter().map(|field| {
        let member = field.ident;
        let name = &field.name;
        let ty = field.ty;
        let accessor = quote! {
            #accessor_::<Self, #ty>::new(
                |instance: &Self| &instance.#member,
                |instance: &mut Self| &mut instance.#member,
            )
        };
        match &field.default {
            None => quote_spanned! { ty.span() =>
                #builder.field(#name, #accessor);
            },
            Some(default) => quote_spanned! { default.span() =>
                #builder.field_with_default(#name, #accessor, #default);
            },
        }
    });

    let type_name = match &data.attrs.type_name {
        Some(lit) => Some(lit.clone()),
        None if !data.is_generic() => Some(LitStr::new(&ident.unraw().to_string(), ident.span())),
        // Every instantiation needs its own name.
        None => None,
    };
    let type_name_fn = type_name.map(|lit| {
        quote! {
            #[inline]
            fn type_name() -> &'static str {
                #lit
            }
        }
    });

    let mut generics = data.generics.clone();
    if data.is_generic() {
        let value_ = path::value_(rf_schema_path);
        let (_, ty_generics, _) = data.generics.split_for_impl();
        let where_clause = generics.make_where_clause();
        where_clause
            .predicates
            .push(parse_quote! { #ident #ty_generics: ::core::default::Default + 'static });
        for field in &data.fields {
            let ty = field.ty;
            where_clause.predicates.push(parse_quote! { #ty: #value_ });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let auto_register = auto_register_impl(data);

    quote! {
        impl #impl_generics #schema_ for #ident #ty_generics #where_clause {
            fn register(#builder: &mut #schema_builder_<Self>) {
                #(#registrations)*
            }

            #type_name_fn
        }

        #auto_register
    }
}

#[cfg(feature = "auto_register")]
fn auto_register_impl(data: &SchemaStruct) -> TokenStream {
    let Some(span) = data.attrs.auto_register else {
        return TokenStream::new();
    };
    // Invalid for generic types.
    if data.is_generic() {
        return TokenStream::new();
    }

    let auto_register_ = path::auto_register_(&data.rf_schema_path);
    let ident = data.ident;

    quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::AutoRegister::of::<#ident>()
        }
    }
}

#[cfg(not(feature = "auto_register"))]
fn auto_register_impl(_: &SchemaStruct) -> TokenStream {
    TokenStream::new()
}
