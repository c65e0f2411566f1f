//! Enum derive macro implementation.
//!
//! Generates `numenum::Enum` implementations for integer newtypes.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitStr};

use crate::utils::{newtype_integer_field, reject_generics};

/// Main entry point for the Enum derive macro.
pub fn derive_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_enum_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_enum_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // A uid is per type; every instantiation of a generic type would share it.
    reject_generics(input, "Enum")?;

    let repr = newtype_integer_field(input, "Enum")?;

    let uid = if let Some(uid) = parse_uid_attribute(input)? {
        quote! { #uid }
    } else {
        let type_name = name.to_string();
        quote! { ::core::concat!(::core::module_path!(), "::", #type_name) }
    };

    Ok(quote! {
        impl ::numenum::Enum for #name {
            type Repr = #repr;

            #[inline]
            fn enum_uid() -> &'static str {
                #uid
            }

            #[inline]
            fn to_repr(self) -> #repr {
                self.0
            }

            #[inline]
            fn from_repr(repr: #repr) -> Self {
                Self(repr)
            }
        }
    })
}

/// Parse `#[numenum(uid = "...")]`, if present.
fn parse_uid_attribute(input: &DeriveInput) -> syn::Result<Option<LitStr>> {
    let mut uid: Option<LitStr> = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("numenum") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("uid") {
                return Err(meta.error("unsupported numenum attribute, expected `uid = \"...\"`"));
            }
            if uid.is_some() {
                return Err(meta.error("duplicate `uid`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new_spanned(&lit, "`uid` must not be empty"));
            }
            uid = Some(lit);
            Ok(())
        })?;
    }

    Ok(uid)
}
