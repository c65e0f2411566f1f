//! Procedural macros for numenum.
//!
//! - `#[derive(Enum)]`: implements `numenum::Enum` for an integer newtype

use proc_macro::TokenStream;

mod enum_derive;
mod utils;

/// Derive `numenum::Enum` for a single-field tuple struct over a primitive
/// integer.
///
/// The uid is the module path plus the type name unless given explicitly:
///
/// ```text
/// #[derive(Copy, Clone, PartialEq, Eq, Hash, Enum)]
/// #[numenum(uid = "billing.invoice.state")]
/// struct InvoiceState(u8);
/// ```
#[proc_macro_derive(Enum, attributes(numenum))]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    enum_derive::derive_enum(input)
}
