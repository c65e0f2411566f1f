//! Input validation shared by derive macros.

use syn::{Data, DeriveInput, Fields, Type};

/// Primitive integer types accepted as an enumeration repr.
const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Validate that the input is a tuple struct with exactly one primitive
/// integer field, returning that field's type.
pub fn newtype_integer_field<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Type> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        ));
    };

    let field = match &data.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0],
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports tuple structs with a single field"),
            ))
        }
    };

    if !is_integer_type(&field.ty) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            format!("{macro_name} derive requires a primitive integer field"),
        ));
    }

    Ok(&field.ty)
}

/// Reject types with generic parameters.
pub fn reject_generics(input: &DeriveInput, macro_name: &str) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        &input.generics,
        format!("{macro_name} derive does not support generic types"),
    ))
}

/// Check if a type is a primitive integer: a bare `u8`, or one spelled
/// through `core::primitive` / `std::primitive`.
///
/// Any other path ending in an integer name (`my::u8`) names a user type and
/// is rejected.
pub fn is_integer_type(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let path = &type_path.path;
    if type_path.qself.is_some() || path.segments.iter().any(|s| !s.arguments.is_none()) {
        return false;
    }

    let idents: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    let Some((last, prefix)) = idents.split_last() else {
        return false;
    };
    let bare = prefix.is_empty() && path.leading_colon.is_none();
    let primitive = matches!(
        prefix,
        [krate, module] if matches!(krate.as_str(), "core" | "std") && module == "primitive"
    );
    (bare || primitive) && INTEGER_TYPES.contains(&last.as_str())
}

#[cfg(test)]
mod tests;
