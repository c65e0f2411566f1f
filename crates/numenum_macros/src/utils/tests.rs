use super::*;
use syn::parse_quote;

#[test]
fn test_integer_types() {
    assert!(is_integer_type(&parse_quote!(u8)));
    assert!(is_integer_type(&parse_quote!(isize)));
    assert!(is_integer_type(&parse_quote!(core::primitive::i64)));
    assert!(is_integer_type(&parse_quote!(::std::primitive::u32)));
    assert!(!is_integer_type(&parse_quote!(f32)));
    assert!(!is_integer_type(&parse_quote!(String)));
    assert!(!is_integer_type(&parse_quote!(Option<u8>)));
    assert!(!is_integer_type(&parse_quote!(&u8)));
}

#[test]
fn test_user_types_named_like_integers_rejected() {
    assert!(!is_integer_type(&parse_quote!(my::u8)));
    assert!(!is_integer_type(&parse_quote!(::u8)));
    assert!(!is_integer_type(&parse_quote!(core::u8)));
    assert!(!is_integer_type(&parse_quote!(core::primitive::f32)));
    assert!(!is_integer_type(&parse_quote!(<T as Trait>::u8)));
}

#[test]
fn test_newtype_field_accepted() {
    let input: DeriveInput = parse_quote! {
        struct Status(u16);
    };
    let expected: Type = parse_quote!(u16);
    let ty = newtype_integer_field(&input, "Enum");
    assert!(matches!(ty, Ok(ty) if *ty == expected));
}

#[test]
fn test_shape_errors() {
    let named: DeriveInput = parse_quote! {
        struct Status { value: u8 }
    };
    let pair: DeriveInput = parse_quote! {
        struct Status(u8, u8);
    };
    let enumeration: DeriveInput = parse_quote! {
        enum Status { Active }
    };
    let float: DeriveInput = parse_quote! {
        struct Ratio(f64);
    };

    for input in [&named, &pair, &enumeration] {
        assert!(newtype_integer_field(input, "Enum").is_err());
    }
    let err = newtype_integer_field(&float, "Enum").map(|_| ());
    assert_eq!(
        err.map_err(|e| e.to_string()),
        Err("Enum derive requires a primitive integer field".to_owned())
    );
}

#[test]
fn test_generics_rejected() {
    let generic: DeriveInput = parse_quote! {
        struct Tagged<T>(u8, core::marker::PhantomData<T>);
    };
    let plain: DeriveInput = parse_quote! {
        struct Status(u8);
    };
    assert!(reject_generics(&generic, "Enum").is_err());
    assert!(reject_generics(&plain, "Enum").is_ok());
}
