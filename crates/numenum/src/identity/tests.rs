use super::*;
use crate::testing::test_enum;

test_enum!(Status(u8));
test_enum!(Priority(i32) = "priority.v1");

#[test]
fn test_uid_comes_from_the_type() {
    assert_eq!(TypeNames::of::<Priority>().uid, "priority.v1");
    assert!(TypeNames::of::<Status>().uid.ends_with("::Status"));
}

#[test]
fn test_names_are_stable() {
    assert_eq!(TypeNames::of::<Status>(), TypeNames::of::<Status>());
    assert_ne!(TypeNames::of::<Status>(), TypeNames::of::<Priority>());
}

#[test]
fn test_short_and_full_names() {
    let names = TypeNames::of::<Status>();
    assert_eq!(names.short, "Status");
    assert!(names.full.starts_with("numenum::"));
    assert!(names.full.ends_with("::Status"));
    assert_eq!(names.to_string(), names.full);
}

#[test]
fn test_short_name_stripping() {
    assert_eq!(short_name("Status"), "Status");
    assert_eq!(short_name("app::model::Status"), "Status");
    assert_eq!(
        short_name("app::Wrapper<core::option::Option<u8>>"),
        "Wrapper<core::option::Option<u8>>"
    );
}

#[test]
fn test_repr_conversion() {
    assert_eq!(Status::from_repr(3).to_repr(), 3);
    assert_eq!(Priority(-7).to_repr(), -7);
}
