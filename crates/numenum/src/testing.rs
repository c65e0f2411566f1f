//! Enumeration types for unit tests.

/// Declare a `Copy` integer newtype implementing [`crate::Enum`].
///
/// The uid defaults to the module path plus the type name; pass `= "uid"` to
/// pick it explicitly.
macro_rules! test_enum {
    ($name:ident($repr:ty)) => {
        $crate::testing::test_enum!(
            $name($repr) = concat!(module_path!(), "::", stringify!($name))
        );
    };
    ($name:ident($repr:ty) = $uid:expr) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub(crate) struct $name(pub(crate) $repr);

        impl $crate::Enum for $name {
            type Repr = $repr;

            fn enum_uid() -> &'static str {
                $uid
            }

            fn to_repr(self) -> $repr {
                self.0
            }

            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }
        }
    };
}

pub(crate) use test_enum;
