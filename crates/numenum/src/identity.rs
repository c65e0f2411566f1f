//! Type identity for registered enumerations.
//!
//! An enumeration type reports its own registry key through
//! [`Enum::enum_uid`]. [`TypeNames`] projects a type onto that key plus the
//! two human-facing names used in diagnostics.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Integer representation backing an enumeration type.
///
/// Sealed: implemented for the primitive signed and unsigned integers only.
pub trait Numeric:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Numeric for $ty {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A numeric type that can be registered as an enumeration.
///
/// Implementors are usually single-field newtypes over an integer, e.g.
/// `struct Status(u8)`, and are best written with `#[derive(Enum)]`.
///
/// # Identity
///
/// [`enum_uid`](Enum::enum_uid) must return the same string on every call and
/// must differ from the uid of every other enumeration registered in the same
/// registry. Two distinct types sharing a uid is a programming error: the
/// second registration is ignored and queries for it panic.
pub trait Enum: Copy + Eq + Hash + Send + Sync + 'static {
    /// Underlying integer type.
    type Repr: Numeric;

    /// Stable, unique identifier for this type; used as the registry key.
    fn enum_uid() -> &'static str;

    /// The integer value of this enumeration value.
    fn to_repr(self) -> Self::Repr;

    /// Wrap an integer value. The result is not necessarily a legal value;
    /// use the registry's `validate` to check.
    fn from_repr(repr: Self::Repr) -> Self;
}

/// Identity and diagnostic names of an enumeration type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeNames {
    /// Registry key reported by [`Enum::enum_uid`].
    pub uid: &'static str,
    /// Unqualified type name, e.g. `Status`.
    pub short: &'static str,
    /// Type name including its module path, e.g. `app::model::Status`.
    pub full: &'static str,
}

impl TypeNames {
    /// Resolve the names of `E`.
    pub fn of<E: Enum>() -> Self {
        let full = std::any::type_name::<E>();
        TypeNames {
            uid: E::enum_uid(),
            short: short_name(full),
            full,
        }
    }
}

impl fmt::Display for TypeNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full)
    }
}

/// Strip the module path from a type name, keeping any generic arguments.
pub(crate) fn short_name(full: &str) -> &str {
    let base_end = full.find('<').unwrap_or(full.len());
    match full[..base_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests;
