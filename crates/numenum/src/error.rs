//! Errors returned by registry queries.
//!
//! Only the two recoverable conditions are represented here. Registering an
//! empty description set is a programming error and panics instead.

use thiserror::Error;

/// A failed registry query.
///
/// `name` is always the fully-qualified name of the enumeration type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnumError {
    /// The enumeration type has not been registered.
    #[error("enumeration `{name}` is not registered")]
    NotRegistered { name: &'static str },

    /// The type is registered but the value or description is not one of its
    /// legal ones.
    #[error("invalid value for `{name}`: must be one of [{}], got {got}", .expected.join(", "))]
    InvalidValue {
        name: &'static str,
        /// Every legal value, or every legal description, in listing order.
        expected: Vec<String>,
        /// The offending value or description.
        got: String,
    },
}

impl EnumError {
    pub fn is_not_registered(&self) -> bool {
        matches!(self, EnumError::NotRegistered { .. })
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, EnumError::InvalidValue { .. })
    }
}
