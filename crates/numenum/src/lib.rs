//! Numenum - validated, self-describing numeric enumerations
//!
//! Plain integer newtypes become enumerations at runtime: each type registers
//! its legal values with a description for each, and the registry then
//! answers membership, description and listing queries for any registered
//! type.
//!
//! - [`Enum`]: the capability a type needs (an integer repr and a stable uid)
//! - [`EnumRegistry`]: the concurrent registry and its typed query API
//! - [`Member`]: what the registry knows about one type
//! - [`EnumError`]: recoverable query failures
//!
//! The free functions at the crate root ([`register`], [`validate`], [`new`],
//! [`string`], [`strings`], [`values`], [`is`]) operate on
//! [`EnumRegistry::global`].
//!
//! # Example
//!
//! ```
//! use numenum::Enum;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum)]
//! struct Status(u8);
//!
//! numenum::register([(Status(0), "active"), (Status(1), "inactive")]);
//!
//! assert!(numenum::validate(Status(0)).is_ok());
//! assert_eq!(numenum::new::<Status>("inactive"), Ok(Status(1)));
//! assert_eq!(numenum::string(Status(0)), "active");
//! assert_eq!(numenum::values(&[Status(1)]), vec![Status(0)]);
//! ```
//!
//! # Ordering
//!
//! Listings (`strings`, `values`, the expected set of an error) are ordered by
//! ascending integer value, whatever the order of the registration input.

mod error;
mod identity;
mod member;
mod registry;
mod sink;
mod store;

#[cfg(test)]
mod testing;

pub use error::EnumError;
pub use identity::{Enum, Numeric, TypeNames};
pub use member::{AnyMember, Member};
pub use registry::{is, EnumRegistry, RegistryBuilder, SharedRegistry};
pub use sink::{NullSink, RegistryEvent, RegistrySink, TracingSink};
pub use store::{ErasedMember, RegistryStore};

/// Derive [`Enum`] for an integer newtype.
#[cfg(feature = "derive")]
pub use numenum_macros::Enum;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for registry events.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=numenum=info` or `RUST_LOG=numenum=debug`.
/// Does nothing if the host has already installed a global subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Register `E` in the global registry. See [`EnumRegistry::register`].
///
/// # Panics
/// Panics if `description` is empty.
pub fn register<E, I, S>(description: I) -> bool
where
    E: Enum,
    I: IntoIterator<Item = (E, S)>,
    S: Into<String>,
{
    EnumRegistry::global().register(description)
}

/// Check `value` against the global registry.
pub fn validate<E: Enum>(value: E) -> Result<(), EnumError> {
    EnumRegistry::global().validate(value)
}

/// Look up the value of `E` described by `description` in the global registry.
pub fn new<E: Enum>(description: &str) -> Result<E, EnumError> {
    EnumRegistry::global().parse(description)
}

/// Description of `value`, or an empty string if it is not a legal value.
///
/// # Panics
/// Panics if `E` is not registered in the global registry.
pub fn string<E: Enum>(value: E) -> String {
    EnumRegistry::global().string(value)
}

/// Descriptions of every legal value of `E`, ascending by value.
///
/// # Panics
/// Panics if `E` is not registered in the global registry.
pub fn strings<E: Enum>() -> Vec<String> {
    EnumRegistry::global().strings::<E>()
}

/// Legal values of `E` except those in `except`, ascending.
///
/// # Panics
/// Panics if `E` is not registered in the global registry.
pub fn values<E: Enum>(except: &[E]) -> Vec<E> {
    EnumRegistry::global().values(except)
}

/// Whether `E` is registered in the global registry.
pub fn is_registered<E: Enum>() -> bool {
    EnumRegistry::global().is_registered::<E>()
}
