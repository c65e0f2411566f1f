//! Diagnostic side channel for registration events.
//!
//! The registry reports what happened at registration time to a
//! [`RegistrySink`]. Nothing reported here changes query results; a duplicate
//! registration, for instance, is still a silent no-op to the caller.

use crate::identity::TypeNames;
use crate::member::AnyMember;

/// Something noteworthy happened while registering an enumeration type.
#[derive(Clone, Copy)]
pub enum RegistryEvent<'a> {
    /// A type was registered for the first time.
    Registered { member: &'a dyn AnyMember },
    /// The type was already registered; the call was ignored.
    AlreadyRegistered {
        names: TypeNames,
        existing: &'a dyn AnyMember,
    },
    /// A different type already holds this uid; the call was ignored.
    UidConflict {
        names: TypeNames,
        existing: &'a dyn AnyMember,
    },
}

/// Receiver of [`RegistryEvent`]s.
pub trait RegistrySink: Send + Sync {
    fn record(&self, event: &RegistryEvent<'_>);
}

/// Writes registry events as `tracing` events. The default sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl RegistrySink for TracingSink {
    fn record(&self, event: &RegistryEvent<'_>) {
        match event {
            RegistryEvent::Registered { member } => {
                let names = member.names();
                tracing::info!(
                    uid = names.uid,
                    name = names.full,
                    values = %member.summary(),
                    "registered enumeration"
                );
            }
            RegistryEvent::AlreadyRegistered { names, existing } => {
                tracing::warn!(
                    uid = names.uid,
                    name = names.full,
                    existing = %existing.summary(),
                    "enumeration already registered, ignoring"
                );
            }
            RegistryEvent::UidConflict { names, existing } => {
                tracing::error!(
                    uid = names.uid,
                    name = names.full,
                    holder = existing.names().full,
                    "uid already registered by another type, ignoring"
                );
            }
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RegistrySink for NullSink {
    fn record(&self, _event: &RegistryEvent<'_>) {}
}
