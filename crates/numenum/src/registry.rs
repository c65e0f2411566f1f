//! The enumeration registry and its query API.
//!
//! An [`EnumRegistry`] owns a [`RegistryStore`] and answers typed queries on
//! it: the static type parameter picks the member through its uid, and the
//! erased member is restored to `Member<E>` on the way out.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::error::EnumError;
use crate::identity::{Enum, TypeNames};
use crate::member::{AnyMember, Member};
use crate::sink::{RegistryEvent, RegistrySink, TracingSink};
use crate::store::RegistryStore;

static GLOBAL_REGISTRY: OnceLock<EnumRegistry> = OnceLock::new();

/// Registry of enumeration types.
///
/// Each type is registered at most once; the first registration is
/// authoritative for the lifetime of the registry and members are never
/// removed.
///
/// Operations that return `Result` treat an unregistered type as a runtime
/// condition. [`string`](Self::string), [`strings`](Self::strings) and
/// [`values`](Self::values) treat it as a setup bug and panic; their `try_`
/// counterparts return the error instead.
pub struct EnumRegistry {
    store: RegistryStore,
    sink: Box<dyn RegistrySink>,
}

impl EnumRegistry {
    /// Create an empty registry that reports to [`TracingSink`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The process-wide registry behind the crate-level functions.
    pub fn global() -> &'static EnumRegistry {
        GLOBAL_REGISTRY.get_or_init(EnumRegistry::new)
    }

    /// Register `E` with its legal values and their descriptions.
    ///
    /// Later duplicates of a value in `description` replace earlier ones.
    /// Returns `true` if this call registered the type; if `E` (or another
    /// type with the same uid) is already registered, nothing changes and the
    /// sink is told why.
    ///
    /// # Panics
    /// Panics if `description` is empty.
    pub fn register<E, I, S>(&self, description: I) -> bool
    where
        E: Enum,
        I: IntoIterator<Item = (E, S)>,
        S: Into<String>,
    {
        let names = TypeNames::of::<E>();
        let description: FxHashMap<E, String> = description
            .into_iter()
            .map(|(value, desc)| (value, desc.into()))
            .collect();
        assert!(
            !description.is_empty(),
            "no descriptions provided to register `{names}`"
        );

        if let Some(existing) = self.store.get(names.uid) {
            self.report_duplicate(names, existing.as_ref());
            return false;
        }

        let member: Arc<dyn AnyMember> = Arc::new(Member::new(names, description));
        if self.store.insert_if_absent(names.uid, Arc::clone(&member)) {
            self.sink.record(&RegistryEvent::Registered {
                member: member.as_ref(),
            });
            return true;
        }

        // Lost a race with a concurrent registration of the same uid.
        if let Some(existing) = self.store.get(names.uid) {
            self.report_duplicate(names, existing.as_ref());
        }
        false
    }

    fn report_duplicate(&self, names: TypeNames, existing: &dyn AnyMember) {
        let event = if existing.names().full == names.full {
            RegistryEvent::AlreadyRegistered { names, existing }
        } else {
            RegistryEvent::UidConflict { names, existing }
        };
        self.sink.record(&event);
    }

    /// Check that `value` is one of the legal values of `E`.
    pub fn validate<E: Enum>(&self, value: E) -> Result<(), EnumError> {
        let member = self.require::<E>()?;
        if member.contains(value) {
            return Ok(());
        }
        Err(EnumError::InvalidValue {
            name: member.full_name(),
            expected: member.rendered_values(),
            got: value.to_repr().to_string(),
        })
    }

    /// The value of `E` whose description is exactly `description`.
    ///
    /// If several values share the description the lowest one wins.
    pub fn parse<E: Enum>(&self, description: &str) -> Result<E, EnumError> {
        let member = self.require::<E>()?;
        member
            .find(description)
            .ok_or_else(|| EnumError::InvalidValue {
                name: member.full_name(),
                expected: member.descriptions(),
                got: description.to_owned(),
            })
    }

    /// Description of `value`, or an empty string if `value` is not legal.
    pub fn try_string<E: Enum>(&self, value: E) -> Result<String, EnumError> {
        let member = self.require::<E>()?;
        Ok(member.description(value).unwrap_or_default().to_owned())
    }

    /// Description of `value`, or an empty string if `value` is not legal.
    ///
    /// # Panics
    /// Panics if `E` is not registered. Use `try_string` to handle that case.
    pub fn string<E: Enum>(&self, value: E) -> String {
        self.try_string(value).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Descriptions of every legal value of `E`, ascending by value.
    pub fn try_strings<E: Enum>(&self) -> Result<Vec<String>, EnumError> {
        Ok(self.require::<E>()?.descriptions())
    }

    /// Descriptions of every legal value of `E`, ascending by value.
    ///
    /// # Panics
    /// Panics if `E` is not registered. Use `try_strings` to handle that case.
    pub fn strings<E: Enum>(&self) -> Vec<String> {
        self.try_strings::<E>().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Legal values of `E` except those in `except`, ascending.
    pub fn try_values<E: Enum>(&self, except: &[E]) -> Result<Vec<E>, EnumError> {
        Ok(self.require::<E>()?.values_except(except))
    }

    /// Legal values of `E` except those in `except`, ascending.
    ///
    /// # Panics
    /// Panics if `E` is not registered. Use `try_values` to handle that case.
    pub fn values<E: Enum>(&self, except: &[E]) -> Vec<E> {
        self.try_values(except).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Whether `E` has been registered.
    pub fn is_registered<E: Enum>(&self) -> bool {
        self.store.contains(E::enum_uid())
    }

    /// The registered member of `E`, if any.
    pub fn member<E: Enum>(&self) -> Option<Arc<Member<E>>> {
        self.require::<E>().ok()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Every registered uid, sorted.
    pub fn uids(&self) -> Vec<&'static str> {
        self.store.uids()
    }

    /// Fetch and downcast the member of `E`.
    ///
    /// # Panics
    /// Panics if the uid of `E` is held by a different type.
    fn require<E: Enum>(&self) -> Result<Arc<Member<E>>, EnumError> {
        let names = TypeNames::of::<E>();
        let Some(erased) = self.store.get(names.uid) else {
            tracing::debug!(
                uid = names.uid,
                name = names.full,
                "enumeration not registered"
            );
            return Err(EnumError::NotRegistered { name: names.full });
        };
        let holder = erased.names();
        let Ok(member) = erased.into_any().downcast::<Member<E>>() else {
            panic!(
                "uid `{}` of `{}` is registered by `{}`",
                names.uid, names.full, holder.full
            );
        };
        Ok(member)
    }
}

impl Default for EnumRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnumRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumRegistry")
            .field("uids", &self.uids())
            .finish_non_exhaustive()
    }
}

/// Configures an [`EnumRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    sink: Option<Box<dyn RegistrySink>>,
}

impl RegistryBuilder {
    /// Report registration events to `sink` instead of [`TracingSink`].
    #[must_use]
    pub fn sink(mut self, sink: impl RegistrySink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> EnumRegistry {
        EnumRegistry {
            store: RegistryStore::new(),
            sink: self.sink.unwrap_or_else(|| Box::new(TracingSink)),
        }
    }

    pub fn build_shared(self) -> SharedRegistry {
        SharedRegistry(Arc::new(self.build()))
    }
}

/// Cloneable handle to a registry shared across threads or owners.
///
/// Use `&EnumRegistry` when the caller owns the registry; use this when it
/// must be handed out to owners that outlive the caller.
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry(Arc<EnumRegistry>);

impl Deref for SharedRegistry {
    type Target = EnumRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Whether `value` equals `target` or any of `or`.
///
/// Pure comparison; the registry is not consulted.
pub fn is<E: Enum>(value: E, target: E, or: &[E]) -> bool {
    value == target || or.contains(&value)
}
