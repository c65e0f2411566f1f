//! Per-type metadata kept by the registry.
//!
//! A [`Member`] holds the closed set of legal values of one enumeration type
//! and the description of each. Members are built once, at registration, and
//! never change afterwards.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::identity::{Enum, TypeNames};

/// Registered metadata of the enumeration type `E`.
pub struct Member<E: Enum> {
    names: TypeNames,
    /// Legal values in ascending numeric order.
    oneof: Box<[E]>,
    description: FxHashMap<E, String>,
}

impl<E: Enum> Member<E> {
    /// Build a member from its value/description mapping.
    ///
    /// `oneof` is the key set ordered by ascending integer value, so listing
    /// order never depends on the caller's collection type.
    pub(crate) fn new(names: TypeNames, description: FxHashMap<E, String>) -> Self {
        let mut oneof: Vec<E> = description.keys().copied().collect();
        oneof.sort_unstable_by_key(|value| value.to_repr());
        Member {
            names,
            oneof: oneof.into_boxed_slice(),
            description,
        }
    }

    /// Registry key of this type.
    pub fn uid(&self) -> &'static str {
        self.names.uid
    }

    /// Unqualified type name.
    pub fn short_name(&self) -> &'static str {
        self.names.short
    }

    /// Type name including module path.
    pub fn full_name(&self) -> &'static str {
        self.names.full
    }

    /// The legal values, ascending.
    pub fn oneof(&self) -> &[E] {
        &self.oneof
    }

    pub fn contains(&self, value: E) -> bool {
        self.description.contains_key(&value)
    }

    /// Description of `value`, if it is a legal value.
    pub fn description(&self, value: E) -> Option<&str> {
        self.description.get(&value).map(String::as_str)
    }

    /// Descriptions of every legal value, in `oneof` order.
    pub fn descriptions(&self) -> Vec<String> {
        self.iter().map(|(_, desc)| desc.to_owned()).collect()
    }

    /// Value/description pairs in `oneof` order.
    pub fn iter(&self) -> impl Iterator<Item = (E, &str)> + '_ {
        self.oneof
            .iter()
            .map(move |&value| (value, self.description(value).unwrap_or_default()))
    }

    /// First value in `oneof` order whose description is exactly `desc`.
    pub fn find(&self, desc: &str) -> Option<E> {
        self.iter()
            .find_map(|(value, candidate)| (candidate == desc).then_some(value))
    }

    /// `oneof` without the values in `except`, relative order kept.
    pub fn values_except(&self, except: &[E]) -> Vec<E> {
        match except.split_first() {
            None => self.oneof.to_vec(),
            Some((&first, rest)) => self
                .oneof
                .iter()
                .copied()
                .filter(|&value| !crate::is(value, first, rest))
                .collect(),
        }
    }

    /// Legal values rendered as integers, in `oneof` order.
    pub(crate) fn rendered_values(&self) -> Vec<String> {
        self.oneof
            .iter()
            .map(|value| value.to_repr().to_string())
            .collect()
    }
}

impl<E: Enum> fmt::Debug for Member<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("uid", &self.names.uid)
            .field("name", &self.names.full)
            .field("oneof", &self.rendered_values())
            .finish_non_exhaustive()
    }
}

/// Type-erased view of a [`Member`], as held by the registry store.
pub trait AnyMember: Send + Sync {
    /// Names of the type the member was registered for.
    fn names(&self) -> TypeNames;

    /// `{value: description, ...}` in `oneof` order, for diagnostics.
    fn summary(&self) -> String;

    /// Recover the concrete member through [`Arc::downcast`].
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<E: Enum> AnyMember for Member<E> {
    fn names(&self) -> TypeNames {
        self.names
    }

    fn summary(&self) -> String {
        let entries: Vec<String> = self
            .iter()
            .map(|(value, desc)| format!("{}: {desc}", value.to_repr()))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
