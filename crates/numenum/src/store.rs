//! Sharded, type-erased storage for registered members.
//!
//! The store maps a uid to an [`AnyMember`] trait object. Each shard is an
//! independent `RwLock`, so lookups for different types never contend and
//! lookups for the same type only share a read lock.

use std::hash::BuildHasher;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::member::AnyMember;

/// A member as stored: shared, immutable, type-erased.
pub type ErasedMember = Arc<dyn AnyMember>;

/// Per-shard storage.
#[derive(Default)]
struct StoreShard {
    members: FxHashMap<&'static str, ErasedMember>,
}

/// Concurrent map from uid to member.
///
/// Append-only: a member can be inserted once per uid and is never replaced
/// or removed.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Inserts re-check presence under the write lock, so
/// of several racing inserts for one uid exactly one succeeds.
pub struct RegistryStore {
    shards: [RwLock<StoreShard>; RegistryStore::NUM_SHARDS],
    /// Total count of members across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl RegistryStore {
    /// Number of shards.
    pub const NUM_SHARDS: usize = 16;

    pub fn new() -> Self {
        RegistryStore {
            shards: std::array::from_fn(|_| RwLock::new(StoreShard::default())),
            total_count: AtomicUsize::new(0),
        }
    }

    /// Compute shard for a uid from its full hash; uids commonly share a long
    /// module-path prefix.
    #[inline]
    fn shard_for(uid: &str) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "only the low bits select a shard"
        )]
        let hash = FxBuildHasher.hash_one(uid) as usize;
        hash % Self::NUM_SHARDS
    }

    /// Look up the member registered under `uid`.
    pub fn get(&self, uid: &str) -> Option<ErasedMember> {
        let shard = self.shards[Self::shard_for(uid)].read();
        shard.members.get(uid).cloned()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.shards[Self::shard_for(uid)]
            .read()
            .members
            .contains_key(uid)
    }

    /// Insert `member` unless `uid` is already present.
    ///
    /// Returns `true` if this call inserted. Once it returns `true`, every
    /// later `get(uid)` on any thread observes the member.
    pub fn insert_if_absent(&self, uid: &'static str, member: ErasedMember) -> bool {
        let shard = &self.shards[Self::shard_for(uid)];

        // Fast path: already present
        if shard.read().members.contains_key(uid) {
            return false;
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if guard.members.contains_key(uid) {
            return false;
        }
        guard.members.insert(uid, member);

        // Relaxed is fine: the count is informational, visibility of the
        // member itself is ordered by the shard lock.
        self.total_count.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Number of registered members (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every registered uid, sorted.
    pub fn uids(&self) -> Vec<&'static str> {
        let mut uids: Vec<&'static str> = self
            .shards
            .iter()
            .flat_map(|shard| shard.read().members.keys().copied().collect::<Vec<_>>())
            .collect();
        uids.sort_unstable();
        uids
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new()
    }
}
