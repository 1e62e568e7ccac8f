//! `EntityStore` — the keyed lookup collaborator.
//!
//! A thin layer over `FxHashMap` that owns the canonical mutable entities.
//! Entities are updated in place through `get_mut`; the status log holds
//! value snapshots, never references into the store.
//!
//! Iteration order of a hash map is unspecified, which would make the
//! driver's per-tick sweeps nondeterministic; [`ids`](EntityStore::ids)
//! returns keys in ascending order and is the only iteration surface the
//! driver uses.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use pf_core::{PackageId, TruckId};

use crate::error::{ModelError, ModelResult};

// ── EntityKey ─────────────────────────────────────────────────────────────────

/// Typed ids usable as store and log keys.
pub trait EntityKey: Copy + Eq + Hash + Ord {
    /// The raw integer id, for error reporting.
    fn raw(self) -> u32;
}

impl EntityKey for PackageId {
    fn raw(self) -> u32 {
        self.0
    }
}

impl EntityKey for TruckId {
    fn raw(self) -> u32 {
        self.0
    }
}

// ── EntityStore ───────────────────────────────────────────────────────────────

/// Keyed storage for packages or trucks.
#[derive(Clone, Debug)]
pub struct EntityStore<K: EntityKey, V> {
    inner: FxHashMap<K, V>,
}

impl<K: EntityKey, V> Default for EntityStore<K, V> {
    fn default() -> Self {
        Self { inner: FxHashMap::default() }
    }
}

impl<K: EntityKey, V> EntityStore<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `id`, returning the previous value if any.
    pub fn insert(&mut self, id: K, value: V) -> Option<V> {
        self.inner.insert(id, value)
    }

    pub fn get(&self, id: K) -> ModelResult<&V> {
        self.inner.get(&id).ok_or(ModelError::NotFound(id.raw()))
    }

    pub fn get_mut(&mut self, id: K) -> ModelResult<&mut V> {
        self.inner.get_mut(&id).ok_or(ModelError::NotFound(id.raw()))
    }

    pub fn contains(&self, id: K) -> bool {
        self.inner.contains_key(&id)
    }

    /// All keys in ascending order — the driver's deterministic sweep order.
    pub fn ids(&self) -> Vec<K> {
        let mut ids: Vec<K> = self.inner.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Unordered value iteration, for order-independent aggregate scans.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
