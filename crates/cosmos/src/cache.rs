//! Lazily populated, thread-safe cache
//!
//! Each key owns a `OnceLock` cell. The map lock is held only to find or
//! insert the cell; the derivation runs inside the cell, so concurrent first
//! access to one key derives exactly once while other keys proceed in
//! parallel. Readers never observe a half-built value.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

type Cell<V> = Arc<OnceLock<Arc<V>>>;

pub struct LazyMap<K, V> {
    cells: RwLock<HashMap<K, Cell<V>>>,
}

impl<K, V> LazyMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, deriving it on first access
    pub fn get_or_derive<F>(&self, key: &K, derive: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        let cell = self.cell(key);
        Arc::clone(cell.get_or_init(|| Arc::new(derive())))
    }

    /// The cached value, without deriving
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.cells
            .read()
            .get(key)
            .and_then(|cell| cell.get().cloned())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of fully derived entries
    pub fn len(&self) -> usize {
        self.cells
            .read()
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, key: &K) -> Cell<V> {
        if let Some(cell) = self.cells.read().get(key) {
            return Arc::clone(cell);
        }
        Arc::clone(self.cells.write().entry(key.clone()).or_default())
    }
}

impl<K, V> Default for LazyMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for LazyMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyMap").field("len", &self.len()).finish()
    }
}
