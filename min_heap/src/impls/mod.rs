mod display;
mod sift;
mod snapshot;

use super::tree;
use super::{HeapConfig, HeapEntry, HeapError, Key, MinHeap, SiftPolicy};
use tracing::{debug, warn};

impl<K, V> MinHeap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            sift_policy: SiftPolicy::default(),
        }
    }

    pub fn with_config(config: HeapConfig) -> Self {
        debug!(?config, "creating heap");
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            sift_policy: config.sift_policy,
        }
    }

    pub fn sift_policy(&self) -> SiftPolicy {
        self.sift_policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the key and value at the root without removing them.
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.entries
            .get(tree::root())
            .map(|entry| (entry.key(), entry.value()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, V> MinHeap<K, V> {
    /// Inserts `value` with priority `key`. Smaller keys are removed first.
    pub fn add(&mut self, key: K, value: V) {
        self.entries.push(HeapEntry::new(key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the entry with the smallest key and returns its value.
    ///
    /// Fails with [HeapError::Empty] without touching the heap if there is
    /// nothing to remove.
    pub fn remove(&mut self) -> Result<V, HeapError> {
        self.remove_entry().map(|(_, value)| value)
    }

    pub fn remove_entry(&mut self) -> Result<(K, V), HeapError> {
        if self.entries.is_empty() {
            warn!("remove called on an empty heap");
            return Err(HeapError::Empty);
        }
        // moves the last entry into the root slot
        let entry = self.entries.swap_remove(tree::root());
        if !self.entries.is_empty() {
            self.sift_down(tree::root());
        }
        Ok(entry.into_parts())
    }

    /// Checks that no entry has a smaller key than its parent.
    pub fn is_heap(&self) -> bool {
        (0..self.entries.len()).all(|node| match tree::parent(node) {
            Some(parent) => self.entries[parent].key() <= self.entries[node].key(),
            None => true,
        })
    }
}

impl<K: Key + Clone> MinHeap<K, K> {
    /// Inserts `key` using the key itself as the value.
    pub fn add_key(&mut self, key: K) {
        self.add(key.clone(), key);
    }
}

impl<K: Key, V> Extend<(K, V)> for MinHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Key, V> FromIterator<(K, V)> for MinHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
