use serde::{Deserialize, Serialize};

/// Anything that can be compared with `<` can be used as a heap key.
///
/// Keys that don't compare (e.g. `f64::NAN`) never cause a swap, so mixing
/// them into a heap leaves the extraction order unspecified.
pub trait Key: PartialOrd {}

impl<K> Key for K where K: PartialOrd {}

// entries are never mutated in place, they only move between slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeapEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> HeapEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
