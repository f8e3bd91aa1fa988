//! An array-backed binary min-heap.
//!
//! Entries are `(key, value)` pairs laid out as a complete binary tree in a
//! vector: the node at index `i` has its children at `2i + 1` and `2i + 2`.
//! `remove` always yields the value of an entry with the smallest key.

mod config;
mod entry;
mod error;
mod impls;
mod tree;

pub use config::{HeapConfig, SiftPolicy};
use entry::HeapEntry;
pub use entry::Key;
pub use error::HeapError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawMinHeap<K, V>",
    bound(deserialize = "K: Key + Deserialize<'de>, V: Deserialize<'de>")
)]
pub struct MinHeap<K, V> {
    entries: Vec<HeapEntry<K, V>>,
    sift_policy: SiftPolicy,
}

// unchecked mirror of MinHeap, validated on the way in
#[derive(Deserialize)]
pub(crate) struct RawMinHeap<K, V> {
    entries: Vec<HeapEntry<K, V>>,
    sift_policy: SiftPolicy,
}
