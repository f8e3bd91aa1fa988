use super::super::RawMinHeap;
use super::{HeapError, Key, MinHeap, SiftPolicy};

impl<K: Key, V> TryFrom<RawMinHeap<K, V>> for MinHeap<K, V> {
    type Error = HeapError;

    fn try_from(raw: RawMinHeap<K, V>) -> Result<Self, Self::Error> {
        let heap = Self {
            entries: raw.entries,
            sift_policy: raw.sift_policy,
        };
        // legacy removals may already have left the order broken
        if heap.sift_policy == SiftPolicy::Strict && !heap.is_heap() {
            return Err(HeapError::NotAHeap { len: heap.len() });
        }
        Ok(heap)
    }
}
