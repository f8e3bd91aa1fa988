use super::tree;
use super::{Key, MinHeap, SiftPolicy};
use tracing::trace;

impl<K: Key, V> MinHeap<K, V> {
    fn precedes(&self, lhs: usize, rhs: usize) -> bool {
        self.entries[lhs].key() < self.entries[rhs].key()
    }

    // equal keys stop the climb
    pub(super) fn sift_up(&mut self, mut node: usize) {
        while let Some(parent) = tree::parent(node) {
            if !self.precedes(node, parent) {
                break;
            }
            trace!(node, parent, "sift up");
            self.entries.swap(node, parent);
            node = parent;
        }
    }

    pub(super) fn sift_down(&mut self, mut node: usize) {
        while let Some(child) = self.sift_down_target(node) {
            trace!(node, child, "sift down");
            self.entries.swap(node, child);
            node = child;
        }
    }

    fn sift_down_target(&self, node: usize) -> Option<usize> {
        match tree::children(node, self.entries.len()) {
            // a right child always has a left sibling
            (None, _) => None,
            (Some(child), None) => self.precedes(child, node).then_some(child),
            (Some(left), Some(right)) => match self.sift_policy {
                SiftPolicy::Strict => {
                    let smaller = if self.precedes(right, left) {
                        right
                    } else {
                        left
                    };
                    self.precedes(smaller, node).then_some(smaller)
                }
                SiftPolicy::Legacy => {
                    if self.precedes(node, left) && self.precedes(node, right) {
                        None
                    } else if self.precedes(left, right) {
                        Some(left)
                    } else if self.precedes(right, left) {
                        Some(right)
                    } else {
                        None
                    }
                }
            },
        }
    }
}
