use super::MinHeap;
use std::fmt;

// values in backing order, not sorted order
impl<K, V: fmt::Display> fmt::Display for MinHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry.value())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_heap_renders_brackets() {
        let heap: MinHeap<u32, String> = MinHeap::new();
        assert_eq!(heap.to_string(), "[]");
    }

    #[test]
    fn renders_values_in_backing_order() {
        let mut heap = MinHeap::new();
        heap.add(3, "c");
        heap.add(1, "a");
        heap.add(2, "b");
        // "a" climbed over "c", "b" stayed below "a"
        assert_eq!(heap.to_string(), "[a, c, b]");
    }

    #[test]
    fn single_value() {
        let mut heap = MinHeap::new();
        heap.add(10, 10);
        assert_eq!(heap.to_string(), "[10]");
    }
}
