use std::{io::Error as IOError, path::PathBuf};

/// The errors that can occur when using a [crate::MinHeap].
#[derive(thiserror::Error, Debug)]
pub enum HeapError {
    /// `remove` was called on a heap with no entries.
    #[error("cannot remove from an empty heap")]
    Empty,
    /// The heap configuration file could not be read.
    #[error("failed to read heap config {path:?}: {source}")]
    ConfigIo { path: PathBuf, source: IOError },
    /// The heap configuration file is not valid JSON for a [crate::HeapConfig].
    #[error("failed to parse heap config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A deserialized heap has an entry with a smaller key than its parent.
    #[error("snapshot of {len} entries does not satisfy the heap property")]
    NotAHeap { len: usize },
}
