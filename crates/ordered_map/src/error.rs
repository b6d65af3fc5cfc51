use thiserror::Error;

/// Failures reported by [`OrderedMap`](crate::OrderedMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// Growing the backing buffer failed; the map is unchanged.
    #[error("out of memory while growing the map")]
    OutOfMemory,
    #[error("key not found in map")]
    KeyNotFound,
}
