use thiserror::Error;

/// Errors reported by index construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index holds no points, so there is no nearest neighbor to return.
    /// Check `is_empty` before querying.
    #[error("cannot query an empty index")]
    EmptyIndex,

    /// A row of input coordinates does not match the index dimensionality.
    #[error("point has {actual} coordinates, index is {expected}-dimensional")]
    InvalidDimension { expected: usize, actual: usize },
}
