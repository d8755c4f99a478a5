//! Kindex: a static k-d tree for single nearest-neighbor queries.
//!
//! The tree is built once over a fixed set of `[f64; D]` points by repeated
//! median selection on a cyclically rotating axis, then answers queries with
//! a branch-and-bound recursive search. There are no updates after
//! construction.
//!
//! Coordinates are expected to be finite; NaN or infinite values are
//! unsupported input and lead to unspecified (but memory-safe) results.

mod distance;
mod error;
mod kdtree;
#[allow(clippy::module_name_repetitions)]
mod linear;
mod node;
mod select;

pub use error::Error;
pub use kdtree::{KdTree, Nearest};
pub use linear::LinearScan;
