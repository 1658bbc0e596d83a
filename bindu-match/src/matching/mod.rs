//! Point set matching.
//!
//! [`PointMatcher`] answers two questions about a pattern set B and a
//! reference set A:
//!
//! - `exact_match`: does every point of B appear verbatim in A?
//! - `fuzzy_match`: does every point of B have a point of A within `eps`?
//!
//! Fuzzy queries go through a [`NeighborSearch`] implementation:
//! - [`LinearSearch`]: brute force O(|A|) per query
//! - [`SpatialIndex`]: R-tree over A, identical answers
//!
//! The strategy is chosen with [`SearchStrategy`](crate::config::SearchStrategy).

mod linear;
mod matcher;
mod spatial_index;
mod traits;

pub use linear::LinearSearch;
pub use matcher::{MatchMode, MatchedPair, PointMatcher};
pub use spatial_index::{IndexedPoint, SpatialIndex};
pub use traits::{Neighbor, NeighborSearch};
