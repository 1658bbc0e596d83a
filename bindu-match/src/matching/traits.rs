//! Neighbor search trait.

use crate::core::Point2D;

/// A reference point found near a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    /// Index in the reference set
    pub index: usize,
    /// Reference point
    pub point: Point2D,
    /// Euclidean distance to the query
    pub distance: f64,
}

/// Radius-limited nearest neighbor lookup over a reference set.
///
/// Implementations must agree exactly with a linear scan that uses
/// [`Point2D::distance`] and keeps the first (lowest index) point on ties.
/// Radii are inclusive: a point at distance `== radius` is in range.
pub trait NeighborSearch {
    /// Nearest reference point within `radius` of `query`.
    fn nearest_within(&self, query: Point2D, radius: f64) -> Option<Neighbor>;

    /// Whether any reference point lies within `radius` of `query`.
    fn any_within(&self, query: Point2D, radius: f64) -> bool {
        self.nearest_within(query, radius).is_some()
    }

    /// Number of reference points.
    fn len(&self) -> usize;

    /// Check if the reference set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
