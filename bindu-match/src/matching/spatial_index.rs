//! R-tree neighbor search over a reference set.
//!
//! Candidates come from an rstar range query with a slightly widened radius
//! and are then re-checked with [`Point2D::distance`], so answers match
//! [`LinearSearch`](super::LinearSearch) bit for bit, tie-breaking included.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::core::Point2D;

use super::traits::{Neighbor, NeighborSearch};

/// Relative widening of the query radius before the exact re-check.
const RADIUS_SLACK: f64 = 1e-9;

/// A reference point tagged with its position in the original set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedPoint {
    /// The point
    pub point: Point2D,
    /// Index in the reference set
    pub index: usize,
}

impl IndexedPoint {
    /// Create a new indexed point.
    pub fn new(point: Point2D, index: usize) -> Self {
        Self { point, index }
    }
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.point.x, self.point.y])
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.point.distance_squared(&Point2D::new(point[0], point[1]))
    }
}

/// Spatial index for reference points using an R-tree.
///
/// # Example
/// ```rust
/// use bindu_match::core::Point2D;
/// use bindu_match::matching::{NeighborSearch, SpatialIndex};
///
/// let reference = vec![Point2D::new(0.0, 0.0), Point2D::new(5.0, 5.0)];
/// let index = SpatialIndex::new(&reference);
///
/// let hit = index.nearest_within(Point2D::new(4.9, 5.0), 0.5).unwrap();
/// assert_eq!(hit.index, 1);
/// ```
#[derive(Clone)]
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Bulk-load an index from reference points.
    pub fn new(reference: &[Point2D]) -> Self {
        let indexed: Vec<IndexedPoint> = reference
            .iter()
            .enumerate()
            .map(|(i, p)| IndexedPoint::new(*p, i))
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Create an empty index.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Candidates possibly within `radius`, before the exact re-check.
    fn candidates(&self, query: Point2D, radius: f64) -> impl Iterator<Item = &IndexedPoint> {
        let widened = radius * (1.0 + RADIUS_SLACK) + f64::MIN_POSITIVE;
        self.tree.locate_within_distance([query.x, query.y], widened * widened)
    }
}

impl NeighborSearch for SpatialIndex {
    fn nearest_within(&self, query: Point2D, radius: f64) -> Option<Neighbor> {
        let mut best: Option<Neighbor> = None;
        for candidate in self.candidates(query, radius) {
            let distance = candidate.point.distance(&query);
            if distance > radius {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    distance < b.distance || (distance == b.distance && candidate.index < b.index)
                }
            };
            if better {
                best = Some(Neighbor {
                    index: candidate.index,
                    point: candidate.point,
                    distance,
                });
            }
        }
        best
    }

    fn any_within(&self, query: Point2D, radius: f64) -> bool {
        self.candidates(query, radius)
            .any(|c| c.point.distance(&query) <= radius)
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
