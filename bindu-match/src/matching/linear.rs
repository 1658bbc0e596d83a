//! Brute-force neighbor search.

use crate::core::Point2D;

use super::traits::{Neighbor, NeighborSearch};

/// Linear scan over a borrowed reference slice. O(n) per query.
#[derive(Clone, Copy, Debug)]
pub struct LinearSearch<'a> {
    reference: &'a [Point2D],
}

impl<'a> LinearSearch<'a> {
    /// Search over `reference`
    pub fn new(reference: &'a [Point2D]) -> Self {
        Self { reference }
    }

    /// Nearest reference point regardless of distance.
    ///
    /// Ties keep the first occurrence. `None` only for an empty reference set.
    pub fn nearest(&self, query: Point2D) -> Option<Neighbor> {
        let mut best: Option<Neighbor> = None;
        for (index, point) in self.reference.iter().enumerate() {
            let distance = point.distance(&query);
            // Strict '<' keeps the earliest index on ties
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Neighbor {
                    index,
                    point: *point,
                    distance,
                });
            }
        }
        best
    }
}

impl NeighborSearch for LinearSearch<'_> {
    fn nearest_within(&self, query: Point2D, radius: f64) -> Option<Neighbor> {
        self.nearest(query).filter(|n| n.distance <= radius)
    }

    fn any_within(&self, query: Point2D, radius: f64) -> bool {
        self.reference.iter().any(|p| p.distance(&query) <= radius)
    }

    fn len(&self) -> usize {
        self.reference.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 0.0),
        ]
    }

    #[test]
    fn test_nearest() {
        let pts = reference();
        let search = LinearSearch::new(&pts);
        let n = search.nearest(Point2D::new(1.1, 0.9)).unwrap();
        assert_eq!(n.index, 1);
        assert_eq!(n.point, Point2D::new(1.0, 1.0));
    }

    #[test]
    fn test_tie_keeps_first() {
        let pts = reference();
        let search = LinearSearch::new(&pts);
        // Equidistant from (0,0) and (2,0)
        let n = search.nearest(Point2D::new(1.0, 0.0)).unwrap();
        assert_eq!(n.index, 0);
    }

    #[test]
    fn test_radius_inclusive() {
        let pts = vec![Point2D::new(0.0, 0.0)];
        let search = LinearSearch::new(&pts);
        assert!(search.any_within(Point2D::new(3.0, 4.0), 5.0));
        assert!(search.nearest_within(Point2D::new(3.0, 4.0), 5.0).is_some());
        assert!(!search.any_within(Point2D::new(3.0, 4.0), 4.999));
        assert!(search.nearest_within(Point2D::new(3.0, 4.0), 4.999).is_none());
    }

    #[test]
    fn test_empty_reference() {
        let pts: Vec<Point2D> = Vec::new();
        let search = LinearSearch::new(&pts);
        assert!(search.is_empty());
        assert!(search.nearest(Point2D::ZERO).is_none());
        assert!(!search.any_within(Point2D::ZERO, 100.0));
    }
}
