//! Ordered, validated point collections.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Point2D, PointKey};
use crate::error::{Error, Result};

/// An ordered sequence of finite 2D points.
///
/// Order matters only for rendering (paths follow it). Duplicates are kept
/// and are indistinguishable from each other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct PointSet {
    points: Vec<Point2D>,
}

impl PointSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from anything convertible to points.
    ///
    /// # Errors
    /// `InvalidInput` if any coordinate is NaN or infinite.
    pub fn from_points<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point2D>,
    {
        let points: Vec<Point2D> = points.into_iter().map(Into::into).collect();
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "point {} has non-finite coordinates ({}, {})",
                    i, p.x, p.y
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build from dynamically sized coordinate rows (e.g. parsed YAML).
    ///
    /// # Errors
    /// `InvalidInput` unless every row holds exactly two finite numbers.
    pub fn from_coords<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let mut points = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            match row.as_ref() {
                [x, y] => points.push(Point2D::new(*x, *y)),
                other => {
                    return Err(Error::InvalidInput(format!(
                        "point {} must have exactly 2 coordinates, got {}",
                        i,
                        other.len()
                    )));
                }
            }
        }
        Self::from_points(points)
    }

    /// Number of points (duplicates included)
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    /// Point at index
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    /// Distinct exact-equality keys (duplicates collapse)
    pub fn key_set(&self) -> HashSet<PointKey> {
        self.points.iter().map(Point2D::key).collect()
    }
}

impl TryFrom<Vec<Point2D>> for PointSet {
    type Error = Error;

    fn try_from(points: Vec<Point2D>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<PointSet> for Vec<Point2D> {
    fn from(set: PointSet) -> Self {
        set.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_preserves_order_and_duplicates() {
        let set = PointSet::from_points([(1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0), Some(Point2D::new(1.0, 1.0)));
        assert_eq!(set.get(1), Some(Point2D::new(0.0, 0.0)));
        assert_eq!(set.key_set().len(), 2);
    }

    #[test]
    fn test_from_points_rejects_nan() {
        let err = PointSet::from_points([(0.0, 0.0), (f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("point 1"));
    }

    #[test]
    fn test_from_points_rejects_infinity() {
        let err = PointSet::from_points([[f64::INFINITY, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_coords() {
        let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let set = PointSet::from_coords(&rows).unwrap();
        assert_eq!(set.points(), &[Point2D::new(0.0, 1.0), Point2D::new(2.0, 3.0)]);
    }

    #[test]
    fn test_from_coords_wrong_arity() {
        let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0, 4.0]];
        let err = PointSet::from_coords(&rows).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("got 3"));

        let rows = vec![vec![5.0]];
        assert!(PointSet::from_coords(&rows).is_err());
    }

    #[test]
    fn test_empty_set() {
        let set = PointSet::new();
        assert!(set.is_empty());
        assert!(set.key_set().is_empty());
    }
}
