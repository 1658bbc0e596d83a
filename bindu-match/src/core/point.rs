//! Point and exact-equality key types.

use serde::{Deserialize, Serialize};

/// A 2D point (plain coordinate pair, no identity beyond its value)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    ///
    /// Finite for any two finite points, even when the squared distance
    /// would overflow.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Both coordinates are finite (not NaN, not infinite)
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Exact-equality hash key for this point.
    #[inline]
    pub fn key(&self) -> PointKey {
        PointKey::from(*self)
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point2D::new(x, y)
    }
}

impl From<&Point2D> for Point2D {
    #[inline]
    fn from(p: &Point2D) -> Self {
        *p
    }
}

impl From<Point2D> for [f64; 2] {
    #[inline]
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

/// Hashable key with exact coordinate equality.
///
/// Built from the IEEE-754 bit patterns of both coordinates. `-0.0` is
/// folded into `0.0` so two keys are equal exactly when the points compare
/// equal with `==`. Only finite coordinates are expected here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey {
    x_bits: u64,
    y_bits: u64,
}

impl PointKey {
    #[inline]
    fn canonical_bits(v: f64) -> u64 {
        // 0.0 == -0.0
        if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
    }
}

impl From<Point2D> for PointKey {
    #[inline]
    fn from(p: Point2D) -> Self {
        Self {
            x_bits: Self::canonical_bits(p.x),
            y_bits: Self::canonical_bits(p.y),
        }
    }
}
