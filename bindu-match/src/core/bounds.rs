//! Axis-aligned bounding box.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// Axis-aligned bounding box in world coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner
    pub min: Point2D,
    /// Maximum corner
    pub max: Point2D,
}

impl Bounds {
    /// Create bounds from two corners
    pub fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Bounds containing a single point (zero area)
    pub fn from_point(p: Point2D) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest bounds containing all points, `None` for an empty input
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(*first);
        for p in iter {
            bounds.expand_to_include(*p);
        }
        Some(bounds)
    }

    /// Grow to include a point
    pub fn expand_to_include(&mut self, p: Point2D) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width (x extent)
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height (y extent)
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Expand every side by `margin`
    pub fn inflate(&self, margin: f64) -> Bounds {
        Bounds::new(
            Point2D::new(self.min.x - margin, self.min.y - margin),
            Point2D::new(self.max.x + margin, self.max.y + margin),
        )
    }

    /// Make the box square around its center, keeping the larger extent.
    pub fn to_square(&self) -> Bounds {
        let half = self.width().max(self.height()) * 0.5;
        let c = self.center();
        Bounds::new(
            Point2D::new(c.x - half, c.y - half),
            Point2D::new(c.x + half, c.y + half),
        )
    }
}
