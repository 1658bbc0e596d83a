//! Core types for bindu-match.
//!
//! - [`Point2D`]: 2D coordinate pair
//! - [`PointKey`]: exact-equality hash key for a point
//! - [`PointSet`]: ordered, validated point collection
//! - [`Bounds`]: axis-aligned bounding box

mod bounds;
mod point;
mod point_set;

pub use bounds::Bounds;
pub use point::{Point2D, PointKey};
pub use point_set::PointSet;
