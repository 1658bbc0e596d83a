//! Minimal 2D drawing surface.

use crate::core::Point2D;

use super::style::{LineStyle, MarkerStyle};

/// A plotting surface accepting scatter and line primitives plus figure
/// directives. Coordinates are world units; the surface owns the mapping to
/// its own pixel space.
///
/// Implementations must accept empty point slices.
pub trait Canvas {
    /// Draw one marker per point. A labeled layer gets a legend entry.
    fn scatter(&mut self, points: &[Point2D], style: &MarkerStyle, label: Option<&str>);

    /// Draw a path through `points` in order. A labeled layer gets a legend entry.
    fn polyline(&mut self, points: &[Point2D], style: &LineStyle, label: Option<&str>);

    /// Draw a single unlabeled segment.
    fn segment(&mut self, from: Point2D, to: Point2D, style: &LineStyle) {
        self.polyline(&[from, to], style, None);
    }

    /// Figure title
    fn set_title(&mut self, title: &str);

    /// Toggle background grid
    fn set_grid(&mut self, enabled: bool);

    /// Use one scale for both axes
    fn set_equal_aspect(&mut self);

    /// Show a legend for labeled layers
    fn legend(&mut self);

    /// Finish the figure
    fn show(&mut self);
}
