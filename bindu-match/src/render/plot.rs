//! Match figure composition.

use crate::core::Point2D;
use crate::matching::{MatchMode, PointMatcher};

use super::canvas::Canvas;
use super::style::{LineStyle, MarkerStyle};

/// Legend label of the reference set
pub const REFERENCE_LABEL: &str = "A (main set)";
/// Legend label of the pattern set
pub const PATTERN_LABEL: &str = "B (pattern)";
/// Legend label of the exact match path
pub const EXACT_PATH_LABEL: &str = "Exact match path";

/// Figure title for a tolerance, e.g. `Point Matching Visualization (eps=0.1)`.
///
/// eps uses Rust's shortest round-trip float format (`{:?}`): integral
/// values keep a `.0`, and very small or large values switch to exponent
/// form without padding or sign (`1e-5`, `1e16`).
pub fn figure_title(eps: f64) -> String {
    format!("Point Matching Visualization (eps={:?})", eps)
}

/// Draw a matcher onto a canvas.
///
/// Layers, in order:
/// 1. A as gray circles, B as red stars.
/// 2. With `show_connections`:
///    - fuzzy mode: a dashed segment from each B point to its nearest A point
///      when that point is within `eps`, then one solid path through the
///      matched B points in B's order (only if something matched);
///    - exact mode: if every B point is in A, a green path through all of B.
/// 3. Legend, grid, equal aspect, title; then the figure is shown.
///
/// An empty A matches nothing, so no connections are drawn for it.
pub fn draw_match<C: Canvas + ?Sized>(
    matcher: &PointMatcher,
    canvas: &mut C,
    show_connections: bool,
) {
    canvas.scatter(
        matcher.reference().points(),
        &MarkerStyle::reference(),
        Some(REFERENCE_LABEL),
    );
    canvas.scatter(
        matcher.pattern().points(),
        &MarkerStyle::pattern(),
        Some(PATTERN_LABEL),
    );

    if show_connections {
        match matcher.mode() {
            MatchMode::Fuzzy => {
                let pairs = matcher.matched_pairs();
                let connection = LineStyle::connection();
                for pair in &pairs {
                    canvas.segment(pair.pattern, pair.reference, &connection);
                }
                if !pairs.is_empty() {
                    let path: Vec<Point2D> = pairs.iter().map(|p| p.pattern).collect();
                    canvas.polyline(&path, &LineStyle::fuzzy_path(), None);
                }
            }
            MatchMode::Exact => {
                if !matcher.pattern().is_empty() && matcher.exact_match() {
                    canvas.polyline(
                        matcher.pattern().points(),
                        &LineStyle::exact_path(),
                        Some(EXACT_PATH_LABEL),
                    );
                }
            }
        }
    }

    canvas.legend();
    canvas.set_grid(true);
    canvas.set_equal_aspect();
    canvas.set_title(&figure_title(matcher.eps()));
    canvas.show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_title() {
        assert_eq!(figure_title(0.0), "Point Matching Visualization (eps=0.0)");
        assert_eq!(figure_title(0.1), "Point Matching Visualization (eps=0.1)");
        assert_eq!(figure_title(5.0), "Point Matching Visualization (eps=5.0)");
        assert_eq!(figure_title(1e-5), "Point Matching Visualization (eps=1e-5)");
        assert_eq!(figure_title(1e16), "Point Matching Visualization (eps=1e16)");
    }
}
