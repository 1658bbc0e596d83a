//! Match visualization.
//!
//! Drawing goes through the [`Canvas`] trait so the figure logic does not
//! depend on any particular graphics backend:
//!
//! - [`SvgCanvas`]: writes an SVG document (svg crate)
//! - [`RecordingCanvas`]: keeps the draw calls for inspection
//!
//! ```rust,ignore
//! use bindu_match::PointMatcher;
//! use bindu_match::render::SvgCanvas;
//!
//! let matcher = PointMatcher::new(a, b, 0.1)?;
//! let mut canvas = SvgCanvas::default();
//! matcher.plot(&mut canvas, true);
//! canvas.save("output/match.svg")?;
//! ```

mod canvas;
mod plot;
mod record;
mod style;
mod svg_canvas;

pub use canvas::Canvas;
pub use plot::{EXACT_PATH_LABEL, PATTERN_LABEL, REFERENCE_LABEL, draw_match, figure_title};
pub use record::{DrawCommand, RecordingCanvas};
pub use style::{LineStyle, MarkerShape, MarkerStyle, colors};
pub use svg_canvas::SvgCanvas;
