//! SVG rendering surface.
//!
//! Collects layers through the [`Canvas`] calls and lays the figure out when
//! asked for a document:
//!
//! ```text
//! ┌──────────────────── title ────────────────────┐
//! │ ┌───────────────────────────┐ ┌─────────────┐ │
//! │ │  grid + lines + markers   │ │   legend    │ │
//! │ │      (square plot)        │ │             │ │
//! │ └───────────────────────────┘ └─────────────┘ │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! World Y increases upward; SVG Y increases downward, so Y is flipped.

use std::fmt::Write;
use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Group, Line, Polygon, Polyline, Rectangle, Text};

use crate::config::RenderConfig;
use crate::core::{Bounds, Point2D};
use crate::error::Result;

use super::canvas::Canvas;
use super::style::{LineStyle, MarkerShape, MarkerStyle, colors};

/// World extent used when the figure has no points.
const EMPTY_EXTENT: f64 = 1.0;

/// Fraction of the data extent added around the data.
const MARGIN_FRACTION: f64 = 0.05;

/// Dash pattern for dashed strokes.
const DASH_PATTERN: &str = "6 4";

/// Legend row height in pixels.
const LEGEND_ROW: f64 = 20.0;

/// Upper bound on grid lines per axis.
const MAX_TICKS: f64 = 200.0;

/// Inner radius of the star glyph relative to its outer radius.
const STAR_INNER_RATIO: f64 = 0.45;

#[derive(Clone, Debug)]
enum Layer {
    Markers {
        points: Vec<Point2D>,
        style: MarkerStyle,
        label: Option<String>,
    },
    Line {
        points: Vec<Point2D>,
        style: LineStyle,
        label: Option<String>,
    },
}

impl Layer {
    fn points(&self) -> &[Point2D] {
        match self {
            Layer::Markers { points, .. } | Layer::Line { points, .. } => points,
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            Layer::Markers { label, .. } | Layer::Line { label, .. } => label.as_deref(),
        }
    }
}

/// World to pixel mapping for the plot area.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    world: Bounds,
    left: f64,
    top: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    fn to_px(&self, p: Point2D) -> (f64, f64) {
        let x = self.left + (p.x - self.world.min.x) * self.scale_x;
        let y = self.top + (self.world.max.y - p.y) * self.scale_y;
        (x, y)
    }
}

/// Canvas that produces an SVG document.
///
/// # Example
/// ```rust
/// use bindu_match::PointMatcher;
/// use bindu_match::render::SvgCanvas;
///
/// let matcher = PointMatcher::new([(0.0, 0.0), (1.0, 1.0)], [(1.05, 1.05)], 0.1)?;
/// let mut canvas = SvgCanvas::default();
/// matcher.plot(&mut canvas, true);
/// assert!(canvas.render().contains("eps=0.1"));
/// # Ok::<(), bindu_match::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SvgCanvas {
    config: RenderConfig,
    layers: Vec<Layer>,
    title: Option<String>,
    grid: bool,
    equal_aspect: bool,
    legend: bool,
    shown: bool,
}

impl SvgCanvas {
    /// Create an empty canvas
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Whether [`Canvas::show`] has been called
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Build the SVG document
    pub fn document(&self) -> Document {
        let plot_size = self.config.width;
        let padding = self.config.padding;
        let title_height = if self.title.is_some() {
            self.config.title_height
        } else {
            0.0
        };
        let legend_width = if self.has_legend() {
            self.config.legend_width
        } else {
            0.0
        };

        let width = plot_size + 2.0 * padding + legend_width;
        let height = plot_size + 2.0 * padding + title_height;

        let viewport = self.viewport(padding, padding + title_height);

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height));

        doc = doc.add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", colors::BACKGROUND),
        );

        if let Some(ref title) = self.title {
            doc = doc.add(
                Text::new(title.as_str())
                    .set("x", padding + plot_size / 2.0)
                    .set("y", title_height * 0.7)
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", 16)
                    .set("fill", colors::TEXT),
            );
        }

        // Plot frame
        doc = doc.add(
            Rectangle::new()
                .set("id", "plot-area")
                .set("x", viewport.left)
                .set("y", viewport.top)
                .set("width", plot_size)
                .set("height", plot_size)
                .set("fill", "none")
                .set("stroke", colors::LEGEND_FRAME)
                .set("stroke-width", 1),
        );

        if self.grid && self.config.show_grid {
            doc = doc.add(self.render_grid(&viewport, plot_size));
        }

        // Lines below markers, in call order
        for (i, layer) in self.layers.iter().enumerate() {
            if let Layer::Line { points, style, .. } = layer
                && let Some(line) = self.render_line(&viewport, points, style)
            {
                doc = doc.add(line.set("id", format!("layer-{}", i)));
            }
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if let Layer::Markers { points, style, .. } = layer {
                doc = doc.add(
                    self.render_markers(&viewport, points, style)
                        .set("id", format!("layer-{}", i)),
                );
            }
        }

        if self.has_legend() {
            doc = doc.add(self.render_legend(padding + plot_size + 10.0, viewport.top));
        }

        doc
    }

    /// Render to an SVG string
    pub fn render(&self) -> String {
        self.document().to_string()
    }

    /// Write the SVG to `path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        svg::save(path, &self.document())?;
        log::debug!("Saved figure to {}", path.display());
        Ok(())
    }

    fn has_legend(&self) -> bool {
        self.legend && self.layers.iter().any(|l| l.label().is_some())
    }

    /// World box shown in the plot area.
    fn view_bounds(&self) -> Bounds {
        let data = Bounds::from_points(self.layers.iter().flat_map(|l| l.points()));
        let mut bounds = data.unwrap_or_else(|| Bounds::from_point(Point2D::ZERO));

        let extent = bounds.width().max(bounds.height());
        bounds = if extent > 0.0 {
            bounds.inflate(extent * MARGIN_FRACTION)
        } else {
            bounds.inflate(EMPTY_EXTENT)
        };

        if self.equal_aspect {
            bounds = bounds.to_square();
        }
        bounds
    }

    fn viewport(&self, left: f64, top: f64) -> Viewport {
        let world = self.view_bounds();
        let size = self.config.width;
        Viewport {
            world,
            left,
            top,
            scale_x: size / world.width(),
            scale_y: size / world.height(),
        }
    }

    fn render_grid(&self, viewport: &Viewport, plot_size: f64) -> Group {
        let mut group = Group::new()
            .set("id", "grid")
            .set("stroke", colors::GRID)
            .set("stroke-width", 1);

        let world = viewport.world;
        let ticks = self.config.grid_ticks.max(1) as f64;
        let bottom = viewport.top + plot_size;
        let right = viewport.left + plot_size;

        let step_x = nice_step(world.width() / ticks);
        for x in tick_values(world.min.x, world.max.x, step_x) {
            let (px, _) = viewport.to_px(Point2D::new(x, world.min.y));
            group = group
                .add(
                    Line::new()
                        .set("x1", px)
                        .set("y1", viewport.top)
                        .set("x2", px)
                        .set("y2", bottom),
                )
                .add(tick_label(
                    &format_tick(x, step_x),
                    px,
                    bottom + 14.0,
                    "middle",
                ));
        }

        let step_y = nice_step(world.height() / ticks);
        for y in tick_values(world.min.y, world.max.y, step_y) {
            let (_, py) = viewport.to_px(Point2D::new(world.min.x, y));
            group = group
                .add(
                    Line::new()
                        .set("x1", viewport.left)
                        .set("y1", py)
                        .set("x2", right)
                        .set("y2", py),
                )
                .add(tick_label(
                    &format_tick(y, step_y),
                    viewport.left - 4.0,
                    py + 4.0,
                    "end",
                ));
        }

        group
    }

    fn render_line(
        &self,
        viewport: &Viewport,
        points: &[Point2D],
        style: &LineStyle,
    ) -> Option<Polyline> {
        if points.len() < 2 {
            return None;
        }

        let mut coords = String::new();
        for (i, p) in points.iter().enumerate() {
            let (x, y) = viewport.to_px(*p);
            if i > 0 {
                coords.push(' ');
            }
            let _ = write!(coords, "{:.2},{:.2}", x, y);
        }

        let mut line = Polyline::new()
            .set("points", coords)
            .set("fill", "none")
            .set("stroke", style.color)
            .set("stroke-width", style.width)
            .set("stroke-opacity", style.opacity)
            .set("stroke-linejoin", "round");
        if style.dashed {
            line = line.set("stroke-dasharray", DASH_PATTERN);
        }
        Some(line)
    }

    fn render_markers(
        &self,
        viewport: &Viewport,
        points: &[Point2D],
        style: &MarkerStyle,
    ) -> Group {
        let mut group = Group::new()
            .set("fill", style.color)
            .set("fill-opacity", style.opacity);

        for p in points {
            let (cx, cy) = viewport.to_px(*p);
            group = match style.shape {
                MarkerShape::Circle => group.add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", style.size),
                ),
                MarkerShape::Star => {
                    group.add(Polygon::new().set("points", star_points(cx, cy, style.size)))
                }
            };
        }

        group
    }

    fn render_legend(&self, left: f64, top: f64) -> Group {
        let entries: Vec<&Layer> = self
            .layers
            .iter()
            .filter(|l| l.label().is_some())
            .collect();
        let box_height = entries.len() as f64 * LEGEND_ROW + 10.0;

        let mut group = Group::new().set("id", "legend").add(
            Rectangle::new()
                .set("x", left)
                .set("y", top)
                .set("width", self.config.legend_width - 20.0)
                .set("height", box_height)
                .set("fill", colors::BACKGROUND)
                .set("stroke", colors::LEGEND_FRAME)
                .set("rx", 4),
        );

        for (row, layer) in entries.iter().enumerate() {
            let y = top + 5.0 + LEGEND_ROW * (row as f64 + 0.5);
            let icon_x = left + 18.0;

            group = match layer {
                Layer::Markers { style, .. } => {
                    let r = style.size.min(LEGEND_ROW * 0.35);
                    match style.shape {
                        MarkerShape::Circle => group.add(
                            Circle::new()
                                .set("cx", icon_x)
                                .set("cy", y)
                                .set("r", r)
                                .set("fill", style.color),
                        ),
                        MarkerShape::Star => group.add(
                            Polygon::new()
                                .set("points", star_points(icon_x, y, r))
                                .set("fill", style.color),
                        ),
                    }
                }
                Layer::Line { style, .. } => {
                    let mut line = Line::new()
                        .set("x1", icon_x - 10.0)
                        .set("y1", y)
                        .set("x2", icon_x + 10.0)
                        .set("y2", y)
                        .set("stroke", style.color)
                        .set("stroke-width", style.width)
                        .set("stroke-opacity", style.opacity);
                    if style.dashed {
                        line = line.set("stroke-dasharray", DASH_PATTERN);
                    }
                    group.add(line)
                }
            };

            group = group.add(
                Text::new(layer.label().unwrap_or_default())
                    .set("x", icon_x + 16.0)
                    .set("y", y + 4.0)
                    .set("font-family", "sans-serif")
                    .set("font-size", 12)
                    .set("fill", colors::TEXT),
            );
        }

        group
    }
}

impl Canvas for SvgCanvas {
    fn scatter(&mut self, points: &[Point2D], style: &MarkerStyle, label: Option<&str>) {
        self.layers.push(Layer::Markers {
            points: points.to_vec(),
            style: *style,
            label: label.map(str::to_string),
        });
    }

    fn polyline(&mut self, points: &[Point2D], style: &LineStyle, label: Option<&str>) {
        self.layers.push(Layer::Line {
            points: points.to_vec(),
            style: *style,
            label: label.map(str::to_string),
        });
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_grid(&mut self, enabled: bool) {
        self.grid = enabled;
    }

    fn set_equal_aspect(&mut self) {
        self.equal_aspect = true;
    }

    fn legend(&mut self) {
        self.legend = true;
    }

    fn show(&mut self) {
        self.shown = true;
        log::debug!(
            "Figure ready: {} layers, title={:?}",
            self.layers.len(),
            self.title
        );
    }
}

/// Vertices of a five-pointed star centered at `(cx, cy)`, pointing up.
fn star_points(cx: f64, cy: f64, radius: f64) -> String {
    let inner = radius * STAR_INNER_RATIO;
    let mut out = String::new();
    for i in 0..10 {
        let r = if i % 2 == 0 { radius } else { inner };
        let angle = std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
        if i > 0 {
            out.push(' ');
        }
        // SVG Y points down
        let _ = write!(out, "{:.2},{:.2}", cx + r * angle.cos(), cy - r * angle.sin());
    }
    out
}

/// Round a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Multiples of `step` inside `[min, max]`.
///
/// Empty when the range does not fit a sane number of ticks (huge or
/// non-finite extents).
fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    let first = (min / step).ceil();
    let last = (max / step).floor();
    if !(first.is_finite() && last.is_finite()) || last - first > MAX_TICKS {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}

/// Tick label with as many decimals as the step needs.
fn format_tick(value: f64, step: f64) -> String {
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    // Avoid "-0"
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

fn tick_label(text: &str, x: f64, y: f64, anchor: &str) -> Text {
    Text::new(text)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", "sans-serif")
        .set("font-size", 10)
        .set("fill", colors::TICK_LABEL)
        .set("stroke", "none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert!((nice_step(0.13) - 0.2).abs() < 1e-12);
        assert!((nice_step(0.7) - 1.0).abs() < 1e-12);
        assert!((nice_step(3.0) - 5.0).abs() < 1e-12);
        assert!((nice_step(10.0) - 10.0).abs() < 1e-9);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_tick_values() {
        assert_eq!(tick_values(-1.2, 1.2, 0.5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(tick_values(0.1, 0.4, 1.0).is_empty());
        assert!(tick_values(-f64::MAX, f64::MAX, 1.0).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(2.0, 1.0), "2");
        assert_eq!(format_tick(-1e-17, 0.2), "0.0");
    }

    #[test]
    fn test_empty_canvas_renders() {
        let mut canvas = SvgCanvas::default();
        canvas.set_equal_aspect();
        canvas.show();
        let svg = canvas.render();
        assert!(svg.contains("<svg"));
        assert!(canvas.is_shown());
    }

    #[test]
    fn test_equal_aspect_uses_one_scale() {
        let mut canvas = SvgCanvas::default();
        canvas.scatter(
            &[Point2D::new(0.0, 0.0), Point2D::new(10.0, 1.0)],
            &MarkerStyle::reference(),
            None,
        );
        canvas.set_equal_aspect();
        let vp = canvas.viewport(0.0, 0.0);
        assert!((vp.scale_x - vp.scale_y).abs() < 1e-12);
    }

    #[test]
    fn test_y_axis_flipped() {
        let mut canvas = SvgCanvas::default();
        canvas.scatter(
            &[Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)],
            &MarkerStyle::reference(),
            None,
        );
        let vp = canvas.viewport(0.0, 0.0);
        let (_, low) = vp.to_px(Point2D::new(0.0, 0.0));
        let (_, high) = vp.to_px(Point2D::new(0.0, 1.0));
        assert!(high < low);
    }

    #[test]
    fn test_single_point_line_skipped() {
        let canvas = SvgCanvas::default();
        let vp = canvas.viewport(0.0, 0.0);
        let line = canvas.render_line(&vp, &[Point2D::ZERO], &LineStyle::exact_path());
        assert!(line.is_none());
    }

    #[test]
    fn test_star_has_ten_vertices() {
        assert_eq!(star_points(0.0, 0.0, 5.0).split(' ').count(), 10);
    }
}
