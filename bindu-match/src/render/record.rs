//! Canvas that records draw calls instead of rasterizing them.

use crate::core::Point2D;

use super::canvas::Canvas;
use super::style::{LineStyle, MarkerStyle};

/// One recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Scatter layer
    Scatter {
        /// Marker positions
        points: Vec<Point2D>,
        /// Marker style
        style: MarkerStyle,
        /// Legend label
        label: Option<String>,
    },
    /// Path or segment
    Polyline {
        /// Path vertices in order
        points: Vec<Point2D>,
        /// Stroke style
        style: LineStyle,
        /// Legend label
        label: Option<String>,
    },
    /// Figure title
    Title(String),
    /// Grid toggle
    Grid(bool),
    /// Equal axis scaling
    EqualAspect,
    /// Legend request
    Legend,
    /// Figure finished
    Show,
}

/// Records every call for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Scatter layers as `(points, style, label)`
    pub fn scatters(&self) -> Vec<(&[Point2D], &MarkerStyle, Option<&str>)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Scatter {
                    points,
                    style,
                    label,
                } => Some((points.as_slice(), style, label.as_deref())),
                _ => None,
            })
            .collect()
    }

    /// Line layers as `(points, style, label)`
    pub fn polylines(&self) -> Vec<(&[Point2D], &LineStyle, Option<&str>)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline {
                    points,
                    style,
                    label,
                } => Some((points.as_slice(), style, label.as_deref())),
                _ => None,
            })
            .collect()
    }

    /// Dashed lines only
    pub fn dashed_lines(&self) -> Vec<&[Point2D]> {
        self.polylines()
            .into_iter()
            .filter(|(_, style, _)| style.dashed)
            .map(|(points, _, _)| points)
            .collect()
    }

    /// Solid lines only
    pub fn solid_lines(&self) -> Vec<&[Point2D]> {
        self.polylines()
            .into_iter()
            .filter(|(_, style, _)| !style.dashed)
            .map(|(points, _, _)| points)
            .collect()
    }

    /// Last title set
    pub fn title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Whether `show` was called
    pub fn is_shown(&self) -> bool {
        self.commands.contains(&DrawCommand::Show)
    }
}

impl Canvas for RecordingCanvas {
    fn scatter(&mut self, points: &[Point2D], style: &MarkerStyle, label: Option<&str>) {
        self.commands.push(DrawCommand::Scatter {
            points: points.to_vec(),
            style: *style,
            label: label.map(str::to_string),
        });
    }

    fn polyline(&mut self, points: &[Point2D], style: &LineStyle, label: Option<&str>) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style: *style,
            label: label.map(str::to_string),
        });
    }

    fn set_title(&mut self, title: &str) {
        self.commands.push(DrawCommand::Title(title.to_string()));
    }

    fn set_grid(&mut self, enabled: bool) {
        self.commands.push(DrawCommand::Grid(enabled));
    }

    fn set_equal_aspect(&mut self) {
        self.commands.push(DrawCommand::EqualAspect);
    }

    fn legend(&mut self) {
        self.commands.push(DrawCommand::Legend);
    }

    fn show(&mut self) {
        self.commands.push(DrawCommand::Show);
    }
}
