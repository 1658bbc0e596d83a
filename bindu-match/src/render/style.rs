//! Marker and line styles for the match figure.

/// Figure palette.
pub mod colors {
    /// Reference set markers - gray
    pub const REFERENCE: &str = "#808080";
    /// Pattern set markers - red
    pub const PATTERN: &str = "#FF0000";
    /// Fuzzy connections and matched path - red
    pub const FUZZY: &str = "#FF0000";
    /// Exact match path - green
    pub const EXACT_PATH: &str = "#008000";
    /// Grid lines
    pub const GRID: &str = "#DDDDDD";
    /// Axis tick labels
    pub const TICK_LABEL: &str = "#666666";
    /// Figure background
    pub const BACKGROUND: &str = "#FFFFFF";
    /// Text
    pub const TEXT: &str = "#222222";
    /// Legend frame
    pub const LEGEND_FRAME: &str = "#CCCCCC";
}

/// Marker glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    /// Filled circle
    Circle,
    /// Five-pointed star
    Star,
}

/// Scatter marker style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Glyph
    pub shape: MarkerShape,
    /// Fill color
    pub color: &'static str,
    /// Outer radius in pixels
    pub size: f64,
    /// Fill opacity (0.0-1.0)
    pub opacity: f64,
}

impl MarkerStyle {
    /// Gray circles for the reference set
    pub fn reference() -> Self {
        Self {
            shape: MarkerShape::Circle,
            color: colors::REFERENCE,
            size: 4.0,
            opacity: 1.0,
        }
    }

    /// Red stars for the pattern set
    pub fn pattern() -> Self {
        Self {
            shape: MarkerShape::Star,
            color: colors::PATTERN,
            size: 7.0,
            opacity: 1.0,
        }
    }
}

/// Line style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke color
    pub color: &'static str,
    /// Stroke width in pixels
    pub width: f64,
    /// Dashed stroke
    pub dashed: bool,
    /// Stroke opacity (0.0-1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// Dashed segment from a pattern point to its nearest reference point
    pub fn connection() -> Self {
        Self {
            color: colors::FUZZY,
            width: 1.0,
            dashed: true,
            opacity: 0.5,
        }
    }

    /// Solid path through matched pattern points (fuzzy mode)
    pub fn fuzzy_path() -> Self {
        Self {
            color: colors::FUZZY,
            width: 2.0,
            dashed: false,
            opacity: 0.6,
        }
    }

    /// Solid path through all pattern points (exact mode)
    pub fn exact_path() -> Self {
        Self {
            color: colors::EXACT_PATH,
            width: 2.0,
            dashed: false,
            opacity: 1.0,
        }
    }
}
