//! Render section: SVG figure geometry.

use serde::{Deserialize, Serialize};

/// SVG figure layout (pixel units)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Width of the square plot area
    pub width: f64,
    /// Padding around the plot area
    pub padding: f64,
    /// Space reserved above the plot for the title
    pub title_height: f64,
    /// Space reserved right of the plot for the legend
    pub legend_width: f64,
    /// Draw grid lines when the figure asks for a grid
    pub show_grid: bool,
    /// Approximate number of grid lines per axis
    pub grid_ticks: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            padding: 40.0,
            title_height: 36.0,
            legend_width: 170.0,
            show_grid: true,
            grid_ticks: 8,
        }
    }
}
