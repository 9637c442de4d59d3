//! Plot labelling and styling

use serde::{Deserialize, Serialize};

/// Text placed on a shell figure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotLabels {
    pub xlabel: String,
    pub ylabel: String,
    pub title: String,
}

impl PlotLabels {
    /// Labels for the x axis, y axis and figure title
    pub fn new(
        xlabel: impl Into<String>,
        ylabel: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
            title: title.into(),
        }
    }
}

/// Figure geometry and line styling
///
/// Defaults give a 7×4 inch figure at 100 dpi with a light grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Opacity of the grid lines (0.0-1.0)
    pub grid_alpha: f64,
    /// Stroke width of each shell's step line
    pub line_width: u32,
    /// Font size of the title
    pub caption_font_size: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 700,
            height: 400,
            grid_alpha: 0.3,
            line_width: 2,
            caption_font_size: 20,
        }
    }
}

impl PlotStyle {
    /// Sets the figure size in pixels
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Sets the grid opacity, clamped to [0, 1]
    pub fn grid_alpha(mut self, alpha: f64) -> Self {
        self.grid_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Sets the stroke width of the shell lines
    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width.max(1);
        self
    }
}
