//! SVG rendering of shell projections with plotters

use std::fs;
use std::path::{Path, PathBuf};

use histkit_core::{Error, Result};
use plotters::prelude::*;
use tracing::info;

use crate::config::{PlotLabels, PlotStyle};
use crate::shells::ShellProjection;
use crate::visualization::{plot_bounds, step_mid_path, ShellRenderer};

/// Writes each projection as an SVG figure
///
/// Every call to [`ShellRenderer::render`] creates a fresh figure and
/// overwrites the file at `path`.
#[derive(Debug, Clone)]
pub struct SvgShellRenderer {
    path: PathBuf,
    style: PlotStyle,
}

impl SvgShellRenderer {
    /// Renderer writing to `path` with the default [`PlotStyle`]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            style: PlotStyle::default(),
        }
    }

    /// Replaces the figure style
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Output file of every rendered figure
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current figure style
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }
}

impl ShellRenderer for SvgShellRenderer {
    fn render(&self, projection: &ShellProjection, labels: &PlotLabels) -> Result<()> {
        let style = &self.style;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let root = SVGBackend::new(&self.path, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE).map_err(Error::render)?;

        let ((x_lo, x_hi), (y_lo, y_hi)) = plot_bounds(projection);
        let mut chart = ChartBuilder::on(&root)
            .caption(&labels.title, ("sans-serif", style.caption_font_size))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(Error::render)?;

        chart
            .configure_mesh()
            .x_desc(labels.xlabel.as_str())
            .y_desc(labels.ylabel.as_str())
            .bold_line_style(BLACK.mix(style.grid_alpha).stroke_width(1))
            .light_line_style(BLACK.mix(style.grid_alpha * 0.3).stroke_width(1))
            .draw()
            .map_err(Error::render)?;

        for (i, shell) in projection.shells.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let path = step_mid_path(&projection.centers, &shell.counts);
            chart
                .draw_series(LineSeries::new(path, color.stroke_width(style.line_width)))
                .map_err(Error::render)?
                .label(shell.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        // No legend box without labelled series
        if !projection.is_empty() {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(Error::render)?;
        }

        root.present().map_err(Error::render)?;
        info!(path = %self.path.display(), shells = projection.len(), "rendered shell figure");
        Ok(())
    }
}
