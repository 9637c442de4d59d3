//! Shell-by-shell projections of multi-dimensional histograms
//!
//! Given a histogram with at least two axes, this crate slices one axis (the
//! *shell* axis) into consecutive coordinate ranges, sums each slice onto a
//! second axis (the *binned* axis) and overlays the resulting 1D
//! distributions as step lines on a single figure.
//!
//! # Examples
//!
//! ## Computing shells without plotting
//!
//! ```rust
//! use histkit_nd::{Axis, Histogram};
//! use histkit_shells::{shell_ranges, ShellProjector};
//!
//! assert_eq!(
//!     shell_ranges(0.0, 10.0, 2.5).unwrap(),
//!     vec![(0.0, 2.5), (2.5, 5.0), (5.0, 7.5), (7.5, 10.0)]
//! );
//!
//! let hist = Histogram::new(vec![
//!     Axis::regular(20, 0.0, 10.0).unwrap(),
//!     Axis::regular(8, 0.0, 4.0).unwrap(),
//! ])
//! .unwrap();
//! let projection = ShellProjector::new(0, 1).range(0.0, 10.0, 2.5).project(&hist).unwrap();
//! assert_eq!(projection.len(), 4);
//! assert_eq!(projection.centers.len(), 8);
//! ```
//!
//! ## Rendering to SVG
//!
//! ```rust,no_run
//! # #[cfg(feature = "plotting")]
//! # {
//! use histkit_nd::{Axis, Histogram};
//! use histkit_shells::{PlotLabels, ShellProjector, SvgShellRenderer};
//!
//! let hist = Histogram::new(vec![
//!     Axis::regular(20, 0.0, 10.0).unwrap(),
//!     Axis::regular(8, 0.0, 4.0).unwrap(),
//! ])
//! .unwrap();
//!
//! ShellProjector::new(0, 1)
//!     .range(0.0, 10.0, 2.5)
//!     .labels(PlotLabels::new("energy", "counts", "Energy by radial shell"))
//!     .renderer(SvgShellRenderer::new("shells.svg"))
//!     .render(&hist)
//!     .unwrap();
//! # }
//! ```

pub mod config;
pub mod shells;
#[cfg(feature = "plotting")]
pub mod svg;
pub mod visualization;

pub use config::{PlotLabels, PlotStyle};
pub use shells::{
    bin_centers, shell_label, shell_ranges, ShellProjection, ShellProjector, ShellSeries,
    MAX_SHELLS,
};
pub use visualization::{step_mid_path, NullShellRenderer, ShellRenderer};

#[cfg(feature = "plotting")]
pub use shells::project_shells;
#[cfg(feature = "plotting")]
pub use svg::SvgShellRenderer;

pub use histkit_core::{Error, Result};

/// File name prefix used by [`project_shells`] inside the system temp directory
#[cfg(feature = "plotting")]
pub const DEFAULT_FIGURE_NAME: &str = "histkit-shells";

/// Where [`project_shells`] writes its figure
///
/// The file name carries the process id, so concurrent processes never share
/// a figure. Within one process every call returns the same path.
#[cfg(feature = "plotting")]
pub fn default_output_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{DEFAULT_FIGURE_NAME}-{}.svg", std::process::id()))
}
