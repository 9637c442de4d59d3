//! Shell projections and rebinning for multi-dimensional histograms
//!
//! This crate re-exports the histkit workspace:
//!
//! - [`nd`]: the N-dimensional histogram, its axes, per-axis selection and
//!   rebinning by merge factor or target bin count
//! - [`shells`]: slicing one axis into coordinate shells and drawing each
//!   shell's projection as an overlaid step plot
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use histkit::{rebin, Axis, Histogram, ShellProjector};
//!
//! let mut hist = Histogram::new(vec![
//!     Axis::regular(10, 0.0, 10.0).unwrap(),
//!     Axis::regular(8, 0.0, 4.0).unwrap(),
//! ])
//! .unwrap();
//! hist.fill(&[1.0, 0.2]).unwrap();
//! hist.fill(&[8.0, 3.9]).unwrap();
//!
//! let coarse = rebin(&hist, None, Some(&BTreeMap::from([(1, 4)]))).unwrap();
//! assert_eq!(coarse.shape(), vec![10, 4]);
//!
//! let projection = ShellProjector::new(0, 1).range(0.0, 10.0, 5.0).project(&coarse).unwrap();
//! assert_eq!(projection.shells[0].counts, vec![1.0, 0.0, 0.0, 0.0]);
//! assert_eq!(projection.shells[1].counts, vec![0.0, 0.0, 0.0, 1.0]);
//! ```

pub use histkit_core::{Error, Result};
pub use histkit_nd as nd;
pub use histkit_shells as shells;

pub use histkit_nd::{number_of_bins, rebin, Axis, AxisSelector, Histogram, RebinSpec, Slicer};
pub use histkit_shells::{
    shell_ranges, NullShellRenderer, PlotLabels, PlotStyle, ShellProjection, ShellProjector,
    ShellRenderer,
};

#[cfg(feature = "plotting")]
pub use histkit_shells::{project_shells, SvgShellRenderer};
