//! N-dimensional binned histograms
//!
//! This crate provides the histogram abstraction the rest of histkit works
//! on: axes with bin edges and coordinate lookup, a dense value array, and a
//! per-axis selection mechanism that covers coordinate cropping and bin
//! merging. Rebinning by factor or by target bin count is built on top of it.
//!
//! # Examples
//!
//! ## Filling and selecting
//!
//! ```rust
//! use histkit_nd::{Axis, AxisSelector, Histogram, Slicer};
//!
//! let mut hist = Histogram::new(vec![
//!     Axis::regular(10, 0.0, 10.0).unwrap().with_label("radius"),
//!     Axis::regular(4, 0.0, 1.0).unwrap().with_label("energy"),
//! ])
//! .unwrap();
//! hist.fill(&[2.5, 0.1]).unwrap();
//! hist.fill(&[7.5, 0.9]).unwrap();
//!
//! // Keep radius in [2, 5), every energy bin
//! let slicer = Slicer::new(2)
//!     .with(0, AxisSelector::CoordinateRange { lo: 2.0, hi: 5.0 })
//!     .unwrap();
//! let inner = hist.select(&slicer).unwrap();
//! assert_eq!(inner.shape(), vec![3, 4]);
//! assert_eq!(inner.sum(), 1.0);
//! ```
//!
//! ## Rebinning
//!
//! ```rust
//! use histkit_nd::{Axis, Histogram, RebinSpec};
//!
//! let hist = Histogram::new(vec![
//!     Axis::regular(8, 0.0, 8.0).unwrap(),
//!     Axis::regular(6, 0.0, 6.0).unwrap(),
//! ])
//! .unwrap();
//!
//! let coarse = RebinSpec::new().factor(0, 2).target_bins(1, 3).apply(&hist).unwrap();
//! assert_eq!(coarse.shape(), vec![4, 3]);
//! ```

pub mod axis;
pub mod histogram;
pub mod rebin;
pub mod select;

pub use axis::Axis;
pub use histogram::Histogram;
pub use rebin::{number_of_bins, rebin, RebinSpec};
pub use select::{AxisSelector, Slicer};

pub use histkit_core::{Error, Result};
