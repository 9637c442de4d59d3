//! Rebinning by merge factor or target bin count
//!
//! Two optional maps drive a rebin: `factors` (axis → merge factor) and
//! `new_bins` (axis → desired final bin count). Target counts are turned into
//! factors first and overwrite any factor given for the same axis.
//!
//! Target counts are validated here; explicit factors are not. A factor that
//! does not divide its axis is reported by [`Histogram::select`] when the
//! merge is performed.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use histkit_nd::{rebin, Axis, Histogram};
//!
//! let mut hist = Histogram::new(vec![Axis::regular(8, 0.0, 8.0).unwrap()]).unwrap();
//! for x in 0..8 {
//!     hist.fill(&[x as f64 + 0.5]).unwrap();
//! }
//!
//! let new_bins = BTreeMap::from([(0, 2)]);
//! let coarse = rebin(&hist, None, Some(&new_bins)).unwrap();
//! assert_eq!(coarse.shape(), vec![2]);
//! assert_eq!(coarse.values().iter().copied().collect::<Vec<_>>(), vec![4.0, 4.0]);
//! ```

use std::collections::BTreeMap;

use histkit_core::{Error, Result};
use tracing::{debug, instrument};

use crate::histogram::Histogram;
use crate::select::{AxisSelector, Slicer};

/// Requested rebinning of one or more axes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebinSpec {
    factors: BTreeMap<usize, usize>,
    new_bins: BTreeMap<usize, usize>,
}

impl RebinSpec {
    /// No merges requested; applying it returns the histogram unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the request from the two optional maps
    pub fn from_maps(
        factors: Option<&BTreeMap<usize, usize>>,
        new_bins: Option<&BTreeMap<usize, usize>>,
    ) -> Self {
        Self {
            factors: factors.cloned().unwrap_or_default(),
            new_bins: new_bins.cloned().unwrap_or_default(),
        }
    }

    /// Merge every `factor` bins of `axis`
    pub fn factor(mut self, axis: usize, factor: usize) -> Self {
        self.factors.insert(axis, factor);
        self
    }

    /// Rebin `axis` down to `bins` bins
    ///
    /// Takes precedence over any [`RebinSpec::factor`] for the same axis.
    pub fn target_bins(mut self, axis: usize, bins: usize) -> Self {
        self.new_bins.insert(axis, bins);
        self
    }

    /// Effective axis → merge factor map for `hist`
    pub fn resolve(&self, hist: &Histogram) -> Result<BTreeMap<usize, usize>> {
        let mut factors = self.factors.clone();

        for (&axis, &target) in &self.new_bins {
            let bins = hist.axis(axis)?.size();
            if target == 0 || bins % target != 0 {
                return Err(Error::InvalidRebinTarget { axis, bins, target });
            }
            let factor = bins / target;
            if let Some(previous) = factors.insert(axis, factor) {
                if previous != factor {
                    debug!(axis, previous, factor, "new_bins overrides explicit factor");
                }
            }
        }

        Ok(factors)
    }

    /// Slicer merging every resolved axis, identity elsewhere
    pub fn slicer(&self, hist: &Histogram) -> Result<Slicer> {
        let mut slicer = Slicer::new(hist.ndim());
        for (axis, factor) in self.resolve(hist)? {
            slicer.set(axis, AxisSelector::MergeFactor(factor))?;
        }
        Ok(slicer)
    }

    /// Rebin `hist`, returning a new histogram
    #[instrument(skip(self, hist), fields(ndim = hist.ndim()))]
    pub fn apply(&self, hist: &Histogram) -> Result<Histogram> {
        let slicer = self.slicer(hist)?;
        let rebinned = hist.select(&slicer)?;
        debug!(from = ?hist.shape(), to = ?rebinned.shape(), "rebinned histogram");
        Ok(rebinned)
    }
}

/// Rebin several axes of `hist` at once
///
/// `factors` maps an axis to a merge factor, `new_bins` maps an axis to the
/// bin count it should end up with. When both name the same axis the factor
/// derived from `new_bins` wins. With neither map the histogram is returned
/// unchanged.
pub fn rebin(
    hist: &Histogram,
    factors: Option<&BTreeMap<usize, usize>>,
    new_bins: Option<&BTreeMap<usize, usize>>,
) -> Result<Histogram> {
    RebinSpec::from_maps(factors, new_bins).apply(hist)
}

/// Number of bins on `axis`
pub fn number_of_bins(hist: &Histogram, axis: usize) -> Result<usize> {
    Ok(hist.axis(axis)?.size())
}
