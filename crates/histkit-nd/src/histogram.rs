//! Dense N-dimensional histogram storage

use std::fmt;

use histkit_core::{Error, Result};
use ndarray::{ArrayD, ArrayViewD, Axis as NdAxis, IxDyn, Slice};
use tracing::{debug, instrument, trace};

use crate::axis::Axis;
use crate::select::{AxisSelector, Slicer};

/// An N-dimensional histogram with one dense value per bin
///
/// Entries whose coordinates fall outside an axis are not stored in the value
/// array; their weight is tallied in [`Histogram::flow`]. Selecting a
/// coordinate sub-range moves the cropped weight into the flow tally as well,
/// so `sum() + flow()` is preserved by every selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    axes: Vec<Axis>,
    values: ArrayD<f64>,
    flow: f64,
}

impl Histogram {
    /// Create an empty (zero-filled) histogram over `axes`
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidInput(
                "histogram needs at least one axis".to_string(),
            ));
        }
        let shape = shape_of(&axes);
        Ok(Self {
            values: ArrayD::zeros(IxDyn(&shape)),
            axes,
            flow: 0.0,
        })
    }

    /// Create a histogram from pre-computed bin values
    pub fn from_values(axes: Vec<Axis>, values: ArrayD<f64>) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidInput(
                "histogram needs at least one axis".to_string(),
            ));
        }
        let expected = shape_of(&axes);
        if values.shape() != expected.as_slice() {
            return Err(Error::ShapeMismatch {
                expected,
                actual: values.shape().to_vec(),
            });
        }
        Ok(Self {
            axes,
            values,
            flow: 0.0,
        })
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// All axes in order
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis `i`, or an out-of-range error
    pub fn axis(&self, i: usize) -> Result<&Axis> {
        self.axes.get(i).ok_or(Error::AxisOutOfRange {
            axis: i,
            ndim: self.ndim(),
        })
    }

    /// Bin count of every axis
    pub fn shape(&self) -> Vec<usize> {
        shape_of(&self.axes)
    }

    /// Dense per-bin values, flow excluded
    pub fn values(&self) -> ArrayViewD<'_, f64> {
        self.values.view()
    }

    /// Consume the histogram, returning its value array
    pub fn into_values(self) -> ArrayD<f64> {
        self.values
    }

    /// Total of all in-range values
    pub fn sum(&self) -> f64 {
        self.values.sum()
    }

    /// Weight that fell outside the axes or was cropped by a selection
    pub fn flow(&self) -> f64 {
        self.flow
    }

    /// Add one unit-weight entry at `coords`
    pub fn fill(&mut self, coords: &[f64]) -> Result<()> {
        self.fill_weighted(coords, 1.0)
    }

    /// Add one entry of weight `weight` at `coords`
    pub fn fill_weighted(&mut self, coords: &[f64], weight: f64) -> Result<()> {
        if coords.len() != self.ndim() {
            return Err(Error::size_mismatch(
                self.ndim(),
                coords.len(),
                "fill coordinates",
            ));
        }

        let mut index = Vec::with_capacity(coords.len());
        for (axis, &coord) in self.axes.iter().zip(coords) {
            let i = axis.index(coord);
            if i < 0 || i as usize >= axis.size() {
                self.flow += weight;
                return Ok(());
            }
            index.push(i as usize);
        }

        self.values[index.as_slice()] += weight;
        Ok(())
    }

    /// Apply a per-axis selection and return the resulting histogram
    ///
    /// Range selectors are applied first, then merges. The input is never
    /// modified.
    #[instrument(skip(self, slicer), fields(ndim = self.ndim()))]
    pub fn select(&self, slicer: &Slicer) -> Result<Histogram> {
        if slicer.ndim() != self.ndim() {
            return Err(Error::size_mismatch(
                self.ndim(),
                slicer.ndim(),
                "slicer axes",
            ));
        }

        let mut axes = self.axes.clone();
        let mut view = self.values.view();
        let mut cropped = false;

        for (k, selector) in slicer.selectors().iter().enumerate() {
            let axis = &self.axes[k];
            let (start, stop) = match *selector {
                AxisSelector::CoordinateRange { lo, hi } => (axis.locate(lo), axis.locate(hi)),
                AxisSelector::IndexRange { start, stop } => (start, stop),
                AxisSelector::KeepAll | AxisSelector::MergeFactor(_) => continue,
            };
            let start = start.min(axis.size());
            let stop = stop.clamp(start, axis.size());
            trace!(axis = k, start, stop, "slicing axis");

            view.slice_axis_inplace(NdAxis(k), Slice::from(start..stop));
            axes[k] = axis.sliced(start, stop);
            cropped = true;
        }

        let mut values = view.to_owned();
        let flow = if cropped {
            self.flow + (self.sum() - values.sum())
        } else {
            self.flow
        };

        for (k, selector) in slicer.selectors().iter().enumerate() {
            if let AxisSelector::MergeFactor(factor) = *selector {
                let bins = axes[k].size();
                let merged = axes[k].merged(factor).ok_or(Error::InvalidMergeFactor {
                    axis: k,
                    bins,
                    factor,
                })?;
                trace!(axis = k, bins, factor, "merging axis");
                values = merge_along(values, k, factor);
                axes[k] = merged;
            }
        }

        debug!(shape = ?shape_of(&axes), "selection complete");
        Ok(Histogram { axes, values, flow })
    }

    /// Keep only the listed axes, summing the values over all others
    ///
    /// The resulting axes follow the order of `keep`.
    pub fn project(&self, keep: &[usize]) -> Result<Histogram> {
        if keep.is_empty() {
            return Err(Error::InvalidParameter(
                "projection must keep at least one axis".to_string(),
            ));
        }
        for (n, &axis) in keep.iter().enumerate() {
            self.axis(axis)?;
            if keep[..n].contains(&axis) {
                return Err(Error::InvalidParameter(format!(
                    "axis {axis} listed twice in projection"
                )));
            }
        }

        let mut values = self.values.clone();
        // Highest index first so lower axis numbers stay valid
        for k in (0..self.ndim()).rev() {
            if !keep.contains(&k) {
                values = values.sum_axis(NdAxis(k));
            }
        }

        let mut ascending = keep.to_vec();
        ascending.sort_unstable();
        let permutation: Vec<usize> = keep
            .iter()
            .map(|axis| ascending.iter().position(|a| a == axis).unwrap_or(0))
            .collect();
        let values = values
            .permuted_axes(permutation)
            .as_standard_layout()
            .into_owned();

        let axes = keep.iter().map(|&k| self.axes[k].clone()).collect();
        Ok(Histogram {
            axes,
            values,
            flow: self.flow,
        })
    }

    /// Sum over every axis except `axis`, giving one value per bin of `axis`
    pub fn collapse_onto(&self, axis: usize) -> Result<Vec<f64>> {
        let projected = self.project(&[axis])?;
        Ok(projected.values.iter().copied().collect())
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} axes, shape={:?}, sum={:.3}, flow={:.3})",
            self.ndim(),
            self.shape(),
            self.sum(),
            self.flow
        )
    }
}

fn shape_of(axes: &[Axis]) -> Vec<usize> {
    axes.iter().map(Axis::size).collect()
}

/// Sum every `factor` consecutive entries along `axis`
fn merge_along(values: ArrayD<f64>, axis: usize, factor: usize) -> ArrayD<f64> {
    if factor == 1 {
        return values;
    }
    let mut shape = values.shape().to_vec();
    shape[axis] /= factor;

    let mut merged = ArrayD::zeros(IxDyn(&shape));
    for (j, chunk) in values.axis_chunks_iter(NdAxis(axis), factor).enumerate() {
        merged
            .index_axis_mut(NdAxis(axis), j)
            .assign(&chunk.sum_axis(NdAxis(axis)));
    }
    merged
}
