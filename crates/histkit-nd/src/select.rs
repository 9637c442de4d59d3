//! Per-axis selection descriptors

use histkit_core::{Error, Result};

/// How a single axis is treated when selecting from a histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSelector {
    /// Keep every bin
    KeepAll,
    /// Keep bins from `locate(lo)` up to but excluding `locate(hi)`
    CoordinateRange { lo: f64, hi: f64 },
    /// Keep bins `start..stop`, clamped to the axis
    IndexRange { start: usize, stop: usize },
    /// Merge every `n` consecutive bins into one
    MergeFactor(usize),
}

impl Default for AxisSelector {
    fn default() -> Self {
        Self::KeepAll
    }
}

impl AxisSelector {
    /// Whether this selector leaves its axis untouched
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::KeepAll | Self::MergeFactor(1))
    }
}

/// Ordered list of axis selectors, one per histogram axis
///
/// Every entry starts as [`AxisSelector::KeepAll`]; callers override the
/// axes they care about.
///
/// ```rust
/// use histkit_nd::{AxisSelector, Slicer};
///
/// let mut slicer = Slicer::new(2);
/// slicer.set(0, AxisSelector::CoordinateRange { lo: 1.0, hi: 3.0 }).unwrap();
/// assert_eq!(slicer.get(1), Some(&AxisSelector::KeepAll));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slicer {
    selectors: Vec<AxisSelector>,
}

impl Slicer {
    /// All-`KeepAll` slicer for a histogram with `ndim` axes
    pub fn new(ndim: usize) -> Self {
        Self {
            selectors: vec![AxisSelector::KeepAll; ndim],
        }
    }

    /// Number of axes covered
    pub fn ndim(&self) -> usize {
        self.selectors.len()
    }

    /// Replace the selector of `axis`
    pub fn set(&mut self, axis: usize, selector: AxisSelector) -> Result<&mut Self> {
        let ndim = self.ndim();
        let slot = self
            .selectors
            .get_mut(axis)
            .ok_or(Error::AxisOutOfRange { axis, ndim })?;
        *slot = selector;
        Ok(self)
    }

    /// Builder-style variant of [`Slicer::set`]
    pub fn with(mut self, axis: usize, selector: AxisSelector) -> Result<Self> {
        self.set(axis, selector)?;
        Ok(self)
    }

    /// Selector of `axis`
    pub fn get(&self, axis: usize) -> Option<&AxisSelector> {
        self.selectors.get(axis)
    }

    /// All selectors in axis order
    pub fn selectors(&self) -> &[AxisSelector] {
        &self.selectors
    }

    /// Whether applying this slicer is a no-op
    pub fn is_identity(&self) -> bool {
        self.selectors.iter().all(AxisSelector::is_identity)
    }
}
