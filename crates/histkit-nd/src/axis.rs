//! Binned axes with coordinate lookup

use std::fmt;

use histkit_core::{Error, Result};

/// One dimension of a histogram: an ordered sequence of bin edges
///
/// An axis with `n` bins stores `n + 1` strictly increasing edges. Bin `i`
/// covers the half-open interval `[edges[i], edges[i + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    edges: Vec<f64>,
    label: Option<String>,
}

impl Axis {
    /// Create an axis of `bins` equal-width bins over `[lo, hi)`
    pub fn regular(bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidParameter(
                "regular axis needs at least one bin".to_string(),
            ));
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::non_finite("axis bounds"));
        }
        if lo >= hi {
            return Err(Error::InvalidParameter(format!(
                "axis lower bound {lo} must be below upper bound {hi}"
            )));
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
        // Exact upper edge, no accumulated rounding
        edges.push(hi);

        Ok(Self { edges, label: None })
    }

    /// Create an axis from explicit bin edges
    pub fn variable(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "axis needs at least 2 edges, got {}",
                edges.len()
            )));
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::non_finite("axis edges"));
        }
        if edges.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::InvalidParameter(
                "axis edges must be strictly increasing".to_string(),
            ));
        }

        Ok(Self { edges, label: None })
    }

    /// Attach a human-readable label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label of the axis, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of bins
    pub fn size(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    /// Bin edges, `size() + 1` values
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Lowest edge
    pub fn lower(&self) -> f64 {
        self.edges[0]
    }

    /// Highest edge
    pub fn upper(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Bin centers, the midpoint of every pair of consecutive edges
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    /// Bin widths
    pub fn widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Edges of bin `i`
    pub fn bin(&self, i: usize) -> Option<(f64, f64)> {
        if i < self.size() {
            Some((self.edges[i], self.edges[i + 1]))
        } else {
            None
        }
    }

    /// Index of the bin containing `value`
    ///
    /// Returns `-1` below the first edge and `size()` at or above the last
    /// edge. NaN is treated as overflow.
    pub fn index(&self, value: f64) -> isize {
        if value.is_nan() {
            return self.size() as isize;
        }
        // Number of edges <= value, minus one, is the containing bin
        let at_or_below = self.edges.partition_point(|&e| e <= value);
        at_or_below as isize - 1
    }

    /// Position of `value` usable as a slice endpoint, clamped to `[0, size()]`
    pub fn locate(&self, value: f64) -> usize {
        self.index(value).clamp(0, self.size() as isize) as usize
    }

    /// Merge every `factor` consecutive bins
    ///
    /// Returns `None` if `factor` is zero or does not divide the bin count.
    pub fn merged(&self, factor: usize) -> Option<Self> {
        if factor == 0 || self.size() % factor != 0 {
            return None;
        }
        let edges = self.edges.iter().copied().step_by(factor).collect();
        Some(Self {
            edges,
            label: self.label.clone(),
        })
    }

    /// Sub-axis holding bins `start..stop`
    ///
    /// Bounds are clamped to the axis. An empty range keeps the single edge
    /// at `start`, giving a zero-bin axis.
    pub fn sliced(&self, start: usize, stop: usize) -> Self {
        let start = start.min(self.size());
        let stop = stop.clamp(start, self.size());
        Self {
            edges: self.edges[start..=stop].to_vec(),
            label: self.label.clone(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.label, self.size()) {
            (_, 0) => write!(f, "Axis(0 bins at {:.3})", self.lower()),
            (Some(label), n) => write!(
                f,
                "Axis({label}: {n} bins, [{:.3}, {:.3}))",
                self.lower(),
                self.upper()
            ),
            (None, n) => write!(f, "Axis({n} bins, [{:.3}, {:.3}))", self.lower(), self.upper()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_regular_axis() {
        let axis = Axis::regular(4, 0.0, 2.0).unwrap();
        assert_eq!(axis.size(), 4);
        assert_eq!(axis.edges(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(axis.lower(), 0.0);
        assert_eq!(axis.upper(), 2.0);
        assert_eq!(axis.bin(1), Some((0.5, 1.0)));
        assert_eq!(axis.bin(4), None);
        for w in axis.widths() {
            assert_relative_eq!(w, 0.5);
        }
    }

    #[test]
    fn test_centers() {
        let axis = Axis::variable(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(axis.centers(), vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_invalid_axes() {
        assert!(Axis::regular(0, 0.0, 1.0).is_err());
        assert!(Axis::regular(3, 1.0, 1.0).is_err());
        assert!(Axis::regular(3, 0.0, f64::INFINITY).is_err());
        assert!(Axis::variable(vec![1.0]).is_err());
        assert!(Axis::variable(vec![0.0, 2.0, 1.0]).is_err());
        assert!(Axis::variable(vec![0.0, 1.0, 1.0]).is_err());
        assert!(Axis::variable(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_index_and_locate() {
        let axis = Axis::regular(10, 0.0, 10.0).unwrap();
        assert_eq!(axis.index(-0.5), -1);
        assert_eq!(axis.index(0.0), 0);
        assert_eq!(axis.index(2.5), 2);
        // Interior edge belongs to the bin it opens
        assert_eq!(axis.index(5.0), 5);
        assert_eq!(axis.index(9.999), 9);
        assert_eq!(axis.index(10.0), 10);
        assert_eq!(axis.index(42.0), 10);
        assert_eq!(axis.index(f64::NAN), 10);

        assert_eq!(axis.locate(-3.0), 0);
        assert_eq!(axis.locate(2.5), 2);
        assert_eq!(axis.locate(100.0), 10);
    }

    #[test]
    fn test_merged() {
        let axis = Axis::regular(8, 0.0, 8.0).unwrap().with_label("r");
        let merged = axis.merged(2).unwrap();
        assert_eq!(merged.size(), 4);
        assert_eq!(merged.edges(), &[0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(merged.label(), Some("r"));

        assert!(axis.merged(3).is_none());
        assert!(axis.merged(0).is_none());
        assert_eq!(axis.merged(1).unwrap(), axis);
    }

    #[test]
    fn test_sliced() {
        let axis = Axis::regular(10, 0.0, 10.0).unwrap();
        let sub = axis.sliced(2, 5);
        assert_eq!(sub.size(), 3);
        assert_eq!(sub.edges(), &[2.0, 3.0, 4.0, 5.0]);

        let empty = axis.sliced(10, 10);
        assert_eq!(empty.size(), 0);
        assert!(empty.centers().is_empty());

        // Reversed range collapses to empty
        assert_eq!(axis.sliced(6, 3).size(), 0);
    }

    #[test]
    fn test_display() {
        let axis = Axis::regular(2, 0.0, 1.0).unwrap().with_label("energy");
        assert_eq!(axis.to_string(), "Axis(energy: 2 bins, [0.000, 1.000))");
    }
}
