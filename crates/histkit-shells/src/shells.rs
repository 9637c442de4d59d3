//! Shell slicing and projection
//!
//! A shell is a half-open coordinate interval `[lo, hi)` on one axis of a
//! histogram. Slicing the histogram to each shell in turn and summing away
//! every axis but the binned one gives a family of 1D distributions, one per
//! shell.

use histkit_core::{Error, Result};
use histkit_nd::{AxisSelector, Histogram, Slicer};
use tracing::{debug, instrument};

use crate::config::PlotLabels;
use crate::visualization::{NullShellRenderer, ShellRenderer};

/// Upper bound on the number of shells a single range may produce
pub const MAX_SHELLS: usize = 1 << 20;

/// Shell boundaries `(lo, lo + step)` for `lo` stepping from `min` while `lo < max`
///
/// The number of shells is `ceil((max - min) / step)`, so the last shell may
/// reach past `max`. An empty or inverted range yields no shells. `step`
/// must be positive and finite, and the range may hold at most
/// [`MAX_SHELLS`] shells.
pub fn shell_ranges(min: f64, max: f64, step: f64) -> Result<Vec<(f64, f64)>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "shell_step must be positive and finite, got {step}"
        )));
    }
    if !min.is_finite() {
        return Err(Error::non_finite("shell_min"));
    }
    if !max.is_finite() {
        return Err(Error::non_finite("shell_max"));
    }
    if min >= max {
        return Ok(Vec::new());
    }

    let span = max - min;
    if !span.is_finite() {
        return Err(Error::non_finite("shell range"));
    }
    let count = (span / step).ceil();
    if count > MAX_SHELLS as f64 {
        return Err(Error::InvalidParameter(format!(
            "shell range [{min}, {max}) with step {step} exceeds {MAX_SHELLS} shells"
        )));
    }
    let count = count as usize;
    Ok((0..count)
        .map(|i| {
            let lo = min + i as f64 * step;
            (lo, lo + step)
        })
        .collect())
}

/// Midpoints of consecutive bin edges
pub fn bin_centers(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
}

/// Legend text of a shell, e.g. `0.0–2.5`
///
/// Bounds use Rust's `Debug` float text: whole numbers keep a trailing `.0`,
/// and exponent forms carry no sign or zero padding (`1e16`, `1e-7`).
pub fn shell_label(lo: f64, hi: f64) -> String {
    format!("{lo:?}–{hi:?}")
}

/// Summed distribution of one shell
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSeries {
    /// Inclusive lower coordinate of the shell
    pub lo: f64,
    /// Exclusive upper coordinate of the shell
    pub hi: f64,
    /// Legend label
    pub label: String,
    /// One summed value per bin of the binned axis
    pub counts: Vec<f64>,
}

impl ShellSeries {
    /// Series for the shell `[lo, hi)` labelled with [`shell_label`]
    pub fn new(lo: f64, hi: f64, counts: Vec<f64>) -> Self {
        Self {
            lo,
            hi,
            label: shell_label(lo, hi),
            counts,
        }
    }

    /// Sum over all binned-axis bins
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }
}

/// Every shell of one projection, sharing the binned axis
#[derive(Debug, Clone, PartialEq)]
pub struct ShellProjection {
    /// Edges of the binned axis
    pub edges: Vec<f64>,
    /// Bin centers of the binned axis
    pub centers: Vec<f64>,
    /// Shells in generation order
    pub shells: Vec<ShellSeries>,
}

impl ShellProjection {
    /// Number of shells
    pub fn len(&self) -> usize {
        self.shells.len()
    }

    /// True when the range produced no shells
    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }
}

/// Slices a histogram into shells along one axis and projects each onto another
///
/// ```rust
/// use histkit_nd::{Axis, Histogram};
/// use histkit_shells::ShellProjector;
///
/// let mut hist = Histogram::new(vec![
///     Axis::regular(10, 0.0, 10.0).unwrap(),
///     Axis::regular(5, 0.0, 5.0).unwrap(),
/// ])
/// .unwrap();
/// hist.fill(&[1.0, 2.5]).unwrap();
/// hist.fill(&[6.0, 0.5]).unwrap();
///
/// let projection = ShellProjector::new(0, 1)
///     .range(0.0, 10.0, 5.0)
///     .project(&hist)
///     .unwrap();
/// assert_eq!(projection.len(), 2);
/// assert_eq!(projection.shells[0].counts, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
/// assert_eq!(projection.shells[1].label, "5.0–10.0");
/// ```
#[derive(Debug, Clone)]
pub struct ShellProjector<R = NullShellRenderer> {
    shell_axis: usize,
    binned_axis: usize,
    shell_min: f64,
    shell_max: f64,
    shell_step: f64,
    labels: PlotLabels,
    renderer: R,
}

impl ShellProjector<NullShellRenderer> {
    /// Creates a projector slicing `shell_axis` and keeping `binned_axis`
    ///
    /// Until [`ShellProjector::range`] is called the shell range is empty.
    pub fn new(shell_axis: usize, binned_axis: usize) -> Self {
        Self {
            shell_axis,
            binned_axis,
            shell_min: 0.0,
            shell_max: 0.0,
            shell_step: 1.0,
            labels: PlotLabels::default(),
            renderer: NullShellRenderer,
        }
    }
}

impl<R: ShellRenderer> ShellProjector<R> {
    /// Sets the shell range `[min, max)` and the shell width
    pub fn range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.shell_min = min;
        self.shell_max = max;
        self.shell_step = step;
        self
    }

    /// Sets the figure labels
    pub fn labels(mut self, labels: PlotLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Replaces the renderer
    pub fn renderer<R2: ShellRenderer>(self, renderer: R2) -> ShellProjector<R2> {
        ShellProjector {
            shell_axis: self.shell_axis,
            binned_axis: self.binned_axis,
            shell_min: self.shell_min,
            shell_max: self.shell_max,
            shell_step: self.shell_step,
            labels: self.labels,
            renderer,
        }
    }

    /// Shell boundaries this projector will use
    pub fn shells(&self) -> Result<Vec<(f64, f64)>> {
        shell_ranges(self.shell_min, self.shell_max, self.shell_step)
    }

    /// Computes every shell's summed distribution without rendering
    #[instrument(skip(self, hist), fields(shell_axis = self.shell_axis, binned_axis = self.binned_axis))]
    pub fn project(&self, hist: &Histogram) -> Result<ShellProjection> {
        if hist.ndim() < 2 {
            return Err(Error::InvalidInput(format!(
                "shell projection needs at least 2 axes, histogram has {}",
                hist.ndim()
            )));
        }
        hist.axis(self.shell_axis)?;
        let binned = hist.axis(self.binned_axis)?;
        if self.shell_axis == self.binned_axis {
            return Err(Error::InvalidParameter(format!(
                "shell axis and binned axis must differ, both are {}",
                self.shell_axis
            )));
        }

        let ranges = self.shells()?;
        debug!(shells = ranges.len(), "generated shell ranges");

        let mut shells = Vec::with_capacity(ranges.len());
        for (lo, hi) in ranges {
            let slicer = Slicer::new(hist.ndim())
                .with(self.shell_axis, AxisSelector::CoordinateRange { lo, hi })?;
            let counts = hist.select(&slicer)?.collapse_onto(self.binned_axis)?;
            let series = ShellSeries::new(lo, hi, counts);
            debug!(lo, hi, total = series.total(), "projected shell");
            shells.push(series);
        }

        Ok(ShellProjection {
            edges: binned.edges().to_vec(),
            centers: binned.centers(),
            shells,
        })
    }

    /// Computes the shells and hands them to the renderer
    pub fn render(&self, hist: &Histogram) -> Result<ShellProjection> {
        let projection = self.project(hist)?;
        if self.renderer.is_enabled() {
            self.renderer.render(&projection, &self.labels)?;
        }
        Ok(projection)
    }
}

/// Render one figure with a step line per shell of `hist`
///
/// Slices `shell_axis` into shells `[lo, lo + shell_step)` for `lo` from
/// `shell_min` below `shell_max`, sums each slice onto `binned_axis` and draws
/// the results against the binned-axis bin centers. The figure is written as
/// SVG to [`crate::default_output_path`]. That path is fixed per process, so
/// each call replaces the previous call's figure; use [`ShellProjector`] with
/// an [`SvgShellRenderer`](crate::SvgShellRenderer) to keep several figures.
#[cfg(feature = "plotting")]
#[allow(clippy::too_many_arguments)]
pub fn project_shells(
    hist: &Histogram,
    shell_axis: usize,
    binned_axis: usize,
    shell_min: f64,
    shell_max: f64,
    shell_step: f64,
    xlabel: &str,
    ylabel: &str,
    title: &str,
) -> Result<()> {
    let renderer = crate::svg::SvgShellRenderer::new(crate::default_output_path());
    ShellProjector::new(shell_axis, binned_axis)
        .range(shell_min, shell_max, shell_step)
        .labels(PlotLabels::new(xlabel, ylabel, title))
        .renderer(renderer)
        .render(hist)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use histkit_nd::Axis;
    use ndarray::arr2;
    use std::cell::RefCell;

    fn grid() -> Histogram {
        // shell axis: 4 bins over [0, 4); binned axis: 3 bins over [0, 3)
        let axes = vec![
            Axis::regular(4, 0.0, 4.0).unwrap(),
            Axis::regular(3, 0.0, 3.0).unwrap(),
        ];
        let values = arr2(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
            [10.0, 11.0, 12.0],
        ])
        .into_dyn();
        Histogram::from_values(axes, values).unwrap()
    }

    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<(usize, String)>>,
    }

    impl ShellRenderer for Recording {
        fn render(&self, projection: &ShellProjection, labels: &PlotLabels) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((projection.len(), labels.title.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_shell_ranges_exclusive_upper_bound() {
        let shells = shell_ranges(0.0, 10.0, 2.5).unwrap();
        assert_eq!(shells, vec![(0.0, 2.5), (2.5, 5.0), (5.0, 7.5), (7.5, 10.0)]);
    }

    #[test]
    fn test_shell_ranges_partial_last_shell() {
        let shells = shell_ranges(0.0, 10.0, 3.0).unwrap();
        assert_eq!(shells.len(), 4);
        assert_eq!(shells[3], (9.0, 12.0));
    }

    #[test]
    fn test_shell_ranges_degenerate() {
        assert!(shell_ranges(5.0, 5.0, 1.0).unwrap().is_empty());
        assert!(shell_ranges(6.0, 5.0, 1.0).unwrap().is_empty());
        assert!(shell_ranges(0.0, 1.0, 0.0).is_err());
        assert!(shell_ranges(0.0, 1.0, -1.0).is_err());
        assert!(shell_ranges(0.0, 1.0, f64::NAN).is_err());
        assert!(shell_ranges(f64::NEG_INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_shell_ranges_rejects_oversized_range() {
        let err = shell_ranges(-1e308, 1e308, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(err.to_string().contains("shell range must be finite"));

        let err = shell_ranges(0.0, 1e12, 1.0).unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        assert_eq!(shell_ranges(0.0, MAX_SHELLS as f64, 1.0).unwrap().len(), MAX_SHELLS);
    }

    #[test]
    fn test_bin_centers() {
        assert_eq!(bin_centers(&[0.0, 1.0, 2.0, 3.0]), vec![0.5, 1.5, 2.5]);
        assert!(bin_centers(&[1.0]).is_empty());
    }

    #[test]
    fn test_shell_label() {
        assert_eq!(shell_label(0.0, 2.5), "0.0–2.5");
        assert_eq!(shell_label(7.5, 10.0), "7.5–10.0");
        assert_eq!(shell_label(1e16, 1e-7), "1e16–1e-7");
    }

    #[test]
    fn test_project_sums_shell_axis() {
        let projection = ShellProjector::new(0, 1)
            .range(0.0, 4.0, 2.0)
            .project(&grid())
            .unwrap();
        assert_eq!(projection.centers, vec![0.5, 1.5, 2.5]);
        assert_eq!(projection.shells[0].counts, vec![5.0, 7.0, 9.0]);
        assert_eq!(projection.shells[1].counts, vec![17.0, 19.0, 21.0]);
    }

    #[test]
    fn test_project_transposed_axes() {
        let projection = ShellProjector::new(1, 0)
            .range(1.0, 3.0, 1.0)
            .project(&grid())
            .unwrap();
        assert_eq!(projection.centers, vec![0.5, 1.5, 2.5, 3.5]);
        assert_eq!(projection.shells[0].counts, vec![2.0, 5.0, 8.0, 11.0]);
        assert_eq!(projection.shells[1].counts, vec![3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_shell_outside_domain_is_flat_zero() {
        let projection = ShellProjector::new(0, 1)
            .range(10.0, 12.0, 1.0)
            .project(&grid())
            .unwrap();
        assert_eq!(projection.len(), 2);
        for shell in &projection.shells {
            assert_eq!(shell.counts, vec![0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_empty_range_gives_no_shells() {
        let projection = ShellProjector::new(0, 1)
            .range(3.0, 1.0, 1.0)
            .project(&grid())
            .unwrap();
        assert!(projection.is_empty());
        assert_eq!(projection.centers.len(), 3);
    }

    #[test]
    fn test_invalid_configurations() {
        let hist = grid();
        assert!(matches!(
            ShellProjector::new(1, 1).range(0.0, 1.0, 1.0).project(&hist),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            ShellProjector::new(0, 2).range(0.0, 1.0, 1.0).project(&hist),
            Err(Error::AxisOutOfRange { axis: 2, ndim: 2 })
        ));
        assert!(ShellProjector::new(0, 1)
            .range(0.0, 1.0, 0.0)
            .project(&hist)
            .is_err());

        let flat = Histogram::new(vec![Axis::regular(3, 0.0, 1.0).unwrap()]).unwrap();
        assert!(matches!(
            ShellProjector::new(0, 1).project(&flat),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_render_calls_renderer_once() {
        let recording = Recording::default();
        let projection = ShellProjector::new(0, 1)
            .range(0.0, 4.0, 1.0)
            .labels(PlotLabels::new("x", "y", "shells"))
            .renderer(&recording)
            .render(&grid())
            .unwrap();
        assert_eq!(projection.len(), 4);
        assert_eq!(*recording.calls.borrow(), vec![(4, "shells".to_string())]);
    }

    #[test]
    fn test_render_skips_on_projection_error() {
        let recording = Recording::default();
        let result = ShellProjector::new(0, 0)
            .range(0.0, 4.0, 1.0)
            .renderer(&recording)
            .render(&grid());
        assert!(result.is_err());
        assert!(recording.calls.borrow().is_empty());
    }
}
