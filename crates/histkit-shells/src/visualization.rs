//! Rendering interface for shell projections
//!
//! The projector hands every computed [`ShellProjection`] to a
//! [`ShellRenderer`]. Use [`NullShellRenderer`] when only the numbers are
//! wanted.

use histkit_core::Result;

use crate::config::PlotLabels;
use crate::shells::ShellProjection;

/// Trait for drawing one figure of overlaid shell step lines
pub trait ShellRenderer {
    /// Draw every shell of `projection` on a fresh figure
    fn render(&self, projection: &ShellProjection, labels: &PlotLabels) -> Result<()>;

    /// Check if this renderer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullShellRenderer;

impl ShellRenderer for NullShellRenderer {
    fn render(&self, _projection: &ShellProjection, _labels: &PlotLabels) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

impl<R: ShellRenderer + ?Sized> ShellRenderer for &R {
    fn render(&self, projection: &ShellProjection, labels: &PlotLabels) -> Result<()> {
        (**self).render(projection, labels)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Vertices of a mid-step line through `(xs[i], ys[i])`
///
/// Each value is held across a horizontal run centred on its x position;
/// the vertical jumps sit halfway between neighbouring x values. The first
/// and last runs stop at the first and last x.
pub fn step_mid_path(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return Vec::new();
    }

    let mut path = Vec::with_capacity(2 * n);
    path.push((xs[0], ys[0]));
    for i in 1..n {
        let mid = 0.5 * (xs[i - 1] + xs[i]);
        path.push((mid, ys[i - 1]));
        path.push((mid, ys[i]));
    }
    path.push((xs[n - 1], ys[n - 1]));
    path
}

/// Axis limits enclosing every shell line, `((x_lo, x_hi), (y_lo, y_hi))`
///
/// The x range spans the binned axis edges. The y range always includes
/// zero and leaves 5% headroom above the largest value.
pub fn plot_bounds(projection: &ShellProjection) -> ((f64, f64), (f64, f64)) {
    let x_lo = projection.edges.first().copied().unwrap_or(0.0);
    let mut x_hi = projection.edges.last().copied().unwrap_or(1.0);
    if x_hi <= x_lo {
        x_hi = x_lo + 1.0;
    }

    let (mut y_lo, mut y_hi) = (0.0_f64, 0.0_f64);
    for value in projection
        .shells
        .iter()
        .flat_map(|s| s.counts.iter().copied())
        .filter(|v| v.is_finite())
    {
        y_lo = y_lo.min(value);
        y_hi = y_hi.max(value);
    }
    let span = y_hi - y_lo;
    if span > 0.0 {
        y_hi += 0.05 * span;
    } else {
        y_hi = y_lo + 1.0;
    }

    ((x_lo, x_hi), (y_lo, y_hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shells::ShellSeries;

    #[test]
    fn test_step_mid_path() {
        let path = step_mid_path(&[0.5, 1.5, 2.5], &[1.0, 3.0, 2.0]);
        assert_eq!(
            path,
            vec![
                (0.5, 1.0),
                (1.0, 1.0),
                (1.0, 3.0),
                (2.0, 3.0),
                (2.0, 2.0),
                (2.5, 2.0),
            ]
        );
    }

    #[test]
    fn test_step_mid_path_degenerate() {
        assert!(step_mid_path(&[], &[]).is_empty());
        assert_eq!(step_mid_path(&[1.0], &[4.0]), vec![(1.0, 4.0), (1.0, 4.0)]);
        // Extra x values without a y are ignored
        assert_eq!(step_mid_path(&[1.0, 2.0], &[4.0]).len(), 2);
    }

    #[test]
    fn test_plot_bounds() {
        let projection = ShellProjection {
            edges: vec![0.0, 1.0, 2.0],
            centers: vec![0.5, 1.5],
            shells: vec![ShellSeries::new(0.0, 1.0, vec![2.0, 10.0])],
        };
        let ((x_lo, x_hi), (y_lo, y_hi)) = plot_bounds(&projection);
        assert_eq!((x_lo, x_hi), (0.0, 2.0));
        assert_eq!(y_lo, 0.0);
        assert!((y_hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_plot_bounds_without_shells() {
        let projection = ShellProjection {
            edges: vec![0.0, 1.0],
            centers: vec![0.5],
            shells: vec![],
        };
        assert_eq!(plot_bounds(&projection), ((0.0, 1.0), (0.0, 1.0)));
    }

    #[test]
    fn test_null_renderer() {
        let projection = ShellProjection {
            edges: vec![0.0, 1.0],
            centers: vec![0.5],
            shells: vec![],
        };
        let renderer = NullShellRenderer;
        assert!(!renderer.is_enabled());
        assert!(renderer.render(&projection, &PlotLabels::default()).is_ok());
        assert!(!(&renderer).is_enabled());
    }
}
