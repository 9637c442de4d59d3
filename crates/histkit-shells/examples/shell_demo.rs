//! Fills a radius/energy histogram, rebins it and draws the energy spectrum per radial shell

use std::collections::BTreeMap;

use histkit_nd::{rebin, Axis, Histogram};
use histkit_shells::{PlotLabels, PlotStyle, ShellProjector, SvgShellRenderer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};
use tracing_subscriber::EnvFilter;

fn main() -> histkit_shells::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let radius = Uniform::new(0.0, 10.0);

    let mut hist = Histogram::new(vec![
        Axis::regular(40, 0.0, 10.0)?.with_label("radius"),
        Axis::regular(80, 0.0, 8.0)?.with_label("energy"),
    ])?;

    // Energy peak drifts outward with radius
    for _ in 0..50_000 {
        let r = radius.sample(&mut rng);
        let energy = Normal::new(2.0 + 0.4 * r, 0.6).map_err(anyhow::Error::from)?;
        hist.fill(&[r, energy.sample(&mut rng)])?;
    }
    println!("Filled: {hist}");

    // 80 energy bins down to 40
    let new_bins = BTreeMap::from([(1, 40)]);
    let coarse = rebin(&hist, None, Some(&new_bins))?;
    println!("Rebinned: {coarse}");

    let output = std::env::temp_dir().join("histkit-shell-demo.svg");
    let projection = ShellProjector::new(0, 1)
        .range(0.0, 10.0, 2.5)
        .labels(PlotLabels::new("energy", "counts", "Energy spectrum by radial shell"))
        .renderer(SvgShellRenderer::new(&output).with_style(PlotStyle::default().size(900, 500)))
        .render(&coarse)?;

    for shell in &projection.shells {
        println!("  shell {:>10}: {:>8.0} entries", shell.label, shell.total());
    }
    println!("Figure written to {}", output.display());
    Ok(())
}
