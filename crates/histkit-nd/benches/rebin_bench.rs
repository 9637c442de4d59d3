//! Benchmarks for merging and cropping dense histograms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use histkit_nd::{Axis, AxisSelector, Histogram, RebinSpec, Slicer};
use ndarray::{ArrayD, IxDyn};

/// Square histogram with a smooth, deterministic fill
fn generate_histogram(bins: usize) -> Histogram {
    let axes = vec![
        Axis::regular(bins, 0.0, 1.0).unwrap(),
        Axis::regular(bins, 0.0, 1.0).unwrap(),
    ];
    let values = ArrayD::from_shape_fn(IxDyn(&[bins, bins]), |idx| {
        ((idx[0] * 7 + idx[1] * 3) as f64 * 0.01).sin().abs() * 100.0
    });
    Histogram::from_values(axes, values).unwrap()
}

fn bench_rebin(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebin");

    for &bins in &[64usize, 256, 1024] {
        let hist = generate_histogram(bins);
        for &factor in &[2usize, 8] {
            let spec = RebinSpec::new().factor(0, factor).factor(1, factor);
            group.bench_with_input(
                BenchmarkId::new(format!("factor_{factor}"), bins),
                &hist,
                |b, hist| b.iter(|| black_box(spec.apply(hist).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_coordinate_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_slice");

    for &bins in &[64usize, 256, 1024] {
        let hist = generate_histogram(bins);
        let slicer = Slicer::new(2)
            .with(0, AxisSelector::CoordinateRange { lo: 0.25, hi: 0.5 })
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(bins), &hist, |b, hist| {
            b.iter(|| black_box(hist.select(&slicer).unwrap().collapse_onto(1).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rebin, bench_coordinate_slice);
criterion_main!(benches);
