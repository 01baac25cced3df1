use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mesh::{Axis, Feature, Solid};

fn profile(n: usize) -> (Vec<f64>, Vec<f64>) {
    let lengths = vec![180.0 / n as f64; n];
    let heights = (0..n)
        .map(|i| 10.0 + 30.0 * (i as f64 / n as f64 * std::f64::consts::TAU).sin().abs())
        .collect();
    (lengths, heights)
}

fn feature_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Feature build");
    for n in [180, 1_000, 10_000] {
        let (lengths, heights) = profile(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(lengths, heights), |b, (l, h)| {
            b.iter(|| {
                Feature::builder()
                    .along(Axis::X)
                    .thickness(30.0)
                    .lengths(l.clone())
                    .heights(h.clone())
                    .build()
                    .unwrap()
            })
        });
    }
}

fn stl_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("STL serialize");
    for n in [180, 1_000] {
        let (lengths, heights) = profile(n);
        let hills = Feature::builder()
            .along(Axis::X)
            .thickness(30.0)
            .lengths(lengths)
            .heights(heights)
            .build()
            .unwrap();
        let mut solid = Solid::new("bench.stl");
        solid.add(hills);
        group.bench_with_input(BenchmarkId::from_parameter(n), &solid, |b, s| {
            b.iter(|| s.to_stl_string())
        });
    }
}

criterion_group!(benches, feature_build, stl_serialize);
criterion_main!(benches);
