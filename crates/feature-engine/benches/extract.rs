use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use feature_engine::FeatureExtractor;
use voltage_ingest::{sort_and_normalize, RawRow, VoltageSeries};

/// Synthetic sawtooth-plus-sine series, one reading per minute
fn synthetic_series(len: usize) -> VoltageSeries {
    let rows = (0..len)
        .map(|i| {
            let day = i / 1440;
            let minute = i % 1440;
            let timestamp = format!(
                "2024-01-{:02} {:02}:{:02}:00",
                day % 28 + 1,
                minute / 60,
                minute % 60
            );
            let value = 20.0 + 8.0 * (i as f64 * 0.05).sin() + (i % 17) as f64 * 0.3;
            RawRow::new(i + 1, timestamp, value)
        })
        .collect();
    sort_and_normalize(rows).expect("synthetic timestamps are valid")
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extract");
    let extractor = FeatureExtractor::new();

    for len in [1_000, 10_000, 40_000] {
        let series = synthetic_series(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &series, |b, series| {
            b.iter(|| extractor.extract(black_box(series)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
