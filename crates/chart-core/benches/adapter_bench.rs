use chart_core::{time_series_config, AxisLabels, TimeSeriesDataset, TimeSeriesEntry, TimeSeriesResponse};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize, datasets: usize) -> TimeSeriesResponse {
    let colors = ["green", "#7fff00", "yellow", "orange", "red"];
    let datasets = (0..datasets)
        .map(|d| TimeSeriesDataset {
            label: format!("series {d}"),
            color: Some("blue".to_string()),
            data_points: (0..n)
                .map(|i| {
                    // hourly stamps with a slow wave for values
                    let value = (i as f64 * 0.01).sin() * 10.0 + d as f64;
                    TimeSeriesEntry::new(format!("2024-01-01T00:00:00+00:00#{i}"), value, colors[i % colors.len()])
                })
                .collect(),
        })
        .collect();
    TimeSeriesResponse { datasets, labels: AxisLabels::new("Time", "kg CO2") }
}

fn bench_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_config");
    for &n in &[8_760usize, 35_040usize] {
        for &d in &[1usize, 4usize] {
            let input = gen_series(n, d);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_d{d}")), &input, |b, ts| {
                b.iter_batched(
                    || ts.clone(),
                    |ts| { let _ = black_box(time_series_config(&ts)); },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_time_series);
criterion_main!(benches);
