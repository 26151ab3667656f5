//! Full profiling pipeline benchmarks.
//!
//! Measures classification, statistics and chart aggregation on decoded rows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glimpse::{
    ChartAggregator, Parser, Profiler, RowSet, StatisticsComputer, TypeInferencer,
};

/// Generate a sales-like CSV with categorical, numeric and messy columns.
fn generate_sales_data(rows: usize) -> String {
    let regions = ["north", "south", "east", "west", ""];
    let products = ["widget", "gadget", "gizmo", "doohickey"];

    let mut data = String::from("region,product,units,price,discount,notes\n");
    for row in 0..rows {
        let units = if row % 40 == 0 {
            "n/a".to_string()
        } else {
            (row % 17).to_string()
        };
        data.push_str(&format!(
            "{},{},{},{:.2},{},{}\n",
            regions[row % regions.len()],
            products[row % products.len()],
            units,
            9.99 + (row % 13) as f64,
            if row % 3 == 0 { "" } else { "0.1" },
            if row % 5 == 0 { "late" } else { "" },
        ));
    }
    data
}

fn decode(data: &str) -> RowSet {
    Parser::new().parse_bytes(data.as_bytes()).unwrap()
}

/// Benchmark the full pipeline on decoded rows.
fn bench_full_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_profile");

    for rows in [100, 1_000, 10_000, 100_000].iter() {
        let table = decode(&generate_sales_data(*rows));

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            let profiler = Profiler::new();
            b.iter(|| black_box(profiler.profile(table)))
        });
    }

    group.finish();
}

/// Benchmark decode plus profile, as an upload would run.
fn bench_bytes_to_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_to_report");

    for rows in [1_000, 10_000].iter() {
        let data = generate_sales_data(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            let profiler = Profiler::new();
            b.iter(|| black_box(profiler.profile_csv_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark each stage separately at scale.
fn bench_component_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_scaling");
    group.sample_size(10);

    let table = decode(&generate_sales_data(100_000));
    let classification = TypeInferencer::new().classify(&table);

    group.bench_function("classify_100k_rows", |b| {
        let inferencer = TypeInferencer::new();
        b.iter(|| black_box(inferencer.classify(&table)))
    });

    group.bench_function("summarize_100k_rows", |b| {
        let statistics = StatisticsComputer::new();
        b.iter(|| black_box(statistics.summarize(&table, &classification)))
    });

    group.bench_function("charts_100k_rows", |b| {
        let charts = ChartAggregator::new();
        b.iter(|| black_box(charts.build_all(&table, &classification)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_profile,
    bench_bytes_to_report,
    bench_component_scaling,
);
criterion_main!(benches);
