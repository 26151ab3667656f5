//! Decoder performance benchmarks.
//!
//! Measures CSV/TSV decoding across different sizes and typing modes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glimpse::{Parser, ParserConfig};
use std::io::Write;

/// Generate synthetic TSV data with the specified number of rows and columns.
fn generate_tsv_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    for i in 0..cols {
        if i > 0 {
            data.push('\t');
        }
        data.push_str(&format!("column_{}", i + 1));
    }
    data.push('\n');

    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                data.push('\t');
            }
            // Mix of cell shapes
            match col % 5 {
                0 => data.push_str(&format!("ID_{:06}", row)),
                1 => data.push_str(&format!("{:.2}", row as f64 * 1.5)),
                2 => data.push_str(if row % 7 == 0 { "" } else { "42" }),
                3 => data.push_str(if row % 2 == 0 { "true" } else { "false" }),
                4 => data.push_str(&format!("Category_{}", row % 10)),
                _ => unreachable!(),
            }
        }
        data.push('\n');
    }

    data
}

/// Benchmark decoding TSV files of various sizes.
fn bench_parse_tsv_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tsv_file");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_tsv_data(*rows, 10);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let parser = Parser::new();
                    black_box(parser.parse_file(temp.path()).unwrap())
                },
            )
        });
    }

    group.finish();
}

/// Benchmark in-memory decoding with and without dynamic typing.
fn bench_parse_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_typing");

    let data = generate_tsv_data(10_000, 10).replace('\t', ",");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for dynamic_typing in [true, false] {
        let parser = Parser::with_config(ParserConfig {
            dynamic_typing,
            ..Default::default()
        });
        group.bench_with_input(
            BenchmarkId::new("dynamic_typing", dynamic_typing),
            &data,
            |b, data| b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark decoding with varying column counts.
fn bench_parse_column_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_column_scaling");

    let rows = 1_000;
    for cols in [5, 10, 20, 50].iter() {
        let data = generate_tsv_data(rows, *cols);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("cols", cols), &data, |b, data| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_tsv_file,
    bench_parse_typing,
    bench_parse_column_scaling,
);
criterion_main!(benches);
