//! Criterion benchmarks for the flat INI codec.
//!
//! Both endpoints re-read and re-write the whole file on every request, so
//! parse and serialize latency sits directly on the request path.
//!
//! Run with:
//! ```bash
//! cargo bench --package heatctl-core --bench ini_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heatctl_core::config::{parse_ini, serialize_ini, ConfigMap};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// A realistic controller file: a handful of setpoints and schedule hours.
fn small_file() -> String {
    "day_temp = 21.5\n\
     night_temp = 17.0\n\
     away_temp = 15.0\n\
     start_hour = 6\n\
     stop_hour = 22\n"
        .to_string()
}

/// A synthetic file with `n` entries, for scaling measurements.
fn file_with_entries(n: usize) -> String {
    let mut text = String::new();
    for i in 0..n {
        text.push_str(&format!("key_{i} = value_{i}\n"));
    }
    text
}

fn map_with_entries(n: usize) -> ConfigMap {
    let mut map = ConfigMap::new();
    for i in 0..n {
        map.insert(format!("key_{i}"), format!("value_{i}"));
    }
    map
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_parse(c: &mut Criterion) {
    let small = small_file();
    c.bench_function("parse_small_file", |b| {
        b.iter(|| parse_ini(black_box(&small)).unwrap());
    });

    let mut group = c.benchmark_group("parse_scaling");
    for n in [10usize, 100, 1000] {
        let text = file_with_entries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| parse_ini(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let small = parse_ini(&small_file()).unwrap();
    c.bench_function("serialize_small_file", |b| {
        b.iter(|| serialize_ini(black_box(&small)));
    });

    let mut group = c.benchmark_group("serialize_scaling");
    for n in [10usize, 100, 1000] {
        let map = map_with_entries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, map| {
            b.iter(|| serialize_ini(black_box(map)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
