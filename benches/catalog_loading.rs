// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for startup content loading.
//!
//! Measures the performance of:
//! - Parsing and validating the embedded workout catalog
//! - Building the translation bundles
//! - Resolving route paths

use criterion::{criterion_group, criterion_main, Criterion};
use fitflow::app::Route;
use fitflow::catalog::Catalog;
use fitflow::config::Config;
use fitflow::i18n::fluent::I18n;
use std::hint::black_box;

/// Benchmark catalog parsing.
///
/// Covers TOML deserialization plus day/exercise validation.
fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_loading");

    group.bench_function("embedded_catalog", |b| {
        b.iter(|| {
            let catalog = Catalog::embedded().expect("embedded catalog");
            black_box(catalog.exercise_count());
        });
    });

    group.finish();
}

/// Benchmark translation bundle construction, done once per launch.
fn bench_i18n(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("i18n_bundles", |b| {
        b.iter(|| black_box(I18n::new(Some("en-US".to_string()), &config)));
    });
}

fn bench_routes(c: &mut Criterion) {
    let paths = ["/", "/workouts", "/push", "/pull/", "/legs", "/unknown"];
    c.bench_function("route_from_path", |b| {
        b.iter(|| {
            for path in paths {
                black_box(Route::from_path(black_box(path)));
            }
        });
    });
}

criterion_group!(benches, bench_catalog, bench_i18n, bench_routes);
criterion_main!(benches);
