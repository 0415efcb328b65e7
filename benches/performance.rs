//! Performance benchmarks for Vitrin.
//!
//! Run with: cargo bench
//!
//! Target performance:
//! - Grid filter over a 10k catalog: < 5ms
//! - Suggestions over a 10k catalog: < 50ms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use vitrin::services::{filter, highlight, pricing, suggest};
use vitrin::{CategoryRef, Product, ProductOption, SelectedOptions};

/// Build a catalog of `n` products with varied titles and categories.
fn sample_catalog(n: usize) -> Vec<Product> {
    let bases = [
        "Latte", "Mocha", "Espresso", "Green Tea", "Iced Tea", "Cold Brew", "Flat White",
        "Cappuccino", "Macchiato", "Chai",
    ];
    let categories = ["coffee", "tea", "merch"];

    (0..n)
        .map(|i| Product {
            id: format!("p{}", i),
            title: format!("{} No. {}", bases[i % bases.len()], i),
            description: None,
            image: None,
            price: 2.0 + (i % 7) as f64 * 0.5,
            in_stock: true,
            options: HashMap::new(),
            category: Some(CategoryRef {
                id: categories[i % categories.len()].to_string(),
                title: categories[i % categories.len()].to_string(),
            }),
        })
        .collect()
}

/// Benchmark grid filtering across catalog sizes.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100usize, 1_000, 10_000] {
        let catalog = sample_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter::filter(catalog, black_box("tea"), Some("tea"))))
        });
    }

    group.finish();
}

/// Benchmark suggestion ranking across catalog sizes.
fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for size in [100usize, 1_000, 10_000] {
        let catalog = sample_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(suggest::suggest(catalog, black_box("latte"), 5)))
        });
    }

    group.finish();
}

/// Benchmark highlight annotation over typical title lengths.
fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");

    let titles = [
        ("short", "Iced Tea"),
        ("medium", "Green Tea Sampler Box with Infuser"),
        (
            "long",
            "Limited Edition Single-Origin Green Tea Tasting Flight for the Tea Lover",
        ),
    ];

    for (name, title) in titles {
        group.bench_with_input(BenchmarkId::from_parameter(name), &title, |b, title| {
            b.iter(|| black_box(highlight::highlight(black_box(title), black_box("tea"))))
        });
    }

    group.finish();
}

/// Benchmark line-item pricing.
fn bench_pricing(c: &mut Criterion) {
    let selected: SelectedOptions = [
        ("size".to_string(), ProductOption::new(0.75)),
        ("milk".to_string(), ProductOption::new(0.5)),
        ("shot".to_string(), ProductOption::new(1.0)),
    ]
    .into_iter()
    .collect();

    c.bench_function("compute_price", |b| {
        b.iter(|| black_box(pricing::compute_price(black_box(4.0), &selected, black_box(3))))
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_suggest,
    bench_highlight,
    bench_pricing
);
criterion_main!(benches);
