//! # Moodtune Performance Benchmarks
//!
//! Benchmarks for the two hot paths: parsing the flat-file catalog and the
//! tiered matching in the recommender.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench parse
//! cargo bench recommend
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use moodtune::{catalog, recommend};
use std::fmt::Write;
use std::hint::black_box;

/// Build a synthetic catalog with `categories` blocks of `entries` songs,
/// each block tagged with one label.
fn build_catalog_text(categories: usize, entries: usize) -> String {
    let mut text = String::new();
    for c in 0..categories {
        writeln!(text, "mood{c}").unwrap();
        writeln!(text, "+ label{c}").unwrap();
        for e in 0..entries {
            writeln!(
                text,
                "~ Song {c}-{e} | Artist {c} | http://example.com/{c}/{e}"
            )
            .unwrap();
        }
        writeln!(text).unwrap();
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let text = build_catalog_text(50, 20);

    c.bench_function("parse_catalog_50x20", |b| {
        b.iter(|| catalog::parse(black_box(&text)).unwrap());
    });
}

fn benchmark_recommend_tiers(c: &mut Criterion) {
    let text = build_catalog_text(50, 20);
    let (by_category, by_label) = catalog::parse(&text).unwrap();

    let mut group = c.benchmark_group("recommend");

    // Tier 1: exact label hit.
    group.bench_function("label_exact", |b| {
        b.iter(|| recommend::recommend(black_box("label25"), &by_category, &by_label).unwrap());
    });

    // Tier 2: exact category hit.
    group.bench_function("category_exact", |b| {
        b.iter(|| recommend::recommend(black_box("mood25"), &by_category, &by_label).unwrap());
    });

    // Tier 3: substring scan over every entry.
    group.bench_function("substring_scan", |b| {
        b.iter(|| recommend::recommend(black_box("song 25-1"), &by_category, &by_label).unwrap());
    });

    // Tier 4: fuzzy fallback over every category name.
    group.bench_function("fuzzy_fallback", |b| {
        b.iter(|| recommend::recommend(black_box("zzzznotfound"), &by_category, &by_label).unwrap());
    });

    group.finish();
}

fn benchmark_prefix_mismatch(c: &mut Criterion) {
    c.bench_function("prefix_mismatch", |b| {
        b.iter(|| recommend::prefix_mismatch(black_box("melancholy"), black_box("melodic")));
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_recommend_tiers,
    benchmark_prefix_mismatch
);
criterion_main!(benches);
