//! Per-frame layout benchmarks.
//!
//! Layout is resolved on every frame and every resize event, so both the
//! pure decisions and a full document paint should stay well under a frame.
//!
//! Run with: cargo bench --bench layout_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::layout::{resolve_screen, LayoutConfig};
use folio::model::Portfolio;
use folio::view::{render_document, resolve_document_layout, CellMetrics, Theme};

fn bench_resolve_screen(c: &mut Criterion) {
    let config = LayoutConfig::default();
    c.bench_function("resolve_screen", |b| {
        b.iter(|| {
            for width in (0..2000).step_by(40) {
                black_box(resolve_screen(black_box(f64::from(width)), &config));
            }
        })
    });
}

fn bench_resize_sweep(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let metrics = CellMetrics::default();
    c.bench_function("resolve_document_layout_sweep", |b| {
        b.iter(|| {
            for columns in 20..=250u16 {
                black_box(resolve_document_layout(black_box(columns), &config, metrics));
            }
        })
    });
}

fn bench_render_document(c: &mut Criterion) {
    let portfolio = Portfolio::default();
    let config = LayoutConfig::default();
    let metrics = CellMetrics::default();
    let theme = Theme::default();

    let mut group = c.benchmark_group("render_document");
    for columns in [60u16, 120, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(columns), &columns, |b, &columns| {
            b.iter(|| {
                black_box(render_document(
                    &portfolio,
                    columns,
                    &config,
                    metrics,
                    &theme,
                    None,
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_screen,
    bench_resize_sweep,
    bench_render_document
);
criterion_main!(benches);
