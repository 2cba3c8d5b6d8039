//! Throughput of the full layout pipeline at representative card counts
//! and container sizes. The cache is disabled so every iteration pays the
//! full pipeline cost.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use cardlay_engine::{EngineConfig, LayoutEngine};

const CARD_COUNTS: &[usize] = &[1, 5, 9, 24, 50];

fn uncached_engine() -> LayoutEngine {
    LayoutEngine::new(EngineConfig {
        cache_enabled: false,
        ..EngineConfig::default()
    })
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");

    for &count in CARD_COUNTS {
        group.bench_function(format!("{count}_cards_1366x768"), |b| {
            let mut engine = uncached_engine();
            let request = engine.request_for(count, 1366.0, 768.0);
            b.iter(|| black_box(engine.compute_layout(black_box(&request))));
        });
        group.bench_function(format!("{count}_cards_3840x2160"), |b| {
            let mut engine = uncached_engine();
            let request = engine.request_for(count, 3840.0, 2160.0);
            b.iter(|| black_box(engine.compute_layout(black_box(&request))));
        });
    }

    group.finish();
}

fn bench_cache_hit(c: &mut Criterion) {
    c.bench_function("compute_layout/cache_hit", |b| {
        let mut engine = LayoutEngine::new(EngineConfig::default());
        let request = engine.request_for(9, 1366.0, 768.0);
        engine.compute_layout(&request); // warm
        b.iter(|| black_box(engine.compute_layout(black_box(&request))));
    });
}

criterion_group!(benches, bench_pipeline, bench_cache_hit);
criterion_main!(benches);
