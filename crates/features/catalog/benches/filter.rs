use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vhub_catalog::{Catalog, DEFAULT_CATALOG_JSON};
use vhub_domain::catalog::PartCategory;

// ============================================================================
// Benchmark: Compatibility Filter
// ============================================================================

fn bench_compatible_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("compatible_parts");

    let catalog = Catalog::from_json(DEFAULT_CATALOG_JSON).unwrap();
    let frame = catalog.frame("enduro-carbon").unwrap().clone();

    group.bench_function("populated_category", |b| {
        b.iter(|| {
            black_box(catalog.compatible_parts(black_box(&frame), PartCategory::Fork));
        });
    });

    group.bench_function("empty_category", |b| {
        b.iter(|| {
            black_box(catalog.compatible_parts(black_box(&frame), PartCategory::Saddle));
        });
    });

    group.finish();
}

fn bench_frame_lookup(c: &mut Criterion) {
    let catalog = Catalog::from_json(DEFAULT_CATALOG_JSON).unwrap();

    c.bench_function("frame_lookup", |b| {
        b.iter(|| {
            black_box(catalog.frame(black_box("gravel-titanium")).unwrap());
        });
    });
}

criterion_group!(benches, bench_compatible_parts, bench_frame_lookup);
criterion_main!(benches);
