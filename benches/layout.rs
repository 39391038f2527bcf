use criterion::{Criterion, black_box, criterion_group, criterion_main};
use masonry_mvp::{GridItem, LayoutSignature, MasonryConfig, PlacementRegistry, solve};

fn mixed_items(count: usize) -> Vec<GridItem> {
    (0..count)
        .map(|index| {
            if index % 7 == 0 {
                GridItem::featured(0.5, 32.0)
            } else {
                GridItem::normal(0.4 + (index % 5) as f32 * 0.2, 36.0)
            }
        })
        .collect()
}

fn masonry_pack(c: &mut Criterion) {
    let items = mixed_items(1_000);
    let config = MasonryConfig::new(375.0);

    c.bench_function("masonry_pack_1000", |b| {
        b.iter(|| solve(black_box(&items), black_box(&config)).expect("solve"))
    });
}

fn registry_sync(c: &mut Criterion) {
    let items = mixed_items(1_000);
    let config = MasonryConfig::new(375.0);
    let solution = solve(&items, &config).expect("solve");
    let signature = LayoutSignature::of(&items, &config);

    c.bench_function("registry_sync_1000", |b| {
        b.iter(|| {
            let mut registry = PlacementRegistry::new();
            registry.sync(black_box(&solution), signature);
            registry.take_dirty().len()
        })
    });
}

criterion_group!(benches, masonry_pack, registry_sync);
criterion_main!(benches);
