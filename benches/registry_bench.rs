use archdim::{
    AlignedDimension, AngleDimension, AxisFlags, BoundsDimension, DimensionRegistry, ObjectId,
    VertexRef,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const OWNER: ObjectId = ObjectId::new(1);

fn populated(size: u32) -> DimensionRegistry {
    let mut registry = DimensionRegistry::new(OWNER);
    for i in 0..size {
        match i % 3 {
            0 => {
                registry.create(AlignedDimension::new(
                    format!("Dimension {i}"),
                    VertexRef::vertex(OWNER, i),
                    VertexRef::vertex(OWNER, i + 1),
                ));
            }
            1 => {
                registry.create(AngleDimension::new(format!("Angle {i}"), i, i + 1, i + 2));
            }
            _ => {
                registry.create(BoundsDimension::new("Bounding Box Dimension", AxisFlags::all()));
            }
        }
    }
    registry
}

fn bench_reindex(c: &mut Criterion) {
    let mut group = c.benchmark_group("reindex");
    for size in [100u32, 1_000, 10_000] {
        let mut registry = populated(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                registry.reindex();
                black_box(registry.entries().len())
            })
        });
    }
    group.finish();
}

fn bench_delete_front(c: &mut Criterion) {
    let registry = populated(1_000);
    c.bench_function("delete_at front of 1000", |b| {
        b.iter_batched(
            || registry.clone(),
            |mut registry| black_box(registry.delete_at(0)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_reindex, bench_delete_front);
criterion_main!(benches);
