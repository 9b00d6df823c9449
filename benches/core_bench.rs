use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use polar_kurven_plotter::core::{
    generate_butterfly, generate_petal, ButterflyParams, PetalParams, PetalVariant, ViewRect,
    BUTTERFLY_RESOLUTION, PETAL_RESOLUTION,
};

fn bench_butterfly_generation(c: &mut Criterion) {
    let params = ButterflyParams::default();

    c.bench_function("generate_butterfly_5000", |b| {
        b.iter(|| {
            let curve = generate_butterfly(std::hint::black_box(&params), BUTTERFLY_RESOLUTION);
            std::hint::black_box(curve.points.len())
        })
    });
}

fn bench_petal_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_petal");

    for variant in PetalVariant::ALL {
        let params = PetalParams {
            n_petals: 7,
            face_radius: 1.0,
            variant,
        };

        group.bench_with_input(
            BenchmarkId::new("variant", variant.label()),
            &params,
            |b, params| {
                b.iter(|| {
                    let curve = generate_petal(std::hint::black_box(params), PETAL_RESOLUTION);
                    std::hint::black_box(curve.points.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_zoom_chain(c: &mut Criterion) {
    let rect = ViewRect::symmetric(4.0);
    let cursor = DVec2::new(0.7, -0.3);

    c.bench_function("zoomed_at_chain_100", |b| {
        b.iter(|| {
            let mut current = std::hint::black_box(rect);
            for _ in 0..50 {
                current = current.zoomed_at(cursor, 0.9);
            }
            for _ in 0..50 {
                current = current.zoomed_at(cursor, 1.1);
            }
            std::hint::black_box(current)
        })
    });
}

criterion_group!(
    benches,
    bench_butterfly_generation,
    bench_petal_generation,
    bench_zoom_chain
);
criterion_main!(benches);
