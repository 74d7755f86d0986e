use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::{
    GridSize, Palette, PaletteParams, Viewport, render_continuous, render_histogram,
    render_optimised, render_periodic, render_unoptimised,
};

const BENCH_PRECISION: u32 = 1000;

fn bench_render_variants(c: &mut Criterion) {
    let size = GridSize::new(200, 200).unwrap();
    let viewport = Viewport::initial();
    let palette = Palette::generate(&PaletteParams {
        p: 499,
        q: 131,
        r: 719,
        s: 37,
    })
    .unwrap();

    let mut group = c.benchmark_group("render_variants");

    group.bench_function("unoptimised", |b| {
        b.iter(|| {
            render_unoptimised(
                black_box(viewport),
                black_box(size),
                &palette,
                BENCH_PRECISION,
            )
            .unwrap()
        })
    });

    group.bench_function("optimised", |b| {
        b.iter(|| {
            render_optimised(
                black_box(viewport),
                black_box(size),
                &palette,
                BENCH_PRECISION,
            )
            .unwrap()
        })
    });

    group.bench_function("periodic_checked", |b| {
        b.iter(|| {
            render_periodic(
                black_box(viewport),
                black_box(size),
                &palette,
                BENCH_PRECISION,
            )
            .unwrap()
        })
    });

    group.bench_function("continuous", |b| {
        b.iter(|| {
            render_continuous(
                black_box(viewport),
                black_box(size),
                &palette,
                BENCH_PRECISION,
            )
            .unwrap()
        })
    });

    group.bench_function("histogram", |b| {
        b.iter(|| {
            render_histogram(
                black_box(viewport),
                black_box(size),
                &palette,
                BENCH_PRECISION,
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render_variants);
criterion_main!(benches);
