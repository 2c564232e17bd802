#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::Criterion;
use mandelbrot::{escape_time, render, Antialias, Interior, RenderConfig, Viewport};
use num::Complex;

fn bench_escape_time(c: &mut Criterion) {
    c.bench_function("escape_time inside the cardioid", |b| {
        b.iter(|| escape_time(Complex::new(-0.5, 0.1), 1000))
    });
}

fn bench_render(c: &mut Criterion) {
    let config = RenderConfig {
        viewport: Viewport::new(160, 90, Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0))
            .unwrap(),
        iterations: 250,
        interior: Interior::zebra(),
        antialias: Antialias::Jitter { samples: 4 },
        progress: false,
        ..RenderConfig::default()
    };
    c.bench_function("render 160x90", move |b| b.iter(|| render(&config).unwrap()));
}

criterion_group!(benches, bench_escape_time, bench_render);
criterion_main!(benches);
