extern crate mandelbrot;
extern crate num;
extern crate tempfile;

use mandelbrot::bitmap::gray;
use mandelbrot::{
    escape_time, render, Antialias, Interior, PlanePixel, RenderConfig, Viewport,
};
use num::Complex;
use std::fs;
use tempfile::tempdir;

fn four_by_four(threads: usize) -> RenderConfig {
    RenderConfig {
        viewport: Viewport::new(4, 4, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap(),
        iterations: 50,
        interior: Interior::continuous(),
        antialias: Antialias::Off,
        threads,
        progress: false,
    }
}

#[test]
fn four_by_four_classifies_inside_and_outside() {
    let config = four_by_four(2);
    let vp = config.viewport;
    let at = |x, y| escape_time(vp.pixel_to_point(&PlanePixel(x, y)), config.iterations);

    // -2 - i, 0.25 - i, and the far corner 1 + i all lie outside.
    assert!(at(0, 0).escaped);
    assert!(at(3, 0).escaped);
    assert!(at(4, 4).escaped);
    // -0.5 + 0i is inside the main cardioid.
    assert_eq!(vp.pixel_to_point(&PlanePixel(2, 2)), Complex::new(-0.5, 0.0));
    assert!(!at(2, 2).escaped);

    let bitmap = render(&config).unwrap();
    assert_eq!(bitmap.get(0, 0), gray(255));
    // infimum 0.25, (0.25 / 0.355)^2 * 255
    assert_eq!(bitmap.get(2, 2), gray(126));
}

#[test]
fn every_pixel_is_written_once_whatever_the_worker_count() {
    for &threads in &[1, 2, 3, 7, 16] {
        let config = RenderConfig {
            viewport: Viewport::new(31, 17, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0))
                .unwrap(),
            ..four_by_four(threads)
        };
        let sampler = config.sampler();
        let bitmap = render(&config).unwrap();
        for y in 0..17 {
            for x in 0..31 {
                let c = config.viewport.pixel_to_point(&PlanePixel(x, y));
                assert_eq!(bitmap.get(x, y), sampler.point(c), "{} threads", threads);
            }
        }
    }
}

#[test]
fn supersampled_render_keeps_the_far_outside_white() {
    let config = RenderConfig {
        viewport: Viewport::new(8, 8, Complex::new(3.0, 3.0), Complex::new(4.0, 4.0)).unwrap(),
        antialias: Antialias::Jitter { samples: 8 },
        interior: Interior::zebra(),
        ..four_by_four(4)
    };
    let bitmap = render(&config).unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(bitmap.get(x, y), gray(255));
        }
    }
}

#[test]
fn rendered_image_is_written_as_bmp() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("four.bmp");
    render(&four_by_four(2)).unwrap().write(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[0..2], b"BM");
    let width = u32::from(bytes[18]) | u32::from(bytes[19]) << 8;
    assert_eq!(width, 4);
}
