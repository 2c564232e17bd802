// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The whole pipeline: rows from the scheduler, pixels to points,
//! points through the supersampler, and the results into a bitmap.

use std::time::Instant;

use crate::bitmap::{Bitmap, Pixel};
use crate::errors::RenderError;
use crate::planes::{PlanePixel, Viewport};
use crate::sampler::{Antialias, Jitter, Supersampler};
use crate::scheduler::RowScheduler;
use crate::shading::Interior;

/// Every knob a render has.  Read-only once the render starts.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// The image size and the part of the complex plane it covers.
    pub viewport: Viewport,
    /// Iteration cap for each orbit.
    pub iterations: usize,
    /// How to shade points inside the set.
    pub interior: Interior,
    /// Supersampling.
    pub antialias: Antialias,
    /// Worker threads; zero is treated as one.
    pub threads: usize,
    /// Print a live percentage on stdout.
    pub progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            viewport: Viewport::default(),
            iterations: 1000,
            interior: Interior::default(),
            antialias: Antialias::default(),
            threads: num_cpus::get(),
            progress: true,
        }
    }
}

impl RenderConfig {
    /// The supersampler this configuration describes.
    pub fn sampler(&self) -> Supersampler {
        Supersampler::new(
            self.viewport.deltas(),
            self.antialias,
            self.iterations,
            self.interior,
        )
    }
}

/// Render one row of the image.
pub fn render_row(
    viewport: &Viewport,
    sampler: &Supersampler,
    row: usize,
    jitter: &mut Jitter,
) -> Vec<Pixel> {
    (0..viewport.width())
        .map(|column| {
            let c = viewport.pixel_to_point(&PlanePixel(column, row));
            sampler.sample(c, jitter)
        })
        .collect()
}

/// Render the image `config` describes.  Blocks until every worker
/// has finished.
pub fn render(config: &RenderConfig) -> Result<Bitmap, RenderError> {
    let viewport = config.viewport;
    let sampler = config.sampler();
    let scheduler = RowScheduler::new(viewport.height(), config.threads)
        .with_progress(config.progress);

    info!(
        "rendering {}x{} with {} workers, {} iterations, {:?}, {:?}",
        viewport.width(),
        viewport.height(),
        scheduler.workers(),
        config.iterations,
        config.interior,
        config.antialias
    );
    let start = Instant::now();

    let rows = scheduler.run(|_| {
        let mut jitter = sampler.jitter();
        move |row: usize| render_row(&viewport, &sampler, row, &mut jitter)
    })?;

    info!("rendered {} rows in {:?}", rows.len(), start.elapsed());
    assemble(&viewport, rows)
}

/// Write the finished rows into a bitmap, checking that each row
/// arrived exactly once.
fn assemble(viewport: &Viewport, rows: Vec<(usize, Vec<Pixel>)>) -> Result<Bitmap, RenderError> {
    let mut counts = vec![0; viewport.height()];
    let mut bitmap = Bitmap::new(viewport.width(), viewport.height());
    for (row, pixels) in rows {
        match counts.get_mut(row) {
            Some(count) => *count += 1,
            None => return Err(RenderError::RowAccounting { row, count: 1 }),
        }
        for (column, pixel) in pixels.into_iter().enumerate() {
            bitmap.set(column, row, pixel);
        }
    }
    match counts.iter().position(|&count| count != 1) {
        Some(row) => Err(RenderError::RowAccounting {
            row,
            count: counts[row],
        }),
        None => Ok(bitmap),
    }
}
