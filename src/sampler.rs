// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Anti-aliasing by stochastic supersampling.  Each output pixel can
//! be the average of several samples scattered uniformly over the
//! pixel's footprint on the complex plane.

use image::Rgb;
use num::Complex;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;

use crate::bitmap::Pixel;
use crate::escape::escape_time;
use crate::shading::{shade, Interior};

/// Whether, and how hard, to supersample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Antialias {
    /// One sample, taken exactly at the pixel's coordinate.
    Off,
    /// Average this many jittered samples per pixel.
    Jitter {
        /// Samples per pixel; zero is treated as `Off`.
        samples: usize,
    },
}

impl Default for Antialias {
    fn default() -> Self {
        Antialias::Jitter { samples: 20 }
    }
}

/// A source of offsets within one pixel's footprint.  Built on the
/// calling thread's own generator, so every worker gets its own.
pub struct Jitter {
    re: Uniform<f64>,
    im: Uniform<f64>,
    rng: ThreadRng,
}

impl Jitter {
    /// Offsets will fall in `[-dx/2, dx/2] x [-dy/2, dy/2]`.
    pub fn new((dx, dy): (f64, f64)) -> Self {
        Jitter {
            re: Uniform::new_inclusive(-dx / 2.0, dx / 2.0),
            im: Uniform::new_inclusive(-dy / 2.0, dy / 2.0),
            rng: rand::thread_rng(),
        }
    }

    /// One random offset.
    pub fn offset(&mut self) -> Complex<f64> {
        Complex::new(self.re.sample(&mut self.rng), self.im.sample(&mut self.rng))
    }
}

/// Everything needed to turn a point into a finished pixel.  Shared
/// read-only between workers.
#[derive(Copy, Clone, Debug)]
pub struct Supersampler {
    deltas: (f64, f64),
    antialias: Antialias,
    iterations: usize,
    interior: Interior,
}

impl Supersampler {
    /// `deltas` is the pixel footprint, as given by `Viewport::deltas`.
    pub fn new(
        deltas: (f64, f64),
        antialias: Antialias,
        iterations: usize,
        interior: Interior,
    ) -> Self {
        Supersampler {
            deltas,
            antialias,
            iterations,
            interior,
        }
    }

    /// A jitter source for the calling thread.
    pub fn jitter(&self) -> Jitter {
        Jitter::new(self.deltas)
    }

    /// Evaluate and shade a single point, no jitter.
    pub fn point(&self, c: Complex<f64>) -> Pixel {
        shade(&escape_time(c, self.iterations), &self.interior)
    }

    /// The final value of the pixel at `c`.  With anti-aliasing on,
    /// the channels of every sample are summed and divided, with the
    /// fraction dropped.
    pub fn sample(&self, c: Complex<f64>, jitter: &mut Jitter) -> Pixel {
        let samples = match self.antialias {
            Antialias::Jitter { samples } if samples > 0 => samples,
            _ => return self.point(c),
        };

        let mut sums = [0_u64; 3];
        for _ in 0..samples {
            let Rgb(channels) = self.point(c + jitter.offset());
            for (sum, channel) in sums.iter_mut().zip(channels.iter()) {
                *sum += u64::from(*channel);
            }
        }
        let average = |sum: u64| (sum as f64 / samples as f64) as u8;
        Rgb([average(sums[0]), average(sums[1]), average(sums[2])])
    }
}
