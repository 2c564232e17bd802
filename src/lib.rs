#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit `z -> z^2 + c`, started at `z = c`, never
//! leaves the disc of radius 2.  For every pixel of the output image
//! we map the pixel to a point, run that orbit, and shade the pixel
//! according to how the orbit behaved: points that escape are shaded
//! by a smoothed escape time, and points that stay bounded are shaded
//! by how close their orbit ever came to the origin.
//!
//! Each output pixel may be the average of several jittered samples
//! taken inside its footprint, and the rows of the image are handed
//! out to a pool of worker threads through a single atomic cursor.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;
extern crate rand;

pub mod bitmap;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;
pub mod sampler;
pub mod scheduler;
pub mod shading;
pub mod utils;

pub use bitmap::{Bitmap, Pixel};
pub use errors::RenderError;
pub use escape::{escape_time, EscapeResult};
pub use planes::{PlanePixel, Viewport};
pub use render::{render, RenderConfig};
pub use sampler::{Antialias, Supersampler};
pub use scheduler::RowScheduler;
pub use shading::{shade, Interior};
