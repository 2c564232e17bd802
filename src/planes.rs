// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Viewport struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the
//! complex plane.
use num::Complex;

use crate::errors::RenderError;

/// Describes the x, y of a pixel in the image: column first, then row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanePixel(pub usize, pub usize);

/// The integral plane (the image, `width` by `height` pixels) and the
/// rectangle of the complex plane it covers.  Immutable once built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    leftlower: Complex<f64>,
    rightupper: Complex<f64>,
}

impl Viewport {
    /// Takes the size of the image and the two corners of the complex
    /// plane.  The corners must span a rectangle with positive width
    /// and height, and the image must have at least one pixel.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<Viewport, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport(format!(
                "the image must be at least one pixel, got {}x{}",
                width, height
            )));
        }

        if !(rightupper.re > leftlower.re) {
            return Err(RenderError::InvalidViewport(
                "the left lower corner is not to the left of the right upper corner".to_string(),
            ));
        }

        if !(rightupper.im > leftlower.im) {
            return Err(RenderError::InvalidViewport(
                "the left lower corner is not lower than the right upper corner".to_string(),
            ));
        }

        Ok(Viewport {
            width,
            height,
            leftlower,
            rightupper,
        })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels in the image.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// A viewport is never empty; `new` refuses zero-sized images.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The left lower corner of the complex rectangle.
    pub fn leftlower(&self) -> Complex<f64> {
        self.leftlower
    }

    /// The right upper corner of the complex rectangle.
    pub fn rightupper(&self) -> Complex<f64> {
        self.rightupper
    }

    /// The footprint of one pixel on the complex plane, `(dx, dy)`.
    pub fn deltas(&self) -> (f64, f64) {
        (
            (self.rightupper.re - self.leftlower.re) / (self.width as f64),
            (self.rightupper.im - self.leftlower.im) / (self.height as f64),
        )
    }

    /// Given a pixel on the integral plane, return the point of the
    /// complex plane it maps to.
    ///
    /// The expression is `min + (i / W) * (max - min)`, evaluated in
    /// exactly that order.  Rewriting it as `min + i * dx` moves the
    /// rounding and visibly shifts the boundary of the set, so keep it
    /// as is.  Pixels one past the edge extrapolate to the far corner.
    pub fn pixel_to_point(&self, pixel: &PlanePixel) -> Complex<f64> {
        let (ll, ru) = (self.leftlower, self.rightupper);
        Complex::new(
            ll.re + ((pixel.0 as f64) / (self.width as f64)) * (ru.re - ll.re),
            ll.im + ((pixel.1 as f64) / (self.height as f64)) * (ru.im - ll.im),
        )
    }
}

/// 5120x2880 pixels over `[-2.5, 1] x [-1, 1]`: the whole set, at
/// twice 1440p.
impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 5120,
            height: 2880,
            leftlower: Complex::new(-2.5, -1.0),
            rightupper: Complex::new(1.0, 1.0),
        }
    }
}
