// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image sink: a width by height grid of 8-bit RGB pixels that
//! can be written out as an uncompressed BMP.

use image::bmp::BMPEncoder;
use image::{ColorType, Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::RenderError;

/// Three 8-bit channels, no alpha.
pub type Pixel = Rgb<u8>;

/// Builds a pixel with the same value in every channel.
pub fn gray(value: u8) -> Pixel {
    Rgb([value, value, value])
}

/// The finished image.  Every pixel starts out black.
pub struct Bitmap {
    image: RgbImage,
}

impl Bitmap {
    /// An all-black image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Bitmap {
            image: RgbImage::new(width as u32, height as u32),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// Store one pixel.  Panics if `x, y` lies outside the image.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.image.put_pixel(x as u32, y as u32, pixel);
    }

    /// Read one pixel back.  Panics if `x, y` lies outside the image.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        *self.image.get_pixel(x as u32, y as u32)
    }

    /// Serialize the image to `path` as a 24-bit BMP.  The encoder
    /// takes care of the BGR channel order and row padding.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let wrap = |cause| RenderError::Write {
            path: path.display().to_string(),
            cause,
        };
        let mut output = BufWriter::new(File::create(path).map_err(wrap)?);
        {
            let mut encoder = BMPEncoder::new(&mut output);
            encoder
                .encode(
                    &self.image,
                    self.image.width(),
                    self.image.height(),
                    ColorType::RGB(8),
                )
                .map_err(wrap)?;
        }
        output.flush().map_err(wrap)
    }
}
