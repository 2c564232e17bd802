// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Small numeric helpers: byte order, interpolation, and an HSL to
//! RGB conversion for anyone who wants colour instead of gray.

use image::Rgb;
use num::clamp;

use crate::bitmap::Pixel;
use crate::errors::RenderError;

/// Reverse the byte order of a value.
pub trait ByteSwap {
    /// The same value with its bytes in the opposite order.
    fn byte_swap(self) -> Self;
}

impl ByteSwap for u32 {
    fn byte_swap(self) -> Self {
        self.swap_bytes()
    }
}

impl ByteSwap for Pixel {
    fn byte_swap(self) -> Self {
        let Rgb([r, g, b]) = self;
        Rgb([b, g, r])
    }
}

/// Checked once before rendering.  If either of these is wrong the
/// file we write would be silently garbled, so refuse to start.
pub fn self_check() -> Result<(), RenderError> {
    if 0x1122_3344_u32.byte_swap() != 0x4433_2211 {
        return Err(RenderError::SelfCheck("u32 byte swap"));
    }
    if Rgb([0x11_u8, 0x22, 0x33]).byte_swap() != Rgb([0x33, 0x22, 0x11]) {
        return Err(RenderError::SelfCheck("pixel byte swap"));
    }
    Ok(())
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.  `t` is not
/// clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert a hue in `[0, 360]`, saturation and lightness in `[0, 1]`
/// to an 8-bit RGB pixel.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Pixel {
    let h = h / 360.0;
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };
    let channel = |v: f64| clamp((v * 255.0).round(), 0.0, 255.0) as u8;
    Rgb([channel(r), channel(g), channel(b)])
}
