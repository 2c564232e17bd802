// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns the result of an orbit into a gray pixel.
//!
//! Escaped points get a smoothed escape time: the integer escape
//! time is interpolated towards the next one by how far past the
//! escape radius the orbit landed, which removes the hard bands you
//! would otherwise see around the set.  Points inside the set are
//! shaded by the closest their orbit came to the origin, either as
//! alternating rings ("zebra") or as a continuous ramp.

use num::clamp;
use std::f64::consts::LN_2;

use crate::bitmap::{gray, Pixel};
use crate::escape::EscapeResult;
use crate::utils::lerp;

/// How to shade points that never escape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interior {
    /// Split the infimum into bands `1 / categorizer` wide and paint
    /// them alternately white and black.
    Zebra {
        /// Bands per unit of modulus.
        categorizer: f64,
    },
    /// Normalise the infimum against the largest value expected for
    /// this iteration cap and viewport, raise it to `exponent`, and
    /// ramp from black to white.
    Continuous {
        /// Calibration constant; the largest infimum seen inside the
        /// set.  Has to be re-measured if the cap or viewport change.
        max_infimum: f64,
        /// Values above 1 push the low end of the ramp towards black.
        exponent: f64,
    },
}

impl Interior {
    /// Zebra banding with 100 bands per unit.
    pub fn zebra() -> Self {
        Interior::Zebra { categorizer: 100.0 }
    }

    /// Continuous shading calibrated for 1000 iterations over the
    /// default viewport, where the highest infimum observed was
    /// about 0.3542.
    pub fn continuous() -> Self {
        Interior::Continuous {
            max_infimum: 0.355,
            exponent: 2.0,
        }
    }
}

impl Default for Interior {
    fn default() -> Self {
        Interior::zebra()
    }
}

/// Brightness for an integer escape time: white up to 10, then three
/// steps darker per iteration until it bottoms out at black.
pub fn escape_brightness(escape_time: usize) -> f64 {
    if escape_time <= 10 {
        255.0
    } else {
        let darkening = (escape_time - 10).saturating_mul(3).min(255);
        (255 - darkening) as f64
    }
}

/// The fractional correction to the escape time, from the standard
/// `log(log|z|)` renormalisation.  Zero when the orbit lands exactly
/// on the escape radius and growing as it overshoots.
pub fn smoothing(last_norm_sqr: f64) -> f64 {
    let log_zn = last_norm_sqr.ln() / 2.0;
    (log_zn / LN_2).ln() / LN_2
}

/// Brightness of an escaped point: `escape_brightness` of its escape
/// time, interpolated towards that of the next iteration with weight
/// `1 - nu`.  A non-finite `nu` (an orbit whose modulus overflowed)
/// counts as landing on the radius.
pub fn smooth_escape(escape_time: usize, nu: f64) -> f64 {
    let (here, next) = (
        escape_brightness(escape_time),
        escape_brightness(escape_time + 1),
    );
    if here == next {
        return here;
    }
    let nu = if nu.is_finite() { nu } else { 0.0 };
    lerp(here, next, 1.0 - nu)
}

fn to_channel(value: f64) -> u8 {
    clamp(value, 0.0, 255.0) as u8
}

fn shade_interior(infimum: f64, interior: &Interior) -> u8 {
    match *interior {
        Interior::Zebra { categorizer } => {
            let category = (infimum * categorizer).floor() as u64;
            if category % 2 == 0 {
                255
            } else {
                0
            }
        }
        Interior::Continuous {
            max_infimum,
            exponent,
        } => {
            let ratio = (infimum / max_infimum).powf(exponent).min(1.0);
            to_channel(ratio * 255.0)
        }
    }
}

/// Shade one evaluated point.  The result is always gray.
pub fn shade(result: &EscapeResult, interior: &Interior) -> Pixel {
    if result.escaped {
        let nu = smoothing(result.last.norm_sqr());
        gray(to_channel(smooth_escape(result.escape_time, nu)))
    } else {
        gray(shade_interior(result.infimum, interior))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::escape_time;
    use num::Complex;

    fn bounded(infimum: f64) -> EscapeResult {
        EscapeResult {
            escaped: false,
            escape_time: 1000,
            infimum,
            last: Complex::new(0.0, 0.0),
        }
    }

    #[test]
    fn escape_brightness_table() {
        assert_eq!(escape_brightness(1), 255.0);
        assert_eq!(escape_brightness(10), 255.0);
        assert_eq!(escape_brightness(11), 252.0);
        assert_eq!(escape_brightness(20), 225.0);
        assert_eq!(escape_brightness(95), 0.0);
        assert_eq!(escape_brightness(usize::max_value()), 0.0);
    }

    #[test]
    fn smooth_escape_darkens_with_escape_time() {
        for &nu in &[0.0, 0.25, 0.5, 0.9, 1.0] {
            let mut previous = smooth_escape(11, nu);
            for t in 12..200 {
                let current = smooth_escape(t, nu);
                assert!(current <= previous, "t = {}, nu = {}", t, nu);
                previous = current;
            }
        }
    }

    #[test]
    fn smoothing_is_zero_on_the_escape_radius() {
        assert!(smoothing(4.0).abs() < 1e-12);
        assert!(smoothing(16.0) > 0.0);
    }

    #[test]
    fn escaped_points_on_the_radius_take_the_next_brightness() {
        let result = EscapeResult {
            escaped: true,
            escape_time: 11,
            infimum: 0.1,
            last: Complex::new(2.0, 0.0),
        };
        // nu = 0, so the weight is entirely on escape time 12.
        assert_eq!(shade(&result, &Interior::zebra()), gray(249));
    }

    #[test]
    fn fast_escapes_are_white() {
        let result = EscapeResult {
            escaped: true,
            escape_time: 1,
            infimum: 3.0,
            last: Complex::new(3.0, 0.0),
        };
        assert_eq!(shade(&result, &Interior::zebra()), gray(255));
    }

    #[test]
    fn overflowing_orbits_stay_white() {
        // |z|^2 = 1e310 overflows to infinity.
        let result = EscapeResult {
            escaped: true,
            escape_time: 1,
            infimum: 1e155,
            last: Complex::new(1e155, 0.0),
        };
        assert_eq!(shade(&result, &Interior::zebra()), gray(255));
        let far = escape_time(Complex::new(1e200, 0.0), 1000);
        assert_eq!(shade(&far, &Interior::zebra()), gray(255));
    }

    #[test]
    fn smooth_escape_is_finite_for_any_weight() {
        for &nu in &[std::f64::INFINITY, std::f64::NEG_INFINITY, std::f64::NAN] {
            assert_eq!(smooth_escape(1, nu), 255.0);
            assert_eq!(smooth_escape(11, nu), 249.0);
        }
    }

    #[test]
    fn zebra_alternates() {
        let zebra = Interior::zebra();
        assert_eq!(shade(&bounded(0.0), &zebra), gray(255));
        assert_eq!(shade(&bounded(0.005), &zebra), gray(255));
        assert_eq!(shade(&bounded(0.015), &zebra), gray(0));
        assert_eq!(shade(&bounded(0.025), &zebra), gray(255));
    }

    #[test]
    fn continuous_ramps_and_clamps() {
        let continuous = Interior::continuous();
        assert_eq!(shade(&bounded(0.0), &continuous), gray(0));
        assert_eq!(shade(&bounded(0.355 / 2.0), &continuous), gray(63));
        assert_eq!(shade(&bounded(0.355), &continuous), gray(255));
        assert_eq!(shade(&bounded(0.9), &continuous), gray(255));
    }

    #[test]
    fn continuous_exponent_one_is_linear() {
        let linear = Interior::Continuous {
            max_infimum: 1.0,
            exponent: 1.0,
        };
        assert_eq!(shade(&bounded(0.5), &linear), gray(127));
    }
}
