// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration at the heart of the renderer.

use num::Complex;

/// Everything the shading step needs to know about one orbit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeResult {
    /// True if the orbit left the radius-2 disc before the iteration
    /// cap was reached.
    pub escaped: bool,
    /// The iteration the orbit stopped on, counting `z = c` as 1.
    pub escape_time: usize,
    /// The smallest modulus the orbit ever reached.
    pub infimum: f64,
    /// The last value of the orbit.
    pub last: Complex<f64>,
}

/// Iterate `z -> z^2 + c` starting from `z = c` until `|z|^2 >= 4` or
/// `iterations` is reached, tracking the closest approach to the
/// origin along the way.  Squared moduli are compared inside the loop;
/// only the reported infimum is square-rooted.
pub fn escape_time(c: Complex<f64>, iterations: usize) -> EscapeResult {
    let mut z = c;
    let mut infimum = z.norm_sqr();
    let mut i = 1;
    while i < iterations && z.norm_sqr() < 4.0 {
        z = z * z + c;
        let norm = z.norm_sqr();
        if norm < infimum {
            infimum = norm;
        }
        i += 1;
    }
    EscapeResult {
        escaped: z.norm_sqr() >= 4.0,
        escape_time: i,
        infimum: infimum.sqrt(),
        last: z,
    }
}
