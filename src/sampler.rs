// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rejection sampling of candidate points from a square centered on
//! the origin.

use exclusion::Exclusion;
use num::Complex;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Draws points uniformly from `[-radius, radius)` on both axes and
/// keeps drawing until the exclusion test admits one.
///
/// There is no retry cap.  If the exclusion test rejects the whole
/// square this never returns; `Config::validate` refuses radii that
/// small for the built-in strategies.
pub struct Sampler<'a, E: Exclusion + 'a, R: Rng> {
    axis: Uniform<f64>,
    exclusion: &'a E,
    rng: R,
}

impl<'a, E: Exclusion + 'a, R: Rng> Sampler<'a, E, R> {
    /// `radius` must be positive and finite.
    pub fn new(radius: f64, exclusion: &'a E, rng: R) -> Self {
        Sampler {
            axis: Uniform::new(-radius, radius),
            exclusion,
            rng,
        }
    }

    /// The next admitted candidate.
    pub fn candidate(&mut self) -> Complex<f64> {
        loop {
            let c = Complex::new(
                self.axis.sample(&mut self.rng),
                self.axis.sample(&mut self.rng),
            );
            if self.exclusion.admits(c) {
                return c;
            }
        }
    }
}
