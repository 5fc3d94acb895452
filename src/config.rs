// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render parameters, and the checks that keep the rejection loops
//! from spinning forever.

use bmp;
use error::{RenderError, Result};
use exclusion::Strategy;
use histogram::{Band, Bands, Channel};

/// The smallest sampling half-width that still reaches past the
/// period-2 bulb, whose left edge sits at -1.25.
pub const MIN_SAMPLE_RADIUS: f64 = 1.25;

/// The largest edge we will allocate a grid for.
pub const MAX_EDGE: usize = 65_535;

/// Everything the renderer needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Orbits must be strictly longer than this to be traced.
    pub min_length: usize,
    /// Orbits must be strictly shorter than this to be traced.  Also
    /// the iteration cap of the escape-time evaluator.
    pub max_length: usize,
    /// Orbit lengths plotted on the red channel.
    pub red: Band,
    /// Orbit lengths plotted on the green channel.
    pub green: Band,
    /// Orbit lengths plotted on the blue channel.
    pub blue: Band,
    /// How many orbits to trace.
    pub samples: usize,
    /// Candidates are drawn from `[-sample_radius, sample_radius)` on
    /// both axes.
    pub sample_radius: f64,
    /// Which points to throw away before iterating.
    pub exclusion: Strategy,
    /// Report progress every this many traced orbits.
    pub ticker: usize,
    /// Seed for the random source; None draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 900,
            height: 900,
            min_length: 500,
            max_length: 8000,
            red: Band::new(2000, 8000),
            green: Band::new(1300, 5000),
            blue: Band::new(1000, 2000),
            samples: 1000,
            sample_radius: 2.0,
            exclusion: Strategy::Cardioid,
            ticker: 100,
            seed: None,
        }
    }
}

fn invalid<T>(message: String) -> Result<T> {
    Err(RenderError::InvalidConfig(message))
}

impl Config {
    /// The channel bands.
    pub fn bands(&self) -> Bands {
        Bands::new(self.red, self.green, self.blue)
    }

    /// Refuse anything that would leave the grid empty, overflow the
    /// output format, or leave the sampling loops with nothing to find.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return invalid(format!(
                "image size {}x{} has no pixels",
                self.width, self.height
            ));
        }
        if self.width > MAX_EDGE || self.height > MAX_EDGE {
            return invalid(format!(
                "image size {}x{} exceeds {} pixels on a side",
                self.width, self.height, MAX_EDGE
            ));
        }
        if bmp::file_size(self.width, self.height).is_none() {
            return invalid(format!(
                "image size {}x{} is too large for a bitmap",
                self.width, self.height
            ));
        }
        if self.min_length.saturating_add(1) >= self.max_length {
            return invalid(format!(
                "no orbit length lies strictly between {} and {}",
                self.min_length, self.max_length
            ));
        }
        for channel in Channel::ALL.iter() {
            let band = self.bands().band(*channel);
            if band.is_empty() {
                return invalid(format!(
                    "the {} band [{}, {}] is empty",
                    channel, band.min, band.max
                ));
            }
            if band.max <= self.min_length || band.min >= self.max_length {
                warn!(
                    "the {} band [{}, {}] lies outside the traced lengths ({}, {}) and will stay black",
                    channel, band.min, band.max, self.min_length, self.max_length
                );
            }
        }
        if self.samples == 0 {
            return invalid("the sample count must be positive".to_string());
        }
        if !self.sample_radius.is_finite() || self.sample_radius < MIN_SAMPLE_RADIUS {
            return invalid(format!(
                "sampling radius {} must be a finite number of at least {}",
                self.sample_radius, MIN_SAMPLE_RADIUS
            ));
        }
        if self.ticker == 0 {
            return invalid("the progress interval must be positive".to_string());
        }
        Ok(())
    }
}
