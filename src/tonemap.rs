// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning hit counts into 8-bit intensities.
//!
//! Hit counts are wildly skewed: a handful of cells near the real axis
//! collect orders of magnitude more hits than the wisps at the edges.
//! A linear scale would leave everything but those few cells black, so
//! each channel is scaled by the cube root of its count relative to
//! the cube root of that channel's maximum.

use histogram::{Channel, Histogram, Histograms};
use num::clamp;

/// Cube-root tone map of a single channel.  An empty channel maps to
/// black.
pub fn tone_map(histogram: &Histogram) -> Vec<u8> {
    let max = histogram.max();
    if max == 0 {
        return vec![0; histogram.cells().len()];
    }
    let top = (max as f64).cbrt();
    histogram
        .cells()
        .iter()
        .map(|&v| clamp(((v as f64).cbrt() / top * 255.0).floor(), 0.0, 255.0) as u8)
        .collect()
}

/// Three tone-mapped channels, row-major, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedImage {
    width: usize,
    height: usize,
    channels: [Vec<u8>; 3],
}

impl RenderedImage {
    /// Tone map each channel independently.
    pub fn from_histograms(histograms: &Histograms) -> Self {
        let red = histograms.channel(Channel::Red);
        RenderedImage {
            width: red.width(),
            height: red.height(),
            channels: [
                tone_map(red),
                tone_map(histograms.channel(Channel::Green)),
                tone_map(histograms.channel(Channel::Blue)),
            ],
        }
    }

    /// Build an image from raw channel data.  Returns None if any
    /// channel is not exactly `width * height` long.
    pub fn from_channels(
        width: usize,
        height: usize,
        red: Vec<u8>,
        green: Vec<u8>,
        blue: Vec<u8>,
    ) -> Option<Self> {
        let len = width * height;
        if red.len() != len || green.len() != len || blue.len() != len {
            return None;
        }
        Some(RenderedImage {
            width,
            height,
            channels: [red, green, blue],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// One channel's intensities, row-major.
    pub fn channel(&self, channel: Channel) -> &[u8] {
        &self.channels[channel as usize]
    }

    /// Interleaved R, G, B bytes, row-major, top row first.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width * self.height * 3);
        for (r, g, b) in izip!(&self.channels[0], &self.channels[1], &self.channels[2]) {
            rgb.extend_from_slice(&[*r, *g, *b]);
        }
        rgb
    }
}
