// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-channel hit counters, and the orbit tracer that fills them.
//!
//! A Nebulabrot is three Buddhabrots, one per color channel, each
//! built from orbits whose length falls inside that channel's band.
//! Every orbit goes to at most one channel: bands are tried in the
//! order blue, green, red, and the first one containing the orbit's
//! length takes all of its points.  Overlapping bands are legal and
//! resolved by that order.

use num::Complex;
use orbit::Orbit;
use planes::PlaneMapper;
use std::fmt;

/// One of the three output channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Red
    Red = 0,
    /// Green
    Green = 1,
    /// Blue
    Blue = 2,
}

impl Channel {
    /// All channels, in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// The order in which bands claim orbits.
    pub const PRIORITY: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// A closed interval of orbit lengths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Band {
    /// Shortest orbit in the band.
    pub min: usize,
    /// Longest orbit in the band.
    pub max: usize,
}

impl Band {
    /// A band covering `min..=max`.
    pub fn new(min: usize, max: usize) -> Self {
        Band { min, max }
    }

    /// Does an orbit of this length belong here?
    pub fn contains(&self, length: usize) -> bool {
        length >= self.min && length <= self.max
    }

    /// An inverted band holds nothing.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// The three channel bands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bands {
    bands: [Band; 3],
}

impl Bands {
    /// Bands for the red, green, and blue channels.
    pub fn new(red: Band, green: Band, blue: Band) -> Self {
        Bands {
            bands: [red, green, blue],
        }
    }

    /// The band assigned to `channel`.
    pub fn band(&self, channel: Channel) -> Band {
        self.bands[channel.index()]
    }

    /// The channel that receives an orbit of this length, if any.
    pub fn channel_for(&self, length: usize) -> Option<Channel> {
        Channel::PRIORITY
            .iter()
            .cloned()
            .find(|&channel| self.band(channel).contains(length))
    }
}

/// A grid of hit counts, row-major, the same shape as the output image.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    width: usize,
    height: usize,
    cells: Vec<u64>,
}

impl Histogram {
    /// An all-zero histogram.
    pub fn new(width: usize, height: usize) -> Self {
        Histogram {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw counts, row-major.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// The count at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<u64> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Bump the cell at a row-major offset.  Saturates rather than
    /// wraps.  Offsets past the end are ignored.
    pub fn increment(&mut self, offset: usize) -> bool {
        match self.cells.get_mut(offset) {
            Some(cell) => {
                *cell = cell.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// The largest count in the grid.
    pub fn max(&self) -> u64 {
        self.cells.iter().cloned().max().unwrap_or(0)
    }

    /// The sum of all counts.
    pub fn total(&self) -> u64 {
        self.cells.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }
}

/// One histogram per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Histograms {
    channels: [Histogram; 3],
}

impl Histograms {
    /// Three all-zero histograms of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Histograms {
            channels: [
                Histogram::new(width, height),
                Histogram::new(width, height),
                Histogram::new(width, height),
            ],
        }
    }

    /// The histogram for `channel`.
    pub fn channel(&self, channel: Channel) -> &Histogram {
        &self.channels[channel.index()]
    }

    /// Walk the orbit of `c` for at most `length` steps and count every
    /// position it visits on the channel chosen by `bands`.  Positions
    /// outside the plane are skipped.  Returns the number of hits
    /// recorded, which is zero when no band claims `length`.
    pub fn trace(
        &mut self,
        plane: &PlaneMapper,
        bands: &Bands,
        c: Complex<f64>,
        length: usize,
    ) -> usize {
        let channel = match bands.channel_for(length) {
            Some(channel) => channel,
            None => return 0,
        };
        let histogram = &mut self.channels[channel.index()];
        let mut recorded = 0;
        for offset in Orbit::new(c, length).filter_map(|z| plane.point_to_offset(&z)) {
            if histogram.increment(offset) {
                recorded += 1;
            }
        }
        recorded
    }
}
