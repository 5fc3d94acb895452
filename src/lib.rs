#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Nebulabrot renderer
//!
//! The Buddhabrot (and the Nebulabrot) are variants of the Mandelbrot
//! set that plot where orbits go rather than how fast they leave.  A
//! point `c` is iterated as `z = z * z + c` from zero; if the orbit
//! eventually escapes, every position it visited on the way out is
//! mapped to the nearest pixel and that pixel's counter incremented.
//! With enough random points the counters trace out a ghostly seated
//! figure, the Buddhabrot.
//!
//! The Nebulabrot renders three of these at once.  Orbits are sorted
//! by their length into three bands, one per color channel, and each
//! channel is tone-mapped on its own.  Short orbits paint the diffuse
//! outer glow; long orbits paint the fine filaments.
//!
//! Points are drawn at random from a square around the origin, after
//! discarding the ones that provably never escape (see
//! [`exclusion`]).  Only orbits whose length falls strictly inside a
//! configured window are traced.

#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate rand;
extern crate tempfile;

pub mod bmp;
pub mod config;
pub mod error;
pub mod exclusion;
pub mod histogram;
pub mod orbit;
pub mod output;
pub mod planes;
pub mod renderer;
pub mod sampler;
pub mod tonemap;

pub use config::Config;
pub use error::RenderError;
pub use exclusion::{Exclusion, Strategy};
pub use histogram::{Band, Bands, Channel, Histogram, Histograms};
pub use renderer::{Renderer, Stats};
pub use tonemap::RenderedImage;
