// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The single error type of the renderer.  Everything between a
//! validated configuration and the output file is plain arithmetic,
//! so the only things that can go wrong are a bad configuration and
//! the final write.

use std::io;

/// Errors surfaced by configuration, rendering, and output.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// A configuration value is out of range, or a combination of
    /// values would never let the sampler terminate.
    #[fail(display = "invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// The output file name does not end in an extension we can
    /// encode.
    #[fail(display = "unsupported output format: {}", _0)]
    UnsupportedFormat(String),

    /// Creating, writing, or renaming the output file failed.
    #[fail(display = "could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = ::std::result::Result<T, RenderError>;
