// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An uncompressed 24-bit BMP writer.
//!
//! The layout is the plain Windows bitmap every reader understands: a
//! 14-byte file header, a 40-byte BITMAPINFOHEADER, then the pixel
//! rows bottom-to-top, each pixel stored blue, green, red, each row
//! padded with zeros to a multiple of four bytes.

use histogram::Channel;
use std::io::{self, Write};
use tonemap::RenderedImage;

/// Size of the file header plus the info header.
pub const HEADER_SIZE: u32 = 54;
const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Bytes per stored row, padding included.
pub fn row_bytes(width: usize) -> usize {
    (3 * width + 3) & !3
}

/// Total file size for an image of this shape, or None if it would
/// not fit the format's 32-bit size fields.
pub fn file_size(width: usize, height: usize) -> Option<u32> {
    if width > i32::max_value() as usize || height > i32::max_value() as usize {
        return None;
    }
    let pixels = (row_bytes(width) as u64).checked_mul(height as u64)?;
    let total = pixels.checked_add(u64::from(HEADER_SIZE))?;
    if total > u64::from(u32::max_value()) {
        None
    } else {
        Some(total as u32)
    }
}

fn header(width: usize, height: usize) -> io::Result<Vec<u8>> {
    let size = file_size(width, height).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("a {}x{} image is too large for a BMP file", width, height),
        )
    })?;
    let mut h = Vec::with_capacity(HEADER_SIZE as usize);
    h.extend_from_slice(b"BM");
    h.extend_from_slice(&size.to_le_bytes());
    h.extend_from_slice(&0u32.to_le_bytes());
    h.extend_from_slice(&HEADER_SIZE.to_le_bytes());
    h.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    h.extend_from_slice(&(width as i32).to_le_bytes());
    h.extend_from_slice(&(height as i32).to_le_bytes());
    h.extend_from_slice(&1u16.to_le_bytes());
    h.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    h.extend_from_slice(&0u32.to_le_bytes()); // no compression
    h.extend_from_slice(&(size - HEADER_SIZE).to_le_bytes());
    h.extend_from_slice(&0i32.to_le_bytes());
    h.extend_from_slice(&0i32.to_le_bytes());
    h.extend_from_slice(&0u32.to_le_bytes());
    h.extend_from_slice(&0u32.to_le_bytes());
    Ok(h)
}

/// Serialize `image` as a 24-bit BMP.
pub fn encode<W: Write>(out: &mut W, image: &RenderedImage) -> io::Result<()> {
    let (width, height) = (image.width(), image.height());
    out.write_all(&header(width, height)?)?;

    let red = image.channel(Channel::Red);
    let green = image.channel(Channel::Green);
    let blue = image.channel(Channel::Blue);
    let mut row = vec![0u8; row_bytes(width)];
    for y in (0..height).rev() {
        let span = y * width..(y + 1) * width;
        for (px, r, g, b) in izip!(
            row.chunks_mut(3),
            &red[span.clone()],
            &green[span.clone()],
            &blue[span]
        ) {
            px[0] = *b;
            px[1] = *g;
            px[2] = *r;
        }
        out.write_all(&row)?;
    }
    out.flush()
}
