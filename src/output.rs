// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing the rendered image to disk.  The format follows the file
//! extension.  The image is written to a temporary file next to the
//! destination and renamed into place once complete, so a failed run
//! never leaves a truncated image behind.

use bmp;
use error::{RenderError, Result};
use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tonemap::RenderedImage;

/// The file formats we know how to write.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Format {
    /// 24-bit uncompressed Windows bitmap.
    Bmp,
    /// PNG, via the image crate.
    Png,
    /// Binary PPM, via the image crate.
    Pnm,
}

impl Format {
    /// Pick a format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Format> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_ref().map(|e| e.as_str()) {
            Some("bmp") => Ok(Format::Bmp),
            Some("png") => Ok(Format::Png),
            Some("ppm") | Some("pnm") => Ok(Format::Pnm),
            _ => Err(RenderError::UnsupportedFormat(format!(
                "{} (expected .bmp, .png, .ppm, or .pnm)",
                path.display()
            ))),
        }
    }
}

fn encode<W: Write>(out: &mut W, format: Format, image: &RenderedImage) -> Result<()> {
    let (width, height) = (image.width() as u32, image.height() as u32);
    match format {
        Format::Bmp => bmp::encode(out, image)?,
        Format::Png => {
            PNGEncoder::new(&mut *out).encode(&image.to_rgb(), width, height, ColorType::RGB(8))?
        }
        Format::Pnm => PNMEncoder::new(&mut *out)
            .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary))
            .encode(&image.to_rgb()[..], width, height, ColorType::RGB(8))?,
    }
    Ok(())
}

/// Write `image` to `path`.
pub fn save(path: &Path, image: &RenderedImage) -> Result<()> {
    let format = Format::from_path(path)?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        encode(&mut writer, format, image)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| RenderError::Io(e.error))?;
    debug!("wrote {:?} image to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_follow_extensions() {
        assert_eq!(Format::from_path(Path::new("a.bmp")).unwrap(), Format::Bmp);
        assert_eq!(Format::from_path(Path::new("a.BMP")).unwrap(), Format::Bmp);
        assert_eq!(Format::from_path(Path::new("dir/a.png")).unwrap(), Format::Png);
        assert_eq!(Format::from_path(Path::new("a.ppm")).unwrap(), Format::Pnm);
        assert_eq!(Format::from_path(Path::new("a.pnm")).unwrap(), Format::Pnm);
        assert!(Format::from_path(Path::new("a.jpg")).is_err());
        assert!(Format::from_path(Path::new("bmp")).is_err());
    }
}
