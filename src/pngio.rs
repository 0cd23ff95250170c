use image::RgbaImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::{Error, Result};

/// Encodes an RGBA bitmap as an 8-bit RGBA PNG stream.
///
/// The encoder settings are fixed, so the same bitmap always produces the
/// same bytes.
pub fn write_png<W: Write>(
    image: &RgbaImage,
    output: W,
) -> std::result::Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(output, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// Writes the bitmap to a PNG file at `path`, replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut output = BufWriter::new(file);
    write_png(image, &mut output).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    output.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}
