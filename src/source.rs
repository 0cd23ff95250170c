use image::imageops::FilterType;
use image::RgbaImage;
use std::fs;
use std::path::Path;

use super::error::{Error, Result};
use super::placeholder::placeholder_icon;
use super::pngio::save_png;
use super::sizes::{IconSize, BASE_PIXEL_SIZE};

/// The filter used for every resize.
pub const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// Where a base image came from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Origin {
    /// Loaded from the user-supplied source file.
    File,
    /// Synthesized, and already written out as `Icon-1024.png`.
    Placeholder,
}

/// The canonical 1024x1024 image from which every icon size is resampled.
#[derive(Clone)]
pub struct BaseImage {
    image: RgbaImage,
    origin: Origin,
}

impl BaseImage {
    /// Returns the base bitmap.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns where the bitmap came from.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Consumes the base image, returning the bitmap.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Resolves the base image for a run.
///
/// If `input` names an existing file, it is loaded and resampled to
/// 1024x1024 when its dimensions differ (aspect ratio is not preserved).
/// Otherwise a placeholder is synthesized and written to `out_dir` as
/// `Icon-1024.png` before being returned.  The output directory must already
/// exist.
pub fn resolve_base(input: Option<&Path>, out_dir: &Path) -> Result<BaseImage> {
    if let Some(path) = input.filter(|path| path.exists()) {
        let image = normalize(load_image(path)?);
        return Ok(BaseImage { image, origin: Origin::File });
    }

    match input {
        Some(path) => log::info!("source image {} does not exist", path.display()),
        None => log::info!("no source image given"),
    }
    let image = placeholder_icon(BASE_PIXEL_SIZE);
    save_png(&image, &out_dir.join(IconSize::Px1024.filename()))?;
    Ok(BaseImage { image, origin: Origin::Placeholder })
}

/// Loads an image file of any supported format as RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    if is_jpeg2000(&data) {
        return load_jpeg2000(&data, path);
    }
    let image = image::load_from_memory(&data).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.into_rgba8())
}

/// Resamples `image` to the canonical base size if it is not already that
/// size.
pub fn normalize(image: RgbaImage) -> RgbaImage {
    if image.dimensions() == (BASE_PIXEL_SIZE, BASE_PIXEL_SIZE) {
        return image;
    }
    log::debug!(
        "resampling source from {}x{} to {}x{}",
        image.width(),
        image.height(),
        BASE_PIXEL_SIZE,
        BASE_PIXEL_SIZE
    );
    image::imageops::resize(&image, BASE_PIXEL_SIZE, BASE_PIXEL_SIZE, RESAMPLING_FILTER)
}

// JP2 container signature box, or a bare codestream's SOC + SIZ markers.
const JP2_SIGNATURE: &[u8] = b"\0\0\0\x0cjP  \r\n\x87\n";
const J2K_CODESTREAM: &[u8] = b"\xff\x4f\xff\x51";

fn is_jpeg2000(data: &[u8]) -> bool {
    data.starts_with(JP2_SIGNATURE) || data.starts_with(J2K_CODESTREAM)
}

#[cfg(feature = "jp2io")]
fn load_jpeg2000(data: &[u8], path: &Path) -> Result<RgbaImage> {
    super::jp2io::read_jp2(data, path)
}

#[cfg(not(feature = "jp2io"))]
fn load_jpeg2000(_data: &[u8], path: &Path) -> Result<RgbaImage> {
    Err(Error::Jpeg2000Unsupported { path: path.to_path_buf() })
}
