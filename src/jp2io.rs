use hayro_jpeg2000::ColorSpace;
use image::RgbaImage;
use std::path::Path;

use super::error::{Error, Result};

/// Decodes a JPEG 2000 file (JP2 container or raw codestream) into an RGBA
/// bitmap.  Gray images are expanded to RGB; images without an alpha channel
/// become fully opaque.
pub fn read_jp2(input: &[u8], path: &Path) -> Result<RgbaImage> {
    let jp2_error = |message: String| Error::Jpeg2000 {
        path: path.to_path_buf(),
        message,
    };
    let image = hayro_jpeg2000::Image::new(
        input,
        &hayro_jpeg2000::DecodeSettings {
            resolve_palette_indices: true,
            strict: false,
            target_resolution: None,
        },
    )
    .map_err(|e| jp2_error(e.to_string()))?;

    let channels = match image.color_space() {
        ColorSpace::Gray => 1,
        ColorSpace::RGB => 3,
        ColorSpace::CMYK => {
            return Err(jp2_error("CMYK color space not supported".to_string()));
        }
        ColorSpace::Unknown { num_channels } => {
            return Err(jp2_error(format!(
                "unknown ({num_channels}-channel) color space not supported"
            )));
        }
        ColorSpace::Icc { .. } => {
            return Err(jp2_error("ICC profiles not supported".to_string()));
        }
    };
    let channels = if image.has_alpha() { channels + 1 } else { channels };
    let (width, height) = (image.width(), image.height());
    let data = image.decode().map_err(|e| jp2_error(e.to_string()))?;
    to_rgba(&data, width, height, channels).map_err(jp2_error)
}

/// Expands interleaved gray, gray+alpha, RGB or RGBA samples into an RGBA
/// bitmap.  Missing alpha becomes fully opaque.
fn to_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    channels: usize,
) -> std::result::Result<RgbaImage, String> {
    if !(1..=4).contains(&channels) {
        return Err(format!("{}-channel samples not supported", channels));
    }
    let num_pixels = (width as usize) * (height as usize);
    let expected = num_pixels * channels;
    if data.len() != expected {
        return Err(format!(
            "decoded {} bytes instead of {}",
            data.len(),
            expected
        ));
    }

    let mut rgba = Vec::with_capacity(num_pixels * 4);
    for pixel in data.chunks_exact(channels) {
        match *pixel {
            [gray] => rgba.extend_from_slice(&[gray, gray, gray, u8::MAX]),
            [gray, alpha] => rgba.extend_from_slice(&[gray, gray, gray, alpha]),
            [r, g, b] => rgba.extend_from_slice(&[r, g, b, u8::MAX]),
            [r, g, b, a] => rgba.extend_from_slice(&[r, g, b, a]),
            _ => unreachable!(),
        }
    }
    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| "pixel buffer size mismatch".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_rejected() {
        let path = Path::new("broken.jp2");
        match read_jp2(b"\0\0\0\x0cjP  \r\n\x87\nnot really", path) {
            Err(Error::Jpeg2000 { path: failed, .. }) => {
                assert_eq!(failed, path)
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn gray_expands_to_opaque_rgba() {
        let image = to_rgba(&[0, 100, 200, 255], 2, 2, 1).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0).0, [100, 100, 100, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [200, 200, 200, 255]);
    }

    #[test]
    fn gray_alpha_keeps_alpha() {
        let image = to_rgba(&[10, 20, 30, 40], 2, 1, 2).unwrap();
        assert_eq!(image.as_raw(), &vec![10, 10, 10, 20, 30, 30, 30, 40]);
    }

    #[test]
    fn rgb_becomes_opaque() {
        let image = to_rgba(&[1, 2, 3, 4, 5, 6], 1, 2, 3).unwrap();
        assert_eq!(image.as_raw(), &vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn rgba_is_copied() {
        let data = [9, 8, 7, 6, 5, 4, 3, 2];
        let image = to_rgba(&data, 2, 1, 4).unwrap();
        assert_eq!(image.as_raw().as_slice(), &data[..]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            to_rgba(&[1, 2, 3, 4, 5], 1, 2, 3).unwrap_err(),
            "decoded 5 bytes instead of 6"
        );
        assert!(to_rgba(&[1, 2, 3, 4, 5], 1, 1, 5).is_err());
    }
}
