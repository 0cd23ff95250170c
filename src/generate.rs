use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Error, Result};
use super::manifest::write_contents_json;
use super::pngio::save_png;
use super::sizes::IconSize;
use super::source::{resolve_base, BaseImage, Origin, RESAMPLING_FILTER};

/// Directory the command-line tool writes into, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_DIR: &str = "AppIcons";

/// Progress notifications emitted during a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// No usable source image was given; a placeholder was synthesized and
    /// written as `Icon-1024.png`.
    PlaceholderCreated {
        /// Where the placeholder was written.
        path: PathBuf,
    },
    /// One icon size was resampled and written.
    IconWritten {
        /// The size written.
        size: IconSize,
        /// Where it was written.
        path: PathBuf,
    },
}

/// What a successful run produced.
#[derive(Clone, Debug)]
pub struct Report {
    /// Where the base image came from.
    pub origin: Origin,
    /// Icon files written by the resize loop, in table order.  When the base
    /// is a placeholder, `Icon-1024.png` was written during resolution and is
    /// not listed here.
    pub icons: Vec<PathBuf>,
    /// Path of the manifest.
    pub manifest: PathBuf,
}

/// Resamples `image` to a `pixels`x`pixels` square.
pub fn resize_square(image: &RgbaImage, pixels: u32) -> RgbaImage {
    if image.dimensions() == (pixels, pixels) {
        return image.clone();
    }
    image::imageops::resize(image, pixels, pixels, RESAMPLING_FILTER)
}

/// Writes one PNG per entry of the size table into `out_dir`, skipping the
/// 1024 entry when the base is a placeholder (it was already written).
/// `on_written` is called after each file is complete.  Stops at the first
/// error.
pub fn write_icons<F>(
    base: &BaseImage,
    out_dir: &Path,
    mut on_written: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(IconSize, &Path),
{
    let mut written = Vec::new();
    for size in IconSize::ALL {
        if size.is_base() && base.origin() == Origin::Placeholder {
            continue;
        }
        let resized = resize_square(base.image(), size.pixel_size());
        let path = out_dir.join(size.filename());
        save_png(&resized, &path)?;
        log::debug!("wrote {}", path.display());
        on_written(size, &path);
        written.push(path);
    }
    Ok(written)
}

/// Runs a whole generation: creates `out_dir` if needed, resolves the base
/// image from `input`, writes every icon size and finally the manifest.
pub fn generate_icons<F>(
    input: Option<&Path>,
    out_dir: &Path,
    mut on_event: F,
) -> Result<Report>
where
    F: FnMut(Event),
{
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let base = resolve_base(input, out_dir)?;
    if base.origin() == Origin::Placeholder {
        on_event(Event::PlaceholderCreated {
            path: out_dir.join(IconSize::Px1024.filename()),
        });
    }

    let icons = write_icons(&base, out_dir, |size, path| {
        on_event(Event::IconWritten { size, path: path.to_path_buf() })
    })?;
    let manifest = write_contents_json(out_dir)?;
    log::info!(
        "generated {} icon(s) and {} in {}",
        icons.len(),
        manifest.display(),
        out_dir.display()
    );
    Ok(Report { origin: base.origin(), icons, manifest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn resize_square_hits_every_table_size() {
        let image = RgbaImage::from_pixel(1024, 1024, Rgba([9, 8, 7, 255]));
        for size in IconSize::ALL {
            let pixels = size.pixel_size();
            assert_eq!(resize_square(&image, pixels).dimensions(), (pixels, pixels));
        }
    }

    #[test]
    fn resize_square_to_own_size_is_a_copy() {
        let mut image = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 255]));
        image.put_pixel(3, 4, Rgba([255, 0, 0, 128]));
        assert!(resize_square(&image, 32) == image);
    }

    #[test]
    fn placeholder_run_reports_events_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("AppIcons");
        let mut events = Vec::new();
        let report = generate_icons(None, &out_dir, |event| events.push(event)).unwrap();

        assert_eq!(report.origin, Origin::Placeholder);
        assert_eq!(report.icons.len(), 12);
        assert_eq!(events.len(), 13);
        assert_eq!(
            events[0],
            Event::PlaceholderCreated { path: out_dir.join("Icon-1024.png") }
        );
        assert_eq!(
            events[1],
            Event::IconWritten { size: IconSize::Px20, path: out_dir.join("Icon-20.png") }
        );
        assert!(!events[1..].iter().any(|event| matches!(
            event,
            Event::IconWritten { size: IconSize::Px1024, .. }
        )));
        assert_eq!(report.manifest, out_dir.join("Contents.json"));
        assert!(report.manifest.is_file());
    }
}
