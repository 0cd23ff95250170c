//! The `Contents.json` descriptor Xcode reads from an `.appiconset`.
//!
//! The entries are fixed: they describe the iPhone and App Store slots only,
//! and are not cross-checked against the files actually written.

use serde::{Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::{Error, Result};
use super::sizes::IconSize;

/// The name of the manifest file within the output directory.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Device class an image slot applies to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Idiom {
    /// iPhone home screen, spotlight, settings and notification slots.
    #[serde(rename = "iphone")]
    Iphone,
    /// App Store listing.
    #[serde(rename = "ios-marketing")]
    IosMarketing,
}

/// Pixel density of an image slot relative to its point size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Scale {
    /// One pixel per point.
    #[serde(rename = "1x")]
    X1,
    /// Two pixels per point.
    #[serde(rename = "2x")]
    X2,
    /// Three pixels per point.
    #[serde(rename = "3x")]
    X3,
}

impl Scale {
    /// Returns the number of pixels per point.
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
            Scale::X3 => 3,
        }
    }
}

/// A square size in points, serialized as `"<N>x<N>"`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PointSize(pub u32);

impl fmt::Display for PointSize {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let &PointSize(points) = self;
        write!(out, "{}x{}", points, points)
    }
}

impl Serialize for PointSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One image slot in the manifest.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ImageEntry {
    /// Display size of the slot.
    pub size: PointSize,
    /// Device class.
    pub idiom: Idiom,
    /// Name of the PNG file filling the slot.
    pub filename: String,
    /// Pixel density of the slot.
    pub scale: Scale,
}

impl ImageEntry {
    fn new(points: u32, idiom: Idiom, icon: IconSize, scale: Scale) -> ImageEntry {
        ImageEntry {
            size: PointSize(points),
            idiom,
            filename: icon.filename(),
            scale,
        }
    }
}

/// Authoring metadata.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Info {
    /// Manifest format version.
    pub version: u32,
    /// Tool that authored the manifest.
    pub author: String,
}

/// The whole manifest.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Contents {
    /// Image slots, in order.
    pub images: Vec<ImageEntry>,
    /// Authoring metadata.
    pub info: Info,
}

impl Contents {
    /// Returns the fixed app icon manifest.
    pub fn app_icon() -> Contents {
        use self::Idiom::{IosMarketing, Iphone};
        use self::Scale::{X1, X2, X3};
        Contents {
            images: vec![
                ImageEntry::new(20, Iphone, IconSize::Px40, X2),
                ImageEntry::new(20, Iphone, IconSize::Px60, X3),
                ImageEntry::new(29, Iphone, IconSize::Px58, X2),
                ImageEntry::new(29, Iphone, IconSize::Px87, X3),
                ImageEntry::new(40, Iphone, IconSize::Px80, X2),
                ImageEntry::new(40, Iphone, IconSize::Px120, X3),
                ImageEntry::new(60, Iphone, IconSize::Px120, X2),
                ImageEntry::new(60, Iphone, IconSize::Px180, X3),
                ImageEntry::new(1024, IosMarketing, IconSize::Px1024, X1),
            ],
            info: Info {
                version: 1,
                author: "xcode".to_string(),
            },
        }
    }

    /// Writes the manifest as JSON with two-space indentation.
    pub fn write<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}

/// Writes the fixed manifest to `Contents.json` in `out_dir`, returning its
/// path.
pub fn write_contents_json(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(MANIFEST_FILENAME);
    let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    let mut output = BufWriter::new(file);
    Contents::app_icon()
        .write(&mut output)
        .map_err(|source| Error::Manifest { path: path.clone(), source })?;
    output.flush().map_err(|e| Error::io(&path, e))?;
    Ok(path)
}
