//! Library for generating an iOS app icon set from a single image
//!
//! A run resolves a 1024x1024 base image (from a source file, or a
//! synthesized placeholder), resamples it to every size in [`IconSize::ALL`]
//! and writes each as `Icon-<N>.png`, then writes the `Contents.json`
//! manifest Xcode expects next to them.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = appicon::generate_icons(
//!     Some(Path::new("logo.png")),
//!     Path::new("AppIcons"),
//!     |_| {},
//! )?;
//! println!("wrote {} icons", report.icons.len());
//! # Ok::<(), appicon::Error>(())
//! ```

#![warn(missing_docs)]

mod error;
mod generate;
#[cfg(feature = "jp2io")]
mod jp2io;
pub mod manifest;
pub mod placeholder;
mod pngio;
mod sizes;
mod source;

pub use error::{Error, Result};
pub use generate::{
    generate_icons, resize_square, write_icons, Event, Report,
    DEFAULT_OUTPUT_DIR,
};
pub use manifest::{write_contents_json, Contents, MANIFEST_FILENAME};
pub use placeholder::placeholder_icon;
pub use pngio::{save_png, write_png};
pub use sizes::{IconSize, BASE_PIXEL_SIZE};
pub use source::{
    load_image, normalize, resolve_base, BaseImage, Origin,
    RESAMPLING_FILTER,
};
