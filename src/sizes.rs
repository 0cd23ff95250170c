use std::fmt;

/// The side length, in pixels, of the canonical base image from which every
/// other size is resampled.
pub const BASE_PIXEL_SIZE: u32 = 1024;

/// The square icon sizes generated for an app icon set.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum IconSize {
    /// 20x20 notification icon.
    Px20,
    /// 29x29 settings icon.
    Px29,
    /// 40x40 spotlight icon (also notification @2x).
    Px40,
    /// 58x58 settings icon @2x.
    Px58,
    /// 60x60 notification icon @3x.
    Px60,
    /// 76x76 iPad app icon.
    Px76,
    /// 80x80 spotlight icon @2x.
    Px80,
    /// 87x87 settings icon @3x.
    Px87,
    /// 120x120 iPhone app icon @2x (also spotlight @3x).
    Px120,
    /// 152x152 iPad app icon @2x.
    Px152,
    /// 167x167 iPad Pro app icon.
    Px167,
    /// 180x180 iPhone app icon @3x.
    Px180,
    /// 1024x1024 App Store marketing icon.
    Px1024,
}

impl IconSize {
    /// Every generated size, in the order the files are written.
    pub const ALL: [IconSize; 13] = [
        IconSize::Px20,
        IconSize::Px29,
        IconSize::Px40,
        IconSize::Px58,
        IconSize::Px60,
        IconSize::Px76,
        IconSize::Px80,
        IconSize::Px87,
        IconSize::Px120,
        IconSize::Px152,
        IconSize::Px167,
        IconSize::Px180,
        IconSize::Px1024,
    ];

    /// Get the icon size with the given side length, if any.
    ///
    /// # Examples
    /// ```
    /// use appicon::IconSize;
    /// assert_eq!(IconSize::from_pixel_size(87), Some(IconSize::Px87));
    /// assert_eq!(IconSize::from_pixel_size(64), None);
    /// ```
    pub fn from_pixel_size(pixels: u32) -> Option<IconSize> {
        IconSize::ALL.iter().copied().find(|size| size.pixel_size() == pixels)
    }

    /// Returns the side length of this icon, in pixels.
    pub fn pixel_size(self) -> u32 {
        match self {
            IconSize::Px20 => 20,
            IconSize::Px29 => 29,
            IconSize::Px40 => 40,
            IconSize::Px58 => 58,
            IconSize::Px60 => 60,
            IconSize::Px76 => 76,
            IconSize::Px80 => 80,
            IconSize::Px87 => 87,
            IconSize::Px120 => 120,
            IconSize::Px152 => 152,
            IconSize::Px167 => 167,
            IconSize::Px180 => 180,
            IconSize::Px1024 => 1024,
        }
    }

    /// Returns the base name of the output file, without extension (e.g.
    /// `Icon-120`).
    pub fn name(self) -> String {
        format!("Icon-{}", self.pixel_size())
    }

    /// Returns the name of the PNG file written for this size.
    ///
    /// # Examples
    /// ```
    /// use appicon::IconSize;
    /// assert_eq!(IconSize::Px1024.filename(), "Icon-1024.png");
    /// ```
    pub fn filename(self) -> String {
        format!("{}.png", self.name())
    }

    /// Returns true if this is the size of the canonical base image.
    pub fn is_base(self) -> bool {
        self.pixel_size() == BASE_PIXEL_SIZE
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let pixels = self.pixel_size();
        write!(out, "{}x{}", pixels, pixels)
    }
}
