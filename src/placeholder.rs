//! Synthesizes a placeholder icon when no source image is available.

use ab_glyph::{FontVec, PxScale};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

/// Background and label color (`#FF69B4`).
pub const PINK: Rgba<u8> = Rgba([0xFF, 0x69, 0xB4, 0xFF]);

/// Fill color of the inscribed circle.
pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// The text drawn in the middle of the placeholder.
pub const LABEL: &str = "RB";

// Preferred label families, in order; the first one installed wins.
const FONT_FAMILIES: &[Family<'static>] = &[
    Family::Name("Helvetica"),
    Family::Name("Arial"),
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
    Family::SansSerif,
];

/// Creates a `size`x`size` placeholder icon: a white circle on a pink
/// background with the label centered on top.
///
/// A system font is used for the label when one can be found; otherwise the
/// label is drawn with a small built-in bitmap font.  This never fails.
pub fn placeholder_icon(size: u32) -> RgbaImage {
    let font = load_label_font();
    draw_placeholder(size, font.as_ref())
}

/// Looks up the label font among the host's installed fonts.
fn load_label_font() -> Option<FontVec> {
    let mut db = Database::new();
    db.load_system_fonts();
    select_label_font(&db)
}

/// Returns the first of [`FONT_FAMILIES`] present in `db` that parses as a
/// font, if any.
fn select_label_font(db: &Database) -> Option<FontVec> {
    for family in FONT_FAMILIES {
        let families = [*family];
        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = match db.query(&query) {
            Some(id) => id,
            None => continue,
        };
        let loaded = db.with_face_data(id, |data, index| {
            FontVec::try_from_vec_and_index(data.to_vec(), index)
        });
        match loaded {
            Some(Ok(font)) => {
                log::debug!("using label font {:?}", family);
                return Some(font);
            }
            Some(Err(err)) => log::debug!("skipping font {:?}: {}", family, err),
            None => log::debug!("font data for {:?} unavailable", family),
        }
    }
    log::debug!("no label font found, using built-in bitmap glyphs");
    None
}

fn draw_placeholder(size: u32, font: Option<&FontVec>) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size, size, PINK);
    if size == 0 {
        return image;
    }

    let margin = size / 10;
    let center = (size / 2) as i32;
    let radius = (size.saturating_sub(2 * margin) / 2) as i32;
    draw_filled_circle_mut(&mut image, (center, center), radius, WHITE);

    match font {
        Some(font) => draw_label_with_font(&mut image, font),
        None => draw_label_with_bitmap(&mut image),
    }
    image
}

fn draw_label_with_font(image: &mut RgbaImage, font: &FontVec) {
    let size = image.width();
    let scale = PxScale::from((size / 4) as f32);
    let (text_width, text_height) = text_size(scale, font, LABEL);
    let x = (size.saturating_sub(text_width) / 2) as i32;
    let y = (size.saturating_sub(text_height) / 2) as i32;
    draw_text_mut(image, PINK, x, y, scale, font, LABEL);
}

/// Draws the label with the built-in glyphs, scaled so the text is about a
/// quarter of the image tall and centered on the image center.
fn draw_label_with_bitmap(image: &mut RgbaImage) {
    let size = image.width();
    let dot = (size / 4 / GLYPH_HEIGHT).max(1);
    let glyph_count = LABEL.chars().count() as u32;
    if glyph_count == 0 {
        return;
    }
    let text_width = (glyph_count * (GLYPH_WIDTH + 1) - 1) * dot;
    let text_height = GLYPH_HEIGHT * dot;
    let left = size as i32 / 2 - text_width as i32 / 2;
    let top = size as i32 / 2 - text_height as i32 / 2;

    for (index, ch) in LABEL.chars().enumerate() {
        let rows = match glyph(ch) {
            Some(rows) => rows,
            None => continue,
        };
        let glyph_left = left + (index as u32 * (GLYPH_WIDTH + 1) * dot) as i32;
        for (row, bits) in rows.iter().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                    continue;
                }
                let x = glyph_left + (column * dot) as i32;
                let y = top + (row as u32 * dot) as i32;
                draw_filled_rect_mut(image, Rect::at(x, y).of_size(dot, dot), PINK);
            }
        }
    }
}

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// 5x7 glyphs for the characters of [`LABEL`]; bit 4 of each row is the
/// leftmost column.
fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    match ch {
        'B' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'R' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_requested_dimensions() {
        let image = placeholder_icon(64);
        assert_eq!(image.dimensions(), (64, 64));
    }

    #[test]
    fn corners_are_background_and_circle_is_white() {
        let image = draw_placeholder(200, None);
        assert_eq!(*image.get_pixel(0, 0), PINK);
        assert_eq!(*image.get_pixel(199, 199), PINK);
        assert_eq!(*image.get_pixel(5, 195), PINK);
        // Inside the circle, above the label.
        assert_eq!(*image.get_pixel(100, 40), WHITE);
        assert_eq!(*image.get_pixel(30, 100), WHITE);
    }

    #[test]
    fn bitmap_label_is_drawn_near_the_center() {
        let image = draw_placeholder(1024, None);
        let pink_in_circle = (312..712)
            .flat_map(|y| (312..712).map(move |x| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) == PINK)
            .count();
        assert!(pink_in_circle > 0);
        // Top-left dot of the 'R' stem.
        let dot = 1024 / 4 / GLYPH_HEIGHT;
        let text_width = (2 * (GLYPH_WIDTH + 1) - 1) * dot;
        let left = 512 - text_width / 2;
        let top = 512 - GLYPH_HEIGHT * dot / 2;
        assert_eq!(*image.get_pixel(left + 1, top + 1), PINK);
    }

    #[test]
    fn placeholder_is_deterministic() {
        assert!(placeholder_icon(128) == placeholder_icon(128));
    }

    #[test]
    fn label_glyphs_exist() {
        for ch in LABEL.chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {:?}", ch);
        }
        assert!(glyph('r').is_none());
    }

    #[test]
    fn zero_size_placeholder_is_empty() {
        let image = draw_placeholder(0, None);
        assert_eq!(image.dimensions(), (0, 0));
        assert_eq!(placeholder_icon(0).dimensions(), (0, 0));
    }

    #[test]
    fn empty_font_database_selects_nothing() {
        assert!(select_label_font(&Database::new()).is_none());
    }

    #[test]
    fn unparseable_font_data_is_skipped() {
        let mut db = Database::new();
        db.load_font_data(b"not a font".to_vec());
        assert!(select_label_font(&db).is_none());
    }

    #[test]
    fn system_font_label_stays_inside_the_circle() {
        let font = match load_label_font() {
            Some(font) => font,
            None => return,
        };
        let image = draw_placeholder(256, Some(&font));
        assert_eq!(*image.get_pixel(0, 0), PINK);
        let label_pixels = (64..192)
            .flat_map(|y| (64..192).map(move |x| (x, y)))
            .filter(|&(x, y)| *image.get_pixel(x, y) != WHITE)
            .count();
        assert!(label_pixels > 0);
    }
}
