//! Font-wide ink metrics.
//!
//! Every glyph image is overlaid into one glyph-cell mask at its
//! horizontal placement offset (`left bearing + kernMax`), then the
//! mask is scanned once for the minimal rectangle containing ink. The
//! resulting box and the non-empty glyph count feed the BDF
//! `FONTBOUNDINGBOX` and `CHARS` fields verbatim.

use crate::resource::FontResource;

// ---------------------------------------------------------------------------
// FontMetrics
// ---------------------------------------------------------------------------

/// Ink bounding box and glyph count for a whole font.
///
/// Coordinates are pixel rows/columns of the glyph cell; `left` and
/// `right` include the `kernMax` adjustment. When no pixel is set the
/// box keeps its scan sentinels (`top` = cell height, `bottom` = 0,
/// `left` = cell width + kernMax, `right` = kernMax).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    /// Number of glyphs with a non-empty location span.
    pub glyph_count: u32,
}

impl FontMetrics {
    /// Metrics of a font with no glyphs at all.
    pub const EMPTY: Self = Self {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
        glyph_count: 0,
    };

    /// Bounding box width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Bounding box height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }
}

// ---------------------------------------------------------------------------
// Metrics computation
// ---------------------------------------------------------------------------

/// Compute the font-wide ink bounding box and glyph count.
///
/// A resource with `firstChar == lastChar` yields
/// [`FontMetrics::EMPTY`] without touching any table.
#[must_use]
pub fn compute_metrics(font: &FontResource) -> FontMetrics {
    let h = *font.header();
    if font.is_empty() {
        return FontMetrics::EMPTY;
    }

    let width = i32::from(h.rect_width);
    let image = font.bit_image();
    let mut mask = CellMask::new(usize::from(h.rect_width), usize::from(h.rect_height));
    let mut glyph_count = 0u32;

    for slot in 0..font.glyph_slots() {
        let (start, end) = font.span(slot);
        if start == end {
            continue;
        }
        let left_bearing = i32::from(font.offset_width(slot) >> 8 & 0xFF);
        let xoff = left_bearing + i32::from(h.kern_max);

        for row in 0..usize::from(h.rect_height) {
            for col in start..end {
                // Columns shifted off either edge of the cell are
                // dropped, never wrapped.
                let dst = i32::from(col - start) + xoff;
                if dst < 0 || dst >= width {
                    continue;
                }
                if image.bit(row, usize::from(col)) {
                    mask.set(row, dst as usize);
                }
            }
        }
        glyph_count += 1;
    }

    let (top, bottom) = mask.vertical_extent();
    let (left, right) = mask.horizontal_extent();
    FontMetrics {
        top,
        left: left + i32::from(h.kern_max),
        bottom,
        right: right + i32::from(h.kern_max),
        glyph_count,
    }
}

// ---------------------------------------------------------------------------
// CellMask
// ---------------------------------------------------------------------------

/// One glyph cell's worth of pixels, row-major.
pub(crate) struct CellMask {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl CellMask {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![0; width * height],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize) {
        self.bits[row * self.width + col] = 1;
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.width + col] != 0
    }

    /// First and last row containing ink. Sentinels
    /// `(height, 0)` when the mask is blank.
    pub(crate) fn vertical_extent(&self) -> (i32, i32) {
        let mut top = self.height as i32;
        let mut bottom = 0i32;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col) {
                    top = top.min(row as i32);
                    bottom = bottom.max(row as i32);
                }
            }
        }
        (top, bottom)
    }

    /// First and last column containing ink. Sentinels
    /// `(width, 0)` when the mask is blank.
    fn horizontal_extent(&self) -> (i32, i32) {
        let mut left = self.width as i32;
        let mut right = 0i32;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(row, col) {
                    left = left.min(col as i32);
                    right = right.max(col as i32);
                }
            }
        }
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::fixtures::{empty_font, single_a};

    #[test]
    fn single_pixel_font_bounds() {
        let buf = single_a().build();
        let font = FontResource::parse(&buf).unwrap();
        let m = compute_metrics(&font);
        assert_eq!(m.glyph_count, 1);
        assert_eq!((m.top, m.bottom), (3, 3));
        assert_eq!((m.left, m.right), (0, 0));
        assert_eq!((m.width(), m.height()), (1, 1));
    }

    #[test]
    fn empty_font_yields_empty_metrics() {
        let buf = empty_font().build();
        let font = FontResource::parse(&buf).unwrap();
        assert_eq!(compute_metrics(&font), FontMetrics::EMPTY);
    }

    #[test]
    fn kern_max_shifts_left_and_right() {
        // Pixel at span column 1, left bearing 1, kernMax -2: the pixel
        // lands at cell column 0 and the box edges carry the kernMax
        // adjustment.
        let mut fixture = single_a();
        fixture.image_words[3] = 0x4000; // column 1
        fixture.kern_max = -2;
        fixture.offset_widths[0] = 0x0105;
        let buf = fixture.build();
        let font = FontResource::parse(&buf).unwrap();
        let m = compute_metrics(&font);
        assert_eq!((m.left, m.right), (-2, -2));
        assert_eq!((m.top, m.bottom), (3, 3));
    }

    #[test]
    fn columns_shifted_off_the_left_edge_are_dropped() {
        // xoff = 0 + (-3): span column 0's pixel would land at -3.
        let mut fixture = single_a();
        fixture.kern_max = -3;
        let buf = fixture.build();
        let font = FontResource::parse(&buf).unwrap();
        let m = compute_metrics(&font);
        // Still counted as a glyph, but no ink reached the mask.
        assert_eq!(m.glyph_count, 1);
        assert!(m.top > m.bottom, "expected degenerate box, got {m:?}");
    }

    #[test]
    fn columns_shifted_off_the_right_edge_are_dropped() {
        let mut fixture = single_a();
        fixture.offset_widths[0] = 0x7F05; // left bearing 127
        let buf = fixture.build();
        let font = FontResource::parse(&buf).unwrap();
        let m = compute_metrics(&font);
        assert_eq!(m.glyph_count, 1);
        assert!(m.top > m.bottom, "expected degenerate box, got {m:?}");
    }

    #[test]
    fn overlapping_glyphs_accumulate_into_one_box() {
        // Two glyphs with ink on different rows; the box spans both.
        let mut image_words = vec![0u16; 8];
        image_words[1] = 0x8000; // glyph A, span [0,4), column 0
        image_words[6] = 0x0800; // glyph B, span [4,8), column 4
        let fixture = crate::resource::fixtures::FontFixture {
            first_char: 65,
            last_char: 66,
            kern_max: 0,
            rect_width: 8,
            rect_height: 8,
            ascent: 6,
            descent: 2,
            row_words: 1,
            image_words,
            locations: vec![0, 4, 8],
            offset_widths: vec![0x0004, 0x0004],
        };
        let buf = fixture.build();
        let font = FontResource::parse(&buf).unwrap();
        let m = compute_metrics(&font);
        assert_eq!(m.glyph_count, 2);
        assert_eq!((m.top, m.bottom), (1, 6));
        assert_eq!((m.left, m.right), (0, 0));
    }
}
