//! Per-glyph image extraction.
//!
//! A glyph's pixels live in the shared bit image at the column span the
//! location table gives it. Extraction copies that span into a fresh
//! mask with no horizontal shift — the `left bearing + kernMax` offset
//! only participates in the font-wide box, while a glyph's own BDF
//! record is relative to its own cell — then crops to vertical ink
//! extent.

use crate::metrics::CellMask;
use crate::resource::{BitImage, FontResource};

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// One extracted glyph: geometry plus the cropped pixel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Character code.
    pub code: u16,
    /// Column span width in the bit image.
    pub width: u16,
    /// First row containing ink (cell-relative).
    pub top: i32,
    /// Last row containing ink (cell-relative).
    pub bottom: i32,
    /// Advance width (offset/width entry low byte).
    pub advance: u8,
    /// Left bearing (offset/width entry high byte).
    pub left_bearing: u8,
    rows: Vec<Vec<bool>>,
}

impl Glyph {
    /// Cropped pixel rows, `top` through `bottom` inclusive, each
    /// `width` columns wide. Empty when the span held no ink.
    #[must_use]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Ink height in rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

impl<'a> FontResource<'a> {
    /// Iterate the non-empty glyphs in ascending character-code order.
    ///
    /// Glyphs whose location span is empty are skipped entirely, so the
    /// iterator's length always equals the metrics engine's glyph
    /// count.
    #[must_use]
    pub fn glyphs(&self) -> GlyphIter<'a> {
        GlyphIter {
            font: *self,
            image: self.bit_image(),
            slot: 0,
        }
    }
}

/// Iterator over a font's non-empty glyphs.
pub struct GlyphIter<'a> {
    font: FontResource<'a>,
    image: BitImage,
    slot: usize,
}

impl Iterator for GlyphIter<'_> {
    type Item = Glyph;

    fn next(&mut self) -> Option<Glyph> {
        if self.font.is_empty() {
            return None;
        }
        while self.slot < self.font.glyph_slots() {
            let slot = self.slot;
            self.slot += 1;
            let (start, end) = self.font.span(slot);
            if start == end {
                continue;
            }
            return Some(extract(&self.font, &self.image, slot, start, end));
        }
        None
    }
}

/// Copy one glyph's span out of the bit image and crop it vertically.
fn extract(
    font: &FontResource,
    image: &BitImage,
    slot: usize,
    start: u16,
    end: u16,
) -> Glyph {
    let h = font.header();
    let entry = font.offset_width(slot);
    let span_width = usize::from(end - start);
    let height = usize::from(h.rect_height);

    // The mask holds only the span's columns.
    let mut mask = CellMask::new(span_width, height);
    for row in 0..height {
        for col in start..end {
            if image.bit(row, usize::from(col)) {
                mask.set(row, usize::from(col - start));
            }
        }
    }

    let (top, bottom) = mask.vertical_extent();
    let rows = (top..=bottom)
        .map(|row| {
            (0..span_width)
                .map(|col| mask.get(row as usize, col))
                .collect()
        })
        .collect();

    Glyph {
        code: h.first_char + slot as u16,
        width: end - start,
        top,
        bottom,
        advance: (entry & 0xFF) as u8,
        left_bearing: (entry >> 8 & 0xFF) as u8,
        rows,
    }
}
