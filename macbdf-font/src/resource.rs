//! Immutable view over a `FONT`/`NFNT` resource buffer.
//!
//! Layout, in order:
//! - 26-byte header of big-endian 16-bit fields;
//! - bit image: `rowWords * fRectHeight` words, row-major, MSB-first —
//!   one packed monochrome bitmap shared by all glyphs;
//! - location table: `(lastChar - firstChar + 2)` words, one column
//!   boundary per glyph in range plus a trailing sentinel; glyph `g`
//!   occupies image columns `[loc[g], loc[g+1])`;
//! - offset/width table: one word per glyph in range, high byte left
//!   bearing, low byte advance width.
//!
//! The header's `owtLoc` field nominally points at the offset/width
//! table but historically overflows for large bitmaps; the table is
//! addressed from the location table's extent instead, and `owtLoc` is
//! decoded only for layout fidelity.

use crate::bytes;
use crate::error::DecodeError;

/// Size of the fixed resource header in bytes.
pub const HEADER_LEN: usize = 26;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Decoded fixed header of a font resource.
///
/// `font_type`, `wid_max`, `n_descent` and `owt_loc` take no part in the
/// conversion; they are decoded so the whole header round-trips into
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontHeader {
    pub font_type: u16,
    /// First character code in range (inclusive).
    pub first_char: u16,
    /// Last character code in range (inclusive).
    pub last_char: u16,
    pub wid_max: i16,
    /// Signed global left-bearing adjustment.
    pub kern_max: i16,
    pub n_descent: i16,
    /// Glyph cell width in pixels.
    pub rect_width: u16,
    /// Glyph cell height in pixels.
    pub rect_height: u16,
    /// Legacy offset-table pointer, superseded by location-table
    /// arithmetic.
    pub owt_loc: u16,
    pub ascent: i16,
    pub descent: i16,
    pub leading: i16,
    /// Bit image row stride in 16-bit words.
    pub row_words: u16,
}

impl FontHeader {
    /// Decode the header fields. `buf` must hold at least
    /// [`HEADER_LEN`] bytes.
    fn decode(buf: &[u8]) -> Self {
        Self {
            font_type: bytes::read_u16(buf, 0),
            first_char: bytes::read_u16(buf, 2),
            last_char: bytes::read_u16(buf, 4),
            wid_max: bytes::read_i16(buf, 6),
            kern_max: bytes::read_i16(buf, 8),
            n_descent: bytes::read_i16(buf, 10),
            rect_width: bytes::read_u16(buf, 12),
            rect_height: bytes::read_u16(buf, 14),
            owt_loc: bytes::read_u16(buf, 16),
            ascent: bytes::read_i16(buf, 18),
            descent: bytes::read_i16(buf, 20),
            leading: bytes::read_i16(buf, 22),
            row_words: bytes::read_u16(buf, 24),
        }
    }

    /// Number of columns in the bit image.
    #[must_use]
    pub fn image_columns(&self) -> u32 {
        u32::from(self.row_words) * 16
    }
}

// ---------------------------------------------------------------------------
// FontResource
// ---------------------------------------------------------------------------

/// Read-only view over one font resource's bytes.
///
/// [`FontResource::parse`] validates every declared table extent, so all
/// accessors afterwards index the buffer infallibly.
#[derive(Debug, Clone, Copy)]
pub struct FontResource<'a> {
    buf: &'a [u8],
    header: FontHeader,
}

impl<'a> FontResource<'a> {
    /// Validate and wrap a font resource buffer.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Truncated`] if the buffer cannot hold the
    ///   header plus the table extents the header declares;
    /// - [`DecodeError::BadCharRange`] if `lastChar < firstChar`;
    /// - [`DecodeError::LocationOutOfRange`] /
    ///   [`DecodeError::LocationOrder`] if a location-table entry would
    ///   force an out-of-range or backwards bit-image read.
    pub fn parse(buf: &'a [u8]) -> Result<Self, DecodeError> {
        if buf.len() < HEADER_LEN {
            return Err(DecodeError::Truncated {
                needed: HEADER_LEN,
                actual: buf.len(),
            });
        }
        let header = FontHeader::decode(buf);
        if header.last_char < header.first_char {
            return Err(DecodeError::BadCharRange {
                first: header.first_char,
                last: header.last_char,
            });
        }

        let font = Self { buf, header };
        let needed = HEADER_LEN + font.bit_image_len() + font.location_len() + font.offset_len();
        if buf.len() < needed {
            return Err(DecodeError::Truncated {
                needed,
                actual: buf.len(),
            });
        }

        let columns = header.image_columns();
        let mut prev = 0u16;
        for index in 0..=font.glyph_slots() {
            let column = font.location(index);
            if index > 0 && column < prev {
                return Err(DecodeError::LocationOrder { index });
            }
            if u32::from(column) > columns {
                return Err(DecodeError::LocationOutOfRange {
                    index,
                    column,
                    columns,
                });
            }
            prev = column;
        }

        Ok(font)
    }

    /// The decoded fixed header.
    #[must_use]
    pub const fn header(&self) -> &FontHeader {
        &self.header
    }

    /// `firstChar == lastChar` marks a resource with no glyphs at all;
    /// such a resource produces no output anywhere downstream.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.header.first_char == self.header.last_char
    }

    /// Number of glyph slots in the character range (when non-empty).
    #[must_use]
    pub fn glyph_slots(&self) -> usize {
        usize::from(self.header.last_char - self.header.first_char) + 1
    }

    /// Column span `[start, end)` of the glyph in `slot` (0-based from
    /// `firstChar`). Equal boundaries mean the glyph has no image.
    #[must_use]
    pub fn span(&self, slot: usize) -> (u16, u16) {
        (self.location(slot), self.location(slot + 1))
    }

    /// Raw offset/width entry for `slot`: high byte left bearing, low
    /// byte advance width.
    #[must_use]
    pub fn offset_width(&self, slot: usize) -> u16 {
        let base = HEADER_LEN + self.bit_image_len() + self.location_len();
        bytes::read_u16(self.buf, base + slot * 2)
    }

    /// Decode the packed bit image into a word buffer.
    ///
    /// The caller-supplied slice has no alignment guarantee; one decode
    /// pass here also keeps the big-endian conversion out of the
    /// per-bit loops downstream.
    #[must_use]
    pub(crate) fn bit_image(&self) -> BitImage {
        let words = usize::from(self.header.row_words) * usize::from(self.header.rect_height);
        let image = (0..words)
            .map(|w| bytes::read_u16(self.buf, HEADER_LEN + w * 2))
            .collect();
        BitImage {
            words: image,
            row_words: usize::from(self.header.row_words),
        }
    }

    fn bit_image_len(&self) -> usize {
        usize::from(self.header.row_words) * usize::from(self.header.rect_height) * 2
    }

    fn location_len(&self) -> usize {
        (self.glyph_slots() + 1) * 2
    }

    fn offset_len(&self) -> usize {
        self.glyph_slots() * 2
    }

    fn location(&self, index: usize) -> u16 {
        bytes::read_u16(self.buf, HEADER_LEN + self.bit_image_len() + index * 2)
    }
}

// ---------------------------------------------------------------------------
// BitImage
// ---------------------------------------------------------------------------

/// Word-decoded working copy of the packed bit image.
#[derive(Debug, Clone)]
pub(crate) struct BitImage {
    words: Vec<u16>,
    row_words: usize,
}

impl BitImage {
    /// Whether the pixel at (`row`, `col`) is set. MSB-first within
    /// each word.
    pub(crate) fn bit(&self, row: usize, col: usize) -> bool {
        self.words[row * self.row_words + col / 16] >> (15 - col % 16) & 1 != 0
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------
