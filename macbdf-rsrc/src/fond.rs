//! `FOND` family resource decoding.
//!
//! A `FOND` describes a font family: a 52-byte header (family flags,
//! id, global metrics, table offsets) followed by the font association
//! table, which is what actually binds `FONT`/`NFNT` resource ids to
//! point sizes and styles. Only the association table matters here.

use macbdf_font::bytes;

use crate::error::{need, ForkError};

/// Fixed `FOND` header length, up to the association table.
pub const HEADER_LEN: usize = 52;

/// One association-table entry: this family at `size`/`style` lives in
/// font resource `font_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontAssociation {
    pub size: u16,
    pub style: u16,
    pub font_id: i16,
}

/// Decode the font association table of a `FOND` resource.
///
/// # Errors
///
/// [`ForkError::Truncated`] when the header or the declared entries
/// overrun the resource data.
pub fn associations(data: &[u8]) -> Result<Vec<FontAssociation>, ForkError> {
    need(data, HEADER_LEN, 2, "FOND association count")?;
    // Stored as count minus one.
    let count = bytes::read_u16(data, HEADER_LEN).wrapping_add(1) as usize;
    need(data, HEADER_LEN + 2, count * 6, "FOND association table")?;

    let mut table = Vec::with_capacity(count);
    for index in 0..count {
        let offset = HEADER_LEN + 2 + index * 6;
        table.push(FontAssociation {
            size: bytes::read_u16(data, offset),
            style: bytes::read_u16(data, offset + 2),
            font_id: bytes::read_i16(data, offset + 4),
        });
    }
    Ok(table)
}
