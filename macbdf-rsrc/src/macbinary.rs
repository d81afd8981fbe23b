//! MacBinary container split.
//!
//! A MacBinary file is a 128-byte header, the data fork padded to a
//! 128-byte boundary, then the resource fork. The header fields we
//! care about: version byte 0 at offset 0, filename length at 1, the
//! big-endian data-fork length at 83 and resource-fork length at 87.

use macbdf_font::bytes;

use crate::error::{need, ForkError};

/// MacBinary header length, which is also the fork padding quantum.
pub const HEADER_LEN: usize = 128;

const DATA_LEN_OFFSET: usize = 83;
const RSRC_LEN_OFFSET: usize = 87;

/// Whether `file` plausibly starts with a MacBinary header.
#[must_use]
pub fn is_macbinary(file: &[u8]) -> bool {
    file.len() >= HEADER_LEN
        && file[0] == 0
        && (1..=63).contains(&file[1])
        && file[74] == 0
        && file[82] == 0
}

/// Slice the resource fork out of a MacBinary file.
///
/// # Errors
///
/// [`ForkError::NotMacBinary`] when the header checks fail,
/// [`ForkError::Truncated`] when the declared fork extends past the
/// file.
pub fn resource_fork(file: &[u8]) -> Result<&[u8], ForkError> {
    if !is_macbinary(file) {
        return Err(ForkError::NotMacBinary);
    }
    let data_len = bytes::read_u32(file, DATA_LEN_OFFSET) as usize;
    let rsrc_len = bytes::read_u32(file, RSRC_LEN_OFFSET) as usize;
    let fork_start = HEADER_LEN + data_len.div_ceil(HEADER_LEN) * HEADER_LEN;
    need(file, fork_start, rsrc_len, "resource fork")?;
    Ok(&file[fork_start..fork_start + rsrc_len])
}
