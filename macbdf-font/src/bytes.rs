//! Big-endian integer decoding for resource byte buffers.
//!
//! All Macintosh resource structures are stored big-endian with no
//! alignment guarantees, so everything is read as raw bytes at an
//! explicit offset. These helpers have no error path: they operate on
//! slices the caller has already bounds-checked, and an out-of-range
//! offset is a contract violation (it panics via the slice index).

/// Read a big-endian unsigned 16-bit value at `offset`.
#[must_use]
pub fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

/// Read a big-endian signed 16-bit value at `offset`.
#[must_use]
pub fn read_i16(buf: &[u8], offset: usize) -> i16 {
    read_u16(buf, offset) as i16
}

/// Read a big-endian unsigned 32-bit value at `offset`.
#[must_use]
pub fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Read a big-endian signed 32-bit value at `offset`.
#[must_use]
pub fn read_i32(buf: &[u8], offset: usize) -> i32 {
    read_u32(buf, offset) as i32
}

/// Read a big-endian unsigned 24-bit value at `offset`.
///
/// Resource reference entries store their data offset in three bytes.
#[must_use]
pub fn read_u24(buf: &[u8], offset: usize) -> u32 {
    u32::from(buf[offset]) << 16 | u32::from(buf[offset + 1]) << 8 | u32::from(buf[offset + 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_is_big_endian() {
        assert_eq!(read_u16(&[0x12, 0x34], 0), 0x1234);
        assert_eq!(read_u16(&[0x00, 0x12, 0x34], 1), 0x1234);
    }

    #[test]
    fn i16_reinterprets_the_same_bits() {
        assert_eq!(read_i16(&[0xFF, 0xFF], 0), -1);
        assert_eq!(read_i16(&[0x80, 0x00], 0), i16::MIN);
        assert_eq!(read_i16(&[0x7F, 0xFF], 0), i16::MAX);
    }

    #[test]
    fn u32_is_big_endian() {
        assert_eq!(read_u32(&[0xDE, 0xAD, 0xBE, 0xEF], 0), 0xDEAD_BEEF);
    }

    #[test]
    fn i32_reinterprets_the_same_bits() {
        assert_eq!(read_i32(&[0xFF, 0xFF, 0xFF, 0xFE], 0), -2);
    }

    #[test]
    fn u24_reads_three_bytes() {
        assert_eq!(read_u24(&[0x01, 0x02, 0x03], 0), 0x0001_0203);
        assert_eq!(read_u24(&[0xFF, 0xFF, 0xFF, 0x00], 0), 0x00FF_FFFF);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_bounds_read_panics() {
        let _ = read_u16(&[0x12], 0);
    }
}
