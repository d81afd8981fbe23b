//! Font resource decoding errors.
//!
//! Preconditions are validated once, up front, so that every table
//! access after a successful parse is in bounds by construction.

use std::fmt;

/// Errors produced while validating a `FONT`/`NFNT` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer is shorter than the header plus the table extents the
    /// header declares.
    Truncated {
        /// Bytes required by the declared layout.
        needed: usize,
        /// Bytes actually present.
        actual: usize,
    },
    /// `lastChar` precedes `firstChar`.
    BadCharRange {
        first: u16,
        last: u16,
    },
    /// A location-table entry points past the bit image's column count.
    LocationOutOfRange {
        /// Index of the offending entry.
        index: usize,
        /// The entry's column value.
        column: u16,
        /// Number of columns in the bit image (`rowWords * 16`, which
        /// can exceed `u16::MAX`).
        columns: u32,
    },
    /// A location-table entry is smaller than its predecessor.
    LocationOrder {
        /// Index of the entry that decreased.
        index: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, actual } => {
                write!(
                    f,
                    "font resource truncated: layout needs {needed} bytes, got {actual}"
                )
            }
            Self::BadCharRange { first, last } => {
                write!(f, "bad character range: firstChar {first} > lastChar {last}")
            }
            Self::LocationOutOfRange {
                index,
                column,
                columns,
            } => {
                write!(
                    f,
                    "location table entry {index} is column {column}, past the \
                     bit image's {columns} columns"
                )
            }
            Self::LocationOrder { index } => {
                write!(f, "location table entry {index} decreases")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
