//! Container and resource-map errors.

use std::fmt;

/// Errors while splitting a container or walking a resource fork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForkError {
    /// The file does not carry a MacBinary header.
    NotMacBinary,
    /// A structure extends past the end of the available bytes.
    Truncated {
        /// Which structure was being read.
        what: &'static str,
        /// Bytes required.
        needed: usize,
        /// Bytes present.
        actual: usize,
    },
}

impl fmt::Display for ForkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMacBinary => write!(f, "not a MacBinary file"),
            Self::Truncated {
                what,
                needed,
                actual,
            } => {
                write!(f, "{what} needs {needed} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for ForkError {}

/// Bounds-check `len` bytes at `offset` of `buf`.
pub(crate) fn need(
    buf: &[u8],
    offset: usize,
    len: usize,
    what: &'static str,
) -> Result<(), ForkError> {
    let needed = offset.checked_add(len).ok_or(ForkError::Truncated {
        what,
        needed: usize::MAX,
        actual: buf.len(),
    })?;
    if needed > buf.len() {
        return Err(ForkError::Truncated {
            what,
            needed,
            actual: buf.len(),
        });
    }
    Ok(())
}
