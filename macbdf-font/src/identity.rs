//! Font identity: family name, style, point size.
//!
//! Identity is supplied by whoever located the resource (normally from
//! the companion `FOND`); the decoder never derives it. It exists to
//! name the output and fill the BDF header.

use crate::style::style_name;

/// Family name, style bitmask, and point size of one font face.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontIdentity {
    /// Family name, e.g. `Helvetica`.
    pub family: String,
    /// Macintosh style bitmask (see [`crate::style`]).
    pub style: u16,
    /// Point size, expected to be non-zero.
    pub size: u16,
}

impl FontIdentity {
    /// Create an identity.
    pub fn new(family: impl Into<String>, style: u16, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// BDF font name: `{family}{styleTokens}-{size}`.
    #[must_use]
    pub fn bdf_name(&self) -> String {
        format!("{}{}-{}", self.family, style_name(self.style), self.size)
    }

    /// Output filename: the BDF name with a `.bdf` extension.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.bdf", self.bdf_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BOLD, ITALIC};

    #[test]
    fn plain_face_has_no_style_token() {
        let id = FontIdentity::new("Helvetica", 0, 12);
        assert_eq!(id.bdf_name(), "Helvetica-12");
        assert_eq!(id.file_name(), "Helvetica-12.bdf");
    }

    #[test]
    fn styled_face_carries_tokens_before_the_size() {
        let id = FontIdentity::new("Geneva", BOLD | ITALIC, 9);
        assert_eq!(id.file_name(), "GenevaBoldItalic-9.bdf");
    }
}
