//! Classic Macintosh bitmap font resource decoding for `macbdf`.
//!
//! A `FONT` or `NFNT` resource is a 26-byte big-endian header followed by
//! three variable regions: a single packed bit image shared by every
//! glyph, a location table of column boundaries into that image, and an
//! offset/width table carrying each glyph's left bearing and advance.
//! This crate decodes that layout and derives the quantities a BDF
//! emitter needs: the font-wide ink bounding box, the non-empty glyph
//! count, and per-glyph cropped pixel images.
//!
//! It is intentionally independent of any container format — locating
//! the resource inside a MacBinary file or a resource fork happens in
//! `macbdf-rsrc`, and BDF serialization in `macbdf-bdf`.

pub mod bytes;
pub mod error;
pub mod glyph;
pub mod identity;
pub mod metrics;
pub mod resource;
pub mod style;

pub use error::DecodeError;
pub use glyph::{Glyph, GlyphIter};
pub use identity::FontIdentity;
pub use metrics::{compute_metrics, FontMetrics};
pub use resource::{FontHeader, FontResource};
pub use style::style_name;
