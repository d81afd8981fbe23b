//! BDF 2.1 emitter for decoded Macintosh bitmap fonts.
//!
//! [`render`] is a pure function from a decoded resource plus its
//! identity to the complete BDF document text; [`convert`] wraps it
//! with file writing, dry-run handling, and the per-font summary line.
//!
//! The emitted grammar is the compatibility surface: field names,
//! ordering, the `GCIDxx` glyph-naming scheme (uppercase two-digit hex
//! of the character code — Mac font resources carry no glyph names),
//! and lowercase hex bitmap rows are all fixed. Bitmap rows pack pixels
//! eight at a time, most significant bit first; a final partial byte is
//! left-shifted so the padding bits sit at the low end.

use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use macbdf_font::{compute_metrics, FontHeader, FontIdentity, FontMetrics, FontResource, Glyph};

/// Macintosh device X resolution, reported in the `SIZE` line.
const DEV_XRES: u32 = 72;
/// Macintosh device Y resolution, reported in the `SIZE` line.
const DEV_YRES: u32 = 72;

// ---------------------------------------------------------------------------
// Options and outcomes
// ---------------------------------------------------------------------------

/// Reporting and side-effect options for one conversion call.
///
/// Passed explicitly rather than held in process-wide flags, so
/// conversions with different settings can coexist.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmitOptions {
    /// Suppress the one-line summary.
    pub quiet: bool,
    /// Emit additional per-font diagnostics to stderr.
    pub verbose: bool,
    /// Compute and report without writing anything.
    pub dry_run: bool,
}

/// What one successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Number of glyph records in the document.
    pub glyph_count: u32,
    /// Destination path (the file actually written, unless dry-run).
    pub path: PathBuf,
    /// False when `dry_run` skipped the write.
    pub written: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the conversion driver.
///
/// Either outcome aborts only the font at hand; sibling conversions are
/// unaffected.
#[derive(Debug)]
pub enum EmitError {
    /// The supplied identity cannot name an output file.
    InvalidIdentity {
        identity: FontIdentity,
        reason: &'static str,
    },
    /// The output file could not be created or written.
    Io {
        identity: FontIdentity,
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentity { identity, reason } => {
                write!(f, "bad font identity {identity:?}: {reason}")
            }
            Self::Io {
                identity,
                path,
                source,
            } => {
                write!(
                    f,
                    "can't create output file \"{}\" for {}: {source}",
                    path.display(),
                    identity.bdf_name()
                )
            }
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidIdentity { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the complete BDF document for a font resource.
///
/// Returns `None` for a resource with no glyphs
/// (`firstChar == lastChar`) — such a font produces no document and no
/// file. Rendering is deterministic: identical inputs yield a
/// byte-identical document.
#[must_use]
pub fn render(font: &FontResource, identity: &FontIdentity) -> Option<String> {
    render_document(font, identity).map(|(document, _)| document)
}

fn render_document(
    font: &FontResource,
    identity: &FontIdentity,
) -> Option<(String, FontMetrics)> {
    if font.is_empty() {
        return None;
    }

    let h = *font.header();
    let metrics = compute_metrics(font);
    let cell_height = i32::from(h.rect_height);

    let mut out = String::new();
    let _ = writeln!(out, "STARTFONT 2.1");
    let _ = writeln!(out, "FONT {}", identity.bdf_name());
    let _ = writeln!(out, "SIZE {} {DEV_XRES} {DEV_YRES}", identity.size);
    let _ = writeln!(
        out,
        "FONTBOUNDINGBOX {} {} {} {}",
        metrics.width(),
        metrics.height(),
        h.kern_max,
        (cell_height - i32::from(h.descent)) - (metrics.bottom + 1)
    );
    let _ = writeln!(out, "STARTPROPERTIES 2");
    let _ = writeln!(out, "FONT_ASCENT {}", h.ascent);
    let _ = writeln!(out, "FONT_DESCENT {}", h.descent);
    let _ = writeln!(out, "ENDPROPERTIES");
    let _ = writeln!(out, "CHARS {}", metrics.glyph_count);

    for glyph in font.glyphs() {
        write_glyph(&mut out, &glyph, &h);
    }

    let _ = writeln!(out, "ENDFONT");
    Some((out, metrics))
}

fn write_glyph(out: &mut String, glyph: &Glyph, h: &FontHeader) {
    let yoff = (i32::from(h.rect_height) - i32::from(h.descent)) - (glyph.bottom + 1);
    let _ = writeln!(out, "STARTCHAR GCID{:02X}", glyph.code);
    let _ = writeln!(out, "ENCODING {}", glyph.code);
    let _ = writeln!(out, "SWIDTH {} 0", u32::from(glyph.advance) * 720);
    let _ = writeln!(out, "DWIDTH {} 0", glyph.advance);
    let _ = writeln!(
        out,
        "BBX {} {} {} {}",
        glyph.width,
        glyph.height(),
        i32::from(glyph.left_bearing) + i32::from(h.kern_max),
        yoff
    );
    let _ = writeln!(out, "BITMAP");
    for row in glyph.rows() {
        write_hex_row(out, row);
    }
    let _ = writeln!(out, "ENDCHAR");
}

/// One bitmap row as lowercase hex, MSB-first, followed by a newline.
/// A width that is an exact multiple of eight emits no partial byte.
fn write_hex_row(out: &mut String, row: &[bool]) {
    let mut bits = 0u8;
    for (i, &pixel) in row.iter().enumerate() {
        bits = bits << 1 | u8::from(pixel);
        if i % 8 == 7 {
            let _ = write!(out, "{bits:02x}");
            bits = 0;
        }
    }
    let partial = row.len() % 8;
    if partial != 0 {
        bits <<= 8 - partial;
        let _ = write!(out, "{bits:02x}");
    }
    out.push('\n');
}

// ---------------------------------------------------------------------------
// Conversion driver
// ---------------------------------------------------------------------------

/// Convert one font resource to a BDF file in `out_dir`.
///
/// Returns `Ok(None)` when the resource has no glyphs (nothing to do,
/// no side effects). An existing file at the destination is silently
/// replaced; re-running with identical inputs rewrites identical bytes.
///
/// # Errors
///
/// - [`EmitError::InvalidIdentity`] for an empty family name or a zero
///   point size;
/// - [`EmitError::Io`] when the destination cannot be written, carrying
///   the target path and the identity.
pub fn convert(
    font: &FontResource,
    identity: &FontIdentity,
    out_dir: &Path,
    options: &EmitOptions,
) -> Result<Option<Conversion>, EmitError> {
    if identity.family.is_empty() {
        return Err(EmitError::InvalidIdentity {
            identity: identity.clone(),
            reason: "empty family name",
        });
    }
    if identity.size == 0 {
        return Err(EmitError::InvalidIdentity {
            identity: identity.clone(),
            reason: "zero point size",
        });
    }

    let Some((document, metrics)) = render_document(font, identity) else {
        return Ok(None);
    };

    let file_name = identity.file_name();
    let path = out_dir.join(&file_name);

    if options.verbose {
        let h = font.header();
        eprintln!(
            "{file_name}: chars {}..{}, cell {}x{}, bbox {}x{} at ({}, {})",
            h.first_char,
            h.last_char,
            h.rect_width,
            h.rect_height,
            metrics.width(),
            metrics.height(),
            metrics.left,
            metrics.top,
        );
    }

    if options.dry_run {
        if !options.quiet {
            println!(
                "Would dump {} glyphs to \"{file_name}\"",
                metrics.glyph_count
            );
        }
        return Ok(Some(Conversion {
            glyph_count: metrics.glyph_count,
            path,
            written: false,
        }));
    }

    fs::write(&path, document.as_bytes()).map_err(|source| EmitError::Io {
        identity: identity.clone(),
        path: path.clone(),
        source,
    })?;

    if !options.quiet {
        println!("Dumping {} glyphs to \"{file_name}\"", metrics.glyph_count);
    }

    Ok(Some(Conversion {
        glyph_count: metrics.glyph_count,
        path,
        written: true,
    }))
}
