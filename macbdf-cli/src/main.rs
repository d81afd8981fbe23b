//! `macbdf` CLI — extract Macintosh bitmap fonts to Adobe BDF files.
//!
//! Reads a MacBinary file (or a bare resource fork), finds every
//! `FONT`/`NFNT` resource and its governing `FOND`, and writes one BDF
//! file per non-empty font, named `{family}{style}-{size}.bdf`.
//! Existing files with the same names are silently replaced. A failure
//! on one font is reported and does not stop the others.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use macbdf_bdf::{convert, EmitOptions};
use macbdf_font::FontResource;
use macbdf_rsrc::{build_catalog, is_macbinary, resource_fork, Catalog, ResourceFork};

#[derive(Parser)]
#[command(
    version,
    about = "Extract Macintosh FONT/NFNT resources as Adobe BDF files"
)]
struct Cli {
    /// Macintosh file in MacBinary format, or a bare resource fork
    file: PathBuf,

    /// Don't do anything, just report what would be done
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Don't report dumped fonts
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose reporting
    #[arg(short, long)]
    verbose: bool,

    /// Output directory for BDF files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let bytes = match fs::read(&cli.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.file.display());
            process::exit(1);
        }
    };

    let fork_bytes: &[u8] = if is_macbinary(&bytes) {
        match resource_fork(&bytes) {
            Ok(fork) => fork,
            Err(e) => {
                eprintln!("Error: {}: {e}", cli.file.display());
                process::exit(1);
            }
        }
    } else {
        if cli.verbose {
            eprintln!("No MacBinary header; treating input as a bare resource fork");
        }
        &bytes
    };

    let fork = match ResourceFork::parse(fork_bytes) {
        Ok(fork) => fork,
        Err(e) => {
            eprintln!("Error: {}: {e}", cli.file.display());
            process::exit(1);
        }
    };
    let catalog = match build_catalog(&fork) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}: {e}", cli.file.display());
            process::exit(1);
        }
    };

    if cli.verbose {
        report_catalog(&catalog);
    }

    let options = EmitOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };

    let mut failures = 0u32;
    for font in &catalog.fonts {
        let name = font.identity.bdf_name();
        let data = match fork.data(&font.entry) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Warning: {name}: {e}");
                failures += 1;
                continue;
            }
        };
        let resource = match FontResource::parse(data) {
            Ok(resource) => resource,
            Err(e) => {
                eprintln!("Warning: {name}: {e}");
                failures += 1;
                continue;
            }
        };
        match convert(&resource, &font.identity, &cli.output, &options) {
            Ok(Some(_)) => {}
            Ok(None) => {
                if cli.verbose {
                    eprintln!("{name}: no glyphs, nothing to dump");
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}

fn report_catalog(catalog: &Catalog) {
    eprintln!("Found {} convertible font resource(s)", catalog.fonts.len());
    for font in &catalog.fonts {
        if font.orphan {
            eprintln!(
                "Orphaned FONT resource {}: using temporary name {}",
                font.entry.id,
                font.identity.bdf_name()
            );
        }
    }
    for (identity, id) in &catalog.duplicates {
        eprintln!(
            "Warning: duplicate association for {} (font resource {id})",
            identity.bdf_name()
        );
    }
    for entry in &catalog.skipped {
        eprintln!(
            "Skipping orphaned {} resource {}",
            String::from_utf8_lossy(&entry.type_code),
            entry.id
        );
    }
}
