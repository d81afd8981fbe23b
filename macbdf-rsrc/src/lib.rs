//! Locating font resources inside Macintosh files.
//!
//! This crate is the collaborator that feeds `macbdf-font`: it splits a
//! MacBinary container into forks, walks the resource map (type list,
//! reference lists, name list), reads `FOND` association tables, and
//! produces one [`FontIdentity`](macbdf_font::FontIdentity) per located
//! `FONT`/`NFNT` resource. All offsets come from untrusted files and
//! are validated against the fork slice before use.

pub mod catalog;
pub mod error;
pub mod fond;
pub mod fork;
pub mod macbinary;

pub use catalog::{build_catalog, Catalog, LocatedFont, FOND, FONT, NFNT};
pub use error::ForkError;
pub use fond::FontAssociation;
pub use fork::{ResourceEntry, ResourceFork};
pub use macbinary::{is_macbinary, resource_fork};
