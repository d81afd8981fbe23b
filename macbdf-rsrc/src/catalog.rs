//! Font discovery: binding resources to identities.
//!
//! Every `FOND` contributes its family name and association table; the
//! registry maps each `(family, style, size)` identity to one resource
//! id, set-like, so a duplicated association never converts the same
//! face twice. `FONT`/`NFNT` resources no `FOND` governs are orphans: a
//! `FONT` id still encodes `family * 128 + size`, which recovers enough
//! identity to dump it under a placeholder name; an `NFNT` orphan
//! carries nothing usable and is skipped.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use macbdf_font::FontIdentity;

use crate::error::ForkError;
use crate::fond;
use crate::fork::{ResourceEntry, ResourceFork};

/// Font family resource type.
pub const FOND: [u8; 4] = *b"FOND";
/// Original bitmap font resource type.
pub const FONT: [u8; 4] = *b"FONT";
/// Newer bitmap font resource type, same layout.
pub const NFNT: [u8; 4] = *b"NFNT";

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One font resource ready for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFont {
    /// The `FONT`/`NFNT` reference to pull data from.
    pub entry: ResourceEntry,
    /// The identity the output file will be named after.
    pub identity: FontIdentity,
    /// True when the identity was synthesized from a `FONT` id rather
    /// than taken from a governing `FOND`.
    pub orphan: bool,
}

/// Everything font-shaped found in one resource fork.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Convertible fonts, `FONT` resources first, each type in map
    /// order.
    pub fonts: Vec<LocatedFont>,
    /// Identities that appeared under more than one association; only
    /// the first kept its resource id.
    pub duplicates: Vec<(FontIdentity, i16)>,
    /// Orphans with no recoverable identity.
    pub skipped: Vec<ResourceEntry>,
}

/// Walk `FOND`s and font resources and bind them together.
///
/// # Errors
///
/// [`ForkError::Truncated`] when a `FOND`'s data block or association
/// table overruns the fork.
pub fn build_catalog(fork: &ResourceFork) -> Result<Catalog, ForkError> {
    let mut by_id: BTreeMap<i16, FontIdentity> = BTreeMap::new();
    let mut registry: BTreeMap<FontIdentity, i16> = BTreeMap::new();
    let mut catalog = Catalog::default();

    for fond_entry in fork.entries(FOND) {
        let family = fork
            .name(&fond_entry)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Family{}", fond_entry.id));
        let data = fork.data(&fond_entry)?;
        for assoc in fond::associations(data)? {
            let identity = FontIdentity::new(family.clone(), assoc.style, assoc.size);
            match registry.entry(identity.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(assoc.font_id);
                    by_id.entry(assoc.font_id).or_insert(identity);
                }
                Entry::Occupied(_) => catalog.duplicates.push((identity, assoc.font_id)),
            }
        }
    }

    for type_code in [FONT, NFNT] {
        for entry in fork.entries(type_code) {
            if let Some(identity) = by_id.get(&entry.id) {
                catalog.fonts.push(LocatedFont {
                    entry,
                    identity: identity.clone(),
                    orphan: false,
                });
            } else if type_code == FONT && entry.id >= 0 && entry.id % 128 != 0 {
                // Classic FONT id convention: family * 128 + size.
                let identity =
                    FontIdentity::new(format!("Unnamed{}", entry.id / 128), 0, (entry.id % 128) as u16);
                catalog.fonts.push(LocatedFont {
                    entry,
                    identity,
                    orphan: true,
                });
            } else {
                catalog.skipped.push(entry);
            }
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fond::testfond::build_fond;
    use crate::fork::testfork::{build_fork, Resource};

    #[test]
    fn binds_fond_identities_to_font_resources() {
        let fork_bytes = build_fork(&[
            Resource {
                code: FOND,
                id: 13,
                name: Some("Testy"),
                data: build_fond(&[(9, 0, 1673), (12, 1, 1674)]),
            },
            Resource {
                code: FONT,
                id: 1673,
                name: None,
                data: vec![0; 4],
            },
            Resource {
                code: NFNT,
                id: 1674,
                name: None,
                data: vec![0; 4],
            },
        ]);
        let fork = ResourceFork::parse(&fork_bytes).unwrap();
        let catalog = build_catalog(&fork).unwrap();

        assert_eq!(catalog.fonts.len(), 2);
        let first = &catalog.fonts[0];
        assert_eq!(first.identity, FontIdentity::new("Testy", 0, 9));
        assert_eq!(first.entry.id, 1673);
        assert!(!first.orphan);

        let second = &catalog.fonts[1];
        assert_eq!(second.identity, FontIdentity::new("Testy", 1, 12));
        assert!(catalog.duplicates.is_empty());
        assert!(catalog.skipped.is_empty());
    }

    #[test]
    fn duplicate_identity_keeps_the_first_binding() {
        let fork_bytes = build_fork(&[
            Resource {
                code: FOND,
                id: 13,
                name: Some("Testy"),
                data: build_fond(&[(9, 0, 100), (9, 0, 101)]),
            },
            Resource {
                code: FONT,
                id: 100,
                name: None,
                data: vec![0; 4],
            },
        ]);
        let fork = ResourceFork::parse(&fork_bytes).unwrap();
        let catalog = build_catalog(&fork).unwrap();

        assert_eq!(catalog.fonts.len(), 1);
        assert_eq!(catalog.fonts[0].entry.id, 100);
        assert_eq!(
            catalog.duplicates,
            vec![(FontIdentity::new("Testy", 0, 9), 101)]
        );
    }

    #[test]
    fn font_orphan_identity_comes_from_its_id() {
        // id 1673 = 13 * 128 + 9.
        let fork_bytes = build_fork(&[Resource {
            code: FONT,
            id: 1673,
            name: None,
            data: vec![0; 4],
        }]);
        let fork = ResourceFork::parse(&fork_bytes).unwrap();
        let catalog = build_catalog(&fork).unwrap();

        assert_eq!(catalog.fonts.len(), 1);
        let orphan = &catalog.fonts[0];
        assert!(orphan.orphan);
        assert_eq!(orphan.identity, FontIdentity::new("Unnamed13", 0, 9));
    }

    #[test]
    fn nfnt_orphans_are_skipped() {
        let fork_bytes = build_fork(&[Resource {
            code: NFNT,
            id: 4242,
            name: None,
            data: vec![0; 4],
        }]);
        let fork = ResourceFork::parse(&fork_bytes).unwrap();
        let catalog = build_catalog(&fork).unwrap();

        assert!(catalog.fonts.is_empty());
        assert_eq!(catalog.skipped.len(), 1);
        assert_eq!(catalog.skipped[0].id, 4242);
    }
}
