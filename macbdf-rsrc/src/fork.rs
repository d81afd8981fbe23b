//! Resource fork map walking.
//!
//! Fork layout: a 16-byte header (`dataOffset`, `mapOffset`, `dataLen`,
//! `mapLen`), the resource-data section (each resource a u32 length
//! prefix plus payload), and the map. The map holds a copy of the
//! header, a 4-byte next-map handle, file ref and attribute words, then
//! u16 offsets (from the map start) to the type list and the name list.
//! The type list is a `count - 1` word followed by 8-byte entries
//! (4-byte type code, `count - 1`, u16 reference-list offset from the
//! type-list start); reference entries are 12 bytes (i16 id, u16 name
//! offset into the name list or `0xFFFF`, u8 attributes, 24-bit data
//! offset into the data section, 4 reserved bytes). Names are Pascal
//! strings.

use macbdf_font::bytes;

use crate::error::{need, ForkError};

/// Fork header length; the map repeats it as its first 16 bytes.
const FORK_HEADER_LEN: usize = 16;
/// Map header: header copy, next handle, file ref, attributes, two
/// list offsets.
const MAP_HEADER_LEN: usize = 28;
/// Bytes per reference-list entry.
const REF_ENTRY_LEN: usize = 12;

// ---------------------------------------------------------------------------
// ResourceFork
// ---------------------------------------------------------------------------

/// Parsed view of one resource fork.
#[derive(Debug)]
pub struct ResourceFork<'a> {
    fork: &'a [u8],
    data_offset: usize,
    name_list_offset: usize,
    types: Vec<TypeEntry>,
}

#[derive(Debug)]
struct TypeEntry {
    code: [u8; 4],
    count: usize,
    /// Absolute offset of this type's reference list in the fork.
    ref_offset: usize,
}

/// One resource reference from the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Resource type code, e.g. `FONT`.
    pub type_code: [u8; 4],
    /// Resource id.
    pub id: i16,
    name_offset: Option<u16>,
    /// Offset of the data block within the resource-data section.
    data_offset: usize,
}

impl<'a> ResourceFork<'a> {
    /// Parse and validate a resource fork's map.
    ///
    /// # Errors
    ///
    /// [`ForkError::Truncated`] when any declared structure extends
    /// past the fork.
    pub fn parse(fork: &'a [u8]) -> Result<Self, ForkError> {
        need(fork, 0, FORK_HEADER_LEN, "resource fork header")?;
        let data_offset = bytes::read_u32(fork, 0) as usize;
        let map_offset = bytes::read_u32(fork, 4) as usize;

        need(fork, map_offset, MAP_HEADER_LEN, "resource map")?;
        let type_list_offset = map_offset + bytes::read_u16(fork, map_offset + 24) as usize;
        let name_list_offset = map_offset + bytes::read_u16(fork, map_offset + 26) as usize;

        need(fork, type_list_offset, 2, "type list")?;
        // Counts are stored minus one; 0xFFFF means none.
        let type_count = bytes::read_u16(fork, type_list_offset).wrapping_add(1) as usize;

        let mut types = Vec::with_capacity(type_count);
        for index in 0..type_count {
            let offset = type_list_offset + 2 + index * 8;
            need(fork, offset, 8, "type list entry")?;
            let code = [
                fork[offset],
                fork[offset + 1],
                fork[offset + 2],
                fork[offset + 3],
            ];
            let count = bytes::read_u16(fork, offset + 4) as usize + 1;
            let ref_offset = type_list_offset + bytes::read_u16(fork, offset + 6) as usize;
            need(fork, ref_offset, count * REF_ENTRY_LEN, "reference list")?;
            types.push(TypeEntry {
                code,
                count,
                ref_offset,
            });
        }

        Ok(Self {
            fork,
            data_offset,
            name_list_offset,
            types,
        })
    }

    /// All references of one type, in map order.
    #[must_use]
    pub fn entries(&self, type_code: [u8; 4]) -> Vec<ResourceEntry> {
        let mut entries = Vec::new();
        for ty in self.types.iter().filter(|ty| ty.code == type_code) {
            for index in 0..ty.count {
                let offset = ty.ref_offset + index * REF_ENTRY_LEN;
                let name_offset = bytes::read_u16(self.fork, offset + 2);
                entries.push(ResourceEntry {
                    type_code,
                    id: bytes::read_i16(self.fork, offset),
                    name_offset: (name_offset != 0xFFFF).then_some(name_offset),
                    data_offset: bytes::read_u24(self.fork, offset + 5) as usize,
                });
            }
        }
        entries
    }

    /// The payload bytes of a referenced resource.
    ///
    /// # Errors
    ///
    /// [`ForkError::Truncated`] when the data block's length prefix or
    /// payload overruns the fork.
    pub fn data(&self, entry: &ResourceEntry) -> Result<&'a [u8], ForkError> {
        let offset = self.data_offset + entry.data_offset;
        need(self.fork, offset, 4, "resource data length")?;
        let len = bytes::read_u32(self.fork, offset) as usize;
        need(self.fork, offset + 4, len, "resource data")?;
        Ok(&self.fork[offset + 4..offset + 4 + len])
    }

    /// The resource's name, cleaned for use in filenames: whitespace
    /// becomes hyphens (the historical substitution) and non-graphic
    /// bytes are dropped. `None` for unnamed resources or a name that
    /// overruns the name list.
    #[must_use]
    pub fn name(&self, entry: &ResourceEntry) -> Option<String> {
        let offset = self.name_list_offset + usize::from(entry.name_offset?);
        let len = usize::from(*self.fork.get(offset)?);
        let raw = self.fork.get(offset + 1..offset + 1 + len)?;
        Some(clean_name(raw))
    }
}

fn clean_name(raw: &[u8]) -> String {
    raw.iter()
        .filter_map(|&b| {
            if b.is_ascii_whitespace() {
                Some('-')
            } else if b.is_ascii_graphic() {
                Some(char::from(b))
            } else {
                None
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Test fork builder
// ---------------------------------------------------------------------------
