// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed 90-byte blob header.
//!
//! The header is parsed in one pass before anything else and tells you
//! exactly where every table lives. Decoding it is a pure function of the
//! buffer bytes: decode twice, get identical headers. Region bounds are NOT
//! validated here; each table accessor checks the regions it actually reads,
//! so an unused region (the hash index) can be garbage without failing an
//! otherwise decodable blob.

use serde::{Deserialize, Serialize};

use crate::blob::bytes::{read_u16_le, read_u32_le, read_u64_le};
use crate::error::BlobError;

/// Header magic: ASCII "YAML" read as a little-endian u32.
pub const MAGIC: u32 = 0x5941_4D4C;

/// Highest (and only) supported format version.
pub const VERSION: u16 = 1;

/// Fixed header size in bytes.
pub const HEADER_SIZE: usize = 90;

/// Blob header (90 bytes fixed size, little-endian).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobHeader {
    pub magic: u32,
    pub version: u16,
    /// Producer bitflags (bit0=endian, bit1=compression). Opaque here.
    pub flags: u32,
    pub node_table_offset: u64,
    pub node_count: u64,
    pub pair_table_offset: u64,
    pub pair_count: u64,
    pub index_table_offset: u64,
    pub index_count: u64,
    /// Optional producer-side hash index. Never read by this decoder.
    pub hash_index_offset: u64,
    pub hash_index_size: u64,
    pub string_table_offset: u64,
    /// String table extent in bytes (not an element count).
    pub string_table_size: u64,
}

impl BlobHeader {
    pub const SIZE: usize = HEADER_SIZE;

    /// Decode and sanity-check the header.
    ///
    /// Fails with [`BlobError::TruncatedHeader`] on short buffers,
    /// [`BlobError::BadMagic`] when this is not a CJYaml blob at all, and
    /// [`BlobError::UnsupportedVersion`] for version 0 or anything newer
    /// than [`VERSION`], so callers can tell "wrong format" from
    /// "corrupt/truncated".
    pub fn decode(bytes: &[u8]) -> Result<Self, BlobError> {
        if bytes.len() < Self::SIZE {
            return Err(BlobError::TruncatedHeader { len: bytes.len() });
        }

        // Fixed prologue: u32 magic, u16 version, u32 flags, then five
        // offset/count u64 pairs starting at byte 10. The reads cannot fail
        // past the length check above; the unwrap_or(0) arms are unreachable.
        let field_u64 = |i: u64| read_u64_le(bytes, 10 + i * 8).unwrap_or(0);

        let magic = read_u32_le(bytes, 0).unwrap_or(0);
        if magic != MAGIC {
            return Err(BlobError::BadMagic { found: magic });
        }

        let version = read_u16_le(bytes, 4).unwrap_or(0);
        if version == 0 || version > VERSION {
            return Err(BlobError::UnsupportedVersion { found: version });
        }

        Ok(Self {
            magic,
            version,
            flags: read_u32_le(bytes, 6).unwrap_or(0),
            node_table_offset: field_u64(0),
            node_count: field_u64(1),
            pair_table_offset: field_u64(2),
            pair_count: field_u64(3),
            index_table_offset: field_u64(4),
            index_count: field_u64(5),
            hash_index_offset: field_u64(6),
            hash_index_size: field_u64(7),
            string_table_offset: field_u64(8),
            string_table_size: field_u64(9),
        })
    }
}
