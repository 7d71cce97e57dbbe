// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random access into the blob's fixed-size tables.
//!
//! All three table accessors follow the same protocol: check the element
//! index against the header's count, compute the absolute byte offset with
//! checked arithmetic, check the record against the physical buffer, then
//! decode the fixed fields. A header that lies about a table offset or
//! count produces a typed error, never an out-of-bounds read.

use crate::blob::bytes::{read_slice, read_u16_le, read_u32_le, read_u64_le, read_u8};
use crate::blob::header::BlobHeader;
use crate::error::BlobError;

/// Node entry record size in bytes (packed).
pub const NODE_ENTRY_SIZE: u64 = 20;

/// Pair entry record size in bytes.
pub const PAIR_ENTRY_SIZE: u64 = 8;

/// Index table element size in bytes.
pub const INDEX_ENTRY_SIZE: u64 = 4;

/// Node kind tag. The format defines exactly these five; anything else is
/// a format/version mismatch and decoding fails rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Scalar,
    Sequence,
    Mapping,
    Alias,
    Document,
}

impl NodeType {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(NodeType::Scalar),
            1 => Some(NodeType::Sequence),
            2 => Some(NodeType::Mapping),
            3 => Some(NodeType::Alias),
            4 => Some(NodeType::Document),
            _ => None,
        }
    }
}

/// One node table record (20 bytes packed).
///
/// The meaning of `a`/`b` depends on the node type:
///
/// | type     | a                         | b             |
/// |----------|---------------------------|---------------|
/// | SCALAR   | string table byte offset  | byte length   |
/// | SEQUENCE | index table start         | element count |
/// | MAPPING  | pair table start          | pair count    |
/// | ALIAS    | target node index         | unused        |
/// | DOCUMENT | root node index           | unused        |
#[derive(Debug, Clone, Copy)]
pub struct NodeEntry {
    pub node_type: NodeType,
    /// Scalar subtype / folded / literal bits. Opaque to the decoder.
    pub style_flags: u8,
    /// String table index of the node's tag, 0 meaning no tag. Opaque.
    pub tag_index: u16,
    pub a: u64,
    pub b: u64,
}

/// One pair table record: key and value node indices for a mapping entry.
#[derive(Debug, Clone, Copy)]
pub struct PairEntry {
    pub key_node_index: u32,
    pub value_node_index: u32,
}

/// Read-only view over a blob's tables.
///
/// Borrows the buffer and the cached header; everything it hands out is
/// transient and must not outlive the buffer.
#[derive(Debug, Clone, Copy)]
pub struct BlobView<'a> {
    bytes: &'a [u8],
    header: &'a BlobHeader,
}

impl<'a> BlobView<'a> {
    pub fn new(bytes: &'a [u8], header: &'a BlobHeader) -> Self {
        Self { bytes, header }
    }

    pub fn header(&self) -> &'a BlobHeader {
        self.header
    }

    /// Common accessor protocol: index < count, then absolute offset with
    /// checked arithmetic, then record extent vs. buffer length.
    fn entry_offset(
        &self,
        table: &'static str,
        table_offset: u64,
        count: u64,
        entry_size: u64,
        index: u64,
    ) -> Result<u64, BlobError> {
        if index >= count {
            return Err(BlobError::IndexOutOfRange { table, index, count });
        }
        let abs = index
            .checked_mul(entry_size)
            .and_then(|rel| table_offset.checked_add(rel))
            .ok_or(BlobError::TruncatedRegion {
                offset: table_offset,
                len: u64::MAX,
                buffer_len: self.bytes.len() as u64,
            })?;
        let end = abs.checked_add(entry_size).unwrap_or(u64::MAX);
        if end > self.bytes.len() as u64 {
            return Err(BlobError::TruncatedRegion {
                offset: abs,
                len: entry_size,
                buffer_len: self.bytes.len() as u64,
            });
        }
        Ok(abs)
    }

    /// Decode node table entry `index`.
    pub fn node(&self, index: u64) -> Result<NodeEntry, BlobError> {
        let h = self.header;
        let off = self.entry_offset(
            "node",
            h.node_table_offset,
            h.node_count,
            NODE_ENTRY_SIZE,
            index,
        )?;

        // Bounds were just checked for the whole 20-byte record.
        let tag = read_u8(self.bytes, off).unwrap_or(u8::MAX);
        let node_type =
            NodeType::from_tag(tag).ok_or(BlobError::UnknownNodeType { tag, node: index })?;

        Ok(NodeEntry {
            node_type,
            style_flags: read_u8(self.bytes, off + 1).unwrap_or(0),
            tag_index: read_u16_le(self.bytes, off + 2).unwrap_or(0),
            a: read_u64_le(self.bytes, off + 4).unwrap_or(0),
            b: read_u64_le(self.bytes, off + 12).unwrap_or(0),
        })
    }

    /// Decode pair table entry `index`.
    pub fn pair(&self, index: u64) -> Result<PairEntry, BlobError> {
        let h = self.header;
        let off = self.entry_offset(
            "pair",
            h.pair_table_offset,
            h.pair_count,
            PAIR_ENTRY_SIZE,
            index,
        )?;
        Ok(PairEntry {
            key_node_index: read_u32_le(self.bytes, off).unwrap_or(0),
            value_node_index: read_u32_le(self.bytes, off + 4).unwrap_or(0),
        })
    }

    /// Decode index table entry `index`: the node index of one sequence
    /// element.
    pub fn element(&self, index: u64) -> Result<u32, BlobError> {
        let h = self.header;
        let off = self.entry_offset(
            "index",
            h.index_table_offset,
            h.index_count,
            INDEX_ENTRY_SIZE,
            index,
        )?;
        Ok(read_u32_le(self.bytes, off).unwrap_or(0))
    }

    /// Read a string-table slice as UTF-8.
    ///
    /// Double-bounded: `offset + len` must fit the logical
    /// `string_table_size` first, and the translated absolute range must fit
    /// the physical buffer second. A corrupt `string_table_size` is not
    /// trusted to imply buffer safety.
    pub fn string(&self, offset: u64, len: u64) -> Result<&'a str, BlobError> {
        let h = self.header;
        let logical_end = offset.checked_add(len).ok_or(BlobError::TruncatedRegion {
            offset,
            len,
            buffer_len: h.string_table_size,
        })?;
        if logical_end > h.string_table_size {
            return Err(BlobError::TruncatedRegion {
                offset,
                len,
                buffer_len: h.string_table_size,
            });
        }

        let abs = h
            .string_table_offset
            .checked_add(offset)
            .ok_or(BlobError::TruncatedRegion {
                offset,
                len,
                buffer_len: self.bytes.len() as u64,
            })?;
        let raw = read_slice(self.bytes, abs, len).ok_or(BlobError::TruncatedRegion {
            offset: abs,
            len,
            buffer_len: self.bytes.len() as u64,
        })?;

        std::str::from_utf8(raw).map_err(|_| BlobError::InvalidUtf8 { offset, len })
    }
}
