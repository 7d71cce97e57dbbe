// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds a
//! minimal blob producer mirroring the native CJYaml builder, so tests and
//! fuzz targets have a source of conforming buffers without shipping the
//! real parser. The decoder proper never serializes anything.

#![doc(hidden)]

use crate::blob::header::{HEADER_SIZE, MAGIC, VERSION};
use crate::blob::tables::{INDEX_ENTRY_SIZE, NODE_ENTRY_SIZE, PAIR_ENTRY_SIZE};

/// Assembles a conforming blob: header, node/pair/index tables, string
/// table. Node indices are returned as each node is added, in table order.
///
/// Fields are public so corruption tests can bend individual records before
/// serialization.
#[derive(Debug, Default, Clone)]
pub struct BlobWriter {
    /// (node_type, style_flags, tag_index, a, b)
    pub nodes: Vec<(u8, u8, u16, u64, u64)>,
    /// (key_node_index, value_node_index)
    pub pairs: Vec<(u32, u32)>,
    pub indices: Vec<u32>,
    pub strings: Vec<u8>,
}

impl BlobWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node record with an arbitrary (possibly invalid) type tag.
    pub fn raw_node(&mut self, node_type: u8, a: u64, b: u64) -> u32 {
        let idx = self.nodes.len() as u32;
        self.nodes.push((node_type, 0, 0, a, b));
        idx
    }

    /// SCALAR node; text is appended to the string table.
    pub fn scalar(&mut self, text: &str) -> u32 {
        let offset = self.strings.len() as u64;
        self.strings.extend_from_slice(text.as_bytes());
        self.raw_node(0, offset, text.len() as u64)
    }

    /// SEQUENCE node over the given element node indices.
    pub fn sequence(&mut self, elements: &[u32]) -> u32 {
        let start = self.indices.len() as u64;
        self.indices.extend_from_slice(elements);
        self.raw_node(1, start, elements.len() as u64)
    }

    /// MAPPING node over (key node, value node) index pairs.
    pub fn mapping(&mut self, entries: &[(u32, u32)]) -> u32 {
        let start = self.pairs.len() as u64;
        self.pairs.extend_from_slice(entries);
        self.raw_node(2, start, entries.len() as u64)
    }

    /// ALIAS node targeting another node index.
    pub fn alias(&mut self, target: u32) -> u32 {
        self.raw_node(3, u64::from(target), 0)
    }

    /// DOCUMENT node whose body is rooted at `root`.
    pub fn document(&mut self, root: u32) -> u32 {
        self.raw_node(4, u64::from(root), 0)
    }

    /// Serialize with the canonical magic and version.
    pub fn finish(&self) -> Vec<u8> {
        self.finish_as(MAGIC, VERSION)
    }

    /// Mutate the raw tables, then serialize. For corruption tests.
    pub fn finish_with(mut self, f: impl FnOnce(&mut BlobWriter)) -> Vec<u8> {
        f(&mut self);
        self.finish()
    }

    /// Serialize with explicit magic/version (for header rejection tests).
    pub fn finish_as(&self, magic: u32, version: u16) -> Vec<u8> {
        let node_table_offset = HEADER_SIZE as u64;
        let pair_table_offset = node_table_offset + self.nodes.len() as u64 * NODE_ENTRY_SIZE;
        let index_table_offset = pair_table_offset + self.pairs.len() as u64 * PAIR_ENTRY_SIZE;
        let hash_index_offset = index_table_offset + self.indices.len() as u64 * INDEX_ENTRY_SIZE;
        // hash index carried as an empty region, as the producer does when
        // it has nothing to index
        let string_table_offset = hash_index_offset;
        let total = string_table_offset + self.strings.len() as u64;

        let mut buf = Vec::with_capacity(total as usize);
        buf.extend_from_slice(&magic.to_le_bytes());
        buf.extend_from_slice(&version.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes()); // flags
        for field in [
            node_table_offset,
            self.nodes.len() as u64,
            pair_table_offset,
            self.pairs.len() as u64,
            index_table_offset,
            self.indices.len() as u64,
            hash_index_offset,
            0, // hash entry count
            string_table_offset,
            self.strings.len() as u64,
        ] {
            buf.extend_from_slice(&field.to_le_bytes());
        }
        debug_assert_eq!(buf.len(), HEADER_SIZE);

        for &(node_type, style_flags, tag_index, a, b) in &self.nodes {
            buf.push(node_type);
            buf.push(style_flags);
            buf.extend_from_slice(&tag_index.to_le_bytes());
            buf.extend_from_slice(&a.to_le_bytes());
            buf.extend_from_slice(&b.to_le_bytes());
        }
        for &(key, value) in &self.pairs {
            buf.extend_from_slice(&key.to_le_bytes());
            buf.extend_from_slice(&value.to_le_bytes());
        }
        for &element in &self.indices {
            buf.extend_from_slice(&element.to_le_bytes());
        }
        buf.extend_from_slice(&self.strings);

        buf
    }
}
