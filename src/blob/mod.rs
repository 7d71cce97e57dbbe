// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The CJYaml blob wire format.
//!
//! A blob is one contiguous buffer: a fixed 90-byte header followed by four
//! fixed-size tables and a string region. Offsets in the header are absolute
//! byte offsets into the buffer; counts are element counts, not byte sizes
//! (except the string table, whose size is in bytes).
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (90 bytes, little-endian)                           │
//! │   magic: u32 = "YAML" (0x59414D4C)                         │
//! │   version: u16 = 1                                         │
//! │   flags: u32 (bit0=endian, bit1=compression, reserved)     │
//! │   node_table_offset: u64,  node_count: u64                 │
//! │   pair_table_offset: u64,  pair_count: u64                 │
//! │   index_table_offset: u64, index_count: u64                │
//! │   hash_index_offset: u64,  hash_index_size: u64            │
//! │   string_table_offset: u64, string_table_size: u64         │
//! ├────────────────────────────────────────────────────────────┤
//! │ NODE_TABLE  (node_count × 20B: type, style, tag, a, b)     │
//! ├────────────────────────────────────────────────────────────┤
//! │ PAIR_TABLE  (pair_count × 8B: key node idx, value node idx)│
//! ├────────────────────────────────────────────────────────────┤
//! │ INDEX_TABLE (index_count × 4B: sequence element node idx)  │
//! ├────────────────────────────────────────────────────────────┤
//! │ HASH_INDEX  (optional, producer-side lookup; never read)   │
//! ├────────────────────────────────────────────────────────────┤
//! │ STRING_TABLE (concatenated UTF-8, referenced by off/len)   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Security Considerations
//!
//! Blobs are parsed as untrusted input:
//! - Every table access is bounds-checked against the table's element count
//!   AND the physical buffer length. A lying header cannot cause an
//!   out-of-bounds read.
//! - String reads are double-bounded: first against the logical
//!   `string_table_size`, then against the buffer, because a corrupt size
//!   field must not be trusted to imply buffer safety.
//! - Offset arithmetic is checked; overflow is reported, never wrapped.
//! - Alias indirection is capped by a depth ceiling, the sole defense
//!   against reference cycles in the node graph.

pub(crate) mod bytes;
pub mod header;
pub mod tables;
pub mod tree;
