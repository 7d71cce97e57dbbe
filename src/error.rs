// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for blob decoding and lifecycle management.
//!
//! Every failure mode gets its own variant with enough context to tell you
//! what the blob claimed versus what the buffer actually holds. There is no
//! retry logic anywhere in this crate: each of these means either a corrupt
//! or incompatible blob, or index misuse by the caller.

use std::fmt;
use std::io;

/// Error type for blob decoding.
#[derive(Debug)]
pub enum BlobError {
    /// Buffer is shorter than the fixed 90-byte header.
    TruncatedHeader { len: usize },
    /// Header magic does not identify a CJYaml blob.
    BadMagic { found: u32 },
    /// Header version is outside the supported range.
    UnsupportedVersion { found: u16 },
    /// Table element index is past the header's element count.
    IndexOutOfRange {
        table: &'static str,
        index: u64,
        count: u64,
    },
    /// A region read would run past the end of the buffer (or, for string
    /// reads, past the logical string-table extent).
    TruncatedRegion {
        offset: u64,
        len: u64,
        buffer_len: u64,
    },
    /// String-table slice is not valid UTF-8.
    InvalidUtf8 { offset: u64, len: u64 },
    /// Node entry carries a type tag this decoder does not know.
    UnknownNodeType { tag: u8, node: u64 },
    /// Recursive descent exceeded the depth ceiling (alias cycle or a
    /// pathologically deep document).
    MaxDepthExceeded { ceiling: usize },
    /// No DOCUMENT node exists and the node-0 fallback is disabled.
    MissingDocumentNode,
    /// Operation requires a loaded buffer but the handle is empty.
    NoBufferLoaded,
    /// The external buffer's release callback reported failure.
    ResourceReleaseFailed { detail: String },
    /// I/O failure while reading a blob file.
    Io(io::Error),
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobError::TruncatedHeader { len } => {
                write!(f, "truncated header: {} bytes (need 90)", len)
            }
            BlobError::BadMagic { found } => {
                write!(f, "bad magic {:#010x} (expected {:#010x})", found, crate::MAGIC)
            }
            BlobError::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {}", found)
            }
            BlobError::IndexOutOfRange { table, index, count } => {
                write!(f, "{} table index {} >= count {}", table, index, count)
            }
            BlobError::TruncatedRegion { offset, len, buffer_len } => {
                write!(
                    f,
                    "region [{}, {}) exceeds available {} bytes",
                    offset,
                    offset.saturating_add(*len),
                    buffer_len
                )
            }
            BlobError::InvalidUtf8 { offset, len } => {
                write!(f, "invalid UTF-8 in string table at [{}, +{})", offset, len)
            }
            BlobError::UnknownNodeType { tag, node } => {
                write!(f, "unknown node type tag {} at node {}", tag, node)
            }
            BlobError::MaxDepthExceeded { ceiling } => {
                write!(f, "recursion depth exceeded ceiling {}", ceiling)
            }
            BlobError::MissingDocumentNode => {
                write!(f, "no DOCUMENT node in node table")
            }
            BlobError::NoBufferLoaded => write!(f, "no blob loaded"),
            BlobError::ResourceReleaseFailed { detail } => {
                write!(f, "external buffer release failed: {}", detail)
            }
            BlobError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for BlobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlobError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BlobError {
    fn from(e: io::Error) -> Self {
        BlobError::Io(e)
    }
}
