// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decoder for the CJYaml flat binary document format.
//!
//! A CJYaml blob is an already-parsed YAML document flattened into fixed-size
//! tables inside one contiguous byte buffer. The producer (the native CJYaml
//! parser) does the lexing and grammar work; this crate validates the blob,
//! random-accesses its tables, and rebuilds the document as a generic
//! [`Value`] tree, resolving aliases along the way.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ blob::bytes  │────▶│ blob::header │────▶│ blob::tables │
//! │ (LE reads,   │     │ (90B header, │     │ (BlobView:   │
//! │  bounds)     │     │  magic/ver)  │     │  node/pair/  │
//! └──────────────┘     └──────────────┘     │  index/str)  │
//!                                           └──────┬───────┘
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   value.rs   │◀────│  blob::tree  │◀────│ document.rs  │
//! │ (Value enum) │     │ (TreeBuilder,│     │ (YamlDocument│
//! │              │     │  depth guard)│     │  lifecycle)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use yamblob::{testing::BlobWriter, YamlDocument};
//!
//! // Normally the bytes come from the native producer; here we assemble
//! // a conforming blob by hand.
//! let mut w = BlobWriter::new();
//! let key = w.scalar("key");
//! let val = w.scalar("value");
//! let map = w.mapping(&[(key, val)]);
//! w.document(map);
//!
//! let mut doc = YamlDocument::new();
//! doc.load_bytes(w.finish()).unwrap();
//! let root = doc.root().unwrap();
//! assert_eq!(root.get("key").and_then(|v| v.as_str()), Some("value"));
//! ```
//!
//! # Safety model
//!
//! The blob may come from an untrusted or corrupt source. Every table access
//! is double bounds-checked (logical table extent, then physical buffer
//! length), unknown node tags are hard errors, and recursion through aliases
//! is capped by a depth ceiling. Decoding either returns a complete tree or
//! a single typed [`BlobError`]; it never panics and never returns a partial
//! tree.

// Module declarations
pub mod blob;
mod document;
mod error;
pub mod testing;
mod value;

// Re-exports for public API
pub use blob::header::{BlobHeader, HEADER_SIZE, MAGIC, VERSION};
pub use blob::tables::{BlobView, NodeEntry, NodeType, PairEntry};
pub use blob::tree::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use document::{ExternalBuf, ReleaseFn, YamlDocument};
pub use error::BlobError;
pub use value::Value;
