// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent reconstruction of the document tree.
//!
//! Starting from the root node index, the builder interprets node entries by
//! type tag and produces a [`Value`]. Aliases are resolved by value copy:
//! the format has no object identity beyond the alias mechanism itself, so
//! re-building the target subtree is equivalent to inlining it.
//!
//! A depth counter increments on every descent (sequence element, mapping
//! key, mapping value, alias target, document root). Exceeding the ceiling
//! fails with `MaxDepthExceeded`. That counter is the sole cycle defense:
//! an alias may legally point at any node, including an ancestor, so true
//! cycles are caught by the ceiling rather than visited-set tracking. The
//! trade-off is that a legitimate alias chain longer than the ceiling also
//! fails.

use crate::blob::tables::{BlobView, NodeType};
use crate::error::BlobError;
use crate::value::Value;

/// Default recursion ceiling. Deep enough for any sane document, small
/// enough to fail an alias cycle long before the stack does.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Knobs for tree reconstruction.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Maximum recursive descent depth.
    pub max_depth: usize,
    /// Accept blobs with no DOCUMENT node by treating node 0 as the root.
    /// Known producer behavior, but it can mask a malformed document, so it
    /// is configurable and warn-logged when it engages.
    pub allow_missing_document: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_missing_document: true,
        }
    }
}

/// Rebuilds a [`Value`] tree from a blob view.
pub struct TreeBuilder<'a> {
    view: BlobView<'a>,
    opts: &'a DecodeOptions,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(view: BlobView<'a>, opts: &'a DecodeOptions) -> Self {
        Self { view, opts }
    }

    /// Locate the document root and build the full tree.
    ///
    /// Scans the node table for the first DOCUMENT entry; its `a` field is
    /// the root node index. An empty node table yields [`Value::Absent`].
    pub fn parse_root(&self) -> Result<Value, BlobError> {
        let header = self.view.header();
        if header.node_count == 0 {
            return Ok(Value::Absent);
        }

        for i in 0..header.node_count {
            let node = self.view.node(i)?;
            if node.node_type == NodeType::Document {
                return self.build(node.a, 0);
            }
        }

        if !self.opts.allow_missing_document {
            return Err(BlobError::MissingDocumentNode);
        }
        tracing::warn!(
            node_count = header.node_count,
            "no DOCUMENT node in blob; falling back to node 0 as root"
        );
        self.build(0, 0)
    }

    /// Build the value rooted at `node_index`.
    ///
    /// Either returns a complete, fully validated value or propagates the
    /// first table/string failure; no partial tree escapes.
    pub fn build(&self, node_index: u64, depth: usize) -> Result<Value, BlobError> {
        if depth > self.opts.max_depth {
            return Err(BlobError::MaxDepthExceeded {
                ceiling: self.opts.max_depth,
            });
        }

        let node = self.view.node(node_index)?;
        match node.node_type {
            NodeType::Scalar => {
                let text = self.view.string(node.a, node.b)?;
                Ok(Value::Scalar(text.to_string()))
            }
            NodeType::Sequence => {
                let mut items = Vec::new();
                for i in 0..node.b {
                    let pos = node.a.checked_add(i).ok_or(BlobError::IndexOutOfRange {
                        table: "index",
                        index: u64::MAX,
                        count: self.view.header().index_count,
                    })?;
                    let element = self.view.element(pos)?;
                    items.push(self.build(u64::from(element), depth + 1)?);
                }
                Ok(Value::Sequence(items))
            }
            NodeType::Mapping => {
                let mut pairs = Vec::new();
                for i in 0..node.b {
                    let pos = node.a.checked_add(i).ok_or(BlobError::IndexOutOfRange {
                        table: "pair",
                        index: u64::MAX,
                        count: self.view.header().pair_count,
                    })?;
                    let pair = self.view.pair(pos)?;
                    let key = self.build(u64::from(pair.key_node_index), depth + 1)?;
                    // Keys are expected to be scalars. A structured key is
                    // coerced through its canonical flow-style rendering.
                    let key = match key {
                        Value::Scalar(s) => s,
                        other => other.to_string(),
                    };
                    let value = self.build(u64::from(pair.value_node_index), depth + 1)?;
                    pairs.push((key, value));
                }
                Ok(Value::Mapping(pairs))
            }
            // Pure indirection, no new value identity.
            NodeType::Alias => self.build(node.a, depth + 1),
            NodeType::Document => self.build(node.a, depth + 1),
        }
    }
}
