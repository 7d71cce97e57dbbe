// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for integration and property tests.

use yamblob::testing::BlobWriter;
use yamblob::Value;

/// Blob encoding `DOCUMENT → MAPPING{pairs of scalars}`.
#[allow(dead_code)]
pub fn mapping_blob(pairs: &[(&str, &str)]) -> Vec<u8> {
    let mut w = BlobWriter::new();
    let entries: Vec<(u32, u32)> = pairs
        .iter()
        .map(|(k, v)| (w.scalar(k), w.scalar(v)))
        .collect();
    let map = w.mapping(&entries);
    w.document(map);
    w.finish()
}

/// Blob encoding `DOCUMENT → SEQUENCE[scalars]`.
#[allow(dead_code)]
pub fn sequence_blob(items: &[&str]) -> Vec<u8> {
    let mut w = BlobWriter::new();
    let elements: Vec<u32> = items.iter().map(|s| w.scalar(s)).collect();
    let seq = w.sequence(&elements);
    w.document(seq);
    w.finish()
}

/// Recursively encode a value tree into writer nodes, returning the root
/// node index. Mapping keys become scalar key nodes. `Absent` leaves are
/// encoded as empty scalars (the producer has no absent node kind).
#[allow(dead_code)]
pub fn encode_value(w: &mut BlobWriter, value: &Value) -> u32 {
    match value {
        Value::Absent => w.scalar(""),
        Value::Scalar(s) => w.scalar(s),
        Value::Sequence(items) => {
            let elements: Vec<u32> = items.iter().map(|v| encode_value(w, v)).collect();
            w.sequence(&elements)
        }
        Value::Mapping(pairs) => {
            let entries: Vec<(u32, u32)> = pairs
                .iter()
                .map(|(k, v)| {
                    let key = w.scalar(k);
                    let value = encode_value(w, v);
                    (key, value)
                })
                .collect();
            w.mapping(&entries)
        }
    }
}
