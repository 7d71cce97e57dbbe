// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end decode scenarios over producer-shaped blobs.

mod common;

use common::{mapping_blob, sequence_blob};
use yamblob::testing::BlobWriter;
use yamblob::{BlobError, Value, YamlDocument};

fn decode(bytes: Vec<u8>) -> Result<Value, BlobError> {
    let mut doc = YamlDocument::new();
    doc.load_bytes(bytes)?;
    doc.root()
}

#[test]
fn mapping_round_trip() {
    let root = decode(mapping_blob(&[("key", "value")])).unwrap();
    let pairs = root.as_mapping().unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "key");
    assert_eq!(pairs[0].1, Value::Scalar("value".to_string()));
}

#[test]
fn sequence_preserves_table_order() {
    let root = decode(sequence_blob(&["a", "b"])).unwrap();
    assert_eq!(
        root,
        Value::Sequence(vec![
            Value::Scalar("a".to_string()),
            Value::Scalar("b".to_string()),
        ])
    );

    let many: Vec<String> = (0..50).map(|i| format!("item-{i}")).collect();
    let refs: Vec<&str> = many.iter().map(String::as_str).collect();
    let root = decode(sequence_blob(&refs)).unwrap();
    let items = root.as_sequence().unwrap();
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.as_str(), Some(format!("item-{i}").as_str()));
    }
}

#[test]
fn mapping_preserves_encounter_order() {
    let root = decode(mapping_blob(&[("z", "1"), ("a", "2"), ("m", "3")])).unwrap();
    let keys: Vec<&str> = root
        .as_mapping()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn alias_value_resolves_to_target_scalar() {
    let mut w = BlobWriter::new();
    let key = w.scalar("ref");
    let target = w.scalar("anchored text");
    let alias = w.alias(target);
    let map = w.mapping(&[(key, alias)]);
    w.document(map);

    let root = decode(w.finish()).unwrap();
    assert_eq!(
        root.get("ref").and_then(|v| v.as_str()),
        Some("anchored text")
    );
}

#[test]
fn shared_alias_targets_copy_by_value() {
    let mut w = BlobWriter::new();
    let shared = w.scalar("shared");
    let a1 = w.alias(shared);
    let a2 = w.alias(shared);
    let seq = w.sequence(&[a1, shared, a2]);
    w.document(seq);

    let root = decode(w.finish()).unwrap();
    let items = root.as_sequence().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert_eq!(item.as_str(), Some("shared"));
    }
}

#[test]
fn nested_structures_decode_fully() {
    let mut w = BlobWriter::new();
    let k_name = w.scalar("name");
    let v_name = w.scalar("demo");
    let k_tags = w.scalar("tags");
    let t1 = w.scalar("x");
    let t2 = w.scalar("y");
    let tags = w.sequence(&[t1, t2]);
    let k_inner = w.scalar("inner");
    let ik = w.scalar("deep");
    let iv = w.scalar("true");
    let inner = w.mapping(&[(ik, iv)]);
    let map = w.mapping(&[(k_name, v_name), (k_tags, tags), (k_inner, inner)]);
    w.document(map);

    let root = decode(w.finish()).unwrap();
    assert_eq!(root.get("name").and_then(|v| v.as_str()), Some("demo"));
    assert_eq!(
        root.get("tags").and_then(|v| v.as_sequence()).map(<[_]>::len),
        Some(2)
    );
    assert_eq!(
        root.get("inner")
            .and_then(|v| v.get("deep"))
            .and_then(|v| v.as_str()),
        Some("true")
    );
    assert_eq!(
        root.to_string(),
        "{name: demo, tags: [x, y], inner: {deep: true}}"
    );
}

#[test]
fn corrupt_pair_index_fails_the_whole_root() {
    let mut w = BlobWriter::new();
    let k = w.scalar("good");
    let v = w.scalar("pair");
    let k2 = w.scalar("bad");
    let v2 = w.scalar("pair");
    let map = w.mapping(&[(k, v), (k2, v2)]);
    w.document(map);
    let bytes = w.finish_with(|raw| {
        raw.pairs[1].0 = 9999; // past node_count
    });

    // no partial map escapes; the single terminal error is IndexOutOfRange
    assert!(matches!(
        decode(bytes),
        Err(BlobError::IndexOutOfRange { table: "node", index: 9999, .. })
    ));
}

#[test]
fn scalar_offset_past_string_table_fails() {
    let mut w = BlobWriter::new();
    let s = w.scalar("tiny");
    w.document(s);
    let bytes = w.finish_with(|raw| {
        raw.nodes[0].4 = 1 << 40; // scalar byte length
    });

    assert!(matches!(decode(bytes), Err(BlobError::TruncatedRegion { .. })));
}

#[test]
fn truncated_buffer_fails_cleanly() {
    let full = mapping_blob(&[("key", "value")]);
    // cut inside the node table: header decodes, table access must fail
    let cut = full[..100].to_vec();
    assert!(matches!(decode(cut), Err(BlobError::TruncatedRegion { .. })));
    // cut inside the header
    let cut = full[..40].to_vec();
    assert!(matches!(
        decode(cut),
        Err(BlobError::TruncatedHeader { len: 40 })
    ));
}
