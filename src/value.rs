// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The generic value tree a decoded blob reconstructs.
//!
//! Mappings are kept as a vector of pairs in encounter order, not as a hash
//! map. The producer's table order is semantically significant in YAML, and
//! duplicate keys are preserved rather than silently collapsed. Lookup via
//! [`Value::get`] resolves duplicates to the last occurrence, which is what
//! an ordered-map assignment loop would have produced.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reconstructed document value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value (empty document).
    Absent,
    /// Scalar text, exactly as stored in the string table.
    Scalar(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// Ordered key/value pairs, duplicates preserved.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Scalar text, if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Look up a mapping key. Duplicate keys resolve to the last occurrence
    /// (last write wins). Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(pairs) => pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Flow-style rendering: `~` for absent, bare scalars, `[a, b]`, `{k: v}`.
///
/// This is the canonical textual form used to coerce non-scalar mapping keys
/// during decoding, so it must stay deterministic.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "~"),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Mapping(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_duplicate() {
        let map = Value::Mapping(vec![
            ("k".to_string(), Value::Scalar("first".to_string())),
            ("other".to_string(), Value::Scalar("x".to_string())),
            ("k".to_string(), Value::Scalar("second".to_string())),
        ]);
        assert_eq!(map.get("k").and_then(|v| v.as_str()), Some("second"));
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.as_mapping().map(<[_]>::len), Some(3));
    }

    #[test]
    fn get_on_non_mapping_is_none() {
        assert_eq!(Value::Scalar("x".to_string()).get("x"), None);
        assert_eq!(Value::Absent.get("x"), None);
    }

    #[test]
    fn display_is_flow_style() {
        let v = Value::Mapping(vec![
            ("a".to_string(), Value::Scalar("1".to_string())),
            (
                "b".to_string(),
                Value::Sequence(vec![
                    Value::Scalar("x".to_string()),
                    Value::Absent,
                ]),
            ),
        ]);
        assert_eq!(v.to_string(), "{a: 1, b: [x, ~]}");
    }
}
