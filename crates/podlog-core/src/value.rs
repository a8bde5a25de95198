//! Structured payload value types.
//!
//! Cloud log entries carry their structured payload as a tree of tagged
//! values mirroring the wire representation: each node is a `kind` slot that
//! holds exactly one of six variants, or nothing at all (an unset node, which
//! a well-formed producer never emits but the wire format permits). The unset
//! case is kept explicit so downstream processing can degrade gracefully
//! instead of failing an entire entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Field map of a structured payload. Key order carries no meaning; a
/// `BTreeMap` keeps iteration deterministic without pretending otherwise.
pub type FieldMap = BTreeMap<String, LogValue>;

/// One node of a structured log payload.
///
/// Wraps an optional [`ValueKind`] rather than being an enum itself so that
/// the wire format's "no variant populated" state is representable. Use the
/// constructors for the common cases; [`LogValue::unset`] builds the empty
/// node.
#[derive(Debug, Clone, PartialEq)]
pub struct LogValue {
    /// The populated variant, or `None` for an unset node.
    pub kind: Option<ValueKind>,
}

/// The closed set of payload value variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueKind {
    /// Explicit null marker.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// 64-bit floating point scalar (the wire format has no integer type).
    Number(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered sequence of child values.
    List(Vec<LogValue>),
    /// Unordered string-keyed mapping of child values.
    Struct(FieldMap),
}

impl LogValue {
    /// The explicit null value.
    pub fn null() -> Self {
        Self {
            kind: Some(ValueKind::Null),
        }
    }

    /// A boolean value.
    pub fn bool(b: bool) -> Self {
        Self {
            kind: Some(ValueKind::Bool(b)),
        }
    }

    /// A numeric value.
    pub fn number(n: f64) -> Self {
        Self {
            kind: Some(ValueKind::Number(n)),
        }
    }

    /// A string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self {
            kind: Some(ValueKind::String(s.into())),
        }
    }

    /// A list value, preserving element order.
    pub fn list(items: impl IntoIterator<Item = LogValue>) -> Self {
        Self {
            kind: Some(ValueKind::List(items.into_iter().collect())),
        }
    }

    /// A struct value built from key/value pairs.
    pub fn object(fields: impl IntoIterator<Item = (String, LogValue)>) -> Self {
        Self {
            kind: Some(ValueKind::Struct(fields.into_iter().collect())),
        }
    }

    /// A node with no variant populated. Only ever seen from malformed
    /// producers; exists so the flattener's fallback path can be exercised.
    pub fn unset() -> Self {
        Self { kind: None }
    }
}

impl<'de> Deserialize<'de> for LogValue {
    /// Any JSON value deserializes into a populated node; the unset state
    /// has no JSON spelling and never arises from deserialization.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(LogValue {
            kind: Some(ValueKind::deserialize(deserializer)?),
        })
    }
}
