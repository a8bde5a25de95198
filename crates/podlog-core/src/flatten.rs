//! Payload flattening — converts a [`LogValue`] tree into plain JSON.
//!
//! The output drops the wire format's type tags and renders every scalar as
//! text: nulls become the `"NULL_VALUE"` marker, numbers their shortest
//! round-trippable decimal form, booleans `"true"`/`"false"`. Structs and
//! lists keep their shape, with children flattened recursively. Downstream
//! consumers parse these stringified scalars, so the behavior is load-bearing
//! even though it looks like an accident of history (see DESIGN.md).
//!
//! Flattening is total: an unset node degrades to its debug form with a
//! `warn!` diagnostic rather than aborting the entry it belongs to.
//!
//! # Example
//! ```
//! use podlog_core::{flatten, LogValue};
//!
//! let value = LogValue::object([
//!     ("pi".to_string(), LogValue::number(3.14)),
//!     ("ok".to_string(), LogValue::bool(true)),
//! ]);
//! let flat = flatten(&value);
//! assert_eq!(flat, serde_json::json!({"pi": "3.14", "ok": "true"}));
//! ```

use serde_json::{Map, Value};
use tracing::warn;

use crate::value::{FieldMap, LogValue, ValueKind};

/// Marker string emitted for explicit nulls, matching the wire format's
/// textual name for its null variant.
pub const NULL_MARKER: &str = "NULL_VALUE";

/// Flatten one payload value into a JSON value.
///
/// Pure and infallible: every variant is handled, recursion depth is bounded
/// by the (finite) input tree, and the output contains only strings, objects,
/// and arrays. Safe to call concurrently on independent trees.
pub fn flatten(value: &LogValue) -> Value {
    match &value.kind {
        Some(ValueKind::Null) => Value::String(NULL_MARKER.to_string()),
        Some(ValueKind::Bool(b)) => Value::String(b.to_string()),
        Some(ValueKind::Number(n)) => Value::String(format_number(*n)),
        Some(ValueKind::String(s)) => Value::String(s.clone()),
        Some(ValueKind::List(items)) => Value::Array(items.iter().map(flatten).collect()),
        Some(ValueKind::Struct(fields)) => Value::Object(flatten_object(fields)),
        None => {
            // Never produced by a conforming backend; stringify instead of
            // losing the whole entry.
            warn!(value = ?value, "payload node has no kind set, passing through debug form");
            Value::String(format!("{value:?}"))
        }
    }
}

/// Flatten a whole structured payload (the top-level field map of an entry).
///
/// Each field is flattened under its original key. Key order in the result
/// is not semantically meaningful.
pub fn flatten_object(fields: &FieldMap) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, child)| (key.clone(), flatten(child)))
        .collect()
}

/// Render an f64 in the shortest decimal form that parses back to the same
/// value: no fixed precision, no trailing fractional zeros (`2.0` → `"2"`).
fn format_number(n: f64) -> String {
    n.to_string()
}
