//! Log entry data model, mirroring the logging API's `entries:list` shapes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::value::FieldMap;

/// The monitored resource a log entry was emitted against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitoredResource {
    /// Resource type identifier, e.g. `"container"`.
    #[serde(rename = "type", default)]
    pub resource_type: String,
    /// Resource labels; pod-scoped entries carry `pod_id` here.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// One log entry as returned by the `entries:list` call.
///
/// An entry carries at most one payload: `json_payload` for structured
/// records, otherwise `text_payload`. Both may be absent (e.g. protobuf
/// payloads, which podlog does not render).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Resource the entry belongs to.
    #[serde(default)]
    pub resource: MonitoredResource,
    /// Time the entry was received by the logging service.
    pub timestamp: DateTime<Utc>,
    /// Structured payload, if this is a JSON-payload entry.
    #[serde(default)]
    pub json_payload: Option<FieldMap>,
    /// Unstructured payload, if this is a text-payload entry.
    #[serde(default)]
    pub text_payload: Option<String>,
}

impl LogEntry {
    /// The entry's `pod_id` resource label, or `""` when absent.
    pub fn pod_id(&self) -> &str {
        self.resource
            .labels
            .get("pod_id")
            .map(String::as_str)
            .unwrap_or("")
    }
}
