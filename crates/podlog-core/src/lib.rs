//! # podlog-core
//!
//! Library behind the `podlog` CLI: fetch cloud log entries for a project
//! and render their structured payloads as plain JSON.
//!
//! The centerpiece is payload **flattening** — the recursive conversion of a
//! tagged structured value ([`LogValue`]) into an untyped JSON tree in which
//! every scalar is a string. Around it sit the pieces a fetch needs: a
//! line-oriented filter-file parser that also carries the static credential
//! pair, and a blocking, paginated client for the `entries:list` endpoint.
//!
//! ## Quick start
//!
//! ```rust
//! use podlog_core::{flatten, LogValue};
//!
//! let value = LogValue::list([
//!     LogValue::string("a"),
//!     LogValue::bool(true),
//!     LogValue::null(),
//! ]);
//! assert_eq!(
//!     flatten(&value),
//!     serde_json::json!(["a", "true", "NULL_VALUE"])
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — tagged payload value tree (`LogValue` / `ValueKind`)
//! - [`flatten`] — payload flattening into JSON-encoder-ready values
//! - [`filter`] — filter-file parsing (`FilterFile`, `Credentials`)
//! - [`entry`] — `LogEntry` and resource shapes
//! - [`client`] — paginated `entries:list` client (`LogClient`)
//! - [`error`] — error types (`PodlogError`)

pub mod client;
pub mod entry;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod value;

pub use client::{EntryPages, ListEntriesRequest, ListPage, LogClient, DEFAULT_PAGE_SIZE};
pub use entry::{LogEntry, MonitoredResource};
pub use error::{PodlogError, Result};
pub use filter::{Credentials, FilterFile};
pub use flatten::{flatten, flatten_object, NULL_MARKER};
pub use value::{FieldMap, LogValue, ValueKind};
