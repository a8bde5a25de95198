//! Filter-file parsing — turns a line-oriented config file into a query.
//!
//! The filter file mixes three things in one place so that a query, its
//! ordering, and the credentials it runs under travel together:
//!
//! - `#`-prefixed lines are comments and are dropped.
//! - `log.orderBy.timestamp=<dir>` becomes the `timestamp <dir>` ordering
//!   directive (e.g. `desc`).
//! - Lines mentioning `refresh_token` or `access_token` contribute the
//!   static credential pair; the token is everything after the first `:`.
//! - Every other line — blank lines included — accumulates into the filter
//!   expression verbatim, newline-joined.
//!
//! The accumulated filter may reference the target project as `$env`;
//! [`FilterFile::filter_for`] substitutes the resolved project id.
//!
//! # Example
//! ```
//! use podlog_core::FilterFile;
//!
//! let file = FilterFile::parse(
//!     "# payment service only\n\
//!      log.orderBy.timestamp=desc\n\
//!      access_token:ya29.secret\n\
//!      resource.labels.project_id=\"$env\"\n",
//! );
//! assert_eq!(file.order_by.as_deref(), Some("timestamp desc"));
//! assert_eq!(file.credentials.access_token, "ya29.secret");
//! assert_eq!(
//!     file.filter_for("acme-staging"),
//!     "resource.labels.project_id=\"acme-staging\"\n"
//! );
//! ```

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Static token pair read from the filter file. Passed explicitly to
/// [`crate::LogClient::new`]; never stored in process-wide state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    /// OAuth access token sent as the Bearer credential.
    pub access_token: String,
    /// OAuth refresh token. Carried for completeness; podlog never refreshes.
    pub refresh_token: String,
}

/// Parsed contents of a filter file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterFile {
    /// Accumulated filter expression, with `$env` not yet substituted.
    pub filter: String,
    /// Ordering directive in API form (`"timestamp desc"`), if present.
    pub order_by: Option<String>,
    /// Credential pair found in the file (empty strings when absent).
    pub credentials: Credentials,
}

impl FilterFile {
    /// Read and parse the filter file at `path`.
    ///
    /// # Errors
    ///
    /// Only I/O failures; the line format itself is infallible.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Parse filter-file text. Infallible: unrecognized lines simply become
    /// part of the filter expression.
    pub fn parse(text: &str) -> Self {
        let mut parsed = Self::default();

        for line in text.lines() {
            if line.starts_with('#') {
                continue;
            }
            if !line.is_empty() {
                if let Some((key, direction)) = line.split_once('=') {
                    if key.contains("log.orderBy.timestamp") {
                        parsed.order_by = Some(format!("timestamp {direction}"));
                        continue;
                    }
                }
                if line.contains("refresh_token") {
                    parsed.credentials.refresh_token = token_value(line).to_string();
                    continue;
                } else if line.contains("access_token") {
                    parsed.credentials.access_token = token_value(line).to_string();
                    continue;
                }
            }
            parsed.filter.push_str(line);
            parsed.filter.push('\n');
        }

        parsed
    }

    /// The filter expression with every `$env` occurrence replaced by
    /// `project_id`.
    pub fn filter_for(&self, project_id: &str) -> String {
        self.filter.replace("$env", project_id)
    }
}

/// Everything after the first `:` of a credential line, or the whole line
/// when no separator is present. Intentionally not trimmed: the token starts
/// immediately after the separator.
fn token_value(line: &str) -> &str {
    match line.find(':') {
        Some(idx) => &line[idx + 1..],
        None => line,
    }
}
