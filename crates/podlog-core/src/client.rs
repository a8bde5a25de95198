//! Logging API client — authenticated, paginated `entries:list` calls.
//!
//! The client is deliberately small: one endpoint, static Bearer
//! authentication from a [`Credentials`] pair injected at construction, and
//! a next-page-token loop exposed as an [`Iterator`]. There is no token
//! refresh and no retry; a failed page surfaces as an error item and ends
//! iteration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::LogEntry;
use crate::error::{PodlogError, Result};
use crate::filter::Credentials;

/// Production endpoint of the logging service.
const DEFAULT_BASE_URL: &str = "https://logging.googleapis.com";

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: i32 = 1000;

/// Parameters of one `entries:list` query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesRequest {
    /// Resource names to search, e.g. `["projects/acme-staging"]`.
    pub resource_names: Vec<String>,
    /// Advanced-filter expression; empty selects everything.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
    /// Ordering directive, e.g. `"timestamp desc"`; empty for API default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_by: String,
    /// Maximum entries per page.
    pub page_size: i32,
    /// Continuation token from a previous page; empty for the first page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListEntriesRequest {
    /// A query over one project with the default page size.
    pub fn for_project(project_id: &str) -> Self {
        Self {
            resource_names: vec![format!("projects/{project_id}")],
            filter: String::new(),
            order_by: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_token: String::new(),
        }
    }
}

/// One page of results.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Entries in this page, in the requested order.
    #[serde(default)]
    pub entries: Vec<LogEntry>,
    /// Token for the next page; empty when this page is the last.
    #[serde(default)]
    pub next_page_token: String,
}

/// Blocking client for the logging API.
pub struct LogClient {
    http: reqwest::blocking::Client,
    base_url: String,
    credentials: Credentials,
}

impl LogClient {
    /// Build a client that authenticates with the given static credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch a single page of entries.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses (with the response body in
    /// the error message), and malformed response bodies.
    pub fn list_entries(&self, request: &ListEntriesRequest) -> Result<ListPage> {
        let url = format!("{}/v2/entries:list", self.base_url);
        debug!(
            filter = %request.filter,
            page_token = %request.page_token,
            "listing log entries"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.credentials.access_token)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PodlogError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        // Decode from the body text rather than `Response::json` so a
        // malformed body surfaces as a decode error, not a transport error.
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Iterate over all entries matching `request`, following page tokens
    /// until the service reports no further page.
    pub fn entries(&self, request: ListEntriesRequest) -> EntryPages<'_> {
        EntryPages {
            client: self,
            request,
            buffered: Vec::new(),
            done: false,
        }
    }
}

/// Iterator over paginated entries. Yields `Err` at most once, for the page
/// fetch that failed, then stops.
pub struct EntryPages<'a> {
    client: &'a LogClient,
    request: ListEntriesRequest,
    /// Remaining entries of the current page, in reverse (popped from back).
    buffered: Vec<LogEntry>,
    done: bool,
}

impl Iterator for EntryPages<'_> {
    type Item = Result<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.buffered.pop() {
                return Some(Ok(entry));
            }
            if self.done {
                return None;
            }

            let page = match self.client.list_entries(&self.request) {
                Ok(page) => page,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            if page.next_page_token.is_empty() {
                self.done = true;
            }
            self.request.page_token = page.next_page_token;

            if page.entries.is_empty() && self.done {
                return None;
            }
            self.buffered = page.entries;
            self.buffered.reverse();
        }
    }
}
