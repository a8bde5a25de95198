//! `podlog` CLI — fetch cloud log entries and pretty-print them by pod.
//!
//! ## Usage
//!
//! ```sh
//! # All entries matching the filter file named by $LOG_FILTER_PATH
//! podlog logs all
//!
//! # Only entries whose pod_id starts with "checkout"
//! podlog logs checkout
//!
//! # Target production (any env containing "pr" selects the production
//! # project), with an explicit filter file
//! podlog logs checkout -e production --filter-file ./prod.filter
//! ```
//!
//! The filter file supplies the query filter, the ordering directive, and
//! the static token pair; see `podlog_core::filter` for the line format.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podlog_core::{FilterFile, ListEntriesRequest, LogClient, LogEntry, DEFAULT_PAGE_SIZE};

#[derive(Parser)]
#[command(name = "podlog", version, about = "Fetch and pretty-print cloud log entries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch log entries and print the ones matching a pod-id prefix
    #[command(alias = "log")]
    Logs {
        /// Pod-id prefix to match, or "all" to print every entry
        pod: String,

        /// Environment selector; any value containing "pr" targets the
        /// production project
        #[arg(short, long, default_value = "staging")]
        env: String,

        /// Filter file describing the query (see podlog-core docs)
        #[arg(long, env = "LOG_FILTER_PATH")]
        filter_file: String,

        /// Project id queried for non-production environments
        #[arg(long, env = "PODLOG_STAGING_PROJECT", default_value = "")]
        staging_project: String,

        /// Project id queried when --env selects production
        #[arg(long, env = "PODLOG_PRODUCTION_PROJECT", default_value = "")]
        production_project: String,

        /// Entries requested per API page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: i32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podlog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Logs {
            pod,
            env,
            filter_file,
            staging_project,
            production_project,
            page_size,
        } => {
            let project = resolve_project(&env, &staging_project, &production_project)?;
            fetch_logs(&pod, &project, &filter_file, page_size)
        }
    }
}

/// Pick the project id for an environment selector: anything containing
/// "pr" targets production, everything else staging. Only the selected
/// side's project id has to be configured.
fn resolve_project(env: &str, staging: &str, production: &str) -> Result<String> {
    if env.contains("pr") {
        if production.is_empty() {
            anyhow::bail!(
                "environment '{}' targets production but no production project is configured \
                 (--production-project or PODLOG_PRODUCTION_PROJECT)",
                env
            );
        }
        Ok(production.to_string())
    } else {
        if staging.is_empty() {
            anyhow::bail!(
                "environment '{}' targets staging but no staging project is configured \
                 (--staging-project or PODLOG_STAGING_PROJECT)",
                env
            );
        }
        Ok(staging.to_string())
    }
}

/// Load the filter file, query the logging API, and print matching entries.
fn fetch_logs(pod: &str, project: &str, filter_path: &str, page_size: i32) -> Result<()> {
    debug!(pod, project, filter_path, "fetching logs");

    let filter_file = FilterFile::load(filter_path)
        .with_context(|| format!("Failed to load filter file: {filter_path}"))?;
    let filter = filter_file.filter_for(project);

    // Echo the resolved filter so a surprising result set is explainable.
    println!("{filter}");

    let client = LogClient::new(filter_file.credentials.clone());
    let request = ListEntriesRequest {
        filter,
        order_by: filter_file.order_by.clone().unwrap_or_default(),
        page_size,
        ..ListEntriesRequest::for_project(project)
    };

    let mut index = 0usize;
    for entry in client.entries(request) {
        let entry = entry.context("Failed to list log entries")?;
        if pod != "all" && !entry.pod_id().starts_with(pod) {
            continue;
        }
        index += 1;
        print_entry(index, &entry)?;
    }
    debug!(matched = index, "done");

    Ok(())
}

/// Print one entry: a numbered header line, then the payload — flattened
/// and pretty-printed for structured entries, verbatim for text entries.
fn print_entry(index: usize, entry: &LogEntry) -> Result<()> {
    println!(
        "{}------{} - {}-----",
        index,
        format_timestamp(&entry.timestamp),
        entry.pod_id()
    );

    if let Some(payload) = &entry.json_payload {
        let flat = serde_json::Value::Object(podlog_core::flatten_object(payload));
        let pretty =
            serde_json::to_string_pretty(&flat).context("Failed to render payload as JSON")?;
        println!("{pretty}");
    } else {
        println!("{}", entry.text_payload.as_deref().unwrap_or_default());
    }

    Ok(())
}

/// Header timestamp format: `2024-05-17 08:30:12`.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_env_selects_production_project() {
        let project = resolve_project("production", "acme-staging", "acme-prod").unwrap();
        assert_eq!(project, "acme-prod");
        // The selector only needs to contain "pr".
        let project = resolve_project("pr", "acme-staging", "acme-prod").unwrap();
        assert_eq!(project, "acme-prod");
    }

    #[test]
    fn other_envs_select_staging_project() {
        let project = resolve_project("staging", "acme-staging", "acme-prod").unwrap();
        assert_eq!(project, "acme-staging");
        let project = resolve_project("dev", "acme-staging", "").unwrap();
        assert_eq!(project, "acme-staging");
    }

    #[test]
    fn production_without_project_is_an_error() {
        let err = resolve_project("prod", "acme-staging", "").unwrap_err();
        assert!(err.to_string().contains("production"));
    }

    #[test]
    fn production_does_not_require_a_staging_project() {
        let project = resolve_project("production", "", "acme-prod").unwrap();
        assert_eq!(project, "acme-prod");
    }

    #[test]
    fn staging_without_project_is_an_error() {
        let err = resolve_project("dev", "", "acme-prod").unwrap_err();
        assert!(err.to_string().contains("no staging project"));
    }

    #[test]
    fn timestamp_formats_as_date_and_time() {
        let ts: DateTime<Utc> = "2024-05-17T08:30:12Z".parse().unwrap();
        assert_eq!(format_timestamp(&ts), "2024-05-17 08:30:12");
    }
}
