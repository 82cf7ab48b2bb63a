//! Record queries behind the dashboard.
//!
//! ERROR HANDLING
//! ==============
//! The dashboard has no error state. A failed query is logged here and
//! replaced by an empty list, so callers always get rows.

use client::net::types::{Project, Scan};

use super::backend::{BackendError, Direction, Query, RecordApi, decode_rows};

/// How many scans the "Recent Scans" panel shows.
pub const RECENT_SCAN_LIMIT: usize = 5;

/// Every project visible to the user, newest first.
#[must_use]
pub fn projects_query() -> Query {
    Query::table("projects").order("created_at", Direction::Desc)
}

/// The most recently started scans.
#[must_use]
pub fn recent_scans_query() -> Query {
    Query::table("scans")
        .order("started_at", Direction::Desc)
        .limit(RECENT_SCAN_LIMIT)
}

/// # Errors
///
/// Returns the backend error if the query fails. Malformed rows are dropped.
pub async fn list_projects(records: &dyn RecordApi, access_token: &str) -> Result<Vec<Project>, BackendError> {
    let query = projects_query();
    Ok(decode_rows(query.table, records.select(access_token, &query).await?))
}

/// # Errors
///
/// Returns the backend error if the query fails. Malformed rows are dropped.
pub async fn recent_scans(records: &dyn RecordApi, access_token: &str) -> Result<Vec<Scan>, BackendError> {
    let query = recent_scans_query();
    Ok(decode_rows(query.table, records.select(access_token, &query).await?))
}

/// Unwrap a record result, logging and substituting an empty list on error.
pub fn fetch_or_empty<T>(what: &'static str, result: Result<Vec<T>, BackendError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, records = what, "record fetch failed");
        Vec::new()
    })
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
