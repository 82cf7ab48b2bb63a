//! Record routes feeding the dashboard.

use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use client::net::types::{Project, Scan};

use super::auth::AuthUser;
use crate::services::records;
use crate::state::AppState;

/// `GET /api/projects`: the user's projects, newest first. Empty on backend failure.
pub async fn list_projects(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
) -> (CookieJar, Json<Vec<Project>>) {
    let rows = records::fetch_or_empty(
        "projects",
        records::list_projects(state.records.as_ref(), &auth.access_token).await,
    );
    (auth.persist(jar, state.config.cookie_secure), Json(rows))
}

/// `GET /api/scans`: the five most recent scans. Empty on backend failure.
pub async fn recent_scans(State(state): State<AppState>, jar: CookieJar, auth: AuthUser) -> (CookieJar, Json<Vec<Scan>>) {
    let rows = records::fetch_or_empty("scans", records::recent_scans(state.records.as_ref(), &auth.access_token).await);
    (auth.persist(jar, state.config.cookie_secure), Json(rows))
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
