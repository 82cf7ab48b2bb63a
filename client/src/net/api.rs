//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/empty/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth helpers return `Result<_, String>` so forms can show the backend's
//! message. Record helpers log and fall back to empty collections; the
//! dashboard has no distinct error state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Project, Scan, SignInRequest, SignUpOutcome, SignUpRequest, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiError;

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in";
pub const SIGN_UP_ENDPOINT: &str = "/api/auth/sign-up";
pub const SIGN_OUT_ENDPOINT: &str = "/api/auth/sign-out";
pub const PROJECTS_ENDPOINT: &str = "/api/projects";
pub const SCANS_ENDPOINT: &str = "/api/scans";

/// Pick the message to show for a failed request: the server's `error`
/// field when present, else a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: Option<ApiError>) -> String {
    match body {
        Some(ApiError { error }) if !error.trim().is_empty() => error,
        _ => format!("request failed: {status}"),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns the server's error message when the credentials are rejected or
/// the request fails.
pub async fn sign_in(request: &SignInRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_IN_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(failure_message(status, resp.json::<ApiError>().await.ok()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns the server's error message when the backend refuses the sign-up
/// (e.g. the email is already registered) or the request fails.
pub async fn sign_up(request: &SignUpRequest) -> Result<SignUpOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_UP_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(failure_message(status, resp.json::<ApiError>().await.ok()));
        }
        resp.json::<SignUpOutcome>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Sign out by calling `POST /api/auth/sign-out`.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT).send().await {
            log::warn!("sign-out request failed: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_rows<T: serde::de::DeserializeOwned>(endpoint: &str) -> Vec<T> {
    let result = async {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(failure_message(status, resp.json::<ApiError>().await.ok()));
        }
        resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
    }
    .await;

    result.unwrap_or_else(|e| {
        log::error!("error fetching {endpoint}: {e}");
        Vec::new()
    })
}

/// Fetch the user's projects, newest first. Empty on any failure.
pub async fn fetch_projects() -> Vec<Project> {
    #[cfg(feature = "hydrate")]
    {
        fetch_rows(PROJECTS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the five most recent scans. Empty on any failure.
pub async fn fetch_scans() -> Vec<Scan> {
    #[cfg(feature = "hydrate")]
    {
        fetch_rows(SCANS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch projects and scans concurrently; resolves once both have settled.
pub async fn fetch_dashboard_data() -> (Vec<Project>, Vec<Scan>) {
    #[cfg(feature = "hydrate")]
    {
        futures::join!(fetch_projects(), fetch_scans())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (fetch_projects().await, fetch_scans().await)
    }
}
