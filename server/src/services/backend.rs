//! Backend-as-a-service client: hosted auth plus a row-query REST API.
//!
//! DESIGN
//! ======
//! The backend speaks the Supabase wire protocol: a GoTrue-style auth service
//! under `/auth/v1` and a PostgREST-style record API under `/rest/v1`. Routes
//! only see the [`AuthApi`] and [`RecordApi`] traits so tests can swap in
//! mocks. Response parsing lives in pure functions for testability.

use std::time::Duration;

use async_trait::async_trait;
use client::net::types::User;
use reqwest::RequestBuilder;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Response { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The access or refresh token was rejected.
    #[error("backend rejected the session token")]
    Unauthorized,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// AUTH MODEL
// =============================================================================

/// Token pair issued by the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expires_in: u64,
    pub user: User,
}

/// Outcome of a sign-up. `session` is `None` while email confirmation is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub user: User,
    pub session: Option<Session>,
}

/// Hosted authentication operations.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Register a new account; names are stored as user metadata.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<SignUpResult, BackendError>;

    /// Exchange email + password for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError>;

    /// Revoke the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError>;

    /// Resolve the user an access token belongs to.
    async fn get_user(&self, access_token: &str) -> Result<User, BackendError>;

    /// Trade a refresh token for a fresh session.
    async fn refresh(&self, refresh_token: &str) -> Result<Session, BackendError>;
}

// =============================================================================
// RECORD QUERIES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A read-only row query against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub table: &'static str,
    pub select: String,
    pub order: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn table(table: &'static str) -> Self {
        Self { table, select: "*".to_owned(), order: None, limit: None }
    }

    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_owned(), direction));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as REST query-string pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_owned(), self.select.clone())];
        if let Some((col, dir)) = &self.order {
            let dir = match dir {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            pairs.push(("order".to_owned(), format!("{col}.{dir}")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }
}

/// Row queries executed on behalf of a signed-in user.
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// Run `query` with the user's access token; returns the raw JSON rows.
    async fn select(&self, access_token: &str, query: &Query) -> Result<Vec<serde_json::Value>, BackendError>;
}

/// Decode raw rows into typed records. Rows that do not match `T` are
/// logged and skipped; the rest are kept in order.
#[must_use]
pub fn decode_rows<T: serde::de::DeserializeOwned>(table: &str, rows: Vec<serde_json::Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, table, "skipping malformed row");
                None
            }
        })
        .collect()
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    site_url: Option<String>,
}

impl BackendClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.backend_url.clone(),
            anon_key: config.anon_key.clone(),
            site_url: config.site_url.clone(),
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// Attach the API key and, when given, the user's bearer token.
    fn authorized(&self, request: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
        let bearer = access_token.unwrap_or(&self.anon_key);
        request.header("apikey", &self.anon_key).bearer_auth(bearer)
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, BackendError> {
        let response = request.send().await.map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| BackendError::Request(e.to_string()))?;
        check_status(status, &text)?;
        Ok(text)
    }

    async fn token_grant(&self, grant_type: &str, body: serde_json::Value) -> Result<Session, BackendError> {
        let request = self
            .authorized(self.http.post(self.auth_url("token")), None)
            .query(&[("grant_type", grant_type)])
            .json(&body);
        let text = self.send(request).await?;
        parse_session(&text)
    }
}

#[async_trait]
impl AuthApi for BackendClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<SignUpResult, BackendError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "data": { "first_name": first_name, "last_name": last_name },
        });
        let mut request = self.authorized(self.http.post(self.auth_url("signup")), None).json(&body);
        if let Some(site_url) = &self.site_url {
            request = request.query(&[("redirect_to", format!("{site_url}/"))]);
        }
        let text = self.send(request).await?;
        parse_sign_up(&text)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        self.token_grant("password", serde_json::json!({ "email": email, "password": password }))
            .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let request = self.authorized(self.http.post(self.auth_url("logout")), Some(access_token));
        self.send(request).await.map(|_| ())
    }

    async fn get_user(&self, access_token: &str) -> Result<User, BackendError> {
        let request = self.authorized(self.http.get(self.auth_url("user")), Some(access_token));
        let text = self.send(request).await?;
        parse_user(&text)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, BackendError> {
        match self
            .token_grant("refresh_token", serde_json::json!({ "refresh_token": refresh_token }))
            .await
        {
            // An expired or revoked refresh token comes back as a 400.
            Err(BackendError::Response { status: 400, .. }) => Err(BackendError::Unauthorized),
            other => other,
        }
    }
}

#[async_trait]
impl RecordApi for BackendClient {
    async fn select(&self, access_token: &str, query: &Query) -> Result<Vec<serde_json::Value>, BackendError> {
        let request = self
            .authorized(self.http.get(self.rest_url(query.table)), Some(access_token))
            .header("accept", "application/json")
            .query(&query.to_pairs());
        let text = self.send(request).await?;
        serde_json::from_str::<Vec<serde_json::Value>>(&text).map_err(|e| BackendError::Parse(e.to_string()))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<WireUserMetadata>,
}

#[derive(Deserialize, Default)]
struct WireUserMetadata {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

#[derive(Deserialize)]
struct WireSession {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: u64,
    user: WireUser,
}

impl From<WireUser> for User {
    fn from(wire: WireUser) -> Self {
        let meta = wire.user_metadata.unwrap_or_default();
        Self { id: wire.id, email: wire.email, first_name: meta.first_name, last_name: meta.last_name }
    }
}

impl From<WireSession> for Session {
    fn from(wire: WireSession) -> Self {
        Self {
            access_token: wire.access_token,
            refresh_token: wire.refresh_token,
            expires_in: wire.expires_in,
            user: wire.user.into(),
        }
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Map a non-success status to an error; 401/403 mean the token was rejected.
fn check_status(status: u16, body: &str) -> Result<(), BackendError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(BackendError::Unauthorized),
        _ => Err(BackendError::Response { status, message: error_message(body) }),
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// The auth service and the record API use different field names, so the
/// first non-empty string among `error_description`, `msg`, `message`, and
/// `error` wins.
#[must_use]
pub fn error_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(text) = map.get(key).and_then(serde_json::Value::as_str) {
                if !text.trim().is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { "empty response from backend".to_owned() } else { trimmed.to_owned() }
}

fn parse_user(json: &str) -> Result<User, BackendError> {
    serde_json::from_str::<WireUser>(json)
        .map(User::from)
        .map_err(|e| BackendError::Parse(e.to_string()))
}

fn parse_session(json: &str) -> Result<Session, BackendError> {
    serde_json::from_str::<WireSession>(json)
        .map(Session::from)
        .map_err(|e| BackendError::Parse(e.to_string()))
}

/// A sign-up answers with a full session when the account is active right
/// away, or with the bare user (possibly wrapped in `user`) when the email
/// address still needs confirming.
fn parse_sign_up(json: &str) -> Result<SignUpResult, BackendError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))?;
    if value.get("access_token").is_some_and(|t| !t.is_null()) {
        let session = parse_session(json)?;
        return Ok(SignUpResult { user: session.user.clone(), session: Some(session) });
    }
    let user_value = match value.get("user") {
        Some(user) if !user.is_null() => user.clone(),
        _ => value,
    };
    let user = serde_json::from_value::<WireUser>(user_value).map_err(|e| BackendError::Parse(e.to_string()))?;
    Ok(SignUpResult { user: user.into(), session: None })
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
