//! Auth routes: sign-up, sign-in, sign-out, and the current-user lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never holds backend tokens in script-visible storage. The
//! access/refresh pair lives in HttpOnly cookies set here, and [`AuthUser`]
//! turns those cookies back into a user on every authenticated request.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{ApiError, SignInRequest, SignUpOutcome, SignUpRequest, User};
use time::Duration;

use crate::services::backend::{BackendError, Session};
use crate::state::AppState;

pub const ACCESS_COOKIE: &str = "vb_access_token";
pub const REFRESH_COOKIE: &str = "vb_refresh_token";
const REFRESH_MAX_AGE_DAYS: i64 = 30;

// =============================================================================
// COOKIES
// =============================================================================

fn base_cookie(name: &'static str, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Store both session tokens. The access cookie expires with the token.
pub(crate) fn with_session(jar: CookieJar, session: &Session, secure: bool) -> CookieJar {
    let access_age = Duration::seconds(i64::try_from(session.expires_in).unwrap_or(i64::MAX));
    jar.add(base_cookie(ACCESS_COOKIE, session.access_token.clone(), secure, access_age))
        .add(base_cookie(REFRESH_COOKIE, session.refresh_token.clone(), secure, Duration::days(REFRESH_MAX_AGE_DAYS)))
}

pub(crate) fn without_session(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(base_cookie(ACCESS_COOKIE, String::new(), secure, Duration::ZERO))
        .add(base_cookie(REFRESH_COOKIE, String::new(), secure, Duration::ZERO))
}

fn cookie_value<'a>(jar: &'a CookieJar, name: &str) -> Option<&'a str> {
    jar.get(name).map(Cookie::value).filter(|v| !v.is_empty())
}

// =============================================================================
// ERRORS
// =============================================================================

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiError { error: message.into() })).into_response()
}

/// Status for a failed backend call on a route that has no special rejection rule.
pub(crate) fn backend_error_to_status(err: &BackendError) -> StatusCode {
    match err {
        BackendError::Unauthorized => StatusCode::UNAUTHORIZED,
        BackendError::Response { status, .. } if (400..500).contains(status) => StatusCode::BAD_REQUEST,
        BackendError::Request(_) | BackendError::Response { .. } | BackendError::Parse(_) => StatusCode::BAD_GATEWAY,
        BackendError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Any client-side rejection of a sign-in is reported as bad credentials.
pub(crate) fn sign_in_error_to_status(err: &BackendError) -> StatusCode {
    match backend_error_to_status(err) {
        StatusCode::BAD_REQUEST => StatusCode::UNAUTHORIZED,
        other => other,
    }
}

/// Message to show the user for a backend failure. Upstream outages get a
/// generic line instead of leaking internals.
fn user_message(err: &BackendError) -> String {
    match err {
        BackendError::Response { status, message } if (400..500).contains(status) => message.clone(),
        BackendError::Unauthorized => "Invalid login credentials".to_owned(),
        _ => "The authentication service is unavailable. Try again shortly.".to_owned(),
    }
}

fn backend_failure(err: &BackendError, status: StatusCode) -> Response {
    if status.is_server_error() {
        tracing::error!(error = %err, "backend auth call failed");
    } else {
        tracing::debug!(error = %err, "backend rejected auth request");
    }
    error_response(status, user_message(err))
}

// =============================================================================
// INPUT VALIDATION
// =============================================================================

/// Normalize and check credentials before they are relayed.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("email and password are required");
    }
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if !valid {
        return Err("email address is not valid");
    }
    Ok(email.to_owned())
}

fn optional_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookies.
/// Use as a handler parameter to require authentication.
///
/// When the access token has expired but the refresh token is still good, the
/// session is refreshed once and the new pair is carried in `refreshed`; the
/// handler passes its jar through [`AuthUser::persist`] so the browser gets it.
pub struct AuthUser {
    pub user: User,
    pub access_token: String,
    pub refreshed: Option<Session>,
}

impl AuthUser {
    /// Add re-issued session cookies to `jar`, if a refresh happened.
    #[must_use]
    pub fn persist(&self, jar: CookieJar, secure: bool) -> CookieJar {
        match &self.refreshed {
            Some(session) => with_session(jar, session, secure),
            None => jar,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);

        if let Some(token) = cookie_value(&jar, ACCESS_COOKIE) {
            match app_state.auth.get_user(token).await {
                Ok(user) => return Ok(Self { user, access_token: token.to_owned(), refreshed: None }),
                Err(BackendError::Unauthorized) => {}
                Err(e) => {
                    tracing::error!(error = %e, "session validation failed");
                    return Err(backend_error_to_status(&e));
                }
            }
        }

        let refresh_token = cookie_value(&jar, REFRESH_COOKIE).ok_or(StatusCode::UNAUTHORIZED)?;
        match app_state.auth.refresh(refresh_token).await {
            Ok(session) => Ok(Self {
                user: session.user.clone(),
                access_token: session.access_token.clone(),
                refreshed: Some(session),
            }),
            Err(BackendError::Unauthorized) => Err(StatusCode::UNAUTHORIZED),
            Err(e) => {
                tracing::error!(error = %e, "session refresh failed");
                Err(backend_error_to_status(&e))
            }
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/sign-up`: create an account; sign in when no confirmation is needed.
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignUpRequest>) -> Response {
    let email = match validate_credentials(&body.email, &body.password) {
        Ok(email) => email,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, msg),
    };

    let result = state
        .auth
        .sign_up(
            &email,
            &body.password,
            optional_name(body.first_name.as_deref()),
            optional_name(body.last_name.as_deref()),
        )
        .await;

    match result {
        Ok(result) => {
            let confirmation_required = result.session.is_none();
            let jar = match &result.session {
                Some(session) => with_session(jar, session, state.config.cookie_secure),
                None => jar,
            };
            tracing::info!(user_id = %result.user.id, confirmation_required, "account created");
            (jar, Json(SignUpOutcome { user: result.user, confirmation_required })).into_response()
        }
        Err(e) => backend_failure(&e, backend_error_to_status(&e)),
    }
}

/// `POST /api/auth/sign-in`: exchange credentials for session cookies.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInRequest>) -> Response {
    let email = match validate_credentials(&body.email, &body.password) {
        Ok(email) => email,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, msg),
    };

    match state.auth.sign_in(&email, &body.password).await {
        Ok(session) => {
            let jar = with_session(jar, &session, state.config.cookie_secure);
            (jar, Json(session.user)).into_response()
        }
        Err(e) => backend_failure(&e, sign_in_error_to_status(&e)),
    }
}

/// `POST /api/auth/sign-out`: revoke the session upstream (best effort) and clear cookies.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = cookie_value(&jar, ACCESS_COOKIE) {
        if let Err(e) = state.auth.sign_out(token).await {
            tracing::warn!(error = %e, "backend sign-out failed; clearing cookies anyway");
        }
    }
    (without_session(jar, state.config.cookie_secure), StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`: return the current user.
pub async fn me(State(state): State<AppState>, jar: CookieJar, auth: AuthUser) -> (CookieJar, Json<User>) {
    let jar = auth.persist(jar, state.config.cookie_secure);
    (jar, Json(auth.user))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
