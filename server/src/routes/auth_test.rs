use axum::body::to_bytes;
use axum::http::Request;
use axum::http::header::{COOKIE, SET_COOKIE};

use super::*;
use crate::services::backend::SignUpResult;
use crate::state::test_helpers::{GOOD_PASSWORD, MockBackend, session, test_app_state, user};

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect()
}

fn sign_in_body(email: &str, password: &str) -> Json<SignInRequest> {
    Json(SignInRequest { email: email.to_owned(), password: password.to_owned() })
}

fn sign_up_body(email: &str, first_name: Option<&str>) -> Json<SignUpRequest> {
    Json(SignUpRequest {
        email: email.to_owned(),
        password: "pw".to_owned(),
        first_name: first_name.map(str::to_owned),
        last_name: Some("  ".to_owned()),
    })
}

async fn extract(state: &AppState, cookie: Option<&str>) -> Result<AuthUser, StatusCode> {
    let mut builder = Request::builder().uri("/api/auth/me");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    AuthUser::from_request_parts(&mut parts, state).await
}

// =============================================================================
// validate_credentials
// =============================================================================

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(validate_credentials("  ada@example.com\n", "pw"), Ok("ada@example.com".to_owned()));
}

#[test]
fn validate_credentials_rejects_missing_fields() {
    assert_eq!(validate_credentials("", "pw"), Err("email and password are required"));
    assert_eq!(validate_credentials("ada@example.com", ""), Err("email and password are required"));
}

#[test]
fn validate_credentials_rejects_malformed_email() {
    for email in ["ada", "ada@", "@example.com", "a@b@c"] {
        assert_eq!(validate_credentials(email, "pw"), Err("email address is not valid"), "{email}");
    }
}

// =============================================================================
// status mapping
// =============================================================================

#[test]
fn backend_error_to_status_mapping() {
    let rejected = BackendError::Response { status: 422, message: "User already registered".into() };
    let outage = BackendError::Response { status: 503, message: "down".into() };
    assert_eq!(backend_error_to_status(&BackendError::Unauthorized), StatusCode::UNAUTHORIZED);
    assert_eq!(backend_error_to_status(&rejected), StatusCode::BAD_REQUEST);
    assert_eq!(backend_error_to_status(&outage), StatusCode::BAD_GATEWAY);
    assert_eq!(backend_error_to_status(&BackendError::Request("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(backend_error_to_status(&BackendError::Parse("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        backend_error_to_status(&BackendError::HttpClientBuild("x".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn sign_in_rejections_become_unauthorized() {
    let rejected = BackendError::Response { status: 400, message: "Invalid login credentials".into() };
    assert_eq!(sign_in_error_to_status(&rejected), StatusCode::UNAUTHORIZED);
    assert_eq!(sign_in_error_to_status(&BackendError::Request("x".into())), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookies_are_http_only_and_scoped_to_root() {
    let jar = with_session(CookieJar::new(), &session("acc", "ref", user("u-1")), true);
    let access = jar.get(ACCESS_COOKIE).unwrap();
    assert_eq!(access.value(), "acc");
    assert_eq!(access.http_only(), Some(true));
    assert_eq!(access.secure(), Some(true));
    assert_eq!(access.path(), Some("/"));
    assert_eq!(access.same_site(), Some(SameSite::Lax));
    assert_eq!(access.max_age(), Some(Duration::seconds(3600)));

    let refresh = jar.get(REFRESH_COOKIE).unwrap();
    assert_eq!(refresh.value(), "ref");
    assert_eq!(refresh.max_age(), Some(Duration::days(30)));
}

#[test]
fn cleared_session_cookies_expire_immediately() {
    let jar = without_session(CookieJar::new(), false);
    for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
        let cookie = jar.get(name).unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.secure(), Some(false));
    }
}

// =============================================================================
// AuthUser extractor
// =============================================================================

#[tokio::test]
async fn extractor_accepts_valid_access_token() {
    let (state, _) = test_app_state(MockBackend::with_user("good", user("u-1")));
    let auth = extract(&state, Some("vb_access_token=good")).await.unwrap();
    assert_eq!(auth.user.id, "u-1");
    assert_eq!(auth.access_token, "good");
    assert!(auth.refreshed.is_none());
}

#[tokio::test]
async fn extractor_rejects_missing_cookies() {
    let (state, _) = test_app_state(MockBackend::default());
    assert_eq!(extract(&state, None).await.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_refreshes_expired_access_token_once() {
    let (state, mock) = test_app_state(MockBackend::default());
    mock.add_refresh("ref-1", session("fresh", "ref-2", user("u-1")));

    let auth = extract(&state, Some("vb_access_token=stale; vb_refresh_token=ref-1")).await.unwrap();
    assert_eq!(auth.access_token, "fresh");
    assert_eq!(auth.refreshed.as_ref().map(|s| s.refresh_token.as_str()), Some("ref-2"));

    let jar = auth.persist(CookieJar::new(), false);
    assert_eq!(jar.get(ACCESS_COOKIE).map(Cookie::value), Some("fresh"));

    // The refresh token was single-use.
    let again = extract(&state, Some("vb_access_token=stale; vb_refresh_token=ref-1")).await;
    assert_eq!(again.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn extractor_refreshes_when_only_refresh_cookie_remains() {
    let (state, mock) = test_app_state(MockBackend::default());
    mock.add_refresh("ref-1", session("fresh", "ref-2", user("u-7")));
    let auth = extract(&state, Some("vb_refresh_token=ref-1")).await.unwrap();
    assert_eq!(auth.user.id, "u-7");
}

#[tokio::test]
async fn extractor_maps_backend_outage_to_bad_gateway() {
    let (state, _) = test_app_state(MockBackend { offline: true, ..MockBackend::default() });
    let result = extract(&state, Some("vb_access_token=any")).await;
    assert_eq!(result.err(), Some(StatusCode::BAD_GATEWAY));
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn sign_in_sets_cookies_and_returns_user() {
    let (state, _) = test_app_state(MockBackend::default());
    let response = sign_in(State(state), CookieJar::new(), sign_in_body(" ada@example.com ", GOOD_PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("vb_access_token=access-new")));
    assert!(cookies.iter().any(|c| c.starts_with("vb_refresh_token=refresh-new")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));

    let body = body_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn sign_in_wrong_password_is_unauthorized_with_message() {
    let (state, _) = test_app_state(MockBackend::default());
    let response = sign_in(State(state), CookieJar::new(), sign_in_body("ada@example.com", "nope")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());
    assert_eq!(body_json(response).await["error"], "Invalid login credentials");
}

#[tokio::test]
async fn sign_in_invalid_input_is_bad_request() {
    let (state, _) = test_app_state(MockBackend::default());
    let response = sign_in(State(state), CookieJar::new(), sign_in_body("not-an-email", "pw")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "email address is not valid");
}

#[tokio::test]
async fn sign_in_backend_outage_is_bad_gateway_with_generic_message() {
    let (state, _) = test_app_state(MockBackend { offline: true, ..MockBackend::default() });
    let response = sign_in(State(state), CookieJar::new(), sign_in_body("ada@example.com", GOOD_PASSWORD)).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let error = body_json(response).await["error"].as_str().unwrap().to_owned();
    assert!(!error.contains("connection refused"));
}

#[tokio::test]
async fn sign_up_pending_confirmation_sets_no_cookies() {
    let (state, _) = test_app_state(MockBackend::default());
    let response = sign_up(State(state), CookieJar::new(), sign_up_body("new@example.com", Some(" Ada "))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());

    let body = body_json(response).await;
    assert_eq!(body["confirmation_required"], true);
    assert_eq!(body["user"]["first_name"], "Ada");
    assert!(body["user"]["last_name"].is_null());
}

#[tokio::test]
async fn sign_up_with_immediate_session_signs_in() {
    let mock = MockBackend::default();
    let created = session("acc", "ref", user("u-5"));
    *mock.sign_up_result.lock().unwrap() = Some(Ok(SignUpResult { user: created.user.clone(), session: Some(created) }));
    let (state, _) = test_app_state(mock);

    let response = sign_up(State(state), CookieJar::new(), sign_up_body("u-5@example.com", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).iter().any(|c| c.starts_with("vb_access_token=acc")));
    assert_eq!(body_json(response).await["confirmation_required"], false);
}

#[tokio::test]
async fn sign_up_rejection_relays_backend_message() {
    let mock = MockBackend::default();
    *mock.sign_up_result.lock().unwrap() =
        Some(Err(BackendError::Response { status: 422, message: "User already registered".to_owned() }));
    let (state, _) = test_app_state(mock);

    let response = sign_up(State(state), CookieJar::new(), sign_up_body("taken@example.com", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "User already registered");
}

#[tokio::test]
async fn sign_out_revokes_and_clears_cookies() {
    let (state, mock) = test_app_state(MockBackend::with_user("tok", user("u-1")));
    let jar = CookieJar::new().add(Cookie::new(ACCESS_COOKIE, "tok"));

    let response = sign_out(State(state), jar).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(mock.signed_out.lock().unwrap().as_slice(), ["tok".to_owned()]);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn sign_out_without_session_still_succeeds() {
    let (state, mock) = test_app_state(MockBackend { offline: true, ..MockBackend::default() });
    let response = sign_out(State(state), CookieJar::new()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(mock.signed_out.lock().unwrap().is_empty());
}

#[tokio::test]
async fn me_returns_user_and_reissues_refreshed_cookies() {
    let (state, mock) = test_app_state(MockBackend::default());
    mock.add_refresh("ref-1", session("fresh", "ref-2", user("u-1")));
    let auth = extract(&state, Some("vb_refresh_token=ref-1")).await.unwrap();

    let (jar, Json(user)) = me(State(state), CookieJar::new(), auth).await;
    assert_eq!(user.id, "u-1");
    assert_eq!(jar.get(REFRESH_COOKIE).map(Cookie::value), Some("ref-2"));
}
