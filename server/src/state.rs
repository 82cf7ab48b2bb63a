//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds immutable config plus trait-object handles to the backend, so tests
//! can run every handler against in-memory mocks. Nothing in it is mutable;
//! sessions live in the browser's cookies.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::backend::{AuthApi, RecordApi};

/// Clone is required by Axum; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<dyn AuthApi>,
    pub records: Arc<dyn RecordApi>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, auth: Arc<dyn AuthApi>, records: Arc<dyn RecordApi>) -> Self {
        Self { config: Arc::new(config), auth, records }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use client::net::types::User;

    use super::*;
    use crate::config::BackendTimeouts;
    use crate::services::backend::{BackendError, Query, Session, SignUpResult};

    pub const GOOD_PASSWORD: &str = "correct-horse";

    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            backend_url: "http://backend.invalid".to_owned(),
            anon_key: "anon".to_owned(),
            port: 0,
            cookie_secure: false,
            site_url: None,
            timeouts: BackendTimeouts { request_secs: 1, connect_secs: 1 },
        }
    }

    #[must_use]
    pub fn user(id: &str) -> User {
        User {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
            first_name: None,
            last_name: None,
        }
    }

    #[must_use]
    pub fn session(access: &str, refresh: &str, user: User) -> Session {
        Session { access_token: access.to_owned(), refresh_token: refresh.to_owned(), expires_in: 3600, user }
    }

    /// In-memory backend implementing both traits.
    ///
    /// Access tokens in `users` are valid; refresh tokens in `refreshes` can be
    /// exchanged once. `rows` maps table name to the JSON rows it returns, and
    /// `failing_tables` makes selects on a table fail.
    #[derive(Default)]
    pub struct MockBackend {
        pub users: Mutex<HashMap<String, User>>,
        pub refreshes: Mutex<HashMap<String, Session>>,
        pub sign_up_result: Mutex<Option<Result<SignUpResult, BackendError>>>,
        pub rows: HashMap<&'static str, Vec<serde_json::Value>>,
        pub failing_tables: Vec<&'static str>,
        pub signed_out: Mutex<Vec<String>>,
        pub queries: Mutex<Vec<Query>>,
        pub offline: bool,
    }

    impl MockBackend {
        #[must_use]
        pub fn with_user(access: &str, user: User) -> Self {
            let mock = Self::default();
            mock.users.lock().unwrap().insert(access.to_owned(), user);
            mock
        }

        pub fn add_refresh(&self, refresh: &str, session: Session) {
            self.refreshes.lock().unwrap().insert(refresh.to_owned(), session);
        }

        fn reachable(&self) -> Result<(), BackendError> {
            if self.offline { Err(BackendError::Request("connection refused".to_owned())) } else { Ok(()) }
        }
    }

    #[async_trait::async_trait]
    impl AuthApi for MockBackend {
        async fn sign_up(
            &self,
            email: &str,
            _password: &str,
            first_name: Option<&str>,
            last_name: Option<&str>,
        ) -> Result<SignUpResult, BackendError> {
            self.reachable()?;
            if let Some(result) = self.sign_up_result.lock().unwrap().take() {
                return result;
            }
            let user = User {
                id: "new-user".to_owned(),
                email: Some(email.to_owned()),
                first_name: first_name.map(str::to_owned),
                last_name: last_name.map(str::to_owned),
            };
            Ok(SignUpResult { user, session: None })
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
            self.reachable()?;
            if password != GOOD_PASSWORD {
                return Err(BackendError::Response { status: 400, message: "Invalid login credentials".to_owned() });
            }
            let user = User { email: Some(email.to_owned()), ..user("signed-in") };
            self.users.lock().unwrap().insert("access-new".to_owned(), user.clone());
            Ok(session("access-new", "refresh-new", user))
        }

        async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
            self.reachable()?;
            self.users.lock().unwrap().remove(access_token);
            self.signed_out.lock().unwrap().push(access_token.to_owned());
            Ok(())
        }

        async fn get_user(&self, access_token: &str) -> Result<User, BackendError> {
            self.reachable()?;
            self.users.lock().unwrap().get(access_token).cloned().ok_or(BackendError::Unauthorized)
        }

        async fn refresh(&self, refresh_token: &str) -> Result<Session, BackendError> {
            self.reachable()?;
            let session = self.refreshes.lock().unwrap().remove(refresh_token).ok_or(BackendError::Unauthorized)?;
            self.users
                .lock()
                .unwrap()
                .insert(session.access_token.clone(), session.user.clone());
            Ok(session)
        }
    }

    #[async_trait::async_trait]
    impl RecordApi for MockBackend {
        async fn select(&self, access_token: &str, query: &Query) -> Result<Vec<serde_json::Value>, BackendError> {
            self.reachable()?;
            self.queries.lock().unwrap().push(query.clone());
            if !self.users.lock().unwrap().contains_key(access_token) {
                return Err(BackendError::Unauthorized);
            }
            if self.failing_tables.contains(&query.table) {
                return Err(BackendError::Response { status: 500, message: "relation is broken".to_owned() });
            }
            Ok(self.rows.get(query.table).cloned().unwrap_or_default())
        }
    }

    /// Build an `AppState` whose auth and record handles share one mock.
    #[must_use]
    pub fn test_app_state(mock: MockBackend) -> (AppState, Arc<MockBackend>) {
        let mock = Arc::new(mock);
        let state = AppState::new(test_config(), mock.clone(), mock.clone());
        (state, mock)
    }
}
