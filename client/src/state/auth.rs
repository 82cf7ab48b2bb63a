//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components (hero CTA, site header,
//! dashboard header) to coordinate redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Tri-state view of the auth condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// The current-user lookup has not settled yet.
    Loading,
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the current user and loading status.
///
/// Provided app-wide as an `RwSignal<AuthState>` context.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the first `/api/auth/me` lookup resolves.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// A known user wins over `loading`.
    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        match (&self.user, self.loading) {
            (Some(_), _) => AuthPhase::Authenticated,
            (None, true) => AuthPhase::Loading,
            (None, false) => AuthPhase::Anonymous,
        }
    }
}
