//! Shared auth routing rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in page and the dashboard apply mirror-image redirects. The rules
//! are pure functions over `AuthState`; the installers wire them to the
//! router so every route guard behaves identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthPhase, AuthState};

pub const AUTH_ROUTE: &str = "/auth";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const HOME_ROUTE: &str = "/";

/// Where the sign-in page should send the user, if anywhere.
///
/// A signed-in user has nothing to do on `/auth`.
#[must_use]
pub fn redirect_from_auth_page(state: &AuthState) -> Option<&'static str> {
    match state.phase() {
        AuthPhase::Authenticated => Some(DASHBOARD_ROUTE),
        AuthPhase::Loading | AuthPhase::Anonymous => None,
    }
}

/// Where the dashboard should send the user, if anywhere.
///
/// Waits for the current-user lookup to settle before deciding.
#[must_use]
pub fn redirect_from_dashboard(state: &AuthState) -> Option<&'static str> {
    match state.phase() {
        AuthPhase::Anonymous => Some(AUTH_ROUTE),
        AuthPhase::Loading | AuthPhase::Authenticated => None,
    }
}

/// Label and target of the hero's primary call to action.
#[must_use]
pub fn primary_cta(state: &AuthState) -> (&'static str, &'static str) {
    if state.user.is_some() {
        ("Go to Dashboard", DASHBOARD_ROUTE)
    } else {
        ("Start Free Trial", AUTH_ROUTE)
    }
}

/// Re-run `rule` whenever auth changes and navigate (replacing history) when it fires.
pub fn install_redirect<F>(auth: RwSignal<AuthState>, rule: fn(&AuthState) -> Option<&'static str>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = rule(&auth.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
