//! Sign-in / sign-up page at `/auth`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials are posted to the server, which relays them to the backend and
//! sets the session cookies. On success the shared `AuthState` is updated and
//! the route guard moves the user on to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icon::{Icon, IconKind};
use crate::components::site_chrome::Logo;
use crate::components::spinner::Spinner;
use crate::net::types::{SignInRequest, SignUpOutcome, SignUpRequest};
use crate::state::auth::{AuthPhase, AuthState};
use crate::util::auth::{HOME_ROUTE, install_redirect, redirect_from_auth_page};

pub const CONFIRM_EMAIL_NOTICE: &str = "Check your email to confirm your account";
const MISSING_CREDENTIALS: &str = "Enter your email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    SignIn,
    SignUp,
}

/// Inline feedback under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Info(String),
    Error(String),
}

impl FormMessage {
    fn class(&self) -> &'static str {
        match self {
            Self::Info(_) => "auth-form__message auth-form__message--info",
            Self::Error(_) => "auth-form__message auth-form__message--error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

/// Submit button label for a tab, reflecting whether a request is in flight.
#[must_use]
pub fn submit_label(tab: AuthTab, busy: bool) -> &'static str {
    match (tab, busy) {
        (AuthTab::SignIn, false) => "Sign In",
        (AuthTab::SignIn, true) => "Signing in...",
        (AuthTab::SignUp, false) => "Create Account",
        (AuthTab::SignUp, true) => "Creating account...",
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(email.to_owned())
}

fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
}

fn optional_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Build a sign-in body from raw form input.
///
/// # Errors
///
/// Returns the message to show when either field is missing or the email is malformed.
pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, &'static str> {
    let email = validate_credentials(email, password)?;
    Ok(SignInRequest { email, password: password.to_owned() })
}

/// Build a sign-up body from raw form input. Blank names are sent as absent.
///
/// # Errors
///
/// Returns the message to show when email or password is missing or the email is malformed.
pub fn validate_sign_up(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<SignUpRequest, &'static str> {
    let email = validate_credentials(email, password)?;
    Ok(SignUpRequest {
        email,
        password: password.to_owned(),
        first_name: optional_name(first_name),
        last_name: optional_name(last_name),
    })
}

/// Notice to show after a sign-up that did not start a session.
#[must_use]
pub fn sign_up_notice(outcome: &SignUpOutcome) -> Option<&'static str> {
    outcome.confirmation_required.then_some(CONFIRM_EMAIL_NOTICE)
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, redirect_from_auth_page, use_navigate());

    let tab = RwSignal::new(AuthTab::SignIn);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<FormMessage>);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());

    let select_tab = move |next: AuthTab| {
        tab.set(next);
        message.set(None);
    };

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_sign_in(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                message.set(Some(FormMessage::Error(e.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&request).await {
                Ok(user) => auth.set(AuthState::signed_in(user)),
                Err(e) => message.set(Some(FormMessage::Error(e))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_sign_up(&first_name.get(), &last_name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                message.set(Some(FormMessage::Error(e.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&request).await {
                Ok(outcome) => match sign_up_notice(&outcome) {
                    Some(notice) => message.set(Some(FormMessage::Info(notice.to_owned()))),
                    None => auth.set(AuthState::signed_in(outcome.user)),
                },
                Err(e) => message.set(Some(FormMessage::Error(e))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let feedback = move || {
        message.get().map(|m| {
            view! { <p class=m.class() role="alert">{m.text().to_owned()}</p> }
        })
    };

    view! {
        <Show when=move || auth.get().phase() != AuthPhase::Loading fallback=|| view! { <Spinner/> }>
            <div class="auth-page">
                <header class="auth-page__header">
                    <a class="auth-page__back" href=HOME_ROUTE>
                        <Icon kind=IconKind::ArrowLeft class="icon--sm"/>
                        <span>"Back to home"</span>
                    </a>
                </header>
                <div class="auth-page__body">
                    <div class="auth-page__logo">
                        <Logo large=true/>
                    </div>
                    <div class="card auth-card">
                        <div class="auth-card__header">
                            <h1 class="auth-card__title">"Welcome"</h1>
                            <p class="auth-card__description">
                                "Sign in to your account or create a new one to get started"
                            </p>
                        </div>
                        <div class="tabs" role="tablist">
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == AuthTab::SignIn
                                role="tab"
                                on:click=move |_| select_tab(AuthTab::SignIn)
                            >
                                "Sign In"
                            </button>
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == AuthTab::SignUp
                                role="tab"
                                on:click=move |_| select_tab(AuthTab::SignUp)
                            >
                                "Sign Up"
                            </button>
                        </div>
                        <Show
                            when=move || tab.get() == AuthTab::SignIn
                            fallback=move || {
                                view! {
                                    <form class="auth-form" on:submit=on_sign_up>
                                        <div class="auth-form__row">
                                            <label class="auth-form__field">
                                                <span>"First Name"</span>
                                                <input
                                                    class="input"
                                                    name="firstName"
                                                    placeholder="John"
                                                    prop:value=move || first_name.get()
                                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <label class="auth-form__field">
                                                <span>"Last Name"</span>
                                                <input
                                                    class="input"
                                                    name="lastName"
                                                    placeholder="Doe"
                                                    prop:value=move || last_name.get()
                                                    on:input=move |ev| last_name.set(event_target_value(&ev))
                                                />
                                            </label>
                                        </div>
                                        <label class="auth-form__field">
                                            <span>"Email"</span>
                                            <input
                                                class="input"
                                                type="email"
                                                name="email"
                                                placeholder="Enter your email"
                                                required
                                                prop:value=move || email.get()
                                                on:input=move |ev| email.set(event_target_value(&ev))
                                            />
                                        </label>
                                        <label class="auth-form__field">
                                            <span>"Password"</span>
                                            <input
                                                class="input"
                                                type="password"
                                                name="password"
                                                placeholder="Create a password"
                                                required
                                                prop:value=move || password.get()
                                                on:input=move |ev| password.set(event_target_value(&ev))
                                            />
                                        </label>
                                        <button class="btn btn--hero btn--block" type="submit" disabled=move || busy.get()>
                                            {move || submit_label(AuthTab::SignUp, busy.get())}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <form class="auth-form" on:submit=on_sign_in>
                                <label class="auth-form__field">
                                    <span>"Email"</span>
                                    <input
                                        class="input"
                                        type="email"
                                        name="email"
                                        placeholder="Enter your email"
                                        required
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-form__field">
                                    <span>"Password"</span>
                                    <input
                                        class="input"
                                        type="password"
                                        name="password"
                                        placeholder="Enter your password"
                                        required
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--hero btn--block" type="submit" disabled=move || busy.get()>
                                    {move || submit_label(AuthTab::SignIn, busy.get())}
                                </button>
                            </form>
                        </Show>
                        {feedback}
                    </div>
                </div>
            </div>
        </Show>
    }
}
