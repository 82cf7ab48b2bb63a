//! Landing page header and footer.

use leptos::prelude::*;

use super::icon::{Icon, IconKind};
use crate::util::auth::{AUTH_ROUTE, DASHBOARD_ROUTE, HOME_ROUTE};

/// Logo mark plus wordmark, shared by every page.
#[component]
pub fn Logo(#[prop(optional)] large: bool) -> impl IntoView {
    view! {
        <span class="logo" class:logo--large=large>
            <span class="logo__mark">
                <Icon kind=IconKind::Bug/>
            </span>
            <span class="logo__word">"VisualBug"</span>
        </span>
    }
}

/// Fixed top navigation with in-page anchors and an auth-aware action link.
#[component]
pub fn SiteHeader(#[prop(into)] signed_in: Signal<bool>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a class="site-header__home" href=HOME_ROUTE>
                    <Logo/>
                </a>
                <nav class="site-header__nav">
                    <a href="#features">"Features"</a>
                    <a href="#how-it-works">"How It Works"</a>
                </nav>
                <a
                    class="btn btn--hero btn--sm"
                    href=move || if signed_in.get() { DASHBOARD_ROUTE } else { AUTH_ROUTE }
                >
                    {move || if signed_in.get() { "Dashboard" } else { "Sign In" }}
                </a>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <Logo/>
                <span class="text-muted">"Find UI bugs before users do."</span>
            </div>
        </footer>
    }
}
